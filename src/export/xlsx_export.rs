// src/export/xlsx_export.rs

use crate::core::summary::{chart_data, team_distribution, workload_ranking};
use crate::errors::{AppError, AppResult};
use crate::export::model::get_headers;
use crate::export::notify_export_success;
use crate::models::{Pivot, ShiftCode};
use crate::ui::messages::info;
use crate::utils::date::period_title;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX: "Timesheet" sheet (hours per day, totals) and "Chart" sheet
/// (hours and overtime per worker, most hours first).
pub(crate) fn export_xlsx(pivot: &Pivot, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x1E3A5F))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Timesheet").map_err(to_app_error)?;
        write_timesheet(sheet, pivot, &header_format)?;
    }

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Chart").map_err(to_app_error)?;
        write_chart(sheet, pivot, &header_format)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_timesheet(sheet: &mut Worksheet, pivot: &Pivot, header_format: &Format) -> AppResult<()> {
    sheet
        .write_with_format(
            0,
            0,
            format!(
                "Payroll Timesheet - {}",
                period_title(pivot.year, pivot.month)
            ),
            &Format::new().set_bold(),
        )
        .map_err(to_app_error)?;

    // ---------------------------
    // Header (row 2)
    // ---------------------------
    let headers = get_headers(pivot.days_in_month);
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_with_format(2, col as u16, header.as_str(), header_format)
            .map_err(to_app_error)?;
    }
    sheet.set_freeze_panes(3, 2).ok();

    let mut col_widths: Vec<usize> = headers
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (i, row) in pivot.rows.iter().enumerate() {
        let r = (i + 3) as u32;
        let bg = if i % 2 == 0 { band1 } else { band2 };

        let text = cell_format(bg);
        let num = cell_format(bg).set_align(FormatAlign::Right);

        sheet
            .write_with_format(r, 0, row.name.as_str(), &text)
            .map_err(to_app_error)?;
        sheet
            .write_with_format(r, 1, row.position.as_str(), &text)
            .map_err(to_app_error)?;
        col_widths[0] = col_widths[0].max(UnicodeWidthStr::width(row.name.as_str()));
        col_widths[1] = col_widths[1].max(UnicodeWidthStr::width(row.position.as_str()));

        for day in 1..=pivot.days_in_month {
            let cell = row.day(day);
            let col = (day + 1) as u16;

            if cell.hours > 0 {
                sheet
                    .write_with_format(r, col, cell.hours as f64, &num)
                    .map_err(to_app_error)?;
            } else if cell.code == ShiftCode::Rest {
                sheet
                    .write_with_format(r, col, "S", &text)
                    .map_err(to_app_error)?;
            } else {
                sheet.write_blank(r, col, &text).map_err(to_app_error)?;
            }
        }

        let total_col = (pivot.days_in_month + 2) as u16;
        sheet
            .write_with_format(r, total_col, row.total_hours as f64, &num)
            .map_err(to_app_error)?;
        sheet
            .write_with_format(r, total_col + 1, row.total_overtime, &num)
            .map_err(to_app_error)?;
    }

    for (c, w) in col_widths.iter().enumerate() {
        sheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    Ok(())
}

fn write_chart(sheet: &mut Worksheet, pivot: &Pivot, header_format: &Format) -> AppResult<()> {
    // A-C: hours by worker, E-F: workload per team, H-K: ranking
    let headers: [(u16, &str); 9] = [
        (0, "Worker"),
        (1, "Hours"),
        (2, "Overtime"),
        (4, "Team"),
        (5, "Hours + Overtime"),
        (7, "Rank"),
        (8, "Worker"),
        (9, "Overtime"),
        (10, "Hours + Overtime"),
    ];
    for (col, header) in headers {
        sheet
            .write_with_format(0, col, header, header_format)
            .map_err(to_app_error)?;
    }

    let mut name_width = UnicodeWidthStr::width("Worker");

    for (i, bar) in chart_data(pivot).iter().enumerate() {
        let r = (i + 1) as u32;
        sheet
            .write(r, 0, bar.full_name.as_str())
            .map_err(to_app_error)?;
        sheet.write(r, 1, bar.hours as f64).map_err(to_app_error)?;
        sheet.write(r, 2, bar.overtime).map_err(to_app_error)?;
        name_width = name_width.max(UnicodeWidthStr::width(bar.full_name.as_str()));
    }

    for (i, load) in team_distribution(pivot).iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write(r, 4, load.name).map_err(to_app_error)?;
        sheet.write(r, 5, load.value).map_err(to_app_error)?;
    }

    for (i, bar) in workload_ranking(pivot).iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write(r, 7, r as f64).map_err(to_app_error)?;
        sheet
            .write(r, 8, bar.full_name.as_str())
            .map_err(to_app_error)?;
        sheet.write(r, 9, bar.overtime).map_err(to_app_error)?;
        sheet.write(r, 10, bar.workload()).map_err(to_app_error)?;
    }

    for col in [0, 8] {
        sheet
            .set_column_width(col, name_width as f64 + 2.0)
            .map_err(to_app_error)?;
    }
    sheet
        .set_column_width(4, UnicodeWidthStr::width("Regular Staff") as f64 + 2.0)
        .map_err(to_app_error)?;
    for col in [5, 10] {
        sheet
            .set_column_width(col, UnicodeWidthStr::width("Hours + Overtime") as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    Ok(())
}

fn cell_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
