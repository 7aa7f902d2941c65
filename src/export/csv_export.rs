use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, row_to_cells};
use crate::export::notify_export_success;
use crate::models::Pivot;
use crate::ui::messages::info;
use crate::utils::date::period_title;
use csv::{QuoteStyle, WriterBuilder};
use std::fs;
use std::path::Path;

/// Render the timesheet as CSV text.
///
/// Title line and header are plain; worker rows quote every non-numeric
/// field, so names, positions and `"12h"` cells are quoted while the totals
/// stay bare numbers.
pub fn render_csv(pivot: &Pivot) -> AppResult<String> {
    let mut buf: Vec<u8> = Vec::new();

    buf.extend_from_slice(
        format!(
            "Payroll Timesheet - {}\n\n",
            period_title(pivot.year, pivot.month)
        )
        .as_bytes(),
    );
    buf.extend_from_slice(get_headers(pivot.days_in_month).join(",").as_bytes());
    buf.push(b'\n');

    {
        let mut wtr = WriterBuilder::new()
            .quote_style(QuoteStyle::NonNumeric)
            .from_writer(&mut buf);

        for row in &pivot.rows {
            wtr.write_record(row_to_cells(row, pivot.days_in_month))?;
        }

        wtr.flush()?;
    }

    String::from_utf8(buf).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}

pub(crate) fn export_csv(pivot: &Pivot, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let content = render_csv(pivot)?;
    fs::write(path, content)?;

    notify_export_success("CSV", path);
    Ok(())
}
