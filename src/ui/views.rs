//! Text renderings of records, timesheet and summary for the terminal.

use crate::core::summary::{
    ChartBar, PayrollSummary, TeamLoad, chart_data, team_distribution, workload_ranking,
};
use crate::models::{Pivot, ShiftRecord, Team};
use crate::utils::colors::colorize_cell;
use crate::utils::date::{day_name, period_title};
use crate::utils::formatting::{cell_text, fmt_hours, pad_left, pad_right};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;
use unicode_width::UnicodeWidthStr;

const BAR_WIDTH: usize = 40;

/// Colours are on unless NO_COLOR is set.
pub fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn render_records<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a ShiftRecord>,
{
    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::left("Day"),
        Column::left("Worker"),
        Column::left("Position"),
        Column::right("Hours"),
        Column::left("Code"),
        Column::left("Shift"),
    ]);

    for r in records {
        table.add_row(vec![
            r.date_str(),
            day_name(r.date).to_string(),
            r.worker.clone(),
            r.position.clone(),
            r.hours.to_string(),
            r.code.as_str().to_string(),
            r.label.clone(),
        ]);
    }

    if table.rows.is_empty() {
        return "No records match the selection.\n".to_string();
    }

    table.render()
}

/// Timesheet grouped by team: one table per team with day numbers, day
/// names, the per-day cells and the Total / OT columns.
pub fn render_timesheet(pivot: &Pivot, team: Option<Team>, color: bool) -> String {
    let mut out = format!(
        "Payroll Timesheet - {}\n",
        period_title(pivot.year, pivot.month)
    );

    let teams: Vec<Team> = match team {
        Some(t) => vec![t],
        None => Team::ALL.to_vec(),
    };

    for t in teams {
        let rows: Vec<_> = pivot.team_rows(t).collect();
        if rows.is_empty() {
            continue;
        }

        out.push_str(&format!("\n== {} ({} workers)\n", t.label(), rows.len()));

        let mut columns = vec![Column::left("Worker"), Column::left("Position")];
        columns.extend((1..=pivot.days_in_month).map(|d| Column::right(&d.to_string())));
        columns.push(Column::right("Total"));
        columns.push(Column::right("OT"));

        let mut table = Table::new(columns);

        let mut names = vec![String::new(), String::new()];
        names.extend((1..=pivot.days_in_month).map(|d| {
            NaiveDate::from_ymd_opt(pivot.year, pivot.month, d)
                .map(|date| day_name(date).to_string())
                .unwrap_or_default()
        }));
        table.set_subheader(names);

        for row in &rows {
            let mut cells = vec![row.name.clone(), row.position.clone()];
            cells.extend((1..=pivot.days_in_month).map(|d| cell_text(&row.day(d))));
            cells.push(row.total_hours.to_string());
            cells.push(fmt_hours(row.total_overtime));
            table.add_row(cells);
        }

        let days = pivot.days_in_month as usize;
        let rendered = table.render_with(|r, c, padded| {
            if !color || c < 2 || c >= 2 + days {
                return padded;
            }
            let cell = rows[r].day((c - 1) as u32);
            colorize_cell(&padded, cell.code, cell.overtime > 0.0)
        });
        out.push_str(&rendered);
    }

    out
}

/// Totals, hours-by-worker chart, workload per team and the worker ranking
/// by hours + overtime.
pub fn render_summary(pivot: &Pivot) -> String {
    let summary = PayrollSummary::from_pivot(pivot);
    let chart = chart_data(pivot);

    let mut out = String::new();

    out.push_str(&format!("Total Workers  : {}\n", summary.total_workers));
    out.push_str(&format!("Days in Month  : {}\n", summary.days_in_month));
    out.push_str(&format!("Total Hours    : {}\n", summary.total_hours));
    out.push_str(&format!(
        "Total Overtime : {}\n",
        fmt_hours(summary.total_overtime)
    ));

    if chart.is_empty() {
        return out;
    }

    out.push_str("\nHours Distribution by Worker\n\n");
    out.push_str(&render_chart(&chart));

    out.push_str("\nWorkload by Team (hours + overtime)\n\n");
    out.push_str(&render_team_loads(&team_distribution(pivot)));

    out.push_str("\nWorker Ranking (hours + overtime)\n\n");
    out.push_str(&render_ranking(&workload_ranking(pivot)));

    out
}

fn render_chart(chart: &[ChartBar]) -> String {
    let mut out = String::new();

    let max_hours = chart.iter().map(|b| b.hours).max().unwrap_or(0).max(1);
    let name_w = chart
        .iter()
        .map(|b| UnicodeWidthStr::width(b.name.as_str()))
        .max()
        .unwrap_or(0);

    for bar in chart {
        let len = (bar.hours as usize * BAR_WIDTH) / max_hours as usize;
        let mut line = format!(
            "{} | {}{} {}",
            pad_right(&bar.name, name_w),
            "█".repeat(len),
            " ".repeat(BAR_WIDTH - len),
            pad_left(&bar.hours.to_string(), 3)
        );
        if bar.overtime > 0.0 {
            line.push_str(&format!(" +{} OT", fmt_hours(bar.overtime)));
        }
        out.push_str(&line);
        out.push('\n');
    }

    out
}

fn render_team_loads(loads: &[TeamLoad]) -> String {
    let total: f64 = loads.iter().map(|l| l.value).sum();

    let mut table = Table::new(vec![
        Column::left("Team"),
        Column::right("Hours"),
        Column::right("Share"),
    ]);

    for load in loads {
        let share = if total > 0.0 {
            load.value * 100.0 / total
        } else {
            0.0
        };
        table.add_row(vec![
            load.name.to_string(),
            fmt_hours(load.value),
            format!("{share:.1}%"),
        ]);
    }

    table.render()
}

fn render_ranking(ranking: &[ChartBar]) -> String {
    let mut table = Table::new(vec![
        Column::right("#"),
        Column::left("Worker"),
        Column::right("Hours"),
        Column::right("OT"),
        Column::right("Total"),
    ]);

    for (i, bar) in ranking.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            bar.full_name.clone(),
            bar.hours.to_string(),
            fmt_hours(bar.overtime),
            fmt_hours(bar.workload()),
        ]);
    }

    table.render()
}
