// src/export/model.rs

use crate::core::summary::{
    ChartBar, PayrollSummary, TeamLoad, chart_data, team_distribution, workload_ranking,
};
use crate::models::{Pivot, PivotRow};
use crate::utils::date::month_name;
use serde::Serialize;

/// Full timesheet document for JSON export.
#[derive(Serialize, Debug)]
pub struct TimesheetExport<'a> {
    pub year: i32,
    pub month: u32,
    pub month_name: &'static str,
    pub summary: PayrollSummary,
    pub chart: Vec<ChartBar>,
    pub teams: Vec<TeamLoad>,
    pub ranking: Vec<ChartBar>,
    pub workers: &'a [PivotRow],
}

impl<'a> TimesheetExport<'a> {
    pub fn from_pivot(pivot: &'a Pivot) -> Self {
        Self {
            year: pivot.year,
            month: pivot.month,
            month_name: month_name(pivot.month),
            summary: PayrollSummary::from_pivot(pivot),
            chart: chart_data(pivot),
            teams: team_distribution(pivot),
            ranking: workload_ranking(pivot),
            workers: &pivot.rows,
        }
    }
}

/// `Worker,Position,Day 1,...,Day N,Total Hours,Total Overtime`
pub(crate) fn get_headers(days_in_month: u32) -> Vec<String> {
    let mut headers = vec!["Worker".to_string(), "Position".to_string()];
    headers.extend((1..=days_in_month).map(|d| format!("Day {d}")));
    headers.push("Total Hours".to_string());
    headers.push("Total Overtime".to_string());
    headers
}

/// One CSV row: name, position, `"<hours>h"` per day, totals.
pub(crate) fn row_to_cells(row: &PivotRow, days_in_month: u32) -> Vec<String> {
    let mut cells = vec![row.name.clone(), row.position.clone()];
    cells.extend((1..=days_in_month).map(|d| format!("{}h", row.day(d).hours)));
    cells.push(row.total_hours.to_string());
    cells.push(row.total_overtime.to_string());
    cells
}
