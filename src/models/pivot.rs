use super::shift::ShiftCode;
use super::team::Team;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated cell for one worker on one day.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DayCell {
    pub hours: u32,
    pub code: ShiftCode,
    pub label: String,
    pub overtime: f64,
}

/// Per-worker row of the pivot table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PivotRow {
    pub name: String,
    pub position: String,
    pub team: Team,
    pub days: BTreeMap<u32, DayCell>,
    pub total_hours: u32,
    pub total_overtime: f64,
}

impl PivotRow {
    /// Cell for `day`; days outside the month read as an empty cell.
    pub fn day(&self, day: u32) -> DayCell {
        self.days.get(&day).cloned().unwrap_or_default()
    }
}

/// Hours-by-day table for every worker of the roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pivot {
    pub year: i32,
    pub month: u32,
    pub days_in_month: u32,
    pub rows: Vec<PivotRow>,
}

impl Pivot {
    pub fn row(&self, name: &str) -> Option<&PivotRow> {
        self.rows.iter().find(|r| r.name == name)
    }

    pub fn team_rows(&self, team: Team) -> impl Iterator<Item = &PivotRow> {
        self.rows.iter().filter(move |r| r.team == team)
    }

    pub fn total_hours(&self) -> u32 {
        self.rows.iter().map(|r| r.total_hours).sum()
    }

    pub fn total_overtime(&self) -> f64 {
        self.rows.iter().map(|r| r.total_overtime).sum()
    }
}
