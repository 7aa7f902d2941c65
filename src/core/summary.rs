use crate::models::{Pivot, Team};
use serde::Serialize;

/// Month totals shown above the timesheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayrollSummary {
    pub total_workers: usize,
    pub days_in_month: u32,
    pub total_hours: u32,
    pub total_overtime: f64,
}

impl PayrollSummary {
    pub fn from_pivot(pivot: &Pivot) -> Self {
        Self {
            total_workers: pivot.rows.len(),
            days_in_month: pivot.days_in_month,
            total_hours: pivot.total_hours(),
            total_overtime: pivot.total_overtime(),
        }
    }
}

/// One bar of the hours-by-worker chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub name: String,
    pub full_name: String,
    pub hours: u32,
    pub overtime: f64,
}

impl ChartBar {
    pub fn workload(&self) -> f64 {
        self.hours as f64 + self.overtime
    }
}

fn bars(pivot: &Pivot) -> Vec<ChartBar> {
    pivot
        .rows
        .iter()
        .map(|r| ChartBar {
            name: r.name.split(' ').next().unwrap_or(&r.name).to_string(),
            full_name: r.name.clone(),
            hours: r.total_hours,
            overtime: r.total_overtime,
        })
        .collect()
}

/// Hours per worker, most hours first. Ties keep roster order.
pub fn chart_data(pivot: &Pivot) -> Vec<ChartBar> {
    let mut bars = bars(pivot);
    bars.sort_by(|a, b| b.hours.cmp(&a.hours));
    bars
}

/// Hours plus overtime booked by one team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamLoad {
    pub team: Team,
    pub name: &'static str,
    pub value: f64,
}

/// Workload per team (hours + overtime), always all four teams in display
/// order, empty teams included.
pub fn team_distribution(pivot: &Pivot) -> Vec<TeamLoad> {
    Team::ALL
        .iter()
        .map(|&team| TeamLoad {
            team,
            name: team.label(),
            value: pivot
                .team_rows(team)
                .map(|r| r.total_hours as f64 + r.total_overtime)
                .sum(),
        })
        .collect()
}

/// Workers by hours + overtime, heaviest first. Ties keep roster order.
pub fn workload_ranking(pivot: &Pivot) -> Vec<ChartBar> {
    let mut bars = bars(pivot);
    bars.sort_by(|a, b| b.workload().total_cmp(&a.workload()));
    bars
}
