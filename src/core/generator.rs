//! Monthly schedule generation.
//!
//! Pure function of (year, month, roster, start date). Before the start
//! date every worker gets an empty record; from the start date on the three
//! rotating teams follow the 15-day cycle and regular staff the
//! weekday/Saturday rule.

use crate::core::calendar::{
    self, BLOCK_LENGTH, cycle_day, days_since, is_working_day, week_number,
};
use crate::errors::AppResult;
use crate::models::shift::{REGULAR_HOURS, REGULAR_LABEL};
use crate::models::{Roster, ShiftCode, ShiftRecord, ShiftRole, Team, Worker};
use chrono::{NaiveDate, Weekday};
use serde::Serialize;

/// Records generated for one month, together with the period they cover.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    pub year: i32,
    pub month: u32,
    pub days_in_month: u32,
    pub records: Vec<ShiftRecord>,
}

impl Schedule {
    pub fn build(year: i32, month: u32, roster: &Roster, start: NaiveDate) -> AppResult<Self> {
        let records = generate(year, month, roster, start)?;
        Ok(Self {
            year,
            month,
            days_in_month: calendar::days_in_month(year, month)?,
            records,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records_for<'a>(&'a self, worker: &'a str) -> impl Iterator<Item = &'a ShiftRecord> {
        self.records.iter().filter(move |r| r.worker == worker)
    }
}

/// Generate one record per (worker, day) of the month.
///
/// Order: day ascending; within a day team 1, team 2, team 3, regular staff,
/// roster order inside each team.
pub fn generate(
    year: i32,
    month: u32,
    roster: &Roster,
    start: NaiveDate,
) -> AppResult<Vec<ShiftRecord>> {
    let days = calendar::days_in_month(year, month)?;
    let mut records = Vec::with_capacity(roster.len() * days as usize);

    for day in 1..=days {
        let date = calendar::date_of(year, month, day)?;

        if !is_working_day(date, start) {
            for worker in roster.ordered() {
                records.push(inactive_record(worker, date, day));
            }
            continue;
        }

        let elapsed = days_since(date, start);
        let roles = team_roles(cycle_day(elapsed));

        for (team, role) in Team::ROTATING.iter().zip(roles) {
            for worker in roster.members(*team) {
                records.push(ShiftRecord {
                    date,
                    worker: worker.name.clone(),
                    position: worker.position.clone(),
                    hours: role.hours(),
                    code: role.code(),
                    label: role.label().to_string(),
                    day,
                });
            }
        }

        let works = regular_works(date, elapsed);
        for worker in roster.members(Team::Regular) {
            records.push(regular_record(worker, date, day, works));
        }
    }

    Ok(records)
}

/// Roles of team 1, team 2 and team 3 for a position in the cycle.
///
/// Each 5-day block shifts the roles by one team, so over 15 days every team
/// takes every role exactly once per block.
pub fn team_roles(cycle_day: i64) -> [ShiftRole; 3] {
    match cycle_day / BLOCK_LENGTH {
        0 => [ShiftRole::Morning, ShiftRole::Night, ShiftRole::Free],
        1 => [ShiftRole::Night, ShiftRole::Free, ShiftRole::Morning],
        _ => [ShiftRole::Free, ShiftRole::Morning, ShiftRole::Night],
    }
}

/// Regular staff rest on Sundays and on every other Saturday.
pub fn regular_works(date: NaiveDate, days_since_start: i64) -> bool {
    match calendar::weekday(date) {
        Weekday::Sun => false,
        Weekday::Sat => week_number(days_since_start) % 2 == 0,
        _ => true,
    }
}

fn inactive_record(worker: &Worker, date: NaiveDate, day: u32) -> ShiftRecord {
    ShiftRecord {
        date,
        worker: worker.name.clone(),
        position: worker.position.clone(),
        hours: 0,
        code: ShiftCode::Empty,
        label: String::new(),
        day,
    }
}

fn regular_record(worker: &Worker, date: NaiveDate, day: u32, works: bool) -> ShiftRecord {
    let (hours, code, label) = if works {
        (REGULAR_HOURS, ShiftCode::Long10, REGULAR_LABEL)
    } else {
        (0, ShiftCode::Rest, "")
    };

    ShiftRecord {
        date,
        worker: worker.name.clone(),
        position: worker.position.clone(),
        hours,
        code,
        label: label.to_string(),
        day,
    }
}
