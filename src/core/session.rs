//! In-memory state of one timesheet session: selected period, the generated
//! schedule and the overtime entries typed on top of it.

use crate::config::Config;
use crate::core::calendar;
use crate::core::generator::Schedule;
use crate::core::log::SessionLog;
use crate::core::overtime::coerce_overtime;
use crate::core::pivot::pivot_schedule;
use crate::core::summary::{ChartBar, PayrollSummary, chart_data};
use crate::errors::{AppError, AppResult};
use crate::models::{OvertimeMap, Pivot, Roster, ShiftRecord};
use chrono::NaiveDate;

pub struct PayrollSession {
    roster: Roster,
    start_date: NaiveDate,
    year: i32,
    month: u32,
    year_options: Vec<i32>,
    schedule: Option<Schedule>,
    overtime: OvertimeMap,
    log: SessionLog,
}

impl PayrollSession {
    pub fn new(roster: Roster, start_date: NaiveDate, year: i32, month: u32) -> AppResult<Self> {
        calendar::validate_period(year, month)?;
        Ok(Self {
            roster,
            start_date,
            year,
            month,
            year_options: Vec::new(),
            schedule: None,
            overtime: OvertimeMap::new(),
            log: SessionLog::new(),
        })
    }

    /// Session on the configured roster, start date and default period.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let mut session = Self::new(
            cfg.roster.clone(),
            cfg.start_date()?,
            cfg.default_year,
            cfg.default_month,
        )?;
        session.year_options = cfg.year_options.clone();
        Ok(session)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn period(&self) -> (i32, u32) {
        (self.year, self.month)
    }

    /// Years offered for selection; empty means no restriction.
    pub fn year_options(&self) -> &[i32] {
        &self.year_options
    }

    /// Whether `year` is one of the offered years. Other valid years are
    /// still accepted by [`set_period`](Self::set_period).
    pub fn is_offered_year(&self, year: i32) -> bool {
        self.year_options.is_empty() || self.year_options.contains(&year)
    }

    /// Change the selected period. The current schedule stays until the next
    /// [`regenerate`](Self::regenerate).
    pub fn set_period(&mut self, year: i32, month: u32) -> AppResult<()> {
        calendar::validate_period(year, month)?;
        self.year = year;
        self.month = month;
        self.log
            .record("period", &format!("{year:04}-{month:02}"), "Selected period changed");
        Ok(())
    }

    /// Replace the schedule with a fresh one for the selected period and
    /// drop every overtime entry.
    pub fn regenerate(&mut self) -> AppResult<&Schedule> {
        let schedule = Schedule::build(self.year, self.month, &self.roster, self.start_date)?;
        let count = schedule.records.len();

        self.overtime.clear();
        let schedule = self.schedule.insert(schedule);

        self.log.record(
            "generate",
            &format!("{:04}-{:02}", schedule.year, schedule.month),
            &format!("Schedule generated ({count} records)"),
        );

        Ok(schedule)
    }

    pub fn is_generated(&self) -> bool {
        self.schedule.as_ref().is_some_and(|s| !s.is_empty())
    }

    pub fn schedule(&self) -> Option<&Schedule> {
        self.schedule.as_ref()
    }

    pub fn records(&self) -> &[ShiftRecord] {
        self.schedule
            .as_ref()
            .map(|s| s.records.as_slice())
            .unwrap_or(&[])
    }

    pub fn overtime(&self) -> &OvertimeMap {
        &self.overtime
    }

    /// Overwrite one overtime cell from free text. Returns the stored value.
    pub fn set_overtime(&mut self, worker: &str, day: u32, text: &str) -> AppResult<f64> {
        let schedule = self.schedule.as_ref().ok_or(AppError::NotGenerated)?;

        if !self.roster.contains(worker) {
            return Err(AppError::UnknownWorker(worker.to_string()));
        }
        if day == 0 || day > schedule.days_in_month {
            return Err(AppError::InvalidDay {
                day,
                days_in_month: schedule.days_in_month,
            });
        }

        let hours = coerce_overtime(text);
        self.overtime.set(worker, day, hours);

        self.log.record(
            "overtime",
            &format!("{worker}, day {day}"),
            &format!("Overtime set to {hours}"),
        );

        Ok(hours)
    }

    pub fn pivot(&self) -> Option<Pivot> {
        self.schedule
            .as_ref()
            .and_then(|s| pivot_schedule(s, &self.overtime, &self.roster))
    }

    pub fn summary(&self) -> Option<PayrollSummary> {
        self.pivot().map(|p| PayrollSummary::from_pivot(&p))
    }

    pub fn chart(&self) -> Vec<ChartBar> {
        self.pivot().map(|p| chart_data(&p)).unwrap_or_default()
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut SessionLog {
        &mut self.log
    }
}
