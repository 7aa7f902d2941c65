//! Calendar helpers for the schedule generator: period validation, day
//! counts, and the day arithmetic relative to the program start date.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};

/// Length of the rotating-team cycle in days.
pub const CYCLE_LENGTH: i64 = 15;

/// Length of one block of the cycle (one role per team).
pub const BLOCK_LENGTH: i64 = 5;

/// Reject anything that is not a 4-digit year or a month in 1..=12.
pub fn validate_period(year: i32, month: u32) -> AppResult<()> {
    if !(1000..=9999).contains(&year) {
        return Err(AppError::InvalidYear(year));
    }
    if !(1..=12).contains(&month) {
        return Err(AppError::InvalidMonth(month));
    }
    Ok(())
}

pub fn days_in_month(year: i32, month: u32) -> AppResult<u32> {
    validate_period(year, month)?;

    // last day of the month = day before the 1st of the next one
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    date_of(next_year, next_month, 1)?
        .pred_opt()
        .map(|last| last.day())
        .ok_or_else(|| AppError::InvalidDate(format!("{year:04}-{month:02}")))
}

pub fn date_of(year: i32, month: u32, day: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| AppError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
}

/// The rotation is active from `start` on (inclusive).
pub fn is_working_day(date: NaiveDate, start: NaiveDate) -> bool {
    date >= start
}

/// Whole calendar days between `start` and `date` (negative before start).
pub fn days_since(date: NaiveDate, start: NaiveDate) -> i64 {
    (date - start).num_days()
}

/// Position inside the 15-day cycle, 0..=14.
pub fn cycle_day(days_since_start: i64) -> i64 {
    days_since_start.rem_euclid(CYCLE_LENGTH)
}

/// Whole weeks elapsed since the start date.
pub fn week_number(days_since_start: i64) -> i64 {
    days_since_start.div_euclid(7)
}

pub fn weekday(date: NaiveDate) -> Weekday {
    date.weekday()
}

/// Index 0 = Sunday, matching the day-name table.
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}
