pub mod config;
pub mod export;
pub mod init;
pub mod schedule;
pub mod session;
pub mod summary;
pub mod timesheet;

use crate::cli::parser::PeriodArgs;
use crate::config::Config;
use crate::core::PayrollSession;
use crate::core::overtime::parse_assignment;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Session on the configured roster with the requested period selected
/// and its schedule generated.
pub(crate) fn generated_session(cfg: &Config, period: &PeriodArgs) -> AppResult<PayrollSession> {
    let mut session = PayrollSession::from_config(cfg)?;
    select_period(
        &mut session,
        period.year.unwrap_or(cfg.default_year),
        period.month.unwrap_or(cfg.default_month),
    )?;
    session.regenerate()?;
    Ok(session)
}

/// Select the period, warning when the year is not one of `year_options`.
pub(crate) fn select_period(session: &mut PayrollSession, year: i32, month: u32) -> AppResult<()> {
    session.set_period(year, month)?;
    if !session.is_offered_year(year) {
        warning(format!(
            "Year {year} is not among the configured years ({})",
            year_list(session.year_options())
        ));
    }
    Ok(())
}

/// `2025, 2026, 2027`
pub(crate) fn year_list(years: &[i32]) -> String {
    years
        .iter()
        .map(|y| y.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Apply `--ot NAME:DAY=VALUE` edits in order.
pub(crate) fn apply_overtime(session: &mut PayrollSession, edits: &[String]) -> AppResult<()> {
    for edit in edits {
        let a = parse_assignment(edit)?;
        session.set_overtime(&a.worker, a.day, &a.raw_value)?;
    }
    Ok(())
}
