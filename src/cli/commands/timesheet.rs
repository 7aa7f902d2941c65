use crate::cli::commands::{apply_overtime, generated_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Team;
use crate::ui::messages::warning;
use crate::ui::views::{render_timesheet, use_color};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Timesheet {
        period,
        team,
        overtime,
    } = cmd
    {
        let team = team
            .as_deref()
            .map(|t| Team::from_code(t).ok_or_else(|| AppError::InvalidTeam(t.to_string())))
            .transpose()?;

        let mut session = generated_session(cfg, period)?;
        apply_overtime(&mut session, overtime)?;

        match session.pivot() {
            Some(pivot) => print!("{}", render_timesheet(&pivot, team, use_color())),
            None => warning("Roster is empty: nothing to show."),
        }
    }
    Ok(())
}
