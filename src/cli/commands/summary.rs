use crate::cli::commands::{apply_overtime, generated_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::ui::views::render_summary;
use crate::utils::date::period_title;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { period, overtime } = cmd {
        let mut session = generated_session(cfg, period)?;
        apply_overtime(&mut session, overtime)?;

        let (year, month) = session.period();
        header(format!("Summary {}", period_title(year, month)));

        match session.pivot() {
            Some(pivot) => print!("{}", render_summary(&pivot)),
            None => warning("Roster is empty: nothing to summarize."),
        }
    }
    Ok(())
}
