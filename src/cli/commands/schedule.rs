use crate::cli::commands::generated_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::views::render_records;
use crate::utils::date::period_title;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule {
        period,
        worker,
        day,
    } = cmd
    {
        let session = generated_session(cfg, period)?;

        if let Some(name) = worker
            && !session.roster().contains(name)
        {
            return Err(AppError::UnknownWorker(name.clone()));
        }

        let (year, month) = session.period();
        println!("🗓️  Schedule for {}\n", period_title(year, month));

        let records = session.records().iter().filter(|r| {
            worker.as_ref().is_none_or(|w| &r.worker == w) && day.is_none_or(|d| r.day == d)
        });

        print!("{}", render_records(records));
    }
    Ok(())
}
