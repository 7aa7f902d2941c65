use crate::cli::commands::{apply_overtime, generated_session};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        period,
        format,
        file,
        force,
        overtime,
    } = cmd
    {
        let mut session = generated_session(cfg, period)?;
        apply_overtime(&mut session, overtime)?;

        let pivot = session.pivot();
        ExportLogic::export(
            pivot.as_ref(),
            *format,
            file.as_deref(),
            *force,
            &mut io::stdin().lock(),
        )?;
    }
    Ok(())
}
