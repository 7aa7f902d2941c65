//! rTimesheet library root.
//! Exposes CLI parser, high-level run() function, and the schedule/timesheet
//! modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => cli::commands::init::handle(config_path, *force),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Schedule { .. } => cli::commands::schedule::handle(&cli.command, cfg),
        Commands::Timesheet { .. } => cli::commands::timesheet::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Session { .. } => cli::commands::session::handle(&cli.command, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ risolve il file di configurazione (override da riga di comando)
    let config_path: PathBuf = match &cli.config {
        Some(p) => utils::path::expand_tilde(p),
        None => Config::config_file(),
    };

    // 3️⃣ carica config UNA sola volta (init scrive quella di default)
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        // config --check must still run on a file that does not load
        Commands::Config { .. } => Config::load_from(&config_path).unwrap_or_else(|e| {
            ui::messages::warning(format!("{e}; showing defaults"));
            Config::default()
        }),
        _ => Config::load_from(&config_path)?,
    };

    // 4️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg, &config_path)
}
