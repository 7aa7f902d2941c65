use crate::config::Config;
use crate::config::check::check_config_file;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};

use crate::cli::parser::Commands;
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (defaults in use, run `init`)",
                    path.display()
                ));
            } else {
                let problems = check_config_file(path)?;
                if problems.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    for p in &problems {
                        warning(p);
                    }
                }
            }
        }

        if *edit_config {
            edit(path, editor.as_deref());
        }
    }

    Ok(())
}

/// `$EDITOR`, then `$VISUAL`, then the platform default.
fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            let editor = if cfg!(target_os = "windows") { "notepad" } else { "nano" };
            editor.to_string()
        })
}

/// Open `path` in `requested` (or the default editor); a failing requested
/// editor falls back to the default one once.
fn edit(path: &Path, requested: Option<&str>) {
    let fallback = default_editor();
    let first = requested.map(str::to_string).unwrap_or_else(|| fallback.clone());

    let run = |editor: &str| {
        Command::new(editor)
            .arg(path)
            .status()
            .is_ok_and(|s| s.success())
    };

    if run(&first) {
        success(format!("Roster configuration saved with '{first}'"));
        return;
    }

    if first == fallback {
        error(format!("Editor '{first}' failed; {} left unchanged", path.display()));
        return;
    }

    warning(format!("Editor '{first}' failed, trying '{fallback}'"));
    if run(&fallback) {
        success(format!("Roster configuration saved with '{fallback}'"));
    } else {
        error(format!("Editor '{fallback}' failed; {} left unchanged", path.display()));
    }
}
