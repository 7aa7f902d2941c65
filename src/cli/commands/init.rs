use crate::cli::commands::year_list;
use crate::config::Config;
use crate::utils::date::period_title;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Handle the `init` command: write the default configuration (production
/// roster, start date, default period) to `path`.
pub fn handle(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        warning(format!(
            "Configuration already exists at {} (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }

    let cfg = Config::default();
    cfg.save_to(path)?;

    success(format!("Config file: {}", path.display()));
    println!(
        "👥 Roster      : {} workers, rotation starts {}",
        cfg.roster.len(),
        cfg.start_date
    );
    println!(
        "📅 Period      : {} (years: {})",
        period_title(cfg.default_year, cfg.default_month),
        year_list(&cfg.year_options)
    );
    Ok(())
}
