use crate::core::calendar;
use crate::errors::{AppError, AppResult};
use crate::models::Roster;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod check;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// First day the rotation is active (YYYY-MM-DD).
    #[serde(default = "default_start_date")]
    pub start_date: String,
    #[serde(default = "default_year")]
    pub default_year: i32,
    #[serde(default = "default_month")]
    pub default_month: u32,
    #[serde(default = "default_year_options")]
    pub year_options: Vec<i32>,
    #[serde(default)]
    pub roster: Roster,
}

fn default_start_date() -> String {
    "2026-01-05".to_string()
}
fn default_year() -> i32 {
    2026
}
fn default_month() -> u32 {
    1
}
fn default_year_options() -> Vec<i32> {
    vec![2025, 2026, 2027]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            default_year: default_year(),
            default_month: default_month(),
            year_options: default_year_options(),
            roster: Roster::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rtimesheet")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtimesheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Load configuration from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write the configuration as YAML, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    pub fn start_date(&self) -> AppResult<NaiveDate> {
        calendar::parse_date(&self.start_date)
            .map_err(|_| AppError::Config(format!("invalid start_date: {}", self.start_date)))
    }

    pub fn validate(&self) -> AppResult<()> {
        self.start_date()?;
        calendar::validate_period(self.default_year, self.default_month)?;
        for y in &self.year_options {
            calendar::validate_period(*y, 1)?;
        }
        Ok(())
    }
}
