//! Unified application error type.
//! All modules (config, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Period / input errors
    // ---------------------------
    #[error("Invalid year: {0} (expected a 4-digit year)")]
    InvalidYear(i32),

    #[error("Invalid month: {0} (expected 1..=12)")]
    InvalidMonth(u32),

    #[error("Invalid day {day} for a month with {days_in_month} days")]
    InvalidDay { day: u32, days_in_month: u32 },

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid team: {0}")]
    InvalidTeam(String),

    #[error("Invalid overtime assignment: {0} (expected NAME:DAY=VALUE)")]
    InvalidAssignment(String),

    // ---------------------------
    // Roster / schedule errors
    // ---------------------------
    #[error("Unknown worker: {0}")]
    UnknownWorker(String),

    #[error("Duplicate worker in roster: {0}")]
    DuplicateWorker(String),

    #[error("Roster has no workers")]
    EmptyRoster,

    #[error("No schedule generated yet")]
    NotGenerated,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
