// src/export/mod.rs

mod csv_export;
mod fs_utils;
mod json_export;
pub mod logic;
mod model;
mod xlsx_export;

pub use csv_export::render_csv;
pub use json_export::render_json;
pub use logic::ExportLogic;
pub use model::TimesheetExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            "xlsx" => Some(ExportFormat::Xlsx),
            _ => None,
        }
    }

    /// `payroll_<year>_<month>.<ext>`
    pub fn default_file_name(&self, year: i32, month: u32) -> String {
        format!("payroll_{}_{}.{}", year, month, self.as_str())
    }
}
