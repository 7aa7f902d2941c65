// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv_export::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_export::export_json;
use crate::export::xlsx_export::export_xlsx;
use crate::models::Pivot;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use std::io::BufRead;
use std::path::PathBuf;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the timesheet.
    ///
    /// - `pivot`: `None` when no schedule has been generated; a warning is
    ///   printed and nothing is written.
    /// - `file`: output path (`~/` expanded); defaults to
    ///   `payroll_<year>_<month>.<ext>` in the current directory.
    /// - `force`: overwrite an existing file without asking on `input`.
    ///
    /// Returns the written path.
    pub fn export<R: BufRead>(
        pivot: Option<&Pivot>,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
        input: &mut R,
    ) -> AppResult<Option<PathBuf>> {
        let Some(pivot) = pivot else {
            warning("Please generate schedule first: nothing to export.");
            return Ok(None);
        };

        let path = match file {
            Some(f) => expand_tilde(f),
            None => PathBuf::from(format.default_file_name(pivot.year, pivot.month)),
        };

        ensure_writable(&path, force, input)?;

        match format {
            ExportFormat::Csv => export_csv(pivot, &path)?,
            ExportFormat::Json => export_json(pivot, &path)?,
            ExportFormat::Xlsx => export_xlsx(pivot, &path)?,
        }

        Ok(Some(path))
    }
}
