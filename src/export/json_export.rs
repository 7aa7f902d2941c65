use crate::errors::AppResult;
use crate::export::model::TimesheetExport;
use crate::export::notify_export_success;
use crate::models::Pivot;
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Pretty-printed JSON document with period, summary, chart and rows.
pub fn render_json(pivot: &Pivot) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(&TimesheetExport::from_pivot(
        pivot,
    ))?)
}

pub(crate) fn export_json(pivot: &Pivot, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    fs::write(path, render_json(pivot)?)?;

    notify_export_success("JSON", path);
    Ok(())
}
