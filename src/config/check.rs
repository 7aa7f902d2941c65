use crate::errors::{AppError, AppResult};
use crate::models::Team;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Keys every configuration file is expected to carry.
pub const EXPECTED_KEYS: [&str; 5] = [
    "start_date",
    "default_year",
    "default_month",
    "year_options",
    "roster",
];

/// Report top-level keys missing from the YAML file and roster entries that
/// lack a field. Missing keys fall back to defaults when loading; the check
/// only makes them visible.
pub fn check_config_file(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    let map = yaml
        .as_mapping()
        .ok_or_else(|| AppError::Config("configuration root is not a mapping".into()))?;

    let mut problems: Vec<String> = EXPECTED_KEYS
        .iter()
        .filter(|k| !map.contains_key(Value::String(k.to_string())))
        .map(|k| format!("missing key: {k}"))
        .collect();

    if let Some(Value::Sequence(workers)) = map.get(Value::String("roster".into())) {
        for (i, w) in workers.iter().enumerate() {
            for field in ["name", "position", "team"] {
                if w.get(field).is_none() {
                    problems.push(format!("roster[{i}]: missing field '{field}'"));
                }
            }
            if let Some(team) = w.get("team").and_then(Value::as_str)
                && !Team::ALL.iter().any(|t| t.code() == team)
            {
                problems.push(format!("roster[{i}]: unknown team '{team}'"));
            }
        }
    }

    Ok(problems)
}
