//! Forgiving overtime input: anything that does not start with a number
//! counts as zero.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::OnceLock;

fn leading_number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("static overtime regex")
    })
}

/// Coerce free-text overtime input into hours.
///
/// - empty / blank → 0
/// - leading decimal number is taken (`"3.5"`, `"3.5h"` → 3.5)
/// - no number, non-finite or negative → 0
pub fn coerce_overtime(text: &str) -> f64 {
    let t = text.trim();
    if t.is_empty() {
        return 0.0;
    }

    let value = leading_number()
        .find(t)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0);

    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parsed `NAME:DAY=VALUE` overtime edit.
#[derive(Debug, Clone, PartialEq)]
pub struct OvertimeAssignment {
    pub worker: String,
    pub day: u32,
    pub raw_value: String,
}

/// Parse the `NAME:DAY=VALUE` syntax used by `--ot` and the session `ot`
/// command. The value part may be empty (`"Mile Vucina:5="` resets the cell).
pub fn parse_assignment(s: &str) -> AppResult<OvertimeAssignment> {
    let invalid = || AppError::InvalidAssignment(s.to_string());

    let (target, value) = s.split_once('=').ok_or_else(invalid)?;
    let (name, day) = target.rsplit_once(':').ok_or_else(invalid)?;

    let name = name.trim();
    if name.is_empty() {
        return Err(invalid());
    }

    let day: u32 = day.trim().parse().map_err(|_| invalid())?;

    Ok(OvertimeAssignment {
        worker: name.to_string(),
        day,
        raw_value: value.to_string(),
    })
}
