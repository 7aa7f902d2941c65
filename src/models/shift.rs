use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Role of a rotating team on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftRole {
    Morning,
    Night,
    Free,
}

impl ShiftRole {
    pub fn hours(&self) -> u32 {
        match self {
            ShiftRole::Morning | ShiftRole::Night => 12,
            ShiftRole::Free => 0,
        }
    }

    pub fn code(&self) -> ShiftCode {
        match self {
            ShiftRole::Morning | ShiftRole::Night => ShiftCode::Long12,
            ShiftRole::Free => ShiftCode::Rest,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShiftRole::Morning => "I (07-19)",
            ShiftRole::Night => "II (19-07)",
            ShiftRole::Free => "",
        }
    }
}

/// Shift code of a day cell.
///
/// Serialized as the display token (`"12"`, `"10"`, `"S"`, `""`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShiftCode {
    #[serde(rename = "12")]
    Long12,
    #[serde(rename = "10")]
    Long10,
    #[serde(rename = "S")]
    Rest,
    #[default]
    #[serde(rename = "")]
    Empty,
}

impl ShiftCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftCode::Long12 => "12",
            ShiftCode::Long10 => "10",
            ShiftCode::Rest => "S",
            ShiftCode::Empty => "",
        }
    }
}

/// Regular staff working day.
pub const REGULAR_HOURS: u32 = 10;
pub const REGULAR_LABEL: &str = "(07-17)";

/// One worker on one day of the generated month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftRecord {
    pub date: NaiveDate,
    pub worker: String,
    pub position: String,
    pub hours: u32,
    pub code: ShiftCode,
    pub label: String,
    pub day: u32,
}

impl ShiftRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
