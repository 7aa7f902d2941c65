//! Formatting utilities used for CLI and export outputs.

use crate::models::DayCell;
use crate::models::ShiftCode;
use unicode_width::UnicodeWidthStr;

/// Left-align on display width (names carry non-ASCII letters).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), s)
}

/// Overtime hours without a trailing ".0" (3 → "3", 3.5 → "3.5").
pub fn fmt_hours(h: f64) -> String {
    format!("{}", h)
}

/// Short cell text for the timesheet view: "12h", "10h", "S" or blank,
/// followed by "+OT" when overtime is booked on that day.
pub fn cell_text(cell: &DayCell) -> String {
    let mut s = if cell.hours > 0 {
        format!("{}h", cell.code.as_str())
    } else if cell.code == ShiftCode::Rest {
        "S".to_string()
    } else {
        String::new()
    };

    if cell.overtime > 0.0 {
        s.push('+');
        s.push_str(&fmt_hours(cell.overtime));
    }

    s
}
