/// ANSI color helper utilities for terminal output.
use crate::models::ShiftCode;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// 12h shifts blue, 10h days green, rest grey, empty unstyled.
pub fn color_for_code(code: ShiftCode) -> &'static str {
    match code {
        ShiftCode::Long12 => BLUE,
        ShiftCode::Long10 => GREEN,
        ShiftCode::Rest => GREY,
        ShiftCode::Empty => RESET,
    }
}

/// Colour an already padded cell so the padding keeps its width.
pub fn colorize_cell(padded: &str, code: ShiftCode, overtime: bool) -> String {
    if padded.trim().is_empty() {
        return padded.to_string();
    }
    let color = if overtime { YELLOW } else { color_for_code(code) };
    format!("{color}{padded}{RESET}")
}
