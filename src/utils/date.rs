use crate::core::calendar::weekday_index;
use chrono::NaiveDate;

pub const MONTH_NAMES: [&str; 12] = [
    "Januar",
    "Februar",
    "Mart",
    "April",
    "Maj",
    "Jun",
    "Jul",
    "Avgust",
    "Septembar",
    "Oktobar",
    "Novembar",
    "Decembar",
];

/// Short day names, index 0 = Sunday.
pub const DAY_NAMES: [&str; 7] = ["Ned.", "Pon.", "Uto.", "Sre.", "Čet.", "Pet.", "Sub."];

pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES[(month - 1) as usize],
        _ => "",
    }
}

pub fn day_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[weekday_index(date)]
}

/// "Januar 2026"
pub fn period_title(year: i32, month: u32) -> String {
    format!("{} {}", month_name(month), year)
}
