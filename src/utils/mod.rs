pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;

pub use date::{day_name, month_name};
pub use formatting::{cell_text, fmt_hours};
