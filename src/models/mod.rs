pub mod overtime;
pub mod pivot;
pub mod shift;
pub mod team;
pub mod worker;

pub use overtime::OvertimeMap;
pub use pivot::{DayCell, Pivot, PivotRow};
pub use shift::{ShiftCode, ShiftRecord, ShiftRole};
pub use team::Team;
pub use worker::{Roster, Worker};
