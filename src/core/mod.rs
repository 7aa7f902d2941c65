pub mod calendar;
pub mod generator;
pub mod log;
pub mod overtime;
pub mod pivot;
pub mod session;
pub mod summary;

pub use generator::{Schedule, generate};
pub use pivot::build_pivot;
pub use session::PayrollSession;
