//! Command implementations for the Lektor CLI.

mod exam;
mod extract;

pub use exam::run_exam;
pub use extract::run_extract;
