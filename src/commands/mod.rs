//! Command implementations

pub mod analyze;
pub mod simple;

pub use analyze::{analyze_rounds, parse_round};
pub use simple::{run_session, run_simple};
