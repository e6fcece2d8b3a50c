//! Command implementations

pub mod check;
pub mod simple;

pub use check::{CheckEntry, CheckReport, check_words};
pub use simple::{run_simple, run_simple_with};
