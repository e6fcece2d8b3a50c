//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_check_report, write_outcome, write_round_header, write_used_words};
pub use formatters::{Alert, alert_for, length_badge};
