//! Display formatting for terminal output
//!
//! Provides utilities for formatting estimates for terminal display.

pub mod estimate;

pub use estimate::{format_estimate_lines, format_estimate_table, format_estimate_text, format_number};
