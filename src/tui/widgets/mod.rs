//! Reusable widgets for the TUI
//!
//! Contains custom widgets for common UI elements

pub mod input;

pub use input::NumberInput;
