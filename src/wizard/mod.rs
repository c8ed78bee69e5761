//! Step-by-step calculator wizard
//!
//! The [`Wizard`] controller is shared by every front end: the full-screen
//! TUI, the line-prompt wizard and the one-shot `calc` command.

pub mod controller;

pub use controller::Wizard;
