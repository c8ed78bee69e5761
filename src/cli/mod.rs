//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the wizard.

pub mod calc;
pub mod wizard;

pub use calc::{handle_calc_command, CalcArgs};
pub use wizard::{PromptOutcome, PromptWizard};
