//! fatloss - Terminal body fat loss calculator
//!
//! This library provides the core functionality for the fatloss calculator.
//! A five-step wizard collects body weight, body fat percentage, the body fat
//! percentage points to lose and a daily calorie deficit, then estimates how
//! much fat must be lost and how many days that takes.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Inputs, deficit presets, wizard steps and the estimate formula
//! - `wizard`: The step-by-step controller shared by every front end
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: tracing subscriber setup
//! - `display`: Text and table formatting of results
//! - `export`: JSON, YAML and CSV output
//! - `cli`: The one-shot `calc` command and the line-prompt wizard
//! - `tui`: The full-screen wizard
//!
//! # Example
//!
//! ```rust
//! use fatloss::models::{BodyFatInputs, Estimate};
//!
//! let inputs = BodyFatInputs::new(80.0, 25.0, 5.0, 500.0).unwrap();
//! let estimate = Estimate::compute(&inputs);
//! assert_eq!(estimate.fat_to_lose_kg, 5.0);
//! assert_eq!(estimate.days_to_goal, 77);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod tui;
pub mod wizard;

pub use error::FatLossError;
