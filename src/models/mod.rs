//! Core data models for fatloss
//!
//! This module contains the wizard's step model, the input values and their
//! validation rules, the deficit presets, and the estimate formula.

pub mod estimate;
pub mod inputs;
pub mod preset;
pub mod step;

pub use estimate::{Estimate, DISCLAIMER, KCAL_PER_KG_FAT};
pub use inputs::{BodyFatInputs, InputError, RawInputs};
pub use preset::DeficitPreset;
pub use step::{InputStep, WizardStep, TOTAL_STEPS};
