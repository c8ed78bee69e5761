//! Wizard input values and their validation rules
//!
//! [`RawInputs`] holds whatever the user has entered so far, one optional
//! value per step. [`BodyFatInputs`] is a complete set that has passed every
//! step's rule and can be fed to the estimate formula.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::step::InputStep;
use crate::error::FatLossError;

/// A failed step validation, displayed as the inline message for that step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a valid weight")]
    Weight,

    #[error("Please enter a valid body fat percentage (between 0 and 100)")]
    BodyFat,

    #[error(
        "Please enter a valid body fat % to lose (must be less than your current body fat %)"
    )]
    TargetDrop,

    #[error("Please enter a valid daily calorie deficit")]
    Deficit,
}

impl InputError {
    /// The error reported when `step` fails validation
    pub fn for_step(step: InputStep) -> Self {
        match step {
            InputStep::Weight => Self::Weight,
            InputStep::BodyFat => Self::BodyFat,
            InputStep::TargetDrop => Self::TargetDrop,
            InputStep::Deficit => Self::Deficit,
        }
    }

    pub fn step(&self) -> InputStep {
        match self {
            Self::Weight => InputStep::Weight,
            Self::BodyFat => InputStep::BodyFat,
            Self::TargetDrop => InputStep::TargetDrop,
            Self::Deficit => InputStep::Deficit,
        }
    }
}

impl From<InputError> for FatLossError {
    fn from(err: InputError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Values entered so far; `None` means the field is empty
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawInputs {
    pub weight_kg: Option<f64>,
    pub body_fat_pct: Option<f64>,
    pub target_drop_pct: Option<f64>,
    pub daily_deficit_kcal: Option<f64>,
}

impl RawInputs {
    /// The value owned by `step`
    pub fn get(&self, step: InputStep) -> Option<f64> {
        match step {
            InputStep::Weight => self.weight_kg,
            InputStep::BodyFat => self.body_fat_pct,
            InputStep::TargetDrop => self.target_drop_pct,
            InputStep::Deficit => self.daily_deficit_kcal,
        }
    }

    /// Store the value owned by `step`
    pub fn set(&mut self, step: InputStep, value: Option<f64>) {
        let slot = match step {
            InputStep::Weight => &mut self.weight_kg,
            InputStep::BodyFat => &mut self.body_fat_pct,
            InputStep::TargetDrop => &mut self.target_drop_pct,
            InputStep::Deficit => &mut self.daily_deficit_kcal,
        };
        *slot = value;
    }

    /// Whether the value for `step` satisfies that step's rule.
    ///
    /// - weight > 0
    /// - 0 < body fat < 100
    /// - 0 < drop < current body fat
    /// - deficit > 0
    pub fn is_valid(&self, step: InputStep) -> bool {
        match step {
            InputStep::Weight => finite(self.weight_kg).is_some_and(|w| w > 0.0),
            InputStep::BodyFat => finite(self.body_fat_pct).is_some_and(|bf| bf > 0.0 && bf < 100.0),
            InputStep::TargetDrop => match (finite(self.target_drop_pct), finite(self.body_fat_pct)) {
                (Some(drop), Some(bf)) => drop > 0.0 && drop < bf,
                _ => false,
            },
            InputStep::Deficit => finite(self.daily_deficit_kcal).is_some_and(|d| d > 0.0),
        }
    }

    /// Like [`is_valid`](Self::is_valid) but reports the step's error
    pub fn validate(&self, step: InputStep) -> Result<(), InputError> {
        if self.is_valid(step) {
            Ok(())
        } else {
            Err(InputError::for_step(step))
        }
    }

    /// Validate every step in order and build a complete input set.
    ///
    /// The first failing step's error is returned.
    pub fn complete(&self) -> Result<BodyFatInputs, InputError> {
        for step in InputStep::all() {
            self.validate(*step)?;
        }
        // Every field was checked above, so the defaults are never used.
        Ok(BodyFatInputs {
            weight_kg: self.weight_kg.unwrap_or_default(),
            body_fat_pct: self.body_fat_pct.unwrap_or_default(),
            target_drop_pct: self.target_drop_pct.unwrap_or_default(),
            daily_deficit_kcal: self.daily_deficit_kcal.unwrap_or_default(),
        })
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// A validated set of the four wizard inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyFatInputs {
    pub weight_kg: f64,
    pub body_fat_pct: f64,
    pub target_drop_pct: f64,
    pub daily_deficit_kcal: f64,
}

impl BodyFatInputs {
    /// Build and validate an input set from plain values
    pub fn new(
        weight_kg: f64,
        body_fat_pct: f64,
        target_drop_pct: f64,
        daily_deficit_kcal: f64,
    ) -> Result<Self, InputError> {
        RawInputs {
            weight_kg: Some(weight_kg),
            body_fat_pct: Some(body_fat_pct),
            target_drop_pct: Some(target_drop_pct),
            daily_deficit_kcal: Some(daily_deficit_kcal),
        }
        .complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RawInputs {
        RawInputs {
            weight_kg: Some(80.0),
            body_fat_pct: Some(25.0),
            target_drop_pct: Some(5.0),
            daily_deficit_kcal: Some(500.0),
        }
    }

    #[test]
    fn test_empty_fields_are_invalid() {
        let raw = RawInputs::default();
        for step in InputStep::all() {
            assert!(!raw.is_valid(*step));
        }
    }

    #[test]
    fn test_weight_rule() {
        let mut raw = filled();
        raw.weight_kg = Some(0.0);
        assert!(!raw.is_valid(InputStep::Weight));
        raw.weight_kg = Some(-3.0);
        assert!(!raw.is_valid(InputStep::Weight));
        raw.weight_kg = Some(0.1);
        assert!(raw.is_valid(InputStep::Weight));
    }

    #[test]
    fn test_body_fat_rejects_bounds() {
        let mut raw = filled();
        raw.body_fat_pct = Some(0.0);
        assert!(!raw.is_valid(InputStep::BodyFat));
        raw.body_fat_pct = Some(100.0);
        assert!(!raw.is_valid(InputStep::BodyFat));
        raw.body_fat_pct = Some(99.9);
        assert!(raw.is_valid(InputStep::BodyFat));
    }

    #[test]
    fn test_drop_must_be_below_current_body_fat() {
        let mut raw = filled();
        raw.target_drop_pct = Some(25.0);
        assert!(!raw.is_valid(InputStep::TargetDrop));
        raw.target_drop_pct = Some(30.0);
        assert!(!raw.is_valid(InputStep::TargetDrop));
        raw.target_drop_pct = Some(0.0);
        assert!(!raw.is_valid(InputStep::TargetDrop));
        raw.target_drop_pct = Some(24.9);
        assert!(raw.is_valid(InputStep::TargetDrop));

        raw.body_fat_pct = None;
        assert!(!raw.is_valid(InputStep::TargetDrop));
    }

    #[test]
    fn test_deficit_rule() {
        let mut raw = filled();
        raw.daily_deficit_kcal = Some(0.0);
        assert!(!raw.is_valid(InputStep::Deficit));
        raw.daily_deficit_kcal = Some(-500.0);
        assert!(!raw.is_valid(InputStep::Deficit));
    }

    #[test]
    fn test_non_finite_values_are_invalid() {
        let mut raw = filled();
        raw.weight_kg = Some(f64::INFINITY);
        assert!(!raw.is_valid(InputStep::Weight));
        raw.body_fat_pct = Some(f64::NAN);
        assert!(!raw.is_valid(InputStep::BodyFat));
    }

    #[test]
    fn test_complete_reports_first_failure() {
        let mut raw = filled();
        raw.body_fat_pct = Some(100.0);
        raw.daily_deficit_kcal = None;
        assert_eq!(raw.complete(), Err(InputError::BodyFat));
    }

    #[test]
    fn test_complete_builds_inputs() {
        let inputs = filled().complete().unwrap();
        assert_eq!(inputs.weight_kg, 80.0);
        assert_eq!(inputs.daily_deficit_kcal, 500.0);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(InputError::Weight.to_string(), "Please enter a valid weight");
        assert_eq!(
            InputError::Deficit.to_string(),
            "Please enter a valid daily calorie deficit"
        );
        let err: FatLossError = InputError::BodyFat.into();
        assert!(err.is_validation());
    }
}
