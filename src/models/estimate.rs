//! Fat loss estimate
//!
//! Holds lean mass constant and solves for the body weight at which the
//! target body fat percentage is reached. The difference to the current
//! weight is the fat to lose; dividing its energy content by the daily
//! deficit gives the number of days.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::inputs::BodyFatInputs;

/// Energy stored in one kilogram of body fat (kcal)
pub const KCAL_PER_KG_FAT: f64 = 7700.0;

/// Shown next to every estimate
pub const DISCLAIMER: &str = "This is a rough estimate. Actual results may vary due to water weight, \
                              muscle loss, and metabolic changes.";

/// Result of the calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Kilograms of fat to lose, rounded to two decimals
    pub fat_to_lose_kg: f64,
    /// Whole days needed at the given deficit (rounded up)
    pub days_to_goal: u64,
    pub fat_mass_kg: f64,
    pub lean_mass_kg: f64,
    pub target_body_fat_pct: f64,
    pub target_weight_kg: f64,
    /// Total deficit needed, in kcal
    pub total_calories: f64,
}

impl Estimate {
    /// Compute the estimate with the standard 7700 kcal/kg energy density
    pub fn compute(inputs: &BodyFatInputs) -> Self {
        Self::compute_with(inputs, KCAL_PER_KG_FAT)
    }

    /// Compute the estimate with a custom fat energy density (kcal/kg)
    pub fn compute_with(inputs: &BodyFatInputs, kcal_per_kg_fat: f64) -> Self {
        let weight = inputs.weight_kg;
        let fat_mass = weight * (inputs.body_fat_pct / 100.0);
        let lean_mass = weight - fat_mass;
        let target_bf = inputs.body_fat_pct - inputs.target_drop_pct;
        // target_bf < 100 because 0 < drop and body fat < 100
        let target_weight = lean_mass / (1.0 - target_bf / 100.0);
        let fat_to_lose = weight - target_weight;
        let total_calories = fat_to_lose * kcal_per_kg_fat;
        // Days use the unrounded fat mass; only the displayed kg is rounded.
        let days = (total_calories / inputs.daily_deficit_kcal).ceil().max(0.0);

        Self {
            fat_to_lose_kg: round2(fat_to_lose),
            days_to_goal: days as u64,
            fat_mass_kg: fat_mass,
            lean_mass_kg: lean_mass,
            target_body_fat_pct: target_bf,
            target_weight_kg: target_weight,
            total_calories,
        }
    }

    /// Calendar date the goal is reached when starting on `start`
    pub fn goal_date(&self, start: NaiveDate) -> Option<NaiveDate> {
        start.checked_add_days(Days::new(self.days_to_goal))
    }
}

/// Round to two decimal places
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
