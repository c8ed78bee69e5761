//! Wizard step model
//!
//! The wizard has four input steps followed by a results step. The results
//! step carries the computed estimate, so a result can only exist once the
//! wizard has reached the end.

use std::fmt;

use super::estimate::Estimate;

/// Total number of steps, including the results step
pub const TOTAL_STEPS: u8 = 5;

/// One of the four steps that collect a value from the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputStep {
    /// Step 1: current body weight in kilograms
    #[default]
    Weight,
    /// Step 2: current body fat percentage
    BodyFat,
    /// Step 3: body fat percentage points to lose
    TargetDrop,
    /// Step 4: daily calorie deficit
    Deficit,
}

impl InputStep {
    /// All input steps, in wizard order
    pub fn all() -> &'static [Self] {
        &[Self::Weight, Self::BodyFat, Self::TargetDrop, Self::Deficit]
    }

    /// 1-based step number
    pub fn number(&self) -> u8 {
        match self {
            Self::Weight => 1,
            Self::BodyFat => 2,
            Self::TargetDrop => 3,
            Self::Deficit => 4,
        }
    }

    /// Look up an input step by its 1-based number
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Weight),
            2 => Some(Self::BodyFat),
            3 => Some(Self::TargetDrop),
            4 => Some(Self::Deficit),
            _ => None,
        }
    }

    /// The following input step, or `None` after the deficit step
    pub fn next(&self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// The preceding input step, or `None` on the first step
    pub fn prev(&self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    /// Question shown to the user for this step
    pub fn question(&self) -> &'static str {
        match self {
            Self::Weight => "What is your current body weight (kg)?",
            Self::BodyFat => "What is your current body fat percentage?",
            Self::TargetDrop => "How much body fat percentage do you want to lose?",
            Self::Deficit => "What is your daily calorie deficit?",
        }
    }

    /// Placeholder shown in an empty input
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Weight => "eg: 75kg",
            Self::BodyFat => "e.g., 25",
            Self::TargetDrop => "e.g., 5",
            Self::Deficit => "Or enter custom value",
        }
    }

    /// Unit label for the value
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Weight => "kg",
            Self::BodyFat | Self::TargetDrop => "%",
            Self::Deficit => "kcal/day",
        }
    }

    /// Short field name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weight => "Weight",
            Self::BodyFat => "Body fat",
            Self::TargetDrop => "Drop",
            Self::Deficit => "Deficit",
        }
    }
}

impl fmt::Display for InputStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: {}", self.number(), self.label())
    }
}

/// The active wizard step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WizardStep {
    /// Collecting one of the four inputs
    Input(InputStep),
    /// Showing the computed estimate
    Results(Estimate),
}

impl WizardStep {
    /// 1-based step number (5 for results)
    pub fn number(&self) -> u8 {
        match self {
            Self::Input(step) => step.number(),
            Self::Results(_) => TOTAL_STEPS,
        }
    }

    /// The input step, if one is active
    pub fn input(&self) -> Option<InputStep> {
        match self {
            Self::Input(step) => Some(*step),
            Self::Results(_) => None,
        }
    }

    /// The estimate, if the results step is active
    pub fn estimate(&self) -> Option<&Estimate> {
        match self {
            Self::Input(_) => None,
            Self::Results(estimate) => Some(estimate),
        }
    }

    pub fn is_results(&self) -> bool {
        matches!(self, Self::Results(_))
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::Input(InputStep::Weight)
    }
}
