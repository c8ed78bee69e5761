//! Daily calorie deficit presets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three quick-pick deficit values offered on step 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeficitPreset {
    /// 300 kcal/day
    Light,
    /// 500 kcal/day
    Moderate,
    /// 700 kcal/day
    Aggressive,
}

impl DeficitPreset {
    pub fn all() -> &'static [Self] {
        &[Self::Light, Self::Moderate, Self::Aggressive]
    }

    /// Deficit in kcal per day
    pub fn kcal(&self) -> u32 {
        match self {
            Self::Light => 300,
            Self::Moderate => 500,
            Self::Aggressive => 700,
        }
    }

    pub fn value(&self) -> f64 {
        f64::from(self.kcal())
    }

    /// Position in the preset row (0-based)
    pub fn index(&self) -> usize {
        match self {
            Self::Light => 0,
            Self::Moderate => 1,
            Self::Aggressive => 2,
        }
    }

    /// Preset to the right, wrapping around
    pub fn next(&self) -> Self {
        Self::all()[(self.index() + 1) % Self::all().len()]
    }

    /// Preset to the left, wrapping around
    pub fn prev(&self) -> Self {
        let len = Self::all().len();
        Self::all()[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for DeficitPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kcal())
    }
}

impl FromStr for DeficitPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "300" | "light" => Ok(Self::Light),
            "500" | "moderate" => Ok(Self::Moderate),
            "700" | "aggressive" => Ok(Self::Aggressive),
            other => Err(format!(
                "Unknown preset '{}' (expected 300, 500, 700, light, moderate or aggressive)",
                other
            )),
        }
    }
}
