//! User settings for fatloss
//!
//! Manages user preferences: the energy density used to convert fat mass
//! into calories, the default output format, and the log level.

use serde::{Deserialize, Serialize};

use super::paths::FatLossPaths;
use crate::error::FatLossError;
use crate::export::OutputFormat;
use crate::models::KCAL_PER_KG_FAT;

/// User settings for fatloss
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Energy stored in one kilogram of body fat (kcal)
    #[serde(default = "default_kcal_per_kg_fat")]
    pub kcal_per_kg_fat: f64,

    /// Output format used by `calc` when `--format` is not given
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether results include the calendar date the goal is reached
    #[serde(default = "default_show_goal_date")]
    pub show_goal_date: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_kcal_per_kg_fat() -> f64 {
    KCAL_PER_KG_FAT
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_show_goal_date() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            kcal_per_kg_fat: default_kcal_per_kg_fat(),
            default_format: OutputFormat::default(),
            log_level: default_log_level(),
            show_goal_date: default_show_goal_date(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use default settings if the file doesn't exist
    pub fn load_or_create(paths: &FatLossPaths) -> Result<Self, FatLossError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FatLossError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FatLossError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FatLossPaths) -> Result<(), FatLossError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FatLossError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| FatLossError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject values the estimate formula cannot use
    pub fn validate(&self) -> Result<(), FatLossError> {
        if !self.kcal_per_kg_fat.is_finite() || self.kcal_per_kg_fat <= 0.0 {
            return Err(FatLossError::Config(format!(
                "kcal_per_kg_fat must be a positive number, got {}",
                self.kcal_per_kg_fat
            )));
        }
        Ok(())
    }
}
