//! Path management for fatloss
//!
//! Provides XDG-compliant path resolution for the settings and log files.
//!
//! ## Path Resolution Order
//!
//! 1. `FATLOSS_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/fatloss-cli` or `~/.config/fatloss-cli`
//! 3. Windows: `%APPDATA%\fatloss-cli`

use std::path::PathBuf;

use crate::error::FatLossError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "FATLOSS_CLI_DATA_DIR";

/// Manages all paths used by fatloss
#[derive(Debug, Clone)]
pub struct FatLossPaths {
    /// Base directory for all fatloss files
    base_dir: PathBuf,
}

impl FatLossPaths {
    /// Create a new FatLossPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FatLossError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FatLossPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/fatloss-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file written while the TUI is running
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("fatloss.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FatLossError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FatLossError::Io(format!("Failed to create base directory: {}", e)))
    }
}

/// Resolve the default base directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FatLossError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                FatLossError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("fatloss-cli"))
}

/// Resolve the default base directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FatLossError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FatLossError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("fatloss-cli"))
}
