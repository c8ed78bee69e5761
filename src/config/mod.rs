//! Configuration module for fatloss
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FatLossPaths;
pub use settings::Settings;
