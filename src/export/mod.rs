//! Export module for fatloss
//!
//! Writes an estimate, together with the inputs it came from, in
//! machine-readable formats:
//! - JSON: full report with schema version
//! - YAML: the same report, human-readable with a comment header
//! - CSV: one header row and one data row (spreadsheet-compatible)

pub mod csv;
pub mod json;
pub mod yaml;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use self::csv::export_estimate_csv;
pub use json::{export_estimate_json, EstimateReport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_estimate_yaml;

/// Output format for a computed estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bordered table
    #[default]
    Table,
    /// Plain sentences, as shown on the results screen
    Text,
    Json,
    Yaml,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Table => "table",
            Self::Text => "text",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        };
        write!(f, "{}", name)
    }
}
