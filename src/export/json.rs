//! JSON Export functionality
//!
//! Exports an estimate report to JSON format with schema versioning.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{FatLossError, FatLossResult};
use crate::models::{BodyFatInputs, DeficitPreset, Estimate, DISCLAIMER};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// An estimate together with the inputs that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateReport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Report timestamp
    pub generated_at: DateTime<Utc>,

    /// Application version that created the report
    pub app_version: String,

    pub inputs: BodyFatInputs,

    /// Preset used for the deficit, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<DeficitPreset>,

    pub estimate: Estimate,

    /// Date the goal is reached when starting today
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_date: Option<NaiveDate>,

    pub disclaimer: String,
}

impl EstimateReport {
    /// Build a report stamped with the current time
    pub fn new(
        inputs: BodyFatInputs,
        preset: Option<DeficitPreset>,
        estimate: Estimate,
        goal_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            inputs,
            preset,
            estimate,
            goal_date,
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}

/// Write the report as pretty-printed JSON
pub fn export_estimate_json<W: Write>(report: &EstimateReport, writer: &mut W) -> FatLossResult<()> {
    serde_json::to_writer_pretty(&mut *writer, report)
        .map_err(|e| FatLossError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FatLossError::Export(e.to_string()))?;
    Ok(())
}
