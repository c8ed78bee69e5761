//! YAML Export functionality
//!
//! Exports an estimate report to YAML format for human-readable records.

use std::io::Write;

use crate::error::{FatLossError, FatLossResult};
use crate::export::json::EstimateReport;

/// Write the report as YAML with a comment header
pub fn export_estimate_yaml<W: Write>(report: &EstimateReport, writer: &mut W) -> FatLossResult<()> {
    let export_err = |e: std::io::Error| FatLossError::Export(e.to_string());

    writeln!(writer, "# Body Fat Loss Estimate").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", report.generated_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", report.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, report).map_err(|e| FatLossError::Export(e.to_string()))?;

    Ok(())
}
