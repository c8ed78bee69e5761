//! CSV Export functionality
//!
//! Exports the inputs and headline results of an estimate as a single CSV row.

use serde::Serialize;
use std::io::Write;

use crate::error::{FatLossError, FatLossResult};
use crate::export::json::EstimateReport;
use crate::models::estimate::round2;

#[derive(Serialize)]
struct EstimateRow {
    weight_kg: f64,
    body_fat_pct: f64,
    target_drop_pct: f64,
    daily_deficit_kcal: f64,
    target_body_fat_pct: f64,
    target_weight_kg: f64,
    fat_to_lose_kg: f64,
    total_calories: f64,
    days_to_goal: u64,
    goal_date: Option<String>,
}

impl From<&EstimateReport> for EstimateRow {
    fn from(report: &EstimateReport) -> Self {
        Self {
            weight_kg: report.inputs.weight_kg,
            body_fat_pct: report.inputs.body_fat_pct,
            target_drop_pct: report.inputs.target_drop_pct,
            daily_deficit_kcal: report.inputs.daily_deficit_kcal,
            target_body_fat_pct: report.estimate.target_body_fat_pct,
            target_weight_kg: round2(report.estimate.target_weight_kg),
            fat_to_lose_kg: report.estimate.fat_to_lose_kg,
            total_calories: report.estimate.total_calories.round(),
            days_to_goal: report.estimate.days_to_goal,
            goal_date: report.goal_date.map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}

/// Write the report as a header row plus one data row
pub fn export_estimate_csv<W: Write>(report: &EstimateReport, writer: &mut W) -> FatLossResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);
    csv_writer
        .serialize(EstimateRow::from(report))
        .map_err(|e| FatLossError::Export(e.to_string()))?;
    csv_writer
        .flush()
        .map_err(|e| FatLossError::Export(e.to_string()))?;
    Ok(())
}
