//! One-shot calculation command
//!
//! Runs the four inputs through the wizard non-interactively and prints the
//! estimate in the requested format.

use chrono::Local;
use clap::Args;
use std::io::Write;

use crate::config::settings::Settings;
use crate::display::{format_estimate_table, format_estimate_text};
use crate::error::{FatLossError, FatLossResult};
use crate::export::{
    export_estimate_csv, export_estimate_json, export_estimate_yaml, EstimateReport, OutputFormat,
};
use crate::models::{DeficitPreset, InputStep};
use crate::wizard::Wizard;

/// Arguments for `fatloss calc`
#[derive(Args, Debug, Clone)]
pub struct CalcArgs {
    /// Current body weight in kg
    #[arg(short, long, allow_negative_numbers = true)]
    pub weight: f64,

    /// Current body fat percentage
    #[arg(short, long = "body-fat", allow_negative_numbers = true)]
    pub body_fat: f64,

    /// Body fat percentage points to lose
    #[arg(short, long, allow_negative_numbers = true)]
    pub drop: f64,

    /// Daily calorie deficit in kcal
    #[arg(
        long,
        allow_negative_numbers = true,
        conflicts_with = "preset",
        required_unless_present = "preset"
    )]
    pub deficit: Option<f64>,

    /// Deficit preset: 300 (light), 500 (moderate) or 700 (aggressive)
    #[arg(short, long)]
    pub preset: Option<DeficitPreset>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Run the inputs through the wizard and return the finished report.
///
/// Fails with the first failing step's message.
pub fn build_report(settings: &Settings, args: &CalcArgs) -> FatLossResult<EstimateReport> {
    let mut wizard = Wizard::with_energy_density(settings.kcal_per_kg_fat);

    wizard.set_input(InputStep::Weight, Some(args.weight));
    wizard.advance()?;
    wizard.set_input(InputStep::BodyFat, Some(args.body_fat));
    wizard.advance()?;
    wizard.set_input(InputStep::TargetDrop, Some(args.drop));
    wizard.advance()?;
    match (args.preset, args.deficit) {
        (Some(preset), _) => wizard.select_preset(preset),
        (None, deficit) => wizard.set_input(InputStep::Deficit, deficit),
    }
    wizard.advance()?;

    let estimate = *wizard
        .estimate()
        .ok_or_else(|| FatLossError::Validation("No estimate was computed".into()))?;
    let inputs = wizard.inputs().complete()?;
    let goal_date = if settings.show_goal_date {
        estimate.goal_date(Local::now().date_naive())
    } else {
        None
    };

    Ok(EstimateReport::new(
        inputs,
        wizard.selected_preset(),
        estimate,
        goal_date,
    ))
}

/// Handle `fatloss calc`, writing the result to `out`
pub fn handle_calc_command<W: Write>(
    settings: &Settings,
    args: &CalcArgs,
    out: &mut W,
) -> FatLossResult<()> {
    let report = build_report(settings, args)?;
    let format = args.format.unwrap_or(settings.default_format);

    match format {
        OutputFormat::Table => writeln!(out, "{}", format_estimate_table(&report))?,
        OutputFormat::Text => writeln!(
            out,
            "{}",
            format_estimate_text(&report.estimate, report.goal_date)
        )?,
        OutputFormat::Json => export_estimate_json(&report, out)?,
        OutputFormat::Yaml => export_estimate_yaml(&report, out)?,
        OutputFormat::Csv => export_estimate_csv(&report, out)?,
    }

    Ok(())
}
