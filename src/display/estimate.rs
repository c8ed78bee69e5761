//! Estimate display formatting
//!
//! Formats a computed estimate for terminal output, either as the short
//! results text or as a table of every intermediate value.

use chrono::NaiveDate;
use tabled::{settings::Style, Table, Tabled};

use crate::export::EstimateReport;
use crate::models::{Estimate, DISCLAIMER};

/// Format a value with at most two decimals, dropping trailing zeros
pub fn format_number(value: f64) -> String {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// The results lines shown at the end of the wizard
pub fn format_estimate_lines(estimate: &Estimate, goal_date: Option<NaiveDate>) -> Vec<String> {
    let mut lines = vec![
        format!("Fat to lose: {} kg", format_number(estimate.fat_to_lose_kg)),
        format!("Estimated days to goal: {} days", estimate.days_to_goal),
    ];
    if let Some(date) = goal_date {
        lines.push(format!("Goal date: {}", date.format("%Y-%m-%d")));
    }
    lines
}

/// Results text followed by the disclaimer
pub fn format_estimate_text(estimate: &Estimate, goal_date: Option<NaiveDate>) -> String {
    let mut output = format_estimate_lines(estimate, goal_date).join("\n");
    output.push_str("\n\n");
    output.push_str(DISCLAIMER);
    output
}

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "Measure")]
    measure: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

/// Every input and intermediate value as a table, followed by the disclaimer
pub fn format_estimate_table(report: &EstimateReport) -> String {
    let inputs = &report.inputs;
    let estimate = &report.estimate;

    let mut rows = vec![
        ReportRow {
            measure: "Current weight",
            value: format!("{} kg", format_number(inputs.weight_kg)),
        },
        ReportRow {
            measure: "Current body fat",
            value: format!("{}%", format_number(inputs.body_fat_pct)),
        },
        ReportRow {
            measure: "Body fat to lose",
            value: format!("{}%", format_number(inputs.target_drop_pct)),
        },
        ReportRow {
            measure: "Daily deficit",
            value: match report.preset {
                Some(preset) => format!("{} kcal (preset)", preset),
                None => format!("{} kcal", format_number(inputs.daily_deficit_kcal)),
            },
        },
        ReportRow {
            measure: "Fat mass",
            value: format!("{} kg", format_number(estimate.fat_mass_kg)),
        },
        ReportRow {
            measure: "Lean mass",
            value: format!("{} kg", format_number(estimate.lean_mass_kg)),
        },
        ReportRow {
            measure: "Target body fat",
            value: format!("{}%", format_number(estimate.target_body_fat_pct)),
        },
        ReportRow {
            measure: "Target weight",
            value: format!("{} kg", format_number(estimate.target_weight_kg)),
        },
        ReportRow {
            measure: "Fat to lose",
            value: format!("{} kg", format_number(estimate.fat_to_lose_kg)),
        },
        ReportRow {
            measure: "Total deficit",
            value: format!("{:.0} kcal", estimate.total_calories),
        },
        ReportRow {
            measure: "Days to goal",
            value: estimate.days_to_goal.to_string(),
        },
    ];
    if let Some(date) = report.goal_date {
        rows.push(ReportRow {
            measure: "Goal date",
            value: date.format("%Y-%m-%d").to_string(),
        });
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n\n{}", table, DISCLAIMER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BodyFatInputs;

    fn reference() -> (BodyFatInputs, Estimate) {
        let inputs = BodyFatInputs::new(80.0, 25.0, 5.0, 500.0).unwrap();
        (inputs, Estimate::compute(&inputs))
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(2.27), "2.27");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(100.0), "100");
    }

    #[test]
    fn test_text_output() {
        let (_, estimate) = reference();
        let text = format_estimate_text(&estimate, None);
        assert!(text.starts_with("Fat to lose: 5 kg\nEstimated days to goal: 77 days"));
        assert!(text.ends_with(DISCLAIMER));
        assert!(!text.contains("Goal date"));
    }

    #[test]
    fn test_lines_include_goal_date() {
        let (_, estimate) = reference();
        let lines = format_estimate_lines(&estimate, NaiveDate::from_ymd_opt(2025, 3, 19));
        assert_eq!(lines.last().map(String::as_str), Some("Goal date: 2025-03-19"));
    }

    #[test]
    fn test_table_output() {
        let (inputs, estimate) = reference();
        let report = EstimateReport::new(inputs, None, estimate, None);
        let table = format_estimate_table(&report);

        assert!(table.contains("Measure"));
        assert!(table.contains("Target weight"));
        assert!(table.contains("75 kg"));
        assert!(table.contains("38500 kcal"));
        assert!(table.contains("77"));
    }
}
