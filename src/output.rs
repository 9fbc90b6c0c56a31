//! Output formatting for conversion results.
//!
//! Supports plain text, JSON, and the reference chart table.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::chart::{DISCLAIMER, REFERENCE_CHART};
use crate::grade::CalculationResult;

pub const FAIL_HEADLINE: &str = "Failing Grade";
pub const FAIL_DETAIL: &str = "Percentage is not applicable - 40% minimum not achieved";

/// A conversion as presented to the user.
#[derive(Debug, Serialize)]
pub struct Report {
    pub cgpa: f64,
    pub result: CalculationResult,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    pub fn new(cgpa: f64, result: CalculationResult) -> Self {
        Self {
            cgpa,
            result,
            generated_at: Utc::now(),
        }
    }
}

/// Formats a percentage for display, e.g. `72.50%`.
pub fn format_percentage(percentage: f64) -> String {
    format!("{percentage:.2}%")
}

/// Renders a result the way the calculator card shows it.
pub fn render_text(cgpa: f64, result: &CalculationResult) -> String {
    match result.percentage() {
        Some(percentage) => format!(
            "CGPA:       {cgpa:.2}\nPercentage: {}\nGrade:      {}\nFormula:    {}\n",
            format_percentage(percentage),
            result.grade_label(),
            result.formula(),
        ),
        None => format!("CGPA:       {cgpa:.2}\n{FAIL_HEADLINE}\n{FAIL_DETAIL}\n"),
    }
}

/// Serializes a [`Report`] as pretty-printed JSON.
pub fn render_json(report: &Report) -> Result<String> {
    debug!(
        cgpa = report.cgpa,
        grade = report.result.grade_label(),
        "Rendering JSON report"
    );
    Ok(serde_json::to_string_pretty(report)?)
}

/// Renders the reference chart as an aligned three-column table followed by the disclaimer.
pub fn render_chart() -> String {
    let headers = ("CGPA Range", "Grade", "Formula");

    let range_w = REFERENCE_CHART
        .iter()
        .map(|r| r.range.chars().count())
        .chain(std::iter::once(headers.0.len()))
        .max()
        .unwrap_or(0);
    let grade_w = REFERENCE_CHART
        .iter()
        .map(|r| r.grade.chars().count())
        .chain(std::iter::once(headers.1.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str("Grade Reference Chart\n");
    out.push_str(&format!(
        "{:<range_w$}  {:<grade_w$}  {}\n",
        headers.0, headers.1, headers.2
    ));
    for row in REFERENCE_CHART {
        out.push_str(&format!(
            "{:<range_w$}  {:<grade_w$}  {}\n",
            row.range, row.grade, row.formula
        ));
    }
    out.push('\n');
    out.push_str("Disclaimer: ");
    out.push_str(DISCLAIMER);
    out.push('\n');
    out
}
