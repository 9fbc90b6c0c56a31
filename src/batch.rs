//! Bulk conversion of CGPA values read from CSV or plain lines.
//!
//! Each record's first column is validated and converted independently. A
//! rejected value yields a row carrying the validation message and is never
//! passed to the calculator.

use anyhow::Result;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use serde::Serialize;
use std::io::{Read, Write};
use tracing::{debug, warn};

use crate::input::parse_cgpa;

/// One output row per input record.
#[derive(Debug, Serialize)]
pub struct BatchRow {
    pub input: String,
    pub grade: Option<&'static str>,
    pub percentage: Option<f64>,
    pub formula: Option<&'static str>,
    pub is_fail: Option<bool>,
    pub error: Option<String>,
}

/// Counts and percentage spread for a batch run.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub rejected: usize,
    pub mean_percentage: f64,
    pub stddev_percentage: f64,
}

/// Arithmetic mean; 0.0 for an empty slice.
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation around a known mean; 0.0 for an empty slice.
fn stddev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

fn is_header(field: &str) -> bool {
    field.eq_ignore_ascii_case("cgpa")
}

/// Converts every record from `reader` and writes one CSV row per record to `writer`.
///
/// Blank records are skipped, as is a `cgpa` header in the first non-blank
/// record. The output header is written once, before the first row.
pub fn convert_reader<R: Read, W: Write>(reader: R, writer: W) -> Result<BatchSummary> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(writer);

    let mut summary = BatchSummary::default();
    let mut percentages = Vec::new();
    let mut seen_record = false;

    for (index, record) in rdr.records().enumerate() {
        let record = record?;
        let Some(field) = record.get(0) else {
            continue;
        };
        if field.is_empty() {
            continue;
        }
        let first_record = !seen_record;
        seen_record = true;
        if first_record && is_header(field) {
            continue;
        }

        summary.total += 1;

        let row = match parse_cgpa(field) {
            Ok(cgpa) => {
                let result = cgpa.compute();
                match result.percentage() {
                    Some(p) => {
                        summary.passed += 1;
                        percentages.push(p);
                    }
                    None => summary.failed += 1,
                }
                BatchRow {
                    input: field.to_string(),
                    grade: Some(result.grade_label()),
                    percentage: result.percentage(),
                    formula: Some(result.formula()),
                    is_fail: Some(result.is_fail()),
                    error: None,
                }
            }
            Err(e) => {
                warn!(input = field, line = index + 1, error = %e, "Rejected CGPA");
                summary.rejected += 1;
                BatchRow {
                    input: field.to_string(),
                    grade: None,
                    percentage: None,
                    formula: None,
                    is_fail: None,
                    error: Some(e.to_string()),
                }
            }
        };

        wtr.serialize(&row)?;
    }

    wtr.flush()?;

    summary.mean_percentage = mean(&percentages);
    summary.stddev_percentage = stddev(&percentages, summary.mean_percentage);

    debug!(?summary, "Batch conversion finished");
    Ok(summary)
}
