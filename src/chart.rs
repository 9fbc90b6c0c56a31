//! Grade reference chart shown alongside the calculator.
//!
//! Written out by hand rather than derived from [`crate::grade`]. The tests
//! below keep the two in step.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartRow {
    pub range: &'static str,
    pub grade: &'static str,
    pub formula: &'static str,
}

pub static REFERENCE_CHART: &[ChartRow] = &[
    ChartRow {
        range: "9.5 - 10.0",
        grade: "O",
        formula: "(20 × CGPA) - 100",
    },
    ChartRow {
        range: "8.25 - 9.5",
        grade: "A+",
        formula: "(12 × CGPA) - 24",
    },
    ChartRow {
        range: "6.75 - 8.25",
        grade: "A",
        formula: "(10 × CGPA) - 7.5",
    },
    ChartRow {
        range: "5.75 - 6.75",
        grade: "B+",
        formula: "(5 × CGPA) + 26.25",
    },
    ChartRow {
        range: "5.25 - 5.75",
        grade: "B",
        formula: "(10 × CGPA) - 2.5",
    },
    ChartRow {
        range: "4.75 - 5.25",
        grade: "C",
        formula: "(10 × CGPA) - 2.50",
    },
    ChartRow {
        range: "4.0 - 4.75",
        grade: "D",
        formula: "(6.6 × CGPA) + 13.6",
    },
    ChartRow {
        range: "< 4.0",
        grade: "F",
        formula: "Fail",
    },
];

pub const DISCLAIMER: &str = "Calculations are based on the Savitribai Phule Pune University (SPPU) \
4 Years UG Engineering Programme Rules (2024 Pattern). \
Results are rounded to two decimal places as per university guidelines.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grade::{Grade, compute_result};

    fn lower_bound(range: &str) -> f64 {
        range.split(" - ").next().unwrap().parse().unwrap()
    }

    #[test]
    fn test_chart_lists_every_passing_grade_in_order() {
        let grades: Vec<_> = REFERENCE_CHART.iter().take(7).map(|r| r.grade).collect();
        let expected: Vec<_> = Grade::ALL.iter().map(|g| g.label()).collect();
        assert_eq!(grades, expected);
    }

    #[test]
    fn test_chart_agrees_with_calculator_at_lower_bounds() {
        for row in REFERENCE_CHART.iter().take(7) {
            let result = compute_result(lower_bound(row.range));
            assert_eq!(result.grade_label(), row.grade);
            assert_eq!(result.formula(), row.formula);
        }
    }

    #[test]
    fn test_chart_fail_row() {
        let last = REFERENCE_CHART.last().unwrap();
        assert_eq!(last.range, "< 4.0");
        assert!(compute_result(3.99).is_fail());
    }
}
