//! CGPA to percentage conversion under the SPPU 2024 engineering pattern.
//!
//! The mapping is a fixed piecewise-linear table. Bands are checked top to
//! bottom and the first match wins, so each check assumes the ones above it
//! already failed.
//!
//! | CGPA range         | Grade  | Percentage        |
//! |--------------------|--------|-------------------|
//! | < 4.0              | F/Fail | n/a               |
//! | 9.5 ..= 10.0       | O      | 20 × CGPA − 100   |
//! | 8.25 .. 9.5        | A+     | 12 × CGPA − 24    |
//! | 6.75 .. 8.25       | A      | 10 × CGPA − 7.5   |
//! | 5.75 .. 6.75       | B+     | 5 × CGPA + 26.25  |
//! | 5.25 .. 5.75       | B      | 10 × CGPA − 2.5   |
//! | 4.75 .. 5.25       | C      | 10 × CGPA − 2.5   |
//! | 4.0 .. 4.75        | D      | 6.6 × CGPA + 13.6 |
//! | anything else      | Invalid| n/a               |

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// Formula text shown when no percentage applies.
pub const NOT_APPLICABLE: &str = "N/A";

/// Passing letter grades, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    O,
    APlus,
    A,
    BPlus,
    B,
    C,
    D,
}

impl Grade {
    pub const ALL: [Grade; 7] = [
        Grade::O,
        Grade::APlus,
        Grade::A,
        Grade::BPlus,
        Grade::B,
        Grade::C,
        Grade::D,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Grade::O => "O",
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }

    /// Human-readable arithmetic for this band.
    ///
    /// B and C share the same arithmetic; the C text keeps its trailing zero
    /// as published.
    pub fn formula(self) -> &'static str {
        match self {
            Grade::O => "(20 × CGPA) - 100",
            Grade::APlus => "(12 × CGPA) - 24",
            Grade::A => "(10 × CGPA) - 7.5",
            Grade::BPlus => "(5 × CGPA) + 26.25",
            Grade::B => "(10 × CGPA) - 2.5",
            Grade::C => "(10 × CGPA) - 2.50",
            Grade::D => "(6.6 × CGPA) + 13.6",
        }
    }

    /// Applies this band's formula. Does not check that `cgpa` lies in the band.
    pub fn percentage(self, cgpa: f64) -> f64 {
        match self {
            Grade::O => (20.0 * cgpa) - 100.0,
            Grade::APlus => (12.0 * cgpa) - 24.0,
            Grade::A => (10.0 * cgpa) - 7.5,
            Grade::BPlus => (5.0 * cgpa) + 26.25,
            Grade::B => (10.0 * cgpa) - 2.5,
            Grade::C => (10.0 * cgpa) - 2.5,
            Grade::D => (6.6 * cgpa) + 13.6,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a single conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculationResult {
    /// CGPA of 4.0 or above with an unrounded percentage.
    Pass { grade: Grade, percentage: f64 },
    /// CGPA below the 4.0 minimum.
    Fail,
    /// Value outside every band, e.g. above 10.0 or NaN.
    Invalid,
}

impl CalculationResult {
    pub fn percentage(&self) -> Option<f64> {
        match self {
            CalculationResult::Pass { percentage, .. } => Some(*percentage),
            CalculationResult::Fail | CalculationResult::Invalid => None,
        }
    }

    pub fn grade(&self) -> Option<Grade> {
        match self {
            CalculationResult::Pass { grade, .. } => Some(*grade),
            CalculationResult::Fail | CalculationResult::Invalid => None,
        }
    }

    pub fn grade_label(&self) -> &'static str {
        match self {
            CalculationResult::Pass { grade, .. } => grade.label(),
            CalculationResult::Fail => "F/Fail",
            CalculationResult::Invalid => "Invalid",
        }
    }

    pub fn formula(&self) -> &'static str {
        match self {
            CalculationResult::Pass { grade, .. } => grade.formula(),
            CalculationResult::Fail | CalculationResult::Invalid => NOT_APPLICABLE,
        }
    }

    /// True for both `Fail` and `Invalid`. Use [`Self::is_invalid`] to tell a
    /// failing grade apart from an out-of-domain input.
    pub fn is_fail(&self) -> bool {
        !matches!(self, CalculationResult::Pass { .. })
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, CalculationResult::Invalid)
    }
}

impl Serialize for CalculationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("CalculationResult", 4)?;
        s.serialize_field("grade", self.grade_label())?;
        s.serialize_field("percentage", &self.percentage())?;
        s.serialize_field("formula", self.formula())?;
        s.serialize_field("is_fail", &self.is_fail())?;
        s.end()
    }
}

/// Converts a CGPA into its percentage and letter grade.
///
/// Defined for `0.0..=10.0`; callers validate the range first. Never panics.
pub fn compute_result(cgpa: f64) -> CalculationResult {
    let grade = match cgpa {
        c if c < 4.0 => return CalculationResult::Fail,
        c if (9.5..=10.0).contains(&c) => Grade::O,
        c if (8.25..9.5).contains(&c) => Grade::APlus,
        c if (6.75..8.25).contains(&c) => Grade::A,
        c if (5.75..6.75).contains(&c) => Grade::BPlus,
        c if (5.25..5.75).contains(&c) => Grade::B,
        c if (4.75..5.25).contains(&c) => Grade::C,
        c if (4.0..4.75).contains(&c) => Grade::D,
        _ => return CalculationResult::Invalid,
    };

    CalculationResult::Pass {
        grade,
        percentage: grade.percentage(cgpa),
    }
}
