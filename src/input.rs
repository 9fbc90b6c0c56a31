//! Validation of user-entered CGPA text.
//!
//! Everything here runs before the calculator: a value that fails to parse
//! or falls outside `0.00..=10.00` never reaches [`compute_result`].

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::grade::{CalculationResult, compute_result};

pub const CGPA_MIN: f64 = 0.0;
pub const CGPA_MAX: f64 = 10.0;

/// Digits, at most one `.`, and at most two digits after it.
#[allow(clippy::expect_used)] // literal pattern, cannot fail
static KEYSTROKE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d*\.?\d{0,2}$").expect("static regex should not panic")
});

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("Please enter a valid CGPA value")]
    Parse { input: String },

    #[error("CGPA must be between 0.00 and 10.00")]
    Range { value: f64 },

    #[error("CGPA must be plain digits with at most two decimal places")]
    Format { input: String },
}

/// A CGPA known to lie within `0.00..=10.00`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Cgpa(f64);

impl Cgpa {
    pub fn new(value: f64) -> Result<Self, InputError> {
        if !(CGPA_MIN..=CGPA_MAX).contains(&value) {
            return Err(InputError::Range { value });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn compute(self) -> CalculationResult {
        compute_result(self.0)
    }
}

impl std::str::FromStr for Cgpa {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cgpa(s)
    }
}

/// Returns whether `candidate` may stand as the contents of the input box.
///
/// Accepts the empty string or digits with at most one `.` and no more than
/// two digits after it. Signs, exponents and whitespace are refused.
pub fn accepts_keystroke(candidate: &str) -> bool {
    KEYSTROKE_REGEX.is_match(candidate)
}

/// Parses raw text into a validated [`Cgpa`].
///
/// Surrounding whitespace is trimmed. An in-range value must also pass
/// [`accepts_keystroke`], so what is graded is exactly what is displayed.
///
/// # Errors
///
/// - [`InputError::Parse`] when the text is not a finite number.
/// - [`InputError::Range`] when it is outside `0.00..=10.00`.
/// - [`InputError::Format`] for an in-range number written with a sign, an
///   exponent, or more than two decimals (`+7`, `1e1`, `7.255`).
pub fn parse_cgpa(raw: &str) -> Result<Cgpa, InputError> {
    let trimmed = raw.trim();
    let parse_error = || InputError::Parse {
        input: raw.to_string(),
    };

    let value: f64 = trimmed.parse().map_err(|_| parse_error())?;
    if !value.is_finite() {
        return Err(parse_error());
    }

    let cgpa = Cgpa::new(value)?;

    if !accepts_keystroke(trimmed) {
        return Err(InputError::Format {
            input: raw.to_string(),
        });
    }

    Ok(cgpa)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_keystroke() {
        for ok in ["", "7", "7.", ".5", "7.25", "10.00", "0", "."] {
            assert!(accepts_keystroke(ok), "should accept {ok:?}");
        }
    }

    #[test]
    fn test_rejects_keystroke() {
        for bad in ["7.255", "-1", "1e3", "abc", "1.2.3", " 7", "+7", "7,5"] {
            assert!(!accepts_keystroke(bad), "should reject {bad:?}");
        }
    }

    #[test]
    fn test_parse_not_a_number() {
        assert!(matches!(parse_cgpa("abc"), Err(InputError::Parse { .. })));
        assert!(matches!(parse_cgpa(""), Err(InputError::Parse { .. })));
        assert!(matches!(parse_cgpa("inf"), Err(InputError::Parse { .. })));
        assert!(matches!(parse_cgpa("NaN"), Err(InputError::Parse { .. })));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(parse_cgpa("10.01"), Err(InputError::Range { value: 10.01 }));
        assert_eq!(parse_cgpa("-1"), Err(InputError::Range { value: -1.0 }));
    }

    #[test]
    fn test_parse_rejects_unfiltered_text() {
        for raw in ["7.255", "9.4999", "1e1", "+7", "1e0"] {
            assert_eq!(
                parse_cgpa(raw),
                Err(InputError::Format {
                    input: raw.to_string()
                }),
                "raw = {raw:?}"
            );
        }
    }

    #[test]
    fn test_range_reported_before_format() {
        assert_eq!(parse_cgpa("-1.5"), Err(InputError::Range { value: -1.5 }));
        assert_eq!(parse_cgpa("10.001"), Err(InputError::Range { value: 10.001 }));
    }

    #[test]
    fn test_parse_range_edges() {
        assert_eq!(parse_cgpa("0").unwrap().value(), 0.0);
        assert_eq!(parse_cgpa("10.00").unwrap().value(), 10.0);
        assert_eq!(parse_cgpa(" 8.5 ").unwrap().value(), 8.5);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InputError::Range { value: 11.0 }.to_string(),
            "CGPA must be between 0.00 and 10.00"
        );
        assert_eq!(
            InputError::Parse {
                input: "x".to_string()
            }
            .to_string(),
            "Please enter a valid CGPA value"
        );
    }

    #[test]
    fn test_cgpa_from_str_computes() {
        let cgpa: Cgpa = "9.5".parse().unwrap();
        assert_eq!(cgpa.compute().percentage(), Some(90.0));
    }
}
