//! Converts an SPPU CGPA (0.00–10.00) into its equivalent percentage and letter grade.

pub mod batch;
pub mod chart;
pub mod grade;
pub mod input;
pub mod output;

pub use grade::{CalculationResult, Grade, compute_result};
pub use input::{Cgpa, InputError, parse_cgpa};
