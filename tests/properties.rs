//! Property tests for the CGPA band table.

use proptest::prelude::*;

use cgpa_rater::{CalculationResult, Grade, compute_result, parse_cgpa};

/// (lower, upper, upper inclusive) for each passing band.
fn band_bounds(grade: Grade) -> (f64, f64, bool) {
    match grade {
        Grade::O => (9.5, 10.0, true),
        Grade::APlus => (8.25, 9.5, false),
        Grade::A => (6.75, 8.25, false),
        Grade::BPlus => (5.75, 6.75, false),
        Grade::B => (5.25, 5.75, false),
        Grade::C => (4.75, 5.25, false),
        Grade::D => (4.0, 4.75, false),
    }
}

fn in_band(grade: Grade, cgpa: f64) -> bool {
    let (lo, hi, inclusive) = band_bounds(grade);
    cgpa >= lo && (cgpa < hi || (inclusive && cgpa <= hi))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Below 4.0 is always a failing grade with no percentage.
    #[test]
    fn property_below_four_fails(cgpa in 0.0f64..4.0) {
        let result = compute_result(cgpa);
        prop_assert_eq!(result, CalculationResult::Fail);
        prop_assert!(result.percentage().is_none());
    }

    /// PROPERTY: 4.0 to 10.0 always passes with a finite percentage in range.
    #[test]
    fn property_passing_range_has_percentage(cgpa in 4.0f64..=10.0) {
        let result = compute_result(cgpa);
        prop_assert!(!result.is_fail());
        let p = result.percentage().unwrap();
        prop_assert!(p.is_finite());
        prop_assert!((0.0..=100.0 + 1e-9).contains(&p));
    }

    /// PROPERTY: Exactly one band owns every passing CGPA, and it is the one returned.
    #[test]
    fn property_single_band_matches(cgpa in 4.0f64..=10.0) {
        let owners: Vec<_> = Grade::ALL.into_iter().filter(|g| in_band(*g, cgpa)).collect();
        prop_assert_eq!(owners.len(), 1);
        prop_assert_eq!(compute_result(cgpa).grade(), Some(owners[0]));
    }

    /// PROPERTY: Percentage does not decrease as CGPA rises within a band.
    #[test]
    fn property_monotonic_within_band(a in 4.0f64..=10.0, b in 4.0f64..=10.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (r_lo, r_hi) = (compute_result(lo), compute_result(hi));
        if r_lo.grade() == r_hi.grade() {
            prop_assert!(r_lo.percentage().unwrap() <= r_hi.percentage().unwrap());
        }
    }

    /// PROPERTY: Repeated calls give equal results.
    #[test]
    fn property_idempotent(cgpa in -5.0f64..15.0) {
        prop_assert_eq!(compute_result(cgpa), compute_result(cgpa));
    }

    /// PROPERTY: Two-decimal text in range always parses and converts.
    #[test]
    fn property_two_decimal_text_parses(hundredths in 0u32..=1000) {
        let text = format!("{}.{:02}", hundredths / 100, hundredths % 100);
        let cgpa = parse_cgpa(&text).unwrap();
        prop_assert!(!cgpa.compute().is_invalid());
    }
}
