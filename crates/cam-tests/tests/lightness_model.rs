//! End-to-end harness run against a real forward transform
//!
//! The model under test computes CIE 1976 L*a*b* coordinates from XYZ
//! tristimulus input under D65, and is verified against a checked-in
//! reference table the same way an appearance model would be.

use std::path::{Path, PathBuf};

use anyhow::Result;
use cam_tests::checker::{CheckFailure, OutputSpecification};
use cam_tests::fixtures::FixtureCase;
use cam_tests::harness::ModelValidation;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join("fixtures")
}

/// D65 white point, Y normalized to 1.0
const WHITE: [f64; 3] = [0.95047, 1.0, 1.08883];

fn lab_f(t: f64) -> f64 {
    let delta: f64 = 6.0 / 29.0;
    if t > delta.powi(3) {
        t.powf(1.0 / 3.0)
    } else {
        t / (3.0 * delta * delta) + 4.0 / 29.0
    }
}

fn xyz_to_lab(xyz: [f64; 3]) -> [f64; 3] {
    let fx = lab_f(xyz[0] / WHITE[0]);
    let fy = lab_f(xyz[1] / WHITE[1]);
    let fz = lab_f(xyz[2] / WHITE[2]);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

struct LabSpecification {
    lightness: f64,
    a: f64,
    b: f64,
}

impl OutputSpecification for LabSpecification {
    fn attribute(&self, name: &str) -> Option<f64> {
        match name {
            "lightness" => Some(self.lightness),
            "a" => Some(self.a),
            "b" => Some(self.b),
            _ => None,
        }
    }
}

fn extract_lab(data: &FixtureCase) -> Result<LabSpecification, String> {
    let mut xyz = [0.0; 3];
    for (slot, column) in xyz.iter_mut().zip(["X", "Y", "Z"]) {
        *slot = data
            .number(column)
            .ok_or_else(|| format!("missing numeric input column \"{}\"", column))?;
    }
    let [lightness, a, b] = xyz_to_lab(xyz);
    Ok(LabSpecification { lightness, a, b })
}

fn lab_suite() -> ModelValidation {
    ModelValidation::new("CIE 1976 lightness", "cie1976_lightness.csv")
        .bind("L_star", "lightness")
        .bind("a_star", "a")
        .bind("b_star", "b")
}

#[test]
fn test_forward_examples() -> Result<()> {
    let report = lab_suite().run(fixtures_dir(), extract_lab)?;

    // 6 fixture cases, 3 bound attributes each
    assert_eq!(report.total(), 18);
    report.assert_success();
    Ok(())
}

#[test]
fn test_limited_cases_run_in_given_order() -> Result<()> {
    let report = lab_suite()
        .with_cases(vec![2, 0, 0])
        .run(fixtures_dir(), extract_lab)?;

    assert_eq!(report.total(), 9);
    let cases: Vec<&str> = report.outcomes.iter().map(|o| o.case.as_str()).collect();
    assert_eq!(cases, ["3", "3", "3", "1", "1", "1", "1", "1", "1"]);
    report.assert_success();
    Ok(())
}

#[test]
fn test_checks_ordered_by_sorted_column() -> Result<()> {
    let report = lab_suite()
        .with_cases(vec![1])
        .run(fixtures_dir(), extract_lab)?;

    // Binding columns sort as L_star < a_star < b_star
    let attributes: Vec<&str> = report
        .outcomes
        .iter()
        .map(|o| o.attribute.as_str())
        .collect();
    assert_eq!(attributes, ["lightness", "a", "b"]);
    Ok(())
}

#[test]
fn test_broken_channel_fails_in_isolation() -> Result<()> {
    // Zeroing a* breaks exactly the chromatic cases; lightness and b*
    // checks keep passing, and neutral cases stay within tolerance.
    let broken = |data: &FixtureCase| {
        extract_lab(data).map(|spec| LabSpecification { a: 0.0, ..spec })
    };
    let report = lab_suite().run(fixtures_dir(), broken)?;

    assert_eq!(report.total(), 18);
    let failed: Vec<(&str, &str)> = report
        .failures()
        .map(|o| (o.case.as_str(), o.attribute.as_str()))
        .collect();
    assert_eq!(failed, [("2", "a"), ("3", "a"), ("4", "a")]);
    assert!(
        report
            .failures()
            .all(|o| matches!(o.failure, Some(CheckFailure::Mismatch { .. })))
    );
    Ok(())
}

#[test]
fn test_failing_extractor_is_isolated_per_check() -> Result<()> {
    let refuse = |_: &FixtureCase| -> Result<LabSpecification, String> {
        Err("viewing conditions unavailable".to_string())
    };
    let report = lab_suite().with_cases(vec![0, 1]).run(fixtures_dir(), refuse)?;

    // Every check still produces its own outcome
    assert_eq!(report.total(), 6);
    assert_eq!(report.failures().count(), 6);
    assert!(
        report
            .failures()
            .all(|o| matches!(o.failure, Some(CheckFailure::Extraction { .. })))
    );
    Ok(())
}

#[test]
fn test_report_serializes_to_json() -> Result<()> {
    let report = lab_suite().run(fixtures_dir(), extract_lab)?;
    let json = report.to_json()?;
    assert!(json.contains("CIE 1976 lightness"));
    assert!(json.contains("\"outcomes\""));
    Ok(())
}
