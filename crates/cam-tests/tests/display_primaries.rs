//! Bundled display dataset verified through the harness
//!
//! Treats the CRT primaries dataset as the system under test: the
//! extractor samples the dataset at the fixture's wavelength and the
//! harness compares each channel against the published values.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use cam_tests::checker::{CheckFailure, OutputSpecification};
use cam_tests::fixtures::FixtureCase;
use cam_tests::harness::ModelValidation;
use oxcam_core::{RgbDisplayPrimaries, rgb_display_primaries};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join("fixtures")
}

struct PrimariesSpecification {
    red: f64,
    green: f64,
    blue: f64,
}

impl OutputSpecification for PrimariesSpecification {
    fn attribute(&self, name: &str) -> Option<f64> {
        match name {
            "red" => Some(self.red),
            "green" => Some(self.green),
            "blue" => Some(self.blue),
            _ => None,
        }
    }
}

fn crt_display() -> Result<RgbDisplayPrimaries, String> {
    rgb_display_primaries("Typical CRT Brainard 1997")
        .ok_or_else(|| "CRT dataset missing from registry".to_string())
}

fn sample_crt(data: &FixtureCase) -> Result<PrimariesSpecification, String> {
    let wavelength = data
        .number("wavelength")
        .ok_or_else(|| "missing numeric column \"wavelength\"".to_string())?;
    let [red, green, blue] = crt_display()?
        .at(wavelength)
        .ok_or_else(|| format!("wavelength {} nm off the sampling grid", wavelength))?;
    Ok(PrimariesSpecification { red, green, blue })
}

fn primaries_suite() -> ModelValidation {
    ModelValidation::new("Typical CRT Brainard 1997", "display_primaries.csv")
        .bind("red", "red")
        .bind("green", "green")
        .bind("blue", "blue")
}

#[test]
fn test_dataset_matches_published_table() -> Result<()> {
    let report = primaries_suite().run(fixtures_dir(), sample_crt)?;

    assert_eq!(report.total(), 18);
    report.assert_success();
    Ok(())
}

#[test]
fn test_registry_name_is_case_insensitive() -> Result<()> {
    let report = primaries_suite().run(fixtures_dir(), |data: &FixtureCase| {
        let wavelength = data
            .number("wavelength")
            .ok_or_else(|| "missing wavelength".to_string())?;
        let [red, green, blue] = rgb_display_primaries("typical crt brainard 1997")
            .ok_or_else(|| "lookup failed".to_string())?
            .at(wavelength)
            .ok_or_else(|| "off grid".to_string())?;
        Ok(PrimariesSpecification { red, green, blue })
    })?;
    report.assert_success();
    Ok(())
}

#[test]
fn test_off_grid_wavelength_fails_per_case() -> Result<()> {
    // A case asking for an unsampled wavelength fails all three of its
    // checks without touching the well-formed case.
    let dir = std::env::temp_dir().join(format!("cam-tests-offgrid-{}", std::process::id()));
    fs::create_dir_all(&dir)?;
    fs::write(
        dir.join("off_grid.csv"),
        "Case,wavelength,red,green,blue\n\
         1,445,0.0115,0.0191,0.7654\n\
         2,447,0.0115,0.0191,0.7654\n",
    )?;

    let report = ModelValidation::new("Typical CRT Brainard 1997", "off_grid.csv")
        .bind("red", "red")
        .bind("green", "green")
        .bind("blue", "blue")
        .run(&dir, sample_crt)?;

    assert_eq!(report.total(), 6);
    assert_eq!(report.passed(), 3);
    let failed_cases: Vec<&str> = report.failures().map(|o| o.case.as_str()).collect();
    assert_eq!(failed_cases, ["2", "2", "2"]);
    assert!(
        report
            .failures()
            .all(|o| matches!(o.failure, Some(CheckFailure::Extraction { .. })))
    );
    Ok(())
}
