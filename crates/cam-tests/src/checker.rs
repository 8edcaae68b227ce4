//! Attribute checking under the dual tolerance policy
//!
//! Published appearance reference tables are rounded to limited precision,
//! so a single tolerance either hides gross model errors or rejects
//! legitimate rounding noise. Every attribute must pass two tests at once:
//! a relative+absolute band and agreement after rounding both values to a
//! fixed number of decimals. The two tests disagree near rounding
//! boundaries (10.05 sits inside the band around 10.00 but rounds to
//! 10.1), which is what catches systematically-biased output.

use serde::Serialize;
use thiserror::Error;

use crate::fixtures::FixtureCase;

/// Model output exposing named numeric attributes.
///
/// Implemented per model next to its extractor; the harness only reads
/// attributes by name.
pub trait OutputSpecification {
    /// Value of the named attribute, `None` when the model does not define it
    fn attribute(&self, name: &str) -> Option<f64>;
}

/// Extractor seam: builds a model's output specification from one fixture
/// case. Pure; a fresh specification is produced per check.
pub type Extraction<S> = Result<S, String>;

/// Dual tolerance policy for attribute comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tolerance {
    /// Relative tolerance, scaled by `|expected|`
    pub relative: f64,
    /// Absolute tolerance floor
    pub absolute: f64,
    /// Decimal places for the fixed-decimal agreement test
    pub decimals: u32,
}

impl Tolerance {
    pub const fn new(relative: f64, absolute: f64, decimals: u32) -> Self {
        Self {
            relative,
            absolute,
            decimals,
        }
    }

    /// `|actual - expected| <= absolute + relative * |expected|`
    pub fn within_band(&self, actual: f64, expected: f64) -> bool {
        (actual - expected).abs() <= self.absolute + self.relative * expected.abs()
    }

    /// Equality after rounding both values to `decimals` places
    pub fn agrees_rounded(&self, actual: f64, expected: f64) -> bool {
        round_decimals(actual, self.decimals) == round_decimals(expected, self.decimals)
    }

    /// Both tolerance tests at once
    pub fn accepts(&self, actual: f64, expected: f64) -> bool {
        self.within_band(actual, expected) && self.agrees_rounded(actual, expected)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(0.01, 0.01, 1)
    }
}

/// Round half away from zero to a fixed number of decimal places
pub fn round_decimals(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// A single failed attribute check, isolated from every other check
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub enum CheckFailure {
    /// Actual value failed one or both tolerance tests
    #[error(
        "attribute \"{attribute}\" in case \"{case}\" does not match reference: \
         expected {expected}, got {actual}"
    )]
    Mismatch {
        attribute: String,
        case: String,
        expected: f64,
        actual: f64,
    },

    /// Specification does not define the bound attribute
    #[error("specification for case \"{case}\" has no attribute \"{attribute}\"")]
    MissingAttribute { attribute: String, case: String },

    /// Fixture case does not carry the bound column
    #[error("case \"{case}\" has no column \"{column}\"")]
    MissingColumn { column: String, case: String },

    /// Bound column holds text where a numeric expected value is required
    #[error("column \"{column}\" in case \"{case}\" is not numeric")]
    NonNumericColumn { column: String, case: String },

    /// Extractor could not build a specification from the case
    #[error("specification extraction failed for case \"{case}\": {message}")]
    Extraction { case: String, message: String },
}

/// Check one specification attribute against its expected fixture value.
///
/// The specification is produced fresh by the extractor and dropped after
/// the comparison.
pub fn check_specification_attribute<S, F>(
    case: &str,
    data: &FixtureCase,
    extract: &F,
    attribute: &str,
    expected: f64,
    tolerance: Tolerance,
) -> Result<(), CheckFailure>
where
    S: OutputSpecification,
    F: Fn(&FixtureCase) -> Extraction<S>,
{
    let specification = extract(data).map_err(|message| CheckFailure::Extraction {
        case: case.to_string(),
        message,
    })?;

    let actual =
        specification
            .attribute(attribute)
            .ok_or_else(|| CheckFailure::MissingAttribute {
                attribute: attribute.to_string(),
                case: case.to_string(),
            })?;

    if tolerance.accepts(actual, expected) {
        Ok(())
    } else {
        Err(CheckFailure::Mismatch {
            attribute: attribute.to_string(),
            case: case.to_string(),
            expected,
            actual,
        })
    }
}
