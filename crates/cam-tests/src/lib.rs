//! # cam-tests
//!
//! Fixture-driven verification harness for colour appearance models.
//!
//! This crate provides:
//! - A CSV fixture loader with numeric field coercion
//! - Case selection by index, allowing reordering and repetition
//! - A dual-tolerance attribute checker (relative+absolute band plus
//!   fixed-decimal agreement)
//! - A reusable model validation driver
//! - Suite reports serializable to JSON
//! - Seeded synthetic fixture tables for harness tests
//!
//! ## Verification protocol
//!
//! 1. **Load**: read the model's reference table into fixture cases
//! 2. **Filter**: optionally restrict to a case-index subset
//! 3. **Extract**: build the model's output specification per case
//! 4. **Compare**: check every bound attribute under the dual tolerance
//!
//! A concrete model plugs in through three pieces only: its fixture file
//! name, its column-to-attribute binding, and an extractor function from
//! case data to an [`OutputSpecification`]. Load and filter errors are
//! fatal for a suite; every attribute check is isolated, so one bad case
//! never masks another.

pub mod checker;
pub mod fixtures;
pub mod harness;
pub mod report;
pub mod synthetic;

pub use checker::{
    CheckFailure, OutputSpecification, Tolerance, check_specification_attribute, round_decimals,
};
pub use fixtures::{
    CASE_COLUMN, FieldValue, FixtureCase, FixtureError, load_fixtures, select_cases,
};
pub use harness::{AttributeBinding, AttributeCheck, ModelValidation, consistency_checks};
pub use report::{CheckOutcome, SuiteReport};
