//! Model validation driver
//!
//! The verification protocol is fixed: load the fixture table, filter the
//! cases, extract a specification per case, compare every bound attribute.
//! A concrete model supplies only three pieces: the fixture file name, the
//! column-to-attribute binding, and an extractor closure.

use std::collections::BTreeMap;
use std::path::Path;

use crate::checker::{
    CheckFailure, Extraction, OutputSpecification, Tolerance, check_specification_attribute,
};
use crate::fixtures::{FixtureCase, FixtureError, load_fixtures, select_cases};
use crate::report::{CheckOutcome, SuiteReport};

/// Fixture column name to specification attribute binding.
///
/// Held in a `BTreeMap` so checks always run in sorted column order,
/// independent of declaration order.
pub type AttributeBinding = BTreeMap<String, String>;

/// One deferred check: a single binding entry against a single case.
///
/// Expected-value lookup and execution are deferred so the driver can
/// report every check independently.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeCheck {
    /// Fixture case identifier
    pub case: String,
    /// Fixture column holding the expected value
    pub column: String,
    /// Specification attribute under test
    pub attribute: String,
}

impl AttributeCheck {
    /// Run this check against its case, producing an isolated outcome
    pub fn execute<S, F>(
        &self,
        data: &FixtureCase,
        extract: &F,
        tolerance: Tolerance,
    ) -> CheckOutcome
    where
        S: OutputSpecification,
        F: Fn(&FixtureCase) -> Extraction<S>,
    {
        let result = self.expected(data).and_then(|expected| {
            check_specification_attribute(
                &self.case,
                data,
                extract,
                &self.attribute,
                expected,
                tolerance,
            )
        });
        CheckOutcome::new(&self.case, &self.attribute, result)
    }

    fn expected(&self, data: &FixtureCase) -> Result<f64, CheckFailure> {
        let value = data
            .get(&self.column)
            .ok_or_else(|| CheckFailure::MissingColumn {
                column: self.column.clone(),
                case: self.case.clone(),
            })?;
        value
            .as_number()
            .ok_or_else(|| CheckFailure::NonNumericColumn {
                column: self.column.clone(),
                case: self.case.clone(),
            })
    }
}

/// Produce one deferred check per binding entry, in sorted column order
pub fn consistency_checks(data: &FixtureCase, bindings: &AttributeBinding) -> Vec<AttributeCheck> {
    let case = data.case_id();
    bindings
        .iter()
        .map(|(column, attribute)| AttributeCheck {
            case: case.clone(),
            column: column.clone(),
            attribute: attribute.clone(),
        })
        .collect()
}

/// A model verification suite definition
pub struct ModelValidation {
    name: String,
    fixture_file: String,
    bindings: AttributeBinding,
    limited_cases: Option<Vec<usize>>,
    tolerance: Tolerance,
}

impl ModelValidation {
    /// Define a suite for the named model and fixture file
    pub fn new(name: impl Into<String>, fixture_file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixture_file: fixture_file.into(),
            bindings: AttributeBinding::new(),
            limited_cases: None,
            tolerance: Tolerance::default(),
        }
    }

    /// Bind a fixture column to a specification attribute
    pub fn bind(mut self, column: impl Into<String>, attribute: impl Into<String>) -> Self {
        self.bindings.insert(column.into(), attribute.into());
        self
    }

    /// Restrict the run to the cases at the given indices, in that order
    pub fn with_cases(mut self, indices: impl Into<Vec<usize>>) -> Self {
        self.limited_cases = Some(indices.into());
        self
    }

    /// Override the default tolerance policy
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Suite name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column-to-attribute binding
    pub fn bindings(&self) -> &AttributeBinding {
        &self.bindings
    }

    /// Run the suite: load, filter, then one outcome per case and binding.
    ///
    /// Load and filter failures abort the whole suite before any check
    /// runs; individual check failures are collected and never stop the
    /// run.
    pub fn run<S, F>(
        &self,
        fixtures_dir: impl AsRef<Path>,
        extract: F,
    ) -> Result<SuiteReport, FixtureError>
    where
        S: OutputSpecification,
        F: Fn(&FixtureCase) -> Extraction<S>,
    {
        let cases = load_fixtures(fixtures_dir, &self.fixture_file)?;
        let cases = select_cases(&cases, self.limited_cases.as_deref())?;

        let mut outcomes = Vec::new();
        for data in &cases {
            for check in consistency_checks(data, &self.bindings) {
                outcomes.push(check.execute(data, &extract, self.tolerance));
            }
        }
        Ok(SuiteReport::new(&self.name, outcomes))
    }
}
