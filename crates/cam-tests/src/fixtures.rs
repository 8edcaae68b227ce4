//! Fixture table loading and case selection
//!
//! Reference fixtures are CSV tables with a header row naming columns;
//! each data row is one fixture case. Numeric-looking fields are coerced
//! to `f64` on load, everything else stays text.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Column holding the fixture case identifier
pub const CASE_COLUMN: &str = "Case";

/// Errors raised while loading or selecting fixture cases.
///
/// All of these are fatal for a suite: they fire before any attribute
/// check runs.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum FixtureError {
    /// Fixture file missing or unreadable
    #[error("cannot read fixture file {path}: {source}")]
    Access {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Fixture file readable but a record could not be parsed
    #[error("malformed fixture record in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Case selection index outside the loaded range
    #[error("case index {index} out of range for {len} loaded cases")]
    CaseIndex { index: usize, len: usize },
}

/// One fixture field, numeric when the raw text parses as a float
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Coerce raw text: base-10 float if it parses, original text otherwise
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<f64>() {
            Ok(number) => FieldValue::Number(number),
            Err(_) => FieldValue::Text(raw.to_string()),
        }
    }

    /// Numeric value, `None` for text fields
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(number) => Some(*number),
            FieldValue::Text(_) => None,
        }
    }

    /// Text value, `None` for numeric fields
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Number(_) => None,
            FieldValue::Text(text) => Some(text),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(number) => write!(f, "{}", number),
            FieldValue::Text(text) => f.write_str(text),
        }
    }
}

/// One row of reference data: an ordered column name to value mapping
#[derive(Debug, Clone, Default)]
pub struct FixtureCase {
    fields: Vec<(String, FieldValue)>,
}

impl FixtureCase {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a field, preserving file column order
    pub fn push(&mut self, column: impl Into<String>, value: FieldValue) {
        self.fields.push((column.into(), value));
    }

    /// Field value for the named column
    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Numeric value for the named column
    pub fn number(&self, column: &str) -> Option<f64> {
        self.get(column).and_then(FieldValue::as_number)
    }

    /// Column names in file order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Case identifier from the `Case` column, `"?"` when absent
    pub fn case_id(&self) -> String {
        match self.get(CASE_COLUMN) {
            Some(value) => value.to_string(),
            None => "?".to_string(),
        }
    }
}

/// Load a fixture table into cases, preserving row order.
///
/// A missing or unreadable file is fatal and reported before any case is
/// produced; no side effects beyond the read.
pub fn load_fixtures(
    directory: impl AsRef<Path>,
    file_name: &str,
) -> Result<Vec<FixtureCase>, FixtureError> {
    let path = directory.as_ref().join(file_name);
    let mut reader = csv::Reader::from_path(&path).map_err(|source| FixtureError::Access {
        path: path.clone(),
        source,
    })?;

    let headers = reader
        .headers()
        .map_err(|source| FixtureError::Malformed {
            path: path.clone(),
            source,
        })?
        .clone();

    let mut cases = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| FixtureError::Malformed {
            path: path.clone(),
            source,
        })?;
        let mut case = FixtureCase::new();
        for (column, raw) in headers.iter().zip(record.iter()) {
            case.push(column, FieldValue::parse(raw));
        }
        cases.push(case);
    }
    Ok(cases)
}

/// Select cases by index, or all of them when `indices` is `None`.
///
/// The index list is honoured exactly, allowing reordering and repetition.
pub fn select_cases(
    cases: &[FixtureCase],
    indices: Option<&[usize]>,
) -> Result<Vec<FixtureCase>, FixtureError> {
    match indices {
        None => Ok(cases.to_vec()),
        Some(indices) => indices
            .iter()
            .map(|&index| {
                cases.get(index).cloned().ok_or(FixtureError::CaseIndex {
                    index,
                    len: cases.len(),
                })
            })
            .collect(),
    }
}
