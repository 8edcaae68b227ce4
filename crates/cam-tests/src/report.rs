//! Suite outcome collection and JSON reporting

use serde::Serialize;

use crate::checker::CheckFailure;

/// Outcome of one attribute check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    /// Fixture case identifier
    pub case: String,
    /// Specification attribute that was checked
    pub attribute: String,
    /// The failure, `None` when the check passed
    pub failure: Option<CheckFailure>,
}

impl CheckOutcome {
    pub fn new(case: &str, attribute: &str, result: Result<(), CheckFailure>) -> Self {
        Self {
            case: case.to_string(),
            attribute: attribute.to_string(),
            failure: result.err(),
        }
    }

    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// All outcomes from one model verification run
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    /// Model under verification
    pub model: String,
    /// One entry per executed check, in execution order
    pub outcomes: Vec<CheckOutcome>,
}

impl SuiteReport {
    pub fn new(model: &str, outcomes: Vec<CheckOutcome>) -> Self {
        Self {
            model: model.to_string(),
            outcomes,
        }
    }

    /// Number of executed checks
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of passing checks
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    /// Failing outcomes, in execution order
    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }

    /// True when every check passed
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed())
    }

    /// Pretty-printed JSON for diagnostics
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Panic with every failure message when any check failed
    #[track_caller]
    pub fn assert_success(&self) {
        if self.is_success() {
            return;
        }
        let mut message = format!(
            "{}: {} of {} checks failed",
            self.model,
            self.total() - self.passed(),
            self.total()
        );
        for outcome in self.failures() {
            message.push('\n');
            match &outcome.failure {
                Some(failure) => message.push_str(&failure.to_string()),
                None => unreachable!("failures() yields failing outcomes"),
            }
        }
        panic!("{}", message);
    }
}
