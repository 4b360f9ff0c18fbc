use std::{borrow::Cow, path::PathBuf, time::Duration};

use crate::outcome::{FailureDetail, Outcome};

/// One executed test, as handed to the reporter by the test engine.
///
/// Results are read-only from the reporter's point of view: once recorded
/// they are never mutated or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    /// The containing test class or group.
    pub group: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub duration: Duration,
    pub outcome: Outcome,
    /// Backtrace-derived location string, possibly carrying a trailing
    /// `[file:line]` pointing at the failed assertion.
    pub location: Option<String>,
    /// Declared source position of the test function.
    pub origin: Option<TestOrigin>,
}

impl TestResult {
    pub fn new(
        group: impl Into<Cow<'static, str>>,
        name: impl Into<Cow<'static, str>>,
        duration: Duration,
        outcome: Outcome,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            duration,
            outcome,
            location: None,
            origin: None,
        }
    }

    pub fn with_location(self, location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            ..self
        }
    }

    pub fn with_origin(self, origin: TestOrigin) -> Self {
        Self {
            origin: Some(origin),
            ..self
        }
    }

    pub fn skipped(&self) -> bool {
        self.outcome.skipped()
    }

    pub fn failure(&self) -> Option<&FailureDetail> {
        self.outcome.failure()
    }

    /// Path to the failed assertion, taken from a trailing `[...]` in the
    /// location string.
    pub(crate) fn assertion_path(&self) -> Option<&str> {
        let location = self.location.as_deref()?;
        let inner = location.strip_suffix(']')?;
        let start = inner.rfind('[')?;
        Some(&inner[start + 1..])
    }
}

/// Where a test function is declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestOrigin {
    pub file: PathBuf,
    pub line: u32,
}

impl TestOrigin {
    pub fn new(file: impl Into<PathBuf>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

/// Ordered, append-only sequence of recorded results.
pub type ResultSet = Vec<TestResult>;
