use std::borrow::Cow;

use crate::color::Color;

/// Classification of a single executed test.
///
/// Outcomes are explicit variants, never raw result-code characters; the
/// character a reporter prints for an outcome is derived via [`Outcome::glyph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    /// The test raised instead of failing an assertion.
    Errored(FailureDetail),
    /// A genuine assertion failure.
    Failed(FailureDetail),
    /// The test was skipped, optionally with a recorded reason.
    Skipped { detail: Option<FailureDetail> },
}

impl Outcome {
    pub fn passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    pub fn errored(&self) -> bool {
        matches!(self, Outcome::Errored(_))
    }

    pub fn failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    pub fn skipped(&self) -> bool {
        matches!(self, Outcome::Skipped { .. })
    }

    /// The single-character progress code for this outcome.
    pub fn glyph(&self) -> char {
        match self {
            Outcome::Passed => '.',
            Outcome::Errored(_) => 'E',
            Outcome::Failed(_) => 'F',
            Outcome::Skipped { .. } => 'S',
        }
    }

    /// The color a reporter renders this outcome in.
    pub fn color(&self) -> Color {
        match self {
            Outcome::Passed => Color::Green,
            Outcome::Errored(_) | Outcome::Failed(_) => Color::Red,
            Outcome::Skipped { .. } => Color::Yellow,
        }
    }

    /// The failure carried by this outcome, if any.
    ///
    /// Skips count here: a skip recorded with a reason carries it as a
    /// detail, which is what lets verbose runs list skipped tests alongside
    /// failures.
    pub fn failure(&self) -> Option<&FailureDetail> {
        match self {
            Outcome::Passed => None,
            Outcome::Errored(detail) | Outcome::Failed(detail) => Some(detail),
            Outcome::Skipped { detail } => detail.as_ref(),
        }
    }
}

/// What went wrong, as reported by the test engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureDetail {
    /// Short classification, e.g. `"Failure"`, `"Error"` or `"Skipped"`.
    pub label: Cow<'static, str>,
    pub message: String,
}

impl FailureDetail {
    pub fn new(label: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            message: message.into(),
        }
    }
}
