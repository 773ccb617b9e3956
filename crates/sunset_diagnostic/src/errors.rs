//! Failures raised while building or emitting notices.

use thiserror::Error;

use crate::{Notice, Severity};

/// A severity name outside the supported set.
///
/// Raised when an annotator is constructed, never when it is called.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid severity `{value}`: expected one of {}", expected_list())]
pub struct InvalidSeverity {
    value: String,
}

impl InvalidSeverity {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        InvalidSeverity {
            value: value.into(),
        }
    }

    /// The rejected text, as supplied.
    pub fn value(&self) -> &str {
        &self.value
    }
}

fn expected_list() -> String {
    Severity::ALL
        .iter()
        .map(|s| format!("`{s}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A channel refused a notice and turned it into a hard failure.
///
/// The deprecated target is never invoked once this is raised.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("deprecation notice escalated to an error: {notice}")]
pub struct Escalation {
    notice: Notice,
}

impl Escalation {
    pub fn new(notice: Notice) -> Self {
        Escalation { notice }
    }

    /// The notice that was escalated.
    pub fn notice(&self) -> &Notice {
        &self.notice
    }

    pub fn into_notice(self) -> Notice {
        self.notice
    }
}
