//! Field-level validation issues and the per-conversion outcome.

use serde::Serialize;
use std::fmt;

/// Issue severity. Errors block conversion, warnings do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

/// What went wrong with a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum IssueKind {
    /// A mandatory tag is absent from the message.
    MissingMandatoryField,
    /// A tag is present but its value fails the value grammar.
    InvalidFieldFormat { reason: String },
    /// A tag carries a value outside its code table.
    InvalidCodeValue { value: String },
}

/// A single validation finding, naming the offending tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub tag: String,
    pub kind: IssueKind,
    pub severity: Severity,
}

impl FieldIssue {
    pub fn missing(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            kind: IssueKind::MissingMandatoryField,
            severity: Severity::Error,
        }
    }

    pub fn format(tag: &str, reason: impl Into<String>) -> Self {
        Self {
            tag: tag.to_string(),
            kind: IssueKind::InvalidFieldFormat {
                reason: reason.into(),
            },
            severity: Severity::Error,
        }
    }

    pub fn code(tag: &str, value: impl Into<String>) -> Self {
        Self {
            tag: tag.to_string(),
            kind: IssueKind::InvalidCodeValue {
                value: value.into(),
            },
            severity: Severity::Error,
        }
    }

    pub fn warning(mut self) -> Self {
        self.severity = Severity::Warning;
        self
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::MissingMandatoryField => {
                write!(f, "mandatory field :{}: is missing", self.tag)
            }
            IssueKind::InvalidFieldFormat { reason } => {
                write!(f, "field :{}: has an invalid format: {reason}", self.tag)
            }
            IssueKind::InvalidCodeValue { value } => {
                write!(f, "field :{}: has an invalid code value: {value}", self.tag)
            }
        }
    }
}

/// Accumulated validation findings for one conversion attempt.
///
/// Validation never short-circuits: every mandatory tag and every format
/// rule is evaluated, so a caller sees all defects in one round trip. An
/// outcome with any error means no canonical document is produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub errors: Vec<FieldIssue>,
    pub warnings: Vec<FieldIssue>,
}

impl ValidationOutcome {
    pub fn push(&mut self, issue: FieldIssue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}
