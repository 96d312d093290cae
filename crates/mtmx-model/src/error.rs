use serde::Serialize;
use thiserror::Error;

use crate::issue::ValidationOutcome;

/// Fatal conversion errors.
///
/// Tokenizer, detection and the batch-count invariant stop the pipeline
/// immediately; validator findings travel together inside `Validation`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ConvertError {
    #[error("malformed message: {0}")]
    Malformed(String),

    #[error("message type could not be determined from the tag profile")]
    AmbiguousMessageType,

    #[error("no mapping registered for message type {0}")]
    UnsupportedMessageType(String),

    #[error("validation failed with {} error(s)", .0.errors.len())]
    Validation(ValidationOutcome),

    #[error("declared transaction count {declared} does not match {actual} mapped entries")]
    BatchCountMismatch { declared: usize, actual: usize },

    #[error("internal conversion fault: {0}")]
    Internal(String),
}

impl ConvertError {
    /// Flatten into one message per defect, for response formatting.
    pub fn messages(&self) -> Vec<String> {
        match self {
            ConvertError::Validation(outcome) => outcome.error_messages(),
            other => vec![other.to_string()],
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
