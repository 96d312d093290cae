//! Per-conversion result object returned to the calling layer.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::enums::MessageType;
use crate::error::ConvertError;

/// Successful conversion: the serialized XML plus audit data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionSuccess {
    pub message_type: MessageType,
    pub target: &'static str,
    pub xml: String,
    /// SHA-256 hex digest of the input bytes, for anonymized audit logging.
    pub fingerprint: String,
    pub timestamp: NaiveDateTime,
}

/// Failed conversion: the full error set, never partial XML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionFailure {
    pub fingerprint: String,
    pub timestamp: NaiveDateTime,
    pub error: ConvertError,
}

/// Tagged success/failure outcome of one `convert` invocation.
///
/// Created once per invocation, never mutated, returned to the caller for
/// logging and response formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ConversionResult {
    Success(ConversionSuccess),
    Failure(ConversionFailure),
}

impl ConversionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionResult::Success(_))
    }

    pub fn xml(&self) -> Option<&str> {
        match self {
            ConversionResult::Success(s) => Some(&s.xml),
            ConversionResult::Failure(_) => None,
        }
    }

    pub fn fingerprint(&self) -> &str {
        match self {
            ConversionResult::Success(s) => &s.fingerprint,
            ConversionResult::Failure(f) => &f.fingerprint,
        }
    }

    /// Flattened error messages; empty on success.
    pub fn error_messages(&self) -> Vec<String> {
        match self {
            ConversionResult::Success(_) => Vec::new(),
            ConversionResult::Failure(f) => f.error.messages(),
        }
    }
}
