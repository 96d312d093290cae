//! The conversion orchestrator.
//!
//! Runs the stages strictly left to right: tokenize, detect (unless a
//! hint short-circuits it), validate, map, serialize. The only state a
//! `Converter` holds is its clock; a single instance is safe to share
//! across threads.

use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, info, warn};

use mtmx_map::MapContext;
use mtmx_model::{
    ConversionFailure, ConversionResult, ConversionSuccess, ConvertError, MessageType,
};
use mtmx_parse::{detect, tokenize};
use mtmx_validate::validate;

use crate::clock::{Clock, SystemClock};
use crate::hash::sha256_hex;
use crate::registry::mapper_for;

pub struct Converter {
    clock: Arc<dyn Clock>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Convert one MT message. `hint` overrides tag-profile detection and
    /// is required for types detection cannot tell apart (MT900/MT910).
    pub fn convert(&self, raw: &str, hint: Option<MessageType>) -> ConversionResult {
        let fingerprint = sha256_hex(raw.as_bytes());
        let timestamp = self.clock.now();

        match self.run(raw, hint, timestamp) {
            Ok((message_type, xml)) => {
                info!(%fingerprint, %message_type, "conversion succeeded");
                ConversionResult::Success(ConversionSuccess {
                    message_type,
                    target: message_type.target_identifier(),
                    xml,
                    fingerprint,
                    timestamp,
                })
            }
            Err(error) => {
                warn!(%fingerprint, %error, "conversion failed");
                ConversionResult::Failure(ConversionFailure {
                    fingerprint,
                    timestamp,
                    error,
                })
            }
        }
    }

    /// As [`convert`](Self::convert), with the hint as text. An
    /// unrecognized hint fails without touching the message.
    pub fn convert_named(&self, raw: &str, hint: Option<&str>) -> ConversionResult {
        let hint = match hint.map(MessageType::from_str).transpose() {
            Ok(hint) => hint,
            Err(_) => {
                let fingerprint = sha256_hex(raw.as_bytes());
                let name = hint.unwrap_or_default().to_string();
                return ConversionResult::Failure(ConversionFailure {
                    fingerprint,
                    timestamp: self.clock.now(),
                    error: ConvertError::UnsupportedMessageType(name),
                });
            }
        };
        self.convert(raw, hint)
    }

    fn run(
        &self,
        raw: &str,
        hint: Option<MessageType>,
        timestamp: chrono::NaiveDateTime,
    ) -> Result<(MessageType, String), ConvertError> {
        let fields = tokenize(raw).map_err(|e| ConvertError::Malformed(e.to_string()))?;

        let message_type = match hint {
            Some(message_type) => message_type,
            None => detect(&fields).map_err(|_| ConvertError::AmbiguousMessageType)?,
        };
        debug!(%message_type, fields = fields.len(), "message tokenized");

        let outcome = validate(&fields, message_type);
        for warning in &outcome.warnings {
            warn!(%message_type, issue = %warning, "validation warning");
        }
        if outcome.has_errors() {
            return Err(ConvertError::Validation(outcome));
        }

        let document = mapper_for(message_type)(&fields, &MapContext::at(timestamp))
            .map_err(|e| ConvertError::Internal(e.to_string()))?;

        if let Some((declared, actual)) = document.batch_counts() {
            if declared != actual {
                return Err(ConvertError::BatchCountMismatch { declared, actual });
            }
        }

        let xml =
            mtmx_output::render(&document).map_err(|e| ConvertError::Internal(e.to_string()))?;
        Ok((message_type, xml))
    }
}
