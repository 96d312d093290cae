//! Message-type detection from the tag profile.
//!
//! Each supported type has a discriminating tag set; detection is
//! exact-match only and never guesses a default. MT900 and MT910 share an
//! identical tag profile, as do MT940 and MT950 — the statement pair
//! resolves to MT940 (same mapper and target), the confirmation pair is
//! reported ambiguous and requires an explicit hint.

use thiserror::Error;
use tracing::debug;

use mtmx_model::MessageType;

use crate::field_set::FieldSet;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetectError {
    #[error("tag profile matches no supported message type unambiguously")]
    Ambiguous,
}

/// Infer the message type from the tags present in the field set.
pub fn detect(fields: &FieldSet) -> Result<MessageType, DetectError> {
    let detected = profile(fields)?;
    debug!(message_type = %detected, "detected message type");
    Ok(detected)
}

fn profile(fields: &FieldSet) -> Result<MessageType, DetectError> {
    // Beneficiary institution only exists on FI-to-FI transfers.
    if fields.has_any(&["58A", "58D"]) {
        return Ok(MessageType::Mt202);
    }

    // Statement profile: balances and statement lines. MT950 is shape
    // identical and needs a hint; both feed the camt.053 mapper.
    if fields.has_any(&["60F", "62F", "61"]) {
        return Ok(MessageType::Mt940);
    }

    // Single customer credit transfer: bank operation code plus customer
    // parties, without a repeating transaction sequence.
    if fields.has("23B") && fields.count("21") == 0 {
        return Ok(MessageType::Mt103);
    }

    // Repeating 21/32B sequence: request for transfer carries a requested
    // execution date (30) or message index (28D); the multiple credit
    // transfer carries the settlement total in 32A.
    if fields.count("21") > 0 && fields.has("32B") {
        if fields.has("30") || fields.has("28D") {
            return Ok(MessageType::Mt101);
        }
        if fields.has("32A") {
            return Ok(MessageType::Mt102);
        }
        return Err(DetectError::Ambiguous);
    }

    // MT900 and MT910 are indistinguishable by tags (20/21/25/32A); never
    // guess which side of the booking this is.
    Err(DetectError::Ambiguous)
}
