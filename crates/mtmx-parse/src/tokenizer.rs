//! Line-based tokenizer for the colon-delimited MT tag format.
//!
//! A line matching the tag-marker pattern (`:20:`, `:32A:`, ...) starts a
//! new field; every following line that is not itself a marker is appended
//! to the current field's value, newline-joined. No semantic interpretation
//! happens here: values stay raw strings, unknown tags are retained.

use thiserror::Error;
use tracing::trace;

use crate::field_set::{Field, FieldSet};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("message is empty")]
    EmptyMessage,

    #[error("no tag markers found in message")]
    NoTagMarkers,
}

/// Split a tag-marker line into `(tag, rest-of-line)`.
///
/// A marker is a leading colon, two ASCII digits, an optional uppercase
/// letter, and a closing colon. Returns `None` for any other line.
fn split_marker(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix(':')?;
    let bytes = rest.as_bytes();
    if bytes.len() < 3 || !bytes[0].is_ascii_digit() || !bytes[1].is_ascii_digit() {
        return None;
    }
    let tag_len = if bytes[2] == b':' {
        2
    } else if bytes[2].is_ascii_uppercase() && bytes.get(3) == Some(&b':') {
        3
    } else {
        return None;
    };
    Some((&rest[..tag_len], &rest[tag_len + 1..]))
}

/// Tokenize raw MT message text into an ordered field set.
///
/// Fails only when the text contains no recognizable tag markers at all;
/// empty field values are retained for the validator to flag.
pub fn tokenize(text: &str) -> Result<FieldSet, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::EmptyMessage);
    }

    let mut fields: Vec<Field> = Vec::new();

    for line in text.lines() {
        if let Some((tag, rest)) = split_marker(line.trim_end()) {
            fields.push(Field {
                tag: tag.to_string(),
                value: rest.trim().to_string(),
            });
        } else if let Some(current) = fields.last_mut() {
            let continuation = line.trim();
            if continuation.is_empty() {
                continue;
            }
            if current.value.is_empty() {
                current.value = continuation.to_string();
            } else {
                current.value.push('\n');
                current.value.push_str(continuation);
            }
        }
        // Lines before the first marker are discarded: the MT basic-header
        // blocks are stripped by the calling layer, so anything left over
        // is surrounding noise.
    }

    if fields.is_empty() {
        return Err(ParseError::NoTagMarkers);
    }

    trace!(field_count = fields.len(), "tokenized message");
    Ok(FieldSet::new(fields))
}
