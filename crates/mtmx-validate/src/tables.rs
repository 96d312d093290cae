//! Static mandatory-tag tables per message type.
//!
//! Process-wide, read-only lookup data: initialized at compile time and
//! never mutated. Letter-option fields list every accepted option; the
//! label is what error messages name.

use mtmx_model::MessageType;

/// One mandatory field: the tag named in errors and the tag options that
/// satisfy it.
#[derive(Debug, Clone, Copy)]
pub struct MandatoryTag {
    pub label: &'static str,
    pub options: &'static [&'static str],
}

const fn tag(label: &'static str, options: &'static [&'static str]) -> MandatoryTag {
    MandatoryTag { label, options }
}

static MT103: &[MandatoryTag] = &[
    tag("20", &["20"]),
    tag("23B", &["23B"]),
    tag("32A", &["32A"]),
    tag("50K", &["50K", "50F"]),
    tag("59", &["59"]),
    tag("71A", &["71A"]),
];

static MT102: &[MandatoryTag] = &[
    tag("20", &["20"]),
    tag("50K", &["50K", "50F"]),
    tag("32A", &["32A"]),
];

static MT202: &[MandatoryTag] = &[
    tag("20", &["20"]),
    tag("32A", &["32A"]),
    tag("58A", &["58A", "58D"]),
];

static MT101: &[MandatoryTag] = &[
    tag("20", &["20"]),
    tag("30", &["30"]),
    tag("50K", &["50K", "50F"]),
];

static MT94X: &[MandatoryTag] = &[
    tag("20", &["20"]),
    tag("25", &["25"]),
    tag("28C", &["28C"]),
    tag("60F", &["60F"]),
    tag("62F", &["62F"]),
];

static MT9XX: &[MandatoryTag] = &[
    tag("20", &["20"]),
    tag("21", &["21"]),
    tag("25", &["25"]),
    tag("32A", &["32A"]),
];

/// Mandatory tags for `message_type`. Repeating-block requirements
/// (MT102/MT101 transaction sequences) are checked separately by the
/// validator.
pub fn mandatory_tags(message_type: MessageType) -> &'static [MandatoryTag] {
    match message_type {
        MessageType::Mt101 => MT101,
        MessageType::Mt102 => MT102,
        MessageType::Mt103 => MT103,
        MessageType::Mt202 => MT202,
        MessageType::Mt900 | MessageType::Mt910 => MT9XX,
        MessageType::Mt940 | MessageType::Mt950 => MT94X,
    }
}

/// True if the message type carries a repeating 21/32B transaction
/// sequence.
pub fn has_transaction_blocks(message_type: MessageType) -> bool {
    matches!(message_type, MessageType::Mt101 | MessageType::Mt102)
}
