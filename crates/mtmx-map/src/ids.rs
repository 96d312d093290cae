//! Deterministic identifier generation.
//!
//! Every generated identifier is derived from the sender's reference
//! (field `20`) and, for repeating elements, the 1-based transaction
//! index. The same input message therefore always yields the same
//! identifiers; no clock or counter state is involved.

/// Maximum length of an ISO 20022 `Max35Text` identifier.
const MAX_ID_LEN: usize = 35;

/// Identifier supply seeded from the sender's reference.
#[derive(Debug, Clone)]
pub struct IdSupply {
    base: String,
}

impl IdSupply {
    pub fn new(reference: &str) -> Self {
        Self {
            base: take_chars(reference.trim(), 30),
        }
    }

    /// Message identifier: `MSG` followed by the reference.
    pub fn message_id(&self) -> String {
        self.with_suffix_and_prefix("MSG", "")
    }

    /// Instruction identifier for the `index`-th transaction (1-based).
    pub fn instruction_id(&self, index: usize) -> String {
        self.with_suffix_and_prefix("", &format!("INSTR{index:03}"))
    }

    /// Transaction identifier for the `index`-th transaction (1-based).
    pub fn transaction_id(&self, index: usize) -> String {
        self.with_suffix_and_prefix("", &format!("TXN{index:03}"))
    }

    /// Payment information identifier for pain.001 instructions.
    pub fn payment_info_id(&self) -> String {
        self.with_suffix_and_prefix("PMT", "")
    }

    /// Base reference truncated to the `Max35Text` cap, trimming the tail
    /// of the reference rather than the affixes so index digits survive.
    fn with_suffix_and_prefix(&self, prefix: &str, suffix: &str) -> String {
        let room = MAX_ID_LEN - prefix.len() - suffix.len();
        format!("{prefix}{}{suffix}", take_chars(&self.base, room))
    }
}

/// The `Max35Text` cap counts characters; a reference is never cut in the
/// middle of a code point.
fn take_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
