//! Type-safe enumerations shared across the conversion pipeline.
//!
//! These enums carry the code values that the MT and MX formats represent
//! as bare strings: message types, charge-bearer codes, settlement methods
//! and credit/debit marks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported SWIFT MT message types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageType {
    /// MT101 Request for Transfer → pain.001.
    Mt101,
    /// MT102 Multiple Customer Credit Transfer → pacs.008 (batch).
    Mt102,
    /// MT103 Single Customer Credit Transfer → pacs.008.
    Mt103,
    /// MT202 General Financial Institution Transfer → pacs.009.
    Mt202,
    /// MT900 Confirmation of Debit → camt.054.
    Mt900,
    /// MT910 Confirmation of Credit → camt.054.
    Mt910,
    /// MT940 Customer Statement → camt.053.
    Mt940,
    /// MT950 Statement Message → camt.053.
    Mt950,
}

impl MessageType {
    /// All supported message types, in registry order.
    pub const ALL: [MessageType; 8] = [
        MessageType::Mt101,
        MessageType::Mt102,
        MessageType::Mt103,
        MessageType::Mt202,
        MessageType::Mt900,
        MessageType::Mt910,
        MessageType::Mt940,
        MessageType::Mt950,
    ];

    /// Canonical name, e.g. `MT103`.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Mt101 => "MT101",
            MessageType::Mt102 => "MT102",
            MessageType::Mt103 => "MT103",
            MessageType::Mt202 => "MT202",
            MessageType::Mt900 => "MT900",
            MessageType::Mt910 => "MT910",
            MessageType::Mt940 => "MT940",
            MessageType::Mt950 => "MT950",
        }
    }

    /// ISO 20022 message-definition identifier of the conversion target.
    pub fn target_identifier(&self) -> &'static str {
        match self {
            MessageType::Mt101 => "pain.001.001.09",
            MessageType::Mt102 | MessageType::Mt103 => "pacs.008.001.08",
            MessageType::Mt202 => "pacs.009.001.08",
            MessageType::Mt900 | MessageType::Mt910 => "camt.054.001.08",
            MessageType::Mt940 | MessageType::Mt950 => "camt.053.001.08",
        }
    }

    /// Namespace URI of the target schema.
    pub fn target_namespace(&self) -> &'static str {
        match self {
            MessageType::Mt101 => "urn:iso:std:iso:20022:tech:xsd:pain.001.001.09",
            MessageType::Mt102 | MessageType::Mt103 => {
                "urn:iso:std:iso:20022:tech:xsd:pacs.008.001.08"
            }
            MessageType::Mt202 => "urn:iso:std:iso:20022:tech:xsd:pacs.009.001.08",
            MessageType::Mt900 | MessageType::Mt910 => {
                "urn:iso:std:iso:20022:tech:xsd:camt.054.001.08"
            }
            MessageType::Mt940 | MessageType::Mt950 => {
                "urn:iso:std:iso:20022:tech:xsd:camt.053.001.08"
            }
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = String;

    /// Parse a message-type hint. Accepts `MT103`, `mt103` or `103`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        let digits = normalized.strip_prefix("MT").unwrap_or(&normalized);
        match digits {
            "101" => Ok(MessageType::Mt101),
            "102" => Ok(MessageType::Mt102),
            "103" => Ok(MessageType::Mt103),
            "202" => Ok(MessageType::Mt202),
            "900" => Ok(MessageType::Mt900),
            "910" => Ok(MessageType::Mt910),
            "940" => Ok(MessageType::Mt940),
            "950" => Ok(MessageType::Mt950),
            _ => Err(format!("unknown message type: {s}")),
        }
    }
}

/// ISO 20022 `ChargeBearerType1Code`.
///
/// MT `71A` codes map onto these: OUR→DEBT, BEN→CRED, SHA→SHAR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChargeBearer {
    /// Borne by debtor.
    Debt,
    /// Borne by creditor.
    Cred,
    /// Shared.
    Shar,
}

impl ChargeBearer {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChargeBearer::Debt => "DEBT",
            ChargeBearer::Cred => "CRED",
            ChargeBearer::Shar => "SHAR",
        }
    }
}

impl fmt::Display for ChargeBearer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ISO 20022 `SettlementMethod1Code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettlementMethod {
    /// Instructed agent.
    Inda,
    /// Instructing agent.
    Inga,
    /// Cover method.
    Cove,
    /// Clearing system.
    Clrg,
}

impl SettlementMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettlementMethod::Inda => "INDA",
            SettlementMethod::Inga => "INGA",
            SettlementMethod::Cove => "COVE",
            SettlementMethod::Clrg => "CLRG",
        }
    }
}

/// Credit or debit mark on a statement entry or notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditDebit {
    Credit,
    Debit,
}

impl CreditDebit {
    /// ISO 20022 `CreditDebitCode`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CreditDebit::Credit => "CRDT",
            CreditDebit::Debit => "DBIT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_type_from_str() {
        assert_eq!("MT103".parse::<MessageType>().unwrap(), MessageType::Mt103);
        assert_eq!("mt940".parse::<MessageType>().unwrap(), MessageType::Mt940);
        assert_eq!("202".parse::<MessageType>().unwrap(), MessageType::Mt202);
        assert!("MT999".parse::<MessageType>().is_err());
    }

    #[test]
    fn target_namespaces() {
        assert_eq!(
            MessageType::Mt103.target_namespace(),
            "urn:iso:std:iso:20022:tech:xsd:pacs.008.001.08"
        );
        assert_eq!(
            MessageType::Mt102.target_namespace(),
            MessageType::Mt103.target_namespace()
        );
        assert_eq!(
            MessageType::Mt950.target_identifier(),
            MessageType::Mt940.target_identifier()
        );
    }

    #[test]
    fn charge_bearer_codes() {
        assert_eq!(ChargeBearer::Debt.as_str(), "DEBT");
        assert_eq!(ChargeBearer::Cred.as_str(), "CRED");
        assert_eq!(ChargeBearer::Shar.as_str(), "SHAR");
    }
}
