//! Canonical data model for the MT → MX transformation engine.
//!
//! Defines the typed document trees for the supported ISO 20022 targets,
//! the shared code-value enums, validation issue types and the
//! per-conversion result object. Parsing, validation, mapping and XML
//! rendering live in the sibling crates.

pub mod document;
pub mod enums;
pub mod error;
pub mod issue;
pub mod result;

pub use document::{
    Account, Agent, AgentChain, Balance, Camt053Document, Camt054Document, CanonicalDocument,
    ChargesRecord, CreditTransfer, FiCreditTransfer, GroupHeader, InitiationHeader,
    InitiationTransfer, MonetaryAmount, Pacs008Document, Pacs009Document, Pain001Document,
    Party, PaymentIdentification, PaymentInstruction, PostalAddress, StatementEntry,
};
pub use enums::{ChargeBearer, CreditDebit, MessageType, SettlementMethod};
pub use error::{ConvertError, Result};
pub use issue::{FieldIssue, IssueKind, Severity, ValidationOutcome};
pub use result::{ConversionFailure, ConversionResult, ConversionSuccess};
