//! Canonical document trees for the supported MX targets.
//!
//! One shape per target schema (pacs.008, pacs.009, pain.001, camt.053,
//! camt.054), built by the semantic mappers and rendered by the XML
//! serializer. The trees hold already-normalized typed values; nothing here
//! re-parses raw field text.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::enums::{ChargeBearer, CreditDebit, SettlementMethod};

/// Unsigned monetary amount with its 3-letter currency code.
///
/// Positivity of transaction amounts is enforced syntactically by the
/// validator before normalization; balances may legitimately be zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonetaryAmount {
    pub currency: String,
    pub value: Decimal,
}

impl MonetaryAmount {
    pub fn new(currency: impl Into<String>, value: Decimal) -> Self {
        Self {
            currency: currency.into(),
            value,
        }
    }
}

/// Unstructured postal address: up to 4 ordered address lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostalAddress {
    pub lines: Vec<String>,
}

/// Cash account identifier (`Othr/Id` in MX terms).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub id: String,
    pub currency: Option<String>,
}

/// Debtor or creditor party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Party {
    pub name: String,
    pub address: Option<PostalAddress>,
    pub account: Option<Account>,
}

/// Financial institution agent, identified by BIC and/or name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Agent {
    pub bic: Option<String>,
    pub name: Option<String>,
}

impl Agent {
    pub fn is_empty(&self) -> bool {
        self.bic.is_none() && self.name.is_none()
    }
}

/// Agent chain shared by the payment targets: ordering institution (52),
/// correspondents (53/54), intermediary (56) and account-with institution
/// (57). Absent members are omitted from the XML entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AgentChain {
    pub ordering: Option<Agent>,
    pub senders_correspondent: Option<Agent>,
    pub receivers_correspondent: Option<Agent>,
    pub intermediary: Option<Agent>,
    pub account_with: Option<Agent>,
}

/// `PmtId`: instruction / end-to-end / transaction identifiers, each capped
/// at 35 characters by the target schemas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentIdentification {
    pub instruction_id: Option<String>,
    pub end_to_end_id: String,
    pub transaction_id: Option<String>,
}

/// Group header shared by pacs.008 and pacs.009.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupHeader {
    pub message_id: String,
    pub created_at: NaiveDateTime,
    pub number_of_transactions: usize,
    pub settlement_method: SettlementMethod,
    pub total_amount: Option<MonetaryAmount>,
    pub settlement_date: Option<NaiveDate>,
    pub instructing_agent: Option<Agent>,
}

/// Charges record from MT 71F/71G.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChargesRecord {
    pub amount: MonetaryAmount,
    pub bearer: CreditDebit,
}

/// One `CdtTrfTxInf` entry of a pacs.008 document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditTransfer {
    pub payment_id: PaymentIdentification,
    pub amount: MonetaryAmount,
    pub settlement_date: Option<NaiveDate>,
    pub instructed_amount: Option<MonetaryAmount>,
    pub exchange_rate: Option<Decimal>,
    pub charge_bearer: ChargeBearer,
    pub charges: Vec<ChargesRecord>,
    pub agents: AgentChain,
    pub debtor: Party,
    pub creditor: Party,
    pub remittance: Vec<String>,
    /// MT 23E instruction codes, for the creditor agent.
    pub creditor_instructions: Vec<String>,
    /// MT 72 sender-to-receiver information, for the next agent.
    pub instruction_info: Vec<String>,
    /// MT 26T transaction type code.
    pub purpose: Option<String>,
}

/// pacs.008 `FIToFICstmrCdtTrf`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pacs008Document {
    pub header: GroupHeader,
    pub transactions: Vec<CreditTransfer>,
}

/// pacs.009 `CdtTrfTxInf`: financial-institution transfer instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FiCreditTransfer {
    pub payment_id: PaymentIdentification,
    pub amount: MonetaryAmount,
    pub settlement_date: Option<NaiveDate>,
    pub agents: AgentChain,
    pub creditor_agent: Agent,
    pub creditor: Agent,
    pub remittance: Vec<String>,
}

/// pacs.009 `FICdtTrf`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pacs009Document {
    pub header: GroupHeader,
    pub transaction: FiCreditTransfer,
}

/// pain.001 group header; carries the initiating party instead of
/// settlement information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitiationHeader {
    pub message_id: String,
    pub created_at: NaiveDateTime,
    pub number_of_transactions: usize,
    pub initiating_party: Party,
}

/// One `CdtTrfTxInf` entry of a pain.001 payment instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitiationTransfer {
    pub payment_id: PaymentIdentification,
    pub instructed_amount: MonetaryAmount,
    pub creditor_agent: Option<Agent>,
    pub creditor: Party,
    pub remittance: Vec<String>,
}

/// pain.001 `PmtInf`: payment instruction grouping the transfers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentInstruction {
    pub payment_info_id: String,
    pub requested_execution_date: Option<NaiveDate>,
    pub debtor: Party,
    pub debtor_agent: Option<Agent>,
    pub charge_bearer: ChargeBearer,
    pub transfers: Vec<InitiationTransfer>,
}

/// pain.001 `CstmrCdtTrfInitn`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pain001Document {
    pub header: InitiationHeader,
    pub payment: PaymentInstruction,
}

/// Statement or notification balance (camt `Bal`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Balance {
    /// `OPBD` for opening, `CLBD` for closing.
    pub code: &'static str,
    pub credit_debit: CreditDebit,
    pub date: NaiveDate,
    pub amount: MonetaryAmount,
}

/// One statement entry (camt `Ntry`), from MT `61` or a debit/credit
/// confirmation's `32A`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementEntry {
    pub value_date: NaiveDate,
    pub booking_date: Option<NaiveDate>,
    pub credit_debit: CreditDebit,
    pub amount: MonetaryAmount,
    pub reference: Option<String>,
    pub info: Option<String>,
}

/// camt.053 `BkToCstmrStmt` with a single statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Camt053Document {
    pub message_id: String,
    pub created_at: NaiveDateTime,
    pub statement_id: String,
    pub sequence: Option<String>,
    pub account_id: String,
    pub opening_balance: Balance,
    pub closing_balance: Balance,
    pub entries: Vec<StatementEntry>,
}

/// camt.054 `BkToCstmrDbtCdtNtfctn` with a single notification entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Camt054Document {
    pub message_id: String,
    pub created_at: NaiveDateTime,
    pub notification_id: String,
    pub account_id: String,
    pub related_reference: Option<String>,
    pub entry: StatementEntry,
    pub servicer: Option<Agent>,
}

/// Message-type-tagged canonical document, one variant per target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CanonicalDocument {
    Pacs008(Pacs008Document),
    Pacs009(Pacs009Document),
    Pain001(Pain001Document),
    Camt053(Camt053Document),
    Camt054(Camt054Document),
}

impl CanonicalDocument {
    /// Namespace URI of the target schema.
    pub fn namespace(&self) -> &'static str {
        match self {
            CanonicalDocument::Pacs008(_) => "urn:iso:std:iso:20022:tech:xsd:pacs.008.001.08",
            CanonicalDocument::Pacs009(_) => "urn:iso:std:iso:20022:tech:xsd:pacs.009.001.08",
            CanonicalDocument::Pain001(_) => "urn:iso:std:iso:20022:tech:xsd:pain.001.001.09",
            CanonicalDocument::Camt053(_) => "urn:iso:std:iso:20022:tech:xsd:camt.053.001.08",
            CanonicalDocument::Camt054(_) => "urn:iso:std:iso:20022:tech:xsd:camt.054.001.08",
        }
    }

    /// Declared vs. actual entry counts, where the target carries both.
    ///
    /// Returns `None` for targets without a batch structure.
    pub fn batch_counts(&self) -> Option<(usize, usize)> {
        match self {
            CanonicalDocument::Pacs008(doc) => Some((
                doc.header.number_of_transactions,
                doc.transactions.len(),
            )),
            CanonicalDocument::Pain001(doc) => Some((
                doc.header.number_of_transactions,
                doc.payment.transfers.len(),
            )),
            CanonicalDocument::Pacs009(doc) => {
                Some((doc.header.number_of_transactions, 1))
            }
            CanonicalDocument::Camt053(_) | CanonicalDocument::Camt054(_) => None,
        }
    }
}
