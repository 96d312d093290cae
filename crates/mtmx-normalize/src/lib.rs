//! Normalization of raw MT field values into canonical typed values.
//!
//! Each conversion is total for validated input: the validator has already
//! rejected values these functions would refuse, so the error paths here
//! only fire on engine defects, which the orchestrator surfaces as
//! internal faults.

pub mod amount;
pub mod charge;
pub mod date;
pub mod party;
pub mod statement;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("invalid date: {0} (expected YYMMDD)")]
    InvalidDate(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("invalid charge bearer code: {0}")]
    InvalidChargeCode(String),

    #[error("invalid balance value: {0}")]
    InvalidBalance(String),

    #[error("invalid statement line: {0}")]
    InvalidStatementLine(String),
}

pub use amount::amount;
pub use charge::charge_bearer;
pub use date::{date_mmdd, date_yymmdd};
pub use party::{InstitutionBlock, MAX_ADDRESS_LINES, PartyBlock, institution_block, is_bic, party_block};
pub use statement::{BalanceParts, StatementLineParts, balance, statement_line};
