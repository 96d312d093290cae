//! MT940/950 balance and statement-line normalization.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use mtmx_model::CreditDebit;

use crate::{NormalizeError, amount::amount, date::date_mmdd, date::date_yymmdd};

/// Parsed `60F`/`62F` balance value: mark, date, currency, amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceParts {
    pub credit_debit: CreditDebit,
    pub date: NaiveDate,
    pub currency: String,
    pub amount: Decimal,
}

/// Parse a balance field: `C`/`D`, `YYMMDD`, 3-letter currency, amount.
pub fn balance(raw: &str) -> Result<BalanceParts, NormalizeError> {
    let trimmed = raw.trim();
    let invalid = || NormalizeError::InvalidBalance(raw.to_string());

    let mark = match trimmed.as_bytes().first() {
        Some(b'C') => CreditDebit::Credit,
        Some(b'D') => CreditDebit::Debit,
        _ => return Err(invalid()),
    };
    // The fixed-width prefix must be ASCII before any slicing below.
    let rest = &trimmed[1..];
    let bytes = rest.as_bytes();
    if bytes.len() < 10
        || !bytes[..6].iter().all(u8::is_ascii_digit)
        || !bytes[6..9].iter().all(u8::is_ascii_uppercase)
    {
        return Err(invalid());
    }
    let date = date_yymmdd(&rest[..6]).map_err(|_| invalid())?;
    let value = amount(&rest[9..]).map_err(|_| invalid())?;

    Ok(BalanceParts {
        credit_debit: mark,
        date,
        currency: rest[6..9].to_string(),
        amount: value,
    })
}

/// Parsed `61` statement line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementLineParts {
    pub value_date: NaiveDate,
    pub booking_date: Option<NaiveDate>,
    pub credit_debit: CreditDebit,
    pub amount: Decimal,
    pub reference: Option<String>,
}

/// Parse the first line of a `61` field.
///
/// Layout: `YYMMDD` value date, optional `MMDD` entry date, debit/credit
/// mark (`C`, `D`, or reversal `RC`/`RD`), amount, then the transaction
/// type code and customer reference. Supplementary detail lines are
/// carried by the following `86` field, not here.
pub fn statement_line(raw: &str) -> Result<StatementLineParts, NormalizeError> {
    let line = raw.lines().next().unwrap_or("").trim();
    let invalid = || NormalizeError::InvalidStatementLine(raw.to_string());

    let bytes = line.as_bytes();
    if bytes.len() < 8 || !bytes[..6].iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }
    let value_date = date_yymmdd(&line[..6])?;
    let mut rest = &line[6..];

    // Optional MMDD entry date directly after the value date.
    let booking_date = if rest.len() >= 4 && rest.as_bytes()[..4].iter().all(u8::is_ascii_digit) {
        let booked = date_mmdd(&rest[..4], value_date)?;
        rest = &rest[4..];
        Some(booked)
    } else {
        None
    };

    // Debit/credit mark, with reversal prefix.
    let credit_debit = if let Some(stripped) = rest.strip_prefix("RC") {
        rest = stripped;
        CreditDebit::Credit
    } else if let Some(stripped) = rest.strip_prefix("RD") {
        rest = stripped;
        CreditDebit::Debit
    } else if let Some(stripped) = rest.strip_prefix('C') {
        rest = stripped;
        CreditDebit::Credit
    } else if let Some(stripped) = rest.strip_prefix('D') {
        rest = stripped;
        CreditDebit::Debit
    } else {
        return Err(invalid());
    };

    // Amount runs until the first non-digit, non-separator character.
    let amount_end = rest
        .find(|c: char| !c.is_ascii_digit() && c != ',' && c != '.')
        .unwrap_or(rest.len());
    if amount_end == 0 {
        return Err(invalid());
    }
    let value = amount(&rest[..amount_end])?;
    rest = &rest[amount_end..];

    // Skip the 4-character transaction type code (e.g. NTRF) when present;
    // what remains is the customer reference.
    if rest.len() >= 4
        && rest.starts_with(|c: char| c == 'N' || c == 'F' || c == 'S')
        && rest.as_bytes()[1..4].iter().all(u8::is_ascii_alphanumeric)
    {
        rest = &rest[4..];
    }
    let reference = rest.trim();
    let reference = if reference.is_empty() {
        None
    } else {
        Some(reference.to_string())
    };

    Ok(StatementLineParts {
        value_date,
        booking_date,
        credit_debit,
        amount: value,
        reference,
    })
}
