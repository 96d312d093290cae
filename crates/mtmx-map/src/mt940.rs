//! MT940/950 statement messages → camt.053.
//!
//! The two types share a structure; MT950 simply never carries `86`
//! information lines. One mapper serves both.

use tracing::warn;

use mtmx_model::{Balance, Camt053Document, CanonicalDocument, MonetaryAmount, StatementEntry};
use mtmx_normalize::{balance, statement_line};
use mtmx_parse::FieldSet;

use crate::ids::IdSupply;
use crate::common::required;
use crate::{MapContext, MapError, MapResult};

pub fn map(fields: &FieldSet, ctx: &MapContext) -> MapResult<CanonicalDocument> {
    let reference = required(fields, "20")?;
    let ids = IdSupply::new(reference);

    let opening = balance(required(fields, "60F")?)
        .map_err(|source| MapError::Field { tag: "60F", source })?;
    let closing = balance(required(fields, "62F")?)
        .map_err(|source| MapError::Field { tag: "62F", source })?;

    // Statement lines carry no currency of their own; the account currency
    // comes from the opening balance.
    let currency = opening.currency.clone();
    let mut entries = Vec::new();
    for field in fields.fields() {
        match field.tag.as_str() {
            // Statement lines are warning-level during validation; an
            // unparseable one is dropped, not a fatal fault.
            "61" => match statement_line(&field.value) {
                Ok(line) => entries.push(StatementEntry {
                    value_date: line.value_date,
                    booking_date: line.booking_date,
                    credit_debit: line.credit_debit,
                    amount: MonetaryAmount::new(currency.clone(), line.amount),
                    reference: line.reference,
                    info: None,
                }),
                Err(error) => warn!(%error, "dropping unparseable statement line"),
            },
            // An 86 annotates the entry it follows; a leading 86 without a
            // preceding 61 is statement-level text and is dropped.
            "86" => {
                if let Some(entry) = entries.last_mut() {
                    let info = field.value.lines().map(str::trim).collect::<Vec<_>>().join(" ");
                    entry.info = Some(info);
                }
            }
            _ => {}
        }
    }

    Ok(CanonicalDocument::Camt053(Camt053Document {
        message_id: ids.message_id(),
        created_at: ctx.created_at,
        statement_id: reference.trim().to_string(),
        sequence: fields.first("28C").map(|v| v.trim().to_string()),
        account_id: required(fields, "25")?.trim().to_string(),
        opening_balance: Balance {
            code: "OPBD",
            credit_debit: opening.credit_debit,
            date: opening.date,
            amount: MonetaryAmount::new(opening.currency, opening.amount),
        },
        closing_balance: Balance {
            code: "CLBD",
            credit_debit: closing.credit_debit,
            date: closing.date,
            amount: MonetaryAmount::new(closing.currency, closing.amount),
        },
        entries,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mtmx_model::CreditDebit;
    use mtmx_parse::tokenize;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const FULL_MT940: &str = "\
:20:STMT20231005
:25:12345678901
:28C:184/1
:60F:C231004USD25000,
:61:2310051005D1234,56NTRFINV-2023-001
:86:OUTGOING TRANSFER TO SUPPLIER
:61:231005C5000,NCHGSALARY
:62F:C231005USD28765,44";

    fn map_full() -> Camt053Document {
        let ctx = MapContext::at(
            NaiveDate::from_ymd_opt(2023, 10, 5)
                .unwrap()
                .and_hms_opt(18, 0, 0)
                .unwrap(),
        );
        match map(&tokenize(FULL_MT940).unwrap(), &ctx).unwrap() {
            CanonicalDocument::Camt053(doc) => doc,
            other => panic!("wrong target: {other:?}"),
        }
    }

    #[test]
    fn statement_identity_and_account() {
        let doc = map_full();
        assert_eq!(doc.message_id, "MSGSTMT20231005");
        assert_eq!(doc.statement_id, "STMT20231005");
        assert_eq!(doc.sequence.as_deref(), Some("184/1"));
        assert_eq!(doc.account_id, "12345678901");
    }

    #[test]
    fn balances_keep_their_marks_and_codes() {
        let doc = map_full();
        assert_eq!(doc.opening_balance.code, "OPBD");
        assert_eq!(doc.opening_balance.credit_debit, CreditDebit::Credit);
        assert_eq!(
            doc.opening_balance.amount.value,
            Decimal::from_str("25000").unwrap()
        );
        assert_eq!(doc.closing_balance.code, "CLBD");
        assert_eq!(
            doc.closing_balance.date,
            NaiveDate::from_ymd_opt(2023, 10, 5).unwrap()
        );
    }

    #[test]
    fn entries_take_the_account_currency() {
        let doc = map_full();
        assert_eq!(doc.entries.len(), 2);
        assert!(doc.entries.iter().all(|e| e.amount.currency == "USD"));
        assert_eq!(doc.entries[0].credit_debit, CreditDebit::Debit);
        assert_eq!(doc.entries[1].credit_debit, CreditDebit::Credit);
    }

    #[test]
    fn info_lines_attach_to_the_preceding_entry() {
        let doc = map_full();
        assert_eq!(
            doc.entries[0].info.as_deref(),
            Some("OUTGOING TRANSFER TO SUPPLIER")
        );
        assert_eq!(doc.entries[1].info, None);
        assert_eq!(doc.entries[0].reference.as_deref(), Some("INV-2023-001"));
    }

    #[test]
    fn unparseable_statement_lines_are_skipped() {
        let text = FULL_MT940.replace(":61:231005C5000,NCHGSALARY", ":61:a€€€€€€€€€€");
        let ctx = MapContext::at(
            NaiveDate::from_ymd_opt(2023, 10, 5)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        );
        let CanonicalDocument::Camt053(doc) = map(&tokenize(&text).unwrap(), &ctx).unwrap() else {
            panic!("wrong target");
        };
        assert_eq!(doc.entries.len(), 1);
        assert_eq!(doc.entries[0].reference.as_deref(), Some("INV-2023-001"));
    }

    #[test]
    fn statement_without_entries_still_maps() {
        let text = ":20:S1\n:25:ACCT\n:28C:1/1\n:60F:C231004EUR100,\n:62F:C231005EUR100,";
        let ctx = MapContext::at(
            NaiveDate::from_ymd_opt(2023, 10, 5)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        );
        let CanonicalDocument::Camt053(doc) = map(&tokenize(text).unwrap(), &ctx).unwrap() else {
            panic!("wrong target");
        };
        assert!(doc.entries.is_empty());
    }
}
