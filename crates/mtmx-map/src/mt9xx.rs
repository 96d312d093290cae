//! MT900/910 debit and credit confirmations → camt.054.
//!
//! The two types are structurally identical; only the entry direction
//! differs. Detection can never tell them apart, so the orchestrator picks
//! the mapper from the caller's type hint.

use mtmx_model::{Camt054Document, CanonicalDocument, CreditDebit, StatementEntry};
use mtmx_parse::FieldSet;

use crate::common::{ORDERING, date_ccy_amount, map_agent, required, text_lines};
use crate::ids::IdSupply;
use crate::{MapContext, MapResult};

/// MT900 Confirmation of Debit.
pub fn map_debit(fields: &FieldSet, ctx: &MapContext) -> MapResult<CanonicalDocument> {
    map(fields, ctx, CreditDebit::Debit)
}

/// MT910 Confirmation of Credit.
pub fn map_credit(fields: &FieldSet, ctx: &MapContext) -> MapResult<CanonicalDocument> {
    map(fields, ctx, CreditDebit::Credit)
}

fn map(
    fields: &FieldSet,
    ctx: &MapContext,
    direction: CreditDebit,
) -> MapResult<CanonicalDocument> {
    let reference = required(fields, "20")?;
    let ids = IdSupply::new(reference);

    let (value_date, amount) = date_ccy_amount("32A", required(fields, "32A")?)?;
    let info_lines = text_lines(fields, "72");

    Ok(CanonicalDocument::Camt054(Camt054Document {
        message_id: ids.message_id(),
        created_at: ctx.created_at,
        notification_id: reference.trim().to_string(),
        account_id: required(fields, "25")?.trim().to_string(),
        related_reference: fields.first("21").map(|v| v.trim().to_string()),
        entry: StatementEntry {
            value_date,
            booking_date: None,
            credit_debit: direction,
            amount,
            reference: None,
            info: if info_lines.is_empty() {
                None
            } else {
                Some(info_lines.join(" "))
            },
        },
        servicer: fields
            .first_of(ORDERING)
            .map(|(_, raw)| map_agent(raw))
            .filter(|agent| !agent.is_empty()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mtmx_parse::tokenize;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const FULL_MT900: &str = "\
:20:DBTCONF001
:21:TRF123456789
:25:98765432101
:32A:231005USD10000,
:52A:DEUTDEFF
:72:/DEBIT/ CHARGED PER YOUR ORDER";

    fn ctx() -> MapContext {
        MapContext::at(
            NaiveDate::from_ymd_opt(2023, 10, 5)
                .unwrap()
                .and_hms_opt(15, 0, 0)
                .unwrap(),
        )
    }

    fn map_900() -> Camt054Document {
        match map_debit(&tokenize(FULL_MT900).unwrap(), &ctx()).unwrap() {
            CanonicalDocument::Camt054(doc) => doc,
            other => panic!("wrong target: {other:?}"),
        }
    }

    #[test]
    fn debit_confirmation_is_a_debit_entry() {
        let doc = map_900();
        assert_eq!(doc.entry.credit_debit, CreditDebit::Debit);
        assert_eq!(doc.entry.amount.currency, "USD");
        assert_eq!(doc.entry.amount.value, Decimal::from_str("10000").unwrap());
        assert_eq!(
            doc.entry.value_date,
            NaiveDate::from_ymd_opt(2023, 10, 5).unwrap()
        );
    }

    #[test]
    fn references_and_account_carry_over() {
        let doc = map_900();
        assert_eq!(doc.notification_id, "DBTCONF001");
        assert_eq!(doc.related_reference.as_deref(), Some("TRF123456789"));
        assert_eq!(doc.account_id, "98765432101");
        assert_eq!(doc.servicer.as_ref().and_then(|a| a.bic.as_deref()), Some("DEUTDEFF"));
        assert_eq!(
            doc.entry.info.as_deref(),
            Some("/DEBIT/ CHARGED PER YOUR ORDER")
        );
    }

    #[test]
    fn credit_confirmation_flips_the_direction() {
        let doc = match map_credit(&tokenize(FULL_MT900).unwrap(), &ctx()).unwrap() {
            CanonicalDocument::Camt054(doc) => doc,
            other => panic!("wrong target: {other:?}"),
        };
        assert_eq!(doc.entry.credit_debit, CreditDebit::Credit);
    }
}
