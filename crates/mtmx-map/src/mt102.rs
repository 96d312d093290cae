//! MT102 Multiple Customer Credit Transfer → pacs.008 (batch).

use mtmx_model::{
    CanonicalDocument, ChargeBearer, CreditTransfer, GroupHeader, Pacs008Document,
    PaymentIdentification, SettlementMethod,
};
use mtmx_normalize::charge_bearer;
use mtmx_parse::FieldSet;

use crate::common::{agent_chain, ccy_amount, date_ccy_amount, map_party, required, required_of, text_lines};
use crate::ids::IdSupply;
use crate::{MapContext, MapError, MapResult};

pub fn map(fields: &FieldSet, ctx: &MapContext) -> MapResult<CanonicalDocument> {
    let (prefix, blocks) = fields.split_blocks("21");

    let reference = required(&prefix, "20")?;
    let ids = IdSupply::new(reference);
    let (settlement_date, total_amount) = date_ccy_amount("32A", required_32a(fields, &prefix)?)?;
    let debtor = map_party(required_of(&prefix, "50K", &["50K", "50F"])?);

    // Message-level 71A applies to every transaction unless a block
    // overrides it; SHA is the scheme default when absent entirely.
    let default_bearer = match prefix.first("71A") {
        Some(raw) => {
            charge_bearer(raw).map_err(|source| MapError::Field { tag: "71A", source })?
        }
        None => ChargeBearer::Shar,
    };

    let chain = agent_chain(&prefix);
    let mut transactions = Vec::with_capacity(blocks.len());
    for (index, block) in blocks.iter().enumerate() {
        let transaction_ref = required(block, "21")?;
        let bearer = match block.first("71A") {
            Some(raw) => {
                charge_bearer(raw).map_err(|source| MapError::Field { tag: "71A", source })?
            }
            None => default_bearer,
        };
        transactions.push(CreditTransfer {
            payment_id: PaymentIdentification {
                instruction_id: Some(ids.instruction_id(index + 1)),
                end_to_end_id: transaction_ref.trim().to_string(),
                transaction_id: Some(ids.transaction_id(index + 1)),
            },
            amount: ccy_amount("32B", required(block, "32B")?)?,
            settlement_date: Some(settlement_date),
            instructed_amount: None,
            exchange_rate: None,
            charge_bearer: bearer,
            charges: Vec::new(),
            agents: chain.clone(),
            debtor: debtor.clone(),
            creditor: map_party(required(block, "59")?),
            remittance: text_lines(block, "70"),
            creditor_instructions: Vec::new(),
            instruction_info: Vec::new(),
            purpose: prefix.first("26T").map(|v| v.trim().to_string()),
        });
    }

    Ok(CanonicalDocument::Pacs008(Pacs008Document {
        header: GroupHeader {
            message_id: ids.message_id(),
            created_at: ctx.created_at,
            number_of_transactions: transactions.len(),
            settlement_method: SettlementMethod::Clrg,
            total_amount: Some(total_amount),
            settlement_date: Some(settlement_date),
            instructing_agent: chain.ordering.clone(),
        },
        transactions,
    }))
}

/// The settlement `32A` sits after the transaction sequence in some
/// messages, so fall back to the full field set when the prefix lacks it.
fn required_32a<'a>(fields: &'a FieldSet, prefix: &'a FieldSet) -> MapResult<&'a str> {
    prefix
        .first("32A")
        .or_else(|| fields.first("32A"))
        .ok_or(MapError::MissingField("32A"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mtmx_parse::tokenize;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const BATCH_MT102: &str = "\
:20:BATCH001
:50K:/5551112223
ACME CORP
:71A:OUR
:21:TX0001
:32B:USD1000,
:59:/111222333
ALICE ADAMS
:21:TX0002
:32B:USD2500,50
:59:/444555666
BOB BROWN
:71A:BEN
:32A:231005USD3500,50";

    fn map_batch() -> Pacs008Document {
        let ctx = MapContext::at(
            NaiveDate::from_ymd_opt(2023, 10, 5)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        );
        match map(&tokenize(BATCH_MT102).unwrap(), &ctx).unwrap() {
            CanonicalDocument::Pacs008(doc) => doc,
            other => panic!("wrong target: {other:?}"),
        }
    }

    #[test]
    fn header_uses_clearing_settlement_and_totals() {
        let doc = map_batch();
        assert_eq!(doc.header.settlement_method, SettlementMethod::Clrg);
        assert_eq!(doc.header.number_of_transactions, 2);
        assert_eq!(
            doc.header.total_amount.as_ref().map(|a| a.value),
            Some(Decimal::from_str("3500.50").unwrap())
        );
    }

    #[test]
    fn each_block_becomes_a_transaction() {
        let doc = map_batch();
        assert_eq!(doc.transactions.len(), 2);
        assert_eq!(doc.transactions[0].payment_id.end_to_end_id, "TX0001");
        assert_eq!(doc.transactions[0].creditor.name, "ALICE ADAMS");
        assert_eq!(doc.transactions[1].amount.value, Decimal::from_str("2500.50").unwrap());
        assert_eq!(
            doc.transactions[1].payment_id.instruction_id.as_deref(),
            Some("BATCH001INSTR002")
        );
    }

    #[test]
    fn block_charge_bearer_overrides_the_message_default() {
        let doc = map_batch();
        assert_eq!(doc.transactions[0].charge_bearer, ChargeBearer::Debt);
        assert_eq!(doc.transactions[1].charge_bearer, ChargeBearer::Cred);
    }

    #[test]
    fn debtor_is_shared_across_the_batch() {
        let doc = map_batch();
        assert!(doc.transactions.iter().all(|tx| tx.debtor.name == "ACME CORP"));
    }

    #[test]
    fn missing_71a_defaults_to_shared() {
        let text = BATCH_MT102.replace(":71A:OUR\n", "").replace(":71A:BEN\n", "");
        let ctx = MapContext::at(
            NaiveDate::from_ymd_opt(2023, 10, 5)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        );
        let CanonicalDocument::Pacs008(doc) = map(&tokenize(&text).unwrap(), &ctx).unwrap() else {
            panic!("wrong target");
        };
        assert!(doc
            .transactions
            .iter()
            .all(|tx| tx.charge_bearer == ChargeBearer::Shar));
    }
}
