//! MT103 Single Customer Credit Transfer → pacs.008.

use mtmx_model::{
    CanonicalDocument, ChargesRecord, CreditDebit, CreditTransfer, GroupHeader, Pacs008Document,
    PaymentIdentification, SettlementMethod,
};
use mtmx_normalize::{amount, charge_bearer};
use mtmx_parse::FieldSet;

use crate::common::{
    agent_chain, ccy_amount, date_ccy_amount, map_party, optional_value, required, required_of,
    text_lines,
};
use crate::ids::IdSupply;
use crate::{MapContext, MapError, MapResult};

pub fn map(fields: &FieldSet, ctx: &MapContext) -> MapResult<CanonicalDocument> {
    let reference = required(fields, "20")?;
    let ids = IdSupply::new(reference);

    let (settlement_date, settlement_amount) = date_ccy_amount("32A", required(fields, "32A")?)?;
    let bearer = charge_bearer(required(fields, "71A")?)
        .map_err(|source| MapError::Field { tag: "71A", source })?;

    // Optional fields carry a validation warning when malformed; they are
    // dropped here rather than failing the conversion.
    let instructed_amount = fields
        .first("33B")
        .and_then(|raw| optional_value(ccy_amount("33B", raw)));
    let exchange_rate = fields.first("36").and_then(|raw| {
        optional_value(amount(raw).map_err(|source| MapError::Field { tag: "36", source }))
    });

    let mut charges = Vec::new();
    // 71F charges are deducted from the beneficiary, 71G added for the sender.
    for raw in fields.all("71F") {
        if let Some(charge) = optional_value(ccy_amount("71F", raw)) {
            charges.push(ChargesRecord {
                amount: charge,
                bearer: CreditDebit::Debit,
            });
        }
    }
    for raw in fields.all("71G") {
        if let Some(charge) = optional_value(ccy_amount("71G", raw)) {
            charges.push(ChargesRecord {
                amount: charge,
                bearer: CreditDebit::Credit,
            });
        }
    }

    let agents = agent_chain(fields);
    let transaction = CreditTransfer {
        payment_id: PaymentIdentification {
            instruction_id: Some(ids.instruction_id(1)),
            end_to_end_id: reference.trim().to_string(),
            transaction_id: Some(ids.transaction_id(1)),
        },
        amount: settlement_amount.clone(),
        settlement_date: Some(settlement_date),
        instructed_amount,
        exchange_rate,
        charge_bearer: bearer,
        charges,
        agents: agents.clone(),
        debtor: map_party(required_of(fields, "50K", &["50K", "50F"])?),
        creditor: map_party(required(fields, "59")?),
        remittance: text_lines(fields, "70"),
        creditor_instructions: text_lines(fields, "23E"),
        instruction_info: text_lines(fields, "72"),
        purpose: fields.first("26T").map(|v| v.trim().to_string()),
    };

    Ok(CanonicalDocument::Pacs008(Pacs008Document {
        header: GroupHeader {
            message_id: ids.message_id(),
            created_at: ctx.created_at,
            number_of_transactions: 1,
            settlement_method: SettlementMethod::Inda,
            total_amount: Some(settlement_amount),
            settlement_date: Some(settlement_date),
            instructing_agent: agents.ordering,
        },
        transactions: vec![transaction],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mtmx_model::ChargeBearer;
    use mtmx_parse::tokenize;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const FULL_MT103: &str = "\
:20:TRF123456789
:23B:CRED
:23E:SDVA
:26T:K90
:32A:231005USD10000,
:33B:EUR9500,25
:36:1,0526
:50K:/1234567890
JOHN DOE
123 MAIN ST
:52A:DEUTDEFF
:57A:CHASUS33
:59:/0987654321
JANE SMITH
456 HIGH ST
:70:INVOICE 2023-001
:71A:OUR
:71F:USD10,
:72:/ACC/SETTLEMENT VIA CHIPS";

    fn ctx() -> MapContext {
        MapContext::at(
            NaiveDate::from_ymd_opt(2023, 10, 5)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        )
    }

    fn map_full() -> Pacs008Document {
        match map(&tokenize(FULL_MT103).unwrap(), &ctx()).unwrap() {
            CanonicalDocument::Pacs008(doc) => doc,
            other => panic!("wrong target: {other:?}"),
        }
    }

    #[test]
    fn header_carries_reference_derived_ids() {
        let doc = map_full();
        assert_eq!(doc.header.message_id, "MSGTRF123456789");
        assert_eq!(doc.header.number_of_transactions, 1);
        assert_eq!(doc.header.settlement_method, SettlementMethod::Inda);
        assert_eq!(
            doc.header.settlement_date,
            Some(NaiveDate::from_ymd_opt(2023, 10, 5).unwrap())
        );
    }

    #[test]
    fn transaction_maps_parties_and_amounts() {
        let doc = map_full();
        let tx = &doc.transactions[0];
        assert_eq!(tx.payment_id.end_to_end_id, "TRF123456789");
        assert_eq!(tx.amount.currency, "USD");
        assert_eq!(tx.amount.value, Decimal::from_str("10000").unwrap());
        assert_eq!(
            tx.instructed_amount.as_ref().map(|a| a.currency.as_str()),
            Some("EUR")
        );
        assert_eq!(tx.exchange_rate, Some(Decimal::from_str("1.0526").unwrap()));
        assert_eq!(tx.charge_bearer, ChargeBearer::Debt);
        assert_eq!(tx.debtor.name, "JOHN DOE");
        assert_eq!(tx.creditor.name, "JANE SMITH");
        assert_eq!(tx.remittance, vec!["INVOICE 2023-001"]);
        assert_eq!(tx.creditor_instructions, vec!["SDVA"]);
        assert_eq!(tx.instruction_info, vec!["/ACC/SETTLEMENT VIA CHIPS"]);
        assert_eq!(tx.purpose.as_deref(), Some("K90"));
    }

    #[test]
    fn charges_carry_their_direction() {
        let doc = map_full();
        let tx = &doc.transactions[0];
        assert_eq!(tx.charges.len(), 1);
        assert_eq!(tx.charges[0].bearer, CreditDebit::Debit);
        assert_eq!(tx.charges[0].amount.value, Decimal::from_str("10").unwrap());
    }

    #[test]
    fn agent_chain_is_mapped() {
        let doc = map_full();
        let tx = &doc.transactions[0];
        assert_eq!(
            tx.agents.ordering.as_ref().and_then(|a| a.bic.as_deref()),
            Some("DEUTDEFF")
        );
        assert_eq!(
            tx.agents.account_with.as_ref().and_then(|a| a.bic.as_deref()),
            Some("CHASUS33")
        );
        assert_eq!(
            doc.header.instructing_agent.as_ref().and_then(|a| a.bic.as_deref()),
            Some("DEUTDEFF")
        );
    }

    #[test]
    fn malformed_optional_fields_are_dropped_not_fatal() {
        let text = FULL_MT103
            .replace(":33B:EUR9500,25", ":33B:NOTANAMOUNT")
            .replace(":36:1,0526", ":36:RATE")
            .replace(":71F:USD10,", ":71F:USDTEN");
        let CanonicalDocument::Pacs008(doc) = map(&tokenize(&text).unwrap(), &ctx()).unwrap()
        else {
            panic!("wrong target");
        };
        let tx = &doc.transactions[0];
        assert_eq!(tx.instructed_amount, None);
        assert_eq!(tx.exchange_rate, None);
        assert!(tx.charges.is_empty());
    }

    #[test]
    fn missing_field_is_an_engine_fault() {
        let fields = tokenize(":20:REF\n:32A:231005USD1,\n:59:JANE\n:71A:SHA").unwrap();
        assert!(matches!(
            map(&fields, &ctx()),
            Err(MapError::MissingField("50K"))
        ));
    }
}
