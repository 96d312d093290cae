//! MT101 Request for Transfer → pain.001.

use mtmx_model::{
    CanonicalDocument, ChargeBearer, InitiationHeader, InitiationTransfer, Pain001Document,
    PaymentInstruction, PaymentIdentification,
};
use mtmx_normalize::{charge_bearer, date_yymmdd};
use mtmx_parse::FieldSet;

use crate::common::{ACCOUNT_WITH, ORDERING, ccy_amount, map_agent, map_party, required, required_of, text_lines};
use crate::ids::IdSupply;
use crate::{MapContext, MapError, MapResult};

pub fn map(fields: &FieldSet, ctx: &MapContext) -> MapResult<CanonicalDocument> {
    let (prefix, blocks) = fields.split_blocks("21");

    let reference = required(&prefix, "20")?;
    let ids = IdSupply::new(reference);

    let execution_date = date_yymmdd(required(&prefix, "30")?)
        .map_err(|source| MapError::Field { tag: "30", source })?;
    let debtor = map_party(required_of(&prefix, "50K", &["50K", "50F"])?);
    let debtor_agent = prefix
        .first_of(ORDERING)
        .map(|(_, raw)| map_agent(raw))
        .filter(|agent| !agent.is_empty());

    let bearer = match prefix.first("71A") {
        Some(raw) => {
            charge_bearer(raw).map_err(|source| MapError::Field { tag: "71A", source })?
        }
        None => ChargeBearer::Shar,
    };

    let mut transfers = Vec::with_capacity(blocks.len());
    for (index, block) in blocks.iter().enumerate() {
        let transaction_ref = required(block, "21")?;
        transfers.push(InitiationTransfer {
            payment_id: PaymentIdentification {
                instruction_id: Some(ids.instruction_id(index + 1)),
                end_to_end_id: transaction_ref.trim().to_string(),
                transaction_id: None,
            },
            instructed_amount: ccy_amount("32B", required(block, "32B")?)?,
            creditor_agent: block
                .first_of(ACCOUNT_WITH)
                .map(|(_, raw)| map_agent(raw))
                .filter(|agent| !agent.is_empty()),
            creditor: map_party(required(block, "59")?),
            remittance: text_lines(block, "70"),
        });
    }

    Ok(CanonicalDocument::Pain001(Pain001Document {
        header: InitiationHeader {
            message_id: ids.message_id(),
            created_at: ctx.created_at,
            number_of_transactions: transfers.len(),
            initiating_party: debtor.clone(),
        },
        payment: PaymentInstruction {
            payment_info_id: ids.payment_info_id(),
            requested_execution_date: Some(execution_date),
            debtor,
            debtor_agent,
            charge_bearer: bearer,
            transfers,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use mtmx_parse::tokenize;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const FULL_MT101: &str = "\
:20:REQ20231005
:30:231006
:50K:/9988776655
TREASURY DEPT
GLOBEX CORP
:52A:DEUTDEFF
:71A:SHA
:21:PAY001
:32B:USD750,
:57A:CHASUS33
:59:/123123123
SUPPLIER ONE
:70:INVOICE A-17
:21:PAY002
:32B:USD1250,75
:59:/456456456
SUPPLIER TWO";

    fn map_full() -> Pain001Document {
        let ctx = MapContext::at(
            NaiveDate::from_ymd_opt(2023, 10, 5)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap(),
        );
        match map(&tokenize(FULL_MT101).unwrap(), &ctx).unwrap() {
            CanonicalDocument::Pain001(doc) => doc,
            other => panic!("wrong target: {other:?}"),
        }
    }

    #[test]
    fn header_and_instruction_identify_the_request() {
        let doc = map_full();
        assert_eq!(doc.header.message_id, "MSGREQ20231005");
        assert_eq!(doc.header.number_of_transactions, 2);
        assert_eq!(doc.payment.payment_info_id, "PMTREQ20231005");
        assert_eq!(
            doc.payment.requested_execution_date,
            Some(NaiveDate::from_ymd_opt(2023, 10, 6).unwrap())
        );
    }

    #[test]
    fn debtor_doubles_as_initiating_party() {
        let doc = map_full();
        assert_eq!(doc.header.initiating_party.name, "TREASURY DEPT");
        assert_eq!(doc.payment.debtor.name, "TREASURY DEPT");
        assert_eq!(
            doc.payment.debtor_agent.as_ref().and_then(|a| a.bic.as_deref()),
            Some("DEUTDEFF")
        );
    }

    #[test]
    fn transfers_carry_per_block_details() {
        let doc = map_full();
        assert_eq!(doc.payment.transfers.len(), 2);
        let first = &doc.payment.transfers[0];
        assert_eq!(first.payment_id.end_to_end_id, "PAY001");
        assert_eq!(first.instructed_amount.value, Decimal::from_str("750").unwrap());
        assert_eq!(
            first.creditor_agent.as_ref().and_then(|a| a.bic.as_deref()),
            Some("CHASUS33")
        );
        assert_eq!(first.remittance, vec!["INVOICE A-17"]);
        let second = &doc.payment.transfers[1];
        assert_eq!(second.creditor.name, "SUPPLIER TWO");
        assert!(second.creditor_agent.is_none());
    }

    #[test]
    fn charge_bearer_defaults_to_shared() {
        let text = FULL_MT101.replace(":71A:SHA\n", "");
        let ctx = MapContext::at(
            NaiveDate::from_ymd_opt(2023, 10, 5)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        );
        let CanonicalDocument::Pain001(doc) = map(&tokenize(&text).unwrap(), &ctx).unwrap() else {
            panic!("wrong target");
        };
        assert_eq!(doc.payment.charge_bearer, ChargeBearer::Shar);
    }
}
