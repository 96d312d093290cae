//! MT202 General Financial Institution Transfer → pacs.009.

use mtmx_model::{
    CanonicalDocument, FiCreditTransfer, GroupHeader, Pacs009Document, PaymentIdentification,
    SettlementMethod,
};
use mtmx_parse::FieldSet;

use crate::common::{agent_chain, date_ccy_amount, map_agent, required, required_of, text_lines};
use crate::ids::IdSupply;
use crate::{MapContext, MapResult};

pub fn map(fields: &FieldSet, ctx: &MapContext) -> MapResult<CanonicalDocument> {
    let reference = required(fields, "20")?;
    let ids = IdSupply::new(reference);

    let (settlement_date, settlement_amount) = date_ccy_amount("32A", required(fields, "32A")?)?;
    let creditor = map_agent(required_of(fields, "58A", &["58A", "58D"])?);

    // 57 names the creditor's account-servicing institution, so it renders
    // as CdtrAgt rather than as a chain member.
    let mut agents = agent_chain(fields);
    let creditor_agent = agents.account_with.take().unwrap_or_default();

    let transaction = FiCreditTransfer {
        payment_id: PaymentIdentification {
            instruction_id: Some(ids.instruction_id(1)),
            end_to_end_id: fields
                .first("21")
                .unwrap_or(reference)
                .trim()
                .to_string(),
            transaction_id: Some(ids.transaction_id(1)),
        },
        amount: settlement_amount.clone(),
        settlement_date: Some(settlement_date),
        agents: agents.clone(),
        creditor_agent,
        creditor,
        remittance: text_lines(fields, "72"),
    };

    Ok(CanonicalDocument::Pacs009(Pacs009Document {
        header: GroupHeader {
            message_id: ids.message_id(),
            created_at: ctx.created_at,
            number_of_transactions: 1,
            settlement_method: SettlementMethod::Inda,
            total_amount: Some(settlement_amount),
            settlement_date: Some(settlement_date),
            instructing_agent: agents.ordering,
        },
        transaction,
    }))
}
