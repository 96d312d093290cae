//! pacs.008 and pacs.009 serialization.

use std::io::Write;

use anyhow::Result;
use quick_xml::Writer;

use mtmx_model::{AgentChain, CreditTransfer, GroupHeader, Pacs008Document, Pacs009Document};

use crate::common::{
    end, start, write_agent, write_amount, write_date, write_datetime, write_optional_agent,
    write_party, write_party_account, write_text_element,
};

/// `GrpHdr` shared by both pacs targets. The reimbursement agents come
/// from the (single) settlement chain of the message.
fn write_group_header<W: Write>(
    writer: &mut Writer<W>,
    header: &GroupHeader,
    chain: &AgentChain,
) -> Result<()> {
    start(writer, "GrpHdr")?;
    write_text_element(writer, "MsgId", &header.message_id)?;
    write_datetime(writer, "CreDtTm", header.created_at)?;
    write_text_element(writer, "NbOfTxs", &header.number_of_transactions.to_string())?;
    if let Some(total) = &header.total_amount {
        write_amount(writer, "TtlIntrBkSttlmAmt", total)?;
    }
    if let Some(date) = header.settlement_date {
        write_date(writer, "IntrBkSttlmDt", date)?;
    }
    start(writer, "SttlmInf")?;
    write_text_element(writer, "SttlmMtd", header.settlement_method.as_str())?;
    write_optional_agent(writer, "InstgRmbrsmntAgt", chain.senders_correspondent.as_ref())?;
    write_optional_agent(writer, "InstdRmbrsmntAgt", chain.receivers_correspondent.as_ref())?;
    end(writer, "SttlmInf")?;
    write_optional_agent(writer, "InstgAgt", header.instructing_agent.as_ref())?;
    end(writer, "GrpHdr")?;
    Ok(())
}

fn write_payment_id<W: Write>(
    writer: &mut Writer<W>,
    id: &mtmx_model::PaymentIdentification,
) -> Result<()> {
    start(writer, "PmtId")?;
    if let Some(instruction_id) = &id.instruction_id {
        write_text_element(writer, "InstrId", instruction_id)?;
    }
    write_text_element(writer, "EndToEndId", &id.end_to_end_id)?;
    if let Some(transaction_id) = &id.transaction_id {
        write_text_element(writer, "TxId", transaction_id)?;
    }
    end(writer, "PmtId")?;
    Ok(())
}

fn write_credit_transfer<W: Write>(writer: &mut Writer<W>, tx: &CreditTransfer) -> Result<()> {
    start(writer, "CdtTrfTxInf")?;
    write_payment_id(writer, &tx.payment_id)?;
    write_amount(writer, "IntrBkSttlmAmt", &tx.amount)?;
    if let Some(date) = tx.settlement_date {
        write_date(writer, "IntrBkSttlmDt", date)?;
    }
    if let Some(instructed) = &tx.instructed_amount {
        write_amount(writer, "InstdAmt", instructed)?;
    }
    if let Some(rate) = tx.exchange_rate {
        write_text_element(writer, "XchgRate", &rate.to_string())?;
    }
    write_text_element(writer, "ChrgBr", tx.charge_bearer.as_str())?;
    for charge in &tx.charges {
        start(writer, "ChrgsInf")?;
        write_amount(writer, "Amt", &charge.amount)?;
        write_text_element(writer, "CdtDbtInd", charge.bearer.as_str())?;
        end(writer, "ChrgsInf")?;
    }
    write_optional_agent(writer, "IntrmyAgt1", tx.agents.intermediary.as_ref())?;
    write_party(writer, "Dbtr", &tx.debtor)?;
    write_party_account(writer, "DbtrAcct", &tx.debtor)?;
    write_optional_agent(writer, "DbtrAgt", tx.agents.ordering.as_ref())?;
    write_optional_agent(writer, "CdtrAgt", tx.agents.account_with.as_ref())?;
    write_party(writer, "Cdtr", &tx.creditor)?;
    write_party_account(writer, "CdtrAcct", &tx.creditor)?;
    for line in &tx.creditor_instructions {
        start(writer, "InstrForCdtrAgt")?;
        write_text_element(writer, "InstrInf", line)?;
        end(writer, "InstrForCdtrAgt")?;
    }
    for line in &tx.instruction_info {
        start(writer, "InstrForNxtAgt")?;
        write_text_element(writer, "InstrInf", line)?;
        end(writer, "InstrForNxtAgt")?;
    }
    if let Some(purpose) = &tx.purpose {
        start(writer, "Purp")?;
        write_text_element(writer, "Prtry", purpose)?;
        end(writer, "Purp")?;
    }
    if !tx.remittance.is_empty() {
        start(writer, "RmtInf")?;
        for line in &tx.remittance {
            write_text_element(writer, "Ustrd", line)?;
        }
        end(writer, "RmtInf")?;
    }
    end(writer, "CdtTrfTxInf")?;
    Ok(())
}

/// `FIToFICstmrCdtTrf` body.
pub fn write_pacs008<W: Write>(writer: &mut Writer<W>, doc: &Pacs008Document) -> Result<()> {
    let chain = doc
        .transactions
        .first()
        .map(|tx| tx.agents.clone())
        .unwrap_or_default();
    start(writer, "FIToFICstmrCdtTrf")?;
    write_group_header(writer, &doc.header, &chain)?;
    for tx in &doc.transactions {
        write_credit_transfer(writer, tx)?;
    }
    end(writer, "FIToFICstmrCdtTrf")?;
    Ok(())
}

/// `FICdtTrf` body.
pub fn write_pacs009<W: Write>(writer: &mut Writer<W>, doc: &Pacs009Document) -> Result<()> {
    let tx = &doc.transaction;
    start(writer, "FICdtTrf")?;
    write_group_header(writer, &doc.header, &tx.agents)?;
    start(writer, "CdtTrfTxInf")?;
    write_payment_id(writer, &tx.payment_id)?;
    write_amount(writer, "IntrBkSttlmAmt", &tx.amount)?;
    if let Some(date) = tx.settlement_date {
        write_date(writer, "IntrBkSttlmDt", date)?;
    }
    write_optional_agent(writer, "IntrmyAgt1", tx.agents.intermediary.as_ref())?;
    // The ordering institution is the debtor of an FI transfer.
    write_optional_agent(writer, "Dbtr", tx.agents.ordering.as_ref())?;
    write_optional_agent(writer, "CdtrAgt", Some(&tx.creditor_agent))?;
    write_agent(writer, "Cdtr", &tx.creditor)?;
    for line in &tx.remittance {
        start(writer, "InstrForCdtrAgt")?;
        write_text_element(writer, "InstrInf", line)?;
        end(writer, "InstrForCdtrAgt")?;
    }
    end(writer, "CdtTrfTxInf")?;
    end(writer, "FICdtTrf")?;
    Ok(())
}
