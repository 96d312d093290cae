//! pain.001 serialization.

use std::io::Write;

use anyhow::Result;
use quick_xml::Writer;

use mtmx_model::Pain001Document;

use crate::common::{
    end, start, write_amount, write_date, write_datetime, write_optional_agent, write_party,
    write_party_account, write_text_element,
};

/// `CstmrCdtTrfInitn` body.
pub fn write_pain001<W: Write>(writer: &mut Writer<W>, doc: &Pain001Document) -> Result<()> {
    start(writer, "CstmrCdtTrfInitn")?;

    start(writer, "GrpHdr")?;
    write_text_element(writer, "MsgId", &doc.header.message_id)?;
    write_datetime(writer, "CreDtTm", doc.header.created_at)?;
    write_text_element(
        writer,
        "NbOfTxs",
        &doc.header.number_of_transactions.to_string(),
    )?;
    write_party(writer, "InitgPty", &doc.header.initiating_party)?;
    end(writer, "GrpHdr")?;

    let payment = &doc.payment;
    start(writer, "PmtInf")?;
    write_text_element(writer, "PmtInfId", &payment.payment_info_id)?;
    write_text_element(writer, "PmtMtd", "TRF")?;
    if let Some(date) = payment.requested_execution_date {
        start(writer, "ReqdExctnDt")?;
        write_date(writer, "Dt", date)?;
        end(writer, "ReqdExctnDt")?;
    }
    write_party(writer, "Dbtr", &payment.debtor)?;
    write_party_account(writer, "DbtrAcct", &payment.debtor)?;
    write_optional_agent(writer, "DbtrAgt", payment.debtor_agent.as_ref())?;
    write_text_element(writer, "ChrgBr", payment.charge_bearer.as_str())?;

    for transfer in &payment.transfers {
        start(writer, "CdtTrfTxInf")?;
        start(writer, "PmtId")?;
        if let Some(instruction_id) = &transfer.payment_id.instruction_id {
            write_text_element(writer, "InstrId", instruction_id)?;
        }
        write_text_element(writer, "EndToEndId", &transfer.payment_id.end_to_end_id)?;
        end(writer, "PmtId")?;
        start(writer, "Amt")?;
        write_amount(writer, "InstdAmt", &transfer.instructed_amount)?;
        end(writer, "Amt")?;
        write_optional_agent(writer, "CdtrAgt", transfer.creditor_agent.as_ref())?;
        write_party(writer, "Cdtr", &transfer.creditor)?;
        write_party_account(writer, "CdtrAcct", &transfer.creditor)?;
        if !transfer.remittance.is_empty() {
            start(writer, "RmtInf")?;
            for line in &transfer.remittance {
                write_text_element(writer, "Ustrd", line)?;
            }
            end(writer, "RmtInf")?;
        }
        end(writer, "CdtTrfTxInf")?;
    }

    end(writer, "PmtInf")?;
    end(writer, "CstmrCdtTrfInitn")?;
    Ok(())
}
