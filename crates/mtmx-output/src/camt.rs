//! camt.053 and camt.054 serialization.

use std::io::Write;

use anyhow::Result;
use quick_xml::Writer;

use mtmx_model::{Camt053Document, Camt054Document};

use crate::common::{
    end, start, write_agent, write_balance, write_datetime, write_entry, write_text_element,
};

fn write_account<W: Write>(
    writer: &mut Writer<W>,
    id: &str,
    servicer: Option<&mtmx_model::Agent>,
) -> Result<()> {
    start(writer, "Acct")?;
    start(writer, "Id")?;
    start(writer, "Othr")?;
    write_text_element(writer, "Id", id)?;
    end(writer, "Othr")?;
    end(writer, "Id")?;
    if let Some(agent) = servicer.filter(|a| !a.is_empty()) {
        write_agent(writer, "Svcr", agent)?;
    }
    end(writer, "Acct")?;
    Ok(())
}

/// `BkToCstmrStmt` body.
pub fn write_camt053<W: Write>(writer: &mut Writer<W>, doc: &Camt053Document) -> Result<()> {
    start(writer, "BkToCstmrStmt")?;

    start(writer, "GrpHdr")?;
    write_text_element(writer, "MsgId", &doc.message_id)?;
    write_datetime(writer, "CreDtTm", doc.created_at)?;
    end(writer, "GrpHdr")?;

    start(writer, "Stmt")?;
    write_text_element(writer, "Id", &doc.statement_id)?;
    // 28C carries statement/sequence as "184/1"; the parts map onto the
    // legal and electronic sequence numbers.
    if let Some(sequence) = &doc.sequence {
        let mut parts = sequence.splitn(2, '/');
        if let Some(statement_number) = parts.next().filter(|p| !p.is_empty()) {
            write_text_element(writer, "LglSeqNb", statement_number)?;
        }
        if let Some(sequence_number) = parts.next().filter(|p| !p.is_empty()) {
            write_text_element(writer, "ElctrncSeqNb", sequence_number)?;
        }
    }
    write_datetime(writer, "CreDtTm", doc.created_at)?;
    write_account(writer, &doc.account_id, None)?;
    write_balance(writer, &doc.opening_balance)?;
    write_balance(writer, &doc.closing_balance)?;
    for entry in &doc.entries {
        write_entry(writer, entry)?;
    }
    end(writer, "Stmt")?;

    end(writer, "BkToCstmrStmt")?;
    Ok(())
}

/// `BkToCstmrDbtCdtNtfctn` body.
pub fn write_camt054<W: Write>(writer: &mut Writer<W>, doc: &Camt054Document) -> Result<()> {
    start(writer, "BkToCstmrDbtCdtNtfctn")?;

    start(writer, "GrpHdr")?;
    write_text_element(writer, "MsgId", &doc.message_id)?;
    write_datetime(writer, "CreDtTm", doc.created_at)?;
    end(writer, "GrpHdr")?;

    start(writer, "Ntfctn")?;
    write_text_element(writer, "Id", &doc.notification_id)?;
    write_datetime(writer, "CreDtTm", doc.created_at)?;
    write_account(writer, &doc.account_id, doc.servicer.as_ref())?;

    // The related MT reference surfaces as the entry reference.
    let mut entry = doc.entry.clone();
    if entry.reference.is_none() {
        entry.reference = doc.related_reference.clone();
    }
    write_entry(writer, &entry)?;
    end(writer, "Ntfctn")?;

    end(writer, "BkToCstmrDbtCdtNtfctn")?;
    Ok(())
}
