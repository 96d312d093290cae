//! Shared element writers for the MX serializers.

use std::io::Write;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use mtmx_model::{Agent, Balance, MonetaryAmount, Party, StatementEntry};

/// XML Schema instance namespace, declared on every `Document` root.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Write a simple text element.
pub fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

pub fn start<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    Ok(())
}

pub fn end<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Date as ISO `YYYY-MM-DD`.
pub fn write_date<W: Write>(writer: &mut Writer<W>, name: &str, date: NaiveDate) -> Result<()> {
    write_text_element(writer, name, &date.format("%Y-%m-%d").to_string())
}

/// Timestamp as ISO `YYYY-MM-DDTHH:MM:SS`, no zone suffix.
pub fn write_datetime<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: NaiveDateTime,
) -> Result<()> {
    write_text_element(writer, name, &value.format("%Y-%m-%dT%H:%M:%S").to_string())
}

/// Amount element with its `Ccy` attribute, e.g. `<Amt Ccy="USD">10.50</Amt>`.
pub fn write_amount<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    amount: &MonetaryAmount,
) -> Result<()> {
    let mut element = BytesStart::new(name);
    element.push_attribute(("Ccy", amount.currency.as_str()));
    writer.write_event(Event::Start(element))?;
    writer.write_event(Event::Text(BytesText::new(&amount.value.to_string())))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Party element: name and optional address lines.
///
/// The party's account is a sibling element in MX (`DbtrAcct`, `CdtrAcct`)
/// and is written separately by the caller.
pub fn write_party<W: Write>(writer: &mut Writer<W>, name: &str, party: &Party) -> Result<()> {
    start(writer, name)?;
    write_text_element(writer, "Nm", &party.name)?;
    if let Some(address) = &party.address {
        start(writer, "PstlAdr")?;
        for line in &address.lines {
            write_text_element(writer, "AdrLine", line)?;
        }
        end(writer, "PstlAdr")?;
    }
    end(writer, name)?;
    Ok(())
}

/// Cash-account element wrapping an `Othr/Id` identifier.
pub fn write_account_id<W: Write>(writer: &mut Writer<W>, name: &str, id: &str) -> Result<()> {
    start(writer, name)?;
    start(writer, "Id")?;
    start(writer, "Othr")?;
    write_text_element(writer, "Id", id)?;
    end(writer, "Othr")?;
    end(writer, "Id")?;
    end(writer, name)?;
    Ok(())
}

/// The party's account, when present, as `<name>Acct`.
pub fn write_party_account<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    party: &Party,
) -> Result<()> {
    if let Some(account) = &party.account {
        write_account_id(writer, name, &account.id)?;
    }
    Ok(())
}

/// Financial-institution element: `FinInstnId` with `BICFI` and/or `Nm`.
pub fn write_agent<W: Write>(writer: &mut Writer<W>, name: &str, agent: &Agent) -> Result<()> {
    start(writer, name)?;
    start(writer, "FinInstnId")?;
    if let Some(bic) = &agent.bic {
        write_text_element(writer, "BICFI", bic)?;
    }
    if let Some(agent_name) = &agent.name {
        write_text_element(writer, "Nm", agent_name)?;
    }
    end(writer, "FinInstnId")?;
    end(writer, name)?;
    Ok(())
}

pub fn write_optional_agent<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    agent: Option<&Agent>,
) -> Result<()> {
    if let Some(agent) = agent.filter(|a| !a.is_empty()) {
        write_agent(writer, name, agent)?;
    }
    Ok(())
}

/// camt `Bal` element.
pub fn write_balance<W: Write>(writer: &mut Writer<W>, balance: &Balance) -> Result<()> {
    start(writer, "Bal")?;
    start(writer, "Tp")?;
    start(writer, "CdOrPrtry")?;
    write_text_element(writer, "Cd", balance.code)?;
    end(writer, "CdOrPrtry")?;
    end(writer, "Tp")?;
    write_amount(writer, "Amt", &balance.amount)?;
    write_text_element(writer, "CdtDbtInd", balance.credit_debit.as_str())?;
    start(writer, "Dt")?;
    write_date(writer, "Dt", balance.date)?;
    end(writer, "Dt")?;
    end(writer, "Bal")?;
    Ok(())
}

/// camt `Ntry` element shared by statements and notifications.
pub fn write_entry<W: Write>(writer: &mut Writer<W>, entry: &StatementEntry) -> Result<()> {
    start(writer, "Ntry")?;
    if let Some(reference) = &entry.reference {
        write_text_element(writer, "NtryRef", reference)?;
    }
    write_amount(writer, "Amt", &entry.amount)?;
    write_text_element(writer, "CdtDbtInd", entry.credit_debit.as_str())?;
    start(writer, "Sts")?;
    write_text_element(writer, "Cd", "BOOK")?;
    end(writer, "Sts")?;
    if let Some(booking) = entry.booking_date {
        start(writer, "BookgDt")?;
        write_date(writer, "Dt", booking)?;
        end(writer, "BookgDt")?;
    }
    start(writer, "ValDt")?;
    write_date(writer, "Dt", entry.value_date)?;
    end(writer, "ValDt")?;
    if let Some(info) = &entry.info {
        write_text_element(writer, "AddtlNtryInf", info)?;
    }
    end(writer, "Ntry")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn render<F: FnOnce(&mut Writer<Vec<u8>>) -> Result<()>>(f: F) -> String {
        let mut writer = Writer::new(Vec::new());
        f(&mut writer).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn amount_carries_currency_attribute() {
        let amount = MonetaryAmount::new("USD", Decimal::new(1050, 2));
        let xml = render(|w| write_amount(w, "Amt", &amount));
        assert_eq!(xml, r#"<Amt Ccy="USD">10.50</Amt>"#);
    }

    #[test]
    fn text_is_escaped() {
        let xml = render(|w| write_text_element(w, "Nm", "SMITH & SONS <LTD>"));
        assert_eq!(xml, "<Nm>SMITH &amp; SONS &lt;LTD&gt;</Nm>");
    }

    #[test]
    fn empty_agent_is_omitted() {
        let xml = render(|w| write_optional_agent(w, "DbtrAgt", Some(&Agent::default())));
        assert!(xml.is_empty());
    }

    #[test]
    fn agent_prefers_bic() {
        let agent = Agent {
            bic: Some("DEUTDEFF".to_string()),
            name: None,
        };
        let xml = render(|w| write_agent(w, "CdtrAgt", &agent));
        assert_eq!(
            xml,
            "<CdtrAgt><FinInstnId><BICFI>DEUTDEFF</BICFI></FinInstnId></CdtrAgt>"
        );
    }
}
