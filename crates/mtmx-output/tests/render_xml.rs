//! End-to-end rendering checks: map a tokenized message, render it, and
//! inspect the XML text.

use chrono::NaiveDate;

use mtmx_map::{MapContext, mt101, mt103, mt940, mt9xx};
use mtmx_output::render;
use mtmx_parse::tokenize;

fn ctx() -> MapContext {
    MapContext::at(
        NaiveDate::from_ymd_opt(2023, 10, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap(),
    )
}

const MT103: &str = "\
:20:TRF123456789
:23B:CRED
:32A:231005USD10000,
:50K:/1234567890
JOHN DOE
123 MAIN ST
:59:/0987654321
JANE SMITH
:70:INVOICE 2023-001
:71A:OUR";

#[test]
fn mt103_renders_a_pacs008_document() {
    let document = mt103::map(&tokenize(MT103).unwrap(), &ctx()).unwrap();
    let xml = render(&document).unwrap();

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("urn:iso:std:iso:20022:tech:xsd:pacs.008.001.08"));
    assert!(xml.contains("<FIToFICstmrCdtTrf>"));
    assert!(xml.contains("<MsgId>MSGTRF123456789</MsgId>"));
    assert!(xml.contains("<CreDtTm>2023-10-05T14:30:00</CreDtTm>"));
    assert!(xml.contains("<NbOfTxs>1</NbOfTxs>"));
    assert!(xml.contains("<SttlmMtd>INDA</SttlmMtd>"));
    assert!(xml.contains("<IntrBkSttlmAmt Ccy=\"USD\">10000</IntrBkSttlmAmt>"));
    assert!(xml.contains("<IntrBkSttlmDt>2023-10-05</IntrBkSttlmDt>"));
    assert!(xml.contains("<ChrgBr>DEBT</ChrgBr>"));
    assert!(xml.contains("<Nm>JOHN DOE</Nm>"));
    assert!(xml.contains("<AdrLine>123 MAIN ST</AdrLine>"));
    assert!(xml.contains("<Ustrd>INVOICE 2023-001</Ustrd>"));
}

#[test]
fn absent_optionals_are_omitted_not_empty() {
    let document = mt103::map(&tokenize(MT103).unwrap(), &ctx()).unwrap();
    let xml = render(&document).unwrap();

    assert!(!xml.contains("<InstdAmt"));
    assert!(!xml.contains("<XchgRate>"));
    assert!(!xml.contains("<ChrgsInf>"));
    assert!(!xml.contains("<DbtrAgt>"));
    assert!(!xml.contains("></"));
}

#[test]
fn instruction_codes_and_purpose_are_rendered() {
    let text = format!("{MT103}\n:23E:SDVA\n:26T:K90");
    let document = mt103::map(&tokenize(&text).unwrap(), &ctx()).unwrap();
    let xml = render(&document).unwrap();

    assert!(xml.contains("<InstrForCdtrAgt>"));
    assert!(xml.contains("<InstrInf>SDVA</InstrInf>"));
    assert!(xml.contains("<Prtry>K90</Prtry>"));
}

#[test]
fn rendering_is_deterministic() {
    let document = mt103::map(&tokenize(MT103).unwrap(), &ctx()).unwrap();
    let first = render(&document).unwrap();
    let second = render(&document).unwrap();
    assert_eq!(first, second);
}

#[test]
fn mt101_renders_a_pain001_document() {
    let text = "\
:20:REQ001
:30:231006
:50K:/9988776655
TREASURY DEPT
:71A:SHA
:21:PAY001
:32B:USD750,50
:59:/123123123
SUPPLIER ONE";
    let document = mt101::map(&tokenize(text).unwrap(), &ctx()).unwrap();
    let xml = render(&document).unwrap();

    assert!(xml.contains("urn:iso:std:iso:20022:tech:xsd:pain.001.001.09"));
    assert!(xml.contains("<CstmrCdtTrfInitn>"));
    assert!(xml.contains("<PmtMtd>TRF</PmtMtd>"));
    assert!(xml.contains("<ReqdExctnDt>"));
    assert!(xml.contains("<Dt>2023-10-06</Dt>"));
    assert!(xml.contains("<InstdAmt Ccy=\"USD\">750.50</InstdAmt>"));
    assert!(xml.contains("<ChrgBr>SHAR</ChrgBr>"));
}

#[test]
fn mt940_renders_a_camt053_document() {
    let text = "\
:20:STMT001
:25:12345678901
:28C:184/1
:60F:C231004USD25000,
:61:2310051005D1234,56NTRFINV-001
:86:SUPPLIER PAYMENT
:62F:C231005USD23765,44";
    let document = mt940::map(&tokenize(text).unwrap(), &ctx()).unwrap();
    let xml = render(&document).unwrap();

    assert!(xml.contains("urn:iso:std:iso:20022:tech:xsd:camt.053.001.08"));
    assert!(xml.contains("<BkToCstmrStmt>"));
    assert!(xml.contains("<LglSeqNb>184</LglSeqNb>"));
    assert!(xml.contains("<ElctrncSeqNb>1</ElctrncSeqNb>"));
    assert!(xml.contains("<Cd>OPBD</Cd>"));
    assert!(xml.contains("<Cd>CLBD</Cd>"));
    assert!(xml.contains("<CdtDbtInd>DBIT</CdtDbtInd>"));
    assert!(xml.contains("<BookgDt>"));
    assert!(xml.contains("<AddtlNtryInf>SUPPLIER PAYMENT</AddtlNtryInf>"));
    assert!(xml.contains("<NtryRef>INV-001</NtryRef>"));
}

#[test]
fn mt910_renders_a_credit_notification() {
    let text = "\
:20:CRDCONF001
:21:TRF123456789
:25:98765432101
:32A:231005EUR2500,
:52A:DEUTDEFF";
    let document = mt9xx::map_credit(&tokenize(text).unwrap(), &ctx()).unwrap();
    let xml = render(&document).unwrap();

    assert!(xml.contains("urn:iso:std:iso:20022:tech:xsd:camt.054.001.08"));
    assert!(xml.contains("<BkToCstmrDbtCdtNtfctn>"));
    assert!(xml.contains("<CdtDbtInd>CRDT</CdtDbtInd>"));
    assert!(xml.contains("<NtryRef>TRF123456789</NtryRef>"));
    assert!(xml.contains("<BICFI>DEUTDEFF</BICFI>"));
    assert!(xml.contains("<Svcr>"));
}
