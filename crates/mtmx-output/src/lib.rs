//! ISO 20022 XML rendering of canonical documents.
//!
//! Output is deterministic: element order is fixed by the writers, the
//! indentation is fixed at two spaces, and every timestamp and identifier
//! comes from the document itself. Two renders of the same document are
//! byte-identical.

use anyhow::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use mtmx_model::CanonicalDocument;

pub mod camt;
pub mod common;
pub mod pacs;
pub mod pain;

use common::XSI_NS;

/// Render a canonical document to an ISO 20022 XML string.
pub fn render(document: &CanonicalDocument) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut root = BytesStart::new("Document");
    root.push_attribute(("xmlns", document.namespace()));
    root.push_attribute(("xmlns:xsi", XSI_NS));
    writer.write_event(Event::Start(root))?;

    match document {
        CanonicalDocument::Pacs008(doc) => pacs::write_pacs008(&mut writer, doc)?,
        CanonicalDocument::Pacs009(doc) => pacs::write_pacs009(&mut writer, doc)?,
        CanonicalDocument::Pain001(doc) => pain::write_pain001(&mut writer, doc)?,
        CanonicalDocument::Camt053(doc) => camt::write_camt053(&mut writer, doc)?,
        CanonicalDocument::Camt054(doc) => camt::write_camt054(&mut writer, doc)?,
    }

    writer.write_event(Event::End(BytesEnd::new("Document")))?;
    Ok(String::from_utf8(writer.into_inner())?)
}
