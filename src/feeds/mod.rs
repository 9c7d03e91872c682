//! XML projections of the post list: Atom, the Google News sitemap and the
//! regular sitemap. Each is a pure function of its inputs; the caller passes
//! the clock in.

pub mod atom;
pub mod news_sitemap;
pub mod sitemap;

use std::io::Cursor;

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::Result;

pub const ATOM_CONTENT_TYPE: &str = "application/atom+xml; charset=utf-8";
pub const XML_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

type XmlWriter = Writer<Cursor<Vec<u8>>>;

fn new_document() -> Result<XmlWriter> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    Ok(writer)
}

fn finish(writer: XmlWriter) -> String {
    String::from_utf8_lossy(&writer.into_inner().into_inner()).into_owned()
}

fn push_text(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Writes `text` as CDATA. A literal `]]>` is split across two sections so
/// the text survives unchanged.
fn push_cdata(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    let mut parts = text.split("]]>").peekable();
    let mut first = true;
    while let Some(part) = parts.next() {
        let mut section = String::with_capacity(part.len() + 3);
        if !first {
            section.push('>');
        }
        section.push_str(part);
        if parts.peek().is_some() {
            section.push_str("]]");
        }
        writer.write_event(Event::CData(BytesCData::new(section)))?;
        first = false;
    }
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
