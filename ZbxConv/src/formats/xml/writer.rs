//! XML document writing

use super::XmlLayout;
use crate::error::CodecError;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use serde_json::Value;
use std::borrow::Cow;
use std::io::Write;

/// Serialize a document tree to indented XML.
///
/// Null values and empty lists render as empty paired tags on one line; an
/// object without fields renders its start and end tags on separate lines.
///
/// # Errors
/// Returns an error if a list has no entry element in `layout`.
pub fn serialize_xml(value: &Value, layout: &XmlLayout) -> Result<Vec<u8>, CodecError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut writer, layout.root, value, layout)?;

    Ok(writer.into_inner())
}

fn write_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &Value,
    layout: &XmlLayout,
) -> Result<(), CodecError> {
    match value {
        Value::Object(fields) => {
            writer.write_event(Event::Start(BytesStart::new(name)))?;
            for (key, child) in fields {
                write_element(writer, key, child, layout)?;
            }
            writer.write_event(Event::End(BytesEnd::new(name)))?;
        }
        Value::Array(entries) => {
            let item = layout.item_name(name).ok_or_else(|| {
                CodecError::Structure(format!("no entry element declared for list <{name}>"))
            })?;

            writer.write_event(Event::Start(BytesStart::new(name)))?;
            if entries.is_empty() {
                // keeps the end tag on the start tag's line
                writer.write_event(Event::Text(BytesText::from_escaped("")))?;
            }
            for entry in entries {
                write_element(writer, item, entry, layout)?;
            }
            writer.write_event(Event::End(BytesEnd::new(name)))?;
        }
        Value::Null => write_text(writer, name, "")?,
        Value::String(text) => write_text(writer, name, text)?,
        Value::Bool(flag) => write_text(writer, name, &flag.to_string())?,
        Value::Number(number) => write_text(writer, name, &number.to_string())?,
    }
    Ok(())
}

fn write_text<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<(), CodecError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::from_escaped(escape_text(text))))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Escape character data the way generic XML encoders do: named entities for
/// markup, numeric references for quotes and whitespace controls.
fn escape_text(text: &str) -> Cow<'_, str> {
    let needs_escape = |c: char| matches!(c, '&' | '<' | '>' | '"' | '\'' | '\r' | '\n' | '\t');
    if !text.contains(needs_escape) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            '\r' => escaped.push_str("&#xD;"),
            '\n' => escaped.push_str("&#xA;"),
            '\t' => escaped.push_str("&#x9;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
