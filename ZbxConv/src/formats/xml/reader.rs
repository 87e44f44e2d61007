//! XML document reading

use super::XmlLayout;
use crate::error::CodecError;
use quick_xml::Reader;
use quick_xml::events::Event;
use serde_json::{Map, Value};

/// An element whose end tag has not been reached yet.
struct OpenElement {
    name: String,
    children: Vec<(String, Value)>,
    text: String,
    has_children: bool,
}

impl OpenElement {
    fn new(name: String) -> Self {
        Self {
            name,
            children: Vec::new(),
            text: String::new(),
            has_children: false,
        }
    }

    /// Close the element. Elements without any content yield `None` so schema
    /// defaults apply. Whitespace-only text is kept: it is a value for a
    /// scalar and an empty element where the schema expects nesting.
    fn close(self, layout: &XmlLayout) -> (String, Option<Value>) {
        let Self {
            name,
            children,
            text,
            has_children,
        } = self;

        let value = if layout.item_name(&name).is_some() {
            Some(Value::Array(children.into_iter().map(|(_, v)| v).collect()))
        } else if has_children {
            Some(Value::Object(children.into_iter().collect()))
        } else if text.is_empty() {
            None
        } else {
            Some(Value::String(text))
        };
        (name, value)
    }

    fn attach(&mut self, name: String, value: Option<Value>, layout: &XmlLayout) -> Result<(), CodecError> {
        self.has_children = true;

        if let Some(item) = layout.item_name(&self.name) {
            if name != item {
                return Err(CodecError::Structure(format!(
                    "unexpected <{name}> in <{}>, expected <{item}>",
                    self.name
                )));
            }
            self.children.push((name, nested_or_empty(value)));
            return Ok(());
        }

        let Some(value) = value else {
            return Ok(());
        };
        if self.children.iter().any(|(existing, _)| *existing == name) {
            return Err(CodecError::Structure(format!(
                "duplicate <{name}> in <{}>",
                self.name
            )));
        }
        self.children.push((name, value));
        Ok(())
    }
}

/// Parse XML into a document tree shaped by `layout`.
///
/// # Errors
/// Returns an error if the XML is malformed, the root element is not
/// `layout.root`, or a list container holds foreign elements.
pub fn parse_xml(content: &str, layout: &XmlLayout) -> Result<Value, CodecError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut reader = Reader::from_str(content);
    let mut stack: Vec<OpenElement> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = std::str::from_utf8(e.name().as_ref())?.to_owned();
                stack.push(OpenElement::new(name));
            }
            Event::Empty(e) => {
                let name = std::str::from_utf8(e.name().as_ref())?.to_owned();
                match stack.last_mut() {
                    Some(parent) => parent.attach(name, None, layout)?,
                    None => return close_root(&name, None, layout),
                }
            }
            Event::Text(e) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(std::str::from_utf8(&e)?);
                }
            }
            Event::End(_) => {
                let Some(element) = stack.pop() else {
                    return Err(CodecError::Structure("unexpected closing tag".to_string()));
                };
                let (name, value) = element.close(layout);
                match stack.last_mut() {
                    Some(parent) => parent.attach(name, value, layout)?,
                    None => return close_root(&name, value, layout),
                }
            }
            Event::Eof => {
                let message = if stack.is_empty() {
                    "missing root element"
                } else {
                    "unexpected end of document"
                };
                return Err(CodecError::Structure(message.to_string()));
            }
            // declarations, comments, processing instructions
            _ => {}
        }
    }
}

fn close_root(name: &str, value: Option<Value>, layout: &XmlLayout) -> Result<Value, CodecError> {
    if name != layout.root {
        return Err(CodecError::Structure(format!(
            "expected root element <{}>, found <{name}>",
            layout.root
        )));
    }
    Ok(nested_or_empty(value))
}

/// List entries and the root always hold nested elements; if they have only
/// whitespace inside, they are empty.
fn nested_or_empty(value: Option<Value>) -> Value {
    match value {
        Some(Value::String(text)) if text.trim().is_empty() => Value::Object(Map::new()),
        Some(value) => value,
        None => Value::Object(Map::new()),
    }
}
