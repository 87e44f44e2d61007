//! Version detection
//!
//! Reads only the export envelope, so the declared version is known before a
//! schema is chosen. Unknown fields are ignored at this stage.

use std::fmt;

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Error, Result};
use crate::formats::Format;
use crate::schema::EXPORT_ROOT;

/// Declared version of a template export, compared by exact string match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionTag(String);

impl VersionTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VersionTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

/// Minimal view of an export: the root's `version` child.
#[derive(Debug, Default, Deserialize)]
struct Envelope {
    #[serde(default)]
    version: Option<String>,
}

/// Read the declared version without decoding the full schema.
///
/// # Errors
/// Returns [`Error::MalformedInput`] if the envelope cannot be decoded.
pub fn read_declared_version(content: &[u8], format: Format) -> Result<Option<String>> {
    let envelope = parse_envelope(content, format)
        .map_err(|source| Error::MalformedInput { format, source })?;
    Ok(envelope.version)
}

fn parse_envelope(content: &[u8], format: Format) -> std::result::Result<Envelope, CodecError> {
    match format {
        Format::Json => Ok(serde_json::from_slice(content)?),
        Format::Yaml => Ok(serde_yaml::from_slice(content)?),
        Format::Xml => {
            let text = std::str::from_utf8(content)?;
            let text = text.strip_prefix('\u{feff}').unwrap_or(text);
            let root = root_element(text)?;
            if root != EXPORT_ROOT {
                return Err(CodecError::Structure(format!(
                    "expected root element <{EXPORT_ROOT}>, found <{root}>"
                )));
            }
            Ok(quick_xml::de::from_str(text)?)
        }
    }
}

/// Name of the first element of an XML document.
fn root_element(text: &str) -> std::result::Result<String, CodecError> {
    let mut reader = Reader::from_str(text);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                return Ok(std::str::from_utf8(e.name().as_ref())?.to_owned());
            }
            Event::Eof => return Err(CodecError::Structure("missing root element".to_string())),
            _ => {}
        }
    }
}

/// Detect the version of `content` and check it against `supported`.
///
/// A document without a version is reported with an empty version string.
///
/// # Errors
/// Returns [`Error::MalformedInput`] if the envelope cannot be decoded, or
/// [`Error::UnsupportedVersion`] if the version is not in `supported`.
pub fn detect_version(
    content: &[u8],
    format: Format,
    supported: &[VersionTag],
) -> Result<VersionTag> {
    let found = read_declared_version(content, format)?.unwrap_or_default();

    match supported.iter().find(|tag| tag.as_str() == found) {
        Some(tag) => {
            tracing::debug!("Detected template version {tag}");
            Ok(tag.clone())
        }
        None => Err(Error::UnsupportedVersion {
            found,
            supported: supported.iter().map(ToString::to_string).collect(),
        }),
    }
}
