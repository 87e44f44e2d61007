//! Template encodings: XML, JSON and YAML
//!
//! Each codec is a thin layer over its serde backend. XML additionally needs
//! an [`xml::XmlLayout`] so element nesting follows the schema.

pub mod json;
pub mod xml;
pub mod yaml;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A textual template encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Xml,
    Json,
    Yaml,
}

impl Format {
    /// All encodings, in the order they are listed to users.
    pub const ALL: [Format; 3] = [Format::Xml, Format::Json, Format::Yaml];

    /// Lowercase name, identical to the file extension.
    pub fn name(self) -> &'static str {
        match self {
            Format::Xml => "xml",
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }

    /// Detect the format from a file extension.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedFormat`] if the path has no extension or
    /// the extension is not `xml`, `json` or `yaml`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        extension.parse()
    }

    pub(crate) fn names(formats: &[Format]) -> Vec<String> {
        formats.iter().map(|f| f.name().to_owned()).collect()
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xml" => Ok(Format::Xml),
            "json" => Ok(Format::Json),
            // `.yml` is accepted as the common short spelling
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(Error::UnsupportedFormat {
                name: s.to_owned(),
                supported: Format::names(&Format::ALL),
            }),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Xml => "XML",
            Format::Json => "JSON",
            Format::Yaml => "YAML",
        })
    }
}
