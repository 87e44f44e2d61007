//! Versioned template schemas
//!
//! A [`Schema`] names one typed export structure. Decoding against it yields
//! a [`Document`], which carries its schema in the variant so nothing
//! downstream inspects the version string again.

pub mod common;
pub mod v40;
pub mod v44;

pub use common::EXPORT_ROOT;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::formats::xml::{self, XmlLayout};
use crate::formats::{Format, json, yaml};

/// Schema descriptor: the export structure a version tag decodes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Schema {
    #[serde(rename = "4.0")]
    V40,
    #[serde(rename = "4.4")]
    V44,
}

impl Schema {
    /// Name of the export format version that defined this structure.
    pub fn name(self) -> &'static str {
        match self {
            Schema::V40 => "4.0",
            Schema::V44 => "4.4",
        }
    }

    /// XML element naming for this schema.
    pub fn xml_layout(self) -> &'static XmlLayout {
        match self {
            Schema::V40 => &v40::LAYOUT,
            Schema::V44 => &v44::LAYOUT,
        }
    }

    /// Decode `content` in `format` against this schema.
    ///
    /// # Errors
    /// Returns an error if `content` does not parse or does not fit the schema.
    pub fn decode(self, content: &[u8], format: Format) -> Result<Document, CodecError> {
        match self {
            Schema::V40 => decode_as(content, format, self.xml_layout()).map(Document::V40),
            Schema::V44 => decode_as(content, format, self.xml_layout()).map(Document::V44),
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully decoded template export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    V40(v40::ZabbixExport),
    V44(v44::ZabbixExport),
}

impl Document {
    pub fn schema(&self) -> Schema {
        match self {
            Document::V40(_) => Schema::V40,
            Document::V44(_) => Schema::V44,
        }
    }

    /// The version the document declares about itself.
    pub fn version(&self) -> &str {
        match self {
            Document::V40(export) => &export.version,
            Document::V44(export) => &export.version,
        }
    }

    /// Encode the document in `format`. XML output is not normalized.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn encode(&self, format: Format) -> Result<Vec<u8>, CodecError> {
        let layout = self.schema().xml_layout();
        match self {
            Document::V40(export) => encode_as(export, format, layout),
            Document::V44(export) => encode_as(export, format, layout),
        }
    }
}

fn decode_as<T: DeserializeOwned>(
    content: &[u8],
    format: Format,
    layout: &XmlLayout,
) -> Result<T, CodecError> {
    match format {
        Format::Json => json::parse(content),
        Format::Yaml => yaml::parse(content),
        Format::Xml => {
            let tree = xml::parse_xml(std::str::from_utf8(content)?, layout)?;
            serde_json::from_value(tree).map_err(CodecError::Schema)
        }
    }
}

fn encode_as<T: Serialize>(
    document: &T,
    format: Format,
    layout: &XmlLayout,
) -> Result<Vec<u8>, CodecError> {
    match format {
        Format::Json => json::serialize(document),
        Format::Yaml => yaml::serialize(document),
        Format::Xml => {
            let tree = serde_json::to_value(document)?;
            xml::serialize_xml(&tree, layout)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::common::{GraphAxisItem, HostKeyRef, NameRef, ValueMap, ValueMapping};
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_v40() -> v40::ZabbixExport {
        v40::ZabbixExport {
            version: "4.0".to_string(),
            date: "2020-01-01T00:00:00Z".to_string(),
            groups: vec![NameRef::new("Templates")],
            templates: vec![v40::Template {
                template: "Template App Demo".to_string(),
                name: "Template App Demo".to_string(),
                items: vec![v40::Item {
                    name: "Demo \"ping\"".to_string(),
                    key: "demo.ping".to_string(),
                    master_item: None,
                    ..Default::default()
                }],
                ..Default::default()
            }],
            graphs: vec![v40::Graph {
                name: "Demo graph".to_string(),
                ymin_item_1: Some(GraphAxisItem::Constant("0".to_string())),
                ymax_item_1: Some(GraphAxisItem::Item(HostKeyRef {
                    host: "Template App Demo".to_string(),
                    key: "demo.ping".to_string(),
                })),
                ..Default::default()
            }],
            value_maps: vec![ValueMap {
                name: "Service state".to_string(),
                mappings: vec![ValueMapping {
                    value: "0".to_string(),
                    newvalue: "Down".to_string(),
                }],
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_xml_follows_declaration_order() {
        let xml = Document::V40(sample_v40()).encode(Format::Xml).unwrap();
        let xml = String::from_utf8(xml).unwrap();

        let version = xml.find("<version>").unwrap();
        let date = xml.find("<date>").unwrap();
        let groups = xml.find("<groups>").unwrap();
        let value_maps = xml.find("<value_maps>").unwrap();
        assert!(version < date && date < groups && groups < value_maps);

        let name = xml.find("<name>Demo").unwrap();
        let key = xml.find("<key>demo.ping</key>").unwrap();
        assert!(name < key);
    }

    #[test]
    fn test_polymorphic_graph_axis_survives_every_format() {
        let doc = Document::V40(sample_v40());
        for format in Format::ALL {
            let encoded = doc.encode(format).unwrap();
            let decoded = Schema::V40.decode(&encoded, format).unwrap();
            assert_eq!(decoded, doc, "{format} changed the document");
        }
    }

    #[test]
    fn test_v44_scalars_are_omitted_when_empty() {
        let doc = Document::V44(v44::ZabbixExport {
            version: "4.4".to_string(),
            templates: vec![v44::Template {
                template: "Template Demo".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        });
        let json = String::from_utf8(doc.encode(Format::Json).unwrap()).unwrap();
        assert!(json.contains("\"template\": \"Template Demo\""));
        assert!(!json.contains("\"description\""));
        assert!(json.contains("\"macros\": []"));
    }

    #[test]
    fn test_decode_reports_schema_mismatch() {
        let xml = b"<zabbix_export><version>4.0</version><groups>oops</groups></zabbix_export>";
        assert!(Schema::V40.decode(xml, Format::Xml).is_ok());

        let xml = b"<zabbix_export><templates><template><items>\
                    <item><key><nested>x</nested></key></item>\
                    </items></template></templates></zabbix_export>";
        let err = Schema::V40.decode(xml, Format::Xml).unwrap_err();
        assert!(matches!(err, CodecError::Schema(_)));
    }

    #[test]
    fn test_document_reports_schema_and_version() {
        let doc = Document::V40(sample_v40());
        assert_eq!(doc.schema(), Schema::V40);
        assert_eq!(doc.version(), "4.0");
    }
}
