//! Template conversion
//!
//! One [`Converter`] runs every conversion the same way:
//!
//! ```text
//! detect version -> resolve schema -> decode -> encode -> normalize (XML only)
//! ```
//!
//! Version specifics live in the registry's table. Nothing here branches on a
//! version string.

mod types;

pub use types::{ConvertPhase, ConvertProgress, ConvertProgressCallback};

use crate::config::EngineConfig;
use crate::error::{CodecError, Error, Result};
use crate::formats::Format;
use crate::registry::{Registry, VersionEntry};
use crate::schema::Document;
use crate::version::{self, VersionTag};

/// A decoded document together with the version it was detected as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub version: VersionTag,
    pub document: Document,
}

/// The conversion engine. Read-only after construction, so one instance can
/// serve any number of conversions, including from several threads.
#[derive(Debug)]
pub struct Converter {
    formats: Vec<Format>,
    registry: Registry,
}

impl Converter {
    /// Build an engine from `config`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] if no format is configured, a format
    /// is listed twice, or the version table is invalid; [`Error::InvalidRule`]
    /// if a rule set fails to compile.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let EngineConfig { formats, versions } = config;

        if formats.is_empty() {
            return Err(Error::InvalidConfig("no formats configured".to_string()));
        }
        for (i, format) in formats.iter().enumerate() {
            if formats[..i].contains(format) {
                return Err(Error::InvalidConfig(format!(
                    "format {} is configured twice",
                    format.name()
                )));
            }
        }

        let registry = Registry::new(&versions)?;
        tracing::debug!(
            "Engine ready with {} formats and {} versions",
            formats.len(),
            registry.supported().len()
        );

        Ok(Self { formats, registry })
    }

    /// Build an engine with the built-in format set and version table.
    ///
    /// # Errors
    /// Returns an error if a built-in rule set fails to compile.
    pub fn with_defaults() -> Result<Self> {
        Self::new(EngineConfig::default())
    }

    pub fn formats(&self) -> &[Format] {
        &self.formats
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    fn check_format(&self, format: Format) -> Result<()> {
        if self.formats.contains(&format) {
            Ok(())
        } else {
            Err(Error::UnsupportedFormat {
                name: format.name().to_string(),
                supported: Format::names(&self.formats),
            })
        }
    }

    /// Detect the version of `input` and return its table entry.
    ///
    /// # Errors
    /// Returns an error if `format` is not enabled, the envelope is malformed,
    /// or the version is not supported.
    pub fn detect(&self, input: &[u8], format: Format) -> Result<&VersionEntry> {
        self.check_format(format)?;
        let tag = version::detect_version(input, format, self.registry.supported())?;
        self.registry.schema_for(&tag)
    }

    /// Detect the version of `input` and decode it against that version's schema.
    ///
    /// # Errors
    /// Returns an error if detection fails or the input does not fit the schema.
    pub fn decode(&self, input: &[u8], format: Format) -> Result<Template> {
        let entry = self.detect(input, format)?;
        Self::decode_entry(entry, input, format)
    }

    fn decode_entry(entry: &VersionEntry, input: &[u8], format: Format) -> Result<Template> {
        let document = entry
            .schema
            .decode(input, format)
            .map_err(|source| Error::Decode { format, source })?;
        Ok(Template {
            version: entry.tag.clone(),
            document,
        })
    }

    /// Encode a decoded template. XML output is normalized with the rules of
    /// the template's version.
    ///
    /// # Errors
    /// Returns an error if `format` is not enabled, the template's version is
    /// not in the table, or serialization fails.
    pub fn encode(&self, template: &Template, format: Format) -> Result<Vec<u8>> {
        self.check_format(format)?;
        let entry = self.registry.schema_for(&template.version)?;
        let encoded = Self::encode_raw(&template.document, format)?;
        if format == Format::Xml {
            Self::normalize(entry, encoded)
        } else {
            Ok(encoded)
        }
    }

    fn encode_raw(document: &Document, format: Format) -> Result<Vec<u8>> {
        document
            .encode(format)
            .map_err(|source| Error::Encode { format, source })
    }

    fn normalize(entry: &VersionEntry, encoded: Vec<u8>) -> Result<Vec<u8>> {
        let xml = String::from_utf8(encoded).map_err(|e| Error::Encode {
            format: Format::Xml,
            source: CodecError::Utf8(e.utf8_error()),
        })?;
        Ok(entry.normalizer().normalize(&xml).into_bytes())
    }

    /// Convert `input` from `source` to `target`.
    ///
    /// # Errors
    /// Returns the first error of any stage. No output is produced on failure.
    pub fn convert(&self, input: &[u8], source: Format, target: Format) -> Result<Vec<u8>> {
        self.convert_with_progress(input, source, target, &|_| {})
    }

    /// Convert `input` from `source` to `target`, reporting each phase.
    ///
    /// # Errors
    /// Returns the first error of any stage. No output is produced on failure.
    pub fn convert_with_progress(
        &self,
        input: &[u8],
        source: Format,
        target: Format,
        progress: ConvertProgressCallback,
    ) -> Result<Vec<u8>> {
        self.check_format(source)?;
        self.check_format(target)?;

        let total = if target == Format::Xml { 5 } else { 4 };
        tracing::info!("Converting {source} template to {target} ({} bytes)", input.len());

        progress(&ConvertProgress::new(ConvertPhase::Detecting, 1, total));
        let tag = version::detect_version(input, source, self.registry.supported())?;

        let entry = self.registry.schema_for(&tag)?;
        tracing::debug!("Version {tag} uses schema {} and rules {}", entry.schema, entry.rules);
        progress(&ConvertProgress::with_detail(
            ConvertPhase::SchemaResolved,
            2,
            total,
            tag.as_str(),
        ));

        progress(&ConvertProgress::new(ConvertPhase::Decoding, 3, total));
        let template = Self::decode_entry(entry, input, source)?;

        progress(&ConvertProgress::new(ConvertPhase::Encoding, 4, total));
        let mut output = Self::encode_raw(&template.document, target)?;
        tracing::debug!("Encoded {} bytes of {target}", output.len());

        if target == Format::Xml {
            progress(&ConvertProgress::new(ConvertPhase::Normalizing, 5, total));
            output = Self::normalize(entry, output)?;
        }

        progress(&ConvertProgress::new(ConvertPhase::Complete, total, total));
        tracing::info!("Converted version {tag} template: {} bytes of {target}", output.len());

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VersionConfig;
    use crate::normalize::RuleSetId;
    use crate::schema::Schema;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    const XML_V40: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<zabbix_export>
    <version>4.0</version>
    <date>2020-01-01T00:00:00Z</date>
    <groups>
        <group>
            <name>Templates</name>
        </group>
    </groups>
</zabbix_export>"#;

    #[test]
    fn test_progress_phases_in_order() {
        let converter = Converter::with_defaults().unwrap();
        let phases = Mutex::new(Vec::new());

        converter
            .convert_with_progress(XML_V40.as_bytes(), Format::Xml, Format::Xml, &|p| {
                phases.lock().unwrap().push((p.phase, p.current, p.total));
            })
            .unwrap();

        assert_eq!(
            phases.into_inner().unwrap(),
            vec![
                (ConvertPhase::Detecting, 1, 5),
                (ConvertPhase::SchemaResolved, 2, 5),
                (ConvertPhase::Decoding, 3, 5),
                (ConvertPhase::Encoding, 4, 5),
                (ConvertPhase::Normalizing, 5, 5),
                (ConvertPhase::Complete, 5, 5),
            ]
        );
    }

    #[test]
    fn test_resolved_phase_carries_the_version() {
        let converter = Converter::with_defaults().unwrap();
        let details = Mutex::new(Vec::new());

        converter
            .convert_with_progress(XML_V40.as_bytes(), Format::Xml, Format::Yaml, &|p| {
                if let Some(detail) = &p.detail {
                    details.lock().unwrap().push((p.phase, detail.clone()));
                }
            })
            .unwrap();

        assert_eq!(
            details.into_inner().unwrap(),
            vec![(ConvertPhase::SchemaResolved, "4.0".to_string())]
        );
    }

    #[test]
    fn test_json_target_skips_normalizing() {
        let converter = Converter::with_defaults().unwrap();
        let phases = Mutex::new(Vec::new());

        let json = converter
            .convert_with_progress(XML_V40.as_bytes(), Format::Xml, Format::Json, &|p| {
                phases.lock().unwrap().push(p.phase);
            })
            .unwrap();

        assert!(!phases.into_inner().unwrap().contains(&ConvertPhase::Normalizing));
        assert!(String::from_utf8(json).unwrap().starts_with("{\n    \"version\": \"4.0\""));
    }

    #[test]
    fn test_disabled_format_fails_before_detection() {
        let config = EngineConfig {
            formats: vec![Format::Xml, Format::Json],
            ..EngineConfig::default()
        };
        let converter = Converter::new(config).unwrap();
        let called = Mutex::new(false);

        let err = converter
            .convert_with_progress(b"not even yaml: [", Format::Yaml, Format::Xml, &|_| {
                *called.lock().unwrap() = true;
            })
            .unwrap_err();

        match err {
            Error::UnsupportedFormat { name, supported } => {
                assert_eq!(name, "yaml");
                assert_eq!(supported, vec!["xml", "json"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!*called.lock().unwrap());
    }

    #[test]
    fn test_unsupported_version_stops_at_detection() {
        let converter = Converter::with_defaults().unwrap();
        let phases = Mutex::new(Vec::new());
        let input = XML_V40.replace("<version>4.0</version>", "<version>9.9</version>");

        let err = converter
            .convert_with_progress(input.as_bytes(), Format::Xml, Format::Json, &|p| {
                phases.lock().unwrap().push(p.phase);
            })
            .unwrap_err();

        assert!(matches!(err, Error::UnsupportedVersion { ref found, .. } if found == "9.9"));
        assert_eq!(phases.into_inner().unwrap(), vec![ConvertPhase::Detecting]);
    }

    #[test]
    fn test_decode_errors_carry_the_format() {
        let converter = Converter::with_defaults().unwrap();
        let input = br#"{"version": "4.4", "templates": "not a list"}"#;
        let err = converter.convert(input, Format::Json, Format::Xml).unwrap_err();
        assert!(matches!(err, Error::Decode { format: Format::Json, .. }));
    }

    #[test]
    fn test_decode_then_encode() {
        let converter = Converter::with_defaults().unwrap();
        let template = converter.decode(XML_V40.as_bytes(), Format::Xml).unwrap();
        assert_eq!(template.version.as_str(), "4.0");
        assert_eq!(template.document.schema(), Schema::V40);

        let xml = converter.encode(&template, Format::Xml).unwrap();
        assert_eq!(
            converter.convert(XML_V40.as_bytes(), Format::Xml, Format::Xml).unwrap(),
            xml
        );
    }

    #[test]
    fn test_engine_construction_is_validated() {
        let no_formats = EngineConfig {
            formats: Vec::new(),
            ..EngineConfig::default()
        };
        assert!(matches!(Converter::new(no_formats), Err(Error::InvalidConfig(_))));

        let twice = EngineConfig {
            formats: vec![Format::Xml, Format::Xml],
            ..EngineConfig::default()
        };
        assert!(matches!(Converter::new(twice), Err(Error::InvalidConfig(_))));

        let no_versions = EngineConfig {
            versions: Vec::new(),
            ..EngineConfig::default()
        };
        assert!(matches!(Converter::new(no_versions), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_injected_version_is_accepted() {
        let config = EngineConfig::default()
            .with_version(VersionConfig::new("9.0", Schema::V44, RuleSetId::V44));
        let converter = Converter::new(config).unwrap();

        let input = br#"{"version": "9.0", "templates": [{"template": "Future"}]}"#;
        let entry = converter.detect(input, Format::Json).unwrap();
        assert_eq!(entry.schema, Schema::V44);

        let default = Converter::with_defaults().unwrap();
        assert!(default.detect(input, Format::Json).is_err());
    }
}
