//! Engine configuration
//!
//! The supported formats and the version table are plain values handed to
//! [`Converter::new`](crate::Converter::new). They can also be read from TOML:
//!
//! ```toml
//! formats = ["xml", "json"]
//!
//! [[versions]]
//! tag = "4.4"
//! schema = "4.4"
//! rules = "4.4"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::formats::Format;
use crate::normalize::RuleSetId;
use crate::schema::Schema;
use crate::version::VersionTag;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Formats accepted as conversion source or target.
    #[serde(default = "default_formats")]
    pub formats: Vec<Format>,

    /// Supported versions with their schema and rule set.
    #[serde(default = "default_versions")]
    pub versions: Vec<VersionConfig>,
}

/// One supported version: the schema it decodes into and the rules its XML
/// output is normalized with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionConfig {
    pub tag: VersionTag,
    pub schema: Schema,
    pub rules: RuleSetId,
}

impl VersionConfig {
    pub fn new(tag: impl Into<String>, schema: Schema, rules: RuleSetId) -> Self {
        Self {
            tag: VersionTag::new(tag),
            schema,
            rules,
        }
    }
}

fn default_formats() -> Vec<Format> {
    Format::ALL.to_vec()
}

fn default_versions() -> Vec<VersionConfig> {
    vec![
        VersionConfig::new("4.0", Schema::V40, RuleSetId::V40),
        // 4.2 exports are field-compatible with 4.0
        VersionConfig::new("4.2", Schema::V40, RuleSetId::V40),
        VersionConfig::new("4.4", Schema::V44, RuleSetId::V44),
    ]
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            formats: default_formats(),
            versions: default_versions(),
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from TOML. Missing keys take their defaults.
    ///
    /// # Errors
    /// Returns [`Error::ConfigParse`](crate::Error::ConfigParse) on invalid TOML
    /// or unknown format, schema or rule set names.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Add a version row, replacing any existing row with the same tag.
    #[must_use]
    pub fn with_version(mut self, version: VersionConfig) -> Self {
        self.versions.retain(|existing| existing.tag != version.tag);
        self.versions.push(version);
        self
    }
}
