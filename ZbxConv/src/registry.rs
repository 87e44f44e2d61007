//! Schema registry
//!
//! Maps each supported version tag to its schema and compiled normalizer.
//! Built once from an explicit table and read-only afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::VersionConfig;
use crate::error::{Error, Result};
use crate::normalize::{Normalizer, RuleSetId};
use crate::schema::Schema;
use crate::version::VersionTag;

/// One row of the version table.
#[derive(Debug, Clone)]
pub struct VersionEntry {
    pub tag: VersionTag,
    pub schema: Schema,
    pub rules: RuleSetId,
    normalizer: Arc<Normalizer>,
}

impl VersionEntry {
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }
}

#[derive(Debug)]
pub struct Registry {
    entries: Vec<VersionEntry>,
    tags: Vec<VersionTag>,
}

impl Registry {
    /// Build the registry from version table rows, compiling each rule set once.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] if the table is empty or repeats a tag,
    /// or [`Error::InvalidRule`] if a rule set fails to compile.
    pub fn new(versions: &[VersionConfig]) -> Result<Self> {
        if versions.is_empty() {
            return Err(Error::InvalidConfig("no versions configured".to_string()));
        }

        let mut compiled: HashMap<RuleSetId, Arc<Normalizer>> = HashMap::new();
        let mut entries: Vec<VersionEntry> = Vec::with_capacity(versions.len());

        for version in versions {
            if entries.iter().any(|entry| entry.tag == version.tag) {
                return Err(Error::InvalidConfig(format!(
                    "version {} is configured twice",
                    version.tag
                )));
            }

            let normalizer = match compiled.get(&version.rules) {
                Some(normalizer) => Arc::clone(normalizer),
                None => {
                    let normalizer = Arc::new(Normalizer::new(version.rules.rules())?);
                    compiled.insert(version.rules, Arc::clone(&normalizer));
                    normalizer
                }
            };

            entries.push(VersionEntry {
                tag: version.tag.clone(),
                schema: version.schema,
                rules: version.rules,
                normalizer,
            });
        }

        let tags = entries.iter().map(|entry| entry.tag.clone()).collect();
        Ok(Self { entries, tags })
    }

    /// Supported tags, in table order.
    pub fn supported(&self) -> &[VersionTag] {
        &self.tags
    }

    pub fn entries(&self) -> &[VersionEntry] {
        &self.entries
    }

    pub fn resolve(&self, tag: &VersionTag) -> Option<&VersionEntry> {
        self.entries.iter().find(|entry| entry.tag == *tag)
    }

    /// Look up the entry for a tag that detection already accepted.
    ///
    /// # Errors
    /// Returns [`Error::SchemaNotRegistered`] if the tag has no entry.
    pub fn schema_for(&self, tag: &VersionTag) -> Result<&VersionEntry> {
        self.resolve(tag)
            .ok_or_else(|| Error::SchemaNotRegistered(tag.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_table_aliases_4_2_to_4_0() {
        let registry = Registry::new(&EngineConfig::default().versions).unwrap();

        let tags: Vec<&str> = registry.supported().iter().map(VersionTag::as_str).collect();
        assert_eq!(tags, vec!["4.0", "4.2", "4.4"]);

        let v42 = registry.schema_for(&VersionTag::from("4.2")).unwrap();
        assert_eq!(v42.schema, Schema::V40);
        assert_eq!(v42.rules, RuleSetId::V40);

        let v44 = registry.schema_for(&VersionTag::from("4.4")).unwrap();
        assert_eq!(v44.schema, Schema::V44);
        assert_eq!(v44.normalizer().rules().name, "4.4");
    }

    #[test]
    fn test_aliases_share_one_normalizer() {
        let registry = Registry::new(&EngineConfig::default().versions).unwrap();
        let v40 = registry.resolve(&VersionTag::from("4.0")).unwrap();
        let v42 = registry.resolve(&VersionTag::from("4.2")).unwrap();
        assert!(Arc::ptr_eq(&v40.normalizer, &v42.normalizer));
    }

    #[test]
    fn test_unknown_tag_is_an_internal_error() {
        let registry = Registry::new(&EngineConfig::default().versions).unwrap();
        let err = registry.schema_for(&VersionTag::from("5.0")).unwrap_err();
        assert!(matches!(err, Error::SchemaNotRegistered(ref tag) if tag == "5.0"));
    }

    #[test]
    fn test_invalid_tables_are_rejected() {
        assert!(matches!(Registry::new(&[]), Err(Error::InvalidConfig(_))));

        let row = VersionConfig {
            tag: VersionTag::from("4.0"),
            schema: Schema::V40,
            rules: RuleSetId::V40,
        };
        let err = Registry::new(&[row.clone(), row]).unwrap_err();
        assert!(err.to_string().contains("configured twice"));
    }
}
