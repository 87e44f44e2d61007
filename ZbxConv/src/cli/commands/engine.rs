//! Engine setup shared by the commands

use std::path::Path;

use anyhow::Context;

use crate::{Converter, EngineConfig, Format};

/// Build the converter from `--config`, or the built-in tables.
pub(super) fn load_converter(config: Option<&Path>) -> anyhow::Result<Converter> {
    let config = match config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            EngineConfig::from_toml_str(&content)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    Ok(Converter::new(config)?)
}

/// Explicit format argument, else the path's extension.
pub(super) fn resolve_format(explicit: Option<&str>, path: Option<&Path>) -> anyhow::Result<Format> {
    match (explicit, path) {
        (Some(name), _) => Ok(name.parse()?),
        (None, Some(path)) => Format::from_path(path)
            .with_context(|| format!("Cannot detect format of {}", path.display())),
        (None, None) => anyhow::bail!("An output format is required when writing to stdout"),
    }
}

pub(super) fn read_source(source: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(source).with_context(|| format!("Failed to read {}", source.display()))
}
