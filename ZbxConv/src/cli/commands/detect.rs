//! CLI command for version detection

use std::path::Path;

use super::engine::{load_converter, read_source, resolve_format};

pub fn execute(
    source: &Path,
    input_format: Option<&str>,
    config: Option<&Path>,
) -> anyhow::Result<()> {
    let converter = load_converter(config)?;
    let format = resolve_format(input_format, Some(source))?;
    let content = read_source(source)?;

    let entry = converter.detect(&content, format)?;
    println!("{}", entry.tag);

    Ok(())
}
