//! CLI command listing the version table

use std::path::Path;

use super::engine::load_converter;

pub fn execute(config: Option<&Path>) -> anyhow::Result<()> {
    let converter = load_converter(config)?;

    println!("{:<10} {:<8} RULES", "VERSION", "SCHEMA");
    for entry in converter.registry().entries() {
        println!(
            "{:<10} {:<8} {}",
            entry.tag.as_str(),
            entry.schema.name(),
            entry.rules
        );
    }

    Ok(())
}
