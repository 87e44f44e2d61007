//! CLI interface for template conversion

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Context;

use super::engine::{load_converter, read_source, resolve_format};

pub fn execute(
    source: &Path,
    destination: Option<&Path>,
    input_format: Option<&str>,
    output_format: Option<&str>,
    config: Option<&Path>,
) -> anyhow::Result<()> {
    let converter = load_converter(config)?;
    let input = resolve_format(input_format, Some(source))?;
    let output = resolve_format(output_format, destination)?;

    tracing::info!("Converting {} ({input} -> {output})", source.display());

    let content = read_source(source)?;
    let converted = converter.convert_with_progress(&content, input, output, &|progress| {
        let percent = progress.percentage() * 100.0;
        match &progress.detail {
            Some(detail) => {
                tracing::debug!("[{percent:>3.0}%] {}: {detail}", progress.phase.as_str());
            }
            None => tracing::debug!("[{percent:>3.0}%] {}", progress.phase.as_str()),
        }
    })?;

    // Nothing is written unless the whole conversion succeeded
    match destination {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            file.write_all(&converted)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            file.sync_all()
                .with_context(|| format!("Failed to flush {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&converted)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
