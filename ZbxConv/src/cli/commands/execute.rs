//! Command execution implementations

use super::Commands;
use super::{convert, detect, versions};

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Convert {
                source,
                destination,
                input_format,
                output_format,
                config,
            } => convert::execute(
                source,
                destination.as_deref(),
                input_format.as_deref(),
                output_format.as_deref(),
                config.as_deref(),
            ),
            Commands::Detect {
                source,
                input_format,
                config,
            } => detect::execute(source, input_format.as_deref(), config.as_deref()),
            Commands::Versions { config } => versions::execute(config.as_deref()),
        }
    }
}
