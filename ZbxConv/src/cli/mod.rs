//! zbxconv CLI - Command-line interface for Zabbix template conversion
//!
//! SPDX-FileCopyrightText: 2026 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

pub mod commands;

use clap::Parser;
use commands::Commands;
use tracing::Level;

#[derive(Parser)]
#[command(name = "zbxconv", version)]
#[command(about = "zbxconv: Zabbix template converter (XML, JSON, YAML)", long_about = None)]
struct Cli {
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Run the zbxconv CLI
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging; stdout may carry converted output
    let level = if cli.quiet { Level::WARN } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    cli.command.execute()?;

    Ok(())
}
