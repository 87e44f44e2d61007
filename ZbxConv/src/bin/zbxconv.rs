//! zbxconv command-line entry point
//!
//! SPDX-FileCopyrightText: 2026 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

fn main() -> anyhow::Result<()> {
    zbxconv::cli::run_cli()
}
