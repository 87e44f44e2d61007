//! # zbxconv
//!
//! SPDX-FileCopyrightText: 2026 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! A pure-Rust converter for Zabbix template exports.
//!
//! ## Supported Formats
//!
//! - **XML** - Normalized to the exporter's own style for the document's version
//! - **JSON** - Pretty printed with four-space indentation
//! - **YAML**
//!
//! ## Supported Versions
//!
//! - **4.0** and **4.2** - Decoded with the 4.0 schema
//! - **4.4**
//!
//! ## Quick Start
//!
//! ```no_run
//! use zbxconv::{Converter, Format};
//!
//! let converter = Converter::with_defaults()?;
//! let xml = std::fs::read("template.xml").expect("readable template");
//! let json = converter.convert(&xml, Format::Xml, Format::Json)?;
//! println!("{}", String::from_utf8_lossy(&json));
//! # Ok::<(), zbxconv::Error>(())
//! ```
//!
//! ### Injecting a Version Table
//!
//! ```
//! use zbxconv::prelude::*;
//!
//! let config = EngineConfig::default()
//!     .with_version(VersionConfig::new("9.0", Schema::V44, RuleSetId::V44));
//! let converter = Converter::new(config)?;
//! assert_eq!(converter.registry().supported().len(), 4);
//! # Ok::<(), zbxconv::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `zbxconv` command-line binary

pub mod config;
pub mod converter;
pub mod error;
pub mod formats;
pub mod normalize;
pub mod registry;
pub mod schema;
pub mod version;

// Re-exports for convenience
pub use config::{EngineConfig, VersionConfig};
pub use converter::{Converter, Template};
pub use error::{Error, Result};
pub use formats::Format;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::config::{EngineConfig, VersionConfig};
    pub use crate::converter::{
        ConvertPhase, ConvertProgress, ConvertProgressCallback, Converter, Template,
    };
    pub use crate::error::{CodecError, Error, Result};
    pub use crate::formats::Format;
    pub use crate::normalize::{Normalizer, RuleSet, RuleSetId};
    pub use crate::registry::{Registry, VersionEntry};
    pub use crate::schema::{Document, Schema};
    pub use crate::version::{VersionTag, detect_version};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
