//! Error types for `zbxconv`

use thiserror::Error;

use crate::formats::Format;

/// The error type for conversion operations.
///
/// Every variant is terminal for the conversion it occurs in.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== Input Classification Errors ====================
    /// The format name or file extension is not one of the supported encodings.
    #[error("unsupported format: {name} (supported: {})", .supported.join(", "))]
    UnsupportedFormat {
        /// The rejected format name or extension.
        name: String,
        /// The accepted format names.
        supported: Vec<String>,
    },

    /// The input does not parse as the declared format, even at envelope level.
    #[error("malformed {format} input: {source}")]
    MalformedInput {
        /// The declared source format.
        format: Format,
        /// The underlying parser error.
        #[source]
        source: CodecError,
    },

    /// The document declares a version outside the supported set.
    #[error(
        "unsupported template version {found:?}, supported versions: {}",
        .supported.join(", ")
    )]
    UnsupportedVersion {
        /// The version string found in the envelope (empty when absent).
        found: String,
        /// The accepted version tags.
        supported: Vec<String>,
    },

    // ==================== Codec Errors ====================
    /// Full-schema decoding failed after the version was resolved.
    #[error("{format} decode error: {source}")]
    Decode {
        /// The source format.
        format: Format,
        /// The underlying parser error.
        #[source]
        source: CodecError,
    },

    /// Serializing a decoded document failed.
    #[error("{format} encode error: {source}")]
    Encode {
        /// The target format.
        format: Format,
        /// The underlying serializer error.
        #[source]
        source: CodecError,
    },

    // ==================== Engine Construction Errors ====================
    /// A detected version has no schema in the registry (internal state error).
    #[error("no schema registered for version {0}")]
    SchemaNotRegistered(String),

    /// The engine configuration is inconsistent.
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),

    /// A normalization rule set failed validation or compilation.
    #[error("invalid normalization rule in {rule_set}: {message}")]
    InvalidRule {
        /// Name of the rule set holding the rule.
        rule_set: String,
        /// What is wrong with the rule.
        message: String,
    },

    /// Engine configuration TOML could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Failures reported by the underlying encoders and decoders.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CodecError {
    /// XML reader or writer error.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// XML envelope deserialization error.
    #[error("XML deserialization error: {0}")]
    XmlDe(#[from] quick_xml::DeError),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The decoded element tree does not fit the schema's field types.
    #[error("document does not match schema: {0}")]
    Schema(#[source] serde_json::Error),

    /// The XML element structure is not a valid template layout.
    #[error("{0}")]
    Structure(String),

    /// Input bytes are not valid UTF-8.
    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// A specialized Result type for `zbxconv` operations.
pub type Result<T> = std::result::Result<T, Error>;
