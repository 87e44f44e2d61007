//! JSON codec
//!
//! Field order follows struct declaration order (`serde_json` is built with
//! `preserve_order`). Output uses four-space indentation.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::CodecError;

const INDENT: &[u8] = b"    ";

/// Parse a JSON document into `T`.
///
/// # Errors
/// Returns an error if the JSON is malformed or does not fit `T`.
pub fn parse<T: DeserializeOwned>(content: &[u8]) -> Result<T, CodecError> {
    Ok(serde_json::from_slice(content)?)
}

/// Serialize `value` as pretty-printed JSON.
///
/// # Errors
/// Returns an error if `value` cannot be represented as JSON.
pub fn serialize<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    let mut output = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut output, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Pair {
        zeta: String,
        alpha: Vec<String>,
    }

    #[test]
    fn test_four_space_indent_in_declaration_order() {
        let pair = Pair {
            zeta: "z".to_string(),
            alpha: vec!["a".to_string()],
        };
        let json = String::from_utf8(serialize(&pair).unwrap()).unwrap();
        assert_eq!(json, "{\n    \"zeta\": \"z\",\n    \"alpha\": [\n        \"a\"\n    ]\n}");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse::<Pair>(b"{\"zeta\": ").is_err());
    }
}
