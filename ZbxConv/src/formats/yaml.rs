//! YAML codec

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CodecError;

/// Parse a YAML document into `T`.
///
/// # Errors
/// Returns an error if the YAML is malformed or does not fit `T`.
pub fn parse<T: DeserializeOwned>(content: &[u8]) -> Result<T, CodecError> {
    Ok(serde_yaml::from_slice(content)?)
}

/// Serialize `value` as YAML.
///
/// # Errors
/// Returns an error if `value` cannot be represented as YAML.
pub fn serialize<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    Ok(serde_yaml::to_string(value)?.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Header {
        version: String,
    }

    #[test]
    fn test_numeric_looking_strings_stay_strings() {
        let header = Header {
            version: "4.0".to_string(),
        };
        let yaml = serialize(&header).unwrap();
        let parsed: Header = parse(&yaml).unwrap();
        assert_eq!(parsed, header);
    }
}
