//! Payload encoding library.
//!
//! Provides the strategies used to encode simulation override values and the
//! published genesis payload.

mod error;
mod strategies;
mod traits;

pub use error::CodecError as Error;
pub use error::CodecError;
pub use strategies::{BincodeCodec, JsonCodec};
pub use traits::Codec;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Strategies for encoding payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecStrategy {
    /// Compact JSON.
    Json,
    /// Bincode binary encoding.
    Bincode,
}

impl CodecStrategy {
    /// Encode using the selected strategy.
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        match self {
            CodecStrategy::Json => JsonCodec.encode(value),
            CodecStrategy::Bincode => BincodeCodec.encode(value),
        }
    }

    /// Decode using the selected strategy.
    pub fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, CodecError> {
        match self {
            CodecStrategy::Json => JsonCodec.decode(data),
            CodecStrategy::Bincode => BincodeCodec.decode(data),
        }
    }
}

impl Default for CodecStrategy {
    fn default() -> Self {
        Self::Json
    }
}

impl std::fmt::Display for CodecStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Bincode => write!(f, "bincode"),
        }
    }
}

impl std::str::FromStr for CodecStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "bincode" | "binary" => Ok(Self::Bincode),
            _ => Err(format!(
                "Unknown codec strategy: {s}. Available: json, bincode"
            )),
        }
    }
}

impl Codec for CodecStrategy {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        CodecStrategy::encode(self, value)
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, CodecError> {
        CodecStrategy::decode(self, data)
    }
}

/// Render a value as indented JSON for operator-facing dumps.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CodecError> {
    serde_json::to_string_pretty(value).map_err(|e| CodecError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        pool_id: u64,
        denoms: Vec<String>,
    }

    #[test]
    fn test_strategies_agree_on_value() {
        let sample = Sample {
            pool_id: 42,
            denoms: vec!["stake".into(), "uatom".into()],
        };

        for strategy in [CodecStrategy::Json, CodecStrategy::Bincode] {
            let encoded = strategy.encode(&sample).unwrap();
            let decoded: Sample = strategy.decode(&encoded).unwrap();
            assert_eq!(decoded, sample, "strategy {strategy}");
        }
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let sample = Sample {
            pool_id: u64::MAX,
            denoms: vec![],
        };
        let a = CodecStrategy::Json.encode(&sample).unwrap();
        let b = CodecStrategy::Json.encode(&sample).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!("json".parse::<CodecStrategy>(), Ok(CodecStrategy::Json));
        assert_eq!("binary".parse::<CodecStrategy>(), Ok(CodecStrategy::Bincode));
        assert!("zstd".parse::<CodecStrategy>().is_err());
    }

    #[test]
    fn test_pretty_json_is_indented() {
        let sample = Sample {
            pool_id: 1,
            denoms: vec![],
        };
        let dump = to_pretty_json(&sample).unwrap();
        assert!(dump.contains("\n  \"pool_id\": 1"));
    }
}
