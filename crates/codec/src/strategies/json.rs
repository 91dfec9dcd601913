use crate::error::CodecError;
use crate::traits::Codec;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Strategy: compact JSON, the application's native genesis encoding.
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(value).map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, CodecError> {
        serde_json::from_slice(data).map_err(|e| CodecError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_encode_is_compact() {
        let mut map = BTreeMap::new();
        map.insert("b", 2u32);
        map.insert("a", 1u32);
        let encoded = JsonCodec.encode(&map).unwrap();
        assert_eq!(encoded, br#"{"a":1,"b":2}"#);
    }

    #[test]
    fn test_decode_string_value() {
        let decoded: String = JsonCodec.decode(br#""0.010000000000000000""#).unwrap();
        assert_eq!(decoded, "0.010000000000000000");
    }

    #[test]
    fn test_decode_malformed() {
        let result: Result<u32, _> = JsonCodec.decode(b"{not json");
        assert!(matches!(result, Err(CodecError::Decode(_))));
    }

    #[test]
    fn test_decode_wrong_type() {
        let result: Result<u32, _> = JsonCodec.decode(br#""seven""#);
        assert!(result.is_err());
    }
}
