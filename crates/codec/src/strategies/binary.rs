use crate::error::CodecError;
use crate::traits::Codec;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Strategy: bincode (little-endian, fixed-width integers).
///
/// Smaller than JSON but not self-describing, so decoding requires the exact
/// target type.
pub struct BincodeCodec;

impl Codec for BincodeCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        bincode::serialize(value).map_err(|e| CodecError::Encode(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, CodecError> {
        bincode::deserialize(data).map_err(|e| CodecError::Decode(e.to_string()))
    }
}
