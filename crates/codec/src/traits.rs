use crate::error::CodecError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Core trait for payload codecs.
///
/// Every strategy must be able to:
/// 1.  `encode`: Take a serializable value and turn it into bytes.
/// 2.  `decode`: Take those bytes and rebuild the original value.
///
/// Encoding must be deterministic: the same value always yields the same bytes.
pub trait Codec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError>;
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, CodecError>;
}
