mod binary;
mod json;

pub use binary::BincodeCodec;
pub use json::JsonCodec;
