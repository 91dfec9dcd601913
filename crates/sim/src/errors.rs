use crate::base::Dec;
use poolgen_codec::CodecError;
use std::error;
use std::fmt;

/// Error returned when a string cannot be parsed into an `Int` or `Dec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidAmount {
    /// The string is not a non-negative integer.
    NotAnInteger(String),
    /// The string is not a decimal number.
    NotADecimal(String),
    /// The decimal carries more fractional digits than the fixed precision.
    TooPrecise { value: String, max_digits: u32 },
}

impl fmt::Display for InvalidAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnInteger(s) => write!(f, "Invalid integer amount: '{s}'"),
            Self::NotADecimal(s) => write!(f, "Invalid decimal: '{s}'"),
            Self::TooPrecise { value, max_digits } => write!(
                f,
                "Decimal '{value}' exceeds {max_digits} fractional digits"
            ),
        }
    }
}

impl error::Error for InvalidAmount {}

/// Errors that abort genesis generation.
#[derive(Debug)]
pub enum GenesisError {
    /// An override payload could not be decoded into the slot's type.
    MalformedOverride {
        slot: &'static str,
        source: CodecError,
    },
    /// An override names a slot that does not exist.
    UnknownSlot(String),
    /// The liquidity pool must be generated but there is no account to use
    /// as its reserve account.
    NoAccounts,
    /// A slot was never resolved during assembly.
    MissingSlot(&'static str),
    /// The assembled genesis state could not be serialized.
    Serialization(CodecError),
}

impl fmt::Display for GenesisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedOverride { slot, source } => {
                write!(f, "Malformed override for slot '{slot}': {source}")
            }
            Self::UnknownSlot(name) => write!(f, "Unknown genesis slot: '{name}'"),
            Self::NoAccounts => write!(
                f,
                "Simulation account pool is empty; cannot assign a reserve account"
            ),
            Self::MissingSlot(slot) => write!(f, "Slot '{slot}' was not resolved"),
            Self::Serialization(e) => write!(f, "Failed to serialize genesis state: {e}"),
        }
    }
}

impl error::Error for GenesisError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::MalformedOverride { source, .. } => Some(source),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

/// A structural invariant violated by a `Params` or `GenesisState`.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Two pool types share the same index.
    DuplicatePoolTypeIndex(u32),
    /// Pool type indices start at 1.
    ZeroPoolTypeIndex,
    /// Reserve coin bounds must satisfy 1 <= min <= max.
    InvalidReserveCoinBounds { pool_type_index: u32, min: u32, max: u32 },
    /// A rate or ratio lies outside [0, 1].
    DecimalOutOfRange { field: &'static str, value: Dec },
    /// A coin set is unsorted, duplicated, or holds a zero amount.
    InvalidCoins { field: &'static str, reason: String },
    /// Two pools share the same id.
    DuplicatePoolId(u64),
    /// A pool references a pool type that is not in the parameters.
    UnknownPoolType { pool_id: u64, pool_type_index: u32 },
    /// A pool holds a number of reserve denominations outside its type's bounds.
    ReserveCoinCount { pool_id: u64, count: usize, min: u32, max: u32 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicatePoolTypeIndex(index) => {
                write!(f, "Duplicate pool type index: {index}")
            }
            Self::ZeroPoolTypeIndex => write!(f, "Pool type index must be positive"),
            Self::InvalidReserveCoinBounds {
                pool_type_index,
                min,
                max,
            } => write!(
                f,
                "Pool type {pool_type_index} has invalid reserve coin bounds [{min}, {max}]"
            ),
            Self::DecimalOutOfRange { field, value } => {
                write!(f, "{field} must be within [0, 1], got {value}")
            }
            Self::InvalidCoins { field, reason } => write!(f, "Invalid {field}: {reason}"),
            Self::DuplicatePoolId(id) => write!(f, "Duplicate pool id: {id}"),
            Self::UnknownPoolType {
                pool_id,
                pool_type_index,
            } => write!(
                f,
                "Pool {pool_id} references unknown pool type {pool_type_index}"
            ),
            Self::ReserveCoinCount {
                pool_id,
                count,
                min,
                max,
            } => write!(
                f,
                "Pool {pool_id} has {count} reserve coin denoms (allowed: {min}..={max})"
            ),
        }
    }
}

impl error::Error for ValidationError {}
