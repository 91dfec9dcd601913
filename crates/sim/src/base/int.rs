use crate::errors::InvalidAmount;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Non-negative integer amount.
///
/// Serialized as a base-10 string so that values wider than a JSON number
/// survive a round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Int(u128);

impl Int {
    pub const ZERO: Int = Int(0);

    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u128 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Add two amounts, saturating at the maximum representable value.
    pub fn saturating_add(self, other: Int) -> Int {
        Int(self.0.saturating_add(other.0))
    }
}

impl From<u64> for Int {
    fn from(value: u64) -> Self {
        Self(u128::from(value))
    }
}

impl From<u128> for Int {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Int {
    type Err = InvalidAmount;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u128>()
            .map(Int)
            .map_err(|_| InvalidAmount::NotAnInteger(s.to_string()))
    }
}

impl Serialize for Int {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Int {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
