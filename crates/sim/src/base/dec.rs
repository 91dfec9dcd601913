use crate::errors::InvalidAmount;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of fractional digits carried by every `Dec`.
pub const PRECISION: u32 = 18;

/// Fixed-precision decimal with exactly 18 fractional digits.
///
/// Equality is numeric; the textual form is always padded to the full
/// precision (`0.003` renders as `0.003000000000000000`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dec(Decimal);

impl Dec {
    /// `value * 10^-prec`. `prec` must not exceed [`PRECISION`].
    pub fn with_prec(value: i64, prec: u32) -> Self {
        debug_assert!(prec <= PRECISION, "precision {prec} exceeds {PRECISION}");
        Self::normalized(Decimal::new(value, prec.min(PRECISION)))
    }

    pub fn zero() -> Self {
        Self::normalized(Decimal::ZERO)
    }

    pub fn one() -> Self {
        Self::normalized(Decimal::ONE)
    }

    /// Whether the value lies in the closed unit interval.
    pub fn is_unit_interval(&self) -> bool {
        self.0 >= Decimal::ZERO && self.0 <= Decimal::ONE
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    fn normalized(mut value: Decimal) -> Self {
        value.rescale(PRECISION);
        Self(value)
    }
}

impl Default for Dec {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Dec {
    type Err = InvalidAmount;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value =
            Decimal::from_str(s).map_err(|_| InvalidAmount::NotADecimal(s.to_string()))?;
        if value.scale() > PRECISION {
            return Err(InvalidAmount::TooPrecise {
                value: s.to_string(),
                max_digits: PRECISION,
            });
        }
        Ok(Self::normalized(value))
    }
}

impl Serialize for Dec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_prec_renders_full_precision() {
        assert_eq!(Dec::with_prec(3, 3).to_string(), "0.003000000000000000");
        assert_eq!(Dec::with_prec(1, 1).to_string(), "0.100000000000000000");
        assert_eq!(Dec::one().to_string(), "1.000000000000000000");
    }

    #[test]
    fn test_equality_is_numeric() {
        let short: Dec = "0.01".parse().unwrap();
        let long: Dec = "0.010000000000000000".parse().unwrap();
        assert_eq!(short, long);
        assert_eq!(short, Dec::with_prec(1, 2));
    }

    #[test]
    fn test_too_many_digits_rejected() {
        let result = "0.0000000000000000001".parse::<Dec>();
        assert!(matches!(result, Err(InvalidAmount::TooPrecise { .. })));
    }

    #[test]
    fn test_unit_interval() {
        assert!(Dec::zero().is_unit_interval());
        assert!(Dec::one().is_unit_interval());
        assert!(Dec::with_prec(3, 3).is_unit_interval());
        assert!(!"1.5".parse::<Dec>().unwrap().is_unit_interval());
        assert!(!"-0.1".parse::<Dec>().unwrap().is_unit_interval());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Dec::with_prec(3, 3)).unwrap();
        assert_eq!(json, "\"0.003000000000000000\"");
        let back: Dec = serde_json::from_str("\"0.01\"").unwrap();
        assert_eq!(back, Dec::with_prec(1, 2));
    }
}
