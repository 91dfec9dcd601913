//! Monetary primitives shared by parameters and seed records.
//!
//! Amounts are non-negative integers, rates are fixed 18-digit decimals, and
//! both serialize as strings so that encodings stay exact.

mod coin;
mod dec;
mod int;

pub use coin::{Coin, Coins};
pub use dec::{Dec, PRECISION};
pub use int::Int;
