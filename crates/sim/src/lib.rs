//! # Liquidity Genesis Simulation Crate
//!
//! The `sim` crate turns a single seeded random source into a complete,
//! internally consistent genesis state for a batch-auction liquidity module.
//! Any slot can be pinned through an override table, which lets a fuzzing
//! harness replay targeted scenarios as well as explore randomly.

pub mod base;
pub mod errors;
pub mod simulation;
pub mod types;
pub mod validation;
pub mod prelude;

pub use base::{Coin, Coins, Dec, Int};
pub use types::GenesisState;
