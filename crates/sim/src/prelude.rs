//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use poolgen_sim::prelude::*;
//!
//! let mut state = SimulationState::from_seed(1, 3);
//! let genesis = randomized_gen_state(&mut state).unwrap();
//! assert_eq!(genesis.liquidity_pool_records.len(), 1);
//! ```

pub use crate::base::{Coin, Coins, Dec, Int};
pub use crate::errors::{GenesisError, ValidationError};
pub use crate::simulation::{
    randomized_gen_state, AppParams, GenesisConfig, SimAccount, SimulationState, Slot, SlotValue,
};
pub use crate::types::{GenesisState, LiquidityPoolRecord, Params, MODULE_NAME};
pub use poolgen_codec::CodecStrategy;
