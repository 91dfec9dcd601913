//! Randomized genesis generation.
//!
//! - `generators`: one value generator per slot.
//! - `slots`: slot names, the tagged `SlotValue`, and per-slot decoding.
//! - `params`: the override table and the override-or-generate resolver.
//! - `genesis`: the assembler that resolves every slot and publishes the result.

pub mod accounts;
pub mod config;
pub mod generators;
pub mod genesis;
pub mod params;
pub mod slots;
pub mod state;

pub use accounts::{random_accounts, SimAccount, ADDRESS_PREFIX};
pub use config::GenesisConfig;
pub use genesis::randomized_gen_state;
pub use params::AppParams;
pub use slots::{GenerationContext, Slot, SlotValue};
pub use state::{GenesisRegistry, SimulationState};
