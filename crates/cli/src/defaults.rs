//! Shared default values for genesis generation.
//! These values are used by the `generate` command (via clap) and mirror
//! `GenesisConfig::default()`.

pub const OUTPUT_GENESIS: &str = "genesis.json";
pub const NUM_ACCOUNTS: usize = 3;
pub const CODEC: &str = "json";
pub const LOG_FILTER: &str = "info";
