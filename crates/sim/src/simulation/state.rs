//! Harness-owned simulation context for one genesis generation call.

use crate::simulation::{random_accounts, AppParams, SimAccount};
use crate::types::{GenesisState, MODULE_NAME};
use poolgen_codec::{CodecError, CodecStrategy};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::collections::BTreeMap;

/// Shared registry of encoded genesis payloads, keyed by module name.
pub type GenesisRegistry = BTreeMap<String, Vec<u8>>;

/// Everything a genesis generation call reads and writes.
///
/// The random source and the override table are the only mutable inputs;
/// the registry receives the published payload.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Override table (read, and written back for generated slots)
    pub app_params: AppParams,
    /// Random source (Xoshiro256++ for reproducibility across platforms)
    pub rng: Xoshiro256PlusPlus,
    /// Pre-generated simulation accounts
    pub accounts: Vec<SimAccount>,
    /// Published genesis payloads
    pub gen_state: GenesisRegistry,
    /// Encoding of override payloads and published genesis
    pub codec: CodecStrategy,
}

impl SimulationState {
    pub fn new(rng: Xoshiro256PlusPlus, accounts: Vec<SimAccount>) -> Self {
        Self {
            app_params: AppParams::new(),
            rng,
            accounts,
            gen_state: GenesisRegistry::new(),
            codec: CodecStrategy::default(),
        }
    }

    /// Seed the random source and draw `num_accounts` accounts from it.
    pub fn from_seed(seed: u64, num_accounts: usize) -> Self {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let accounts = random_accounts(&mut rng, num_accounts);
        Self::new(rng, accounts)
    }

    pub fn with_app_params(mut self, app_params: AppParams) -> Self {
        self.app_params = app_params;
        self
    }

    pub fn with_codec(mut self, codec: CodecStrategy) -> Self {
        self.codec = codec;
        self
    }

    /// Encoded payload published for the liquidity module, if any.
    pub fn genesis_payload(&self) -> Option<&[u8]> {
        self.gen_state.get(MODULE_NAME).map(Vec::as_slice)
    }

    /// Decode the published liquidity genesis, if any.
    pub fn load_genesis(&self) -> Result<Option<GenesisState>, CodecError> {
        self.genesis_payload()
            .map(|bytes| self.codec.decode(bytes))
            .transpose()
    }
}
