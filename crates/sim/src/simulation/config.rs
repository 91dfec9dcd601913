//! Serializable description of a genesis generation run.

use crate::errors::GenesisError;
use crate::simulation::{AppParams, SimulationState};
use poolgen_codec::CodecStrategy;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

fn default_num_accounts() -> usize {
    3
}

/// Can be deserialized from a file to reproduce a generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenesisConfig {
    /// RNG seed (random when absent)
    #[serde(default)]
    pub seed: Option<u64>,
    /// Number of simulation accounts drawn before genesis
    #[serde(default = "default_num_accounts")]
    pub num_accounts: usize,
    /// Encoding of override payloads and of the published genesis
    #[serde(default)]
    pub codec: CodecStrategy,
    /// Slot overrides, as JSON values of each slot's type
    #[serde(default)]
    pub overrides: BTreeMap<String, Value>,
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            seed: None,
            num_accounts: default_num_accounts(),
            codec: CodecStrategy::default(),
            overrides: BTreeMap::new(),
        }
    }
}

impl GenesisConfig {
    /// The configured seed, or a fresh one from the thread RNG.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::rng().random())
    }

    /// Build the simulation context for `seed`.
    pub fn to_state(&self, seed: u64) -> Result<SimulationState, GenesisError> {
        let app_params = AppParams::from_json_overrides(&self.overrides, self.codec)?;
        Ok(SimulationState::from_seed(seed, self.num_accounts)
            .with_codec(self.codec)
            .with_app_params(app_params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let config: GenesisConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GenesisConfig::default());
        assert_eq!(config.num_accounts, 3);
        assert_eq!(config.codec, CodecStrategy::Json);
    }

    #[test]
    fn test_full_config() {
        let config: GenesisConfig = serde_json::from_str(
            r#"{
                "seed": 42,
                "num_accounts": 5,
                "codec": "bincode",
                "overrides": { "swap_fee_rate": "0.01" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.resolve_seed(), 42);
        let state = config.to_state(42).unwrap();
        assert_eq!(state.accounts.len(), 5);
        assert_eq!(state.codec, CodecStrategy::Bincode);
        assert!(state.app_params.contains("swap_fee_rate"));
    }

    #[test]
    fn test_bad_override_fails_early() {
        let mut config = GenesisConfig::default();
        config
            .overrides
            .insert("unit_batch_size".into(), serde_json::json!(-1));
        assert!(config.to_state(1).is_err());
    }
}
