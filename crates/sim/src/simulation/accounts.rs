//! Simulation account pool.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Human-readable prefix of generated account addresses.
pub const ADDRESS_PREFIX: &str = "cosmos1";

/// Length in bytes of the random part of an address.
const ADDRESS_BYTES: usize = 20;

/// An externally generated account identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimAccount {
    pub address: String,
}

impl SimAccount {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

/// Draw `n` accounts from the random source.
///
/// Addresses are the prefix followed by 20 random bytes in lowercase hex.
pub fn random_accounts<R: Rng>(rng: &mut R, n: usize) -> Vec<SimAccount> {
    (0..n)
        .map(|_| {
            let mut bytes = [0u8; ADDRESS_BYTES];
            rng.fill(&mut bytes);

            let mut address = String::with_capacity(ADDRESS_PREFIX.len() + 2 * ADDRESS_BYTES);
            address.push_str(ADDRESS_PREFIX);
            for b in bytes {
                // Writing into a String cannot fail
                let _ = write!(address, "{b:02x}");
            }
            SimAccount { address }
        })
        .collect()
}
