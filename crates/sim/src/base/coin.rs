use super::Int;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount of a single denomination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: Int,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: impl Into<Int>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Multi-denomination amount.
///
/// Built through [`Coins::new`], which sorts by denomination, merges
/// duplicates and drops zero amounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coins(Vec<Coin>);

impl Coins {
    pub fn new(coins: Vec<Coin>) -> Self {
        let mut coins: Vec<Coin> = coins.into_iter().filter(|c| !c.amount.is_zero()).collect();
        coins.sort_by(|a, b| a.denom.cmp(&b.denom));

        let mut merged: Vec<Coin> = Vec::with_capacity(coins.len());
        for coin in coins {
            match merged.last_mut() {
                Some(last) if last.denom == coin.denom => {
                    last.amount = last.amount.saturating_add(coin.amount);
                }
                _ => merged.push(coin),
            }
        }
        Self(merged)
    }

    pub fn amount_of(&self, denom: &str) -> Int {
        self.0
            .iter()
            .find(|c| c.denom == denom)
            .map(|c| c.amount)
            .unwrap_or(Int::ZERO)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coin> {
        self.0.iter()
    }

    /// Check the canonical form: strictly ascending denoms, no zero amounts,
    /// no empty denominations.
    pub fn check_canonical(&self) -> Result<(), String> {
        for coin in &self.0 {
            if coin.denom.is_empty() {
                return Err("empty denomination".into());
            }
            if coin.amount.is_zero() {
                return Err(format!("zero amount for {}", coin.denom));
            }
        }
        for pair in self.0.windows(2) {
            if pair[0].denom >= pair[1].denom {
                return Err(format!(
                    "denominations not sorted or duplicated: {} then {}",
                    pair[0].denom, pair[1].denom
                ));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(Coin::to_string).collect();
        write!(f, "{}", parts.join(","))
    }
}
