use crate::base::{Coin, Coins};
use serde::{Deserialize, Serialize};

/// Template describing the structural constraints of a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidityPoolType {
    /// Positive index, unique within the parameter set
    pub pool_type_index: u32,
    pub name: String,
    /// Minimum number of reserve coin denominations
    pub min_reserve_coin_num: u32,
    /// Maximum number of reserve coin denominations
    pub max_reserve_coin_num: u32,
    pub description: String,
}

impl LiquidityPoolType {
    /// Whether a pool holding `count` reserve denominations fits this type.
    pub fn admits(&self, count: usize) -> bool {
        let count = count as u64;
        count >= u64::from(self.min_reserve_coin_num) && count <= u64::from(self.max_reserve_coin_num)
    }
}

/// A seed pool instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidityPool {
    pub pool_id: u64,
    pub pool_type_index: u32,
    /// Ordered reserve coin denominations
    pub reserve_coin_denoms: Vec<String>,
    /// Custody account holding the reserves
    pub reserve_account_address: String,
    /// Denomination of the pool's ownership shares
    pub pool_coin_denom: String,
}

/// Per-pool supply bookkeeping, filled in by the execution engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LiquidityPoolMetadata {
    pub pool_id: u64,
    pub pool_coin_total_supply: Coin,
    pub reserve_coins: Coins,
}

/// State of a pool's current settlement batch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LiquidityPoolBatch {
    pub pool_id: u64,
    pub batch_index: u64,
    pub begin_height: i64,
    /// Next message index to assign, per request kind
    pub deposit_msg_index: u64,
    pub withdraw_msg_index: u64,
    pub swap_msg_index: u64,
    pub executed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_type(min: u32, max: u32) -> LiquidityPoolType {
        LiquidityPoolType {
            pool_type_index: 1,
            name: "test".into(),
            min_reserve_coin_num: min,
            max_reserve_coin_num: max,
            description: "test".into(),
        }
    }

    #[test]
    fn test_admits_within_bounds() {
        let pt = pool_type(2, 3);
        assert!(!pt.admits(1));
        assert!(pt.admits(2));
        assert!(pt.admits(3));
        assert!(!pt.admits(4));
    }

    #[test]
    fn test_defaults_are_empty() {
        let metadata = LiquidityPoolMetadata::default();
        assert_eq!(metadata.pool_id, 0);
        assert!(metadata.reserve_coins.is_empty());
        assert!(metadata.pool_coin_total_supply.amount.is_zero());

        let batch = LiquidityPoolBatch::default();
        assert_eq!(batch.batch_index, 0);
        assert!(!batch.executed);
    }
}
