use super::messages::{BatchPoolDepositMsg, BatchPoolSwapMsg, BatchPoolWithdrawMsg};
use super::pool::{LiquidityPool, LiquidityPoolBatch, LiquidityPoolMetadata, LiquidityPoolType};
use crate::base::{Coins, Dec, Int};
use serde::{Deserialize, Serialize};

/// Module parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    pub liquidity_pool_types: Vec<LiquidityPoolType>,
    /// Minimum reserve amount required to create a pool
    pub min_init_deposit_to_pool: Int,
    /// Pool coins minted to the creator of a new pool
    pub init_pool_coin_mint_amount: Int,
    pub liquidity_pool_creation_fee: Coins,
    pub swap_fee_rate: Dec,
    pub withdraw_fee_rate: Dec,
    /// Largest order allowed, as a fraction of the offered reserve
    pub max_order_amount_ratio: Dec,
    /// Number of blocks per settlement batch
    pub unit_batch_size: u32,
}

impl Params {
    /// Look up a pool type by index.
    pub fn pool_type(&self, pool_type_index: u32) -> Option<&LiquidityPoolType> {
        self.liquidity_pool_types
            .iter()
            .find(|pt| pt.pool_type_index == pool_type_index)
    }
}

/// Seed state for a single pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidityPoolRecord {
    pub liquidity_pool: LiquidityPool,
    pub liquidity_pool_metadata: LiquidityPoolMetadata,
    pub liquidity_pool_batch: LiquidityPoolBatch,
    pub batch_pool_deposit_msgs: Vec<BatchPoolDepositMsg>,
    pub batch_pool_withdraw_msgs: Vec<BatchPoolWithdrawMsg>,
    pub batch_pool_swap_msgs: Vec<BatchPoolSwapMsg>,
}

/// Complete initial state of the liquidity module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    pub params: Params,
    pub liquidity_pool_records: Vec<LiquidityPoolRecord>,
}
