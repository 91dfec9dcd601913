use crate::base::{Coin, Coins, Dec};
use serde::{Deserialize, Serialize};

/// User request to add reserves to a pool.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MsgDepositToLiquidityPool {
    pub depositor_address: String,
    pub pool_id: u64,
    pub deposit_coins: Coins,
}

/// User request to redeem pool coins for reserves.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MsgWithdrawFromLiquidityPool {
    pub withdrawer_address: String,
    pub pool_id: u64,
    pub pool_coin: Coin,
}

/// User limit order against a pool.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MsgSwap {
    pub swap_requester_address: String,
    pub pool_id: u64,
    pub pool_type_index: u32,
    pub swap_type: u32,
    pub offer_coin: Coin,
    pub demand_coin_denom: String,
    pub offer_coin_fee: Coin,
    pub order_price: Dec,
}

/// Deposit queued in a pool's current batch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchPoolDepositMsg {
    pub msg_height: i64,
    pub msg_index: u64,
    pub executed: bool,
    pub succeeded: bool,
    pub to_be_deleted: bool,
    pub msg: MsgDepositToLiquidityPool,
}

/// Withdrawal queued in a pool's current batch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchPoolWithdrawMsg {
    pub msg_height: i64,
    pub msg_index: u64,
    pub executed: bool,
    pub succeeded: bool,
    pub to_be_deleted: bool,
    pub msg: MsgWithdrawFromLiquidityPool,
}

/// Swap order queued in a pool's current batch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchPoolSwapMsg {
    pub msg_height: i64,
    pub msg_index: u64,
    pub executed: bool,
    pub succeeded: bool,
    pub to_be_deleted: bool,
    pub order_expiry_height: i64,
    pub exchanged_offer_coin: Coin,
    pub remaining_offer_coin: Coin,
    pub reserved_offer_coin_fee: Coin,
    pub msg: MsgSwap,
}
