//! Entity and record types of the liquidity module's genesis state.

mod genesis;
mod messages;
mod pool;

pub use genesis::{GenesisState, LiquidityPoolRecord, Params};
pub use messages::{
    BatchPoolDepositMsg, BatchPoolSwapMsg, BatchPoolWithdrawMsg, MsgDepositToLiquidityPool,
    MsgSwap, MsgWithdrawFromLiquidityPool,
};
pub use pool::{LiquidityPool, LiquidityPoolBatch, LiquidityPoolMetadata, LiquidityPoolType};

/// Key under which the module publishes its genesis payload.
pub const MODULE_NAME: &str = "liquidity";

/// Native staking denomination.
pub const DEFAULT_BOND_DENOM: &str = "stake";

/// Second reserve denomination of generated pools.
pub const SECONDARY_DENOM: &str = "uatom";
