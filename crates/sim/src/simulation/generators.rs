//! Value generators.
//!
//! Each generator turns the random source into one parameter or seed entity.
//! Several of them ignore the source and return the module's reference
//! defaults; they still take it so that every slot has the same shape.

use crate::base::{Coin, Coins, Dec, Int};
use crate::simulation::SimAccount;
use crate::types::{
    BatchPoolDepositMsg, BatchPoolSwapMsg, BatchPoolWithdrawMsg, LiquidityPool,
    LiquidityPoolBatch, LiquidityPoolMetadata, LiquidityPoolType, DEFAULT_BOND_DENOM,
    SECONDARY_DENOM,
};
use rand::Rng;

/// Lower bound (inclusive) of the generated pool creation fee.
pub const MIN_CREATION_FEE: u64 = 1_000_000;
/// Upper bound (exclusive) of the generated pool creation fee.
pub const MAX_CREATION_FEE: u64 = 10_000_000;

const DEFAULT_INIT_AMOUNT: u128 = 1_000_000;

pub fn gen_liquidity_pool_types<R: Rng>(_rng: &mut R) -> Vec<LiquidityPoolType> {
    vec![LiquidityPoolType {
        pool_type_index: 1,
        name: "simulation".into(),
        min_reserve_coin_num: 2,
        max_reserve_coin_num: 2,
        description: "simulation".into(),
    }]
}

pub fn gen_min_init_deposit_to_pool<R: Rng>(_rng: &mut R) -> Int {
    Int::new(DEFAULT_INIT_AMOUNT)
}

pub fn gen_init_pool_coin_mint_amount<R: Rng>(_rng: &mut R) -> Int {
    Int::new(DEFAULT_INIT_AMOUNT)
}

/// Single bond-denom amount drawn uniformly from
/// `[MIN_CREATION_FEE, MAX_CREATION_FEE)`.
pub fn gen_liquidity_pool_creation_fee<R: Rng>(rng: &mut R) -> Coins {
    let amount: u64 = rng.random_range(MIN_CREATION_FEE..MAX_CREATION_FEE);
    Coins::new(vec![Coin::new(DEFAULT_BOND_DENOM, amount)])
}

pub fn gen_swap_fee_rate<R: Rng>(_rng: &mut R) -> Dec {
    Dec::with_prec(3, 3)
}

pub fn gen_withdraw_fee_rate<R: Rng>(_rng: &mut R) -> Dec {
    Dec::with_prec(3, 3)
}

pub fn gen_max_order_amount_ratio<R: Rng>(_rng: &mut R) -> Dec {
    Dec::with_prec(1, 1)
}

/// Full `u32` range, zero included.
pub fn gen_unit_batch_size<R: Rng>(rng: &mut R) -> u32 {
    rng.random()
}

/// A two-asset pool of type 1 held by `reserve_account`.
pub fn gen_liquidity_pool<R: Rng>(rng: &mut R, reserve_account: &SimAccount) -> LiquidityPool {
    LiquidityPool {
        pool_id: rng.random(),
        pool_type_index: 1,
        reserve_coin_denoms: vec![DEFAULT_BOND_DENOM.to_string(), SECONDARY_DENOM.to_string()],
        reserve_account_address: reserve_account.address.clone(),
        pool_coin_denom: DEFAULT_BOND_DENOM.to_string(),
    }
}

pub fn gen_liquidity_pool_metadata<R: Rng>(_rng: &mut R) -> LiquidityPoolMetadata {
    LiquidityPoolMetadata::default()
}

pub fn gen_liquidity_pool_batch<R: Rng>(_rng: &mut R) -> LiquidityPoolBatch {
    LiquidityPoolBatch::default()
}

pub fn gen_batch_pool_deposit_msgs<R: Rng>(_rng: &mut R) -> Vec<BatchPoolDepositMsg> {
    Vec::new()
}

pub fn gen_batch_pool_withdraw_msgs<R: Rng>(_rng: &mut R) -> Vec<BatchPoolWithdrawMsg> {
    Vec::new()
}

pub fn gen_batch_pool_swap_msgs<R: Rng>(_rng: &mut R) -> Vec<BatchPoolSwapMsg> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_pool_types_default() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        let types = gen_liquidity_pool_types(&mut rng);
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].pool_type_index, 1);
        assert_eq!(types[0].min_reserve_coin_num, 2);
        assert_eq!(types[0].max_reserve_coin_num, 2);
    }

    #[test]
    fn test_constant_generators_do_not_draw() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        let reference = rng.clone();

        assert_eq!(gen_min_init_deposit_to_pool(&mut rng), Int::new(1_000_000));
        assert_eq!(gen_init_pool_coin_mint_amount(&mut rng), Int::new(1_000_000));
        assert_eq!(gen_swap_fee_rate(&mut rng).to_string(), "0.003000000000000000");
        assert_eq!(gen_withdraw_fee_rate(&mut rng).to_string(), "0.003000000000000000");
        assert_eq!(
            gen_max_order_amount_ratio(&mut rng).to_string(),
            "0.100000000000000000"
        );

        assert_eq!(rng, reference);
    }

    #[test]
    fn test_creation_fee_range() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
        for _ in 0..1000 {
            let fee = gen_liquidity_pool_creation_fee(&mut rng);
            assert_eq!(fee.len(), 1);
            let amount = fee.amount_of(DEFAULT_BOND_DENOM).value();
            assert!(amount >= u128::from(MIN_CREATION_FEE));
            assert!(amount < u128::from(MAX_CREATION_FEE));
        }
    }

    #[test]
    fn test_liquidity_pool_uses_reserve_account() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let account = SimAccount::new("cosmos1first");
        let pool = gen_liquidity_pool(&mut rng, &account);

        assert_eq!(pool.pool_type_index, 1);
        assert_eq!(pool.reserve_coin_denoms, vec!["stake", "uatom"]);
        assert_eq!(pool.reserve_account_address, "cosmos1first");
        assert_eq!(pool.pool_coin_denom, DEFAULT_BOND_DENOM);
    }

    #[test]
    fn test_generators_reproducible() {
        let mut a = Xoshiro256PlusPlus::seed_from_u64(77);
        let mut b = Xoshiro256PlusPlus::seed_from_u64(77);
        let account = SimAccount::new("cosmos1x");

        assert_eq!(gen_unit_batch_size(&mut a), gen_unit_batch_size(&mut b));
        assert_eq!(
            gen_liquidity_pool(&mut a, &account),
            gen_liquidity_pool(&mut b, &account)
        );
    }

    #[test]
    fn test_seed_records_are_empty() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        assert_eq!(gen_liquidity_pool_metadata(&mut rng), LiquidityPoolMetadata::default());
        assert_eq!(gen_liquidity_pool_batch(&mut rng), LiquidityPoolBatch::default());
        assert!(gen_batch_pool_deposit_msgs(&mut rng).is_empty());
        assert!(gen_batch_pool_withdraw_msgs(&mut rng).is_empty());
        assert!(gen_batch_pool_swap_msgs(&mut rng).is_empty());
    }
}
