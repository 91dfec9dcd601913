//! Structural checks for parameters and genesis state.
//!
//! These cover shape only (indices, bounds, ranges). Whether a parameter set
//! is economically sound is left to the execution engine.

use crate::errors::ValidationError;
use crate::types::{GenesisState, Params};
use std::collections::HashSet;

impl Params {
    /// Every structural violation in the parameter set, in field order.
    pub fn violations(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        let mut seen = HashSet::new();
        for pt in &self.liquidity_pool_types {
            if pt.pool_type_index == 0 {
                errors.push(ValidationError::ZeroPoolTypeIndex);
            }
            if !seen.insert(pt.pool_type_index) {
                errors.push(ValidationError::DuplicatePoolTypeIndex(pt.pool_type_index));
            }
            if pt.min_reserve_coin_num == 0 || pt.min_reserve_coin_num > pt.max_reserve_coin_num {
                errors.push(ValidationError::InvalidReserveCoinBounds {
                    pool_type_index: pt.pool_type_index,
                    min: pt.min_reserve_coin_num,
                    max: pt.max_reserve_coin_num,
                });
            }
        }

        if let Err(reason) = self.liquidity_pool_creation_fee.check_canonical() {
            errors.push(ValidationError::InvalidCoins {
                field: "liquidity_pool_creation_fee",
                reason,
            });
        }

        let rates = [
            ("swap_fee_rate", self.swap_fee_rate),
            ("withdraw_fee_rate", self.withdraw_fee_rate),
            ("max_order_amount_ratio", self.max_order_amount_ratio),
        ];
        for (field, value) in rates {
            if !value.is_unit_interval() {
                errors.push(ValidationError::DecimalOutOfRange { field, value });
            }
        }

        errors
    }

    /// First structural violation, if any.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.violations().into_iter().next() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl GenesisState {
    /// Every structural violation in the parameters and seed records.
    pub fn violations(&self) -> Vec<ValidationError> {
        let mut errors = self.params.violations();

        let mut pool_ids = HashSet::new();
        for record in &self.liquidity_pool_records {
            let pool = &record.liquidity_pool;
            if !pool_ids.insert(pool.pool_id) {
                errors.push(ValidationError::DuplicatePoolId(pool.pool_id));
            }

            match self.params.pool_type(pool.pool_type_index) {
                None => errors.push(ValidationError::UnknownPoolType {
                    pool_id: pool.pool_id,
                    pool_type_index: pool.pool_type_index,
                }),
                Some(pt) if !pt.admits(pool.reserve_coin_denoms.len()) => {
                    errors.push(ValidationError::ReserveCoinCount {
                        pool_id: pool.pool_id,
                        count: pool.reserve_coin_denoms.len(),
                        min: pt.min_reserve_coin_num,
                        max: pt.max_reserve_coin_num,
                    });
                }
                Some(_) => {}
            }
        }

        errors
    }

    /// First structural violation, if any.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.violations().into_iter().next() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{Coin, Coins, Dec, Int};
    use crate::types::{
        LiquidityPool, LiquidityPoolBatch, LiquidityPoolMetadata, LiquidityPoolRecord,
        LiquidityPoolType,
    };

    fn params() -> Params {
        Params {
            liquidity_pool_types: vec![LiquidityPoolType {
                pool_type_index: 1,
                name: "standard".into(),
                min_reserve_coin_num: 2,
                max_reserve_coin_num: 2,
                description: "two-asset pool".into(),
            }],
            min_init_deposit_to_pool: Int::new(1_000_000),
            init_pool_coin_mint_amount: Int::new(1_000_000),
            liquidity_pool_creation_fee: Coins::new(vec![Coin::new("stake", 5_000_000u64)]),
            swap_fee_rate: Dec::with_prec(3, 3),
            withdraw_fee_rate: Dec::with_prec(3, 3),
            max_order_amount_ratio: Dec::with_prec(1, 1),
            unit_batch_size: 1,
        }
    }

    fn record(pool_id: u64, pool_type_index: u32, denoms: &[&str]) -> LiquidityPoolRecord {
        LiquidityPoolRecord {
            liquidity_pool: LiquidityPool {
                pool_id,
                pool_type_index,
                reserve_coin_denoms: denoms.iter().map(|d| d.to_string()).collect(),
                reserve_account_address: "cosmos1reserve".into(),
                pool_coin_denom: "stake".into(),
            },
            liquidity_pool_metadata: LiquidityPoolMetadata::default(),
            liquidity_pool_batch: LiquidityPoolBatch::default(),
            batch_pool_deposit_msgs: vec![],
            batch_pool_withdraw_msgs: vec![],
            batch_pool_swap_msgs: vec![],
        }
    }

    #[test]
    fn test_valid_params() {
        assert!(params().validate().is_ok());
    }

    #[test]
    fn test_duplicate_pool_type_index() {
        let mut p = params();
        p.liquidity_pool_types.push(p.liquidity_pool_types[0].clone());
        assert_eq!(p.validate(), Err(ValidationError::DuplicatePoolTypeIndex(1)));
    }

    #[test]
    fn test_inverted_reserve_bounds() {
        let mut p = params();
        p.liquidity_pool_types[0].min_reserve_coin_num = 3;
        assert!(matches!(
            p.validate(),
            Err(ValidationError::InvalidReserveCoinBounds { min: 3, max: 2, .. })
        ));
    }

    #[test]
    fn test_rate_out_of_range_reports_field() {
        let mut p = params();
        p.withdraw_fee_rate = "1.01".parse().unwrap();
        p.max_order_amount_ratio = "-0.5".parse().unwrap();

        let violations = p.violations();
        assert_eq!(violations.len(), 2);
        assert!(matches!(
            violations[0],
            ValidationError::DecimalOutOfRange { field: "withdraw_fee_rate", .. }
        ));
        assert!(matches!(
            violations[1],
            ValidationError::DecimalOutOfRange { field: "max_order_amount_ratio", .. }
        ));
    }

    #[test]
    fn test_zero_unit_batch_size_is_not_a_violation() {
        let mut p = params();
        p.unit_batch_size = 0;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_genesis_unknown_pool_type() {
        let genesis = GenesisState {
            params: params(),
            liquidity_pool_records: vec![record(7, 2, &["stake", "uatom"])],
        };
        assert_eq!(
            genesis.validate(),
            Err(ValidationError::UnknownPoolType {
                pool_id: 7,
                pool_type_index: 2
            })
        );
    }

    #[test]
    fn test_genesis_reserve_count_out_of_bounds() {
        let genesis = GenesisState {
            params: params(),
            liquidity_pool_records: vec![record(7, 1, &["stake"])],
        };
        assert!(matches!(
            genesis.validate(),
            Err(ValidationError::ReserveCoinCount { count: 1, .. })
        ));
    }

    #[test]
    fn test_genesis_duplicate_pool_ids() {
        let genesis = GenesisState {
            params: params(),
            liquidity_pool_records: vec![
                record(7, 1, &["stake", "uatom"]),
                record(7, 1, &["stake", "uosmo"]),
            ],
        };
        assert_eq!(genesis.violations(), vec![ValidationError::DuplicatePoolId(7)]);
    }

    #[test]
    fn test_genesis_without_records_is_valid() {
        let genesis = GenesisState {
            params: params(),
            liquidity_pool_records: vec![],
        };
        assert!(genesis.validate().is_ok());
    }
}
