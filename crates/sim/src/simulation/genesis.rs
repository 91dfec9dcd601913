//! Genesis assembly.
//!
//! Resolves every slot in [`Slot::ALL`] order, assembles the parameters and
//! the single seed pool record, and publishes the encoded genesis under the
//! module name.

use crate::base::{Coins, Dec, Int};
use crate::errors::GenesisError;
use crate::simulation::slots::{GenerationContext, Slot, SlotValue};
use crate::simulation::SimulationState;
use crate::types::*;
use poolgen_codec::to_pretty_json;
use tracing::{info, warn};

/// Resolve all slots and publish a randomized liquidity genesis.
///
/// The encoded state is written to `state.gen_state` under [`MODULE_NAME`]
/// and the decoded value is returned. On error nothing is published, though
/// slots resolved before the failure stay recorded in the override table.
pub fn randomized_gen_state(state: &mut SimulationState) -> Result<GenesisState, GenesisError> {
    let ctx = GenerationContext {
        accounts: &state.accounts,
    };

    let mut resolved = ResolvedSlots::default();
    for slot in Slot::ALL {
        let value = state
            .app_params
            .get_or_generate(slot, state.codec, &mut state.rng, &ctx)?;
        resolved.absorb(value);
    }
    let genesis = resolved.into_genesis()?;

    if genesis.params.unit_batch_size == 0 {
        warn!("unit_batch_size is 0; batches may never be executed");
    }

    let dump = to_pretty_json(&genesis).map_err(GenesisError::Serialization)?;
    info!("Selected randomly generated liquidity parameters:\n{dump}");

    let payload = state
        .codec
        .encode(&genesis)
        .map_err(GenesisError::Serialization)?;
    state.gen_state.insert(MODULE_NAME.to_string(), payload);

    Ok(genesis)
}

/// Slot values collected during one assembly pass.
#[derive(Default)]
struct ResolvedSlots {
    liquidity_pool_types: Option<Vec<LiquidityPoolType>>,
    min_init_deposit_to_pool: Option<Int>,
    init_pool_coin_mint_amount: Option<Int>,
    liquidity_pool_creation_fee: Option<Coins>,
    swap_fee_rate: Option<Dec>,
    withdraw_fee_rate: Option<Dec>,
    max_order_amount_ratio: Option<Dec>,
    unit_batch_size: Option<u32>,
    liquidity_pool: Option<LiquidityPool>,
    liquidity_pool_metadata: Option<LiquidityPoolMetadata>,
    liquidity_pool_batch: Option<LiquidityPoolBatch>,
    batch_pool_deposit_msgs: Option<Vec<BatchPoolDepositMsg>>,
    batch_pool_withdraw_msgs: Option<Vec<BatchPoolWithdrawMsg>>,
    batch_pool_swap_msgs: Option<Vec<BatchPoolSwapMsg>>,
}

fn require<T>(value: Option<T>, slot: Slot) -> Result<T, GenesisError> {
    value.ok_or(GenesisError::MissingSlot(slot.name()))
}

impl ResolvedSlots {
    fn absorb(&mut self, value: SlotValue) {
        match value {
            SlotValue::LiquidityPoolTypes(v) => self.liquidity_pool_types = Some(v),
            SlotValue::MinInitDepositToPool(v) => self.min_init_deposit_to_pool = Some(v),
            SlotValue::InitPoolCoinMintAmount(v) => self.init_pool_coin_mint_amount = Some(v),
            SlotValue::LiquidityPoolCreationFee(v) => self.liquidity_pool_creation_fee = Some(v),
            SlotValue::SwapFeeRate(v) => self.swap_fee_rate = Some(v),
            SlotValue::WithdrawFeeRate(v) => self.withdraw_fee_rate = Some(v),
            SlotValue::MaxOrderAmountRatio(v) => self.max_order_amount_ratio = Some(v),
            SlotValue::UnitBatchSize(v) => self.unit_batch_size = Some(v),
            SlotValue::LiquidityPool(v) => self.liquidity_pool = Some(v),
            SlotValue::LiquidityPoolMetadata(v) => self.liquidity_pool_metadata = Some(v),
            SlotValue::LiquidityPoolBatch(v) => self.liquidity_pool_batch = Some(v),
            SlotValue::BatchPoolDepositMsgs(v) => self.batch_pool_deposit_msgs = Some(v),
            SlotValue::BatchPoolWithdrawMsgs(v) => self.batch_pool_withdraw_msgs = Some(v),
            SlotValue::BatchPoolSwapMsgs(v) => self.batch_pool_swap_msgs = Some(v),
        }
    }

    fn into_genesis(self) -> Result<GenesisState, GenesisError> {
        let params = Params {
            liquidity_pool_types: require(self.liquidity_pool_types, Slot::LiquidityPoolTypes)?,
            min_init_deposit_to_pool: require(
                self.min_init_deposit_to_pool,
                Slot::MinInitDepositToPool,
            )?,
            init_pool_coin_mint_amount: require(
                self.init_pool_coin_mint_amount,
                Slot::InitPoolCoinMintAmount,
            )?,
            liquidity_pool_creation_fee: require(
                self.liquidity_pool_creation_fee,
                Slot::LiquidityPoolCreationFee,
            )?,
            swap_fee_rate: require(self.swap_fee_rate, Slot::SwapFeeRate)?,
            withdraw_fee_rate: require(self.withdraw_fee_rate, Slot::WithdrawFeeRate)?,
            max_order_amount_ratio: require(
                self.max_order_amount_ratio,
                Slot::MaxOrderAmountRatio,
            )?,
            unit_batch_size: require(self.unit_batch_size, Slot::UnitBatchSize)?,
        };

        let record = LiquidityPoolRecord {
            liquidity_pool: require(self.liquidity_pool, Slot::LiquidityPool)?,
            liquidity_pool_metadata: require(
                self.liquidity_pool_metadata,
                Slot::LiquidityPoolMetadata,
            )?,
            liquidity_pool_batch: require(self.liquidity_pool_batch, Slot::LiquidityPoolBatch)?,
            batch_pool_deposit_msgs: require(
                self.batch_pool_deposit_msgs,
                Slot::BatchPoolDepositMsgs,
            )?,
            batch_pool_withdraw_msgs: require(
                self.batch_pool_withdraw_msgs,
                Slot::BatchPoolWithdrawMsgs,
            )?,
            batch_pool_swap_msgs: require(self.batch_pool_swap_msgs, Slot::BatchPoolSwapMsgs)?,
        };

        Ok(GenesisState {
            params,
            liquidity_pool_records: vec![record],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::SimAccount;

    #[test]
    fn test_missing_slot_is_reported() {
        let resolved = ResolvedSlots::default();
        assert!(matches!(
            resolved.into_genesis(),
            Err(GenesisError::MissingSlot("liquidity_pool_types"))
        ));
    }

    #[test]
    fn test_publishes_under_module_name() {
        let mut state = SimulationState::from_seed(1, 3);
        let genesis = randomized_gen_state(&mut state).unwrap();

        assert_eq!(state.gen_state.len(), 1);
        assert_eq!(state.load_genesis().unwrap(), Some(genesis));
    }

    #[test]
    fn test_all_slots_recorded() {
        let mut state = SimulationState::from_seed(2, 1);
        randomized_gen_state(&mut state).unwrap();

        for slot in Slot::ALL {
            assert!(state.app_params.contains(slot.name()), "missing {slot}");
        }
    }

    #[test]
    fn test_no_accounts_publishes_nothing() {
        let mut state = SimulationState::from_seed(3, 0);
        let err = randomized_gen_state(&mut state).unwrap_err();

        assert!(matches!(err, GenesisError::NoAccounts));
        assert!(state.gen_state.is_empty());
    }

    #[test]
    fn test_pool_override_needs_no_accounts() {
        let pool = LiquidityPool {
            pool_id: 9,
            pool_type_index: 1,
            reserve_coin_denoms: vec!["stake".into(), "uatom".into()],
            reserve_account_address: SimAccount::new("cosmos1fixed").address,
            pool_coin_denom: "stake".into(),
        };
        let mut state = SimulationState::from_seed(3, 0);
        state
            .app_params
            .set(&SlotValue::LiquidityPool(pool.clone()), state.codec)
            .unwrap();

        let genesis = randomized_gen_state(&mut state).unwrap();
        assert_eq!(genesis.liquidity_pool_records[0].liquidity_pool, pool);
    }
}
