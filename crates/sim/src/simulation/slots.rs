//! Named genesis slots.
//!
//! A slot is one independently resolvable parameter or seed entity. Slot
//! names are the contract with harness scenarios: an override is honored
//! only when it is stored under the exact name returned by [`Slot::name`].

use crate::base::{Coins, Dec, Int};
use crate::errors::GenesisError;
use crate::simulation::generators::*;
use crate::simulation::SimAccount;
use crate::types::{
    BatchPoolDepositMsg, BatchPoolSwapMsg, BatchPoolWithdrawMsg, LiquidityPool,
    LiquidityPoolBatch, LiquidityPoolMetadata, LiquidityPoolType,
};
use poolgen_codec::{CodecError, CodecStrategy};
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Every slot of the liquidity genesis, in resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    LiquidityPoolTypes,
    MinInitDepositToPool,
    InitPoolCoinMintAmount,
    LiquidityPoolCreationFee,
    SwapFeeRate,
    WithdrawFeeRate,
    MaxOrderAmountRatio,
    UnitBatchSize,
    LiquidityPool,
    LiquidityPoolMetadata,
    LiquidityPoolBatch,
    BatchPoolDepositMsgs,
    BatchPoolWithdrawMsgs,
    BatchPoolSwapMsgs,
}

/// Read-only context some generators need.
#[derive(Debug, Clone, Copy)]
pub struct GenerationContext<'a> {
    pub accounts: &'a [SimAccount],
}

/// A resolved slot value, tagged by slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotValue {
    LiquidityPoolTypes(Vec<LiquidityPoolType>),
    MinInitDepositToPool(Int),
    InitPoolCoinMintAmount(Int),
    LiquidityPoolCreationFee(Coins),
    SwapFeeRate(Dec),
    WithdrawFeeRate(Dec),
    MaxOrderAmountRatio(Dec),
    UnitBatchSize(u32),
    LiquidityPool(LiquidityPool),
    LiquidityPoolMetadata(LiquidityPoolMetadata),
    LiquidityPoolBatch(LiquidityPoolBatch),
    BatchPoolDepositMsgs(Vec<BatchPoolDepositMsg>),
    BatchPoolWithdrawMsgs(Vec<BatchPoolWithdrawMsg>),
    BatchPoolSwapMsgs(Vec<BatchPoolSwapMsg>),
}

/// Source of a typed value for a slot.
///
/// Implemented for encoded override payloads and for parsed JSON values, so
/// that each slot's target type is named once, in [`Slot::decode_with`].
pub trait SlotDecoder {
    type Error;

    fn decode<T: DeserializeOwned>(self) -> Result<T, Self::Error>;
}

/// Sink for a slot's typed value.
pub trait SlotEncoder {
    type Output;
    type Error;

    fn encode<T: Serialize>(&self, value: &T) -> Result<Self::Output, Self::Error>;
}

/// An override payload together with the codec it was written with.
pub struct Payload<'a> {
    pub codec: CodecStrategy,
    pub bytes: &'a [u8],
}

impl SlotDecoder for Payload<'_> {
    type Error = CodecError;

    fn decode<T: DeserializeOwned>(self) -> Result<T, CodecError> {
        self.codec.decode(self.bytes)
    }
}

impl SlotDecoder for serde_json::Value {
    type Error = serde_json::Error;

    fn decode<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self)
    }
}

impl SlotEncoder for CodecStrategy {
    type Output = Vec<u8>;
    type Error = CodecError;

    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        CodecStrategy::encode(self, value)
    }
}

/// Encodes slot values as JSON trees.
pub struct JsonValue;

impl SlotEncoder for JsonValue {
    type Output = serde_json::Value;
    type Error = serde_json::Error;

    fn encode<T: Serialize>(&self, value: &T) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(value)
    }
}

impl Slot {
    pub const ALL: [Slot; 14] = [
        Slot::LiquidityPoolTypes,
        Slot::MinInitDepositToPool,
        Slot::InitPoolCoinMintAmount,
        Slot::LiquidityPoolCreationFee,
        Slot::SwapFeeRate,
        Slot::WithdrawFeeRate,
        Slot::MaxOrderAmountRatio,
        Slot::UnitBatchSize,
        Slot::LiquidityPool,
        Slot::LiquidityPoolMetadata,
        Slot::LiquidityPoolBatch,
        Slot::BatchPoolDepositMsgs,
        Slot::BatchPoolWithdrawMsgs,
        Slot::BatchPoolSwapMsgs,
    ];

    /// Override key of the slot.
    pub const fn name(self) -> &'static str {
        match self {
            Slot::LiquidityPoolTypes => "liquidity_pool_types",
            Slot::MinInitDepositToPool => "min_init_deposit_to_pool",
            Slot::InitPoolCoinMintAmount => "init_pool_coin_mint_amount",
            Slot::LiquidityPoolCreationFee => "liquidity_pool_creation_fee",
            Slot::SwapFeeRate => "swap_fee_rate",
            Slot::WithdrawFeeRate => "withdraw_fee_rate",
            Slot::MaxOrderAmountRatio => "max_order_amount_ratio",
            Slot::UnitBatchSize => "unit_batch_size",
            Slot::LiquidityPool => "liquidity_pool",
            Slot::LiquidityPoolMetadata => "liquidity_pool_metadata",
            Slot::LiquidityPoolBatch => "liquidity_pool_batch",
            Slot::BatchPoolDepositMsgs => "batch_pool_deposit_msgs",
            Slot::BatchPoolWithdrawMsgs => "batch_pool_withdraw_msgs",
            Slot::BatchPoolSwapMsgs => "batch_pool_swap_msgs",
        }
    }

    /// One-line description of what the default generator produces.
    pub const fn default_behavior(self) -> &'static str {
        match self {
            Slot::LiquidityPoolTypes => "one pool type, index 1, reserve coins [2, 2]",
            Slot::MinInitDepositToPool => "constant 1000000",
            Slot::InitPoolCoinMintAmount => "constant 1000000",
            Slot::LiquidityPoolCreationFee => "uniform stake amount in [1000000, 10000000)",
            Slot::SwapFeeRate => "constant 0.003",
            Slot::WithdrawFeeRate => "constant 0.003",
            Slot::MaxOrderAmountRatio => "constant 0.1",
            Slot::UnitBatchSize => "uniform over the full u32 range",
            Slot::LiquidityPool => "random id, type 1, [stake, uatom], first account as reserve",
            Slot::LiquidityPoolMetadata => "empty",
            Slot::LiquidityPoolBatch => "empty",
            Slot::BatchPoolDepositMsgs => "empty list",
            Slot::BatchPoolWithdrawMsgs => "empty list",
            Slot::BatchPoolSwapMsgs => "empty list",
        }
    }

    pub fn from_name(name: &str) -> Option<Slot> {
        Slot::ALL.into_iter().find(|slot| slot.name() == name)
    }

    /// Decode a value of this slot's type from `decoder`.
    pub fn decode_with<D: SlotDecoder>(self, decoder: D) -> Result<SlotValue, D::Error> {
        Ok(match self {
            Slot::LiquidityPoolTypes => SlotValue::LiquidityPoolTypes(decoder.decode()?),
            Slot::MinInitDepositToPool => SlotValue::MinInitDepositToPool(decoder.decode()?),
            Slot::InitPoolCoinMintAmount => SlotValue::InitPoolCoinMintAmount(decoder.decode()?),
            Slot::LiquidityPoolCreationFee => {
                SlotValue::LiquidityPoolCreationFee(decoder.decode()?)
            }
            Slot::SwapFeeRate => SlotValue::SwapFeeRate(decoder.decode()?),
            Slot::WithdrawFeeRate => SlotValue::WithdrawFeeRate(decoder.decode()?),
            Slot::MaxOrderAmountRatio => SlotValue::MaxOrderAmountRatio(decoder.decode()?),
            Slot::UnitBatchSize => SlotValue::UnitBatchSize(decoder.decode()?),
            Slot::LiquidityPool => SlotValue::LiquidityPool(decoder.decode()?),
            Slot::LiquidityPoolMetadata => SlotValue::LiquidityPoolMetadata(decoder.decode()?),
            Slot::LiquidityPoolBatch => SlotValue::LiquidityPoolBatch(decoder.decode()?),
            Slot::BatchPoolDepositMsgs => SlotValue::BatchPoolDepositMsgs(decoder.decode()?),
            Slot::BatchPoolWithdrawMsgs => SlotValue::BatchPoolWithdrawMsgs(decoder.decode()?),
            Slot::BatchPoolSwapMsgs => SlotValue::BatchPoolSwapMsgs(decoder.decode()?),
        })
    }

    /// Run this slot's generator.
    ///
    /// Only the liquidity pool reads the context; it fails with
    /// [`GenesisError::NoAccounts`] when the account pool is empty.
    pub fn generate<R: Rng>(
        self,
        rng: &mut R,
        ctx: &GenerationContext<'_>,
    ) -> Result<SlotValue, GenesisError> {
        Ok(match self {
            Slot::LiquidityPoolTypes => SlotValue::LiquidityPoolTypes(gen_liquidity_pool_types(rng)),
            Slot::MinInitDepositToPool => {
                SlotValue::MinInitDepositToPool(gen_min_init_deposit_to_pool(rng))
            }
            Slot::InitPoolCoinMintAmount => {
                SlotValue::InitPoolCoinMintAmount(gen_init_pool_coin_mint_amount(rng))
            }
            Slot::LiquidityPoolCreationFee => {
                SlotValue::LiquidityPoolCreationFee(gen_liquidity_pool_creation_fee(rng))
            }
            Slot::SwapFeeRate => SlotValue::SwapFeeRate(gen_swap_fee_rate(rng)),
            Slot::WithdrawFeeRate => SlotValue::WithdrawFeeRate(gen_withdraw_fee_rate(rng)),
            Slot::MaxOrderAmountRatio => {
                SlotValue::MaxOrderAmountRatio(gen_max_order_amount_ratio(rng))
            }
            Slot::UnitBatchSize => SlotValue::UnitBatchSize(gen_unit_batch_size(rng)),
            Slot::LiquidityPool => {
                let reserve_account = ctx.accounts.first().ok_or(GenesisError::NoAccounts)?;
                SlotValue::LiquidityPool(gen_liquidity_pool(rng, reserve_account))
            }
            Slot::LiquidityPoolMetadata => {
                SlotValue::LiquidityPoolMetadata(gen_liquidity_pool_metadata(rng))
            }
            Slot::LiquidityPoolBatch => SlotValue::LiquidityPoolBatch(gen_liquidity_pool_batch(rng)),
            Slot::BatchPoolDepositMsgs => {
                SlotValue::BatchPoolDepositMsgs(gen_batch_pool_deposit_msgs(rng))
            }
            Slot::BatchPoolWithdrawMsgs => {
                SlotValue::BatchPoolWithdrawMsgs(gen_batch_pool_withdraw_msgs(rng))
            }
            Slot::BatchPoolSwapMsgs => SlotValue::BatchPoolSwapMsgs(gen_batch_pool_swap_msgs(rng)),
        })
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Slot {
    type Err = GenesisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Slot::from_name(s).ok_or_else(|| GenesisError::UnknownSlot(s.to_string()))
    }
}

impl SlotValue {
    pub fn slot(&self) -> Slot {
        match self {
            SlotValue::LiquidityPoolTypes(_) => Slot::LiquidityPoolTypes,
            SlotValue::MinInitDepositToPool(_) => Slot::MinInitDepositToPool,
            SlotValue::InitPoolCoinMintAmount(_) => Slot::InitPoolCoinMintAmount,
            SlotValue::LiquidityPoolCreationFee(_) => Slot::LiquidityPoolCreationFee,
            SlotValue::SwapFeeRate(_) => Slot::SwapFeeRate,
            SlotValue::WithdrawFeeRate(_) => Slot::WithdrawFeeRate,
            SlotValue::MaxOrderAmountRatio(_) => Slot::MaxOrderAmountRatio,
            SlotValue::UnitBatchSize(_) => Slot::UnitBatchSize,
            SlotValue::LiquidityPool(_) => Slot::LiquidityPool,
            SlotValue::LiquidityPoolMetadata(_) => Slot::LiquidityPoolMetadata,
            SlotValue::LiquidityPoolBatch(_) => Slot::LiquidityPoolBatch,
            SlotValue::BatchPoolDepositMsgs(_) => Slot::BatchPoolDepositMsgs,
            SlotValue::BatchPoolWithdrawMsgs(_) => Slot::BatchPoolWithdrawMsgs,
            SlotValue::BatchPoolSwapMsgs(_) => Slot::BatchPoolSwapMsgs,
        }
    }

    /// Encode the inner value with `encoder`.
    pub fn encode_with<E: SlotEncoder>(&self, encoder: &E) -> Result<E::Output, E::Error> {
        match self {
            SlotValue::LiquidityPoolTypes(v) => encoder.encode(v),
            SlotValue::MinInitDepositToPool(v) => encoder.encode(v),
            SlotValue::InitPoolCoinMintAmount(v) => encoder.encode(v),
            SlotValue::LiquidityPoolCreationFee(v) => encoder.encode(v),
            SlotValue::SwapFeeRate(v) => encoder.encode(v),
            SlotValue::WithdrawFeeRate(v) => encoder.encode(v),
            SlotValue::MaxOrderAmountRatio(v) => encoder.encode(v),
            SlotValue::UnitBatchSize(v) => encoder.encode(v),
            SlotValue::LiquidityPool(v) => encoder.encode(v),
            SlotValue::LiquidityPoolMetadata(v) => encoder.encode(v),
            SlotValue::LiquidityPoolBatch(v) => encoder.encode(v),
            SlotValue::BatchPoolDepositMsgs(v) => encoder.encode(v),
            SlotValue::BatchPoolWithdrawMsgs(v) => encoder.encode(v),
            SlotValue::BatchPoolSwapMsgs(v) => encoder.encode(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::collections::HashSet;

    #[test]
    fn test_slot_names_unique_and_round_trip() {
        let names: HashSet<_> = Slot::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), Slot::ALL.len());

        for slot in Slot::ALL {
            assert_eq!(Slot::from_name(slot.name()), Some(slot));
            assert_eq!(slot.name().parse::<Slot>().unwrap(), slot);
        }
    }

    #[test]
    fn test_unknown_slot_name() {
        assert!(Slot::from_name("swap_fee").is_none());
        assert!(matches!(
            "swap_fee".parse::<Slot>(),
            Err(GenesisError::UnknownSlot(name)) if name == "swap_fee"
        ));
    }

    #[test]
    fn test_generated_value_matches_slot() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let accounts = [SimAccount::new("cosmos1a")];
        let ctx = GenerationContext { accounts: &accounts };

        for slot in Slot::ALL {
            let value = slot.generate(&mut rng, &ctx).unwrap();
            assert_eq!(value.slot(), slot);
        }
    }

    #[test]
    fn test_pool_generation_needs_accounts() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let ctx = GenerationContext { accounts: &[] };

        assert!(matches!(
            Slot::LiquidityPool.generate(&mut rng, &ctx),
            Err(GenesisError::NoAccounts)
        ));
        assert!(Slot::SwapFeeRate.generate(&mut rng, &ctx).is_ok());
    }

    #[test]
    fn test_decode_from_json_value() {
        let value = Slot::SwapFeeRate
            .decode_with(serde_json::json!("0.01"))
            .unwrap();
        assert_eq!(value, SlotValue::SwapFeeRate(Dec::with_prec(1, 2)));

        let bad = Slot::UnitBatchSize.decode_with(serde_json::json!("ten"));
        assert!(bad.is_err());
    }

    #[test]
    fn test_payload_decode_uses_codec() {
        let bytes = CodecStrategy::Bincode.encode(&42u32).unwrap();
        let payload = Payload {
            codec: CodecStrategy::Bincode,
            bytes: &bytes,
        };
        assert_eq!(
            Slot::UnitBatchSize.decode_with(payload).unwrap(),
            SlotValue::UnitBatchSize(42)
        );
    }

    #[test]
    fn test_encode_with_json_value() {
        let value = SlotValue::MinInitDepositToPool(Int::new(5));
        assert_eq!(value.encode_with(&JsonValue).unwrap(), serde_json::json!("5"));
    }
}
