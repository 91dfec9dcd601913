//! Override table and the override-or-generate resolver.

use crate::errors::GenesisError;
use crate::simulation::slots::{GenerationContext, JsonValue, Payload, Slot, SlotValue};
use poolgen_codec::{CodecError, CodecStrategy};
use rand::Rng;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Harness-owned table of encoded slot values, keyed by slot name.
///
/// Entries under names that are not slots are kept but never read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppParams(BTreeMap<String, Vec<u8>>);

impl AppParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.0.get(name).map(Vec::as_slice)
    }

    pub fn insert(&mut self, name: impl Into<String>, payload: Vec<u8>) {
        self.0.insert(name.into(), payload);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Store a typed value under its slot's name.
    pub fn set(&mut self, value: &SlotValue, codec: CodecStrategy) -> Result<(), GenesisError> {
        let payload = value
            .encode_with(&codec)
            .map_err(GenesisError::Serialization)?;
        self.insert(value.slot().name(), payload);
        Ok(())
    }

    /// Build a table from human-written JSON overrides.
    ///
    /// Every key must name a slot and every value must decode into that
    /// slot's type; the values are then re-encoded with `codec`.
    pub fn from_json_overrides(
        overrides: &BTreeMap<String, Value>,
        codec: CodecStrategy,
    ) -> Result<Self, GenesisError> {
        let mut params = Self::new();
        for (name, raw) in overrides {
            let slot: Slot = name.parse()?;
            let value = slot.decode_with(raw.clone()).map_err(|e| {
                GenesisError::MalformedOverride {
                    slot: slot.name(),
                    source: CodecError::Decode(e.to_string()),
                }
            })?;
            params.set(&value, codec)?;
        }
        Ok(params)
    }

    /// Render the slot entries as JSON, e.g. to record a run for replay.
    pub fn to_json_overrides(
        &self,
        codec: CodecStrategy,
    ) -> Result<BTreeMap<String, Value>, GenesisError> {
        let mut out = BTreeMap::new();
        for slot in Slot::ALL {
            if let Some(value) = self.decode(slot, codec)? {
                let json = value
                    .encode_with(&JsonValue)
                    .map_err(|e| GenesisError::Serialization(CodecError::Encode(e.to_string())))?;
                out.insert(slot.name().to_string(), json);
            }
        }
        Ok(out)
    }

    /// Decode the override stored for `slot`, if there is one.
    pub fn decode(
        &self,
        slot: Slot,
        codec: CodecStrategy,
    ) -> Result<Option<SlotValue>, GenesisError> {
        let Some(bytes) = self.get(slot.name()) else {
            return Ok(None);
        };
        slot.decode_with(Payload { codec, bytes })
            .map(Some)
            .map_err(|source| GenesisError::MalformedOverride {
                slot: slot.name(),
                source,
            })
    }

    /// Resolve one slot.
    ///
    /// An existing override is decoded and used as-is. Otherwise the slot's
    /// generator runs and its value is written back under the slot name.
    pub fn get_or_generate<R: Rng>(
        &mut self,
        slot: Slot,
        codec: CodecStrategy,
        rng: &mut R,
        ctx: &GenerationContext<'_>,
    ) -> Result<SlotValue, GenesisError> {
        if let Some(value) = self.decode(slot, codec)? {
            debug!(slot = slot.name(), "using override");
            return Ok(value);
        }

        let value = slot.generate(rng, ctx)?;
        let payload = value
            .encode_with(&codec)
            .map_err(GenesisError::Serialization)?;
        self.insert(slot.name(), payload);
        debug!(slot = slot.name(), "generated");
        Ok(value)
    }
}

impl FromIterator<(String, Vec<u8>)> for AppParams {
    fn from_iter<I: IntoIterator<Item = (String, Vec<u8>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
