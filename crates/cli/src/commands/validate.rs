use anyhow::{Context, Result};
use poolgen_codec::CodecStrategy;
use poolgen_sim::prelude::GenesisState;
use std::fs;
use std::path::Path;

pub fn validate_genesis(input: &Path, codec: &str) -> Result<()> {
    println!("🔍 Validating genesis: {}", input.display());

    if !input.exists() {
        anyhow::bail!("Genesis file does not exist");
    }

    let codec = codec
        .parse::<CodecStrategy>()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Invalid codec strategy")?;
    let bytes = fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let genesis: GenesisState = codec
        .decode(&bytes)
        .context("Failed to decode genesis state")?;
    println!("✓ Decoded: {} pool record(s)", genesis.liquidity_pool_records.len());

    let violations = genesis.violations();
    if violations.is_empty() {
        println!("✓ Structure: OK");
        return Ok(());
    }

    for violation in &violations {
        println!("✗ {violation}");
    }
    anyhow::bail!(
        "Genesis failed validation with {} violation(s)",
        violations.len()
    )
}
