use anyhow::{Context, Result};
use poolgen_codec::CodecStrategy;
use poolgen_sim::simulation::{randomized_gen_state, GenesisConfig};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::args::GenerateArgs;
use crate::defaults;
use crate::printing::print_genesis;

pub fn generate_genesis(args: &GenerateArgs) -> Result<()> {
    let config = build_config(args)?;
    let seed = config.resolve_seed();

    println!("💧 Poolgen - Liquidity Genesis Generator");
    println!("========================================\n");
    println!("Seed: {seed}");
    println!("Accounts: {}", config.num_accounts);
    println!("Codec: {}", config.codec);
    println!("Overrides: {}", config.overrides.len());

    let mut state = config.to_state(seed).context("Invalid override configuration")?;
    let genesis = randomized_gen_state(&mut state).context("Failed to generate genesis state")?;
    info!(seed, "genesis generated");

    print_genesis(&genesis);

    let payload = state
        .genesis_payload()
        .context("Genesis payload was not published")?;
    fs::write(&args.output, payload)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("✓ Genesis written: {}", args.output.display());

    if let Some(record) = &args.record {
        let resolved = state
            .app_params
            .to_json_overrides(state.codec)
            .context("Failed to render resolved slots")?;
        let json = serde_json::to_string_pretty(&resolved)?;
        fs::write(record, json)
            .with_context(|| format!("Failed to write {}", record.display()))?;
        println!("✓ Resolved slots recorded: {}", record.display());
    }

    println!("\n💡 Replay with 'poolgen generate --seed {seed}'");

    Ok(())
}

/// Merge `--config`, `--overrides` and the individual flags, in that order.
pub fn build_config(args: &GenerateArgs) -> Result<GenesisConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str::<GenesisConfig>(&text)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => GenesisConfig {
            num_accounts: defaults::NUM_ACCOUNTS,
            ..GenesisConfig::default()
        },
    };

    if let Some(path) = &args.overrides {
        config.overrides.extend(read_overrides(path)?);
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(accounts) = args.accounts {
        config.num_accounts = accounts;
    }
    if let Some(codec) = &args.codec {
        config.codec = codec
            .parse::<CodecStrategy>()
            .map_err(|e| anyhow::anyhow!(e))
            .context("Invalid codec strategy")?;
    }

    Ok(config)
}

fn read_overrides(path: &Path) -> Result<BTreeMap<String, Value>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read overrides {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Overrides must be a JSON object: {}", path.display()))
}
