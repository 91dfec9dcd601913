mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use args::GenerateArgs;
use commands::{generate, slots, validate};

/// Poolgen: randomized genesis for a batch-auction liquidity module
///
/// Turns one seed into a complete, consistent genesis state for simulation
/// runs. Any parameter can be pinned through overrides to replay a scenario.
#[derive(Parser, Debug)]
#[command(name = "poolgen")]
#[command(author, version, about = "Generates randomized liquidity module genesis states", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a genesis state from a seed.
    ///
    /// Resolves every slot (override or generator), prints the chosen values
    /// and writes the encoded payload.
    Generate(Box<GenerateArgs>),

    /// List the slot names accepted as overrides.
    Slots,

    /// Check a genesis payload against the module's structural invariants.
    Validate {
        /// Genesis payload path
        #[arg(short, long, default_value = defaults::OUTPUT_GENESIS)]
        input: PathBuf,

        /// Payload encoding (json, bincode)
        #[arg(long, default_value = defaults::CODEC)]
        codec: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(defaults::LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => {
            generate::generate_genesis(&args)?;
        }
        Commands::Slots => {
            slots::list_slots();
        }
        Commands::Validate { input, codec } => {
            validate::validate_genesis(&input, &codec)?;
        }
    }

    Ok(())
}
