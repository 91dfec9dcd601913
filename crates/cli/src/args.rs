use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Random seed (default: configured seed, or a fresh random one)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of simulation accounts drawn before genesis
    #[arg(short = 'a', long)]
    pub accounts: Option<usize>,

    /// JSON file mapping slot names to override values
    ///
    /// Entries are merged over the overrides of `--config`.
    #[arg(long)]
    pub overrides: Option<PathBuf>,

    /// JSON run configuration (seed, num_accounts, codec, overrides)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Payload encoding (json, bincode)
    #[arg(long)]
    pub codec: Option<String>,

    /// Where to write the published genesis payload
    #[arg(short, long, default_value = crate::defaults::OUTPUT_GENESIS)]
    pub output: PathBuf,

    /// Write every resolved slot value to this JSON file
    ///
    /// The file can be passed back through `--overrides` to replay the run.
    #[arg(long)]
    pub record: Option<PathBuf>,
}
