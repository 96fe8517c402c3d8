use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Mallat wavelet pyramid toolkit.
#[derive(Parser)]
#[command(
    name = "mallat",
    version,
    about = "Discrete wavelet pyramid decomposition toolkit"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// List the supported wavelet families.
    Families,
    /// Decompose a signal and report per-level energy.
    Decompose(DecomposeArgs),
    /// Decompose, reconstruct, and report round-trip fidelity.
    Roundtrip(RoundtripArgs),
}

/// Arguments for the `decompose` subcommand.
#[derive(clap::Args)]
pub struct DecomposeArgs {
    /// Wavelet family name (see `mallat families`).
    #[arg(short, long, default_value = "haar")]
    pub wavelet: String,

    /// Maximum number of decomposition levels.
    #[arg(short, long, default_value_t = 4)]
    pub levels: usize,

    /// Path to a text file with one sample per line. When omitted a
    /// synthetic test signal is used.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Length of the synthetic test signal.
    #[arg(short = 'n', long, default_value_t = 1024)]
    pub length: usize,

    /// Noise level added to the synthetic test signal.
    #[arg(long, default_value_t = 0.0)]
    pub noise: f64,

    /// Seed for the synthetic noise generator.
    #[arg(short, long, default_value_t = 42)]
    pub seed: u64,
}

/// Arguments for the `roundtrip` subcommand.
#[derive(clap::Args)]
pub struct RoundtripArgs {
    /// Wavelet family name (see `mallat families`).
    #[arg(short, long, default_value = "haar")]
    pub wavelet: String,

    /// Maximum number of decomposition levels.
    #[arg(short, long, default_value_t = 4)]
    pub levels: usize,

    /// Path to a text file with one sample per line. When omitted a
    /// synthetic test signal is used.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Length of the synthetic test signal.
    #[arg(short = 'n', long, default_value_t = 1024)]
    pub length: usize,

    /// Soft-shrinkage threshold applied to detail coefficients before
    /// reconstruction. Zero keeps the coefficients untouched; `auto`
    /// estimates the universal threshold from the finest details.
    #[arg(short, long)]
    pub threshold: Option<String>,

    /// Noise level added to the synthetic test signal.
    #[arg(long, default_value_t = 0.0)]
    pub noise: f64,

    /// Seed for the synthetic noise generator.
    #[arg(short, long, default_value_t = 42)]
    pub seed: u64,
}
