//! Decompose command: pyramid decomposition with an energy report.

use anyhow::{Result, bail};
use tracing::{info, info_span};

use mallat_dwt::{FilterBankCatalog, energy_by_level, wavedec};

use crate::cli::DecomposeArgs;
use crate::synth;

/// Run the decomposition pipeline and print the energy breakdown.
pub fn run(args: DecomposeArgs) -> Result<()> {
    let _cmd = info_span!("decompose").entered();

    let catalog = FilterBankCatalog::new()?;
    let bank = catalog.lookup(&args.wavelet)?;

    let signal = match &args.input {
        Some(path) => {
            info!(path = %path.display(), "reading samples");
            synth::read_samples(path)?
        }
        None => synth::test_signal(args.length, args.noise, args.seed),
    };
    if signal.is_empty() {
        bail!("no samples to decompose");
    }
    info!(
        n = signal.len(),
        family = bank.name(),
        levels = args.levels,
        "decomposing"
    );

    let pyramid = wavedec(&signal, bank, args.levels);
    if pyramid.is_empty() {
        bail!(
            "signal too short for {}: {} samples, need at least {}",
            bank.name(),
            signal.len(),
            bank.len().max(2)
        );
    }
    if pyramid.n_levels() < args.levels {
        info!(
            achieved = pyramid.n_levels(),
            requested = args.levels,
            "decomposition stopped early"
        );
    }

    let energy = energy_by_level(&pyramid);
    let total: f64 = energy.values().sum();
    println!(
        "{} levels with {} ({} samples)",
        pyramid.n_levels(),
        bank.name(),
        signal.len()
    );
    println!("{:<10} {:>16} {:>8}", "subband", "energy", "share");
    for (name, value) in &energy {
        println!("{name:<10} {value:>16.4} {:>7.2}%", 100.0 * value / total);
    }
    Ok(())
}
