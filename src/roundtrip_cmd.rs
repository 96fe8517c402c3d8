//! Roundtrip command: decompose, optionally denoise, reconstruct,
//! and report fidelity.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use mallat_dwt::{
    FilterBankCatalog, ThresholdMode, estimate_noise_sigma, mse, snr, threshold_pyramid,
    universal_threshold, wavedec, waverec,
};

use crate::cli::RoundtripArgs;
use crate::synth;

/// Run the round-trip pipeline and print the fidelity report.
pub fn run(args: RoundtripArgs) -> Result<()> {
    let _cmd = info_span!("roundtrip").entered();

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
        bail!("no samples to process");
    }

    let pyramid = wavedec(&signal, bank, args.levels);
    if pyramid.is_empty() {
        bail!(
            "signal too short for {}: {} samples, need at least {}",
            bank.name(),
            signal.len(),
            bank.len().max(2)
        );
    }

    let pyramid = match threshold_from_args(&args, &pyramid, signal.len())? {
        Some(t) => {
            info!(threshold = t, "soft-thresholding detail coefficients");
            threshold_pyramid(&pyramid, t, ThresholdMode::Soft)
        }
        None => pyramid,
    };

    let restored = waverec(&pyramid, bank)?;
    // Floor-halved levels can shorten an odd-length input.
    let n = restored.len().min(signal.len());

    let max_dev = signal[..n]
        .iter()
        .zip(&restored[..n])
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);
    println!(
        "{}: {} levels, {} -> {} samples",
        bank.name(),
        pyramid.n_levels(),
        signal.len(),
        restored.len()
    );
    println!("max deviation: {max_dev:.3e}");
    println!("mse:           {:.3e}", mse(&signal[..n], &restored[..n]));
    println!("snr:           {:.2} dB", snr(&signal[..n], &restored[..n]));
    Ok(())
}

/// Resolves the `--threshold` argument: absent or `0` means no
/// shrinkage, `auto` estimates the universal threshold, anything else
/// must parse as a non-negative number.
fn threshold_from_args(
    args: &RoundtripArgs,
    pyramid: &mallat_dwt::Pyramid1d,
    n: usize,
) -> Result<Option<f64>> {
    let Some(raw) = args.threshold.as_deref() else {
        return Ok(None);
    };
    if raw.eq_ignore_ascii_case("auto") {
        let sigma = estimate_noise_sigma(pyramid)
            .context("cannot estimate noise from an empty decomposition")?;
        return Ok(Some(universal_threshold(sigma, n)));
    }
    let value: f64 = raw
        .parse()
        .with_context(|| format!("invalid threshold: {raw:?} (expected a number or 'auto')"))?;
    if value < 0.0 {
        bail!("threshold must be non-negative, got {value}");
    }
    Ok(if value == 0.0 { None } else { Some(value) })
}
