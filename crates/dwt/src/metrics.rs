//! Reconstruction quality metrics.

/// Mean squared error between two equally long slices.
///
/// Returns `0.0` for empty inputs.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn mse(reference: &[f64], candidate: &[f64]) -> f64 {
    assert_eq!(
        reference.len(),
        candidate.len(),
        "mse requires equally long inputs"
    );
    if reference.is_empty() {
        return 0.0;
    }
    let sum: f64 = reference
        .iter()
        .zip(candidate)
        .map(|(a, b)| (a - b) * (a - b))
        .sum();
    sum / reference.len() as f64
}

/// Peak signal-to-noise ratio in decibels, relative to `max_val`
/// (e.g. `255.0` for 8-bit imagery, `1.0` for unit-range data).
///
/// Returns `f64::INFINITY` when the inputs are identical.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn psnr(reference: &[f64], candidate: &[f64], max_val: f64) -> f64 {
    let e = mse(reference, candidate);
    if e == 0.0 {
        return f64::INFINITY;
    }
    10.0 * (max_val * max_val / e).log10()
}

/// Signal-to-noise ratio in decibels: reference energy over error
/// energy.
///
/// Returns `f64::INFINITY` when the inputs are identical.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn snr(reference: &[f64], candidate: &[f64]) -> f64 {
    assert_eq!(
        reference.len(),
        candidate.len(),
        "snr requires equally long inputs"
    );
    let signal: f64 = reference.iter().map(|x| x * x).sum();
    let noise: f64 = reference
        .iter()
        .zip(candidate)
        .map(|(a, b)| (a - b) * (a - b))
        .sum();
    if noise == 0.0 {
        return f64::INFINITY;
    }
    10.0 * (signal / noise).log10()
}
