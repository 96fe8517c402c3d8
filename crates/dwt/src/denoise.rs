//! Coefficient thresholding for wavelet denoising.
//!
//! The standard recipe: decompose, estimate the noise level from the
//! finest detail subband, shrink detail coefficients toward zero, and
//! reconstruct. Approximation coefficients are never touched.

use crate::matrix::Matrix;
use crate::pyramid::{Level1d, Level2d, Pyramid1d, Pyramid2d};

/// Scale factor turning the median absolute deviation of Gaussian
/// samples into a standard deviation estimate.
const MAD_TO_SIGMA: f64 = 0.6745;

/// Shrinkage rule applied to detail coefficients.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ThresholdMode {
    /// Zero below the threshold, shrink the rest toward zero by the
    /// threshold amount. Continuous, smoother reconstructions.
    Soft,
    /// Zero below the threshold, keep the rest unchanged.
    Hard,
}

/// Applies the shrinkage rule to one coefficient.
pub fn threshold_value(x: f64, threshold: f64, mode: ThresholdMode) -> f64 {
    if x.abs() <= threshold {
        return 0.0;
    }
    match mode {
        ThresholdMode::Soft => x.signum() * (x.abs() - threshold),
        ThresholdMode::Hard => x,
    }
}

fn threshold_slice(values: &[f64], threshold: f64, mode: ThresholdMode) -> Vec<f64> {
    values
        .iter()
        .map(|&x| threshold_value(x, threshold, mode))
        .collect()
}

/// The universal (VisuShrink) threshold `sigma * sqrt(2 ln n)` for a
/// signal of `n` samples with noise level `sigma`.
pub fn universal_threshold(sigma: f64, n: usize) -> f64 {
    if n < 2 {
        return 0.0;
    }
    sigma * (2.0 * (n as f64).ln()).sqrt()
}

fn median(mut values: Vec<f64>) -> f64 {
    let n = values.len();
    values.sort_by(|a, b| a.total_cmp(b));
    if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    }
}

/// Robust noise estimate from the finest 1D detail subband:
/// `median(|detail|) / 0.6745`. Returns `None` for an empty pyramid.
pub fn estimate_noise_sigma(pyramid: &Pyramid1d) -> Option<f64> {
    let finest = pyramid.level(0)?;
    if finest.detail().is_empty() {
        return None;
    }
    let abs: Vec<f64> = finest.detail().iter().map(|x| x.abs()).collect();
    Some(median(abs) / MAD_TO_SIGMA)
}

/// Robust noise estimate from the finest diagonal (`HH`) subband,
/// where image structure contributes least.
pub fn estimate_noise_sigma2(pyramid: &Pyramid2d) -> Option<f64> {
    let finest = pyramid.level(0)?;
    if finest.hh().is_empty() {
        return None;
    }
    let abs: Vec<f64> = finest.hh().as_slice().iter().map(|x| x.abs()).collect();
    Some(median(abs) / MAD_TO_SIGMA)
}

/// Returns a pyramid with every detail subband thresholded and every
/// approximation kept verbatim.
pub fn threshold_pyramid(
    pyramid: &Pyramid1d,
    threshold: f64,
    mode: ThresholdMode,
) -> Pyramid1d {
    let levels = pyramid
        .levels()
        .map(|l| {
            Level1d::new(
                l.level(),
                l.approx().to_vec(),
                threshold_slice(l.detail(), threshold, mode),
            )
        })
        .collect();
    Pyramid1d::from_levels(levels)
}

/// 2D counterpart of [`threshold_pyramid`]: `LH`, `HL`, and `HH` are
/// thresholded at every level, `LL` is kept verbatim.
pub fn threshold_pyramid2(
    pyramid: &Pyramid2d,
    threshold: f64,
    mode: ThresholdMode,
) -> Pyramid2d {
    let shrink = |m: &Matrix| {
        let mut out = m.clone();
        for v in out.as_mut_slice() {
            *v = threshold_value(*v, threshold, mode);
        }
        out
    };
    let levels = pyramid
        .levels()
        .map(|l| {
            Level2d::new(
                l.level(),
                l.ll().clone(),
                shrink(l.lh()),
                shrink(l.hl()),
                shrink(l.hh()),
            )
        })
        .collect();
    Pyramid2d::from_levels(levels)
}
