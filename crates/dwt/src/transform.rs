//! Single-level 1D analysis and synthesis operators.

use crate::bank::FilterBank;
use crate::error::DwtError;

/// Single-level 1D wavelet decomposition.
///
/// Computes `approx[k] = sum_j signal[(2k+j) mod n] * analysis_low[j]`
/// and `detail[k]` likewise with the analysis high-pass filter, for
/// `k` in `0..floor(n/2)` and `j` in `0..L`. The boundary policy is
/// circular (modulo-n) wraparound, the same convention [`idwt`] uses,
/// which is what makes the multi-level round trip exact without
/// edge-dependent special cases.
///
/// The input is never mutated; both outputs are freshly allocated.
/// An odd trailing sample is folded in via the wraparound.
///
/// # Errors
///
/// Returns [`DwtError::InputTooShort`] when `signal.len()` is below
/// the filter length.
pub fn dwt(signal: &[f64], bank: &FilterBank) -> Result<(Vec<f64>, Vec<f64>), DwtError> {
    let n = signal.len();
    let l = bank.len();
    if n < l {
        return Err(DwtError::InputTooShort { len: n, min: l });
    }
    let low = bank.analysis_low();
    let high = bank.analysis_high();
    let half = n / 2;
    let mut approx = vec![0.0; half];
    let mut detail = vec![0.0; half];
    for k in 0..half {
        let mut a = 0.0;
        let mut d = 0.0;
        for j in 0..l {
            let x = signal[(2 * k + j) % n];
            a += x * low[j];
            d += x * high[j];
        }
        approx[k] = a;
        detail[k] = d;
    }
    Ok((approx, detail))
}

/// Single-level 1D wavelet reconstruction.
///
/// Upsamples both coefficient sequences by two (zero interleave),
/// circularly convolves them with the synthesis low/high filters, and
/// sums pointwise. The output length is `2 * approx.len()`. The
/// scatter loop below is that convolution: coefficient `k` contributes
/// `approx[k] * synthesis_low[j]` to output index `(2k+j) mod n`.
///
/// This is the algebraic inverse of [`dwt`] when `bank` satisfies the
/// perfect-reconstruction condition. No check is made that `bank`
/// matches the bank used for analysis; a mismatched bank silently
/// produces numerically wrong output (caller contract).
///
/// # Errors
///
/// Returns [`DwtError::ShapeMismatch`] when the coefficient sequences
/// differ in length.
pub fn idwt(approx: &[f64], detail: &[f64], bank: &FilterBank) -> Result<Vec<f64>, DwtError> {
    if approx.len() != detail.len() {
        return Err(DwtError::ShapeMismatch {
            context: format!(
                "approx has {} samples, detail has {}",
                approx.len(),
                detail.len()
            ),
        });
    }
    let n = 2 * approx.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    let low = bank.synthesis_low();
    let high = bank.synthesis_high();
    let mut out = vec![0.0; n];
    for k in 0..approx.len() {
        for j in 0..bank.len() {
            out[(2 * k + j) % n] += approx[k] * low[j] + detail[k] * high[j];
        }
    }
    Ok(out)
}
