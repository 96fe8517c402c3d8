//! Multi-level pyramid decomposition and reconstruction.

use tracing::debug;

use crate::bank::FilterBank;
use crate::error::DwtError;
use crate::matrix::Matrix;
use crate::transform::{dwt, idwt};
use crate::transform2d::{dwt2, idwt2};

/// One 1D decomposition level: the approximation and detail produced
/// by a single analysis step. Level 1 is the finest.
#[derive(Clone, Debug)]
pub struct Level1d {
    level: usize,
    approx: Vec<f64>,
    detail: Vec<f64>,
}

impl Level1d {
    /// Creates a level record. Intended for advanced callers that
    /// rebuild pyramids (e.g. after coefficient thresholding).
    pub fn new(level: usize, approx: Vec<f64>, detail: Vec<f64>) -> Self {
        Self {
            level,
            approx,
            detail,
        }
    }

    /// Returns the 1-based level index (1 = finest).
    pub fn level(&self) -> usize {
        self.level
    }

    /// Returns the approximation coefficients.
    pub fn approx(&self) -> &[f64] {
        &self.approx
    }

    /// Returns the detail coefficients.
    pub fn detail(&self) -> &[f64] {
        &self.detail
    }
}

/// An ordered 1D decomposition, finest level first.
///
/// Each level's approximation fed the next level's analysis; only the
/// coarsest approximation plus every level's detail are needed to
/// reconstruct.
#[derive(Clone, Debug, Default)]
pub struct Pyramid1d {
    levels: Vec<Level1d>,
}

impl Pyramid1d {
    /// Assembles a pyramid from level records.
    pub fn from_levels(levels: Vec<Level1d>) -> Self {
        Self { levels }
    }

    /// Returns the number of levels achieved.
    pub fn n_levels(&self) -> usize {
        self.levels.len()
    }

    /// Returns `true` when no level could be produced.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Returns the level record at `index` (0-based, finest first).
    pub fn level(&self, index: usize) -> Option<&Level1d> {
        self.levels.get(index)
    }

    /// Returns the coarsest level, if any.
    pub fn coarsest(&self) -> Option<&Level1d> {
        self.levels.last()
    }

    /// Iterates over the levels, finest first.
    pub fn levels(&self) -> impl DoubleEndedIterator<Item = &Level1d> {
        self.levels.iter()
    }
}

/// One 2D decomposition level holding the four subbands. Level 1 is
/// the finest. The engine keeps `LL` at every level even though only
/// the coarsest one is needed for reconstruction.
#[derive(Clone, Debug)]
pub struct Level2d {
    level: usize,
    ll: Matrix,
    lh: Matrix,
    hl: Matrix,
    hh: Matrix,
}

impl Level2d {
    /// Creates a level record from four subbands.
    pub fn new(level: usize, ll: Matrix, lh: Matrix, hl: Matrix, hh: Matrix) -> Self {
        Self {
            level,
            ll,
            lh,
            hl,
            hh,
        }
    }

    /// Returns the 1-based level index (1 = finest).
    pub fn level(&self) -> usize {
        self.level
    }

    /// Returns the approximation subband.
    pub fn ll(&self) -> &Matrix {
        &self.ll
    }

    /// Returns the horizontal-detail subband.
    pub fn lh(&self) -> &Matrix {
        &self.lh
    }

    /// Returns the vertical-detail subband.
    pub fn hl(&self) -> &Matrix {
        &self.hl
    }

    /// Returns the diagonal-detail subband.
    pub fn hh(&self) -> &Matrix {
        &self.hh
    }

    /// Returns the common subband shape.
    pub fn shape(&self) -> (usize, usize) {
        self.ll.shape()
    }
}

/// An ordered 2D decomposition, finest level first.
#[derive(Clone, Debug, Default)]
pub struct Pyramid2d {
    levels: Vec<Level2d>,
}

impl Pyramid2d {
    /// Assembles a pyramid from level records.
    pub fn from_levels(levels: Vec<Level2d>) -> Self {
        Self { levels }
    }

    /// Returns the number of levels achieved.
    pub fn n_levels(&self) -> usize {
        self.levels.len()
    }

    /// Returns `true` when no level could be produced.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Returns the level record at `index` (0-based, finest first).
    pub fn level(&self, index: usize) -> Option<&Level2d> {
        self.levels.get(index)
    }

    /// Returns the coarsest level, if any.
    pub fn coarsest(&self) -> Option<&Level2d> {
        self.levels.last()
    }

    /// Iterates over the levels, finest first.
    pub fn levels(&self) -> impl DoubleEndedIterator<Item = &Level2d> {
        self.levels.iter()
    }
}

/// Multi-level 1D decomposition.
///
/// Repeatedly analyzes the running approximation, appending one level
/// record per step, until `max_levels` levels have been produced or
/// the approximation has become too short for another step (shorter
/// than 2 samples or than the filter). Stopping early is a valid,
/// silent outcome — never an error; callers check
/// [`Pyramid1d::n_levels`].
pub fn wavedec(signal: &[f64], bank: &FilterBank, max_levels: usize) -> Pyramid1d {
    let min_len = bank.len().max(2);
    let mut levels = Vec::new();
    let mut current = signal.to_vec();
    for level in 1..=max_levels {
        if current.len() < min_len {
            debug!(
                level,
                len = current.len(),
                family = bank.name(),
                "pyramid stopped early: approximation too short"
            );
            break;
        }
        let Ok((approx, detail)) = dwt(&current, bank) else {
            break;
        };
        current = approx.clone();
        levels.push(Level1d::new(level, approx, detail));
    }
    Pyramid1d::from_levels(levels)
}

/// Multi-level 1D reconstruction, the inverse of [`wavedec`].
///
/// Starts from the coarsest approximation and folds each level's
/// detail back in, coarsest to finest, until the original-extent
/// signal is restored. An empty pyramid yields an empty signal.
///
/// # Errors
///
/// Returns [`DwtError::ShapeMismatch`] when any level's stored
/// coefficient lengths are inconsistent with the running
/// approximation.
pub fn waverec(pyramid: &Pyramid1d, bank: &FilterBank) -> Result<Vec<f64>, DwtError> {
    let Some(coarsest) = pyramid.coarsest() else {
        return Ok(Vec::new());
    };
    let mut current = coarsest.approx().to_vec();
    for level in pyramid.levels().rev() {
        if level.approx().len() != current.len() || level.detail().len() != current.len() {
            return Err(DwtError::ShapeMismatch {
                context: format!(
                    "level {}: approx {} / detail {} vs running approximation {}",
                    level.level(),
                    level.approx().len(),
                    level.detail().len(),
                    current.len()
                ),
            });
        }
        current = idwt(&current, level.detail(), bank)?;
    }
    Ok(current)
}

/// Multi-level 2D decomposition.
///
/// The 2D counterpart of [`wavedec`]: analyzes the running `LL`
/// subband until `max_levels` is reached or either axis has become
/// too short for another step. Early termination is silent.
pub fn wavedec2(image: &Matrix, bank: &FilterBank, max_levels: usize) -> Pyramid2d {
    let min_extent = bank.len().max(2);
    let mut levels = Vec::new();
    let mut current = image.clone();
    for level in 1..=max_levels {
        if current.min_extent() < min_extent {
            debug!(
                level,
                rows = current.rows(),
                cols = current.cols(),
                family = bank.name(),
                "pyramid stopped early: approximation too small"
            );
            break;
        }
        let Ok(sub) = dwt2(&current, bank) else {
            break;
        };
        let (ll, lh, hl, hh) = sub.into_parts();
        current = ll.clone();
        levels.push(Level2d::new(level, ll, lh, hl, hh));
    }
    Pyramid2d::from_levels(levels)
}

/// Multi-level 2D reconstruction, the inverse of [`wavedec2`].
///
/// # Errors
///
/// Returns [`DwtError::ShapeMismatch`] when any level's subband
/// shapes are inconsistent with the running approximation.
pub fn waverec2(pyramid: &Pyramid2d, bank: &FilterBank) -> Result<Matrix, DwtError> {
    let Some(coarsest) = pyramid.coarsest() else {
        return Ok(Matrix::zeros(0, 0));
    };
    let mut current = coarsest.ll().clone();
    for level in pyramid.levels().rev() {
        if level.shape() != current.shape() {
            return Err(DwtError::ShapeMismatch {
                context: format!(
                    "level {}: subbands {:?} vs running approximation {:?}",
                    level.level(),
                    level.shape(),
                    current.shape()
                ),
            });
        }
        current = idwt2(&current, level.lh(), level.hl(), level.hh(), bank)?;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::FilterBankCatalog;

    fn catalog() -> FilterBankCatalog {
        FilterBankCatalog::new().unwrap()
    }

    #[test]
    fn early_termination_short_signal() {
        // floor(3/2) = 1 < 2, so only one level is possible.
        let catalog = catalog();
        let bank = catalog.lookup("haar").unwrap();
        let pyramid = wavedec(&[1.0, 2.0, 3.0], bank, 5);
        assert_eq!(pyramid.n_levels(), 1);
    }

    #[test]
    fn level_count_for_power_of_two() {
        // 8 -> 4 -> 2 -> 1: three levels with Haar.
        let catalog = catalog();
        let bank = catalog.lookup("haar").unwrap();
        let signal: Vec<f64> = (0..8).map(|i| i as f64).collect();
        let pyramid = wavedec(&signal, bank, 10);
        assert_eq!(pyramid.n_levels(), 3);
        assert_eq!(pyramid.level(0).unwrap().approx().len(), 4);
        assert_eq!(pyramid.level(1).unwrap().approx().len(), 2);
        assert_eq!(pyramid.level(2).unwrap().approx().len(), 1);
    }

    #[test]
    fn requested_levels_are_honored() {
        let catalog = catalog();
        let bank = catalog.lookup("haar").unwrap();
        let signal: Vec<f64> = (0..64).map(|i| i as f64).collect();
        let pyramid = wavedec(&signal, bank, 2);
        assert_eq!(pyramid.n_levels(), 2);
    }

    #[test]
    fn signal_shorter_than_filter_yields_empty_pyramid() {
        let catalog = catalog();
        let bank = catalog.lookup("db8").unwrap();
        let pyramid = wavedec(&[1.0; 8], bank, 3);
        assert!(pyramid.is_empty());
        let restored = waverec(&pyramid, bank).unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn level_indices_are_one_based() {
        let catalog = catalog();
        let bank = catalog.lookup("haar").unwrap();
        let signal: Vec<f64> = (0..16).map(|i| i as f64).collect();
        let pyramid = wavedec(&signal, bank, 3);
        let indices: Vec<usize> = pyramid.levels().map(|l| l.level()).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(pyramid.coarsest().unwrap().level(), 3);
    }

    #[test]
    fn multi_level_round_trip() {
        let catalog = catalog();
        let bank = catalog.lookup("db4").unwrap();
        let signal: Vec<f64> = (0..128).map(|i| ((i as f64) * 0.1).sin() * 5.0).collect();
        let pyramid = wavedec(&signal, bank, 3);
        assert_eq!(pyramid.n_levels(), 3);
        let restored = waverec(&pyramid, bank).unwrap();
        assert_eq!(restored.len(), 128);
        for (a, b) in signal.iter().zip(&restored) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn waverec_rejects_tampered_levels() {
        let catalog = catalog();
        let bank = catalog.lookup("haar").unwrap();
        let signal: Vec<f64> = (0..16).map(|i| i as f64).collect();
        let pyramid = wavedec(&signal, bank, 2);

        let mut levels: Vec<Level1d> = pyramid.levels().cloned().collect();
        let broken = Level1d::new(1, levels[0].approx().to_vec(), vec![0.0; 3]);
        levels[0] = broken;
        let err = waverec(&Pyramid1d::from_levels(levels), bank).unwrap_err();
        assert!(matches!(err, DwtError::ShapeMismatch { .. }));
    }

    #[test]
    fn wavedec2_rectangular_early_termination() {
        // 8x2: one Haar level halves to 4x1, then the short axis is
        // below 2 and decomposition stops.
        let catalog = catalog();
        let bank = catalog.lookup("haar").unwrap();
        let image = Matrix::from_vec(8, 2, (0..16).map(|i| i as f64).collect()).unwrap();
        let pyramid = wavedec2(&image, bank, 5);
        assert_eq!(pyramid.n_levels(), 1);
        assert_eq!(pyramid.level(0).unwrap().shape(), (4, 1));
    }

    #[test]
    fn wavedec2_level_shapes() {
        let catalog = catalog();
        let bank = catalog.lookup("haar").unwrap();
        let image = Matrix::zeros(16, 8);
        let pyramid = wavedec2(&image, bank, 10);
        assert_eq!(pyramid.n_levels(), 3); // 16x8 -> 8x4 -> 4x2 -> 2x1
        assert_eq!(pyramid.level(0).unwrap().shape(), (8, 4));
        assert_eq!(pyramid.level(1).unwrap().shape(), (4, 2));
        assert_eq!(pyramid.level(2).unwrap().shape(), (2, 1));
    }

    #[test]
    fn multi_level_round_trip_2d() {
        let catalog = catalog();
        let bank = catalog.lookup("haar").unwrap();
        let data: Vec<f64> = (0..256).map(|i| ((i * 7) % 13) as f64).collect();
        let image = Matrix::from_vec(16, 16, data).unwrap();
        let pyramid = wavedec2(&image, bank, 3);
        assert_eq!(pyramid.n_levels(), 3);
        let restored = waverec2(&pyramid, bank).unwrap();
        assert_eq!(restored.shape(), (16, 16));
        for (a, b) in image.as_slice().iter().zip(restored.as_slice()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn waverec2_rejects_tampered_levels() {
        let catalog = catalog();
        let bank = catalog.lookup("haar").unwrap();
        let image = Matrix::zeros(8, 8);
        let pyramid = wavedec2(&image, bank, 2);

        let mut levels: Vec<Level2d> = pyramid.levels().cloned().collect();
        let fine = &levels[0];
        let broken = Level2d::new(
            1,
            fine.ll().clone(),
            Matrix::zeros(3, 3),
            fine.hl().clone(),
            fine.hh().clone(),
        );
        levels[0] = broken;
        let err = waverec2(&Pyramid2d::from_levels(levels), bank).unwrap_err();
        assert!(matches!(err, DwtError::ShapeMismatch { .. }));
    }

    #[test]
    fn pyramids_are_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<Pyramid1d>();
        assert_impl::<Pyramid2d>();
    }
}
