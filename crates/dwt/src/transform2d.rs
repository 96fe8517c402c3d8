//! Single-level separable 2D analysis and synthesis operators.

use crate::bank::FilterBank;
use crate::error::DwtError;
use crate::matrix::Matrix;
use crate::transform::{dwt, idwt};

/// The four subbands produced by one 2D decomposition step.
///
/// Each subband has half the row and half the column extent of the
/// input (floor division per axis). `LL` is the approximation, `LH`
/// the column-detail of the row-lowpass, `HL` the column-approximation
/// of the row-highpass, and `HH` the diagonal detail.
#[derive(Clone, Debug)]
pub struct Subbands {
    ll: Matrix,
    lh: Matrix,
    hl: Matrix,
    hh: Matrix,
}

impl Subbands {
    /// Assembles subbands from four equally shaped matrices.
    ///
    /// # Errors
    ///
    /// Returns [`DwtError::ShapeMismatch`] when the shapes disagree.
    pub fn new(ll: Matrix, lh: Matrix, hl: Matrix, hh: Matrix) -> Result<Self, DwtError> {
        let shape = ll.shape();
        if lh.shape() != shape || hl.shape() != shape || hh.shape() != shape {
            return Err(DwtError::ShapeMismatch {
                context: format!(
                    "subband shapes differ: LL {:?}, LH {:?}, HL {:?}, HH {:?}",
                    ll.shape(),
                    lh.shape(),
                    hl.shape(),
                    hh.shape()
                ),
            });
        }
        Ok(Self { ll, lh, hl, hh })
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

    /// Returns the common subband shape `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.ll.shape()
    }

    /// Consumes the subbands, returning `(ll, lh, hl, hh)`.
    pub fn into_parts(self) -> (Matrix, Matrix, Matrix, Matrix) {
        (self.ll, self.lh, self.hl, self.hh)
    }
}

/// Single-level separable 2D decomposition.
///
/// Applies [`dwt`] along every row to obtain half-width low (`L`) and
/// high (`H`) matrices, then along every column of `L` to obtain
/// `LL`/`LH` and of `H` to obtain `HL`/`HH`. By linearity of the
/// filters the rows-then-columns order is interchangeable with
/// columns-then-rows; the choice here is a convention, not a
/// dependency.
///
/// # Errors
///
/// Returns [`DwtError::InputTooShort`] when either extent is below
/// the filter length.
pub fn dwt2(image: &Matrix, bank: &FilterBank) -> Result<Subbands, DwtError> {
    let (rows, cols) = image.shape();
    let half_cols = cols / 2;
    let half_rows = rows / 2;

    // Row pass.
    let mut row_low = Matrix::zeros(rows, half_cols);
    let mut row_high = Matrix::zeros(rows, half_cols);
    for r in 0..rows {
        let (low, high) = dwt(image.row(r), bank)?;
        row_low.set_row(r, &low);
        row_high.set_row(r, &high);
    }

    // Column pass.
    let mut ll = Matrix::zeros(half_rows, half_cols);
    let mut lh = Matrix::zeros(half_rows, half_cols);
    let mut hl = Matrix::zeros(half_rows, half_cols);
    let mut hh = Matrix::zeros(half_rows, half_cols);
    for c in 0..half_cols {
        let (low, high) = dwt(&row_low.column(c), bank)?;
        ll.set_column(c, &low);
        lh.set_column(c, &high);
        let (low, high) = dwt(&row_high.column(c), bank)?;
        hl.set_column(c, &low);
        hh.set_column(c, &high);
    }

    Subbands::new(ll, lh, hl, hh)
}

/// Single-level separable 2D reconstruction, the mirror of [`dwt2`]:
/// columns first (`LL`+`LH` -> `L`, `HL`+`HH` -> `H`), then rows
/// (`L`+`H` -> image). The output has twice the row and column extent
/// of the subbands.
///
/// # Errors
///
/// Returns [`DwtError::ShapeMismatch`] when the four subbands do not
/// share one shape.
pub fn idwt2(
    ll: &Matrix,
    lh: &Matrix,
    hl: &Matrix,
    hh: &Matrix,
    bank: &FilterBank,
) -> Result<Matrix, DwtError> {
    let shape = ll.shape();
    if lh.shape() != shape || hl.shape() != shape || hh.shape() != shape {
        return Err(DwtError::ShapeMismatch {
            context: format!(
                "subband shapes differ: LL {:?}, LH {:?}, HL {:?}, HH {:?}",
                ll.shape(),
                lh.shape(),
                hl.shape(),
                hh.shape()
            ),
        });
    }
    let (sub_rows, sub_cols) = shape;

    // Column pass.
    let mut low = Matrix::zeros(2 * sub_rows, sub_cols);
    let mut high = Matrix::zeros(2 * sub_rows, sub_cols);
    for c in 0..sub_cols {
        let column = idwt(&ll.column(c), &lh.column(c), bank)?;
        low.set_column(c, &column);
        let column = idwt(&hl.column(c), &hh.column(c), bank)?;
        high.set_column(c, &column);
    }

    // Row pass.
    let mut out = Matrix::zeros(2 * sub_rows, 2 * sub_cols);
    for r in 0..2 * sub_rows {
        let row = idwt(low.row(r), high.row(r), bank)?;
        out.set_row(r, &row);
    }
    Ok(out)
}
