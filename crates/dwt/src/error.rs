//! Error types for the mallat-dwt crate.

/// Error type for all fallible operations in the mallat-dwt crate.
///
/// Covers catalog lookups, filter-bank validation, and coefficient
/// shape problems that may occur during analysis or synthesis.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DwtError {
    /// Returned when a wavelet family identifier is not in the catalog.
    #[error("unknown wavelet family: {0}")]
    UnknownFamily(String),

    /// Returned when a filter bank fails validation at construction.
    #[error("invalid filter bank {name}: {reason}")]
    InvalidFilterBank {
        /// Family identifier of the offending bank.
        name: String,
        /// Human-readable description of the violated constraint.
        reason: String,
    },

    /// Returned when decomposition is asked for on input shorter than
    /// the filter support.
    #[error("input too short: got {len} samples, need at least {min}")]
    InputTooShort {
        /// Number of samples provided.
        len: usize,
        /// Minimum number of samples required (the filter length).
        min: usize,
    },

    /// Returned when reconstruction is given coefficients whose shapes
    /// are inconsistent with each other or with the declared level.
    #[error("shape mismatch: {context}")]
    ShapeMismatch {
        /// Description of the inconsistent shapes.
        context: String,
    },
}
