//! # mallat-dwt
//!
//! Discrete wavelet transforms with circular boundary handling, in one
//! and two dimensions, plus the pyramid machinery built on them.
//!
//! ## Analysis Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["FilterBankCatalog::new()?"] -->|".lookup(name)?"| B["FilterBank"]
//!     B -->|"dwt / dwt2"| C["coefficients"]
//!     B -->|"wavedec / wavedec2"| D["Pyramid1d / Pyramid2d"]
//!     D --> E["energy_per_subband"]
//!     D --> F["threshold_pyramid"]
//!     D -->|"waverec / waverec2"| G["signal / image"]
//! ```
//!
//! ## Supported Families
//!
//! | Family | Support | Kind |
//! |--------|---------|------|
//! | [`WaveletFamily::Haar`] | 2 | orthogonal |
//! | [`WaveletFamily::Db4`] | 8 | orthogonal |
//! | [`WaveletFamily::Db8`] | 16 | orthogonal |
//! | [`WaveletFamily::Sym4`] | 8 | orthogonal |
//! | [`WaveletFamily::Coif2`] | 12 | orthogonal |
//! | [`WaveletFamily::Bior2_2`] | 6 | biorthogonal, symmetric |
//! | [`WaveletFamily::Bior4_4`] | 10 | biorthogonal, symmetric |
//!
//! ## Quick Start
//!
//! ```ignore
//! use mallat_dwt::{FilterBankCatalog, wavedec, waverec};
//!
//! let catalog = FilterBankCatalog::new()?;
//! let bank = catalog.lookup("db4")?;
//!
//! let pyramid = wavedec(&signal, bank, 4);
//! let restored = waverec(&pyramid, bank)?;
//! ```

mod bank;
mod denoise;
mod energy;
mod error;
mod family;
mod matrix;
mod metrics;
mod pyramid;
mod transform;
mod transform2d;

pub use bank::{FilterBank, FilterBankCatalog, qmf_high};
pub use denoise::{
    ThresholdMode, estimate_noise_sigma, estimate_noise_sigma2, threshold_pyramid,
    threshold_pyramid2, threshold_value, universal_threshold,
};
pub use energy::{energy_by_level, energy_by_level2, energy_per_subband, energy_per_subband2};
pub use error::DwtError;
pub use family::{ALL_FAMILIES, WaveletFamily};
pub use matrix::Matrix;
pub use metrics::{mse, psnr, snr};
pub use pyramid::{
    Level1d, Level2d, Pyramid1d, Pyramid2d, wavedec, wavedec2, waverec, waverec2,
};
pub use transform::{dwt, idwt};
pub use transform2d::{Subbands, dwt2, idwt2};
