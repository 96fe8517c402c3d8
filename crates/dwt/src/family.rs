//! Wavelet family definitions.

use crate::error::DwtError;

/// Supported wavelet families for DWT decomposition.
///
/// Seven families are currently supported, spanning Haar, Daubechies
/// (db), Symlet (sym), Coiflet (coif), and the two CDF biorthogonal
/// banks used by JPEG 2000 (bior2.2 = 5/3, bior4.4 = 9/7).
///
/// # Example
///
/// ```ignore
/// use mallat_dwt::WaveletFamily;
///
/// let family = WaveletFamily::Db4;
/// assert_eq!(family.support_length(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WaveletFamily {
    /// Haar wavelet (length 2).
    Haar,
    /// Daubechies db4 wavelet (length 8).
    Db4,
    /// Daubechies db8 wavelet (length 16).
    Db8,
    /// Symlet sym4 wavelet (length 8).
    Sym4,
    /// Coiflet coif2 wavelet (length 12).
    Coif2,
    /// CDF 5/3 biorthogonal wavelet (length 6, zero padded).
    Bior2_2,
    /// CDF 9/7 biorthogonal wavelet (length 10, zero padded).
    Bior4_4,
}

/// All supported families, in catalog order.
pub const ALL_FAMILIES: [WaveletFamily; 7] = [
    WaveletFamily::Haar,
    WaveletFamily::Db4,
    WaveletFamily::Db8,
    WaveletFamily::Sym4,
    WaveletFamily::Coif2,
    WaveletFamily::Bior2_2,
    WaveletFamily::Bior4_4,
];

impl Default for WaveletFamily {
    /// Returns `WaveletFamily::Haar` as the default family.
    fn default() -> Self {
        Self::Haar
    }
}

impl WaveletFamily {
    /// Returns the canonical identifier for this family.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Haar => "haar",
            Self::Db4 => "db4",
            Self::Db8 => "db8",
            Self::Sym4 => "sym4",
            Self::Coif2 => "coif2",
            Self::Bior2_2 => "bior2.2",
            Self::Bior4_4 => "bior4.4",
        }
    }

    /// Returns the filter support length (number of taps, including
    /// zero padding for the biorthogonal banks).
    pub fn support_length(&self) -> usize {
        match self {
            Self::Haar => 2,
            Self::Db4 => 8,
            Self::Db8 => 16,
            Self::Sym4 => 8,
            Self::Coif2 => 12,
            Self::Bior2_2 => 6,
            Self::Bior4_4 => 10,
        }
    }

    /// Returns `true` for orthogonal families (analysis and synthesis
    /// banks coincide and the quadrature mirror relationship holds).
    pub fn is_orthogonal(&self) -> bool {
        !self.is_biorthogonal()
    }

    /// Returns `true` for biorthogonal families (distinct analysis and
    /// synthesis low-pass filters).
    pub fn is_biorthogonal(&self) -> bool {
        matches!(self, Self::Bior2_2 | Self::Bior4_4)
    }

    /// Returns `true` when the filters are exactly symmetric.
    ///
    /// Only the biorthogonal spline banks are symmetric; the
    /// orthogonal families in the catalog are asymmetric (sym4 and
    /// coif2 only approximately symmetric).
    pub fn is_symmetric(&self) -> bool {
        self.is_biorthogonal()
    }

    /// Parses a wavelet family from a case-insensitive identifier.
    ///
    /// # Supported Names
    ///
    /// | Input | Family |
    /// |-------|--------|
    /// | `"haar"` | [`WaveletFamily::Haar`] |
    /// | `"db4"` | [`WaveletFamily::Db4`] |
    /// | `"db8"` | [`WaveletFamily::Db8`] |
    /// | `"sym4"` | [`WaveletFamily::Sym4`] |
    /// | `"coif2"` | [`WaveletFamily::Coif2`] |
    /// | `"bior2.2"` | [`WaveletFamily::Bior2_2`] |
    /// | `"bior4.4"` | [`WaveletFamily::Bior4_4`] |
    ///
    /// # Errors
    ///
    /// Returns [`DwtError::UnknownFamily`] if the name is not
    /// recognized. Unknown identifiers are a reportable error, never a
    /// silent fallback.
    pub fn from_name(name: &str) -> Result<Self, DwtError> {
        match name.to_lowercase().as_str() {
            "haar" => Ok(Self::Haar),
            "db4" => Ok(Self::Db4),
            "db8" => Ok(Self::Db8),
            "sym4" => Ok(Self::Sym4),
            "coif2" => Ok(Self::Coif2),
            "bior2.2" => Ok(Self::Bior2_2),
            "bior4.4" => Ok(Self::Bior4_4),
            _ => Err(DwtError::UnknownFamily(name.to_string())),
        }
    }
}
