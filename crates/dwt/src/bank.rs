//! Filter banks and the validated filter-bank catalog.

use crate::error::DwtError;
use crate::family::{ALL_FAMILIES, WaveletFamily};

/// Tolerance for the quadrature mirror relationship check.
const QMF_TOLERANCE: f64 = 1e-9;

/// Haar scaling filter.
const HAAR_LOW: [f64; 2] = [std::f64::consts::FRAC_1_SQRT_2, std::f64::consts::FRAC_1_SQRT_2];

/// Daubechies db4 scaling filter (8 taps).
const DB4_LOW: [f64; 8] = [
    0.230_377_813_308_855_23,
    0.714_846_570_552_541_5,
    0.630_880_767_929_590_4,
    -0.027_983_769_416_983_85,
    -0.187_034_811_718_881_14,
    0.030_841_381_835_986_965,
    0.032_883_011_666_982_945,
    -0.010_597_401_784_997_278,
];

/// Daubechies db8 scaling filter (16 taps).
const DB8_LOW: [f64; 16] = [
    0.054_415_842_243_081_61,
    0.312_871_590_914_465_9,
    0.675_630_736_298_012_8,
    0.585_354_683_654_869_1,
    -0.015_829_105_256_023_893,
    -0.284_015_542_962_428_1,
    0.000_472_484_573_997_972_54,
    0.128_747_426_620_186,
    -0.017_369_301_002_022_108,
    -0.044_088_253_931_064_72,
    0.013_981_027_917_015_516,
    0.008_746_094_047_015_655,
    -0.004_870_352_993_010_66,
    -0.000_391_740_372_995_977_1,
    0.000_675_449_405_998_556_8,
    -0.000_117_476_784_002_281_92,
];

/// Symlet sym4 scaling filter (8 taps).
const SYM4_LOW: [f64; 8] = [
    -0.075_765_714_789_273_33,
    -0.029_635_527_645_998_51,
    0.497_618_667_632_015_45,
    0.803_738_751_805_916_1,
    0.297_857_795_605_277_36,
    -0.099_219_543_576_847_22,
    -0.012_603_967_262_037_833,
    0.032_223_100_604_042_7,
];

/// Coiflet coif2 scaling filter (12 taps).
const COIF2_LOW: [f64; 12] = [
    -0.000_720_549_445_364_512_2,
    -0.001_823_208_870_702_993_2,
    0.005_611_434_819_394_5,
    0.023_680_171_946_334_084,
    -0.059_434_418_646_456_9,
    -0.076_488_599_078_306_4,
    0.417_005_184_421_692_54,
    0.812_723_635_445_542_3,
    0.386_110_066_821_162_2,
    -0.067_372_554_721_963_02,
    -0.041_464_936_781_759_15,
    0.016_387_336_463_522_112,
];

/// CDF 5/3 analysis low-pass filter, centered on tap 2 (6 taps).
const BIOR2_2_ANALYSIS_LOW: [f64; 6] = [
    -0.176_776_695_296_636_89,
    0.353_553_390_593_273_79,
    1.060_660_171_779_821_4,
    0.353_553_390_593_273_79,
    -0.176_776_695_296_636_89,
    0.0,
];

/// CDF 5/3 synthesis low-pass filter, centered on tap 2 (6 taps).
const BIOR2_2_SYNTHESIS_LOW: [f64; 6] = [
    0.0,
    0.353_553_390_593_273_79,
    0.707_106_781_186_547_57,
    0.353_553_390_593_273_79,
    0.0,
    0.0,
];

/// CDF 9/7 analysis low-pass filter, centered on tap 4 (10 taps).
const BIOR4_4_ANALYSIS_LOW: [f64; 10] = [
    0.037_828_455_506_995_35,
    -0.023_849_465_019_379_86,
    -0.110_624_404_418_423_42,
    0.377_402_855_612_653_8,
    0.852_698_679_009_403_44,
    0.377_402_855_612_653_8,
    -0.110_624_404_418_423_42,
    -0.023_849_465_019_379_86,
    0.037_828_455_506_995_35,
    0.0,
];

/// CDF 9/7 synthesis low-pass filter, centered on tap 4 (10 taps).
const BIOR4_4_SYNTHESIS_LOW: [f64; 10] = [
    0.0,
    -0.064_538_882_628_938_56,
    -0.040_689_417_609_558_67,
    0.418_092_273_222_212_21,
    0.788_485_616_405_664_39,
    0.418_092_273_222_212_21,
    -0.040_689_417_609_558_67,
    -0.064_538_882_628_938_56,
    0.0,
    0.0,
];

/// Derives a high-pass filter from a low-pass filter via the
/// alternating flip `high[n] = (-1)^n * low[L-1-n]`.
pub fn qmf_high(low: &[f64]) -> Vec<f64> {
    let l = low.len();
    (0..l)
        .map(|n| {
            let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
            sign * low[l - 1 - n]
        })
        .collect()
}

/// An immutable quadrature-mirror filter bank for one wavelet family.
///
/// Holds the four filter sequences used by analysis and synthesis.
/// For orthogonal families the synthesis filters equal the analysis
/// filters; for biorthogonal families the two low-pass filters are
/// distinct and the high-pass filters are derived by alternating flip
/// of the *opposite* low-pass filter, which is what makes the pair a
/// perfect-reconstruction bank.
///
/// Constructed once from literal coefficient tables and never mutated.
#[derive(Clone, Debug)]
pub struct FilterBank {
    family: WaveletFamily,
    analysis_low: Vec<f64>,
    analysis_high: Vec<f64>,
    synthesis_low: Vec<f64>,
    synthesis_high: Vec<f64>,
}

impl FilterBank {
    /// Creates a filter bank from the four explicit filter sequences.
    ///
    /// # Errors
    ///
    /// Returns [`DwtError::InvalidFilterBank`] when the sequences do
    /// not share one even length of at least 2, or when an orthogonal
    /// family violates the quadrature mirror relationship
    /// `analysis_high[n] == (-1)^n * analysis_low[L-1-n]` beyond 1e-9.
    pub fn new(
        family: WaveletFamily,
        analysis_low: Vec<f64>,
        analysis_high: Vec<f64>,
        synthesis_low: Vec<f64>,
        synthesis_high: Vec<f64>,
    ) -> Result<Self, DwtError> {
        let bank = Self {
            family,
            analysis_low,
            analysis_high,
            synthesis_low,
            synthesis_high,
        };
        bank.validate()?;
        Ok(bank)
    }

    /// Builds the canonical filter bank for a family from its
    /// coefficient tables.
    pub fn for_family(family: WaveletFamily) -> Result<Self, DwtError> {
        match family {
            WaveletFamily::Haar => Self::orthogonal_bank(family, &HAAR_LOW),
            WaveletFamily::Db4 => Self::orthogonal_bank(family, &DB4_LOW),
            WaveletFamily::Db8 => Self::orthogonal_bank(family, &DB8_LOW),
            WaveletFamily::Sym4 => Self::orthogonal_bank(family, &SYM4_LOW),
            WaveletFamily::Coif2 => Self::orthogonal_bank(family, &COIF2_LOW),
            WaveletFamily::Bior2_2 => {
                Self::biorthogonal_bank(family, &BIOR2_2_ANALYSIS_LOW, &BIOR2_2_SYNTHESIS_LOW)
            }
            WaveletFamily::Bior4_4 => {
                Self::biorthogonal_bank(family, &BIOR4_4_ANALYSIS_LOW, &BIOR4_4_SYNTHESIS_LOW)
            }
        }
    }

    /// Orthogonal bank: synthesis filters equal analysis filters.
    fn orthogonal_bank(family: WaveletFamily, scaling: &[f64]) -> Result<Self, DwtError> {
        let low = scaling.to_vec();
        let high = qmf_high(scaling);
        Self::new(family, low.clone(), high.clone(), low, high)
    }

    /// Biorthogonal bank: each high-pass filter is the alternating
    /// flip of the opposite side's low-pass filter.
    fn biorthogonal_bank(
        family: WaveletFamily,
        analysis_low: &[f64],
        synthesis_low: &[f64],
    ) -> Result<Self, DwtError> {
        let analysis_high = qmf_high(synthesis_low);
        let synthesis_high = qmf_high(analysis_low);
        Self::new(
            family,
            analysis_low.to_vec(),
            analysis_high,
            synthesis_low.to_vec(),
            synthesis_high,
        )
    }

    fn invalid(&self, reason: impl Into<String>) -> DwtError {
        DwtError::InvalidFilterBank {
            name: self.family.name().to_string(),
            reason: reason.into(),
        }
    }

    fn validate(&self) -> Result<(), DwtError> {
        let l = self.analysis_low.len();
        if self.analysis_high.len() != l
            || self.synthesis_low.len() != l
            || self.synthesis_high.len() != l
        {
            return Err(self.invalid("filter lengths differ"));
        }
        if l < 2 {
            return Err(self.invalid(format!("filter length {l} is below the minimum of 2")));
        }
        if l % 2 != 0 {
            return Err(self.invalid(format!("filter length {l} is odd")));
        }
        if self.family.is_orthogonal() {
            for n in 0..l {
                let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
                let expected = sign * self.analysis_low[l - 1 - n];
                if (self.analysis_high[n] - expected).abs() > QMF_TOLERANCE {
                    return Err(self.invalid(format!(
                        "quadrature mirror relationship violated at tap {n}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Returns the family this bank belongs to.
    pub fn family(&self) -> WaveletFamily {
        self.family
    }

    /// Returns the family identifier (e.g. `"db4"`).
    pub fn name(&self) -> &'static str {
        self.family.name()
    }

    /// Returns the common filter length `L`.
    pub fn len(&self) -> usize {
        self.analysis_low.len()
    }

    /// Returns `true` if the bank holds no taps. A validated bank is
    /// never empty (minimum length is 2).
    pub fn is_empty(&self) -> bool {
        self.analysis_low.is_empty()
    }

    /// Returns the analysis (decomposition) low-pass filter.
    pub fn analysis_low(&self) -> &[f64] {
        &self.analysis_low
    }

    /// Returns the analysis (decomposition) high-pass filter.
    pub fn analysis_high(&self) -> &[f64] {
        &self.analysis_high
    }

    /// Returns the synthesis (reconstruction) low-pass filter.
    pub fn synthesis_low(&self) -> &[f64] {
        &self.synthesis_low
    }

    /// Returns the synthesis (reconstruction) high-pass filter.
    pub fn synthesis_high(&self) -> &[f64] {
        &self.synthesis_high
    }

    /// Returns `true` for orthogonal families.
    pub fn orthogonal(&self) -> bool {
        self.family.is_orthogonal()
    }

    /// Returns `true` for biorthogonal families.
    pub fn biorthogonal(&self) -> bool {
        self.family.is_biorthogonal()
    }
}

/// A fixed registry of validated filter banks, one per supported
/// family.
///
/// Built once at startup; lookup is pure and there is no mutable
/// cache. Construction failures indicate a broken coefficient table
/// and are intended to be fatal.
///
/// # Example
///
/// ```ignore
/// use mallat_dwt::FilterBankCatalog;
///
/// let catalog = FilterBankCatalog::new()?;
/// let bank = catalog.lookup("db4")?;
/// assert_eq!(bank.len(), 8);
/// ```
#[derive(Clone, Debug)]
pub struct FilterBankCatalog {
    // Indexed by discriminant, in ALL_FAMILIES order.
    banks: Vec<FilterBank>,
}

impl FilterBankCatalog {
    /// Builds the catalog, validating every entry.
    ///
    /// # Errors
    ///
    /// Returns [`DwtError::InvalidFilterBank`] if any coefficient
    /// table fails validation.
    pub fn new() -> Result<Self, DwtError> {
        let mut banks = Vec::with_capacity(ALL_FAMILIES.len());
        for family in ALL_FAMILIES {
            banks.push(FilterBank::for_family(family)?);
        }
        Ok(Self { banks })
    }

    /// Resolves a family identifier to its filter bank.
    ///
    /// # Errors
    ///
    /// Returns [`DwtError::UnknownFamily`] if the identifier is not
    /// recognized.
    pub fn lookup(&self, name: &str) -> Result<&FilterBank, DwtError> {
        let family = WaveletFamily::from_name(name)?;
        Ok(self.bank(family))
    }

    /// Returns the filter bank for a known family.
    pub fn bank(&self, family: WaveletFamily) -> &FilterBank {
        &self.banks[family as usize]
    }

    /// Iterates over all catalog entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &FilterBank> {
        self.banks.iter()
    }

    /// Returns the number of registered families.
    pub fn len(&self) -> usize {
        self.banks.len()
    }

    /// Returns `true` if the catalog is empty (never, once built).
    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }
}
