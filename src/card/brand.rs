//! Card brand classification by issuer identification prefix

use serde::{Deserialize, Serialize};

/// Card brand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardBrand {
    #[serde(rename = "Visa")]
    Visa,
    #[serde(rename = "Mastercard")]
    Mastercard,
    #[serde(rename = "American Express")]
    AmericanExpress,
    #[serde(rename = "Discover")]
    Discover,
    #[serde(rename = "UnionPay")]
    UnionPay,
    #[serde(rename = "Crypto/Stablecoin")]
    CryptoStablecoin,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl CardBrand {
    /// Display name of the brand
    pub fn name(&self) -> &'static str {
        match self {
            CardBrand::Visa => "Visa",
            CardBrand::Mastercard => "Mastercard",
            CardBrand::AmericanExpress => "American Express",
            CardBrand::Discover => "Discover",
            CardBrand::UnionPay => "UnionPay",
            CardBrand::CryptoStablecoin => "Crypto/Stablecoin",
            CardBrand::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for CardBrand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Allowed total lengths for a brand's card numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRule {
    /// Exactly one length
    Fixed(usize),
    /// Uniform choice among several lengths
    OneOf(&'static [usize]),
}

impl LengthRule {
    /// Every length the rule permits
    pub fn lengths(&self) -> &[usize] {
        match self {
            LengthRule::Fixed(len) => std::slice::from_ref(len),
            LengthRule::OneOf(lens) => *lens,
        }
    }

    /// Check whether `length` is permitted
    pub fn allows(&self, length: usize) -> bool {
        self.lengths().contains(&length)
    }
}

/// Brand plus the number and CVV shape that goes with it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandProfile {
    pub brand: CardBrand,
    pub lengths: LengthRule,
    pub cvv_length: usize,
}

const SIXTEEN_OR_NINETEEN: &[usize] = &[16, 19];

impl BrandProfile {
    const fn new(brand: CardBrand, lengths: LengthRule, cvv_length: usize) -> Self {
        Self { brand, lengths, cvv_length }
    }
}

/// Classify an issuer identification prefix.
///
/// Rules are tried in order and the first match wins. The broad `6` rule
/// comes before the UnionPay `62`/`81` rule, so `62…` prefixes are labeled
/// Discover; only `81…` reaches UnionPay. The order is kept as is.
pub fn classify(prefix: &str) -> BrandProfile {
    if prefix.starts_with('4') {
        BrandProfile::new(CardBrand::Visa, LengthRule::OneOf(SIXTEEN_OR_NINETEEN), 3)
    } else if prefix.starts_with('5') || prefix.starts_with('2') {
        BrandProfile::new(CardBrand::Mastercard, LengthRule::Fixed(16), 3)
    } else if prefix.starts_with("34") || prefix.starts_with("37") {
        BrandProfile::new(CardBrand::AmericanExpress, LengthRule::Fixed(15), 4)
    } else if prefix.starts_with('6') {
        BrandProfile::new(CardBrand::Discover, LengthRule::OneOf(SIXTEEN_OR_NINETEEN), 3)
    } else if prefix.starts_with("62") || prefix.starts_with("81") {
        BrandProfile::new(CardBrand::UnionPay, LengthRule::OneOf(SIXTEEN_OR_NINETEEN), 3)
    } else if prefix.starts_with('7') {
        BrandProfile::new(CardBrand::CryptoStablecoin, LengthRule::OneOf(SIXTEEN_OR_NINETEEN), 3)
    } else {
        BrandProfile::new(CardBrand::Unknown, LengthRule::Fixed(16), 3)
    }
}
