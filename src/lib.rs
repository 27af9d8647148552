//! # Test Card Generator
//!
//! Synthetic payment-card records for software testing.
//!
//! ## Features
//!
//! - Luhn-valid card numbers built from a 6-8 digit issuer prefix
//! - Brand, length and CVV length picked from the prefix
//! - Expiry dates, static or hour-based dynamic CVVs, cardholder names
//! - Optional payment tokens, 3-D Secure codes, biometric tokens and
//!   decentralized identifiers
//! - Plain-text and JSON output, saving to a file
//!
//! Nothing generated here is valid for real payments.
//!
//! ## Example
//!
//! ```
//! use testcardgen::{CardGenerator, FeatureFlags, GenerationRequest, format_cards};
//!
//! let mut generator = CardGenerator::seeded(42);
//! let request = GenerationRequest::new("411111", 3, FeatureFlags::default());
//! let cards = generator.generate(&request).unwrap();
//!
//! assert_eq!(cards.len(), 3);
//! assert!(cards[0].number.starts_with("411111"));
//! println!("{}", format_cards(&cards));
//! ```

use std::ops::RangeInclusive;

pub mod attributes;
pub mod batch;
pub mod card;
pub mod error;
pub mod output;
pub mod random;
pub mod utils;

// Re-export main types
pub use error::{GeneratorError, Result};
pub use batch::{CardGenerator, CardRecord, FeatureFlags, GenerationRequest};
pub use card::{classify, luhn_is_valid, BrandProfile, CardBrand, LengthRule};
pub use output::{format_cards, format_cards_json, save_text};
pub use random::RandomSource;

/// Minimum issuer prefix length
pub const PREFIX_MIN_LENGTH: usize = 6;

/// Maximum issuer prefix length
pub const PREFIX_MAX_LENGTH: usize = 8;

/// Largest batch a single request may ask for
pub const MAX_BATCH_SIZE: usize = 200;

/// Batch size when none is given
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Expiry years are counted from this year at the earliest
pub const BASE_EXPIRY_YEAR: i32 = 2026;

/// Width of the divider line between cards
pub const DIVIDER_WIDTH: usize = 60;

/// Character the divider line is drawn with
pub const DIVIDER_CHAR: char = '─';

/// Length of a 3-D Secure code
pub const THREE_DS_LENGTH: usize = 6;

/// Hex characters in a decentralized identifier
pub const DID_IDENTIFIER_LENGTH: usize = 40;

/// Random hex characters hashed into a biometric token
pub const BIOMETRIC_SEED_LENGTH: usize = 32;

/// Range dynamic CVV seeds are drawn from
pub const CVV_SEED_RANGE: RangeInclusive<u32> = 100_000..=999_999;

/// Range of payment token lengths
pub const TOKEN_LENGTH_RANGE: RangeInclusive<u32> = 16..=19;
