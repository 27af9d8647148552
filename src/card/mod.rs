//! Card numbers: brand classification, Luhn arithmetic and synthesis

mod brand;
mod luhn;
mod number;

pub use brand::{classify, BrandProfile, CardBrand, LengthRule};
pub use luhn::{luhn_check_digit, luhn_is_valid};
pub use number::{generate_card_number, validate_prefix};
