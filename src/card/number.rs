//! Card number synthesis

use tracing::trace;
use crate::error::{GeneratorError, Result};
use crate::random::{self, RandomSource};
use crate::{PREFIX_MAX_LENGTH, PREFIX_MIN_LENGTH};
use super::brand::{classify, LengthRule};
use super::luhn::luhn_check_digit;

/// Validate an issuer identification prefix as typed by a user.
///
/// Surrounding whitespace is ignored. Returns the trimmed prefix.
pub fn validate_prefix(input: &str) -> Result<&str> {
    let prefix = input.trim();
    if prefix.is_empty() {
        return Err(GeneratorError::InvalidInput("Please enter IIN".to_string()));
    }
    if !prefix.chars().all(|c| c.is_ascii_digit()) {
        return Err(GeneratorError::InvalidInput(
            "IIN must contain only digits".to_string(),
        ));
    }
    if !(PREFIX_MIN_LENGTH..=PREFIX_MAX_LENGTH).contains(&prefix.len()) {
        return Err(GeneratorError::InvalidInput(format!(
            "IIN must be between {} and {} digits",
            PREFIX_MIN_LENGTH, PREFIX_MAX_LENGTH
        )));
    }
    Ok(prefix)
}

/// Generate a Luhn-valid card number that starts with `prefix`.
///
/// The length is taken from the prefix's brand; when the brand allows several
/// lengths one is picked uniformly. Returns the number and its length.
pub fn generate_card_number<R: RandomSource + ?Sized>(
    rng: &mut R,
    prefix: &str,
) -> Result<(String, usize)> {
    let prefix = validate_prefix(prefix)?;
    let profile = classify(prefix);

    let length = match profile.lengths {
        LengthRule::Fixed(len) => len,
        LengthRule::OneOf(lens) => *random::choose(rng, lens).ok_or_else(|| {
            GeneratorError::generation("LengthError", format!("{} has no allowed lengths", profile.brand))
        })?,
    };

    let remaining = length.checked_sub(prefix.len() + 1).ok_or_else(|| {
        GeneratorError::generation(
            "LengthError",
            format!("prefix of {} digits does not fit a {}-digit number", prefix.len(), length),
        )
    })?;

    let mut number = String::with_capacity(length);
    number.push_str(prefix);
    number.push_str(&random::random_digits(rng, remaining));

    let check = luhn_check_digit(&number).ok_or_else(|| {
        GeneratorError::generation("ChecksumError", "partial number contains non-digits")
    })?;
    number.push(char::from(b'0' + check));

    trace!(brand = %profile.brand, length, "synthesized card number");
    Ok((number, length))
}
