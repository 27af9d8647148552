//! Card verification values

use chrono::NaiveDateTime;
use crate::random::{self, RandomSource};
use crate::utils::hour_stamp;
use crate::CVV_SEED_RANGE;
use super::hash::sha256_hex;

/// Static CVV: `length` random digits
pub fn generate_static_cvv<R: RandomSource + ?Sized>(rng: &mut R, length: usize) -> String {
    random::random_digits(rng, length)
}

/// Dynamic CVV for `seed` during the hour containing `at`.
///
/// The value is the first `length` hex characters of SHA-256 over the seed
/// followed by the `YYYYMMDDHH` stamp, uppercased. It only changes when the
/// hour does. Display-only, carries no security.
pub fn generate_dynamic_cvv(seed: u32, length: usize, at: &NaiveDateTime) -> String {
    let input = format!("{}{}", seed, hour_stamp(at));
    let mut cvv = sha256_hex(&input);
    cvv.truncate(length);
    cvv.to_uppercase()
}

/// Draw a seed for [`generate_dynamic_cvv`]
pub fn generate_cvv_seed<R: RandomSource + ?Sized>(rng: &mut R) -> u32 {
    rng.next_in_range(*CVV_SEED_RANGE.start(), *CVV_SEED_RANGE.end())
}

/// Note shown next to a dynamic CVV
pub fn dynamic_cvv_note(seed: u32) -> String {
    format!("Dynamic (seed: {}, changes hourly)", seed)
}
