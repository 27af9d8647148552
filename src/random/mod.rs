//! Injectable random source
//!
//! Every generator takes its randomness through [`RandomSource`] instead of
//! reaching for a thread-local RNG, so a batch can be replayed exactly by
//! seeding the source.

use rand::Rng;

const DIGITS: &[u8] = b"0123456789";
const HEX_UPPER: &[u8] = b"0123456789ABCDEF";
const HEX_LOWER: &[u8] = b"0123456789abcdef";

/// Source of uniform random choices
pub trait RandomSource {
    /// Uniform integer in `low..=high`
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize;

    /// Uniform decimal digit
    fn next_digit(&mut self) -> u8 {
        self.next_in_range(0, 9) as u8
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.random_range(low..=high)
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Letter case for hex strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexCase {
    Upper,
    Lower,
}

/// String of `count` uniform decimal digits
pub fn random_digits<R: RandomSource + ?Sized>(rng: &mut R, count: usize) -> String {
    random_from(rng, DIGITS, count)
}

/// String of `count` uniform hex characters
pub fn random_hex<R: RandomSource + ?Sized>(rng: &mut R, count: usize, case: HexCase) -> String {
    let alphabet = match case {
        HexCase::Upper => HEX_UPPER,
        HexCase::Lower => HEX_LOWER,
    };
    random_from(rng, alphabet, count)
}

/// Uniform pick from a non-empty slice
pub fn choose<'a, T, R: RandomSource + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    Some(&items[rng.next_index(items.len())])
}

fn random_from<R: RandomSource + ?Sized>(rng: &mut R, alphabet: &[u8], count: usize) -> String {
    (0..count)
        .map(|_| alphabet[rng.next_index(alphabet.len())] as char)
        .collect()
}
