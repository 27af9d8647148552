//! Cardholder names and the optional identity fields: token, 3-D Secure
//! code, biometric token and decentralized identifier

use crate::error::{GeneratorError, Result};
use crate::random::{self, HexCase, RandomSource};
use crate::{BIOMETRIC_SEED_LENGTH, DID_IDENTIFIER_LENGTH, THREE_DS_LENGTH, TOKEN_LENGTH_RANGE};
use super::hash::sha256_hex;

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Alex", "Emily", "Michael", "Sophia", "David", "Olivia", "James", "Emma",
];

const LAST_NAMES: &[&str] = &[
    "Doe", "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Martinez",
];

/// Leading digits a token may start with
const TOKEN_LEAD_DIGITS: &[char] = &['9', '8'];

/// DID methods a generated identifier may use
pub const DID_METHODS: &[&str] = &["ethr", "key", "web"];

/// Number of trailing card digits a token keeps
const TOKEN_TAIL_LENGTH: usize = 4;

/// Random "First Last" cardholder name
pub fn generate_cardholder_name<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let first = FIRST_NAMES[rng.next_index(FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.next_index(LAST_NAMES.len())];
    format!("{} {}", first, last)
}

/// Payment token for `card_number`.
///
/// 16 to 19 digits: a lead digit of 9 or 8, random middle digits, and the
/// card's own last four digits so the token can be matched back to it.
pub fn generate_token<R: RandomSource + ?Sized>(rng: &mut R, card_number: &str) -> Result<String> {
    let tail = card_number
        .len()
        .checked_sub(TOKEN_TAIL_LENGTH)
        .and_then(|start| card_number.get(start..))
        .ok_or_else(|| {
            GeneratorError::generation(
                "TokenError",
                format!("card number has fewer than {} digits", TOKEN_TAIL_LENGTH),
            )
        })?;

    let length = rng.next_in_range(*TOKEN_LENGTH_RANGE.start(), *TOKEN_LENGTH_RANGE.end()) as usize;
    let lead = TOKEN_LEAD_DIGITS[rng.next_index(TOKEN_LEAD_DIGITS.len())];
    let middle = random::random_digits(rng, length - 1 - TOKEN_TAIL_LENGTH);

    let mut token = String::with_capacity(length);
    token.push(lead);
    token.push_str(&middle);
    token.push_str(tail);
    Ok(token)
}

/// Six-digit 3-D Secure code
pub fn generate_3ds_code<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    random::random_digits(rng, THREE_DS_LENGTH)
}

/// Biometric token: SHA-256 hex of 32 random uppercase hex characters
pub fn generate_biometric_token<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let bio_data = random::random_hex(rng, BIOMETRIC_SEED_LENGTH, HexCase::Upper);
    sha256_hex(&bio_data)
}

/// Decentralized identifier, `did:<method>:<40 lowercase hex chars>`
pub fn generate_did<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let method = DID_METHODS[rng.next_index(DID_METHODS.len())];
    let identifier = random::random_hex(rng, DID_IDENTIFIER_LENGTH, HexCase::Lower);
    format!("did:{}:{}", method, identifier)
}
