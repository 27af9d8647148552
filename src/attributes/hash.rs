//! SHA-256 hex digests used by the dynamic CVV and biometric token

use sha2::{Digest, Sha256};

/// Calculate SHA-256 of input string and return as lowercase hex string (64 chars)
///
/// # Example
///
/// ```
/// use testcardgen::attributes::sha256_hex;
///
/// assert_eq!(
///     sha256_hex("abc"),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let result = hasher.finalize();

    result.iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
