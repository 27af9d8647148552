//! Luhn (mod 10) checksum

/// Check digit to append to `partial` so the full number passes Luhn.
///
/// Doubling starts at the rightmost digit of `partial`, which sits second
/// from the right once the check digit is appended. Returns `None` if
/// `partial` contains anything but ASCII digits.
///
/// # Example
///
/// ```
/// use testcardgen::card::luhn_check_digit;
///
/// assert_eq!(luhn_check_digit("7992739871"), Some(3));
/// ```
pub fn luhn_check_digit(partial: &str) -> Option<u8> {
    let mut total = 0u32;
    for (i, ch) in partial.chars().rev().enumerate() {
        let digit = ch.to_digit(10)?;
        total += if i % 2 == 0 { double_digit(digit) } else { digit };
    }
    Some(((10 - total % 10) % 10) as u8)
}

/// Standard Luhn validation of a complete number (check digit included)
pub fn luhn_is_valid(number: &str) -> bool {
    if number.len() < 2 {
        return false;
    }
    let mut total = 0u32;
    for (i, ch) in number.chars().rev().enumerate() {
        let Some(digit) = ch.to_digit(10) else {
            return false;
        };
        total += if i % 2 == 1 { double_digit(digit) } else { digit };
    }
    total % 10 == 0
}

fn double_digit(digit: u32) -> u32 {
    let doubled = digit * 2;
    doubled / 10 + doubled % 10
}
