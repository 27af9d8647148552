//! Expiry dates

use serde::{Deserialize, Serialize};
use crate::random::RandomSource;
use crate::BASE_EXPIRY_YEAR;

/// Card expiry month and year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryDate {
    /// Month, 1-12
    pub month: u32,
    /// Full four-digit year
    pub year: i32,
}

impl std::fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year.rem_euclid(100))
    }
}

/// First year expiries are counted from: never earlier than [`BASE_EXPIRY_YEAR`]
pub fn expiry_floor_year(current_year: i32) -> i32 {
    current_year.max(BASE_EXPIRY_YEAR)
}

/// Random expiry 1 to 10 years past the floor year, any month
pub fn generate_expiry<R: RandomSource + ?Sized>(rng: &mut R, current_year: i32) -> ExpiryDate {
    let year = expiry_floor_year(current_year) + rng.next_in_range(1, 10) as i32;
    let month = rng.next_in_range(1, 12);
    ExpiryDate { month, year }
}
