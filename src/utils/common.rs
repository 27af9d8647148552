//! Common utility functions

use chrono::{Local, NaiveDateTime};

/// Stamp the dynamic CVV is keyed on (changes once per hour)
pub const HOUR_STAMP_FORMAT: &str = "%Y%m%d%H";

/// Timestamp used in suggested output file names
pub const FILE_STAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Format a datetime as its `YYYYMMDDHH` hour stamp
pub fn hour_stamp(dt: &NaiveDateTime) -> String {
    dt.format(HOUR_STAMP_FORMAT).to_string()
}

/// Get current local datetime
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Suggested file name for saving a batch generated at `dt`
pub fn suggested_file_name(dt: &NaiveDateTime) -> String {
    format!("test-cards-{}.txt", dt.format(FILE_STAMP_FORMAT))
}

/// Mask all but the last four digits of a card number
pub fn mask_card_number(card: &str) -> String {
    let count = card.chars().count();
    if count <= 4 {
        return card.to_string();
    }
    let visible: String = card.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), visible)
}
