//! Generated card record

use serde::{Deserialize, Serialize};
use crate::card::CardBrand;

/// One synthetic test card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    #[serde(rename = "type")]
    pub card_type: CardBrand,
    /// Luhn-valid card number
    pub number: String,
    /// Length of `number`
    pub length: usize,
    /// Expiry as MM/YY
    pub expiry: String,
    /// Digits for a static CVV, uppercase hex for a dynamic one
    pub cvv: String,
    /// Set only for dynamic CVVs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cvv_note: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(rename = "3ds_code", default, skip_serializing_if = "Option::is_none")]
    pub three_ds_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biometric_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub did: Option<String>,
}

impl CardRecord {
    /// True if any optional field is present
    pub fn has_extras(&self) -> bool {
        self.token.is_some()
            || self.three_ds_code.is_some()
            || self.biometric_token.is_some()
            || self.did.is_some()
    }
}
