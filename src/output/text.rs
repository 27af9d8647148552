//! Plain-text and JSON rendering of card batches

use crate::batch::CardRecord;
use crate::error::Result;
use crate::{DIVIDER_CHAR, DIVIDER_WIDTH};

/// Divider line printed after every card
pub fn divider() -> String {
    DIVIDER_CHAR.to_string().repeat(DIVIDER_WIDTH)
}

/// Render one card as a block of `Field: value` lines.
///
/// `index` is the 1-based position shown in the `Card N` header.
pub fn format_card(index: usize, card: &CardRecord) -> String {
    let mut out = format!("Card {}\n", index);
    out.push_str(&format!("Type: {}\n", card.card_type));
    out.push_str(&format!("Number: {}  (length: {})\n", card.number, card.length));
    out.push_str(&format!("Expiry: {}\n", card.expiry));
    match &card.cvv_note {
        Some(note) => out.push_str(&format!("CVV: {} ({})\n", card.cvv, note)),
        None => out.push_str(&format!("CVV: {}\n", card.cvv)),
    }
    out.push_str(&format!("Name: {}\n", card.name));
    if let Some(token) = &card.token {
        out.push_str(&format!("Token: {}\n", token));
    }
    if let Some(code) = &card.three_ds_code {
        out.push_str(&format!("3DS Code: {}\n", code));
    }
    if let Some(bio) = &card.biometric_token {
        out.push_str(&format!("Biometric Token: {}\n", bio));
    }
    if let Some(did) = &card.did {
        out.push_str(&format!("DID: {}\n", did));
    }
    out.push_str(&divider());
    out.push_str("\n\n");
    out
}

/// Render a whole batch, cards numbered from 1
pub fn format_cards(cards: &[CardRecord]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, card)| format_card(i + 1, card))
        .collect()
}

/// Render a batch as pretty-printed JSON
pub fn format_cards_json(cards: &[CardRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(cards)?)
}
