//! Output of generated batches: text and JSON rendering, file save

mod save;
mod text;

pub use save::save_text;
pub use text::{divider, format_card, format_cards, format_cards_json};
