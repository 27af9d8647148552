//! Batch generation
//!
//! Turns a [`GenerationRequest`] into a list of independent [`CardRecord`]s.

mod generator;
mod record;
mod request;

pub use generator::CardGenerator;
pub use record::CardRecord;
pub use request::{FeatureFlags, GenerationRequest};
