//! Per-card attribute generators
//!
//! Each generator is independent: it draws from the random source it is
//! handed and, where time matters, from the instant it is given.

mod cvv;
mod expiry;
mod hash;
mod identity;

pub use cvv::{dynamic_cvv_note, generate_cvv_seed, generate_dynamic_cvv, generate_static_cvv};
pub use expiry::{expiry_floor_year, generate_expiry, ExpiryDate};
pub use hash::sha256_hex;
pub use identity::{
    generate_3ds_code, generate_biometric_token, generate_cardholder_name, generate_did,
    generate_token, DID_METHODS,
};
