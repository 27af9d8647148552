//! Utility functions

pub mod common;

pub use common::{hour_stamp, mask_card_number, now, suggested_file_name};
