//! Generation requests and feature flags

use serde::{Deserialize, Serialize};
use crate::card::validate_prefix;
use crate::error::{GeneratorError, Result};
use crate::MAX_BATCH_SIZE;

/// Optional fields to add to every card in a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Payment token ending in the card's last four digits
    pub token: bool,
    /// Six-digit 3-D Secure code
    pub three_ds: bool,
    /// Biometric token hash
    pub biometric: bool,
    /// Hour-based dynamic CVV instead of a static one
    pub dynamic_cvv: bool,
    /// Decentralized identifier
    pub did: bool,
}

impl FeatureFlags {
    /// Every optional field enabled
    pub fn all() -> Self {
        Self {
            token: true,
            three_ds: true,
            biometric: true,
            dynamic_cvv: true,
            did: true,
        }
    }
}

/// One batch request: prefix, number of cards and optional fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Issuer identification prefix, 6-8 digits
    pub prefix: String,
    /// Number of cards, 0-200
    pub count: usize,
    /// Optional fields
    #[serde(default)]
    pub features: FeatureFlags,
}

impl GenerationRequest {
    /// Create a new request
    pub fn new(prefix: &str, count: usize, features: FeatureFlags) -> Self {
        Self {
            prefix: prefix.to_string(),
            count,
            features,
        }
    }

    /// Check the request before anything is generated.
    ///
    /// Returns the trimmed prefix.
    pub fn validate(&self) -> Result<&str> {
        let prefix = validate_prefix(&self.prefix)?;
        if self.count > MAX_BATCH_SIZE {
            return Err(GeneratorError::InvalidInput(format!(
                "Number of cards must be between 0 and {}",
                MAX_BATCH_SIZE
            )));
        }
        Ok(prefix)
    }
}
