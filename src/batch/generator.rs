//! Batch card generator

use chrono::{Datelike, NaiveDateTime};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};
use crate::attributes::{
    dynamic_cvv_note, generate_3ds_code, generate_biometric_token, generate_cardholder_name,
    generate_cvv_seed, generate_did, generate_dynamic_cvv, generate_expiry, generate_static_cvv,
    generate_token,
};
use crate::card::{classify, generate_card_number, BrandProfile};
use crate::error::Result;
use crate::random::RandomSource;
use crate::utils;
use super::record::CardRecord;
use super::request::{FeatureFlags, GenerationRequest};

/// Generates batches of test cards.
///
/// Owns the random source for its whole lifetime: state advances across
/// batches and is never reset. Keep one generator per process and seed it
/// for reproducible output.
pub struct CardGenerator<R = StdRng> {
    rng: R,
    /// Pinned "now", if set
    fixed_now: Option<NaiveDateTime>,
}

impl CardGenerator<StdRng> {
    /// Generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Generator with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RandomSource> CardGenerator<R> {
    /// Wrap a random source
    pub fn new(rng: R) -> Self {
        Self { rng, fixed_now: None }
    }

    /// Use `now` instead of the local clock for expiry years and dynamic CVVs
    pub fn with_fixed_time(mut self, now: NaiveDateTime) -> Self {
        self.fixed_now = Some(now);
        self
    }

    fn now(&self) -> NaiveDateTime {
        self.fixed_now.unwrap_or_else(utils::now)
    }

    /// Generate every card the request asks for.
    ///
    /// The request is validated first. Any failure aborts the batch and no
    /// cards are returned.
    pub fn generate(&mut self, request: &GenerationRequest) -> Result<Vec<CardRecord>> {
        let prefix = request.validate()?;
        let profile = classify(prefix);
        let now = self.now();

        debug!(
            prefix,
            brand = %profile.brand,
            count = request.count,
            features = ?request.features,
            "generating card batch"
        );

        let cards = (0..request.count)
            .map(|_| self.generate_card(prefix, &profile, &request.features, &now))
            .collect::<Result<Vec<_>>>()
            .inspect_err(|e| warn!(category = e.category(), error = %e, "card batch aborted"))?;

        info!(brand = %profile.brand, count = cards.len(), "generated card batch");
        Ok(cards)
    }

    fn generate_card(
        &mut self,
        prefix: &str,
        profile: &BrandProfile,
        features: &FeatureFlags,
        now: &NaiveDateTime,
    ) -> Result<CardRecord> {
        let rng = &mut self.rng;

        let (number, length) = generate_card_number(rng, prefix)?;
        let expiry = generate_expiry(rng, now.year()).to_string();

        let (cvv, cvv_note) = if features.dynamic_cvv {
            let seed = generate_cvv_seed(rng);
            (
                generate_dynamic_cvv(seed, profile.cvv_length, now),
                Some(dynamic_cvv_note(seed)),
            )
        } else {
            (generate_static_cvv(rng, profile.cvv_length), None)
        };

        let name = generate_cardholder_name(rng);

        let token = if features.token {
            Some(generate_token(rng, &number)?)
        } else {
            None
        };
        let three_ds_code = features.three_ds.then(|| generate_3ds_code(rng));
        let biometric_token = features.biometric.then(|| generate_biometric_token(rng));
        let did = features.did.then(|| generate_did(rng));

        debug!(number = %utils::mask_card_number(&number), length, "generated card");

        Ok(CardRecord {
            card_type: profile.brand,
            number,
            length,
            expiry,
            cvv,
            cvv_note,
            name,
            token,
            three_ds_code,
            biometric_token,
            did,
        })
    }
}
