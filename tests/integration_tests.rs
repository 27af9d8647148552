//! Integration tests for testcardgen
//!
//! End-to-end: request -> batch -> text -> file.

use std::fs;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;
use testcardgen::attributes::{expiry_floor_year, generate_dynamic_cvv};
use testcardgen::card::generate_card_number;
use testcardgen::output::divider;
use testcardgen::{
    format_cards, format_cards_json, luhn_is_valid, save_text, CardBrand, CardGenerator,
    CardRecord, FeatureFlags, GenerationRequest, MAX_BATCH_SIZE,
};

fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 18)
        .and_then(|d| d.and_hms_opt(14, 30, 0))
        .unwrap()
}

fn generator(seed: u64) -> CardGenerator {
    CardGenerator::seeded(seed).with_fixed_time(fixed_time())
}

/// Every combination of the five feature flags
fn all_flag_combinations() -> Vec<FeatureFlags> {
    (0u8..32)
        .map(|bits| FeatureFlags {
            token: bits & 1 != 0,
            three_ds: bits & 2 != 0,
            biometric: bits & 4 != 0,
            dynamic_cvv: bits & 8 != 0,
            did: bits & 16 != 0,
        })
        .collect()
}

#[test]
fn test_visa_example() {
    let mut generator = generator(2026);
    let cards = generator
        .generate(&GenerationRequest::new("411111", 1, FeatureFlags::default()))
        .unwrap();

    assert_eq!(cards.len(), 1);
    let card = &cards[0];
    assert_eq!(card.card_type, CardBrand::Visa);
    assert!(card.number.starts_with("411111"));
    assert!(card.length == 16 || card.length == 19);
    assert!(luhn_is_valid(&card.number));
    assert!(!card.expiry.is_empty());
    assert!(!card.cvv.is_empty());
    assert!(!card.name.is_empty());
    assert!(card.token.is_none());
    assert!(card.three_ds_code.is_none());
    assert!(card.biometric_token.is_none());
    assert!(card.did.is_none());
}

#[test]
fn test_short_prefix_rejected() {
    let mut generator = generator(1);
    let err = generator
        .generate(&GenerationRequest::new("12", 10, FeatureFlags::all()))
        .unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().contains("between 6 and 8"));
}

#[test]
fn test_non_numeric_and_empty_prefix_rejected() {
    let mut generator = generator(1);
    for prefix in ["", "41111x", "4111 11", "-411111"] {
        let err = generator
            .generate(&GenerationRequest::new(prefix, 1, FeatureFlags::default()))
            .unwrap_err();
        assert!(err.is_invalid_input(), "{:?} should be rejected", prefix);
    }
}

#[test]
fn test_numbers_valid_for_all_prefix_sizes_and_brands() {
    let mut rng = StdRng::seed_from_u64(5);
    let prefixes = [
        "411111", "4111111", "41111111", "510510", "22210000", "371449", "3412345", "601100",
        "6221260", "81000000", "700000", "900000", "30000000",
    ];
    for prefix in prefixes {
        let allowed = testcardgen::classify(prefix).lengths;
        for _ in 0..100 {
            let (number, length) = generate_card_number(&mut rng, prefix).unwrap();
            assert!(allowed.allows(length), "{} produced length {}", prefix, length);
            assert_eq!(number.len(), length);
            assert!(number.starts_with(prefix));
            assert!(luhn_is_valid(&number), "{} failed Luhn", number);
        }
    }
}

#[test]
fn test_brand_labels() {
    let cases = [
        ("411111", CardBrand::Visa),
        ("510510", CardBrand::Mastercard),
        ("222100", CardBrand::Mastercard),
        ("371449", CardBrand::AmericanExpress),
        ("601100", CardBrand::Discover),
        ("622126", CardBrand::Discover),
        ("810000", CardBrand::UnionPay),
        ("700000", CardBrand::CryptoStablecoin),
        ("900000", CardBrand::Unknown),
    ];
    let mut generator = generator(9);
    for (prefix, brand) in cases {
        let cards = generator
            .generate(&GenerationRequest::new(prefix, 3, FeatureFlags::default()))
            .unwrap();
        assert!(cards.iter().all(|c| c.card_type == brand), "{} should be {}", prefix, brand);
    }
}

#[test]
fn test_expiry_window() {
    let mut generator = generator(10);
    let floor = expiry_floor_year(fixed_time().year());
    let cards = generator
        .generate(&GenerationRequest::new("510510", MAX_BATCH_SIZE, FeatureFlags::default()))
        .unwrap();

    for card in &cards {
        assert_eq!(card.expiry.len(), 5);
        let (month, year) = card.expiry.split_once('/').unwrap();
        assert_eq!(month.len(), 2);
        assert_eq!(year.len(), 2);
        let month: u32 = month.parse().unwrap();
        let year: i32 = year.parse().unwrap();
        assert!((1..=12).contains(&month));
        assert!((floor % 100 + 1..=floor % 100 + 10).contains(&year));
    }
}

#[test]
fn test_token_tail_for_every_flag_combination() {
    let mut generator = generator(11);
    for features in all_flag_combinations() {
        let cards = generator
            .generate(&GenerationRequest::new("601100", 5, features))
            .unwrap();
        for card in &cards {
            assert_eq!(card.token.is_some(), features.token);
            assert_eq!(card.three_ds_code.is_some(), features.three_ds);
            assert_eq!(card.biometric_token.is_some(), features.biometric);
            assert_eq!(card.cvv_note.is_some(), features.dynamic_cvv);
            assert_eq!(card.did.is_some(), features.did);
            if let Some(token) = &card.token {
                assert_eq!(&token[token.len() - 4..], &card.number[card.number.len() - 4..]);
            }
        }
    }
}

#[test]
fn test_dynamic_cvv_same_hour_and_next_hour() {
    let start = fixed_time();
    let later_same_hour = start + chrono::Duration::minutes(29);
    let next_hour = start + chrono::Duration::hours(1);

    let seed = 424242;
    let now = generate_dynamic_cvv(seed, 3, &start);
    assert_eq!(now, generate_dynamic_cvv(seed, 3, &later_same_hour));

    let differing = (1..=24)
        .filter(|h| generate_dynamic_cvv(seed, 3, &(start + chrono::Duration::hours(*h))) != now)
        .count();
    assert!(differing >= 20);
    assert_eq!(generate_dynamic_cvv(seed, 3, &next_hour).len(), 3);
}

#[test]
fn test_batch_sizes() {
    let mut generator = generator(12);
    let none = generator
        .generate(&GenerationRequest::new("411111", 0, FeatureFlags::all()))
        .unwrap();
    assert!(none.is_empty());
    assert!(format_cards(&none).is_empty());

    let max = generator
        .generate(&GenerationRequest::new("411111", MAX_BATCH_SIZE, FeatureFlags::all()))
        .unwrap();
    assert_eq!(max.len(), MAX_BATCH_SIZE);

    let err = generator
        .generate(&GenerationRequest::new("411111", MAX_BATCH_SIZE + 1, FeatureFlags::all()))
        .unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_text_output_layout() {
    let mut generator = generator(13);
    let cards = generator
        .generate(&GenerationRequest::new("510510", 4, FeatureFlags { token: true, ..Default::default() }))
        .unwrap();
    let text = format_cards(&cards);

    let blocks: Vec<&str> = text.split(&format!("{}\n\n", divider())).collect();
    // Trailing divider leaves an empty last piece
    assert_eq!(blocks.len(), 5);
    assert!(blocks[4].is_empty());
    for (i, block) in blocks[..4].iter().enumerate() {
        let labels: Vec<&str> = block.lines().map(|l| l.split(':').next().unwrap_or(l)).collect();
        assert_eq!(
            labels,
            vec![&*format!("Card {}", i + 1), "Type", "Number", "Expiry", "CVV", "Name", "Token"]
        );
    }
}

#[test]
fn test_save_and_reload() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("cards.txt");

    let mut generator = generator(14);
    let cards = generator
        .generate(&GenerationRequest::new("700000", 3, FeatureFlags::all()))
        .unwrap();
    let text = format_cards(&cards);
    save_text(&path, &text).unwrap();

    let saved = fs::read_to_string(&path).unwrap();
    assert_eq!(saved, text.trim());
    assert!(saved.ends_with(&divider()));
}

#[test]
fn test_failed_save_keeps_text() {
    let temp_dir = TempDir::new().unwrap();
    // A directory can't be written as a file
    let path = temp_dir.path().to_path_buf();

    let mut generator = generator(15);
    let cards = generator
        .generate(&GenerationRequest::new("411111", 2, FeatureFlags::default()))
        .unwrap();
    let text = format_cards(&cards);

    let err = save_text(&path, &text).unwrap_err();
    assert_eq!(err.category(), "SaveError");

    let retry = temp_dir.path().join("retry.txt");
    save_text(&retry, &text).unwrap();
    assert_eq!(fs::read_to_string(&retry).unwrap(), text.trim());
}

#[test]
fn test_json_export_round_trip() {
    let mut generator = generator(16);
    let cards = generator
        .generate(&GenerationRequest::new("411111", 5, FeatureFlags::all()))
        .unwrap();
    let json = format_cards_json(&cards).unwrap();
    let back: Vec<CardRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cards);
}

#[test]
fn test_reproducible_with_seed() {
    let request = GenerationRequest::new("81000000", 20, FeatureFlags::all());
    let a = format_cards(&generator(99).generate(&request).unwrap());
    let b = format_cards(&generator(99).generate(&request).unwrap());
    let c = format_cards(&generator(100).generate(&request).unwrap());
    assert_eq!(a, b);
    assert_ne!(a, c);
}
