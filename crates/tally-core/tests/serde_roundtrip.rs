#![cfg(feature = "serde")]

use tally_core::{PercentRange, SeedKey, WeightTable};

#[test]
fn weight_table_json_roundtrip() {
    let table = WeightTable::new()
        .with("difficulty", 0.5)
        .with_inverted("ambiguity", 0.5);

    let json = serde_json::to_string(&table).expect("serialize");
    let roundtrip: WeightTable = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(roundtrip, table);
}

#[test]
fn percent_range_normalises_on_deserialize() {
    let range: PercentRange = serde_json::from_str(r#"{"min": 95, "max": 5}"#).expect("deserialize");
    assert_eq!(range, PercentRange::new(5, 95));
}

#[test]
fn seed_key_is_a_plain_string() {
    let key = SeedKey::new("t1").push("2025-08-18");
    assert_eq!(serde_json::to_string(&key).expect("serialize"), r#""t1|2025-08-18""#);
}
