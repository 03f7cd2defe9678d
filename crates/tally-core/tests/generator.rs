use tally_core::hash::{FNV_OFFSET_BASIS, FNV_PRIME};
use tally_core::rng::{LCG_INCREMENT, LCG_MULTIPLIER, PERCENT_MODULUS};
use tally_core::{fnv1a_32, generate_percentage, lcg_step, perturb, Lcg, PercentRange, SeedKey};

#[test]
fn constants_are_pinned() {
    assert_eq!(FNV_OFFSET_BASIS, 2_166_136_261);
    assert_eq!(FNV_PRIME, 16_777_619);
    assert_eq!(LCG_MULTIPLIER, 1_103_515_245);
    assert_eq!(LCG_INCREMENT, 12_345);
}

#[test]
fn fnv1a_matches_reference_vectors() {
    assert_eq!(fnv1a_32(""), 0x811C_9DC5);
    assert_eq!(fnv1a_32("a"), 0xE40C_292C);
    assert_eq!(fnv1a_32("foobar"), 0xBF9C_F968);
}

#[test]
fn lcg_step_from_zero() {
    assert_eq!(lcg_step(0, PERCENT_MODULUS), (12_345, 23));
    assert_eq!(lcg_step(12_345, 0), (1_406_932_606, 0));
}

#[test]
fn lcg_stream_tracks_state() {
    let mut rng = Lcg::new(0);
    assert_eq!(rng.state(), 0);
    assert_eq!(rng.draw(PERCENT_MODULUS), 23);
    assert_eq!(rng.state(), 12_345);
    assert_eq!(Lcg::from_key("a").state(), fnv1a_32("a"));
}

#[test]
fn lcg_states_stay_below_2_pow_31() {
    let mut rng = Lcg::new(u32::MAX);
    for _ in 0..1_000 {
        assert!(rng.next_state() < (1 << 31));
    }
}

#[test]
fn same_key_same_sequence() {
    let a: Vec<u32> = Lcg::from_key("t1|2025-08-18").draws(101).take(32).collect();
    let b: Vec<u32> = Lcg::from_key("t1|2025-08-18").draws(101).take(32).collect();
    assert_eq!(a, b);
}

#[test]
fn known_draws_for_engagement_key() {
    let draws: Vec<u32> = Lcg::from_key("2025-08-20|ALL|ALL").draws(101).take(8).collect();
    assert_eq!(draws, vec![54, 58, 91, 97, 67, 22, 81, 4]);
}

#[test]
fn percentage_is_deterministic_and_in_range() {
    let keys = ["", "a", "t1|2025-08-18", "2025-08-20|ALL|ALL", "8|A|Math", "ünïcödé|key"];
    let ranges = [
        PercentRange::FULL,
        PercentRange::new(5, 95),
        PercentRange::new(50, 70),
        PercentRange::new(42, 42),
    ];

    for key in keys {
        for range in ranges {
            let first = generate_percentage(key, range);
            assert_eq!(first, generate_percentage(key, range));
            assert!(range.contains(first), "{key}: {first} outside {range:?}");
        }
    }

    assert_eq!(generate_percentage("2025-08-20|ALL|ALL", PercentRange::FULL), 54);
    assert_eq!(generate_percentage("t1|2025-08-18", PercentRange::new(50, 70)), 50);
    assert_eq!(generate_percentage("anything", PercentRange::new(42, 42)), 42);
}

#[test]
fn one_character_changes_are_visible() {
    let pairs = [
        ("t1|2025-08-18", "t2|2025-08-18"),
        ("t1|2025-08-18", "t1|2025-08-19"),
        ("8|A|Math", "8|B|Math"),
        ("a", "b"),
        ("", "x"),
    ];

    for (a, b) in pairs {
        let da: Vec<u32> = Lcg::from_key(a).draws(101).take(8).collect();
        let db: Vec<u32> = Lcg::from_key(b).draws(101).take(8).collect();
        assert_ne!(da, db, "{a:?} vs {b:?}");
    }
}

#[test]
fn percent_range_normalises_bounds() {
    let r = PercentRange::new(90, 10);
    assert_eq!((r.min(), r.max()), (10, 90));

    let r = PercentRange::new(20, 250);
    assert_eq!((r.min(), r.max()), (20, 100));

    let r = PercentRange::around(5, 15);
    assert_eq!((r.min(), r.max()), (0, 20));

    let r = PercentRange::new(5, 95);
    assert_eq!(r.clamp(0), 5);
    assert_eq!(r.clamp(99), 95);
    assert_eq!(r.clamp_offset(3, -8), 5);
    assert_eq!(r.clamp_offset(60, 7), 67);
}

#[test]
fn perturb_index_zero_is_identity() {
    assert_eq!(perturb(0xDEAD_BEEF, 0), 0xDEAD_BEEF);
    assert_eq!(perturb(0, 1), LCG_MULTIPLIER);
    assert_eq!(perturb(0, 30), 30u32.wrapping_mul(LCG_MULTIPLIER));
}

#[test]
fn seed_key_joins_parts() {
    let key = SeedKey::new("2025-08-20").push_filter(None).push_filter(Some("B"));
    assert_eq!(key.as_str(), "2025-08-20|ALL|B");
    assert_eq!(key.to_string(), "2025-08-20|ALL|B");
    assert_eq!(key.seed(), fnv1a_32("2025-08-20|ALL|B"));
    assert_eq!(key.rng(), Lcg::from_key("2025-08-20|ALL|B"));

    let key = SeedKey::new("t1").push("2025-08-18");
    assert_eq!(key, SeedKey::from("t1|2025-08-18"));
}
