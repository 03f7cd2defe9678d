use std::collections::BTreeSet;

use tally_core::{fnv1a_32, generate_indexed_list, indexed_draw, pick_categorical};

#[derive(Debug, Clone, PartialEq)]
struct Row {
    index: usize,
    roll_no: usize,
    raw: u32,
}

fn roster(key: &str, count: usize) -> Vec<Row> {
    generate_indexed_list(key, count, |raw, index| Row {
        index,
        roll_no: index + 1,
        raw,
    })
}

#[test]
fn list_has_one_record_per_index() {
    let rows = roster("2025-08-20|ALL|ALL", 30);
    assert_eq!(rows.len(), 30);

    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.index, i);
        assert!(row.raw < 100);
    }

    let unique: BTreeSet<usize> = rows.iter().map(|r| r.index).collect();
    assert_eq!(unique.len(), 30);
}

#[test]
fn engagement_key_scenario() {
    let first = roster("2025-08-20|ALL|ALL", 30);
    let second = roster("2025-08-20|ALL|ALL", 30);

    assert_eq!(first[0].roll_no, 1);
    assert_eq!(first, second);

    let raws: Vec<u32> = first.iter().take(5).map(|r| r.raw).collect();
    assert_eq!(raws, vec![94, 11, 40, 81, 78]);
}

#[test]
fn empty_list_is_valid() {
    assert!(roster("anything", 0).is_empty());
}

#[test]
fn indexed_draw_matches_list() {
    let base = fnv1a_32("k");
    let rows = roster("k", 10);
    for row in rows {
        assert_eq!(row.raw, indexed_draw(base, row.index));
    }
}

#[test]
fn categorical_pick_is_stable() {
    let subjects = ["Biology", "Math", "Physics", "Chemistry"];

    for salt in 1..=6u32 {
        let a = pick_categorical("2025-08-20", salt, &subjects);
        let b = pick_categorical("2025-08-20", salt, &subjects);
        assert!(a.is_some());
        assert_eq!(a, b);
    }

    let base = u64::from(fnv1a_32("2025-08-20"));
    let expected = subjects[((base + 3) % 4) as usize];
    assert_eq!(pick_categorical("2025-08-20", 3, &subjects), Some(&expected));
}

#[test]
fn categorical_pick_on_empty_list_is_none() {
    let empty: [&str; 0] = [];
    assert_eq!(pick_categorical("k", 1, &empty), None);
}

#[test]
fn categorical_sum_does_not_wrap() {
    let candidates = [0u32, 1, 2];
    let picked = tally_core::pick_with_base(u32::MAX, u32::MAX, &candidates);
    let expected = ((u64::from(u32::MAX) * 2) % 3) as usize;
    assert_eq!(picked, Some(&candidates[expected]));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn indexed_draw_wraps_at_u32() {
    let base = fnv1a_32("k");
    let wrap = 1usize << 32;
    assert_eq!(indexed_draw(base, wrap), indexed_draw(base, 0));
    assert_eq!(indexed_draw(base, wrap + 7), indexed_draw(base, 7));
    assert_eq!(indexed_draw(base, u32::MAX as usize), indexed_draw(base, usize::MAX));
}
