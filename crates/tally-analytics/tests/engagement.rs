use std::collections::BTreeSet;

use chrono::NaiveDate;
use tally_analytics::engagement::{average_progress, engagement_trend, student_engagement};
use tally_analytics::EngagementFilter;
use tally_core::{fnv1a_32, PercentRange};

fn filter() -> EngagementFilter {
    EngagementFilter::new(NaiveDate::from_ymd_opt(2025, 8, 20).expect("date"))
}

#[test]
fn seed_key_fills_missing_filters() {
    assert_eq!(filter().seed_key().as_str(), "2025-08-20|ALL|ALL");
    assert_eq!(
        filter().with_class("7").with_section("B").seed_key().as_str(),
        "2025-08-20|7|B"
    );
    assert_eq!(filter().with_class(" ").seed_key().as_str(), "2025-08-20|ALL|ALL");
}

#[test]
fn roster_numbers_students_from_one() {
    let display = PercentRange::new(5, 95);
    let roster = student_engagement(&filter(), 30, display);

    assert_eq!(roster.len(), 30);
    assert_eq!(roster[0].roll_no, 1);
    assert_eq!(roster[0].name, "Student 1");
    assert_eq!(roster[29].roll_no, 30);

    let rolls: BTreeSet<u32> = roster.iter().map(|s| s.roll_no).collect();
    assert_eq!(rolls, (1..=30).collect::<BTreeSet<u32>>());

    assert_eq!(roster, student_engagement(&filter(), 30, display));
}

#[test]
fn progress_is_clamped_for_display() {
    let roster = student_engagement(&filter(), 30, PercentRange::new(5, 95));

    assert!(roster.iter().all(|s| (5..=95).contains(&s.progress)));
    // roll 22 draws raw 0, roll 24 draws raw 98
    assert_eq!(roster[21].progress, 5);
    assert_eq!(roster[23].progress, 95);
}

#[test]
fn filters_change_the_roster() {
    let display = PercentRange::new(5, 95);
    let all = student_engagement(&filter(), 30, display);
    let class_7 = student_engagement(&filter().with_class("7"), 30, display);
    assert_ne!(all, class_7);
}

#[test]
fn roster_is_seeded_by_roll_number() {
    let roster = student_engagement(&filter(), 30, PercentRange::new(5, 95));
    let first: Vec<u32> = roster.iter().take(8).map(|s| s.progress).collect();
    assert_eq!(first, vec![11, 40, 81, 78, 91, 84, 69, 94]);
    assert_eq!(roster[29].progress, 5);

    let base = fnv1a_32("2025-08-20|ALL|ALL");
    for s in &roster {
        let raw = (base ^ s.roll_no.wrapping_mul(1_103_515_245)) % 100;
        assert_eq!(s.progress, raw.clamp(5, 95), "roll {}", s.roll_no);
    }
}

#[test]
fn trend_is_offset_by_one_from_roster() {
    let display = PercentRange::new(5, 95);
    let roster = student_engagement(&filter(), 30, display);
    let trend = engagement_trend(&filter(), 18, display);

    assert_eq!(trend.len(), 18);
    assert_eq!(trend[0], 94);
    for (i, student) in roster.iter().take(17).enumerate() {
        assert_eq!(trend[i + 1], student.progress);
    }
}

#[test]
fn average_of_empty_roster_is_zero() {
    assert_eq!(average_progress(&[]), 0);

    let roster = student_engagement(&filter(), 30, PercentRange::new(5, 95));
    let avg = average_progress(&roster);
    assert!((5..=95).contains(&avg));
}
