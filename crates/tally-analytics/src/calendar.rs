//! Week navigation helpers.

use anyhow::{Context, Result};
use chrono::{Datelike, Duration, NaiveDate};

pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Snap to the Monday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

pub fn add_weeks(date: NaiveDate, weeks: i64) -> NaiveDate {
    date + Duration::weeks(weeks)
}

/// Monday..Sunday of the week containing `date`.
pub fn week_days(date: NaiveDate) -> [NaiveDate; 7] {
    let monday = start_of_week(date);
    std::array::from_fn(|i| monday + Duration::days(i as i64))
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_iso_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Human label for the week containing `date`: `Aug 18–24, 2025`, or
/// `Aug 25 – Sep 7, 2025` when the week spans two months.
pub fn format_week_range(date: NaiveDate) -> String {
    let monday = start_of_week(date);
    let sunday = monday + Duration::days(6);

    if monday.month() == sunday.month() {
        format!(
            "{} {}–{}, {}",
            monday.format("%b"),
            monday.day(),
            sunday.day(),
            sunday.year()
        )
    } else {
        format!(
            "{} {} – {} {}, {}",
            monday.format("%b"),
            monday.day(),
            sunday.format("%b"),
            sunday.day(),
            sunday.year()
        )
    }
}
