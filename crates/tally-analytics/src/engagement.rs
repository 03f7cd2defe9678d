//! Per-student engagement for a date, optionally narrowed to a class and section.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tally_core::{generate_indexed_list, indexed_draw, PercentRange, SeedKey};

use crate::calendar::iso_date;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EngagementFilter {
    pub date: NaiveDate,
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
}

impl EngagementFilter {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            class_name: None,
            section: None,
        }
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// `YYYY-MM-DD|class|section`, with `ALL` for an absent or blank filter.
    pub fn seed_key(&self) -> SeedKey {
        SeedKey::new(iso_date(self.date))
            .push_filter(nonblank(&self.class_name))
            .push_filter(nonblank(&self.section))
    }
}

fn nonblank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentEngagement {
    pub roll_no: u32,
    pub name: String,
    pub progress: u32,
}

/// Roster of `roster_size` students, roll numbers starting at 1.
///
/// Each student is seeded by their roll number, so `roster[i]` carries the same value as
/// `engagement_trend(..)[i + 1]`.
pub fn student_engagement(
    filter: &EngagementFilter,
    roster_size: usize,
    display: PercentRange,
) -> Vec<StudentEngagement> {
    let base = filter.seed_key().seed();
    (1..=roster_size)
        .map(|roll| {
            let roll_no = roll as u32;
            StudentEngagement {
                roll_no,
                name: format!("Student {roll_no}"),
                progress: display.clamp(indexed_draw(base, roll)),
            }
        })
        .collect()
}

/// Bare engagement values for a sparkline.
pub fn engagement_trend(filter: &EngagementFilter, points: usize, display: PercentRange) -> Vec<u32> {
    let key = filter.seed_key();
    generate_indexed_list(key.as_str(), points, |raw, _| display.clamp(raw))
}

/// Mean progress, rounded half away from zero; 0 for an empty roster.
pub fn average_progress(roster: &[StudentEngagement]) -> u32 {
    if roster.is_empty() {
        return 0;
    }
    let total: u64 = roster.iter().map(|s| u64::from(s.progress)).sum();
    tally_core::round_half_away(total as f64 / roster.len() as f64) as u32
}
