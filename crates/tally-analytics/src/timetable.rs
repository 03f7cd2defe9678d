//! Default timetables and lesson-plan edits.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tally_core::{fnv1a_32, pick_with_base};

use crate::calendar::iso_date;
use crate::config::CatalogConfig;

/// Shown when a catalog list is empty.
pub const UNASSIGNED: &str = "TBA";

/// Positional salts for subject, class and section picks (multiplied by the period number).
const SUBJECT_SALT: u32 = 1;
const CLASS_SALT: u32 = 3;
const SECTION_SALT: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPlan {
    pub topic: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    /// `YYYY-MM-DD-<period>`
    pub id: String,
    pub period: u32,
    pub subject: String,
    pub class_name: String,
    pub section: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_plan: Option<LessonPlan>,
}

pub fn period_id(date: NaiveDate, period: u32) -> String {
    format!("{}-{}", iso_date(date), period)
}

/// Period number from the trailing `-N` of an id; 1 when it is missing or not a positive number.
pub fn period_from_id(id: &str) -> u32 {
    id.rsplit('-')
        .next()
        .and_then(|tail| tail.parse::<u32>().ok())
        .filter(|&p| p > 0)
        .unwrap_or(1)
}

/// Periods `1..=periods` for `date`. The same date and catalog always give the same rows.
pub fn build_default_timetable(
    date: NaiveDate,
    catalog: &CatalogConfig,
    periods: u32,
) -> Vec<TimetableEntry> {
    let base = fnv1a_32(&iso_date(date));
    let pick = |list: &[String], salt: u32| {
        pick_with_base(base, salt, list)
            .cloned()
            .unwrap_or_else(|| UNASSIGNED.to_string())
    };

    (1..=periods)
        .map(|p| TimetableEntry {
            id: period_id(date, p),
            period: p,
            subject: pick(&catalog.subjects, p * SUBJECT_SALT),
            class_name: pick(&catalog.classes, p * CLASS_SALT),
            section: pick(&catalog.sections, p * SECTION_SALT),
            lesson_plan: None,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonPlanUpdate {
    pub date: NaiveDate,
    pub period_id: String,
    pub subject: String,
    pub class_name: String,
    pub section: String,
    pub topic: String,
}

/// Timetables built lazily per date and kept for edits.
#[derive(Debug, Clone)]
pub struct TimetableBook {
    catalog: CatalogConfig,
    days: BTreeMap<NaiveDate, Vec<TimetableEntry>>,
}

impl TimetableBook {
    pub fn new(catalog: CatalogConfig) -> Self {
        Self {
            catalog,
            days: BTreeMap::new(),
        }
    }

    pub fn is_built(&self, date: NaiveDate) -> bool {
        self.days.contains_key(&date)
    }

    pub fn for_date(&mut self, date: NaiveDate) -> &[TimetableEntry] {
        self.day_mut(date)
    }

    /// Attach a lesson plan to `update.period_id`, replacing the row's subject/class/section.
    ///
    /// An unknown period id appends a new row. Returns the stored row.
    pub fn upsert_lesson_plan(&mut self, update: LessonPlanUpdate) -> &TimetableEntry {
        let rows = self.day_mut(update.date);
        let entry = TimetableEntry {
            period: period_from_id(&update.period_id),
            id: update.period_id,
            subject: update.subject,
            class_name: update.class_name,
            section: update.section,
            lesson_plan: Some(LessonPlan {
                topic: update.topic,
            }),
        };

        let idx = match rows.iter().position(|r| r.id == entry.id) {
            Some(idx) => {
                let period = rows[idx].period;
                rows[idx] = TimetableEntry { period, ..entry };
                idx
            }
            None => {
                tracing::debug!(id = %entry.id, "Appending timetable row");
                rows.push(entry);
                rows.len() - 1
            }
        };
        &rows[idx]
    }

    fn day_mut(&mut self, date: NaiveDate) -> &mut Vec<TimetableEntry> {
        let catalog = &self.catalog;
        self.days.entry(date).or_insert_with(|| {
            tracing::debug!(date = %date, "Building default timetable");
            build_default_timetable(date, catalog, catalog.periods_per_day)
        })
    }
}
