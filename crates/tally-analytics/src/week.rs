//! Daily progress bars for one week.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tally_core::{percentage_from, PercentRange, SeedKey};

use crate::calendar::{iso_date, start_of_week, week_days, WEEKDAY_LABELS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayProgress {
    pub date: NaiveDate,
    pub weekday: String,
    pub progress: u32,
}

/// Seven values, Monday first, keyed by the week's Monday so any day of the week gives the same
/// bars.
pub fn week_progress(day: NaiveDate, range: PercentRange) -> Vec<DayProgress> {
    let mut rng = SeedKey::new(iso_date(start_of_week(day))).rng();
    week_days(day)
        .into_iter()
        .zip(WEEKDAY_LABELS)
        .map(|(date, label)| DayProgress {
            date,
            weekday: label.to_string(),
            progress: percentage_from(&mut rng, range),
        })
        .collect()
}
