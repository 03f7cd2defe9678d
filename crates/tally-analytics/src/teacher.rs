//! Teacher performance: preparation fidelity, assessment quality, coverage and mastery for one
//! teacher and week.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tally_core::{
    percentage_from, weighted_score_from, ConfigurationError, PercentRange, SeedKey, WeightedScore,
};

use crate::calendar::{iso_date, start_of_week};
use crate::config::{ClassOffsets, TeacherProfile, TeacherScoringConfig};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherPerformance {
    pub teacher_id: String,
    /// Monday of the scored week
    pub week_start: NaiveDate,
    pub preparation: WeightedScore,
    pub assessment: WeightedScore,
    pub coverage_pct: u32,
    pub mastery_pct: u32,
}

impl TeacherPerformance {
    /// Neutral stand-in shown when scoring is misconfigured.
    pub fn placeholder(teacher_id: &str, day: NaiveDate) -> Self {
        Self {
            teacher_id: teacher_id.to_string(),
            week_start: start_of_week(day),
            preparation: WeightedScore::default(),
            assessment: WeightedScore::default(),
            coverage_pct: 0,
            mastery_pct: 0,
        }
    }
}

/// One row of the "classes handled" table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassPerformance {
    pub class_name: String,
    pub subject: String,
    pub coverage: u32,
    pub mastery: u32,
}

pub fn teacher_seed_key(teacher_id: &str, day: NaiveDate) -> SeedKey {
    SeedKey::new(teacher_id).push(iso_date(start_of_week(day)))
}

/// Score `teacher_id` for the week containing `day`.
///
/// A single stream feeds, in order: every preparation metric, every assessment metric, coverage,
/// then mastery.
pub fn score_teacher(
    teacher_id: &str,
    day: NaiveDate,
    scoring: &TeacherScoringConfig,
) -> Result<TeacherPerformance, ConfigurationError> {
    let key = teacher_seed_key(teacher_id, day);
    let mut rng = key.rng();
    let none = BTreeSet::new();

    let preparation = weighted_score_from(&mut rng, &scoring.preparation, &none)?;
    let assessment = weighted_score_from(&mut rng, &scoring.assessment, &none)?;
    let coverage_pct = percentage_from(&mut rng, scoring.coverage);
    let mastery_pct = percentage_from(&mut rng, scoring.mastery);

    Ok(TeacherPerformance {
        teacher_id: teacher_id.to_string(),
        week_start: start_of_week(day),
        preparation,
        assessment,
        coverage_pct,
        mastery_pct,
    })
}

/// Spread a teacher's aggregate coverage/mastery over the classes they handle.
///
/// Subjects are assigned round-robin; a teacher without subjects gets an empty subject column.
pub fn class_breakdown(
    perf: &TeacherPerformance,
    profile: &TeacherProfile,
    offsets: &ClassOffsets,
) -> Vec<ClassPerformance> {
    profile
        .classes
        .iter()
        .enumerate()
        .map(|(idx, class_name)| {
            let subject = if profile.subjects.is_empty() {
                String::new()
            } else {
                profile.subjects[idx % profile.subjects.len()].clone()
            };
            let (coverage_offset, mastery_offset) = if idx % 2 == 0 {
                (offsets.coverage_even, offsets.mastery_even)
            } else {
                (offsets.coverage_odd, offsets.mastery_odd)
            };
            ClassPerformance {
                class_name: class_name.clone(),
                subject,
                coverage: PercentRange::FULL.clamp_offset(perf.coverage_pct, coverage_offset),
                mastery: PercentRange::FULL.clamp_offset(perf.mastery_pct, mastery_offset),
            }
        })
        .collect()
}
