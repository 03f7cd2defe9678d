//! Session facade: owns the configuration and the caches a dashboard would keep.

use std::fmt::Display;

use chrono::NaiveDate;
use tally_core::{generate_percentage, PercentRange};

use crate::cache::MemoCache;
use crate::chapters::{chapter_performance, ChapterPerformance};
use crate::config::AnalyticsConfig;
use crate::engagement::{engagement_trend, student_engagement, EngagementFilter, StudentEngagement};
use crate::teacher::{
    class_breakdown, score_teacher, teacher_seed_key, ClassPerformance, TeacherPerformance,
};
use crate::timetable::{LessonPlanUpdate, TimetableBook, TimetableEntry};
use crate::week::{week_progress, DayProgress};

/// Substitute `placeholder` for a failed generation, logging the error.
pub fn or_placeholder<T, E: Display>(
    result: Result<T, E>,
    what: &str,
    placeholder: impl FnOnce() -> T,
) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(what, error = %err, "Generation failed, using placeholder");
            placeholder()
        }
    }
}

pub struct Analytics {
    config: AnalyticsConfig,
    teachers: MemoCache<TeacherPerformance>,
    engagement: MemoCache<Vec<StudentEngagement>>,
    timetables: TimetableBook,
}

impl Analytics {
    pub fn new(config: AnalyticsConfig) -> Self {
        let timetables = TimetableBook::new(config.catalog.clone());
        Self {
            config,
            teachers: MemoCache::new(),
            engagement: MemoCache::new(),
            timetables,
        }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    pub fn percentage(&self, key: &str, range: PercentRange) -> u32 {
        generate_percentage(key, range)
    }

    /// Never fails: a misconfigured weight table yields [`TeacherPerformance::placeholder`].
    pub fn teacher_performance(&mut self, teacher_id: &str, day: NaiveDate) -> &TeacherPerformance {
        let scoring = &self.config.teacher_scoring;
        self.teachers
            .get_or_insert_with(teacher_seed_key(teacher_id, day), |_| {
                or_placeholder(
                    score_teacher(teacher_id, day, scoring),
                    "teacher performance",
                    || TeacherPerformance::placeholder(teacher_id, day),
                )
            })
    }

    /// Per-class rows for a known teacher; empty for an unknown id.
    pub fn class_breakdown(&mut self, teacher_id: &str, day: NaiveDate) -> Vec<ClassPerformance> {
        let Some(profile) = self.config.teacher(teacher_id).cloned() else {
            tracing::debug!(teacher_id, "Unknown teacher");
            return Vec::new();
        };
        let offsets = self.config.teacher_scoring.class_offsets;
        let perf = self.teacher_performance(teacher_id, day);
        class_breakdown(perf, &profile, &offsets)
    }

    pub fn engagement(&mut self, filter: &EngagementFilter) -> &[StudentEngagement] {
        let cfg = &self.config.engagement;
        self.engagement
            .get_or_insert_with(filter.seed_key(), |_| {
                student_engagement(filter, cfg.roster_size, cfg.display)
            })
    }

    pub fn engagement_trend(&self, filter: &EngagementFilter) -> Vec<u32> {
        let cfg = &self.config.engagement;
        engagement_trend(filter, cfg.trend_points, cfg.display)
    }

    pub fn timetable(&mut self, date: NaiveDate) -> &[TimetableEntry] {
        self.timetables.for_date(date)
    }

    pub fn upsert_lesson_plan(&mut self, update: LessonPlanUpdate) -> &TimetableEntry {
        self.timetables.upsert_lesson_plan(update)
    }

    pub fn week_progress(&self, day: NaiveDate) -> Vec<DayProgress> {
        week_progress(day, self.config.week.progress)
    }

    /// Chapter rows from the configured syllabus; empty for an unknown subject.
    pub fn chapter_performance(
        &self,
        grade: &str,
        section: &str,
        subject: &str,
    ) -> Vec<ChapterPerformance> {
        let chapters = &self.config.chapters;
        match chapters.syllabus.get(subject) {
            Some(list) => chapter_performance(grade, section, subject, list, chapters),
            None => Vec::new(),
        }
    }
}
