//! Tally Analytics - reproducible mock data for school dashboards
//!
//! Teacher performance, student engagement, timetables, weekly progress and chapter tables are
//! all derived from `tally-core` seed keys, so the same inputs always render the same numbers.

#![forbid(unsafe_code)]

pub mod analytics;
pub mod cache;
pub mod calendar;
pub mod chapters;
pub mod config;
pub mod engagement;
pub mod teacher;
pub mod timetable;
pub mod week;

pub use analytics::{or_placeholder, Analytics};
pub use cache::MemoCache;
pub use config::AnalyticsConfig;
pub use engagement::{EngagementFilter, StudentEngagement};
pub use teacher::{ClassPerformance, TeacherPerformance};
pub use timetable::{LessonPlanUpdate, TimetableBook, TimetableEntry};
