//! Analytics configuration loading and management.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tally_core::{PercentRange, WeightTable};

/// Main analytics configuration, loaded from .tally/config.yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Config version
    pub version: Option<String>,

    /// Subjects, classes and sections used to fill timetables
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Per-student engagement rosters
    #[serde(default)]
    pub engagement: EngagementConfig,

    /// Teacher preparation/assessment scoring
    #[serde(default)]
    pub teacher_scoring: TeacherScoringConfig,

    /// Chapter coverage/mastery tables
    #[serde(default)]
    pub chapters: ChapterConfig,

    /// Weekly progress bars
    #[serde(default)]
    pub week: WeekConfig,

    /// Teachers known to the administration view
    #[serde(default = "default_teachers")]
    pub teachers: Vec<TeacherProfile>,
}

/// Timetable building blocks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_subjects")]
    pub subjects: Vec<String>,

    #[serde(default = "default_classes")]
    pub classes: Vec<String>,

    #[serde(default = "default_sections")]
    pub sections: Vec<String>,

    #[serde(default = "default_periods_per_day")]
    pub periods_per_day: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            subjects: default_subjects(),
            classes: default_classes(),
            sections: default_sections(),
            periods_per_day: default_periods_per_day(),
        }
    }
}

fn default_subjects() -> Vec<String> {
    strings(&["Biology", "Math", "Physics", "Chemistry"])
}
fn default_classes() -> Vec<String> {
    strings(&["6", "7"])
}
fn default_sections() -> Vec<String> {
    strings(&["A", "B", "C"])
}
fn default_periods_per_day() -> u32 {
    6
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementConfig {
    /// Students per roster (roll numbers 1..=roster_size)
    #[serde(default = "default_roster_size")]
    pub roster_size: usize,

    /// Points in the engagement sparkline
    #[serde(default = "default_trend_points")]
    pub trend_points: usize,

    /// Raw draws are clamped into this range for display
    #[serde(default = "default_engagement_display")]
    pub display: PercentRange,
}

impl Default for EngagementConfig {
    fn default() -> Self {
        Self {
            roster_size: default_roster_size(),
            trend_points: default_trend_points(),
            display: default_engagement_display(),
        }
    }
}

fn default_roster_size() -> usize {
    30
}
fn default_trend_points() -> usize {
    18
}
fn default_engagement_display() -> PercentRange {
    PercentRange::new(5, 95)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherScoringConfig {
    #[serde(default = "default_preparation_weights")]
    pub preparation: WeightTable,

    #[serde(default = "default_assessment_weights")]
    pub assessment: WeightTable,

    #[serde(default = "default_coverage")]
    pub coverage: PercentRange,

    #[serde(default = "default_mastery")]
    pub mastery: PercentRange,

    /// Offsets applied per class row, alternating even/odd
    #[serde(default)]
    pub class_offsets: ClassOffsets,
}

impl Default for TeacherScoringConfig {
    fn default() -> Self {
        Self {
            preparation: default_preparation_weights(),
            assessment: default_assessment_weights(),
            coverage: default_coverage(),
            mastery: default_mastery(),
            class_offsets: ClassOffsets::default(),
        }
    }
}

fn default_preparation_weights() -> WeightTable {
    WeightTable::new()
        .with("objectives", 0.20)
        .with("bloom", 0.25)
        .with("checks", 0.20)
        .with("differentiation", 0.20)
        .with("alignment", 0.15)
}
fn default_assessment_weights() -> WeightTable {
    WeightTable::new()
        .with("difficulty", 0.30)
        .with("discrimination", 0.30)
        .with_inverted("rubric_clarity", 0.30)
        .with_inverted("ambiguity", 0.10)
}
fn default_coverage() -> PercentRange {
    PercentRange::around(60, 10)
}
fn default_mastery() -> PercentRange {
    PercentRange::around(55, 15)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassOffsets {
    pub coverage_even: i32,
    pub coverage_odd: i32,
    pub mastery_even: i32,
    pub mastery_odd: i32,
}

impl Default for ClassOffsets {
    fn default() -> Self {
        Self {
            coverage_even: 7,
            coverage_odd: -8,
            mastery_even: 6,
            mastery_odd: -5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterConfig {
    #[serde(default = "default_chapter_coverage")]
    pub coverage: PercentRange,

    #[serde(default = "default_chapter_mastery")]
    pub mastery: PercentRange,

    /// Chapters per subject
    #[serde(default = "default_syllabus")]
    pub syllabus: BTreeMap<String, Vec<String>>,
}

impl Default for ChapterConfig {
    fn default() -> Self {
        Self {
            coverage: default_chapter_coverage(),
            mastery: default_chapter_mastery(),
            syllabus: default_syllabus(),
        }
    }
}

fn default_chapter_coverage() -> PercentRange {
    PercentRange::new(40, 100)
}
fn default_chapter_mastery() -> PercentRange {
    PercentRange::new(35, 95)
}
fn default_syllabus() -> BTreeMap<String, Vec<String>> {
    [
        (
            "Math",
            &[
                "Rational Numbers",
                "Linear Equations",
                "Quadratic Equations",
                "Geometry Basics",
                "Statistics",
            ][..],
        ),
        ("Physics", &["Motion", "Forces", "Energy", "Waves", "Electricity"][..]),
        (
            "Biology",
            &["Cells", "Photosynthesis", "Respiration", "Reproduction", "Genetics"][..],
        ),
        (
            "Chemistry",
            &[
                "Atoms & Molecules",
                "Periodic Table",
                "Chemical Reactions",
                "Acids & Bases",
                "Metals & Non-metals",
            ][..],
        ),
        ("English", &["Reading", "Writing", "Grammar", "Poetry", "Prose"][..]),
    ]
    .into_iter()
    .map(|(subject, chapters)| (subject.to_string(), strings(chapters)))
    .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekConfig {
    #[serde(default)]
    pub progress: PercentRange,
}

impl Default for WeekConfig {
    fn default() -> Self {
        Self {
            progress: PercentRange::FULL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub classes: Vec<String>,
}

fn default_teachers() -> Vec<TeacherProfile> {
    let teacher = |id: &str, name: &str, subjects: &[&str], classes: &[&str]| TeacherProfile {
        id: id.to_string(),
        name: name.to_string(),
        subjects: strings(subjects),
        classes: strings(classes),
    };
    vec![
        teacher("t1", "Ms. Kapoor", &["Math", "Physics"], &["8-B", "9-A"]),
        teacher("t2", "Mr. Iyer", &["Biology"], &["8-A", "8-B"]),
        teacher("t3", "Mrs. Khan", &["Chemistry"], &["9-A"]),
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            version: None,
            catalog: CatalogConfig::default(),
            engagement: EngagementConfig::default(),
            teacher_scoring: TeacherScoringConfig::default(),
            chapters: ChapterConfig::default(),
            week: WeekConfig::default(),
            teachers: default_teachers(),
        }
    }
}

impl AnalyticsConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Load from project root (looks for .tally/config.yaml)
    pub fn load_from_project(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(".tally/config.yaml");
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Check weight tables before anything is generated.
    pub fn validate(&self) -> Result<()> {
        let scoring = &self.teacher_scoring;
        scoring
            .preparation
            .validate(&BTreeSet::new())
            .context("Invalid teacher_scoring.preparation weights")?;
        scoring
            .assessment
            .validate(&BTreeSet::new())
            .context("Invalid teacher_scoring.assessment weights")?;
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config")
    }

    pub fn teacher(&self, id: &str) -> Option<&TeacherProfile> {
        self.teachers.iter().find(|t| t.id == id)
    }
}
