//! Chapter-level coverage and mastery for a class, section and subject.

use serde::{Deserialize, Serialize};
use tally_core::{percentage_from, SeedKey};

use crate::config::ChapterConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterPerformance {
    pub chapter: String,
    pub coverage: u32,
    pub mastery: u32,
}

pub fn chapter_seed_key(grade: &str, section: &str, subject: &str) -> SeedKey {
    SeedKey::new(grade).push(section).push(subject)
}

/// One row per chapter; each row takes a coverage draw then a mastery draw.
pub fn chapter_performance(
    grade: &str,
    section: &str,
    subject: &str,
    chapters: &[String],
    config: &ChapterConfig,
) -> Vec<ChapterPerformance> {
    let mut rng = chapter_seed_key(grade, section, subject).rng();
    chapters
        .iter()
        .map(|chapter| {
            let coverage = percentage_from(&mut rng, config.coverage);
            let mastery = percentage_from(&mut rng, config.mastery);
            ChapterPerformance {
                chapter: chapter.clone(),
                coverage,
                mastery,
            }
        })
        .collect()
}
