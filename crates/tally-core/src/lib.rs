//! Deterministic, key-seeded generator for reproducible mock analytics.
//!
//! A seed key is hashed (FNV-1a) into a 32-bit state, which an LCG advances to produce bounded
//! draws. The mappers in this crate turn those draws into percentages, weighted composite scores,
//! per-index lists and categorical picks. Every function is pure: equal keys give equal output.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod categorical;
pub mod error;
pub mod hash;
pub mod indexed;
pub mod percent;
pub mod rng;
pub mod seed;
pub mod weighted;

pub use categorical::{pick_categorical, pick_with_base};
pub use error::ConfigurationError;
pub use hash::fnv1a_32;
pub use indexed::{generate_indexed_list, indexed_draw};
pub use percent::{generate_percentage, percentage_from, PercentRange};
pub use rng::{lcg_step, perturb, Lcg};
pub use seed::{SeedKey, ANY_FILTER, KEY_DELIMITER};
pub use weighted::{
    combine_draws, generate_weighted_score, round_half_away, weighted_score_from, MetricWeight,
    WeightTable, WeightedScore, WEIGHT_TOLERANCE,
};
