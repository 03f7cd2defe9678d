use thiserror::Error;

/// Authoring mistakes in a weight table.
///
/// These are the only failures the generator reports; every other input maps to some valid value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("weight table has no metrics")]
    EmptyWeights,

    #[error("weight for metric `{name}` must be finite and non-negative, got {weight}")]
    InvalidWeight { name: String, weight: f64 },

    #[error("metric `{0}` is listed more than once")]
    DuplicateMetric(String),

    #[error("inverted metric `{0}` is not in the weight table")]
    UnknownInvertedMetric(String),

    #[error("weights sum to {sum}, expected 1.0 (tolerance {tolerance})")]
    WeightSum { sum: f64, tolerance: f64 },

    #[error("expected {expected} draws, got {actual}")]
    DrawCountMismatch { expected: usize, actual: usize },
}
