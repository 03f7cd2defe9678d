//! Weighted composite scores.
//!
//! A score draws one raw `0..=100` value per metric, in table order, and recombines them with the
//! table's weights. Metrics where a lower raw value is better are inverted (`100 - raw`) before
//! they are reported, so the overall is always `round(Σ weight × breakdown)`.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::ConfigurationError;
use crate::rng::Lcg;

/// Allowed deviation of a weight table's sum from 1.0.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Resolution that weighted sums are snapped to before rounding, so `70.49999999999999` produced
/// by binary fractions still rounds as `70.5`.
const ROUNDING_SNAP: f64 = 1e6;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricWeight {
    pub name: String,
    pub weight: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub inverted: bool,
}

/// Ordered metric weights.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WeightTable {
    metrics: Vec<MetricWeight>,
}

impl WeightTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (S, f64)>) -> Self {
        pairs
            .into_iter()
            .fold(Self::new(), |table, (name, weight)| table.with(name, weight))
    }

    pub fn with(mut self, name: impl Into<String>, weight: f64) -> Self {
        self.metrics.push(MetricWeight {
            name: name.into(),
            weight,
            inverted: false,
        });
        self
    }

    pub fn with_inverted(mut self, name: impl Into<String>, weight: f64) -> Self {
        self.metrics.push(MetricWeight {
            name: name.into(),
            weight,
            inverted: true,
        });
        self
    }

    pub fn metrics(&self) -> &[MetricWeight] {
        &self.metrics
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn total_weight(&self) -> f64 {
        self.metrics.iter().map(|m| m.weight).sum()
    }

    /// Names flagged `inverted` in the table itself.
    pub fn inverted_names(&self) -> BTreeSet<String> {
        self.metrics
            .iter()
            .filter(|m| m.inverted)
            .map(|m| m.name.clone())
            .collect()
    }

    /// Check the table against `inverted` without drawing anything.
    pub fn validate(&self, inverted: &BTreeSet<String>) -> Result<(), ConfigurationError> {
        if self.metrics.is_empty() {
            return Err(ConfigurationError::EmptyWeights);
        }

        let mut seen = BTreeSet::new();
        for m in &self.metrics {
            if !m.weight.is_finite() || m.weight < 0.0 {
                return Err(ConfigurationError::InvalidWeight {
                    name: m.name.clone(),
                    weight: m.weight,
                });
            }
            if !seen.insert(m.name.as_str()) {
                return Err(ConfigurationError::DuplicateMetric(m.name.clone()));
            }
        }

        if let Some(unknown) = inverted.iter().find(|n| !seen.contains(n.as_str())) {
            return Err(ConfigurationError::UnknownInvertedMetric(unknown.clone()));
        }

        let sum = self.total_weight();
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ConfigurationError::WeightSum {
                sum,
                tolerance: WEIGHT_TOLERANCE,
            });
        }

        Ok(())
    }

    fn is_inverted(&self, metric: &MetricWeight, inverted: &BTreeSet<String>) -> bool {
        metric.inverted || inverted.contains(&metric.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedScore {
    pub overall: u32,
    pub breakdown: BTreeMap<String, u32>,
}

impl WeightedScore {
    pub fn get(&self, metric: &str) -> Option<u32> {
        self.breakdown.get(metric).copied()
    }
}

/// Round to the nearest integer, halves away from zero.
pub fn round_half_away(value: f64) -> i64 {
    let snapped = (value * ROUNDING_SNAP).round() / ROUNDING_SNAP;
    snapped.round() as i64
}

/// Recombine caller-supplied raw draws (one per metric, in table order).
///
/// Raw values above 100 are treated as 100.
pub fn combine_draws(
    table: &WeightTable,
    inverted: &BTreeSet<String>,
    raw: &[u32],
) -> Result<WeightedScore, ConfigurationError> {
    table.validate(inverted)?;
    if raw.len() != table.len() {
        return Err(ConfigurationError::DrawCountMismatch {
            expected: table.len(),
            actual: raw.len(),
        });
    }

    let mut breakdown = BTreeMap::new();
    let mut total = 0.0;
    for (metric, &value) in table.metrics.iter().zip(raw) {
        let value = value.min(100);
        let value = if table.is_inverted(metric, inverted) {
            100 - value
        } else {
            value
        };
        total += metric.weight * f64::from(value);
        breakdown.insert(metric.name.clone(), value);
    }

    let overall = round_half_away(total).clamp(0, 100) as u32;
    Ok(WeightedScore { overall, breakdown })
}

/// Draw one value per metric from `rng` and recombine.
///
/// The table is validated before any draw, so a rejected table leaves `rng` untouched.
pub fn weighted_score_from(
    rng: &mut Lcg,
    table: &WeightTable,
    inverted: &BTreeSet<String>,
) -> Result<WeightedScore, ConfigurationError> {
    table.validate(inverted)?;
    let raw: Vec<u32> = table.metrics.iter().map(|_| rng.draw_percent()).collect();
    combine_draws(table, inverted, &raw)
}

pub fn generate_weighted_score(
    key: &str,
    table: &WeightTable,
    inverted: &BTreeSet<String>,
) -> Result<WeightedScore, ConfigurationError> {
    let mut rng = Lcg::from_key(key);
    weighted_score_from(&mut rng, table, inverted)
}
