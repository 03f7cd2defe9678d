//! Bounded percentage draws.

use crate::rng::Lcg;

/// Inclusive display range inside `0..=100`.
///
/// Construction never fails: bounds above 100 are clamped and reversed bounds are swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Bounds", into = "Bounds"))]
pub struct PercentRange {
    min: u32,
    max: u32,
}

impl PercentRange {
    pub const FULL: Self = Self { min: 0, max: 100 };

    pub fn new(min: u32, max: u32) -> Self {
        let (min, max) = (min.min(100), max.min(100));
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Range of `center ± spread`, clipped to `0..=100`.
    pub fn around(center: u32, spread: u32) -> Self {
        Self::new(center.saturating_sub(spread), center.saturating_add(spread))
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Number of distinct values in the range.
    pub fn width(&self) -> u32 {
        self.max - self.min + 1
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }

    /// Signed variant of [`PercentRange::clamp`] for values shifted by an offset.
    pub fn clamp_offset(&self, value: u32, offset: i32) -> u32 {
        let shifted = i64::from(value) + i64::from(offset);
        shifted.clamp(i64::from(self.min), i64::from(self.max)) as u32
    }
}

impl Default for PercentRange {
    fn default() -> Self {
        Self::FULL
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct Bounds {
    min: u32,
    max: u32,
}

#[cfg(feature = "serde")]
impl From<Bounds> for PercentRange {
    fn from(b: Bounds) -> Self {
        Self::new(b.min, b.max)
    }
}

#[cfg(feature = "serde")]
impl From<PercentRange> for Bounds {
    fn from(r: PercentRange) -> Self {
        Self {
            min: r.min,
            max: r.max,
        }
    }
}

/// Draw one value from `rng` mapped into `range`.
pub fn percentage_from(rng: &mut Lcg, range: PercentRange) -> u32 {
    range.min + rng.draw(range.width())
}

/// One reproducible value in `range` for `key`.
pub fn generate_percentage(key: &str, range: PercentRange) -> u32 {
    let mut rng = Lcg::from_key(key);
    percentage_from(&mut rng, range)
}
