//! Composite seed keys.

use std::fmt;

use crate::hash::fnv1a_32;
use crate::rng::Lcg;

/// Separator placed between key parts.
pub const KEY_DELIMITER: char = '|';

/// Stand-in for an optional filter that was not supplied.
pub const ANY_FILTER: &str = "ALL";

/// A string identifying one reproducible generation context, e.g. `t1|2025-08-18` or
/// `2025-08-20|ALL|ALL`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SeedKey(String);

impl SeedKey {
    pub fn new(first: impl fmt::Display) -> Self {
        Self(first.to_string())
    }

    /// Append a part, separated by [`KEY_DELIMITER`].
    pub fn push(mut self, part: impl fmt::Display) -> Self {
        use fmt::Write;
        // Writing into a String cannot fail.
        let _ = write!(self.0, "{KEY_DELIMITER}{part}");
        self
    }

    /// Append an optional filter, rendering `None` as [`ANY_FILTER`].
    pub fn push_filter(self, part: Option<&str>) -> Self {
        self.push(part.unwrap_or(ANY_FILTER))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn seed(&self) -> u32 {
        fnv1a_32(&self.0)
    }

    pub fn rng(&self) -> Lcg {
        Lcg::new(self.seed())
    }
}

impl fmt::Display for SeedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SeedKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SeedKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SeedKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}
