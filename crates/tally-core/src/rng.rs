//! Deterministic LCG helpers.
//!
//! This is intentionally small and dependency-free. It is **not** cryptographic and makes no
//! statistical promises beyond reproducibility.

use crate::hash::fnv1a_32;

/// Classic `rand()` multiplier.
pub const LCG_MULTIPLIER: u32 = 1_103_515_245;

/// Classic `rand()` increment.
pub const LCG_INCREMENT: u32 = 12_345;

/// States live in `[0, 2^31)`.
pub const LCG_MODULUS_MASK: u64 = (1 << 31) - 1;

/// Modulus for an inclusive `0..=100` percentage draw.
pub const PERCENT_MODULUS: u32 = 101;

/// Modulus for a `0..100` index-style draw.
pub const INDEX_MODULUS: u32 = 100;

/// Advance `state` once and reduce the new state by `modulus`.
///
/// Returns `(next_state, value)`. A zero modulus yields a zero value instead of panicking.
pub fn lcg_step(state: u32, modulus: u32) -> (u32, u32) {
    let next = (u64::from(LCG_MULTIPLIER) * u64::from(state) + u64::from(LCG_INCREMENT))
        & LCG_MODULUS_MASK;
    let next = next as u32;
    let value = if modulus == 0 { 0 } else { next % modulus };
    (next, value)
}

/// Perturb a base seed by an entity index: `base ^ (index * 1103515245)` with 32-bit wrapping.
pub fn perturb(base: u32, index: u32) -> u32 {
    base ^ index.wrapping_mul(LCG_MULTIPLIER)
}

/// A key-seeded LCG stream.
///
/// Streams are cheap values; every generation call builds its own from its key and drops it when
/// done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn from_key(key: &str) -> Self {
        Self::new(fnv1a_32(key))
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance once and return the raw 31-bit state.
    pub fn next_state(&mut self) -> u32 {
        let (next, _) = lcg_step(self.state, 0);
        self.state = next;
        next
    }

    /// Advance once and return the new state reduced by `modulus`.
    pub fn draw(&mut self, modulus: u32) -> u32 {
        let (next, value) = lcg_step(self.state, modulus);
        self.state = next;
        value
    }

    /// Raw `0..=100` draw.
    pub fn draw_percent(&mut self) -> u32 {
        self.draw(PERCENT_MODULUS)
    }

    /// Endless iterator of draws reduced by `modulus`.
    pub fn draws(self, modulus: u32) -> Draws {
        Draws { rng: self, modulus }
    }
}

#[derive(Debug, Clone)]
pub struct Draws {
    rng: Lcg,
    modulus: u32,
}

impl Iterator for Draws {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.rng.draw(self.modulus))
    }
}
