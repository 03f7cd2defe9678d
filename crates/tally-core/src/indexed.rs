//! Per-entity lists: one record per index, each derived from the key's hash perturbed by the
//! index.

use crate::hash::fnv1a_32;
use crate::rng::{perturb, INDEX_MODULUS};

/// Raw `0..100` value for `index` under `base`.
///
/// The index is reduced modulo 2^32 before perturbing, matching the 32-bit multiply, so draws
/// repeat with period 2^32.
pub fn indexed_draw(base: u32, index: usize) -> u32 {
    let ordinal =
        u32::try_from(index).unwrap_or_else(|_| (index as u64 & u64::from(u32::MAX)) as u32);
    perturb(base, ordinal) % INDEX_MODULUS
}

/// Build exactly `count` records in index order.
///
/// `mapper` receives the raw `0..100` draw and the zero-based index.
pub fn generate_indexed_list<R>(
    key: &str,
    count: usize,
    mut mapper: impl FnMut(u32, usize) -> R,
) -> Vec<R> {
    let base = fnv1a_32(key);
    (0..count)
        .map(|index| mapper(indexed_draw(base, index), index))
        .collect()
}
