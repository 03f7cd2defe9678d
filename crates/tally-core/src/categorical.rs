//! Stable categorical selection.

use crate::hash::fnv1a_32;

/// Pick `candidates[(base + salt) % len]`. The sum is taken in 64 bits and never wraps.
pub fn pick_with_base<T>(base: u32, salt: u32, candidates: &[T]) -> Option<&T> {
    if candidates.is_empty() {
        return None;
    }
    let idx = (u64::from(base) + u64::from(salt)) % candidates.len() as u64;
    candidates.get(idx as usize)
}

/// Pick a candidate for `key` offset by a positional `salt`; `None` only for an empty list.
pub fn pick_categorical<'a, T>(key: &str, salt: u32, candidates: &'a [T]) -> Option<&'a T> {
    pick_with_base(fnv1a_32(key), salt, candidates)
}
