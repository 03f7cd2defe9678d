//! Seed initialisation: 32-bit FNV-1a over the characters of a key.

/// FNV-1a 32-bit offset basis (`2166136261`).
pub const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;

/// FNV-1a 32-bit prime (`16777619`).
pub const FNV_PRIME: u32 = 0x0100_0193;

/// Hash a key into a 32-bit seed.
///
/// Each character contributes its Unicode scalar value, so ASCII keys hash exactly like the byte
/// oriented FNV-1a reference vectors. The empty string returns [`FNV_OFFSET_BASIS`].
pub fn fnv1a_32(key: &str) -> u32 {
    key.chars().fold(FNV_OFFSET_BASIS, |h, c| {
        (h ^ u32::from(c)).wrapping_mul(FNV_PRIME)
    })
}
