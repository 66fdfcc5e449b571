//! Replicate-border index resolution.

/// Map any signed index onto `[0, limit - 1]` by clamping to the nearest
/// valid sample. Never wraps around.
#[inline]
pub fn clamp_index(i: isize, limit: usize) -> usize {
    debug_assert!(limit > 0, "clamp_index on an empty axis");
    if i <= 0 {
        0
    } else {
        (i as usize).min(limit - 1)
    }
}

/// Clamp `base + offset` against `limit`.
#[inline]
pub fn clamp_offset(base: usize, offset: isize, limit: usize) -> usize {
    clamp_index(base as isize + offset, limit)
}
