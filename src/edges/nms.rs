//! Non-maximum suppression with double thresholding.
//!
//! Each pixel is compared with its two neighbors along the gradient direction,
//! selected by fixed-point octant tests instead of `atan2`:
//!
//! - `|dy| < tan(22.5°)·|dx|` → horizontal pair `(x∓1, y)`
//! - `|dy| > tan(67.5°)·|dx|` → vertical pair `(x, y∓1)`
//! - otherwise the diagonal `(x∓s, y∓1)` with `s = sign(dx ^ dy)`
//!
//! A pixel survives if its magnitude is strictly greater than the first
//! neighbor and not smaller than the second; plateaus therefore keep exactly
//! one sample. Survivors above `high` are strong, the rest weak. Unlike the
//! hysteresis stage this runs on every pixel, border included, with clamped
//! neighbor lookup.
use crate::image::{ImageView, Plane};

/// Fixed-point shift of the octant tests.
pub const CANNY_SHIFT: u32 = 15;
/// `round(tan(22.5°) · 2^CANNY_SHIFT)`.
pub const TG22: i64 = 13573;

/// Pixel cannot be an edge.
pub const REJECT: u8 = 0;
/// Local maximum between the thresholds.
pub const WEAK: u8 = 1;
/// Local maximum above the high threshold.
pub const STRONG: u8 = 2;

/// Thresholds in magnitude units (normalized threshold × scale).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaledThresholds {
    pub low: f32,
    pub high: f32,
}

/// Offsets `(dx0, dy0, dx1, dy1)` of the two comparison neighbors.
#[inline]
fn neighbor_offsets(dx: i16, dy: i16) -> (isize, isize, isize, isize) {
    let dx = i64::from(dx);
    let dy = i64::from(dy);
    let sign = (dx ^ dy).signum() as isize;
    let dx = dx.abs();
    let dy = dy.abs() << CANNY_SHIFT;

    let tg22x = dx * TG22;
    let tg67x = tg22x + ((dx + dx) << CANNY_SHIFT);

    if dy < tg22x {
        (-1, 0, 1, 0)
    } else if dy > tg67x {
        (0, -1, 0, 1)
    } else {
        (-sign, -1, sign, 1)
    }
}

#[inline]
fn classify_pixel(
    x: usize,
    y: usize,
    dx: i16,
    dy: i16,
    mag: &Plane<i16>,
    thresholds: ScaledThresholds,
) -> u8 {
    let m = mag.get(x, y);
    if f32::from(m) <= thresholds.low {
        return REJECT;
    }

    let (ox0, oy0, ox1, oy1) = neighbor_offsets(dx, dy);
    let (xi, yi) = (x as isize, y as isize);
    let m0 = mag.get_clamped(xi + ox0, yi + oy0);
    let m1 = mag.get_clamped(xi + ox1, yi + oy1);

    if m > m0 && m >= m1 {
        if f32::from(m) > thresholds.high {
            STRONG
        } else {
            WEAK
        }
    } else {
        REJECT
    }
}

/// Fill `map` with {REJECT, WEAK, STRONG} labels.
pub fn classify_candidates(
    dx: &Plane<i16>,
    dy: &Plane<i16>,
    mag: &Plane<i16>,
    thresholds: ScaledThresholds,
    map: &mut Plane<u8>,
) {
    debug_assert_eq!(dx.dims(), mag.dims());
    debug_assert_eq!(dy.dims(), mag.dims());
    debug_assert_eq!(map.dims(), mag.dims());
    map.for_each_row_mut(|y, out| {
        let (gx, gy) = (dx.row(y), dy.row(y));
        for (x, label) in out.iter_mut().enumerate() {
            *label = classify_pixel(x, y, gx[x], gy[x], mag, thresholds);
        }
    });
}
