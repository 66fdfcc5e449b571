//! Separable derivative-of-Gaussian filter.
//!
//! - `dx = H(deriv, V(smooth, src))`
//! - `dy = H(smooth, V(deriv, src))`
//!
//! Every 1-D pass accumulates nine taps in `f32` around the target sample,
//! resolving out-of-range indices with replicate clamping, multiplies by the
//! pass scale and truncates toward zero into `i16`. Rows are independent, so
//! each pass runs row-parallel.
//!
//! Complexity: four passes of 9 multiply-adds per pixel; one `i16` scratch
//! plane.
use super::kernels::{DerivativeKernels, StaticSeparableFilter, KERNEL_RADIUS, KERNEL_TAPS};
use crate::image::border::clamp_offset;
use crate::image::{ImageView, Plane};

/// Horizontal and vertical derivative planes.
#[derive(Clone, Debug)]
pub struct Derivatives {
    pub dx: Plane<i16>,
    pub dy: Plane<i16>,
}

impl Derivatives {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            dx: Plane::new(w, h),
            dy: Plane::new(w, h),
        }
    }
}

#[inline]
fn store(acc: f32, scale: f32) -> i16 {
    let v = acc * scale;
    debug_assert!(
        v > i16::MIN as f32 - 1.0 && v < i16::MAX as f32 + 1.0,
        "filter response {v} outside i16"
    );
    v as i16
}

/// Vertical 9-tap pass: `dst(x, y) = Σ taps[k] · src(x, clamp(y + k - 4))`.
pub fn convolve_vertical<T>(
    src: &Plane<T>,
    filter: &StaticSeparableFilter,
    scale: f32,
    dst: &mut Plane<i16>,
) where
    T: Copy + Into<f32> + Sync,
{
    debug_assert_eq!(src.dims(), dst.dims());
    let h = src.h;
    let taps = filter.taps();
    dst.for_each_row_mut(|y, out| {
        let rows: [&[T]; KERNEL_TAPS] = std::array::from_fn(|k| {
            src.row(clamp_offset(y, k as isize - KERNEL_RADIUS as isize, h))
        });
        for (x, px) in out.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (row, &g) in rows.iter().zip(taps.iter()) {
                let sample: f32 = row[x].into();
                acc += sample * g;
            }
            *px = store(acc, scale);
        }
    });
}

/// Horizontal 9-tap pass: `dst(x, y) = Σ taps[k] · src(clamp(x + k - 4), y)`.
pub fn convolve_horizontal(
    src: &Plane<i16>,
    filter: &StaticSeparableFilter,
    scale: f32,
    dst: &mut Plane<i16>,
) {
    debug_assert_eq!(src.dims(), dst.dims());
    let w = src.w;
    let taps = filter.taps();
    dst.for_each_row_mut(|y, out| {
        let row = src.row(y);
        for (x, px) in out.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &g) in taps.iter().enumerate() {
                let sx = clamp_offset(x, k as isize - KERNEL_RADIUS as isize, w);
                acc += f32::from(row[sx]) * g;
            }
            *px = store(acc, scale);
        }
    });
}

/// Fill `dx` and `dy` from an 8-bit source. All planes must share the
/// source dimensions.
pub fn derivative_filter(
    src: &Plane<u8>,
    kernels: &DerivativeKernels,
    dx: &mut Plane<i16>,
    dy: &mut Plane<i16>,
) {
    let (w, h) = src.dims();
    let mut interm = Plane::<i16>::new(w, h);

    convolve_vertical(src, &kernels.smooth, kernels.smooth_scale, &mut interm);
    convolve_horizontal(&interm, &kernels.deriv, kernels.deriv_scale, dx);

    convolve_vertical(src, &kernels.deriv, kernels.deriv_scale, &mut interm);
    convolve_horizontal(&interm, &kernels.smooth, kernels.smooth_scale, dy);
}

/// Owned variant of [`derivative_filter`].
pub fn derivatives(src: &Plane<u8>, kernels: &DerivativeKernels) -> Derivatives {
    let mut out = Derivatives::new(src.w, src.h);
    derivative_filter(src, kernels, &mut out.dx, &mut out.dy);
    out
}
