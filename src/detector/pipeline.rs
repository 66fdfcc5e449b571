//! End-to-end edge detection over caller-provided planes.
//!
//! ```no_run
//! use marker_edges::detector::{detect_edges, CannyParams, Thresholds};
//! use marker_edges::image::Plane;
//!
//! # fn example(gray: Plane<u8>) -> Result<(), marker_edges::EdgeError> {
//! let (w, h) = gray.dims();
//! let mut mask = Plane::new(w, h);
//! let mut dx = Plane::new(w, h);
//! let mut dy = Plane::new(w, h);
//! let trace = detect_edges(
//!     &gray,
//!     &mut mask,
//!     &mut dx,
//!     &mut dy,
//!     Some(Thresholds::new(0.05, 0.15)),
//!     &CannyParams::default(),
//! )?;
//! println!("edge pixels: {}", trace.edge_pixels);
//! # Ok(())
//! # }
//! ```
use super::params::{CannyParams, Thresholds};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{CannyTrace, InputDescriptor, TimingBreakdown};
use crate::edges::{
    classify_candidates, compute_magnitude, derivative_filter, finalize_mask,
    propagate_hysteresis, EDGE, STRONG, WEAK,
};
use crate::error::EdgeError;
use crate::image::Plane;
use log::debug;
use std::time::Instant;

fn check_dims<T: Copy>(
    name: &'static str,
    plane: &Plane<T>,
    expected: (usize, usize),
) -> Result<(), EdgeError> {
    if plane.dims() != expected {
        return Err(EdgeError::DimensionMismatch {
            plane: name,
            expected,
            found: plane.dims(),
        });
    }
    if plane.stride != plane.w {
        return Err(EdgeError::StrideMismatch {
            plane: name,
            width: plane.w,
            stride: plane.stride,
        });
    }
    if plane.data.len() != plane.w * plane.h {
        return Err(EdgeError::BufferSizeMismatch {
            width: plane.w,
            height: plane.h,
            len: plane.data.len(),
        });
    }
    Ok(())
}

/// Every precondition of [`detect_edges`]; nothing is written on failure.
pub fn validate_inputs(
    source: &Plane<u8>,
    out_mask: &Plane<u8>,
    out_dx: &Plane<i16>,
    out_dy: &Plane<i16>,
    thresholds: &Thresholds,
    params: &CannyParams,
) -> Result<(), EdgeError> {
    let dims = source.dims();
    if source.is_empty() {
        return Err(EdgeError::EmptyImage {
            width: dims.0,
            height: dims.1,
        });
    }
    check_dims("source", source, dims)?;
    check_dims("mask", out_mask, dims)?;
    check_dims("dx", out_dx, dims)?;
    check_dims("dy", out_dy, dims)?;
    thresholds.validate()?;
    params.validate_range()
}

/// Run the five edge stages on `source`.
///
/// Writes the 0/255 mask into `out_mask` and the derivative planes into
/// `out_dx`/`out_dy`. `thresholds` overrides the bundle's `canny_thr_*`
/// values when given.
pub fn detect_edges(
    source: &Plane<u8>,
    out_mask: &mut Plane<u8>,
    out_dx: &mut Plane<i16>,
    out_dy: &mut Plane<i16>,
    thresholds: Option<Thresholds>,
    params: &CannyParams,
) -> Result<CannyTrace, EdgeError> {
    let thresholds = params.resolve_thresholds(thresholds);
    validate_inputs(source, out_mask, out_dx, out_dy, &thresholds, params)?;

    let (w, h) = source.dims();
    debug!(
        "detect_edges start w={} h={} low={} high={} norm={:?} hysteresis={:?}",
        w, h, thresholds.low, thresholds.high, params.magnitude_norm, params.hysteresis
    );
    let total_start = Instant::now();
    let mut timings = TimingBreakdown::default();

    let start = Instant::now();
    derivative_filter(source, &params.kernels(), out_dx, out_dy);
    timings.push("derivatives", elapsed_ms(start));

    let start = Instant::now();
    let mut mag = Plane::<i16>::new(w, h);
    compute_magnitude(out_dx, out_dy, params.magnitude_norm, &mut mag);
    timings.push("magnitude", elapsed_ms(start));

    let start = Instant::now();
    let mut map = Plane::<u8>::new(w, h);
    classify_candidates(out_dx, out_dy, &mag, thresholds.scaled(), &mut map);
    let weak_candidates = map.count(|v| v == WEAK);
    let strong_candidates = map.count(|v| v == STRONG);
    timings.push("candidates", elapsed_ms(start));

    let start = Instant::now();
    let mut hyst = Plane::<u8>::new(w, h);
    let hysteresis = propagate_hysteresis(&map, &mut hyst, params.hysteresis);
    timings.push("hysteresis", elapsed_ms(start));

    let start = Instant::now();
    finalize_mask(&hyst, out_mask);
    let edge_pixels = out_mask.count(|v| v == EDGE);
    timings.push("finalize", elapsed_ms(start));

    timings.total_ms = elapsed_ms(total_start);
    debug!(
        "detect_edges done weak={} strong={} passes={} promoted={} demoted={} edges={} total_ms={:.3}",
        weak_candidates,
        strong_candidates,
        hysteresis.passes,
        hysteresis.promoted,
        hysteresis.demoted,
        edge_pixels,
        timings.total_ms
    );

    Ok(CannyTrace {
        input: InputDescriptor {
            width: w,
            height: h,
        },
        thresholds,
        weak_candidates,
        strong_candidates,
        edge_pixels,
        hysteresis,
        timings,
    })
}
