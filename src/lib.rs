#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;

// Stage-level building blocks, public for tooling and parity tests against
// the accelerated implementation.
pub mod edges;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{detect_edges, CannyDetector, CannyOutput, CannyParams, Thresholds};
pub use crate::diagnostics::CannyTrace;
pub use crate::error::EdgeError;
pub use crate::image::Plane;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use marker_edges::prelude::*;
///
/// # fn main() -> Result<(), EdgeError> {
/// let (w, h) = (640usize, 480usize);
/// let gray = Plane::<u8>::new(w, h);
///
/// let detector = CannyDetector::new(CannyParams::default());
/// let out = detector.process(&gray, Some(Thresholds::new(0.05, 0.15)))?;
/// println!("edges={} total_ms={:.3}", out.trace.edge_pixels, out.trace.timings.total_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::edges::{HysteresisMode, MagnitudeNorm};
    pub use crate::image::Plane;
    pub use crate::{CannyDetector, CannyParams, EdgeError, Thresholds};
}
