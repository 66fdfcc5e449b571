//! CPU Canny edge stage: derivative-of-Gaussian filter, magnitude,
//! non-maximum suppression, hysteresis and mask finalization.
//!
//! Data flows strictly forward; each stage reads completed planes only:
//!
//! 1. [`derivative_filter`]: `u8` source → `i16` `dx`, `dy`
//! 2. [`compute_magnitude`]: `dx`, `dy` → `i16` magnitude (L1 or L2)
//! 3. [`classify_candidates`]: NMS + double threshold → labels {0, 1, 2}
//! 4. [`propagate_hysteresis`]: weak pixels connected to strong → strong
//! 5. [`finalize_mask`]: strong → 255, everything else → 0
//!
//! Stages 1–3 and 5 are row-parallel; hysteresis is serial with a single
//! owner of its plane.

pub mod finalize;
pub mod grad;
pub mod hysteresis;
pub mod kernels;
pub mod magnitude;
pub mod nms;

pub use finalize::{finalize_mask, EDGE};
pub use grad::{derivative_filter, derivatives, Derivatives};
pub use hysteresis::{propagate_hysteresis, HysteresisMode, HysteresisStats};
pub use kernels::DerivativeKernels;
pub use magnitude::{compute_magnitude, MagnitudeNorm};
pub use nms::{classify_candidates, ScaledThresholds, REJECT, STRONG, WEAK};
