//! Diagnostics returned alongside the edge mask.
//!
//! `CannyTrace` summarizes one run: the thresholds actually applied, candidate
//! counts from the classifier, hysteresis statistics and per-stage timings.

pub mod timing;
pub mod trace;

pub use timing::{StageTiming, TimingBreakdown};
pub use trace::{CannyTrace, InputDescriptor};
