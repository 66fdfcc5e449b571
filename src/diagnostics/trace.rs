use super::timing::TimingBreakdown;
use crate::detector::params::Thresholds;
use crate::edges::HysteresisStats;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}

/// Summary of one edge detection run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CannyTrace {
    pub input: InputDescriptor,
    /// Normalized thresholds that were applied
    pub thresholds: Thresholds,
    /// Weak local maxima before hysteresis
    pub weak_candidates: usize,
    /// Strong local maxima before hysteresis
    pub strong_candidates: usize,
    /// Pixels set to 255 in the output mask
    pub edge_pixels: usize,
    pub hysteresis: HysteresisStats,
    pub timings: TimingBreakdown,
}
