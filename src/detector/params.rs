//! Parameters of the edge detector.
//!
//! Thresholds are normalized to `[0, 1]` and scaled by [`THRESHOLD_SCALE`]
//! into magnitude units. Explicit thresholds passed to the detector take
//! precedence over the `canny_thr_*` entries of the bundle.

use crate::edges::{DerivativeKernels, HysteresisMode, MagnitudeNorm, ScaledThresholds};
use crate::error::EdgeError;
use serde::{Deserialize, Serialize};

/// Factor mapping normalized thresholds onto the `i16` magnitude plane.
pub const THRESHOLD_SCALE: f32 = 256.0;

/// Normalized double threshold.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Thresholds {
    pub low: f32,
    pub high: f32,
}

impl Thresholds {
    pub fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    /// Both values finite in `[0, 1]` and `high >= low`.
    pub fn validate(&self) -> Result<(), EdgeError> {
        for (name, value) in [("low", self.low), ("high", self.high)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(EdgeError::InvalidThreshold { name, value });
            }
        }
        if self.high < self.low {
            return Err(EdgeError::ThresholdOrder {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }

    pub fn scaled(&self) -> ScaledThresholds {
        ScaledThresholds {
            low: self.low * THRESHOLD_SCALE,
            high: self.high * THRESHOLD_SCALE,
        }
    }
}

/// Configuration bundle of the edge detector.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CannyParams {
    /// Low threshold used when none is supplied explicitly.
    pub canny_thr_low: f32,
    /// High threshold used when none is supplied explicitly.
    pub canny_thr_high: f32,
    pub magnitude_norm: MagnitudeNorm,
    /// Rescale the filter passes to unit gain.
    pub normalize_kernels: bool,
    pub hysteresis: HysteresisMode,
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            canny_thr_low: 0.01,
            canny_thr_high: 0.04,
            magnitude_norm: MagnitudeNorm::L2,
            normalize_kernels: false,
            hysteresis: HysteresisMode::Worklist,
        }
    }
}

impl CannyParams {
    pub fn bundle_thresholds(&self) -> Thresholds {
        Thresholds::new(self.canny_thr_low, self.canny_thr_high)
    }

    pub fn resolve_thresholds(&self, explicit: Option<Thresholds>) -> Thresholds {
        explicit.unwrap_or_else(|| self.bundle_thresholds())
    }

    pub fn kernels(&self) -> DerivativeKernels {
        DerivativeKernels::new(self.normalize_kernels)
    }

    /// Reject kernel/norm combinations whose worst-case magnitude would not
    /// fit the `i16` planes.
    pub fn validate_range(&self) -> Result<(), EdgeError> {
        let max_response = self.kernels().max_magnitude(self.magnitude_norm);
        if max_response > f32::from(i16::MAX) {
            return Err(EdgeError::DerivativeRangeExceeded { max_response });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_thresholds_win_over_bundle() {
        let params = CannyParams::default();
        assert_eq!(params.resolve_thresholds(None), Thresholds::new(0.01, 0.04));
        let explicit = Thresholds::new(0.05, 0.15);
        assert_eq!(params.resolve_thresholds(Some(explicit)), explicit);
    }

    #[test]
    fn thresholds_are_validated() {
        assert!(Thresholds::new(0.1, 0.2).validate().is_ok());
        assert!(Thresholds::new(0.2, 0.2).validate().is_ok());
        assert_eq!(
            Thresholds::new(0.3, 0.2).validate(),
            Err(EdgeError::ThresholdOrder {
                low: 0.3,
                high: 0.2
            })
        );
        assert!(matches!(
            Thresholds::new(-0.1, 0.2).validate(),
            Err(EdgeError::InvalidThreshold { name: "low", .. })
        ));
        assert!(matches!(
            Thresholds::new(0.1, f32::NAN).validate(),
            Err(EdgeError::InvalidThreshold { name: "high", .. })
        ));
    }

    #[test]
    fn scaling_uses_256() {
        let s = Thresholds::new(0.05, 0.15).scaled();
        assert!((s.low - 12.8).abs() < 1e-4);
        assert!((s.high - 38.4).abs() < 1e-4);
    }

    #[test]
    fn partial_bundle_fills_defaults() {
        let params: CannyParams =
            serde_json::from_str(r#"{"canny_thr_high": 0.2, "magnitude_norm": "l1"}"#).unwrap();
        assert_eq!(params.canny_thr_high, 0.2);
        assert_eq!(params.canny_thr_low, 0.01);
        assert_eq!(params.magnitude_norm, MagnitudeNorm::L1);
        assert_eq!(params.hysteresis, HysteresisMode::Worklist);
        assert!(params.validate_range().is_ok());
    }
}
