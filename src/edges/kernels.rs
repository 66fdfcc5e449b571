//! Fixed 9-tap kernels of the derivative-of-Gaussian filter.
//!
//! The smoothing taps sample a σ = 1 Gaussian at unit spacing (peak 1/2π);
//! the derivative table is its antisymmetric counterpart. The GPU stage reads
//! the same literals; keep them in sync.
use super::magnitude::MagnitudeNorm;

/// Half-width of every kernel.
pub const KERNEL_RADIUS: usize = 4;
/// Number of taps (`2 * KERNEL_RADIUS + 1`).
pub const KERNEL_TAPS: usize = 2 * KERNEL_RADIUS + 1;

pub type Kernel9 = [f32; KERNEL_TAPS];

/// Largest 8-bit source sample.
const MAX_SOURCE_VALUE: f32 = 255.0;

/// Thin wrapper around a static kernel table.
#[derive(Clone, Copy, Debug)]
pub struct StaticSeparableFilter {
    taps: &'static Kernel9,
}

impl StaticSeparableFilter {
    pub const fn new(taps: &'static Kernel9) -> Self {
        Self { taps }
    }

    #[inline]
    pub fn taps(&self) -> &Kernel9 {
        self.taps
    }

    pub fn tap_sum(&self) -> f32 {
        self.taps.iter().sum()
    }

    /// Sum of the positive taps; the gain of an antisymmetric kernel on a
    /// unit step.
    pub fn positive_sum(&self) -> f32 {
        self.taps.iter().filter(|t| **t > 0.0).sum()
    }

    /// Sum of absolute taps; bounds `|response| / |input|`.
    pub fn abs_sum(&self) -> f32 {
        self.taps.iter().map(|t| t.abs()).sum()
    }
}

/// Symmetric smoothing kernel (sum ≈ 0.399, i.e. not unit gain).
pub const GAUSSIAN_9TAP: StaticSeparableFilter = StaticSeparableFilter::new(&[
    0.000053390535453,
    0.001768051711852,
    0.021539279301849,
    0.096532352630054,
    0.159154943091895,
    0.096532352630054,
    0.021539279301849,
    0.001768051711852,
    0.000053390535453,
]);

/// Antisymmetric derivative kernel (positive sum ≈ 1.824).
pub const GAUSSIAN_DERIV_9TAP: StaticSeparableFilter = StaticSeparableFilter::new(&[
    -0.002683701023220,
    -0.066653979229454,
    -0.541341132946452,
    -1.213061319425269,
    0.0,
    1.213061319425269,
    0.541341132946452,
    0.066653979229454,
    0.002683701023220,
]);

/// Smoothing/derivative kernel pair with the per-pass output scales.
#[derive(Clone, Copy, Debug)]
pub struct DerivativeKernels {
    pub smooth: StaticSeparableFilter,
    pub deriv: StaticSeparableFilter,
    /// Factor applied after every smoothing pass
    pub smooth_scale: f32,
    /// Factor applied after every derivative pass
    pub deriv_scale: f32,
}

impl Default for DerivativeKernels {
    fn default() -> Self {
        Self::new(false)
    }
}

impl DerivativeKernels {
    /// Reference kernels. With `normalize`, the smoothing pass is rescaled to
    /// unit DC gain and the derivative pass to unit step gain.
    pub fn new(normalize: bool) -> Self {
        let smooth = GAUSSIAN_9TAP;
        let deriv = GAUSSIAN_DERIV_9TAP;
        let (smooth_scale, deriv_scale) = if normalize {
            (1.0 / smooth.tap_sum(), 1.0 / deriv.positive_sum())
        } else {
            (1.0, 1.0)
        };
        Self {
            smooth,
            deriv,
            smooth_scale,
            deriv_scale,
        }
    }

    /// Upper bound on `|dx|` and `|dy|` for any 8-bit input.
    pub fn max_derivative(&self) -> f32 {
        MAX_SOURCE_VALUE
            * self.smooth.abs_sum()
            * self.smooth_scale.abs()
            * self.deriv.abs_sum()
            * self.deriv_scale.abs()
    }

    /// Upper bound on the gradient magnitude under `norm`.
    pub fn max_magnitude(&self, norm: MagnitudeNorm) -> f32 {
        let d = self.max_derivative();
        match norm {
            MagnitudeNorm::L1 => 2.0 * d,
            MagnitudeNorm::L2 => std::f32::consts::SQRT_2 * d,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothing_is_symmetric_and_derivative_antisymmetric() {
        let g = GAUSSIAN_9TAP.taps();
        let d = GAUSSIAN_DERIV_9TAP.taps();
        for k in 0..KERNEL_TAPS {
            assert_eq!(g[k], g[KERNEL_TAPS - 1 - k]);
            assert_eq!(d[k], -d[KERNEL_TAPS - 1 - k]);
        }
        assert!((GAUSSIAN_9TAP.tap_sum() - 0.398_94).abs() < 1e-4);
        assert!((GAUSSIAN_DERIV_9TAP.positive_sum() - 1.823_74).abs() < 1e-4);
    }

    #[test]
    fn reference_gain_fits_i16() {
        let kernels = DerivativeKernels::new(false);
        assert!(kernels.max_magnitude(MagnitudeNorm::L1) < i16::MAX as f32);
        let normalized = DerivativeKernels::new(true);
        assert!(normalized.max_magnitude(MagnitudeNorm::L1) < i16::MAX as f32);
        assert!(normalized.max_derivative() > kernels.max_derivative());
    }
}
