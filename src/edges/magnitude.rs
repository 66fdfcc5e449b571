//! Per-pixel gradient magnitude from the derivative planes.
use crate::image::{ImageView, Plane};
use serde::{Deserialize, Serialize};

/// Norm combining `dx` and `dy` into a magnitude.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MagnitudeNorm {
    /// `|dx| + |dy|`
    L1,
    /// `round(sqrt(dx² + dy²))`
    #[default]
    L2,
}

impl MagnitudeNorm {
    #[inline]
    pub fn apply(self, dx: i16, dy: i16) -> i16 {
        match self {
            MagnitudeNorm::L1 => {
                let m = i32::from(dx).abs() + i32::from(dy).abs();
                debug_assert!(m <= i16::MAX as i32, "L1 magnitude {m} outside i16");
                m as i16
            }
            MagnitudeNorm::L2 => {
                let (fx, fy) = (f32::from(dx), f32::from(dy));
                let m = (fx * fx + fy * fy).sqrt().round();
                debug_assert!(m <= i16::MAX as f32, "L2 magnitude {m} outside i16");
                m as i16
            }
        }
    }
}

/// Fill `mag` with the gradient magnitude of (`dx`, `dy`).
pub fn compute_magnitude(
    dx: &Plane<i16>,
    dy: &Plane<i16>,
    norm: MagnitudeNorm,
    mag: &mut Plane<i16>,
) {
    debug_assert_eq!(dx.dims(), dy.dims());
    debug_assert_eq!(dx.dims(), mag.dims());
    mag.for_each_row_mut(|y, out| {
        let (gx, gy) = (dx.row(y), dy.row(y));
        for ((m, &vx), &vy) in out.iter_mut().zip(gx).zip(gy) {
            *m = norm.apply(vx, vy);
        }
    });
}
