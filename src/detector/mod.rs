//! Canny edge detector producing the mask and derivative planes consumed by
//! contour and ellipse extraction.
//!
//! Modules
//! - [`params`] – thresholds and the configuration bundle.
//! - `pipeline` – [`detect_edges`] over caller-owned planes.
//!
//! [`CannyDetector`] wraps the same pipeline and allocates its outputs.

pub mod params;
mod pipeline;

pub use params::{CannyParams, Thresholds, THRESHOLD_SCALE};
pub use pipeline::{detect_edges, validate_inputs};

use crate::diagnostics::CannyTrace;
use crate::error::EdgeError;
use crate::image::Plane;

/// Owned outputs of one detector run.
#[derive(Clone, Debug)]
pub struct CannyOutput {
    /// 255 on edge pixels, 0 elsewhere
    pub mask: Plane<u8>,
    pub dx: Plane<i16>,
    pub dy: Plane<i16>,
    pub trace: CannyTrace,
}

/// Stateless detector; every call allocates fresh planes.
#[derive(Clone, Debug, Default)]
pub struct CannyDetector {
    params: CannyParams,
}

impl CannyDetector {
    pub fn new(params: CannyParams) -> Self {
        Self { params }
    }

    /// Run the detector. `thresholds` overrides the bundle thresholds.
    pub fn process(
        &self,
        source: &Plane<u8>,
        thresholds: Option<Thresholds>,
    ) -> Result<CannyOutput, EdgeError> {
        let (w, h) = source.dims();
        let mut mask = Plane::new(w, h);
        let mut dx = Plane::new(w, h);
        let mut dy = Plane::new(w, h);
        let trace = detect_edges(source, &mut mask, &mut dx, &mut dy, thresholds, &self.params)?;
        Ok(CannyOutput {
            mask,
            dx,
            dy,
            trace,
        })
    }
}
