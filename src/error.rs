//! Input and configuration errors reported before any stage runs.

/// Reasons why edge detection refuses to run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgeError {
    /// An output plane does not match the source dimensions.
    DimensionMismatch {
        plane: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// The source has zero width or height.
    EmptyImage { width: usize, height: usize },
    /// A backing buffer does not hold exactly `width * height` samples.
    BufferSizeMismatch {
        width: usize,
        height: usize,
        len: usize,
    },
    /// A plane's row stride differs from its width.
    StrideMismatch {
        plane: &'static str,
        width: usize,
        stride: usize,
    },
    /// A normalized threshold is not a finite value in `[0, 1]`.
    InvalidThreshold { name: &'static str, value: f32 },
    /// `high < low`.
    ThresholdOrder { low: f32, high: f32 },
    /// The kernel pair can produce responses that do not fit the `i16` planes.
    DerivativeRangeExceeded { max_response: f32 },
}

impl std::fmt::Display for EdgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeError::DimensionMismatch {
                plane,
                expected,
                found,
            } => write!(
                f,
                "{plane} plane is {}x{}, expected {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
            EdgeError::EmptyImage { width, height } => {
                write!(f, "source image is empty ({width}x{height})")
            }
            EdgeError::BufferSizeMismatch { width, height, len } => write!(
                f,
                "buffer holds {len} samples, {width}x{height} plane needs {}",
                width * height
            ),
            EdgeError::StrideMismatch {
                plane,
                width,
                stride,
            } => write!(f, "{plane} plane has stride {stride}, expected width {width}"),
            EdgeError::InvalidThreshold { name, value } => {
                write!(f, "{name} threshold {value} outside [0, 1]")
            }
            EdgeError::ThresholdOrder { low, high } => {
                write!(f, "high threshold {high} is below low threshold {low}")
            }
            EdgeError::DerivativeRangeExceeded { max_response } => write!(
                f,
                "kernel gain allows derivative magnitude {max_response:.1} > {}",
                i16::MAX
            ),
        }
    }
}

impl std::error::Error for EdgeError {}
