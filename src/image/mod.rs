//! Dense 2-D planes shared by every edge stage.
//!
//! All planes are row-major with `stride == width`. Filters resolve
//! out-of-range coordinates through [`clamp_index`] (replicate border).

pub mod border;
pub mod plane;
pub mod traits;

pub use self::border::clamp_index;
pub use self::plane::Plane;
pub use self::traits::{ImageView, Rows};
