//! Tonearm alignment geometry.
//!
//! The core is a single closed-form computation: given a pivot-to-spindle
//! distance and a pair of null radii, [`geometry::compute`] solves the
//! two-null alignment condition for effective length, linear offset, offset
//! angle, and overhang. [`schemes`] carries the built-in null-point table.

pub mod geometry;
pub mod schemes;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geometry::{compute, Geometry, GeometryError};
    pub use crate::schemes::{Scheme, SCHEMES};
}
