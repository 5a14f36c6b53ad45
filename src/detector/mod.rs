//! Shape region extraction
//!
//! - External contour tracing on the binary mask
//! - Chain compression of traced borders
//! - Polygon fill of contours into a new mask

/// Straight-run compression of pixel chains
pub mod approx;
/// Outer border following (top-level regions only)
pub mod contour;
/// Scanline fill of contours
pub mod fill;

pub use contour::find_external_contours;
pub use fill::fill_contours;
