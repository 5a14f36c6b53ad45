/// Outer boundary of a region
pub mod contour;
/// Packed binary mask
pub mod matrix;
/// Float and integer points
pub mod point;

pub use contour::Contour;
pub use matrix::BitMatrix;
pub use point::{Point, PointI};
