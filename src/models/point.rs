/// 2D point with floating point coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Integer point for pixel grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct PointI {
    /// X coordinate (column)
    pub x: i32,
    /// Y coordinate (row, growing downwards)
    pub y: i32,
}

impl PointI {
    /// Create a new integer point
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinates in plot space: the row axis is negated so the shape
    /// keeps its on-screen orientation when drawn with y growing upwards.
    pub fn plot_coords(&self) -> (f64, f64) {
        (self.x as f64, -(self.y as f64))
    }

    /// Step from `self` to `other`
    pub fn delta(&self, other: &PointI) -> (i32, i32) {
        (other.x - self.x, other.y - self.y)
    }
}

impl From<(usize, usize)> for PointI {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x as i32, y as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_coords_flip_rows() {
        assert_eq!(PointI::new(3, 7).plot_coords(), (3.0, -7.0));
        assert_eq!(PointI::new(0, 0).plot_coords(), (0.0, 0.0));
    }
}
