use super::{Point, PointI};

/// Closed outer boundary of one foreground region.
///
/// Vertices are pixel centres in image coordinates. The last vertex connects
/// back to the first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contour {
    points: Vec<PointI>,
}

impl Contour {
    /// Wrap an ordered vertex list
    pub fn new(points: Vec<PointI>) -> Self {
        Self { points }
    }

    /// Ordered boundary vertices
    pub fn points(&self) -> &[PointI] {
        &self.points
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the contour has no vertices
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Inclusive bounding box as `(min_x, min_y, max_x, max_y)`
    pub fn bounding_box(&self) -> Option<(i32, i32, i32, i32)> {
        let first = self.points.first()?;
        Some(self.points.iter().fold(
            (first.x, first.y, first.x, first.y),
            |(min_x, min_y, max_x, max_y), p| {
                (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
            },
        ))
    }

    /// Shoelace area of the polygon through the vertex pixel centres.
    /// Smaller than the pixel count: a 10x10 block gives 81.
    pub fn polygon_area(&self) -> f64 {
        self.signed_area().abs()
    }

    fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice: i64 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64
            })
            .sum();
        twice as f64 / 2.0
    }

    /// Area centroid, or the vertex mean for degenerate (zero-area) chains
    pub fn centroid(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let n = self.points.len();
        let area = self.signed_area();
        if area.abs() < f64::EPSILON {
            let (sx, sy) = self
                .points
                .iter()
                .fold((0.0f64, 0.0f64), |(sx, sy), p| (sx + p.x as f64, sy + p.y as f64));
            return Some(Point::new((sx / n as f64) as f32, (sy / n as f64) as f32));
        }

        let mut cx = 0.0f64;
        let mut cy = 0.0f64;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            let cross = a.x as f64 * b.y as f64 - b.x as f64 * a.y as f64;
            cx += (a.x + b.x) as f64 * cross;
            cy += (a.y + b.y) as f64 * cross;
        }
        let scale = 1.0 / (6.0 * area);
        Some(Point::new((cx * scale) as f32, (cy * scale) as f32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Contour {
        Contour::new(vec![
            PointI::new(2, 2),
            PointI::new(2, 6),
            PointI::new(6, 6),
            PointI::new(6, 2),
        ])
    }

    #[test]
    fn test_area_and_bbox() {
        let c = square();
        assert_eq!(c.polygon_area(), 16.0);
        assert_eq!(c.bounding_box(), Some((2, 2, 6, 6)));
    }

    #[test]
    fn test_polygon_area_runs_through_pixel_centres() {
        // Corners of a 10x10 pixel block
        let c = Contour::new(vec![
            PointI::new(0, 0),
            PointI::new(0, 9),
            PointI::new(9, 9),
            PointI::new(9, 0),
        ]);
        assert_eq!(c.polygon_area(), 81.0);
    }

    #[test]
    fn test_centroid() {
        let centre = square().centroid().unwrap();
        assert!((centre.x - 4.0).abs() < 1e-6);
        assert!((centre.y - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_contour() {
        let c = Contour::new(vec![PointI::new(5, 1)]);
        assert_eq!(c.polygon_area(), 0.0);
        assert_eq!(c.centroid(), Some(Point::new(5.0, 1.0)));
        assert_eq!(Contour::default().bounding_box(), None);
    }
}
