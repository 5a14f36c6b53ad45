//! Contour filling
//!
//! Each contour is rasterised as a closed polygon through pixel centres:
//! boundary segments are drawn, then interior spans are filled with an
//! even-odd scanline rule. Edges cover the half-open row range
//! `[min_y, max_y)` so shared vertices are counted once.

use crate::models::{BitMatrix, Contour, PointI};

/// Fill every contour into a new zeroed mask of the given size
pub fn fill_contours(contours: &[Contour], width: usize, height: usize) -> BitMatrix {
    let mut mask = BitMatrix::new(width, height);
    for contour in contours {
        fill_polygon(&mut mask, contour.points());
    }
    mask
}

/// Fill one closed polygon (boundary included) into `mask`
pub fn fill_polygon(mask: &mut BitMatrix, vertices: &[PointI]) {
    let n = vertices.len();
    if n == 0 {
        return;
    }

    for i in 0..n {
        draw_segment(mask, vertices[i], vertices[(i + 1) % n]);
    }
    if n < 3 {
        return;
    }

    let min_y = vertices.iter().map(|p| p.y).min().unwrap_or(0).max(0);
    let max_y = vertices
        .iter()
        .map(|p| p.y)
        .max()
        .unwrap_or(0)
        .min(mask.height() as i32 - 1);

    let mut crossings: Vec<f64> = Vec::with_capacity(n);
    for y in min_y..=max_y {
        crossings.clear();
        for i in 0..n {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            if a.y == b.y {
                continue;
            }
            let (lo, hi) = if a.y < b.y { (a, b) } else { (b, a) };
            if y < lo.y || y >= hi.y {
                continue;
            }
            let t = (y - lo.y) as f64 / (hi.y - lo.y) as f64;
            crossings.push(lo.x as f64 + t * (hi.x - lo.x) as f64);
        }
        crossings.sort_by(f64::total_cmp);

        for pair in crossings.chunks_exact(2) {
            let x0 = pair[0].ceil().max(0.0) as usize;
            let x1 = pair[1].floor();
            if x1 < 0.0 {
                continue;
            }
            mask.set_span(y as usize, x0, x1 as usize);
        }
    }
}

/// Draw a straight segment between two pixel centres, end points included
fn draw_segment(mask: &mut BitMatrix, a: PointI, b: PointI) {
    let (dx, dy) = a.delta(&b);
    let steps = dx.abs().max(dy.abs());
    for s in 0..=steps {
        let (x, y) = if steps == 0 {
            (a.x, a.y)
        } else {
            (
                a.x + ((dx as f64 * s as f64) / steps as f64).round() as i32,
                a.y + ((dy as f64 * s as f64) / steps as f64).round() as i32,
            )
        };
        if x >= 0 && y >= 0 {
            mask.set(x as usize, y as usize, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::contour::find_external_contours;

    fn rect(x0: usize, y0: usize, x1: usize, y1: usize, w: usize, h: usize) -> BitMatrix {
        let mut mask = BitMatrix::new(w, h);
        for y in y0..=y1 {
            for x in x0..=x1 {
                mask.set(x, y, true);
            }
        }
        mask
    }

    #[test]
    fn test_square_area_exact() {
        let mask = rect(3, 4, 12, 10, 20, 20);
        let contours = find_external_contours(&mask);
        let filled = fill_contours(&contours, 20, 20);
        assert_eq!(filled.count_ones(), 10 * 7);
        assert_eq!(filled, mask);
    }

    #[test]
    fn test_ring_hole_is_filled() {
        let mut mask = rect(2, 2, 17, 17, 20, 20);
        for y in 5..=14 {
            for x in 5..=14 {
                mask.set(x, y, false);
            }
        }
        let contours = find_external_contours(&mask);
        let filled = fill_contours(&contours, 20, 20);
        assert_eq!(filled.count_ones(), 16 * 16);
        assert!(filled.get(10, 10));
    }

    #[test]
    fn test_thin_shapes() {
        let mut mask = BitMatrix::new(10, 10);
        for i in 1..8 {
            mask.set(i, i, true); // diagonal
        }
        for x in 2..9 {
            mask.set(x, 9, true); // horizontal line along the bottom edge
        }
        let contours = find_external_contours(&mask);
        assert_eq!(contours.len(), 2);
        let filled = fill_contours(&contours, 10, 10);
        assert_eq!(filled, mask);
    }

    #[test]
    fn test_irregular_blob_matches_source() {
        // Staircase "L" plus a notch: no holes, so fill must reproduce it
        let mut mask = BitMatrix::new(12, 12);
        for y in 1..10 {
            for x in 1..4 {
                mask.set(x, y, true);
            }
        }
        for y in 7..10 {
            for x in 4..10 {
                mask.set(x, y, true);
            }
        }
        mask.set(10, 8, true);
        mask.set(6, 6, true);
        let contours = find_external_contours(&mask);
        assert_eq!(contours.len(), 1);
        assert_eq!(fill_contours(&contours, 12, 12), mask);
    }

    #[test]
    fn test_single_point_polygon() {
        let mut mask = BitMatrix::new(4, 4);
        fill_polygon(&mut mask, &[PointI::new(1, 2)]);
        assert_eq!(mask.count_ones(), 1);
        assert!(mask.get(1, 2));
    }
}
