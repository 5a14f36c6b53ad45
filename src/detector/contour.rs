//! External contour extraction
//!
//! Border following after Suzuki & Abe (1985) on a zero-padded label grid.
//! Every border (outer and hole) is traced so the hierarchy stays correct,
//! but only outer borders whose parent is the image frame are returned.
//! Foreground is 8-connected.

use crate::detector::approx::approx_simple;
use crate::models::{BitMatrix, Contour, PointI};

/// Neighbour offsets `(dx, dy)` in clockwise order starting east (y grows down)
const NEIGHBOURS: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

const EAST: usize = 0;
const FRAME: usize = 1;

#[derive(Debug, Clone, Copy)]
struct Border {
    is_hole: bool,
    parent: usize,
}

struct BorderTracer {
    width: usize,
    labels: Vec<i32>,
}

impl BorderTracer {
    fn new(mask: &BitMatrix) -> Self {
        let width = mask.width() + 2;
        let height = mask.height() + 2;
        let mut labels = vec![0i32; width * height];
        for (x, y) in mask.iter_ones() {
            labels[(y + 1) * width + x + 1] = 1;
        }
        Self { width, labels }
    }

    #[inline]
    fn at(&self, (x, y): (usize, usize)) -> i32 {
        self.labels[y * self.width + x]
    }

    #[inline]
    fn put(&mut self, (x, y): (usize, usize), value: i32) {
        self.labels[y * self.width + x] = value;
    }

    #[inline]
    fn step((x, y): (usize, usize), dir: usize) -> (usize, usize) {
        let (dx, dy) = NEIGHBOURS[dir];
        // The one-pixel zero frame keeps every traced pixel off the edge.
        (x.wrapping_add_signed(dx), y.wrapping_add_signed(dy))
    }

    fn direction((x0, y0): (usize, usize), (x1, y1): (usize, usize)) -> usize {
        let delta = (x1 as isize - x0 as isize, y1 as isize - y0 as isize);
        NEIGHBOURS
            .iter()
            .position(|&d| d == delta)
            .unwrap_or(EAST)
    }

    /// Follow one border starting at `start`, entering from the zero pixel
    /// `from`. Marks the border with `nbd` and returns the visited pixels in
    /// unpadded coordinates.
    fn follow(&mut self, start: (usize, usize), from: (usize, usize), nbd: i32) -> Vec<PointI> {
        let to_point = |(x, y): (usize, usize)| PointI::new(x as i32 - 1, y as i32 - 1);

        let from_dir = Self::direction(start, from);
        let first = (0..8)
            .map(|k| Self::step(start, (from_dir + k) % 8))
            .find(|&p| self.at(p) != 0);

        let Some(first) = first else {
            self.put(start, -nbd);
            return vec![to_point(start)];
        };

        let mut points = vec![to_point(start)];
        let mut prev = first;
        let mut current = start;

        loop {
            let prev_dir = Self::direction(current, prev);
            let mut east_is_zero = false;
            let mut next = prev;
            for k in 1..=8 {
                let dir = (prev_dir + 8 - k) % 8;
                let candidate = Self::step(current, dir);
                if self.at(candidate) != 0 {
                    next = candidate;
                    break;
                }
                if dir == EAST {
                    east_is_zero = true;
                }
            }

            if east_is_zero {
                self.put(current, -nbd);
            } else if self.at(current) == 1 {
                self.put(current, nbd);
            }

            if next == start && current == first {
                break;
            }
            prev = current;
            current = next;
            points.push(to_point(current));
        }

        points
    }

    fn run(mut self) -> Vec<Vec<PointI>> {
        let height = self.labels.len() / self.width;
        // Index 0 is unused, index 1 is the frame, treated as a hole border.
        let mut borders = vec![
            Border {
                is_hole: true,
                parent: 0,
            };
            2
        ];
        let mut nbd = FRAME as i32;
        let mut external = Vec::new();

        for y in 1..height - 1 {
            let mut lnbd = FRAME as i32;
            for x in 1..self.width - 1 {
                let value = self.at((x, y));
                if value == 0 {
                    continue;
                }

                let outer_start = value == 1 && self.at((x - 1, y)) == 0;
                let hole_start = !outer_start && value >= 1 && self.at((x + 1, y)) == 0;

                if outer_start || hole_start {
                    nbd += 1;
                    if hole_start && value > 1 {
                        lnbd = value;
                    }

                    let previous = borders[lnbd as usize];
                    let parent = if hole_start == previous.is_hole {
                        previous.parent
                    } else {
                        lnbd as usize
                    };
                    borders.push(Border {
                        is_hole: hole_start,
                        parent,
                    });

                    let from = if outer_start { (x - 1, y) } else { (x + 1, y) };
                    let points = self.follow((x, y), from, nbd);
                    if outer_start && parent == FRAME {
                        external.push(points);
                    }
                }

                let value = self.at((x, y));
                if value != 1 {
                    lnbd = value.abs();
                }
            }
        }

        external
    }
}

/// Trace the raw (uncompressed) outer borders of every top-level region
pub fn trace_external_borders(mask: &BitMatrix) -> Vec<Vec<PointI>> {
    if mask.is_empty() {
        return Vec::new();
    }
    BorderTracer::new(mask).run()
}

/// Find the outer contours of all top-level foreground regions.
///
/// Regions nested inside a hole of another region are skipped, and each
/// contour is compressed to the end points of its straight runs.
pub fn find_external_contours(mask: &BitMatrix) -> Vec<Contour> {
    trace_external_borders(mask)
        .into_iter()
        .map(|points| Contour::new(approx_simple(&points)))
        .collect()
}
