/// Compact bit matrix used for binary and filled masks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create a new bit matrix with given dimensions, all bits cleared
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Build a matrix from one flag per pixel in row-major order
    pub fn from_flags(flags: &[bool], width: usize, height: usize) -> Self {
        let mut matrix = Self::new(width, height);
        for (index, _) in flags.iter().enumerate().filter(|(_, set)| **set) {
            matrix.data[index / 8] |= 1 << (index % 8);
        }
        matrix
    }

    /// Get matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// True when the matrix has no cells
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get bit at (x, y); out-of-range reads are background
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y * self.width + x;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set bit at (x, y); out-of-range writes are ignored
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        let byte_index = index / 8;
        let bit_index = index % 8;
        if value {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }

    /// Set a whole horizontal run `x0..=x1` on row `y`, clipped to the matrix
    pub fn set_span(&mut self, y: usize, x0: usize, x1: usize) {
        if y >= self.height || x0 > x1 {
            return;
        }
        for x in x0..=x1.min(self.width.saturating_sub(1)) {
            self.set(x, y, true);
        }
    }

    /// Count foreground cells
    pub fn count_ones(&self) -> usize {
        // Padding bits past width*height are never set.
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Iterate foreground coordinates in row-major order
    pub fn iter_ones(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .filter(|&(x, y)| self.get(x, y))
    }
}
