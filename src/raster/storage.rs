//! Row-major occupancy raster storage.

use crate::core::GridPoint;

/// Binary occupancy raster.
///
/// A fixed-size grid of single-byte occupancy values in `{0, 1}`, stored
/// row-major: cell `(x, y)` lives at index `x * cols + y`. A raster is
/// allocated zeroed at the start of each fill call and handed to the caller
/// when the call completes; it is never shared or reused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    cells: Vec<u8>,
    rows: usize,
    cols: usize,
}

/// Cell value for occupied cells.
pub const OCCUPIED: u8 = 1;
/// Cell value for free cells.
pub const FREE: u8 = 0;

impl Raster {
    /// Allocate a zeroed raster of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![FREE; rows * cols],
            rows,
            cols,
        }
    }

    /// Number of rows (x extent).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (y extent).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether a point falls inside the raster extents.
    #[inline]
    pub fn is_inside(&self, p: GridPoint) -> bool {
        p.x >= 0 && (p.x as usize) < self.rows && p.y >= 0 && (p.y as usize) < self.cols
    }

    #[inline]
    fn index(&self, p: GridPoint) -> usize {
        p.x as usize * self.cols + p.y as usize
    }

    /// Cell value at `p`, or `None` outside the raster.
    #[inline]
    pub fn value_at(&self, p: GridPoint) -> Option<u8> {
        if self.is_inside(p) {
            Some(self.cells[self.index(p)])
        } else {
            None
        }
    }

    /// Write `value` at `p`. Returns false (without writing) when `p` lies
    /// outside the raster.
    #[inline]
    pub fn set_value(&mut self, p: GridPoint, value: u8) -> bool {
        if self.is_inside(p) {
            let idx = self.index(p);
            self.cells[idx] = value;
            true
        } else {
            false
        }
    }

    /// Mark `p` occupied. Returns false when `p` lies outside the raster.
    #[inline]
    pub fn mark(&mut self, p: GridPoint) -> bool {
        self.set_value(p, OCCUPIED)
    }

    /// Mark the half-open run of rows `[x_start, x_end)` at column `y`,
    /// clipped to the raster extents. Returns the number of cells marked.
    pub fn fill_span(&mut self, y: i64, x_start: i64, x_end: i64) -> usize {
        if y < 0 || y as usize >= self.cols {
            return 0;
        }
        let start = x_start.max(0);
        let end = x_end.min(self.rows as i64);
        let mut marked = 0;
        for x in start..end {
            self.cells[x as usize * self.cols + y as usize] = OCCUPIED;
            marked += 1;
        }
        marked
    }

    /// Count of occupied cells.
    pub fn count_occupied(&self) -> usize {
        self.cells.iter().filter(|&&v| v == OCCUPIED).count()
    }

    /// One row of cells, for inspection. Panics when `x` is out of range.
    pub fn row(&self, x: usize) -> &[u8] {
        &self.cells[x * self.cols..(x + 1) * self.cols]
    }

    /// The whole cell plane, row-major.
    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}
