//! Grid coordinate type for the occupancy raster.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Grid coordinates (integer cell indices).
///
/// `x` indexes raster rows and `y` indexes raster columns, matching the
/// row-major layout of [`crate::Raster`]. Coordinates are signed so that
/// geometry may extend beyond the raster; individual engines decide whether
/// an out-of-raster cell is clipped or an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPoint {
    /// Row index.
    pub x: i64,
    /// Column index.
    pub y: i64,
}

impl GridPoint {
    /// Create a new grid point.
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The 4 cardinal neighbors (E, W, S, N in row/column terms).
    ///
    /// Used by the flood fill; diagonal neighbors are deliberately not
    /// offered since the fill is 4-connected.
    #[inline]
    pub fn neighbors_4(&self) -> [GridPoint; 4] {
        [
            GridPoint::new(self.x + 1, self.y),
            GridPoint::new(self.x - 1, self.y),
            GridPoint::new(self.x, self.y + 1),
            GridPoint::new(self.x, self.y - 1),
        ]
    }
}

impl Add for GridPoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridPoint::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridPoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridPoint::new(self.x - other.x, self.y - other.y)
    }
}

impl From<[i64; 2]> for GridPoint {
    #[inline]
    fn from(p: [i64; 2]) -> Self {
        GridPoint::new(p[0], p[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_4() {
        let p = GridPoint::new(3, 7);
        let n = p.neighbors_4();

        assert!(n.contains(&GridPoint::new(4, 7)));
        assert!(n.contains(&GridPoint::new(2, 7)));
        assert!(n.contains(&GridPoint::new(3, 8)));
        assert!(n.contains(&GridPoint::new(3, 6)));
    }

    #[test]
    fn test_arithmetic() {
        let a = GridPoint::new(2, 3);
        let b = GridPoint::new(1, 1);

        assert_eq!(a + b, GridPoint::new(3, 4));
        assert_eq!(a - b, GridPoint::new(1, 2));
    }
}
