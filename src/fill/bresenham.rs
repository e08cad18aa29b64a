//! Bresenham line rasterization.
//!
//! Produces the integer grid cells covering a segment between two points.
//! Used by the flood-fill path to stamp polygon boundaries onto the raster
//! before region growth.
//!
//! ```text
//! From (0,0) to (7,3):
//!
//!     3 │        ●
//!     2 │     ●●
//!     1 │  ●●
//!     0 ●●
//!       └──────────
//!        0 1 2 3 4 5 6 7
//! ```
//!
//! Properties:
//! - both endpoints are produced exactly once each
//! - the sequence has exactly `max(|Δx|, |Δy|) + 1` cells
//! - consecutive cells are 8-connected (no gaps)
//! - integer arithmetic only, no allocation

use crate::core::GridPoint;

/// Bresenham's line algorithm as a lazy iterator.
///
/// The axis with the larger magnitude delta drives the iteration; the
/// coordinate transform `(xx, xy, yx, yy)` maps driving/minor steps back to
/// grid x/y, so one loop covers every octant. The integer error term `d`
/// starts at `2·Δminor − Δmajor`, accumulates `2·Δminor` per cell, and a
/// non-negative value steps the minor axis and charges `2·Δmajor` back.
#[derive(Clone, Debug)]
pub struct BresenhamLine {
    origin: GridPoint,
    // Driving-axis (dx) and minor-axis (dy) magnitudes after the swap.
    dx: i64,
    dy: i64,
    // Transform from (driving, minor) steps to grid offsets.
    xx: i64,
    xy: i64,
    yx: i64,
    yy: i64,
    d: i64,
    step: i64,
    minor: i64,
}

impl BresenhamLine {
    /// Create an iterator over the cells from `start` to `end`, inclusive.
    pub fn new(start: GridPoint, end: GridPoint) -> Self {
        let dx = end.x - start.x;
        let dy = end.y - start.y;

        let xsign = if dx > 0 { 1 } else { -1 };
        let ysign = if dy > 0 { 1 } else { -1 };

        let dx = dx.abs();
        let dy = dy.abs();

        let (dx, dy, xx, xy, yx, yy) = if dx > dy {
            (dx, dy, xsign, 0, 0, ysign)
        } else {
            (dy, dx, 0, ysign, xsign, 0)
        };

        Self {
            origin: start,
            dx,
            dy,
            xx,
            xy,
            yx,
            yy,
            d: 2 * dy - dx,
            step: 0,
            minor: 0,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = GridPoint;

    fn next(&mut self) -> Option<GridPoint> {
        if self.step > self.dx {
            return None;
        }

        let cell = GridPoint::new(
            self.origin.x + self.step * self.xx + self.minor * self.yx,
            self.origin.y + self.step * self.xy + self.minor * self.yy,
        );

        if self.d >= 0 {
            self.minor += 1;
            self.d -= 2 * self.dx;
        }
        self.d += 2 * self.dy;
        self.step += 1;

        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.dx - self.step + 1).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BresenhamLine {}
