//! Integer axis-aligned bounding box for polygon extents.
//!
//! [`GridBounds`] tracks the smallest rectangle of grid cells containing a
//! polygon's vertices. The fill engines use it to restrict their work:
//! the Rourke sweep classifies only cells inside the box, and the flood
//! fill derives its default seed from the box corners.

use serde::{Deserialize, Serialize};

use super::point::GridPoint;

/// Axis-aligned integer bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    /// Minimum corner (smallest x and y values).
    pub min: GridPoint,
    /// Maximum corner (largest x and y values).
    pub max: GridPoint,
}

impl GridBounds {
    /// Create a new bounding box from min and max corners.
    #[inline]
    pub const fn new(min: GridPoint, max: GridPoint) -> Self {
        Self { min, max }
    }

    /// Compute the bounding box of a non-empty set of points.
    ///
    /// Returns `None` for an empty slice.
    pub fn of_points(points: &[GridPoint]) -> Option<Self> {
        let first = *points.first()?;
        let mut bounds = GridBounds::new(first, first);
        for p in &points[1..] {
            bounds.expand_to_include(*p);
        }
        Some(bounds)
    }

    /// Grow the box to contain `point`.
    #[inline]
    pub fn expand_to_include(&mut self, point: GridPoint) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Check whether a point lies inside the box (inclusive on all sides).
    #[inline]
    pub fn contains(&self, point: GridPoint) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Width of the box in cells (inclusive extent).
    #[inline]
    pub fn width(&self) -> i64 {
        self.max.x - self.min.x + 1
    }

    /// Height of the box in cells (inclusive extent).
    #[inline]
    pub fn height(&self) -> i64 {
        self.max.y - self.min.y + 1
    }
}
