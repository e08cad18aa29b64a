//! Polygon vertex list and coordinate adaptation.
//!
//! A [`Polygon`] is an ordered sequence of at least 3 grid points. The edge
//! between the last and first vertex is implicit: the polygon is treated as
//! closed whether or not the caller repeats the first point. Construction
//! validates the vertex count once so the fill engines can assume a usable
//! shape.
//!
//! The coordinate adapter lives here as [`Polygon::split_axes`]: the fill
//! engines consume parallel x/y arrays rather than the point list itself.

use crate::error::{FillError, Result};

use super::bounds::GridBounds;
use super::point::GridPoint;

/// An ordered, implicitly closed polygon on the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polygon {
    vertices: Vec<GridPoint>,
}

impl Polygon {
    /// Minimum number of vertices for a valid polygon.
    pub const MIN_VERTICES: usize = 3;

    /// Build a polygon from `[x, y]` pairs.
    ///
    /// Fails with [`FillError::EmptyInput`] when fewer than 3 points are
    /// supplied; this check runs before any raster is allocated.
    pub fn from_points(points: &[[i64; 2]]) -> Result<Self> {
        if points.len() < Self::MIN_VERTICES {
            return Err(FillError::EmptyInput(points.len()));
        }
        Ok(Self {
            vertices: points.iter().map(|&p| GridPoint::from(p)).collect(),
        })
    }

    /// The vertex list, in caller order.
    #[inline]
    pub fn vertices(&self) -> &[GridPoint] {
        &self.vertices
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false: construction rejects empty vertex lists.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Split the vertex list into parallel x and y coordinate arrays,
    /// preserving order. Pure; no other state is touched.
    pub fn split_axes(&self) -> (Vec<i64>, Vec<i64>) {
        let xs = self.vertices.iter().map(|p| p.x).collect();
        let ys = self.vertices.iter().map(|p| p.y).collect();
        (xs, ys)
    }

    /// The integer bounding box of the vertices.
    pub fn bounds(&self) -> GridBounds {
        // Unwrap is safe: construction guarantees at least 3 vertices.
        GridBounds::of_points(&self.vertices).expect("polygon has vertices")
    }

    /// Iterate the polygon's edges as point pairs, including the implicit
    /// closing edge from the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (GridPoint, GridPoint)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_axes_preserves_order() {
        let poly = Polygon::from_points(&[[1, 1], [1, 5], [5, 5], [5, 1]]).unwrap();
        let (xs, ys) = poly.split_axes();

        assert_eq!(xs, vec![1, 1, 5, 5]);
        assert_eq!(ys, vec![1, 5, 5, 1]);
    }

    #[test]
    fn test_rejects_too_few_points() {
        assert_eq!(Polygon::from_points(&[]), Err(FillError::EmptyInput(0)));
        assert_eq!(
            Polygon::from_points(&[[0, 0], [1, 1]]),
            Err(FillError::EmptyInput(2))
        );
    }

    #[test]
    fn test_bounds() {
        let poly = Polygon::from_points(&[[1, 1], [5, 5], [5, 1]]).unwrap();
        let bounds = poly.bounds();

        assert_eq!(bounds.min, GridPoint::new(1, 1));
        assert_eq!(bounds.max, GridPoint::new(5, 5));
    }

    #[test]
    fn test_edges_close_the_loop() {
        let poly = Polygon::from_points(&[[0, 0], [4, 0], [4, 4]]).unwrap();
        let edges: Vec<_> = poly.edges().collect();

        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], (GridPoint::new(4, 4), GridPoint::new(0, 0)));
    }
}
