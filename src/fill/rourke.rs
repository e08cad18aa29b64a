//! Rourke crossing-number point-in-polygon classification and fill.
//!
//! The classifier casts a ray from the query point along the positive x
//! axis and counts boundary crossings; odd parity means inside. A second
//! counter for the negative-direction ray disambiguates the cases a single
//! counter gets wrong: a ray that grazes the boundary produces mismatched
//! left/right parities, which classifies the point as on-edge rather than
//! flipping between inside and outside.
//!
//! The fill driver sweeps every cell in the polygon's bounding box and
//! marks the cells whose center classifies as anything other than outside.

use crate::core::GridPoint;
use crate::error::{FillError, Result};
use crate::raster::Raster;

/// Tolerance for classifying a query point as coincident with a vertex.
const VERTEX_EPS: f64 = 1e-12;

/// Position of a point relative to a polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointClass {
    /// Strictly outside the polygon.
    Outside,
    /// Strictly inside the polygon.
    Inside,
    /// Coincident with a vertex (within [`VERTEX_EPS`]).
    Vertex,
    /// On an edge, away from the vertices.
    Edge,
}

impl PointClass {
    /// Whether the point is covered by the polygon (inside or on the
    /// boundary). This is the fill criterion.
    #[inline]
    pub fn is_covered(self) -> bool {
        !matches!(self, PointClass::Outside)
    }
}

/// Classify a query point `(px, py)` against the polygon given as parallel
/// coordinate arrays.
///
/// The vertices are translated so the query point becomes the origin, then
/// each edge `(v[i-1], v[i])` is tested for straddling the x axis. An edge
/// crossing in the positive-y direction with a positive x intercept bumps
/// the right counter; the mirrored test bumps the left counter. Mismatched
/// parities mean the point sits on an edge; an odd right count means inside.
pub fn classify_point(xs: &[f64], ys: &[f64], px: f64, py: f64) -> PointClass {
    let n = xs.len();
    debug_assert_eq!(n, ys.len());
    if n == 0 {
        return PointClass::Outside;
    }

    let mut r_cross: u64 = 0;
    let mut l_cross: u64 = 0;

    // Previous vertex, relative to the query point; start from the last so
    // the implicit closing edge is the first one tested.
    let mut x1 = xs[n - 1] - px;
    let mut y1 = ys[n - 1] - py;

    for i in 0..n {
        let x0 = xs[i] - px;
        let y0 = ys[i] - py;

        if x0.abs() < VERTEX_EPS && y0.abs() < VERTEX_EPS {
            return PointClass::Vertex;
        }

        // Edge straddles the x axis: test the sign of its x intercept.
        if (y0 > 0.0) != (y1 > 0.0) && (x0 * y1 - x1 * y0) / (y1 - y0) > 0.0 {
            r_cross += 1;
        }
        if (y0 < 0.0) != (y1 < 0.0) && (x0 * y1 - x1 * y0) / (y1 - y0) < 0.0 {
            l_cross += 1;
        }

        x1 = x0;
        y1 = y0;
    }

    if (r_cross & 1) != (l_cross & 1) {
        PointClass::Edge
    } else if r_cross & 1 == 1 {
        PointClass::Inside
    } else {
        PointClass::Outside
    }
}

/// Fill every raster cell whose center the polygon covers.
///
/// The sweep is restricted to the polygon's integer bounding box, with the
/// minima clamped to zero. A covered cell beyond the raster extents is an
/// execution error: the caller's geometry does not fit the grid.
///
/// Returns the number of cells marked.
pub fn fill_polygon_rourke(raster: &mut Raster, xs: &[i64], ys: &[i64]) -> Result<usize> {
    if xs.is_empty() || xs.len() != ys.len() {
        return Err(FillError::execution(
            "rourke",
            format!(
                "inconsistent coordinate arrays ({} x values, {} y values)",
                xs.len(),
                ys.len()
            ),
        ));
    }

    let min_x = xs.iter().copied().min().unwrap_or(0).max(0);
    let max_x = xs.iter().copied().max().unwrap_or(0);
    let min_y = ys.iter().copied().min().unwrap_or(0).max(0);
    let max_y = ys.iter().copied().max().unwrap_or(0);

    let xs_f: Vec<f64> = xs.iter().map(|&v| v as f64).collect();
    let ys_f: Vec<f64> = ys.iter().map(|&v| v as f64).collect();

    let mut marked = 0;
    for x in min_x..=max_x {
        for y in min_y..=max_y {
            if classify_point(&xs_f, &ys_f, x as f64, y as f64).is_covered() {
                if !raster.mark(GridPoint::new(x, y)) {
                    return Err(FillError::execution(
                        "rourke",
                        format!(
                            "cell ({}, {}) lies outside the {}x{} raster",
                            x,
                            y,
                            raster.rows(),
                            raster.cols()
                        ),
                    ));
                }
                marked += 1;
            }
        }
    }

    Ok(marked)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Unit square with corners (0,0) and (4,4).
    fn square() -> (Vec<f64>, Vec<f64>) {
        (vec![0.0, 0.0, 4.0, 4.0], vec![0.0, 4.0, 4.0, 0.0])
    }

    #[test]
    fn test_inside_convex() {
        let (xs, ys) = square();

        assert_eq!(classify_point(&xs, &ys, 2.0, 2.0), PointClass::Inside);
        assert_eq!(classify_point(&xs, &ys, 1.0, 3.0), PointClass::Inside);
    }

    #[test]
    fn test_outside() {
        let (xs, ys) = square();

        assert_eq!(classify_point(&xs, &ys, 5.0, 2.0), PointClass::Outside);
        assert_eq!(classify_point(&xs, &ys, -1.0, -1.0), PointClass::Outside);
        assert_eq!(classify_point(&xs, &ys, 2.0, 7.5), PointClass::Outside);
    }

    #[test]
    fn test_on_vertex() {
        let (xs, ys) = square();

        assert_eq!(classify_point(&xs, &ys, 0.0, 0.0), PointClass::Vertex);
        assert_eq!(classify_point(&xs, &ys, 4.0, 4.0), PointClass::Vertex);
        // Within tolerance still counts as the vertex.
        assert_eq!(classify_point(&xs, &ys, 4.0 + 1e-13, 4.0), PointClass::Vertex);
    }

    #[test]
    fn test_on_edge() {
        let (xs, ys) = square();

        assert_eq!(classify_point(&xs, &ys, 0.0, 2.0), PointClass::Edge);
        assert_eq!(classify_point(&xs, &ys, 2.0, 4.0), PointClass::Edge);
    }

    #[test]
    fn test_triangle_interior_and_exterior() {
        // Triangle (1,1) (5,5) (5,1): covers cells with 1 <= y <= x <= 5.
        let xs = vec![1.0, 5.0, 5.0];
        let ys = vec![1.0, 5.0, 1.0];

        assert_eq!(classify_point(&xs, &ys, 4.0, 2.0), PointClass::Inside);
        assert_eq!(classify_point(&xs, &ys, 2.0, 4.0), PointClass::Outside);
        assert_eq!(classify_point(&xs, &ys, 3.0, 3.0), PointClass::Edge);
    }

    #[test]
    fn test_fill_square() {
        let mut raster = Raster::new(10, 10);
        let marked =
            fill_polygon_rourke(&mut raster, &[1, 1, 5, 5], &[1, 5, 5, 1]).unwrap();

        assert_eq!(marked, 25);
        for x in 0..10 {
            for y in 0..10 {
                let expected = (1..=5).contains(&x) && (1..=5).contains(&y);
                assert_eq!(
                    raster.row(x as usize)[y as usize] == 1,
                    expected,
                    "cell ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_fill_clamps_negative_bounds() {
        // Triangle poking out past the origin; only the in-grid part fills.
        let mut raster = Raster::new(8, 8);
        let marked =
            fill_polygon_rourke(&mut raster, &[-2, 3, 3], &[1, 1, 4]).unwrap();

        assert!(marked > 0);
        assert_eq!(raster.row(3)[1], 1);
    }

    #[test]
    fn test_fill_overflows_raster() {
        let mut raster = Raster::new(4, 4);
        let err = fill_polygon_rourke(&mut raster, &[1, 1, 6, 6], &[1, 3, 3, 1]).unwrap_err();

        assert!(matches!(err, FillError::Execution { algorithm: "rourke", .. }));
    }

    #[test]
    fn test_fill_rejects_empty() {
        let mut raster = Raster::new(4, 4);

        assert!(fill_polygon_rourke(&mut raster, &[], &[]).is_err());
        assert!(fill_polygon_rourke(&mut raster, &[1, 2], &[1]).is_err());
    }
}
