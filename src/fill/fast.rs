//! Adapter for an external polygon rasterizer.
//!
//! The `fast` fill path owns no algorithmic logic: an external collaborator
//! computes the interior cells and this module only writes the returned
//! indices into the raster. The collaborator is injected through the
//! [`PolygonRasterizer`] trait so callers choose the implementation (and
//! tests substitute a double).

use crate::core::GridPoint;
use crate::error::{FillError, Result};
use crate::raster::Raster;

/// Contract for an external polygon rasterizer.
///
/// Given the polygon's parallel row/column coordinate arrays, the
/// implementation returns parallel arrays of the row and column indices of
/// every interior cell.
pub trait PolygonRasterizer {
    /// Compute the interior cell indices of the polygon.
    fn rasterize(&self, rows: &[i64], cols: &[i64]) -> Result<(Vec<usize>, Vec<usize>)>;
}

/// Mark the collaborator's returned index pairs as occupied.
///
/// Mismatched index-array lengths or an index beyond the raster extents
/// violate the collaborator contract and fail the call.
///
/// Returns the number of cells marked.
pub fn apply_rasterized(raster: &mut Raster, rows: &[usize], cols: &[usize]) -> Result<usize> {
    if rows.len() != cols.len() {
        return Err(FillError::execution(
            "fast",
            format!(
                "rasterizer returned mismatched index arrays ({} rows, {} cols)",
                rows.len(),
                cols.len()
            ),
        ));
    }

    for (&x, &y) in rows.iter().zip(cols.iter()) {
        let cell = GridPoint::new(x as i64, y as i64);
        if !raster.mark(cell) {
            return Err(FillError::execution(
                "fast",
                format!(
                    "rasterizer index ({}, {}) lies outside the {}x{} raster",
                    x,
                    y,
                    raster.rows(),
                    raster.cols()
                ),
            ));
        }
    }

    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::OCCUPIED;

    #[test]
    fn test_apply_marks_indices() {
        let mut raster = Raster::new(6, 6);
        let marked = apply_rasterized(&mut raster, &[1, 2, 3], &[4, 4, 4]).unwrap();

        assert_eq!(marked, 3);
        assert_eq!(raster.row(2)[4], OCCUPIED);
        assert_eq!(raster.count_occupied(), 3);
    }

    #[test]
    fn test_apply_rejects_mismatched_lengths() {
        let mut raster = Raster::new(6, 6);
        let err = apply_rasterized(&mut raster, &[1, 2], &[1]).unwrap_err();

        assert!(matches!(err, FillError::Execution { algorithm: "fast", .. }));
    }

    #[test]
    fn test_apply_rejects_out_of_range_index() {
        let mut raster = Raster::new(6, 6);

        assert!(apply_rasterized(&mut raster, &[6], &[0]).is_err());
        assert!(apply_rasterized(&mut raster, &[0], &[6]).is_err());
    }
}
