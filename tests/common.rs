//! Shared helpers for the fill integration tests.

#![allow(dead_code)]

use chitra_fill::fill::classify_point;
use chitra_fill::{PolygonRasterizer, Raster, Result};

/// Unit square with corners (1,1) and (5,5).
pub const SQUARE: [[i64; 2]; 4] = [[1, 1], [1, 5], [5, 5], [5, 1]];

/// Right triangle with the hypotenuse on the row = column diagonal.
pub const TRIANGLE: [[i64; 2]; 3] = [[1, 1], [5, 5], [5, 1]];

/// Stand-in for the external rasterizer: classifies every bounding-box
/// cell with the crossing-number test and returns the covered indices.
/// Matches the collaborator contract (parallel row/column index arrays).
pub struct BoundingBoxRasterizer;

impl PolygonRasterizer for BoundingBoxRasterizer {
    fn rasterize(&self, rows: &[i64], cols: &[i64]) -> Result<(Vec<usize>, Vec<usize>)> {
        let rows_f: Vec<f64> = rows.iter().map(|&v| v as f64).collect();
        let cols_f: Vec<f64> = cols.iter().map(|&v| v as f64).collect();

        let min_r = rows.iter().copied().min().unwrap_or(0).max(0);
        let max_r = rows.iter().copied().max().unwrap_or(0);
        let min_c = cols.iter().copied().min().unwrap_or(0).max(0);
        let max_c = cols.iter().copied().max().unwrap_or(0);

        let mut row_idx = Vec::new();
        let mut col_idx = Vec::new();
        for r in min_r..=max_r {
            for c in min_c..=max_c {
                if classify_point(&rows_f, &cols_f, r as f64, c as f64).is_covered() {
                    row_idx.push(r as usize);
                    col_idx.push(c as usize);
                }
            }
        }
        Ok((row_idx, col_idx))
    }
}

/// Assert that exactly the cells with `x` and `y` both in `lo..=hi` are
/// occupied, everything else free.
pub fn assert_square_block(raster: &Raster, lo: usize, hi: usize) {
    for x in 0..raster.rows() {
        for y in 0..raster.cols() {
            let expected = (lo..=hi).contains(&x) && (lo..=hi).contains(&y);
            assert_eq!(
                raster.row(x)[y] == 1,
                expected,
                "cell ({x}, {y}) expected occupied={expected}"
            );
        }
    }
}
