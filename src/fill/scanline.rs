//! Edge-table / active-edge-list scanline polygon fill.
//!
//! The engine sweeps one scanline at a time across the polygon's y range
//! and emits horizontal fill spans:
//!
//! ```text
//! ┌──────────────┐   build    ┌───────────────┐   sweep    ┌───────────┐
//! │ vertex lists │ ─────────► │   EdgeTable   │ ─────────► │ Vec<Span> │
//! │  (xs, ys)    │            │ (y_min bucket │            │ half-open │
//! └──────────────┘            │  per edge)    │            │  x runs   │
//!                             └───────────────┘            └───────────┘
//! ```
//!
//! - **Build**: every non-horizontal edge is recorded once, in the bucket
//!   of its lower endpoint's y. Horizontal edges never intersect a single
//!   scanline meaningfully and are skipped.
//! - **Sweep**: per scanline, edges entering at this y move from the table
//!   into the active list, edges ending here leave it, the list is stably
//!   sorted by current x, and consecutive edges are paired into spans.
//!   An odd active count is an input degeneracy; the last edge is simply
//!   left unpaired for that scanline.
//! - The per-scanline x increment is the edge's inverse slope Δx/Δy.
//!
//! Edges live in owned vectors: each record sits in exactly one table
//! bucket until its scanline arrives, then in the active list until its
//! `y_max` scanline retires it.

use std::cmp::Ordering;

use crate::error::{FillError, Result};

/// One polygon edge while it is being swept.
///
/// `y_min` is implicit: it is the index of the table bucket holding the
/// edge. `x` starts at the x value of the lower endpoint and advances by
/// `slope_den / slope_num` (Δx/Δy) per scanline.
#[derive(Clone, Debug)]
struct Edge {
    /// Scanline at which the edge stops intersecting the sweep.
    y_max: i64,
    /// Current x intersection of the edge with the scanline.
    x: f64,
    /// Slope numerator, Δy of the edge. Never zero: horizontal edges are
    /// skipped at build time.
    slope_num: i64,
    /// Slope denominator, Δx of the edge.
    slope_den: i64,
}

impl Edge {
    /// x increment per scanline.
    #[inline]
    fn slope_inverse(&self) -> f64 {
        self.slope_den as f64 / self.slope_num as f64
    }
}

/// Edge table: one bucket of edges per scanline, keyed by the edge's lower
/// endpoint. Buckets are offset by the polygon's minimum y so vertices
/// with negative coordinates still index safely.
#[derive(Debug)]
struct EdgeTable {
    buckets: Vec<Vec<Edge>>,
    min_y: i64,
    remaining: usize,
}

impl EdgeTable {
    fn new(min_y: i64, max_y: i64) -> Self {
        let height = (max_y - min_y + 1) as usize;
        Self {
            buckets: vec![Vec::new(); height],
            min_y,
            remaining: 0,
        }
    }

    fn add(&mut self, y_min: i64, edge: Edge) {
        self.buckets[(y_min - self.min_y) as usize].push(edge);
        self.remaining += 1;
    }

    /// Scanline of the first non-empty bucket.
    fn first_scanline(&self) -> Option<i64> {
        self.buckets
            .iter()
            .position(|bucket| !bucket.is_empty())
            .map(|idx| self.min_y + idx as i64)
    }

    /// Remove and return every edge entering at scanline `y`.
    fn take_bucket(&mut self, y: i64) -> Vec<Edge> {
        let idx = y - self.min_y;
        if idx < 0 || idx as usize >= self.buckets.len() {
            return Vec::new();
        }
        let bucket = std::mem::take(&mut self.buckets[idx as usize]);
        self.remaining -= bucket.len();
        bucket
    }

    fn is_empty(&self) -> bool {
        self.remaining == 0
    }
}

/// A horizontal fill span: the half-open run of rows `[x_start, x_end)` at
/// column `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    /// Scanline (column) of the span.
    pub y: i64,
    /// First row of the span (ceil of the left edge's x).
    pub x_start: i64,
    /// One past the last row of the span (floor of the right edge's x).
    pub x_end: i64,
}

/// Build the edge table for a polygon given as parallel coordinate arrays.
///
/// Each vertex contributes the neighboring edges that rise from it: for
/// vertex `i` and neighbor `k`, an edge is recorded only when
/// `ys[k] > ys[i]`, so every non-horizontal edge lands exactly once (at its
/// lower endpoint) and horizontal edges are dropped. Duplicate consecutive
/// vertices degenerate to horizontal edges and are dropped the same way.
fn build_edge_table(xs: &[i64], ys: &[i64]) -> EdgeTable {
    let n = ys.len();
    let min_y = ys.iter().copied().min().unwrap_or(0);
    let max_y = ys.iter().copied().max().unwrap_or(0);
    let mut table = EdgeTable::new(min_y, max_y);

    for i in 0..n {
        for k in [(i + n - 1) % n, (i + 1) % n] {
            if ys[k] > ys[i] {
                table.add(
                    ys[i],
                    Edge {
                        y_max: ys[k],
                        x: xs[i] as f64,
                        slope_num: ys[i] - ys[k],
                        slope_den: xs[i] - xs[k],
                    },
                );
            }
        }
    }

    table
}

/// Run the scanline fill and return the emitted spans.
///
/// Fails with [`FillError::Execution`] when the coordinate arrays are empty
/// or of mismatched length. A polygon whose edges are all horizontal yields
/// no spans (and no error).
pub fn fill_polygon_scanline(xs: &[i64], ys: &[i64]) -> Result<Vec<Span>> {
    if xs.is_empty() || xs.len() != ys.len() {
        return Err(FillError::execution(
            "scanline",
            format!(
                "inconsistent coordinate arrays ({} x values, {} y values)",
                xs.len(),
                ys.len()
            ),
        ));
    }

    let mut table = build_edge_table(xs, ys);
    let Some(mut y) = table.first_scanline() else {
        return Ok(Vec::new());
    };

    let mut active: Vec<Edge> = Vec::new();
    let mut spans = Vec::new();

    while !(active.is_empty() && table.is_empty()) {
        // Edges entering at this scanline.
        active.extend(table.take_bucket(y));

        // Edges retiring at this scanline no longer intersect the sweep.
        active.retain(|edge| edge.y_max != y);

        // Stable sort keeps insertion order for equal x, which fixes the
        // pairing when edges meet at a shared vertex.
        active.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));

        for pair in active.chunks(2) {
            if let [left, right] = pair {
                spans.push(Span {
                    y,
                    x_start: left.x.ceil() as i64,
                    x_end: right.x.floor() as i64,
                });
            }
        }

        y += 1;
        for edge in &mut active {
            edge.x += edge.slope_inverse();
        }
    }

    Ok(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_spans() {
        // Square corners (1,1)..(5,5): vertical-in-y edges at x=1 and x=5.
        let spans = fill_polygon_scanline(&[1, 1, 5, 5], &[1, 5, 5, 1]).unwrap();

        assert_eq!(
            spans,
            vec![
                Span { y: 1, x_start: 1, x_end: 5 },
                Span { y: 2, x_start: 1, x_end: 5 },
                Span { y: 3, x_start: 1, x_end: 5 },
                Span { y: 4, x_start: 1, x_end: 5 },
            ]
        );
    }

    #[test]
    fn test_triangle_spans_follow_slope() {
        let spans = fill_polygon_scanline(&[1, 5, 5], &[1, 5, 1]).unwrap();

        assert_eq!(
            spans,
            vec![
                Span { y: 1, x_start: 1, x_end: 5 },
                Span { y: 2, x_start: 2, x_end: 5 },
                Span { y: 3, x_start: 3, x_end: 5 },
                Span { y: 4, x_start: 4, x_end: 5 },
            ]
        );
    }

    #[test]
    fn test_horizontal_edges_skipped() {
        // A flat rectangle degenerated to a line: every edge horizontal.
        let spans = fill_polygon_scanline(&[0, 3, 6], &[2, 2, 2]).unwrap();

        assert!(spans.is_empty());
    }

    #[test]
    fn test_duplicate_vertex_tolerated() {
        // Zero-length edge between the duplicated vertices drops out as a
        // horizontal edge; the rest of the polygon still fills.
        let spans = fill_polygon_scanline(&[1, 1, 5, 5], &[1, 1, 5, 1]).unwrap();

        assert!(!spans.is_empty());
        assert_eq!(spans[0], Span { y: 1, x_start: 1, x_end: 5 });
    }

    #[test]
    fn test_negative_coordinates() {
        // Square straddling the origin; buckets are offset, not absolute.
        let spans = fill_polygon_scanline(&[-2, -2, 2, 2], &[-2, 2, 2, -2]).unwrap();

        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0], Span { y: -2, x_start: -2, x_end: 2 });
        assert_eq!(spans[3], Span { y: 1, x_start: -2, x_end: 2 });
    }

    #[test]
    fn test_sloped_quad_x_advance() {
        // Parallelogram leaning right: both edges advance x by 1 per line.
        let spans = fill_polygon_scanline(&[0, 3, 8, 5], &[0, 3, 3, 0]).unwrap();

        assert_eq!(
            spans,
            vec![
                Span { y: 0, x_start: 0, x_end: 5 },
                Span { y: 1, x_start: 1, x_end: 6 },
                Span { y: 2, x_start: 2, x_end: 7 },
            ]
        );
    }

    #[test]
    fn test_empty_input_is_execution_error() {
        let err = fill_polygon_scanline(&[], &[]).unwrap_err();

        assert!(matches!(err, FillError::Execution { algorithm: "scanline", .. }));
    }

    #[test]
    fn test_mismatched_arrays() {
        assert!(fill_polygon_scanline(&[1, 2, 3], &[1, 2]).is_err());
    }
}
