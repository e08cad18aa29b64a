//! Fill algorithm engines.
//!
//! Four interchangeable strategies produce the same kind of output — an
//! occupancy raster — with different performance and edge-case trade-offs:
//!
//! | Strategy | Module | Approach |
//! |----------|--------|----------|
//! | [`FillAlgorithm::Scanline`] | [`scanline`] | edge table + active edge list, emits spans |
//! | [`FillAlgorithm::Rourke`] | [`rourke`] | crossing-number test per bounding-box cell |
//! | [`FillAlgorithm::Flood`] | [`flood`] | Bresenham boundary + 4-connected region growth |
//! | [`FillAlgorithm::Fast`] | [`fast`] | delegation to an external rasterizer |
//!
//! The engines are free functions over coordinate arrays and a raster;
//! [`crate::FillEngine`] selects among them and owns timing and
//! materialization.

use std::fmt;
use std::str::FromStr;

use crate::error::FillError;

pub mod bresenham;
pub mod fast;
pub mod flood;
pub mod rourke;
pub mod scanline;

pub use bresenham::BresenhamLine;
pub use fast::{apply_rasterized, PolygonRasterizer};
pub use flood::flood_fill_4;
pub use rourke::{classify_point, fill_polygon_rourke, PointClass};
pub use scanline::{fill_polygon_scanline, Span};

/// The fill strategy to run.
///
/// A closed enumeration: adding or removing a strategy is a compile-time
/// checked change everywhere the engine dispatches on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FillAlgorithm {
    /// Edge-table scanline fill.
    Scanline,
    /// Crossing-number point-in-polygon sweep.
    Rourke,
    /// External rasterizer collaborator.
    Fast,
    /// Boundary rasterization + 4-connected flood fill.
    Flood,
}

impl FillAlgorithm {
    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            FillAlgorithm::Scanline => "scanline",
            FillAlgorithm::Rourke => "rourke",
            FillAlgorithm::Fast => "fast",
            FillAlgorithm::Flood => "flood",
        }
    }
}

impl fmt::Display for FillAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FillAlgorithm {
    type Err = FillError;

    fn from_str(name: &str) -> Result<Self, FillError> {
        match name {
            "scanline" => Ok(FillAlgorithm::Scanline),
            "rourke" => Ok(FillAlgorithm::Rourke),
            "fast" => Ok(FillAlgorithm::Fast),
            "flood" => Ok(FillAlgorithm::Flood),
            other => Err(FillError::InvalidAlgorithm(other.to_string())),
        }
    }
}
