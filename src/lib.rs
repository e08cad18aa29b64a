//! # chitra-fill
//!
//! 2D polygon rasterization into binary occupancy grids, with four
//! interchangeable fill algorithms.
//!
//! ## Overview
//!
//! Given an ordered vertex list, the engine produces a fixed-resolution
//! raster of `{0, 1}` occupancy values (default 19200×10800) and reports
//! how long the fill took:
//!
//! - **Scanline** — edge-table / active-edge-list sweep emitting horizontal
//!   spans; fast, right-open boundary convention
//! - **Rourke** — crossing-number point-in-polygon test per bounding-box
//!   cell; inclusive of edges and vertices
//! - **Flood** — Bresenham boundary rasterization plus 4-connected region
//!   growth from a seed
//! - **Fast** — delegation to an injected external rasterizer
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chitra_fill::{FillAlgorithm, FillEngine, RasterConfig};
//!
//! let engine = FillEngine::with_config(RasterConfig::with_dims(100, 100));
//! let square = [[10, 10], [10, 50], [50, 50], [50, 10]];
//!
//! let outcome = engine.fill(&square, FillAlgorithm::Rourke, None)?;
//! println!(
//!     "filled {} cells in {:.6}s",
//!     outcome.raster.count_occupied(),
//!     outcome.elapsed_seconds
//! );
//! ```
//!
//! ## Coordinate Convention
//!
//! A point's `x` component indexes raster rows and `y` indexes raster
//! columns, matching the row-major cell layout.
//!
//! ## Architecture
//!
//! ```text
//! caller ──► FillEngine ──► Polygon::split_axes ──► chosen engine ──► Raster
//!                │                                      │
//!                └── timing, span materialization ◄─────┘
//! ```
//!
//! Every call allocates its own raster and edge structures; nothing is
//! shared across calls, so concurrent fills only share immutable input.

#![warn(missing_docs)]

// Core geometry types
pub mod core;

// Occupancy raster storage
pub mod raster;

// Fill algorithm engines
pub mod fill;

// Configuration
pub mod config;

// Error types
pub mod error;

// Orchestration
pub mod engine;

// Re-export commonly used types
pub use crate::core::{GridBounds, GridPoint, Polygon};
pub use config::{ConfigError, RasterConfig};
pub use engine::FillEngine;
pub use error::{FillError, Result};
pub use fill::{BresenhamLine, FillAlgorithm, PointClass, PolygonRasterizer, Span};
pub use raster::{Raster, FREE, OCCUPIED};

/// Result of one fill call: the populated raster and the wall-clock time
/// the fill phase took.
#[derive(Clone, Debug)]
pub struct FillOutcome {
    /// The occupancy raster; ownership transfers to the caller.
    pub raster: Raster,
    /// Elapsed wall-clock seconds, coordinate adaptation through algorithm
    /// completion.
    pub elapsed_seconds: f64,
}
