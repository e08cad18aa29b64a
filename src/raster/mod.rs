//! Occupancy raster storage.
//!
//! The raster is the output of every fill call: a fixed-size binary grid
//! where `1` marks cells covered by the polygon. Cell `(x, y)` reads as
//! row `x`, column `y`; see [`crate::core`] for the convention.

mod storage;

pub use storage::{Raster, FREE, OCCUPIED};
