//! Core geometry types shared by every fill strategy.
//!
//! ## Coordinate convention
//!
//! The crate uses a single convention throughout: a point's `x` component
//! indexes raster **rows** and its `y` component indexes raster **columns**,
//! matching the row-major occupancy array. All types here are plain data;
//! the algorithms live under [`crate::fill`].
//!
//! - [`GridPoint`]: integer cell indices
//! - [`GridBounds`]: integer axis-aligned bounding box
//! - [`Polygon`]: validated, implicitly closed vertex list

mod bounds;
mod point;
mod polygon;

pub use bounds::GridBounds;
pub use point::GridPoint;
pub use polygon::Polygon;
