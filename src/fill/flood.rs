//! 4-connected flood fill with an explicit work list.
//!
//! Grows a region outward from a seed cell, replacing every 4-connected
//! cell holding the `old` value with `new`. The fill stops at the raster
//! boundary and at any cell holding a different value, so a closed loop of
//! boundary cells (stamped beforehand with [`super::BresenhamLine`])
//! confines the fill to its interior.
//!
//! The worst case region is the whole raster (207 million cells at the
//! default dimensions), so the traversal runs on an explicit stack of
//! pending coordinates instead of call-stack recursion.

use log::debug;

use crate::core::GridPoint;
use crate::raster::Raster;

/// Replace the 4-connected region of `old`-valued cells reachable from
/// `seed` with `new`. Returns the number of cells converted.
///
/// A seed outside the raster, or on a cell not holding `old`, converts
/// nothing. Cells are never revisited: the value change itself blocks
/// re-entry.
pub fn flood_fill_4(raster: &mut Raster, seed: GridPoint, old: u8, new: u8) -> usize {
    // With old == new every converted cell would still match `old` and the
    // fill would walk forever.
    if old == new {
        return 0;
    }

    let mut pending = vec![seed];
    let mut converted = 0;

    while let Some(cell) = pending.pop() {
        if raster.value_at(cell) != Some(old) {
            continue;
        }
        raster.set_value(cell, new);
        converted += 1;
        pending.extend(cell.neighbors_4());
    }

    debug!("flood fill converted {} cells from seed ({}, {})", converted, seed.x, seed.y);
    converted
}
