//! XYZ tile addressing
//!
//! Web Mercator quad-tree with the origin at the north-west corner: at zoom
//! `z` the grid is `2^z` tiles wide and tall, `y = 0` is the northern row.

/// Tiles along one axis at `zoom`, `None` when it does not fit in a `u64`
pub fn tiles_per_axis(zoom: u32) -> Option<u64> {
    1u64.checked_shl(zoom)
}

/// Whether `(x, y)` is a valid address at `zoom`
pub fn is_addressable(zoom: u32, x: u64, y: u64) -> bool {
    match tiles_per_axis(zoom) {
        Some(n) => x < n && y < n,
        None => true,
    }
}

/// Tiles in a full quad-tree level (`4^zoom`)
#[cfg(test)]
pub(crate) fn quadtree_tile_count(zoom: u32) -> Option<u64> {
    tiles_per_axis(zoom).and_then(|n| n.checked_mul(n))
}
