//! Summary of a produced tile tree

use std::collections::BTreeMap;

use serde::Serialize;

/// What verification found in a tile tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TilesetReport {
    /// Tile count per zoom level
    pub tiles_per_zoom: BTreeMap<u32, usize>,
    /// Sum of all tile file sizes
    pub total_bytes: u64,
    /// Requested zoom levels that produced no tiles
    pub missing_zooms: Vec<u32>,
}

impl TilesetReport {
    pub fn total_tiles(&self) -> usize {
        self.tiles_per_zoom.values().sum()
    }

    pub fn record_tile(&mut self, zoom: u32, bytes: u64) {
        *self.tiles_per_zoom.entry(zoom).or_insert(0) += 1;
        self.total_bytes += bytes;
    }
}
