//! Edge frequency classification for boundary detection

use std::collections::HashMap;

use crate::spatial::tile::{Edge, Tile};

/// Occurrence counts for every directed edge across a tile set
///
/// Each tile contributes its deduplicated set of exposed edges (the four
/// borders and their reversals), so the count for an edge value is the number
/// of tiles able to present it on some side. An edge counted once has no
/// possible partner and must lie on the outer border of the assembled image;
/// an edge counted twice joins one specific interior pair. Built once per
/// solve and read-only thereafter.
pub struct EdgeIndex {
    counts: HashMap<Edge, usize>,
}

impl EdgeIndex {
    /// Aggregate exposure counts over all tiles
    pub fn build(tiles: &[Tile]) -> Self {
        let mut counts = HashMap::new();
        for tile in tiles {
            for edge in tile.exposed_edges() {
                *counts.entry(edge).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Number of tiles exposing this edge value in any orientation
    pub fn count(&self, edge: &Edge) -> usize {
        self.counts.get(edge).copied().unwrap_or(0)
    }

    /// True when no other tile can supply a matching edge
    pub fn is_boundary(&self, edge: &Edge) -> bool {
        self.count(edge) == 1
    }

    /// True when the edge pairs with exactly one other tile
    pub fn is_interior(&self, edge: &Edge) -> bool {
        self.count(edge) == 2
    }
}
