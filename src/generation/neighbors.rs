//! Tile neighbor resolution
//!
//! On a geodesic hexasphere a tile's true neighbors are always its nearest
//! centres, so each tile asks the KD-tree for one more centre than it has
//! boundary vertices and drops itself from the answer.

use super::RawTile;
use crate::error::{HexasphereError, Result};
use crate::spatial::SpatialIndex;

/// Tile ID → neighbor tile IDs, fixed once built
///
/// Neighbor lists are sorted for deterministic ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileNeighborMap {
    neighbors: Vec<Vec<usize>>,
}

impl TileNeighborMap {
    /// Wrap per-tile neighbor lists, indexed by tile ID
    pub fn new(mut neighbors: Vec<Vec<usize>>) -> Self {
        for list in neighbors.iter_mut() {
            list.sort_unstable();
        }
        Self { neighbors }
    }

    /// Neighbors of a tile, or an empty slice for an unknown ID
    pub fn get(&self, tile: usize) -> &[usize] {
        self.neighbors.get(tile).map(|n| n.as_slice()).unwrap_or(&[])
    }

    /// Number of tiles covered
    #[inline]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Check if the map covers no tiles
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Iterate over `(tile_id, neighbors)` in tile order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> {
        self.neighbors
            .iter()
            .enumerate()
            .map(|(id, n)| (id, n.as_slice()))
    }

    /// Check that every neighbor relationship holds in both directions
    pub fn is_symmetric(&self) -> bool {
        self.iter()
            .all(|(id, neighbors)| neighbors.iter().all(|&n| self.get(n).contains(&id)))
    }
}

/// Resolve the neighbor map for a set of tiles
///
/// `index` must have been built from the tile centres in tile order.
///
/// # Errors
///
/// `NeighborCountMismatch` when a tile does not end up with exactly one
/// neighbor per boundary vertex, which happens when the mesh is degenerate.
pub fn resolve_neighbors(tiles: &[RawTile], index: &SpatialIndex) -> Result<TileNeighborMap> {
    let neighbors = tiles
        .iter()
        .map(|tile| {
            let expected = tile.boundary.len();
            let found: Vec<usize> = index
                .nearest_n(tile.centre, expected + 1)
                .into_iter()
                .filter(|&id| id != tile.id)
                .take(expected)
                .collect();

            if found.len() != expected {
                return Err(HexasphereError::NeighborCountMismatch {
                    tile: tile.id,
                    expected,
                    found: found.len(),
                });
            }
            Ok(found)
        })
        .collect::<Result<Vec<Vec<usize>>>>()?;

    Ok(TileNeighborMap::new(neighbors))
}
