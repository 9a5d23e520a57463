//! Spatial indexing over tile centres
//!
//! Backs both neighbor resolution during construction and position-to-tile
//! lookups afterwards.

use glam::DVec3;
use kiddo::immutable::float::kdtree::ImmutableKdTree;
use kiddo::SquaredEuclidean;
use std::num::NonZeroUsize;

/// Wrapper around KD-tree for spatial queries
///
/// # Performance
///
/// - Construction: O(n log n)
/// - Nearest query: O(log n)
/// - k-nearest query: O(k log n)
#[derive(Clone)]
pub struct SpatialIndex {
    tree: ImmutableKdTree<f64, usize, 3, 32>,
    len: usize,
}

impl SpatialIndex {
    /// Build spatial index from tile centres
    ///
    /// # Arguments
    ///
    /// * `centres` - Tile centres in tile ID order
    ///
    /// # Returns
    ///
    /// An index whose query results are positions in `centres`, which are the
    /// tile IDs when the slice is in tile order.
    ///
    /// # Example
    ///
    /// ```
    /// use hexasphere_life::{DVec3, SpatialIndex};
    ///
    /// let centres = vec![
    ///     DVec3::new(1.0, 0.0, 0.0),
    ///     DVec3::new(0.0, 1.0, 0.0),
    ///     DVec3::new(0.0, 0.0, 1.0),
    /// ];
    ///
    /// let index = SpatialIndex::new(&centres);
    /// let tile_id = index.find_nearest(DVec3::new(1.0, 0.1, 0.0));
    /// assert_eq!(tile_id, 0); // Closest to first centre
    /// ```
    pub fn new(centres: &[DVec3]) -> Self {
        let points: Vec<[f64; 3]> = centres.iter().map(|c| c.to_array()).collect();

        Self {
            tree: ImmutableKdTree::new_from_slice(&points),
            len: points.len(),
        }
    }

    /// Number of indexed centres
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the index is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Find the index of the centre nearest to a position
    pub fn find_nearest(&self, position: DVec3) -> usize {
        let result = self.tree.nearest_one::<SquaredEuclidean>(&position.to_array());
        result.item
    }

    /// Find the `count` centres nearest to a position, closest first
    ///
    /// Returns fewer than `count` items only when the index holds fewer centres.
    pub fn nearest_n(&self, position: DVec3, count: usize) -> Vec<usize> {
        let Some(count) = NonZeroUsize::new(count) else {
            return Vec::new();
        };
        self.tree
            .nearest_n::<SquaredEuclidean>(&position.to_array(), count)
            .into_iter()
            .map(|neighbour| neighbour.item)
            .collect()
    }
}
