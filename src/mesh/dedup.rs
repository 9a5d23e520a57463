//! Point deduplication keyed on quantized coordinates
//!
//! Two adjacent icosahedron faces interpolate their shared edge independently,
//! and not always in the same direction, so the "same" point can come out a
//! few ulps apart. Points are bucketed on a grid whose cell size equals the
//! tolerance; a lookup probes the 27 cells around the query so a match is
//! found even when the two copies straddle a cell boundary.

use glam::DVec3;
use std::collections::HashMap;

/// Distance, in icosahedron units, below which two points are the same point
///
/// The closest distinct points at the maximum division count are several
/// units apart, while interpolation drift stays around 1e-12.
pub const DEDUP_TOLERANCE: f64 = 1e-6;

type CellKey = [i64; 3];

/// Arena of unique mesh points; a point's ID is its index
#[derive(Debug, Clone)]
pub struct PointRegistry {
    tolerance: f64,
    positions: Vec<DVec3>,
    cells: HashMap<CellKey, Vec<usize>>,
}

impl PointRegistry {
    /// Create an empty registry with the given merge tolerance
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            positions: Vec::new(),
            cells: HashMap::new(),
        }
    }

    /// Create an empty registry with room for `capacity` points
    pub fn with_capacity(tolerance: f64, capacity: usize) -> Self {
        Self {
            tolerance,
            positions: Vec::with_capacity(capacity),
            cells: HashMap::with_capacity(capacity),
        }
    }

    fn cell_of(&self, position: DVec3) -> CellKey {
        let scaled = position / self.tolerance;
        [
            scaled.x.floor() as i64,
            scaled.y.floor() as i64,
            scaled.z.floor() as i64,
        ]
    }

    /// Find an existing point within tolerance of `position`
    pub fn find(&self, position: DVec3) -> Option<usize> {
        let [cx, cy, cz] = self.cell_of(position);
        let tolerance_sq = self.tolerance * self.tolerance;

        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let Some(ids) = self.cells.get(&[cx + dx, cy + dy, cz + dz]) else {
                        continue;
                    };
                    if let Some(&id) = ids
                        .iter()
                        .find(|&&id| self.positions[id].distance_squared(position) <= tolerance_sq)
                    {
                        return Some(id);
                    }
                }
            }
        }
        None
    }

    /// Return the ID of the point at `position`, creating it if it does not exist yet
    pub fn find_or_insert(&mut self, position: DVec3) -> usize {
        if let Some(id) = self.find(position) {
            return id;
        }

        let id = self.positions.len();
        self.positions.push(position);
        let key = self.cell_of(position);
        self.cells.entry(key).or_default().push(id);
        id
    }

    /// Position of a registered point
    #[inline]
    pub fn position(&self, id: usize) -> DVec3 {
        self.positions[id]
    }

    /// Number of unique points
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if no points have been registered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Consume the registry, keeping positions in ID order
    pub fn into_positions(self) -> Vec<DVec3> {
        self.positions
    }
}
