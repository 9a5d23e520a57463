//! Hexasphere Tile Structure
//!
//! Represents an individual tile on the hexasphere with geometry and neighbors.

use glam::DVec3;

use crate::generation::RawTile;
use crate::geometry::GeoCoordinate;

/// A single tile on the hexasphere surface
///
/// Each tile is the region dual to one point of the geodesic mesh:
/// - A stable ID (the index of that point)
/// - A centre on the sphere surface
/// - A boundary polygon with 5 (pentagon) or 6 (hexagon) vertices
/// - Neighbor connectivity, one neighbor per boundary vertex
///
/// Tiles are immutable once built. They are recomputed from the configuration
/// rather than persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Unique identifier for this tile (0 to tile_count-1)
    ///
    /// The same configuration always assigns the same IDs to the same places.
    pub id: usize,

    /// Centre point of the tile on the sphere surface
    pub centre: DVec3,

    /// Vertices defining the tile's boundary polygon
    ///
    /// Ordered counter-clockwise when viewed from outside the sphere.
    /// Consecutive vertices come from mesh faces that share an edge.
    pub boundary: Vec<DVec3>,

    /// Latitude/longitude of the centre
    pub coordinate: GeoCoordinate,

    /// Outward unit normal of the boundary polygon
    pub normal: DVec3,

    /// IDs of adjacent tiles, sorted
    pub neighbors: Vec<usize>,
}

impl Tile {
    /// Attach resolved neighbors to a raw tile
    ///
    /// `neighbors` may come in any order; the tile stores them sorted.
    pub fn from_raw(raw: RawTile, mut neighbors: Vec<usize>) -> Self {
        neighbors.sort_unstable();
        Self {
            id: raw.id,
            centre: raw.centre,
            boundary: raw.boundary,
            coordinate: raw.coordinate,
            normal: raw.normal,
            neighbors,
        }
    }

    /// Get the number of neighboring tiles
    #[inline]
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Check if this tile is a neighbor of another tile
    #[inline]
    pub fn is_neighbor_of(&self, other_tile_id: usize) -> bool {
        self.neighbors.contains(&other_tile_id)
    }

    /// Get the vertex count (5 or 6)
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.boundary.len()
    }

    /// Check if this tile is one of the 12 pentagons
    #[inline]
    pub fn is_pentagon(&self) -> bool {
        self.boundary.len() == 5
    }

    /// Approximate surface area of this tile
    ///
    /// Sums the flat triangles of a fan from the centre to the boundary.
    pub fn approximate_area(&self) -> f64 {
        if self.boundary.len() < 3 {
            return 0.0;
        }

        let n = self.boundary.len();
        (0..n)
            .map(|i| {
                let a = self.boundary[i] - self.centre;
                let b = self.boundary[(i + 1) % n] - self.centre;
                a.cross(b).length() * 0.5
            })
            .sum()
    }

    /// Great circle distance between the centres of two tiles
    pub fn arc_distance_to(&self, other: &Tile, sphere_radius: f64) -> f64 {
        let cos_angle = self.centre.dot(other.centre) / (self.centre.length() * other.centre.length());

        // Clamp to avoid numerical issues with acos
        sphere_radius * cos_angle.clamp(-1.0, 1.0).acos()
    }
}
