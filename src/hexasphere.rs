//! Hexasphere main structure

use glam::DVec3;
use std::collections::HashSet;
use std::time::Instant;

use crate::config::HexasphereConfig;
use crate::error::Result;
use crate::generation::{generate_raw_tiles_with_progress, resolve_neighbors, Progress, TileNeighborMap};
use crate::spatial::SpatialIndex;
use crate::tile::Tile;

/// A complete hexasphere: the fixed tile set plus its neighbor graph
///
/// Everything is computed once in `build` and never changes afterwards, so a
/// hexasphere can be shared across threads (typically behind an `Arc`).
///
/// # Examples
///
/// ```
/// use hexasphere_life::*;
///
/// let config = HexasphereConfig::new(1.0, 2, 0.9).unwrap();
/// let sphere = Hexasphere::build(config).unwrap();
///
/// assert_eq!(sphere.tile_count(), 42);
/// assert_eq!(sphere.pentagon_count(), 12);
///
/// if let Some(tile) = sphere.get_tile(0) {
///     println!("Tile 0 at {:?} has {} neighbors", tile.coordinate, tile.neighbor_count());
/// }
/// ```
#[derive(Clone)]
pub struct Hexasphere {
    /// Configuration used to build this hexasphere
    config: HexasphereConfig,

    /// All tiles, indexed by tile ID
    tiles: Vec<Tile>,

    /// Tile ID → neighbor IDs
    neighbor_map: TileNeighborMap,

    /// Spatial index over tile centres
    spatial_index: SpatialIndex,
}

impl Hexasphere {
    /// Build a hexasphere from a configuration
    ///
    /// Subdivides the icosahedron, synthesizes one tile per mesh point and
    /// resolves every tile's neighbors.
    ///
    /// # Arguments
    ///
    /// * `config` - Radius, division count and hex size
    ///
    /// # Returns
    ///
    /// `Result<Hexasphere>` - The complete tile set, or the first failure
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` if the configuration is out of range
    /// - `TopologyViolation` if a tile's faces cannot be chained into a fan
    /// - `NeighborCountMismatch` if a tile does not resolve one neighbor per side
    pub fn build(config: HexasphereConfig) -> Result<Self> {
        Self::build_inner(config, &mut Progress::silent())
    }

    /// Build a hexasphere, reporting milestones to `status` as they happen
    ///
    /// The callback only observes; it is not retained after this call returns.
    ///
    /// # Example
    ///
    /// ```
    /// use hexasphere_life::*;
    ///
    /// let mut messages = Vec::new();
    /// let config = HexasphereConfig::new(1.0, 1, 1.0).unwrap();
    /// let sphere = Hexasphere::build_with_status(config, &mut |msg: &str| {
    ///     messages.push(msg.to_string());
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(sphere.tile_count(), 12);
    /// assert!(!messages.is_empty());
    /// ```
    pub fn build_with_status(config: HexasphereConfig, status: &mut dyn FnMut(&str)) -> Result<Self> {
        Self::build_inner(config, &mut Progress::with_status(status))
    }

    fn build_inner(config: HexasphereConfig, progress: &mut Progress<'_>) -> Result<Self> {
        let start = Instant::now();
        progress.info(format!(
            "Building hexasphere: {} divisions, radius {}, hex size {}",
            config.divisions, config.radius, config.hex_size
        ));

        // Generate raw tiles (geometry only, no neighbors)
        let raw_tiles = generate_raw_tiles_with_progress(&config, progress)?;

        // Build spatial index over the tile centres
        let centres: Vec<DVec3> = raw_tiles.iter().map(|t| t.centre).collect();
        let spatial_index = SpatialIndex::new(&centres);

        // Resolve each tile's neighbors from the index
        progress.info(format!(
            "Calculating neighborhoods for all {} tiles",
            raw_tiles.len()
        ));
        let neighbor_map = resolve_neighbors(&raw_tiles, &spatial_index)?;

        let tiles: Vec<Tile> = raw_tiles
            .into_iter()
            .map(|raw| {
                let neighbors = neighbor_map.get(raw.id).to_vec();
                Tile::from_raw(raw, neighbors)
            })
            .collect();

        let vertex_count: usize = tiles.iter().map(|t| t.vertex_count()).sum();
        progress.info(format!(
            "Computation time {:.3?} for {} divisions yielding {} tiles ({} boundary vertices)",
            start.elapsed(),
            config.divisions,
            tiles.len(),
            vertex_count
        ));

        Ok(Self {
            config,
            tiles,
            neighbor_map,
            spatial_index,
        })
    }

    /// Get the configuration used to build this hexasphere
    #[inline]
    pub fn config(&self) -> &HexasphereConfig {
        &self.config
    }

    /// Get the sphere radius
    #[inline]
    pub fn radius(&self) -> f64 {
        self.config.radius
    }

    /// Get the number of tiles
    #[inline]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Get the number of pentagon tiles (always 12)
    pub fn pentagon_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_pentagon()).count()
    }

    /// Get a tile by ID
    ///
    /// Returns `None` if the tile ID is out of bounds.
    #[inline]
    pub fn get_tile(&self, id: usize) -> Option<&Tile> {
        self.tiles.get(id)
    }

    /// Get all tiles as a slice, in tile ID order
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Get the neighbor map
    #[inline]
    pub fn neighbor_map(&self) -> &TileNeighborMap {
        &self.neighbor_map
    }

    /// Get neighbor IDs for a tile
    ///
    /// Returns an empty slice if the tile ID is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// # use hexasphere_life::*;
    /// # let sphere = Hexasphere::build(HexasphereConfig::new(1.0, 2, 1.0).unwrap()).unwrap();
    /// let neighbors = sphere.neighbors(0);
    /// assert_eq!(neighbors.len(), sphere.get_tile(0).unwrap().vertex_count());
    /// ```
    #[inline]
    pub fn neighbors(&self, tile_id: usize) -> &[usize] {
        self.neighbor_map.get(tile_id)
    }

    /// Find the tile whose centre is nearest to a position
    ///
    /// Useful for turning a raycast hit into a tile ID.
    pub fn find_tile_at(&self, position: DVec3) -> usize {
        self.spatial_index.find_nearest(position)
    }

    /// Find tiles within a given hop count from a centre tile (BFS)
    ///
    /// Returns the IDs reachable in at most `hops` steps, including the centre
    /// tile, sorted. Returns an empty vec if `centre_id` is invalid.
    pub fn find_tiles_within_hops(&self, centre_id: usize, hops: usize) -> Vec<usize> {
        if centre_id >= self.tiles.len() {
            return vec![];
        }

        let mut visited = HashSet::new();
        let mut current = vec![centre_id];
        visited.insert(centre_id);

        for _ in 0..hops {
            let mut next = Vec::new();
            for &tile_id in &current {
                for &neighbor in self.neighbors(tile_id) {
                    if visited.insert(neighbor) {
                        next.push(neighbor);
                    }
                }
            }
            current = next;
        }

        let mut result: Vec<usize> = visited.into_iter().collect();
        result.sort_unstable();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::expected_tile_count;

    fn sphere(radius: f64, divisions: usize, hex_size: f64) -> Hexasphere {
        Hexasphere::build(HexasphereConfig::new(radius, divisions, hex_size).unwrap()).unwrap()
    }

    #[test]
    fn test_tile_count_law() {
        for d in 1..=8 {
            let s = sphere(1.0, d, 1.0);
            assert_eq!(s.tile_count(), expected_tile_count(d));
            assert_eq!(s.pentagon_count(), 12);
            assert!(s
                .tiles()
                .iter()
                .all(|t| t.is_pentagon() || t.vertex_count() == 6));
        }
    }

    #[test]
    fn test_radius_law() {
        for radius in [0.5, 1.0, 6371.0] {
            let s = sphere(radius, 4, 0.8);
            let tolerance = 1e-9 * radius;
            for tile in s.tiles() {
                assert!((tile.centre.length() - radius).abs() < tolerance);
                for v in &tile.boundary {
                    assert!((v.length() - radius).abs() < tolerance);
                }
            }
        }
    }

    #[test]
    fn test_neighbor_cardinality_and_symmetry() {
        let s = sphere(1.0, 6, 1.0);
        for tile in s.tiles() {
            assert_eq!(tile.neighbor_count(), tile.vertex_count());
            assert!(!tile.is_neighbor_of(tile.id));
            for &n in &tile.neighbors {
                assert!(s.neighbors(n).contains(&tile.id), "{} -> {} not mutual", tile.id, n);
            }
        }
        assert!(s.neighbor_map().is_symmetric());
    }

    #[test]
    fn test_nearest_centres_are_mesh_neighbors() {
        use crate::mesh::GeodesicMesh;
        use std::collections::BTreeSet;

        for d in [1, 2, 3, 5, 8, 16] {
            let mesh = GeodesicMesh::build(d).unwrap();
            let mut expected = vec![BTreeSet::new(); mesh.point_count()];
            for face in mesh.faces() {
                for &corner in &face.corners {
                    for &other in &face.corners {
                        if other != corner {
                            expected[corner].insert(other);
                        }
                    }
                }
            }

            let s = sphere(1.0, d, 1.0);
            for (id, edges) in expected.iter().enumerate() {
                let resolved: BTreeSet<usize> = s.neighbors(id).iter().copied().collect();
                assert_eq!(&resolved, edges, "divisions {}, tile {}", d, id);
            }
        }
    }

    #[test]
    fn test_boundary_winding_is_simple_and_outward() {
        let s = sphere(2.0, 5, 0.9);
        for tile in s.tiles() {
            let n = tile.boundary.len();
            let outward = tile.centre.normalize();
            assert!(tile.normal.dot(outward) > 0.0);

            // Every consecutive edge turns the same way around the centre,
            // which rules out self-intersection for a polygon around a point
            for i in 0..n {
                let a = tile.boundary[i] - tile.centre;
                let b = tile.boundary[(i + 1) % n] - tile.centre;
                assert!(a.cross(b).dot(outward) > 0.0, "tile {} edge {}", tile.id, i);
            }
        }
    }

    #[test]
    fn test_pentagons_are_icosahedron_vertices() {
        let s = sphere(1.0, 3, 1.0);
        // The 12 icosahedron corners are registered first
        for tile in &s.tiles()[..12] {
            assert!(tile.is_pentagon());
        }
        assert!(s.tiles()[12..].iter().all(|t| !t.is_pentagon()));
    }

    #[test]
    fn test_single_division_scenario() {
        let s = sphere(1.0, 1, 1.0);
        assert_eq!(s.tile_count(), 12);
        for tile in s.tiles() {
            assert!(tile.is_pentagon());
            assert_eq!(tile.neighbor_count(), 5);
            assert!((tile.centre.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_get_tile() {
        let s = sphere(1.0, 2, 1.0);
        assert!(s.get_tile(0).is_some());
        assert!(s.get_tile(s.tile_count()).is_none());
        assert!(s.neighbors(s.tile_count()).is_empty());
    }

    #[test]
    fn test_find_tile_at() {
        let s = sphere(3.0, 4, 1.0);
        for tile in s.tiles() {
            assert_eq!(s.find_tile_at(tile.centre), tile.id);
        }
    }

    #[test]
    fn test_find_tiles_within_hops() {
        let s = sphere(1.0, 4, 1.0);

        assert_eq!(s.find_tiles_within_hops(20, 0), vec![20]);

        let r1 = s.find_tiles_within_hops(20, 1);
        assert_eq!(r1.len(), 1 + s.neighbors(20).len());

        let r2 = s.find_tiles_within_hops(20, 2);
        assert!(r2.len() > r1.len());

        assert!(s.find_tiles_within_hops(999_999, 3).is_empty());
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = sphere(1.0, 4, 0.9);
        let b = sphere(1.0, 4, 0.9);
        assert_eq!(a.tiles(), b.tiles());
    }

    #[test]
    fn test_hex_size_does_not_change_topology() {
        let full = sphere(1.0, 4, 1.0);
        let gapped = sphere(1.0, 4, 0.3);
        assert_eq!(full.neighbor_map(), gapped.neighbor_map());
        for (a, b) in full.tiles().iter().zip(gapped.tiles()) {
            assert!(b.approximate_area() < a.approximate_area());
        }
    }

    #[test]
    fn test_status_callback_reports_progress() {
        let mut messages: Vec<String> = Vec::new();
        let config = HexasphereConfig::new(1.0, 2, 1.0).unwrap();
        Hexasphere::build_with_status(config, &mut |msg: &str| messages.push(msg.to_string())).unwrap();

        assert!(messages.iter().any(|m| m.starts_with("Starting computation of face 1 of 20")));
        assert!(messages.iter().any(|m| m.contains("Calculating neighborhoods for all 42 tiles")));
        assert!(messages.last().unwrap().contains("yielding 42 tiles"));
    }
}
