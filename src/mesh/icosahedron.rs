//! Base icosahedron the geodesic mesh is subdivided from

use glam::DVec3;

/// Golden ratio approximation the vertex table is built from
pub const TAO: f64 = 1.61803399;

/// Scale of the raw vertex table
///
/// Subdivision happens at this scale and points are projected to the target
/// radius afterwards, so the deduplication tolerance is expressed in these units.
pub const SCALE: f64 = 1000.0;

/// The 12 icosahedron vertices; each one becomes a pentagon tile
pub const VERTICES: [[f64; 3]; 12] = [
    [SCALE, TAO * SCALE, 0.0],
    [-SCALE, TAO * SCALE, 0.0],
    [SCALE, -TAO * SCALE, 0.0],
    [-SCALE, -TAO * SCALE, 0.0],
    [0.0, SCALE, TAO * SCALE],
    [0.0, -SCALE, TAO * SCALE],
    [0.0, SCALE, -TAO * SCALE],
    [0.0, -SCALE, -TAO * SCALE],
    [TAO * SCALE, 0.0, SCALE],
    [-TAO * SCALE, 0.0, SCALE],
    [TAO * SCALE, 0.0, -SCALE],
    [-TAO * SCALE, 0.0, -SCALE],
];

/// The 20 triangular faces as indices into `VERTICES`
///
/// Every vertex appears in exactly five faces.
pub const FACES: [[usize; 3]; 20] = [
    [0, 1, 4],
    [1, 9, 4],
    [4, 9, 5],
    [5, 9, 3],
    [2, 3, 7],
    [3, 2, 5],
    [7, 10, 2],
    [0, 8, 10],
    [0, 4, 8],
    [8, 2, 10],
    [8, 4, 5],
    [8, 5, 2],
    [1, 0, 6],
    [11, 1, 6],
    [3, 9, 11],
    [6, 10, 7],
    [3, 11, 7],
    [11, 6, 7],
    [6, 0, 10],
    [9, 1, 11],
];

/// Vertex table as glam vectors
pub fn vertices() -> [DVec3; 12] {
    VERTICES.map(DVec3::from_array)
}
