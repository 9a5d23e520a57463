//! Tile synthesis from a mesh point and its fan of faces
//!
//! Each boundary vertex sits on the line from the tile centre to one face
//! centroid. Because the fan is in adjacency order, consecutive boundary
//! vertices come from faces that share an edge, and the polygon is convex.

use glam::DVec3;

use crate::geometry::{blend, plane_normal, project_to_radius, GeoCoordinate};

/// Smallest hex size fraction used when placing boundary vertices
pub const MIN_HEX_SIZE: f64 = 0.01;

/// A tile without neighbors (geometry only)
///
/// This is an intermediate representation used during generation.
/// Neighbors are added later to create the final `Tile`.
#[derive(Debug, Clone)]
pub struct RawTile {
    /// Tile identifier (the ID of the mesh point it was built from)
    pub id: usize,
    /// Centre on the sphere surface
    pub centre: DVec3,
    /// Boundary polygon, counter-clockwise seen from outside the sphere
    pub boundary: Vec<DVec3>,
    /// Latitude/longitude of the centre
    pub coordinate: GeoCoordinate,
    /// Outward unit normal of the boundary polygon
    pub normal: DVec3,
}

/// Build one tile from its centre and the centroids of its faces in fan order
///
/// Boundary vertices are placed `clamp(hex_size, 0.01, 1.0)` of the way from the
/// centre to each centroid, then pushed out onto the sphere. If the fan runs
/// clockwise when seen from outside, the boundary is reversed.
///
/// # Arguments
///
/// * `id` - Tile ID (the mesh point ID)
/// * `centre` - Mesh point the tile is built around
/// * `fan_centroids` - Centroids of the faces around `centre`, in adjacency order
/// * `radius` - Sphere radius every vertex is projected onto
/// * `hex_size` - Fraction of the way from centre to centroid for each vertex
///
/// # Returns
///
/// `RawTile` with one boundary vertex per face and no neighbors yet
pub fn synthesize_tile(
    id: usize,
    centre: DVec3,
    fan_centroids: &[DVec3],
    radius: f64,
    hex_size: f64,
) -> RawTile {
    let t = hex_size.clamp(MIN_HEX_SIZE, 1.0);
    let centre = project_to_radius(centre, radius, 1.0);

    let mut boundary: Vec<DVec3> = fan_centroids
        .iter()
        .map(|&c| project_to_radius(blend(centre, c, t), radius, 1.0))
        .collect();

    let mut normal = polygon_normal(&boundary, centre);
    if normal.dot(centre) < 0.0 {
        boundary.reverse();
        normal = polygon_normal(&boundary, centre);
    }

    RawTile {
        id,
        centre,
        boundary,
        coordinate: GeoCoordinate::from_position(centre),
        normal,
    }
}

/// Normal of the plane through the first three boundary vertices
///
/// Degenerate polygons fall back to the radial direction.
fn polygon_normal(boundary: &[DVec3], centre: DVec3) -> DVec3 {
    if boundary.len() < 3 {
        return centre.normalize_or_zero();
    }
    let normal = plane_normal(boundary[0], boundary[1], boundary[2]);
    if normal == DVec3::ZERO {
        centre.normalize_or_zero()
    } else {
        normal
    }
}
