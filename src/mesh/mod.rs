//! Geodesic mesh construction
//!
//! Subdivides each icosahedron face into a triangular grid, merging points that
//! coincide where neighbouring faces meet. Points live in one arena and faces
//! are index triples into it; the `CentreRegistry` records which faces touch
//! which point.

pub mod icosahedron;
mod dedup;
mod registry;

pub use dedup::{PointRegistry, DEDUP_TOLERANCE};
pub use registry::CentreRegistry;

use glam::DVec3;
use std::time::Instant;

use crate::error::{HexasphereError, Result};
use crate::generation::Progress;
use crate::geometry::{centroid, project_to_radius, subdivide_segment};

/// A triangle of the geodesic mesh
///
/// Holds point IDs, not points. The positions live in the mesh arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    /// IDs of the three corner points
    pub corners: [usize; 3],
}

impl Face {
    /// Create a face from three point IDs
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { corners: [a, b, c] }
    }

    /// Faces are adjacent when they have at least two corners in common
    pub fn is_adjacent_to(&self, other: &Face) -> bool {
        self.corners
            .iter()
            .filter(|corner| other.corners.contains(corner))
            .count()
            >= 2
    }

    /// Check whether a point is one of this face's corners
    #[inline]
    pub fn contains(&self, point: usize) -> bool {
        self.corners.contains(&point)
    }

    /// Centroid of the face given the point arena
    #[inline]
    pub fn centroid(&self, points: &[DVec3]) -> DVec3 {
        let [a, b, c] = self.corners;
        centroid(points[a], points[b], points[c])
    }
}

/// Subdivided icosahedron: unique points, faces, and the point-to-face registry
#[derive(Debug, Clone)]
pub struct GeodesicMesh {
    divisions: usize,
    points: Vec<DVec3>,
    faces: Vec<Face>,
    registry: CentreRegistry,
}

impl GeodesicMesh {
    /// Subdivide the icosahedron `divisions` times per edge
    ///
    /// Points stay at icosahedron scale; call `project_to_radius` afterwards.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `divisions` is zero.
    pub fn build(divisions: usize) -> Result<Self> {
        Self::build_with_progress(divisions, &mut Progress::silent())
    }

    pub(crate) fn build_with_progress(divisions: usize, progress: &mut Progress<'_>) -> Result<Self> {
        if divisions < 1 {
            return Err(HexasphereError::InvalidConfig(format!(
                "divisions must be >= 1 (got {})",
                divisions
            )));
        }

        let face_total = icosahedron::FACES.len();
        let mut arena = PointRegistry::with_capacity(
            DEDUP_TOLERANCE,
            crate::config::expected_tile_count(divisions),
        );
        let mut faces = Vec::with_capacity(face_total * divisions * divisions);
        let mut registry = CentreRegistry::new();

        let corners: Vec<usize> = icosahedron::vertices()
            .into_iter()
            .map(|v| arena.find_or_insert(v))
            .collect();

        let mut add_face = |face: Face, faces: &mut Vec<Face>| {
            registry.register(faces.len(), &face);
            faces.push(face);
        };

        for (face_idx, triangle) in icosahedron::FACES.iter().enumerate() {
            let start = Instant::now();
            progress.debug(format!(
                "Starting computation of face {} of {}",
                face_idx + 1,
                face_total
            ));

            let [a, b, c] = triangle.map(|i| corners[i]);
            let left = subdivide_points(&mut arena, a, b, divisions);
            let right = subdivide_points(&mut arena, a, c, divisions);

            let mut previous = vec![a];
            for i in 1..=divisions {
                let row = subdivide_points(&mut arena, left[i], right[i], i);
                for j in 0..i {
                    add_face(Face::new(previous[j], row[j], row[j + 1]), &mut faces);
                    if j > 0 {
                        add_face(Face::new(previous[j - 1], previous[j], row[j]), &mut faces);
                    }
                }
                previous = row;
            }

            progress.debug(format!(
                "Face {} of {}: computation time {:.3?}",
                face_idx + 1,
                face_total,
                start.elapsed()
            ));
        }

        Ok(Self {
            divisions,
            points: arena.into_positions(),
            faces,
            registry,
        })
    }

    /// Move every point onto a sphere of `radius`
    ///
    /// Point IDs and faces are unchanged.
    pub fn project_to_radius(mut self, radius: f64) -> Self {
        for point in self.points.iter_mut() {
            *point = project_to_radius(*point, radius, 1.0);
        }
        self
    }

    /// Division count this mesh was built with
    #[inline]
    pub fn divisions(&self) -> usize {
        self.divisions
    }

    /// All unique points, indexed by point ID
    #[inline]
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// All faces, indexed by face ID
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Point-to-face registry
    #[inline]
    pub fn registry(&self) -> &CentreRegistry {
        &self.registry
    }

    /// Number of unique points
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of faces
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Faces around `point`, ordered into a single adjacency cycle
    pub fn faces_in_adjacency_order(&self, point: usize) -> Result<Vec<usize>> {
        self.registry.faces_in_adjacency_order(point, &self.faces)
    }
}

/// Subdivide the segment between two existing points, reusing any interior
/// point that another face already created
fn subdivide_points(arena: &mut PointRegistry, from: usize, to: usize, count: usize) -> Vec<usize> {
    let positions = subdivide_segment(arena.position(from), arena.position(to), count);
    let last = positions.len() - 1;

    positions
        .into_iter()
        .enumerate()
        .map(|(k, position)| match k {
            0 => from,
            k if k == last => to,
            _ => arena.find_or_insert(position),
        })
        .collect()
}
