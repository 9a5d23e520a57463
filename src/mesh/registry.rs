//! Centre registry: which faces surround each mesh point
//!
//! Every face is registered against its three corners as it is created. A
//! tile needs those faces in fan order around its centre, so the registry can
//! chain them into a single cycle where consecutive faces share an edge.

use std::collections::HashMap;

use super::Face;
use crate::error::{HexasphereError, Result};

/// Type alias for point-face adjacency map
type PointFaceMap = HashMap<usize, Vec<usize>>;

/// Map from mesh point ID to the IDs of the faces that touch it
#[derive(Debug, Clone, Default)]
pub struct CentreRegistry {
    store: PointFaceMap,
}

impl CentreRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `face_id` against each of the face's corners
    pub fn register(&mut self, face_id: usize, face: &Face) {
        for &corner in face.corners.iter() {
            self.store.entry(corner).or_default().push(face_id);
        }
    }

    /// Faces touching `point`, in registration order
    pub fn faces_around(&self, point: usize) -> &[usize] {
        self.store.get(&point).map(|f| f.as_slice()).unwrap_or(&[])
    }

    /// Number of points with at least one registered face
    pub fn point_count(&self) -> usize {
        self.store.len()
    }

    /// Faces touching `point`, reordered into one adjacency cycle
    ///
    /// Starts from the first registered face and repeatedly takes the first
    /// remaining face sharing an edge with the last one placed. The cycle must
    /// also close: the last face has to share an edge with the first.
    ///
    /// # Errors
    ///
    /// `TopologyViolation` if the chain breaks or does not close. A consistent
    /// subdivision never does this, so the error means the mesh is corrupt.
    pub fn faces_in_adjacency_order(&self, point: usize, faces: &[Face]) -> Result<Vec<usize>> {
        let mut remaining: Vec<usize> = self.faces_around(point).to_vec();
        if remaining.is_empty() {
            return Ok(remaining);
        }

        let mut ordered = Vec::with_capacity(remaining.len());
        ordered.push(remaining.remove(0));

        while !remaining.is_empty() {
            let last = &faces[ordered[ordered.len() - 1]];
            let Some(idx) = remaining
                .iter()
                .position(|&candidate| faces[candidate].is_adjacent_to(last))
            else {
                return Err(HexasphereError::TopologyViolation {
                    point,
                    placed: ordered.len(),
                    remaining: remaining.len(),
                });
            };
            ordered.push(remaining.remove(idx));
        }

        let first = &faces[ordered[0]];
        let last = &faces[ordered[ordered.len() - 1]];
        if ordered.len() > 2 && !first.is_adjacent_to(last) {
            return Err(HexasphereError::TopologyViolation {
                point,
                placed: ordered.len(),
                remaining: 0,
            });
        }

        Ok(ordered)
    }
}
