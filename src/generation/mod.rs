//! Core hexasphere generation pipeline
//!
//! Subdivides the icosahedron, chains the faces around every point into a fan,
//! and synthesizes one tile per point. Neighbor resolution runs afterwards,
//! once the spatial index over tile centres exists.

mod neighbors;
mod synthesis;

pub use neighbors::{resolve_neighbors, TileNeighborMap};
pub use synthesis::{synthesize_tile, RawTile, MIN_HEX_SIZE};

use std::time::Instant;

use crate::config::HexasphereConfig;
use crate::error::Result;
use crate::mesh::GeodesicMesh;

/// Progress reporting for a single build
///
/// Every milestone goes to the `log` facade, and to the caller's status
/// callback when one was supplied. The callback is borrowed only for the
/// duration of the build.
pub struct Progress<'a> {
    status: Option<&'a mut dyn FnMut(&str)>,
}

impl<'a> Progress<'a> {
    /// Report to the log only
    pub fn silent() -> Self {
        Self { status: None }
    }

    /// Report to the log and to `status`
    pub fn with_status(status: &'a mut dyn FnMut(&str)) -> Self {
        Self {
            status: Some(status),
        }
    }

    /// Milestone worth showing by default
    pub fn info(&mut self, message: String) {
        log::info!("{}", message);
        self.emit(&message);
    }

    /// Fine-grained progress (per face)
    pub fn debug(&mut self, message: String) {
        log::debug!("{}", message);
        self.emit(&message);
    }

    fn emit(&mut self, message: &str) {
        if let Some(status) = self.status.as_deref_mut() {
            status(message);
        }
    }
}

/// Generate raw tiles from configuration (without neighbors)
///
/// Returns one tile per mesh point, in point ID order, with centres and
/// boundaries already on the sphere. Neighbors must be resolved separately.
pub fn generate_raw_tiles(config: &HexasphereConfig) -> Result<Vec<RawTile>> {
    generate_raw_tiles_with_progress(config, &mut Progress::silent())
}

pub(crate) fn generate_raw_tiles_with_progress(
    config: &HexasphereConfig,
    progress: &mut Progress<'_>,
) -> Result<Vec<RawTile>> {
    config.validate()?;

    // Step 1: Subdivide the icosahedron and merge shared points
    let mesh_start = Instant::now();
    let mesh = GeodesicMesh::build_with_progress(config.divisions, progress)?
        .project_to_radius(config.radius);
    progress.info(format!(
        "Built geodesic mesh: {} points, {} faces in {:.3?}",
        mesh.point_count(),
        mesh.face_count(),
        mesh_start.elapsed()
    ));

    // Step 2: One tile per point, from its fan of faces
    let tiles_start = Instant::now();
    let points = mesh.points();
    let tiles = (0..mesh.point_count())
        .map(|point| {
            let fan = mesh.faces_in_adjacency_order(point)?;
            let centroids: Vec<_> = fan
                .iter()
                .map(|&face| mesh.faces()[face].centroid(points))
                .collect();
            Ok(synthesize_tile(
                point,
                points[point],
                &centroids,
                config.radius,
                config.hex_size,
            ))
        })
        .collect::<Result<Vec<RawTile>>>()?;
    progress.info(format!(
        "Synthesized {} tiles in {:.3?}",
        tiles.len(),
        tiles_start.elapsed()
    ));

    Ok(tiles)
}
