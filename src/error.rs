//! Error types for hexasphere construction and simulation

use thiserror::Error;

/// Errors that can occur while building a hexasphere or seeding a simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HexasphereError {
    /// Configuration validation failed (radius, divisions or hex size)
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The faces around a mesh point could not be chained into one adjacency cycle
    ///
    /// A consistent icosahedron subdivision never produces this; seeing it
    /// means the mesh itself is broken.
    #[error(
        "topology violation at point {point}: no adjacent face after placing {placed} ({remaining} left)"
    )]
    TopologyViolation {
        /// Mesh point whose fan is broken
        point: usize,
        /// Faces already placed in the cycle
        placed: usize,
        /// Faces that could not be placed
        remaining: usize,
    },

    /// The spatial neighbor search did not return one neighbor per boundary vertex
    #[error("tile {tile} expected {expected} neighbors, found {found}")]
    NeighborCountMismatch {
        /// Tile being resolved
        tile: usize,
        /// Boundary vertex count of the tile
        expected: usize,
        /// Neighbors actually resolved
        found: usize,
    },

    /// Requested tile ID does not exist
    #[error("tile not found: {0}")]
    TileNotFound(usize),
}

/// Result type alias for hexasphere operations
pub type Result<T> = std::result::Result<T, HexasphereError>;
