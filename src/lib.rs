//! Geodesic hexasphere tiling with a Game of Life over its tiles
//!
//! Builds a sphere out of 12 pentagons and many hexagons by subdividing an
//! icosahedron, resolves which tiles touch which, and runs a parallel,
//! generation-stepped cellular automaton over that tile graph.
//!
//! # Quick Start
//!
//! ```rust
//! use hexasphere_life::*;
//! use std::sync::Arc;
//!
//! // Build the topology once
//! let config = HexasphereConfigBuilder::new()
//!     .globe_size(GlobeSize::Small)
//!     .hex_size(0.95).unwrap()
//!     .build().unwrap();
//! let sphere = Arc::new(Hexasphere::build(config).unwrap());
//! assert_eq!(sphere.tile_count(), 162);
//!
//! // Seed the northern hemisphere and step the simulation
//! let live = initial_live_set(sphere.as_ref(), &|c: GeoCoordinate| c.latitude > 0.0);
//! let state = initial_state(Arc::clone(&sphere), live).unwrap();
//!
//! for generation in state.generations().take(3) {
//!     println!("generation {}: {} live", generation.generation(), generation.population());
//! }
//! ```
//!
//! # Features
//!
//! - `serde`: Enables serialization support for configuration, coordinates and rules

// Modules
pub mod error;
pub mod config;
pub mod geometry;
pub mod mesh;
pub mod generation;
pub mod spatial;
pub mod tile;
pub mod hexasphere;
pub mod life;
pub mod classify;

// Re-export core types for convenience
pub use error::{HexasphereError, Result};
pub use config::{expected_tile_count, GlobeSize, HexasphereConfig, HexasphereConfigBuilder, MAX_DIVISIONS};
pub use geometry::GeoCoordinate;
pub use mesh::{CentreRegistry, Face, GeodesicMesh};
pub use generation::{RawTile, TileNeighborMap};
pub use spatial::SpatialIndex;
pub use tile::Tile;
pub use hexasphere::Hexasphere;
pub use life::{initial_state, GenerationRule, Generations, LifeRule, LiveSet, SimulationState};
pub use classify::{initial_live_set, random_live_set, LandClassifier};

// Re-export glam::DVec3 for convenience
pub use glam::DVec3;
