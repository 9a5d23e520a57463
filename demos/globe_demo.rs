//! Demonstration of hexasphere construction and topology queries
//!
//! Run with `RUST_LOG=info` to see the construction phases.

use hexasphere_life::*;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    println!("Building hexasphere...");

    let config = HexasphereConfigBuilder::new()
        .globe_size(GlobeSize::Small)
        .radius(6371.0)?
        .hex_size(0.9)?
        .build()?;

    let start = Instant::now();
    let sphere = Hexasphere::build_with_status(config, &mut |msg| println!("  [status] {}", msg))?;
    println!("Built {} tiles in {:?}", sphere.tile_count(), start.elapsed());

    println!("\nTopology:");
    println!("  Pentagons: {}", sphere.pentagon_count());
    println!("  Hexagons: {}", sphere.tile_count() - sphere.pentagon_count());
    println!("  Symmetric adjacency: {}", sphere.neighbor_map().is_symmetric());

    if let Some(tile) = sphere.get_tile(0) {
        println!("\nTile 0:");
        println!("  Lat/Lon: ({:.2}, {:.2})", tile.coordinate.latitude, tile.coordinate.longitude);
        println!("  Neighbors: {:?}", tile.neighbors);
        println!("  Area: {:.1} km^2", tile.approximate_area());

        let first = tile.neighbors[0];
        let distance = tile.arc_distance_to(&sphere.tiles()[first], sphere.radius());
        println!("  Distance to tile {}: {:.1} km", first, distance);
    }

    let north = GeoCoordinate::new(90.0, 0.0).to_unit_vector() * sphere.radius();
    let pole_tile = sphere.find_tile_at(north);
    let ring = sphere.find_tiles_within_hops(pole_tile, 2);
    println!("\nNorth pole tile: {} ({} tiles within 2 hops)", pole_tile, ring.len());

    // Same topology at every preset
    println!("\n=== Globe sizes ===");
    for size in [GlobeSize::Pentagons, GlobeSize::Tiny, GlobeSize::Small, GlobeSize::Medium, GlobeSize::Large] {
        let config = HexasphereConfigBuilder::new().globe_size(size).build()?;

        let start = Instant::now();
        let sphere = Hexasphere::build(config)?;

        println!(
            "{}: {} tiles (expected {}), {:?}",
            size.name(),
            sphere.tile_count(),
            expected_tile_count(size.divisions()),
            start.elapsed()
        );
    }

    Ok(())
}
