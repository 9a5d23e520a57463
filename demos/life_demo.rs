//! Demonstration of the Game of Life on a hexasphere
//!
//! Run with `RUST_LOG=debug` to see per-generation logging.

use hexasphere_life::*;
use std::sync::Arc;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    let config = HexasphereConfigBuilder::new()
        .globe_size(GlobeSize::Medium)
        .build()?;
    let sphere = Arc::new(Hexasphere::build(config)?);
    println!("Globe: {} tiles", sphere.tile_count());

    // A crude "continent" classifier: a band around the equator
    let band = |c: GeoCoordinate| c.latitude.abs() < 25.0 && c.longitude > -60.0 && c.longitude < 90.0;
    let live = initial_live_set(sphere.as_ref(), &band);
    let state = initial_state(Arc::clone(&sphere), live)?;
    println!("Seeded {} live tiles from the classifier", state.population());

    let start = Instant::now();
    for generation in state.generations().take(10) {
        println!("  generation {:>2}: {:>4} live", generation.generation(), generation.population());
    }
    println!("10 generations in {:?}", start.elapsed());

    // Random soup with a narrower rule: alive only at a count of exactly 3
    let soup = random_live_set(&sphere, 0.35, 42);
    let rule = LifeRule::new((2, 4), (2, 4));
    let mut state = SimulationState::with_rule(Arc::clone(&sphere), soup, rule)?;
    println!("\nRandom soup: {} live", state.population());

    for _ in 0..25 {
        state = state.next_state();
    }
    println!("After {} generations: {} live", state.generation(), state.population());

    // A closure rule: a tile flips when exactly one neighbor is alive
    let flip = |cell: usize, neighbors: &[usize], live: &LiveSet| {
        let alive = live.contains(&cell);
        let count = neighbors.iter().filter(|n| live.contains(n)).count();
        if count == 1 { !alive } else { alive }
    };
    let state = SimulationState::with_rule(Arc::clone(&sphere), [0].into_iter().collect(), flip)?;
    let last = state.generations().nth(4).unwrap_or_else(|| state.clone());
    println!("\nFlip rule after {} generations: {} live", last.generation(), last.population());

    let alive_pentagons = last
        .cells()
        .filter(|&(id, alive)| alive && sphere.tiles()[id].is_pentagon())
        .count();
    println!("  of which pentagons: {}", alive_pentagons);

    Ok(())
}
