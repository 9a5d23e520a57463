//! Property tests over built hexaspheres

use hexasphere_life::*;
use proptest::prelude::*;
use std::sync::{Arc, OnceLock};

/// Shared 92-tile topology (3 divisions); building it per case is wasted work
fn small_sphere() -> Arc<Hexasphere> {
    static SPHERE: OnceLock<Arc<Hexasphere>> = OnceLock::new();
    Arc::clone(SPHERE.get_or_init(|| {
        Arc::new(Hexasphere::build(HexasphereConfig::new(1.0, 3, 1.0).unwrap()).unwrap())
    }))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn next_state_ignores_segment_count(
        alive in proptest::collection::vec(any::<bool>(), 92),
        segments in 1usize..=92,
    ) {
        let sphere = small_sphere();
        let live: LiveSet = alive
            .iter()
            .enumerate()
            .filter(|(_, &a)| a)
            .map(|(id, _)| id)
            .collect();
        let state = initial_state(sphere, live).unwrap();

        let single = state.next_state_with_segments(1);
        let split = state.next_state_with_segments(segments);
        prop_assert_eq!(single.live_cells(), split.live_cells());
        prop_assert_eq!(single.generation(), split.generation());
    }

    #[test]
    fn two_steps_ignore_segment_count(seed in any::<u64>(), density in 0.0f64..=1.0) {
        let sphere = small_sphere();
        let live = random_live_set(&sphere, density, seed);
        let state = initial_state(sphere, live).unwrap();

        let a = state.next_state_with_segments(1).next_state_with_segments(92);
        let b = state.next_state().next_state();
        prop_assert_eq!(a.live_cells(), b.live_cells());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn topology_laws_hold(divisions in 1usize..=10, radius in 0.1f64..1000.0, hex_size in 0.05f64..=1.0) {
        let config = HexasphereConfig::new(radius, divisions, hex_size).unwrap();
        let sphere = Hexasphere::build(config).unwrap();

        prop_assert_eq!(sphere.tile_count(), expected_tile_count(divisions));
        prop_assert_eq!(sphere.pentagon_count(), 12);
        prop_assert!(sphere.neighbor_map().is_symmetric());

        for tile in sphere.tiles() {
            prop_assert_eq!(tile.neighbor_count(), tile.vertex_count());
            prop_assert!((tile.centre.length() - radius).abs() < 1e-9 * radius);
            for v in &tile.boundary {
                prop_assert!((v.length() - radius).abs() < 1e-9 * radius);
            }
        }
    }
}
