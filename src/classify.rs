//! Seeding an initial live set
//!
//! The simulation only needs a set of live tile IDs. A land/water lookup (for
//! example one backed by an equirectangular map) plugs in through
//! `LandClassifier`; random soups are available for experiments.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::geometry::GeoCoordinate;
use crate::hexasphere::Hexasphere;
use crate::life::LiveSet;

/// Trait for deciding whether a point on the globe is land
pub trait LandClassifier {
    /// `true` if the coordinate is land
    fn is_land(&self, coordinate: GeoCoordinate) -> bool;
}

impl<F> LandClassifier for F
where
    F: Fn(GeoCoordinate) -> bool,
{
    #[inline]
    fn is_land(&self, coordinate: GeoCoordinate) -> bool {
        self(coordinate)
    }
}

/// Live set holding every tile whose centre the classifier calls land
///
/// # Example
///
/// ```
/// use hexasphere_life::*;
///
/// let sphere = Hexasphere::build(HexasphereConfig::new(1.0, 4, 1.0).unwrap()).unwrap();
/// let northern = initial_live_set(&sphere, &|c: GeoCoordinate| c.latitude > 0.0);
///
/// assert!(northern.iter().all(|&id| sphere.tiles()[id].coordinate.latitude > 0.0));
/// ```
pub fn initial_live_set<C>(hexasphere: &Hexasphere, classifier: &C) -> LiveSet
where
    C: LandClassifier + ?Sized,
{
    hexasphere
        .tiles()
        .iter()
        .filter(|tile| classifier.is_land(tile.coordinate))
        .map(|tile| tile.id)
        .collect()
}

/// Random live set where each tile is alive with probability `density`
///
/// The same seed always yields the same set. `density` is clamped to `[0, 1]`
/// and a NaN density yields an empty set.
pub fn random_live_set(hexasphere: &Hexasphere, density: f64, seed: u64) -> LiveSet {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..hexasphere.tile_count())
        .filter(|_| rng.gen_bool(density))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HexasphereConfig;

    fn sphere() -> Hexasphere {
        Hexasphere::build(HexasphereConfig::new(1.0, 4, 1.0).unwrap()).unwrap()
    }

    struct Hemisphere;

    impl LandClassifier for Hemisphere {
        fn is_land(&self, coordinate: GeoCoordinate) -> bool {
            coordinate.longitude >= 0.0
        }
    }

    #[test]
    fn test_initial_live_set_with_trait_impl() {
        let s = sphere();
        let live = initial_live_set(&s, &Hemisphere);

        assert!(!live.is_empty());
        assert!(live.len() < s.tile_count());
        for tile in s.tiles() {
            assert_eq!(live.contains(&tile.id), tile.coordinate.longitude >= 0.0);
        }
    }

    #[test]
    fn test_initial_live_set_extremes() {
        let s = sphere();
        assert_eq!(initial_live_set(&s, &|_: GeoCoordinate| true).len(), s.tile_count());
        assert!(initial_live_set(&s, &|_: GeoCoordinate| false).is_empty());
    }

    #[test]
    fn test_initial_live_set_dyn_classifier() {
        let s = sphere();
        let classifier: Box<dyn LandClassifier> = Box::new(Hemisphere);
        assert_eq!(
            initial_live_set(&s, classifier.as_ref()),
            initial_live_set(&s, &Hemisphere)
        );
    }

    #[test]
    fn test_random_live_set_is_reproducible() {
        let s = sphere();
        let a = random_live_set(&s, 0.4, 7);
        let b = random_live_set(&s, 0.4, 7);
        let c = random_live_set(&s, 0.4, 8);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.iter().all(|&id| id < s.tile_count()));
    }

    #[test]
    fn test_random_live_set_density_bounds() {
        let s = sphere();
        assert!(random_live_set(&s, 0.0, 1).is_empty());
        assert_eq!(random_live_set(&s, 1.0, 1).len(), s.tile_count());
        assert_eq!(random_live_set(&s, 3.0, 1).len(), s.tile_count());
    }

    #[test]
    fn test_random_live_set_non_finite_density() {
        let s = sphere();
        assert!(random_live_set(&s, f64::NAN, 1).is_empty());
        assert!(random_live_set(&s, f64::NEG_INFINITY, 1).is_empty());
        assert_eq!(random_live_set(&s, f64::INFINITY, 1).len(), s.tile_count());
    }
}
