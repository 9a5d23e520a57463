//! Generation rules
//!
//! A rule decides whether a cell is alive in the next generation, looking
//! only at the current live set. Rules run on many threads at once, so they
//! must be `Send + Sync` and must not keep state between calls.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::LiveSet;

/// Decides a cell's liveness in the next generation
pub trait GenerationRule: Send + Sync {
    /// `true` if `cell` is alive in the next generation
    ///
    /// `neighbors` are the cell's neighbor IDs and `live` is the frozen
    /// current generation.
    fn next_alive(&self, cell: usize, neighbors: &[usize], live: &LiveSet) -> bool;
}

impl<F> GenerationRule for F
where
    F: Fn(usize, &[usize], &LiveSet) -> bool + Send + Sync,
{
    #[inline]
    fn next_alive(&self, cell: usize, neighbors: &[usize], live: &LiveSet) -> bool {
        self(cell, neighbors, live)
    }
}

/// Count-based Life rule for a hexasphere
///
/// The count is 1 if the cell itself is alive plus the number of live
/// neighbors. The cell lives in the next generation when the count lies
/// strictly inside the band for its shape: `low < count < high`.
///
/// The default bands are `(2, 5)` for pentagons (alive at 3 or 4) and
/// `(2, 6)` for hexagons (alive at 3, 4 or 5).
///
/// # Example
///
/// ```
/// use hexasphere_life::*;
///
/// let rule = LifeRule::default();
/// let live: LiveSet = [0, 1, 2].into_iter().collect();
///
/// // Hexagon cell 0: itself + two live neighbors = 3
/// assert!(rule.next_alive(0, &[1, 2, 3, 4, 5, 6], &live));
/// // Pentagon cell 9: two live neighbors, not itself = 2
/// assert!(!rule.next_alive(9, &[1, 2, 3, 4, 5], &live));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeRule {
    /// Exclusive `(low, high)` band for cells with 5 neighbors
    pub pentagon: (usize, usize),
    /// Exclusive `(low, high)` band for every other cell
    pub hexagon: (usize, usize),
}

impl LifeRule {
    /// Create a rule with explicit bands
    pub fn new(pentagon: (usize, usize), hexagon: (usize, usize)) -> Self {
        Self { pentagon, hexagon }
    }

    /// Self-plus-live-neighbors count for a cell
    pub fn live_count(cell: usize, neighbors: &[usize], live: &LiveSet) -> usize {
        let own = usize::from(live.contains(&cell));
        own + neighbors.iter().filter(|n| live.contains(n)).count()
    }
}

impl Default for LifeRule {
    fn default() -> Self {
        Self {
            pentagon: (2, 5),
            hexagon: (2, 6),
        }
    }
}

impl GenerationRule for LifeRule {
    fn next_alive(&self, cell: usize, neighbors: &[usize], live: &LiveSet) -> bool {
        let count = Self::live_count(cell, neighbors, live);
        let (low, high) = if neighbors.len() == 5 {
            self.pentagon
        } else {
            self.hexagon
        };
        count > low && count < high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PENTAGON: [usize; 5] = [1, 2, 3, 4, 5];
    const HEXAGON: [usize; 6] = [1, 2, 3, 4, 5, 6];

    /// Live set holding the first `live_neighbors` neighbors, plus the cell itself if asked
    fn live_set(neighbors: &[usize], live_neighbors: usize, self_alive: bool) -> LiveSet {
        let mut live: LiveSet = neighbors[..live_neighbors].iter().copied().collect();
        if self_alive {
            live.insert(0);
        }
        live
    }

    #[test]
    fn test_pentagon_band() {
        let rule = LifeRule::default();
        // (live neighbors, self alive) → count
        let cases = [
            (2, false, false), // 2
            (1, true, false),  // 2
            (3, false, true),  // 3
            (2, true, true),   // 3
            (4, false, true),  // 4
            (3, true, true),   // 4
            (5, false, false), // 5
            (4, true, false),  // 5
            (5, true, false),  // 6
        ];
        for (n, self_alive, expected) in cases {
            let live = live_set(&PENTAGON, n, self_alive);
            assert_eq!(
                rule.next_alive(0, &PENTAGON, &live),
                expected,
                "pentagon with {} live neighbors, self alive {}",
                n,
                self_alive
            );
        }
    }

    #[test]
    fn test_hexagon_band() {
        let rule = LifeRule::default();
        for count in 0..=7usize {
            let self_alive = count > 0;
            let live = live_set(&HEXAGON, count.saturating_sub(1), self_alive);
            assert_eq!(LifeRule::live_count(0, &HEXAGON, &live), count);
            assert_eq!(
                rule.next_alive(0, &HEXAGON, &live),
                (3..=5).contains(&count),
                "hexagon count {}",
                count
            );
        }
    }

    #[test]
    fn test_lonely_cell_dies() {
        let live: LiveSet = [0].into_iter().collect();
        assert!(!LifeRule::default().next_alive(0, &PENTAGON, &live));
    }

    #[test]
    fn test_custom_band() {
        let rule = LifeRule::new((0, 2), (0, 2));
        let live: LiveSet = [0].into_iter().collect();
        assert!(rule.next_alive(0, &HEXAGON, &live));
        assert!(!rule.next_alive(0, &HEXAGON, &LiveSet::new()));
    }

    #[test]
    fn test_closure_is_a_rule() {
        let always = |_: usize, _: &[usize], _: &LiveSet| true;
        assert!(always.next_alive(0, &[], &LiveSet::new()));
    }
}
