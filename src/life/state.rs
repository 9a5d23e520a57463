//! Immutable simulation state and generation stepping

use rayon::prelude::*;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;
use std::time::Instant;

use super::rule::{GenerationRule, LifeRule};
use super::LiveSet;
use crate::error::{HexasphereError, Result};
use crate::hexasphere::Hexasphere;

/// One generation of a Life simulation over a fixed hexasphere
///
/// A state is never mutated. `next_state` returns a brand-new state and
/// leaves this one usable, so any generation can be the starting point for
/// further stepping. Cloning is cheap: topology, live set and rule are all
/// shared behind `Arc`s.
pub struct SimulationState<R: GenerationRule = LifeRule> {
    generation: u64,
    topology: Arc<Hexasphere>,
    live: Arc<LiveSet>,
    rule: Arc<R>,
}

impl<R: GenerationRule> Clone for SimulationState<R> {
    fn clone(&self) -> Self {
        Self {
            generation: self.generation,
            topology: Arc::clone(&self.topology),
            live: Arc::clone(&self.live),
            rule: Arc::clone(&self.rule),
        }
    }
}

impl<R: GenerationRule> fmt::Debug for SimulationState<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulationState")
            .field("generation", &self.generation)
            .field("tiles", &self.topology.tile_count())
            .field("population", &self.live.len())
            .finish()
    }
}

/// Build generation 0 with the default Life rule
///
/// # Errors
///
/// `TileNotFound` if `live` names a tile the topology does not have.
///
/// # Example
///
/// ```
/// use hexasphere_life::*;
/// use std::sync::Arc;
///
/// let sphere = Arc::new(Hexasphere::build(HexasphereConfig::new(1.0, 1, 1.0).unwrap()).unwrap());
/// let state = initial_state(sphere, [0].into_iter().collect()).unwrap();
///
/// let next = state.next_state();
/// assert_eq!(next.generation(), 1);
/// assert!(next.live_cells().is_empty());
/// ```
pub fn initial_state(topology: Arc<Hexasphere>, live: LiveSet) -> Result<SimulationState<LifeRule>> {
    SimulationState::with_rule(topology, live, LifeRule::default())
}

impl<R: GenerationRule> SimulationState<R> {
    /// Build generation 0 with a custom rule
    ///
    /// # Errors
    ///
    /// `TileNotFound` if `live` names a tile the topology does not have.
    pub fn with_rule(topology: Arc<Hexasphere>, live: LiveSet, rule: R) -> Result<Self> {
        if let Some(&bad) = live.range(topology.tile_count()..).next() {
            return Err(HexasphereError::TileNotFound(bad));
        }

        Ok(Self {
            generation: 0,
            topology,
            live: Arc::new(live),
            rule: Arc::new(rule),
        })
    }

    /// Generation counter, 0 for the initial state
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The fixed topology this simulation runs over
    #[inline]
    pub fn topology(&self) -> &Arc<Hexasphere> {
        &self.topology
    }

    /// The rule applied at each step
    #[inline]
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// IDs of the live cells in this generation, ascending
    #[inline]
    pub fn live_cells(&self) -> &LiveSet {
        &self.live
    }

    /// Number of live cells
    #[inline]
    pub fn population(&self) -> usize {
        self.live.len()
    }

    /// Check whether a cell is alive in this generation
    #[inline]
    pub fn is_alive(&self, tile_id: usize) -> bool {
        self.live.contains(&tile_id)
    }

    /// `(tile_id, is_alive)` for every tile, in tile order
    ///
    /// This is what a renderer consumes to recolour the globe.
    pub fn cells(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.topology.tile_count()).map(move |id| (id, self.live.contains(&id)))
    }

    /// Compute the next generation using `round(sqrt(N))` parallel segments
    pub fn next_state(&self) -> Self {
        self.next_state_with_segments(default_segment_count(self.topology.tile_count()))
    }

    /// Compute the next generation using `segments` contiguous slices of the
    /// tile order, evaluated in parallel
    ///
    /// Every segment reads the same frozen live set and nothing else, so the
    /// result does not depend on `segments`. Values outside `1..=N` are clamped.
    /// Blocks until every segment has finished.
    pub fn next_state_with_segments(&self, segments: usize) -> Self {
        let start = Instant::now();
        let tile_count = self.topology.tile_count();
        let ranges = segment_ranges(tile_count, segments);
        let segment_count = ranges.len();

        let topology = &*self.topology;
        let live = &*self.live;
        let rule = &*self.rule;

        let partials: Vec<Vec<usize>> = ranges
            .into_par_iter()
            .map(|range| {
                range
                    .filter(|&id| rule.next_alive(id, topology.neighbors(id), live))
                    .collect()
            })
            .collect();

        let next: LiveSet = partials.into_iter().flatten().collect();

        log::trace!(
            "Generation {} -> {}: {} live cells, {} segments, {:.3?}",
            self.generation,
            self.generation + 1,
            next.len(),
            segment_count,
            start.elapsed()
        );

        Self {
            generation: self.generation + 1,
            topology: Arc::clone(&self.topology),
            live: Arc::new(next),
            rule: Arc::clone(&self.rule),
        }
    }

    /// Lazily step forward forever, starting with the generation after this one
    ///
    /// Each yielded state is independent; calling `generations()` on any of
    /// them restarts the sequence from that point.
    pub fn generations(&self) -> Generations<R> {
        Generations {
            current: self.clone(),
        }
    }
}

/// Infinite iterator over successive generations
///
/// Created by [`SimulationState::generations`].
pub struct Generations<R: GenerationRule = LifeRule> {
    current: SimulationState<R>,
}

impl<R: GenerationRule> Iterator for Generations<R> {
    type Item = SimulationState<R>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.current.next_state();
        self.current = next.clone();
        Some(next)
    }
}

/// Default parallel segment count for `tile_count` cells: `round(sqrt(N))`, at least 1
pub fn default_segment_count(tile_count: usize) -> usize {
    ((tile_count as f64).sqrt().round() as usize).max(1)
}

/// Split `0..tile_count` into `segments` contiguous ranges
///
/// Each range holds `tile_count / segments` cells and the first also takes the
/// remainder. `segments` is clamped to `1..=tile_count`; an empty topology
/// yields no ranges.
pub fn segment_ranges(tile_count: usize, segments: usize) -> Vec<Range<usize>> {
    if tile_count == 0 {
        return Vec::new();
    }

    let segments = segments.clamp(1, tile_count);
    let size = tile_count / segments;
    let extras = tile_count % segments;

    let mut ranges = Vec::with_capacity(segments);
    let mut first = 0;
    let mut last = size + extras;
    for _ in 0..segments {
        ranges.push(first..last);
        first = last;
        last += size;
    }
    ranges
}
