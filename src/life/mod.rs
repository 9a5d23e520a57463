//! Game of Life over the hexasphere tile graph
//!
//! States are immutable values. Each step reads a frozen snapshot of the
//! current live set and the fixed topology, evaluates contiguous segments of
//! tiles in parallel, and unions the segment results into the next live set.

mod rule;
mod state;

pub use rule::{GenerationRule, LifeRule};
pub use state::{
    default_segment_count, initial_state, segment_ranges, Generations, SimulationState,
};

use std::collections::BTreeSet;

/// IDs of live cells, kept sorted so iteration order is deterministic
pub type LiveSet = BTreeSet<usize>;
