//! Priority weighting of matched chains.
//!
//! Literal tokens weigh `2^level`, where `level` counts every token of every
//! entry (starting at 1). Parameter tokens add a flat 1 at any depth, so
//! parameterized chains never outrank static ones. Root tokens add nothing.

use crate::routing::chain::RouteChain;
use crate::routing::segment::Segment;

/// Deterministic weight of a matched chain; higher wins.
pub fn compute_priority(chain: &RouteChain) -> u64 {
    let mut score: u64 = 1;
    let mut level: u32 = 1;

    for entry in chain.iter() {
        for segment in &entry.path {
            match segment {
                Segment::Param(_) => score = score.saturating_add(1),
                Segment::Root => {}
                Segment::Literal(_) | Segment::Wildcard => {
                    score = score.saturating_add(2u64.saturating_pow(level));
                }
            }
            level = level.saturating_add(1);
        }
    }

    score
}
