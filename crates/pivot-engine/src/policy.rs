//! Move-selection policies.

use pivot_core::{ModuleId, PivotId};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::engine::LegalMoves;

/// Chooses the next move from the current legal set.
pub trait MovePolicy {
    /// Pick a `(module, pivot)` pair from `legal`, or `None` to stop.
    fn select(&mut self, legal: &LegalMoves) -> Option<(ModuleId, PivotId)>;
}

/// Uniform random choice: first a module among those that can move, then
/// one of its pivots.
///
/// Seeded with [`ChaCha8Rng`], so the same seed over the same engine
/// replays the same moves.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: ChaCha8Rng,
}

impl RandomPolicy {
    /// A policy seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl MovePolicy for RandomPolicy {
    fn select(&mut self, legal: &LegalMoves) -> Option<(ModuleId, PivotId)> {
        let movable: Vec<(ModuleId, &[PivotId])> = legal
            .iter()
            .filter(|(_, pivots)| !pivots.is_empty())
            .map(|(&m, pivots)| (m, pivots.as_slice()))
            .collect();
        if movable.is_empty() {
            return None;
        }
        let (module, pivots) = movable[self.rng.random_range(0..movable.len())];
        let pivot = pivots[self.rng.random_range(0..pivots.len())];
        Some((module, pivot))
    }
}
