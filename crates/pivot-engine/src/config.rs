//! Engine and search configuration.

use pivot_core::{ConfigError, Layout};
use pivot_space::OccupancyGrid;

use crate::goal::GoalMatcher;

/// Everything needed to construct a [`LatticeEngine`](crate::LatticeEngine).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Starting positions, one per module `1..=module_count`.
    pub initial: Layout,
    /// Target positions, one per module `1..=module_count`.
    pub goal: Layout,
    /// Number of modules.
    pub module_count: usize,
}

impl EngineConfig {
    /// Build a config whose module count is the size of `initial`.
    pub fn new(initial: Layout, goal: Layout) -> Self {
        let module_count = initial.len();
        Self {
            initial,
            goal,
            module_count,
        }
    }

    /// Check the configuration without building an engine.
    ///
    /// Runs the same checks as construction: both layouts must name every
    /// module exactly once, keep module 1, avoid shared cells, and fit the
    /// grid after anchoring and (for the goal) after each rotation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. At least one module.
        if self.module_count == 0 {
            return Err(ConfigError::NoModules);
        }
        // 2. Both layouts non-empty.
        if self.initial.is_empty() {
            return Err(ConfigError::EmptyInitial);
        }
        if self.goal.is_empty() {
            return Err(ConfigError::EmptyGoal);
        }
        // 3. Initial layout fits.
        OccupancyGrid::new(&self.initial, self.module_count)?;
        // 4. Goal layout and all its rotations fit.
        GoalMatcher::new(&self.goal, self.module_count)?;
        Ok(())
    }
}

/// Budget and seed for [`RandomSearch`](crate::RandomSearch).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of moves to apply. Zero never touches the engine.
    pub max_steps: u64,
    /// Seed for the move-selection RNG.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_steps: 1000,
            seed: 0,
        }
    }
}
