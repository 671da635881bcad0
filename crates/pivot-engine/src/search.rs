//! Bounded feasibility search.
//!
//! [`RandomSearch`] drives a [`LatticeEngine`] with a [`MovePolicy`] until
//! the goal is reached, the policy runs out of moves, or the step budget
//! is spent. It makes no attempt to find a short path.

use std::fmt;

use pivot_core::MoveError;
use tracing::{info, instrument};

use crate::config::SearchConfig;
use crate::engine::LatticeEngine;
use crate::observer::StepObserver;
use crate::policy::{MovePolicy, RandomPolicy};

/// How a search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was matched after `steps` moves.
    Solved {
        /// Moves applied.
        steps: u64,
    },
    /// The budget ran out.
    Exhausted {
        /// Moves applied.
        steps: u64,
    },
    /// The policy found nothing to move.
    Stuck {
        /// Moves applied.
        steps: u64,
    },
}

impl SearchOutcome {
    /// Moves applied during the search.
    pub fn steps(&self) -> u64 {
        match *self {
            Self::Solved { steps } | Self::Exhausted { steps } | Self::Stuck { steps } => steps,
        }
    }

    /// Whether the goal was reached.
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved { steps } => write!(f, "solved after {steps} steps"),
            Self::Exhausted { steps } => write!(f, "budget exhausted after {steps} steps"),
            Self::Stuck { steps } => write!(f, "stuck after {steps} steps"),
        }
    }
}

/// Step-bounded random search.
#[derive(Clone, Debug)]
pub struct RandomSearch {
    config: SearchConfig,
}

impl RandomSearch {
    /// A search with the given budget.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// A [`RandomPolicy`] seeded from the configured seed.
    pub fn random_policy(&self) -> RandomPolicy {
        RandomPolicy::new(self.config.seed)
    }

    /// Run until solved, stuck, or out of budget.
    ///
    /// `observer` sees the starting state, then the state after every
    /// applied move. The goal is tested after each move, so a search that
    /// starts on the goal still moves at least once. With a zero budget
    /// the engine is never touched.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the policy picks a move the engine rejects.
    #[instrument(skip_all, fields(max_steps = self.config.max_steps))]
    pub fn run<P, O>(
        &self,
        engine: &mut LatticeEngine,
        policy: &mut P,
        observer: &mut O,
    ) -> Result<SearchOutcome, MoveError>
    where
        P: MovePolicy + ?Sized,
        O: StepObserver + ?Sized,
    {
        observer.observe(&engine.snapshot());

        let mut steps = 0u64;
        while steps < self.config.max_steps {
            let legal = engine.legal_moves();
            let Some((module, pivot)) = policy.select(&legal) else {
                info!(steps, "search stuck");
                return Ok(SearchOutcome::Stuck { steps });
            };
            engine.apply_move(module, pivot)?;
            steps += 1;
            observer.observe(&engine.snapshot());
            if engine.is_goal() {
                info!(steps, "goal reached");
                return Ok(SearchOutcome::Solved { steps });
            }
        }

        info!(steps, "search budget exhausted");
        Ok(SearchOutcome::Exhausted { steps })
    }
}
