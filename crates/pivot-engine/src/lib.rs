//! Lattice engine for modular self-reconfigurable cube robots.
//!
//! [`LatticeEngine`] answers three questions about a lattice of unit-cube
//! modules: which of the 48 pivots each module may legally make right now,
//! what the lattice looks like after one of them, and whether it matches
//! the goal under some principal-axis rotation. Moves that would split the
//! lattice are vetoed by cut-vertex detection.
//!
//! On top of the engine sit a seedable [`RandomPolicy`] and a bounded
//! [`RandomSearch`] loop that reports each step to a [`StepObserver`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod goal;
pub mod observer;
pub mod policy;
pub mod search;

pub use config::{EngineConfig, SearchConfig};
pub use engine::{LatticeEngine, LegalMoves, Snapshot};
pub use goal::GoalMatcher;
pub use observer::{NullObserver, StepObserver, TrajectoryRecorder};
pub use policy::{MovePolicy, RandomPolicy};
pub use search::{RandomSearch, SearchOutcome};
