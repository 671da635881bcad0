//! Pivot: a lattice engine for modular self-reconfigurable cube robots.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Pivot sub-crates. For most users, adding `pivot` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use pivot::prelude::*;
//!
//! let l = |cells: &[(i32, i32, i32)]| -> Layout {
//!     cells
//!         .iter()
//!         .enumerate()
//!         .map(|(i, &c)| (ModuleId::from_index(i), Coord3::from(c)))
//!         .collect()
//! };
//!
//! let initial = l(&[(4, 4, 4), (4, 5, 4), (5, 5, 4)]);
//! let goal = l(&[(4, 4, 4), (4, 5, 4), (5, 4, 4)]);
//! let mut engine = LatticeEngine::new(EngineConfig::new(initial, goal)).unwrap();
//!
//! // Module 2 holds the L together, so only the ends may pivot.
//! let moves = engine.legal_moves();
//! assert!(moves[&ModuleId(2)].is_empty());
//! assert_eq!(
//!     moves[&ModuleId(3)],
//!     vec![PivotId(14), PivotId(15), PivotId(30), PivotId(32)]
//! );
//!
//! engine.apply_move(ModuleId(3), PivotId(15)).unwrap();
//! assert!(engine.is_goal());
//! assert_eq!(engine.step(), StepId(1));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `pivot-core` | IDs, coordinates, rotations, error types |
//! | [`space`] | `pivot-space` | Occupancy grid and cut-vertex detection |
//! | [`moves`] | `pivot-moves` | The 48-pivot catalog and legality checks |
//! | [`engine`] | `pivot-engine` | Lattice engine, goal matching, random search |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, IDs, and errors (`pivot-core`).
///
/// Contains [`types::Coord3`], [`types::Rotation`], the ID newtypes, and
/// the [`types::ConfigError`] and [`types::MoveError`] enums.
pub use pivot_core as types;

/// Occupancy grid and connectivity (`pivot-space`).
///
/// [`space::OccupancyGrid`] stores the lattice both ways round;
/// [`space::articulation_points`] finds the modules that must not move.
pub use pivot_space as space;

/// Pivot catalog (`pivot-moves`).
///
/// [`moves::catalog`] returns the validated 48-entry table.
pub use pivot_moves as moves;

/// Lattice engine and search (`pivot-engine`).
///
/// [`engine::LatticeEngine`] for stepping by hand, [`engine::RandomSearch`]
/// for a bounded random walk toward the goal.
pub use pivot_engine as engine;

/// Common imports for typical Pivot usage.
///
/// ```rust
/// use pivot::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use pivot_core::{Axis, Coord3, Layout, ModuleId, PivotId, Rotation, StepId};

    // Errors
    pub use pivot_core::{ConfigError, MoveError};

    // Catalog
    pub use pivot_moves::catalog;

    // Engine
    pub use pivot_engine::{
        EngineConfig, LatticeEngine, LegalMoves, MovePolicy, RandomPolicy, RandomSearch,
        SearchConfig, SearchOutcome, Snapshot, StepObserver, TrajectoryRecorder,
    };
}
