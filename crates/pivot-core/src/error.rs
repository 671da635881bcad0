//! Error types for the Pivot lattice engine, organized by subsystem:
//! grid bounds, construction-time configuration, and move application.

use std::error::Error;
use std::fmt;

use crate::coord::Coord3;
use crate::id::{ModuleId, PivotId};

/// A cell fell outside the fixed cubic grid.
///
/// The grid never grows; any operation that would place a module outside
/// `[0, side)` on some axis is rejected before mutating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsError {
    /// The offending cell.
    pub cell: Coord3,
    /// Side length of the grid.
    pub side: usize,
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cell {} is outside the grid of side {}",
            self.cell, self.side
        )
    }
}

impl Error for BoundsError {}

/// Which input layout a [`ConfigError`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutKind {
    /// The starting layout.
    Initial,
    /// The target layout.
    Goal,
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial => f.write_str("initial"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Errors detected while validating an engine configuration.
///
/// All of these are unrecoverable: the engine is never constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The initial layout has no modules.
    EmptyInitial,
    /// The goal layout has no modules.
    EmptyGoal,
    /// `module_count` is zero.
    NoModules,
    /// Module 1, the anchor, is absent from a layout.
    MissingAnchor,
    /// A module in `1..=module_count` has no position.
    MissingModule {
        /// Layout the module is missing from.
        layout: LayoutKind,
        /// The missing module.
        module: ModuleId,
    },
    /// A layout names a module outside `1..=module_count`.
    UnknownModule {
        /// Layout containing the module.
        layout: LayoutKind,
        /// The out-of-range module.
        module: ModuleId,
    },
    /// Two modules occupy the same cell.
    Overlap {
        /// Layout containing the overlap.
        layout: LayoutKind,
        /// The shared cell, after anchoring.
        cell: Coord3,
        /// The module placed first.
        first: ModuleId,
        /// The module placed second.
        second: ModuleId,
    },
    /// After anchoring (or rotating, for goal targets) a module left the grid.
    OutOfBounds {
        /// Layout that overflowed.
        layout: LayoutKind,
        /// The underlying bounds violation.
        source: BoundsError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInitial => write!(f, "initial layout is empty"),
            Self::EmptyGoal => write!(f, "goal layout is empty"),
            Self::NoModules => write!(f, "module_count must be at least 1"),
            Self::MissingAnchor => write!(f, "anchor module 1 is missing"),
            Self::MissingModule { layout, module } => {
                write!(f, "{layout} layout has no position for module {module}")
            }
            Self::UnknownModule { layout, module } => {
                write!(f, "{layout} layout names unknown module {module}")
            }
            Self::Overlap {
                layout,
                cell,
                first,
                second,
            } => write!(
                f,
                "{layout} layout places modules {first} and {second} on the same cell {cell}"
            ),
            Self::OutOfBounds { layout, source } => {
                write!(f, "{layout} layout does not fit the grid: {source}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::OutOfBounds { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Errors from applying a pivot move, and from per-module move queries.
///
/// Always a caller error; the engine state is untouched when one is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The module id is outside `1..=n`.
    UnknownModule {
        /// The rejected module.
        module: ModuleId,
    },
    /// The pivot id is outside `1..=48`.
    UnknownPivot {
        /// The rejected pivot.
        pivot: PivotId,
    },
    /// The pivot is not in the module's current legal list.
    NotLegal {
        /// The module asked to move.
        module: ModuleId,
        /// The rejected pivot.
        pivot: PivotId,
    },
    /// The move would leave the grid.
    OutOfBounds(BoundsError),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownModule { module } => write!(f, "unknown module {module}"),
            Self::UnknownPivot { pivot } => write!(f, "unknown pivot {pivot}, expected 1..=48"),
            Self::NotLegal { module, pivot } => {
                write!(f, "pivot {pivot} is not legal for module {module}")
            }
            Self::OutOfBounds(e) => write!(f, "move rejected: {e}"),
        }
    }
}

impl Error for MoveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::OutOfBounds(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoundsError> for MoveError {
    fn from(e: BoundsError) -> Self {
        Self::OutOfBounds(e)
    }
}
