//! Errors from compiling and validating the move table.

use std::error::Error;
use std::fmt;

use pivot_core::{PivotId, Rotation};

/// A move table failed validation.
///
/// The built-in table always validates; these surface when compiling a
/// hand-edited table through [`Catalog::compile`](crate::Catalog::compile).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// An entry's id does not match its position in the table.
    IdMismatch {
        /// Zero-based position in the table.
        index: usize,
        /// The id found there.
        found: PivotId,
    },
    /// The pattern does not fit the window.
    ShapeMismatch {
        /// The offending entry.
        pivot: PivotId,
        /// What does not line up.
        reason: String,
    },
    /// The window does not require the mover's own cell to be occupied.
    MoverNotOccupied {
        /// The offending entry.
        pivot: PivotId,
    },
    /// The destination cell lies outside the window.
    DestinationOutsideWindow {
        /// The offending entry.
        pivot: PivotId,
    },
    /// The window does not require the destination to be empty.
    DestinationNotEmpty {
        /// The offending entry.
        pivot: PivotId,
    },
    /// Two entries describe the same move.
    Duplicate {
        /// The earlier entry.
        first: PivotId,
        /// The later entry.
        second: PivotId,
    },
    /// Some lattice symmetry maps an entry onto a move missing from the table.
    NotClosedUnderSymmetry {
        /// The entry whose image is missing.
        pivot: PivotId,
        /// The symmetry that produced it.
        rotation: Rotation,
    },
    /// No entry undoes this one from the destination.
    MissingInverse {
        /// The entry without an inverse.
        pivot: PivotId,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdMismatch { index, found } => {
                write!(f, "table slot {index} holds pivot {found}, expected {}", index + 1)
            }
            Self::ShapeMismatch { pivot, reason } => {
                write!(f, "pivot {pivot}: pattern does not fit window: {reason}")
            }
            Self::MoverNotOccupied { pivot } => {
                write!(f, "pivot {pivot}: mover cell is not required occupied")
            }
            Self::DestinationOutsideWindow { pivot } => {
                write!(f, "pivot {pivot}: destination lies outside the window")
            }
            Self::DestinationNotEmpty { pivot } => {
                write!(f, "pivot {pivot}: destination is not required empty")
            }
            Self::Duplicate { first, second } => {
                write!(f, "pivots {first} and {second} describe the same move")
            }
            Self::NotClosedUnderSymmetry { pivot, rotation } => write!(
                f,
                "pivot {pivot}: image under {rotation} is missing from the table"
            ),
            Self::MissingInverse { pivot } => write!(f, "pivot {pivot} has no inverse"),
        }
    }
}

impl Error for CatalogError {}
