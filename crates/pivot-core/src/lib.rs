//! Core types for the Pivot lattice engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: module and
//! pivot identifiers, integer lattice coordinates, the cube symmetry group,
//! and the error types surfaced by construction and stepping.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod id;
pub mod rotation;

pub use coord::{Axis, Coord3, Layout};
pub use error::{BoundsError, ConfigError, LayoutKind, MoveError};
pub use id::{ModuleId, PivotId, StepId};
pub use rotation::Rotation;
