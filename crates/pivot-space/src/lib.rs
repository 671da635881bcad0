//! Spatial state for Pivot lattices.
//!
//! This crate owns the two pieces of state that every move query reads:
//!
//! - [`OccupancyGrid`]: the dense cubic occupancy array together with the
//!   module-to-position table, kept in bijection and anchored on module 1.
//! - [`connectivity`]: face adjacency between modules and the cut-vertex
//!   sweep that vetoes moves which would split the lattice.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod connectivity;
pub mod grid;

pub use connectivity::{articulation_points, component_count, face_adjacency, Edge};
pub use grid::OccupancyGrid;
