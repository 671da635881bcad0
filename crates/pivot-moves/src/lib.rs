//! Pivot move catalog for cube-lattice modules.
//!
//! The 48 canonical pivots live in one static table, [`PIVOT_TABLE`]. Each
//! entry describes a precondition window around the moving module, the
//! occupancy that window must show, and where the module lands. The table
//! is compiled once per process into flat [`Stencil`]s and validated,
//! including closure under every symmetry of the cube.
//!
//! # Example
//!
//! ```
//! use pivot_core::{Coord3, Layout, ModuleId, PivotId};
//! use pivot_moves::catalog;
//! use pivot_space::OccupancyGrid;
//!
//! let layout: Layout = [
//!     (ModuleId(1), Coord3::new(4, 4, 4)),
//!     (ModuleId(2), Coord3::new(4, 5, 4)),
//!     (ModuleId(3), Coord3::new(5, 5, 4)),
//! ]
//! .into_iter()
//! .collect();
//! let grid = OccupancyGrid::new(&layout, 3).unwrap();
//! let legal = catalog().legal_pivots(&grid, grid.anchor());
//! assert_eq!(legal, [3, 12, 38, 40].map(PivotId).to_vec());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod stencil;
pub mod table;

#[cfg(test)]
pub(crate) mod compliance;

pub use catalog::{catalog, legality_of, Catalog};
pub use error::CatalogError;
pub use stencil::{CompiledPivot, Stencil};
pub use table::{PivotKind, PivotMove, Span, Sweep, PIVOT_TABLE};
