//! The compiled, validated move catalog.
//!
//! [`catalog`] compiles [`PIVOT_TABLE`] once per process. Compilation
//! checks every entry's shape, that each entry requires its mover occupied
//! and its destination empty, that no two entries coincide, that the table
//! is closed under all 48 symmetries of the cube, and that every entry has
//! an inverse.

use std::collections::HashMap;
use std::sync::OnceLock;

use pivot_core::{Coord3, PivotId, Rotation};
use pivot_space::OccupancyGrid;

use crate::error::CatalogError;
use crate::stencil::{CompiledPivot, Stencil};
use crate::table::{PivotMove, PIVOT_TABLE};

/// Orientation-free identity of a move: its sorted window cells plus its
/// displacement.
type MoveKey = (Vec<(Coord3, bool)>, Coord3);

fn move_key(cells: impl Iterator<Item = (Coord3, bool)>, displacement: Coord3) -> MoveKey {
    let mut cells: Vec<_> = cells.collect();
    cells.sort_unstable();
    (cells, displacement)
}

/// Compiled move table.
#[derive(Clone, Debug)]
pub struct Catalog {
    pivots: Vec<CompiledPivot>,
    /// `inverses[i]` undoes pivot `i + 1`.
    inverses: Vec<PivotId>,
}

impl Catalog {
    /// Compile and validate a move table.
    pub fn compile(table: &[PivotMove]) -> Result<Self, CatalogError> {
        let mut pivots = Vec::with_capacity(table.len());
        for (index, entry) in table.iter().enumerate() {
            // 1. Ids follow positions.
            if entry.id.index() != index {
                return Err(CatalogError::IdMismatch {
                    index,
                    found: entry.id,
                });
            }

            // 2. Pattern fits window.
            let stencil = Stencil::compile(entry)?;

            // 3. Mover occupied.
            if stencil.requirement(Coord3::ZERO) != Some(true) {
                return Err(CatalogError::MoverNotOccupied { pivot: entry.id });
            }

            // 4. Destination inside the window and empty.
            match stencil.requirement(entry.displacement) {
                None => return Err(CatalogError::DestinationOutsideWindow { pivot: entry.id }),
                Some(true) => return Err(CatalogError::DestinationNotEmpty { pivot: entry.id }),
                Some(false) => {}
            }

            pivots.push(CompiledPivot {
                id: entry.id,
                entry: *entry,
                stencil,
            });
        }

        // 5. No duplicates.
        let mut by_key: HashMap<MoveKey, PivotId> = HashMap::with_capacity(pivots.len());
        for p in &pivots {
            let key = move_key(p.stencil.cells().iter().copied(), p.displacement());
            if let Some(&first) = by_key.get(&key) {
                return Err(CatalogError::Duplicate {
                    first,
                    second: p.id,
                });
            }
            by_key.insert(key, p.id);
        }

        // 6. Closed under the cube's symmetry group.
        for rotation in Rotation::all() {
            for p in &pivots {
                let image = move_key(
                    p.stencil
                        .cells()
                        .iter()
                        .map(|&(o, occ)| (rotation.apply(o), occ)),
                    rotation.apply(p.displacement()),
                );
                if !by_key.contains_key(&image) {
                    return Err(CatalogError::NotClosedUnderSymmetry {
                        pivot: p.id,
                        rotation,
                    });
                }
            }
        }

        // 7. Every move can be undone.
        let mut inverses = Vec::with_capacity(pivots.len());
        for p in &pivots {
            let inverse = pivots
                .iter()
                .find(|q| undoes(q, p))
                .ok_or(CatalogError::MissingInverse { pivot: p.id })?;
            inverses.push(inverse.id);
        }

        Ok(Self { pivots, inverses })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.pivots.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.pivots.is_empty()
    }

    /// Look up an entry, `None` for ids outside the table.
    pub fn get(&self, pivot: PivotId) -> Option<&CompiledPivot> {
        if !pivot.is_valid() {
            return None;
        }
        self.pivots.get(pivot.index())
    }

    /// All entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = &CompiledPivot> {
        self.pivots.iter()
    }

    /// The entry that moves a module back from the destination of `pivot`.
    pub fn inverse(&self, pivot: PivotId) -> Option<PivotId> {
        if !pivot.is_valid() {
            return None;
        }
        self.inverses.get(pivot.index()).copied()
    }

    /// Whether `pivot` is geometrically legal for a module at `position`.
    ///
    /// Connectivity is not considered here; the engine vetoes cut vertices
    /// separately.
    pub fn is_legal(&self, grid: &OccupancyGrid, position: Coord3, pivot: PivotId) -> bool {
        self.get(pivot)
            .is_some_and(|p| p.stencil.matches(grid, position))
    }

    /// Every geometrically legal pivot for a module at `position`, ascending.
    pub fn legal_pivots(&self, grid: &OccupancyGrid, position: Coord3) -> Vec<PivotId> {
        self.pivots
            .iter()
            .filter(|p| p.stencil.matches(grid, position))
            .map(|p| p.id)
            .collect()
    }
}

/// Whether `q`, applied from the destination of `p`, is guaranteed legal
/// whenever `p` was and returns the module to where it started.
fn undoes(q: &CompiledPivot, p: &CompiledPivot) -> bool {
    let d = p.displacement();
    if q.displacement() != -d {
        return false;
    }
    q.stencil.cells().iter().all(|&(offset, occupied)| {
        // The same cell as seen from p's mover.
        let before = offset + d;
        let after = if before == Coord3::ZERO {
            Some(false)
        } else if before == d {
            Some(true)
        } else {
            p.stencil.requirement(before)
        };
        after == Some(occupied)
    })
}

/// The process-wide catalog compiled from [`PIVOT_TABLE`].
///
/// # Panics
///
/// Panics on first use if the built-in table fails validation.
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let compiled = Catalog::compile(&PIVOT_TABLE).expect("built-in pivot table is valid");
        tracing::debug!(entries = compiled.len(), "pivot catalog compiled");
        compiled
    })
}

/// Whether `pivot` is geometrically legal for a module at `position`.
pub fn legality_of(grid: &OccupancyGrid, position: Coord3, pivot: PivotId) -> bool {
    catalog().is_legal(grid, position, pivot)
}
