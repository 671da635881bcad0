//! Compiled precondition stencils.
//!
//! A [`Stencil`] is a table entry's window flattened into `(offset,
//! occupied)` pairs relative to the mover, in sweep order. Checking a move
//! is then a single pass over at most nine cells with no pattern parsing.

use pivot_core::{Axis, Coord3, PivotId};
use pivot_space::OccupancyGrid;
use smallvec::SmallVec;

use crate::error::CatalogError;
use crate::table::PivotMove;

/// A flattened precondition window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stencil {
    cells: SmallVec<[(Coord3, bool); 9]>,
}

impl Stencil {
    /// Flatten `entry`'s window and pattern.
    ///
    /// Fails with [`CatalogError::ShapeMismatch`] unless the window has
    /// exactly one fixed axis and the pattern has one row per cell of the
    /// first free axis, one column per cell of the second, and only `#`
    /// or `.` bytes.
    pub fn compile(entry: &PivotMove) -> Result<Self, CatalogError> {
        let mismatch = |reason: String| CatalogError::ShapeMismatch {
            pivot: entry.id,
            reason,
        };

        let free: SmallVec<[Axis; 3]> = Axis::ALL
            .into_iter()
            .filter(|a| !entry.window[a.index()].is_fixed())
            .collect();
        if free.len() != 2 {
            return Err(mismatch(format!(
                "window must have exactly two free axes, found {}",
                free.len()
            )));
        }
        let (row_axis, col_axis) = (free[0], free[1]);
        let rows = entry.window[row_axis.index()];
        let cols = entry.window[col_axis.index()];
        if rows.is_empty() || cols.is_empty() {
            return Err(mismatch("window span is empty".into()));
        }
        if entry.pattern.len() != rows.len() {
            return Err(mismatch(format!(
                "pattern has {} rows, window {row_axis} spans {}",
                entry.pattern.len(),
                rows.len()
            )));
        }

        let mut cells = SmallVec::new();
        for (line, r) in entry.pattern.iter().zip(rows.offsets()) {
            let bytes = line.as_bytes();
            if bytes.len() != cols.len() {
                return Err(mismatch(format!(
                    "pattern row {line:?} has {} columns, window {col_axis} spans {}",
                    bytes.len(),
                    cols.len()
                )));
            }
            for (&b, c) in bytes.iter().zip(cols.offsets()) {
                let occupied = match b {
                    b'#' => true,
                    b'.' => false,
                    other => {
                        return Err(mismatch(format!(
                            "unexpected pattern byte {:?}",
                            other as char
                        )))
                    }
                };
                let offset = Coord3::ZERO.with(row_axis, r).with(col_axis, c);
                cells.push((offset, occupied));
            }
        }
        Ok(Self { cells })
    }

    /// `(offset, occupied)` pairs in sweep order.
    pub fn cells(&self) -> &[(Coord3, bool)] {
        &self.cells
    }

    /// Required occupancy at `offset`, or `None` outside the window.
    pub fn requirement(&self, offset: Coord3) -> Option<bool> {
        self.cells
            .iter()
            .find(|(o, _)| *o == offset)
            .map(|&(_, occ)| occ)
    }

    /// Whether the grid around `position` matches exactly.
    ///
    /// A window cell outside the grid never matches.
    pub fn matches(&self, grid: &OccupancyGrid, position: Coord3) -> bool {
        self.cells.iter().all(|&(offset, occupied)| {
            let cell = position + offset;
            grid.contains(cell) && grid.is_occupied(cell) == occupied
        })
    }
}

/// A table entry with its stencil, ready for legality queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledPivot {
    /// Move id.
    pub id: PivotId,
    /// Source entry.
    pub entry: PivotMove,
    /// Flattened window.
    pub stencil: Stencil,
}

impl CompiledPivot {
    /// Offset from the mover's cell to its destination.
    pub fn displacement(&self) -> Coord3 {
        self.entry.displacement
    }
}
