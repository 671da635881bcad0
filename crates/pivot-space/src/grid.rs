//! Dense cubic occupancy grid anchored on module 1.
//!
//! # Layout
//!
//! Cells are stored in a flat `Vec<u32>` of length `side³`, indexed
//! `x + side * (y + side * z)`. A zero entry is empty; any other value is
//! the id of the module occupying the cell. The position table is the exact
//! inverse of the non-zero cells.
//!
//! # Anchoring
//!
//! The anchor cell is `(side/2, side/2, side/2)`. Construction translates
//! the input layout so module 1 lands there, and every relocation
//! translates the whole lattice back so module 1 is there again. A
//! translation that would push any module off the grid is rejected before
//! anything is mutated.

use pivot_core::{BoundsError, ConfigError, Coord3, Layout, LayoutKind, ModuleId};

/// Minimum side length of the grid.
const MIN_SIDE: usize = 5;

/// The occupancy grid plus its inverse position table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    side: usize,
    anchor: Coord3,
    /// `side³` cells; `0` = empty, otherwise a module id.
    cells: Vec<u32>,
    /// Position of module `i + 1`.
    positions: Vec<Coord3>,
}

/// Side length of the grid for `module_count` modules: `max(5, 2n + 3)`.
///
/// A connected lattice of `n` modules never reaches further than `n - 1`
/// from module 1 and no move window reaches further than `n + 1`, so this
/// side always contains every reachable configuration.
///
/// The occupancy array holds `side³` four-byte cells, so memory grows with
/// the cube of the module count: about 1 MB at 30 modules, 70 MB at 128,
/// 540 MB at 256 and 8 GB at 1000. Lattices beyond a few hundred modules
/// are impractical with this representation.
pub fn side_for(module_count: usize) -> usize {
    MIN_SIDE.max(2 * module_count + 3)
}

impl OccupancyGrid {
    /// Build a grid from an initial layout.
    ///
    /// Equivalent to [`with_kind`](Self::with_kind) with
    /// [`LayoutKind::Initial`].
    pub fn new(layout: &Layout, module_count: usize) -> Result<Self, ConfigError> {
        Self::with_kind(layout, module_count, LayoutKind::Initial)
    }

    /// Build a grid from `layout`, tagging any error with `kind`.
    ///
    /// The layout is translated so module 1 sits on the anchor cell.
    pub fn with_kind(
        layout: &Layout,
        module_count: usize,
        kind: LayoutKind,
    ) -> Result<Self, ConfigError> {
        // 1. At least one module.
        if module_count == 0 {
            return Err(ConfigError::NoModules);
        }

        // 2. Non-empty layout.
        if layout.is_empty() {
            return Err(match kind {
                LayoutKind::Initial => ConfigError::EmptyInitial,
                LayoutKind::Goal => ConfigError::EmptyGoal,
            });
        }

        // 3. Anchor present.
        let Some(&anchor_pos) = layout.get(&ModuleId::ANCHOR) else {
            return Err(ConfigError::MissingAnchor);
        };

        // 4. No ids outside 1..=n.
        if let Some(&module) = layout.keys().find(|m| !m.is_within(module_count)) {
            return Err(ConfigError::UnknownModule {
                layout: kind,
                module,
            });
        }

        // 5. Every id in 1..=n present.
        let mut raw = Vec::with_capacity(module_count);
        for i in 0..module_count {
            let module = ModuleId::from_index(i);
            match layout.get(&module) {
                Some(&pos) => raw.push(pos),
                None => {
                    return Err(ConfigError::MissingModule {
                        layout: kind,
                        module,
                    })
                }
            }
        }

        let side = side_for(module_count);
        let anchor = anchor_cell(side);

        // 6. Everything inside the grid after anchoring. Coordinates too
        // far apart to translate without overflow cannot fit either.
        let positions = raw
            .into_iter()
            .map(|p| anchored(p, anchor_pos, anchor, side))
            .collect::<Result<Vec<_>, _>>()
            .and_then(|positions| check_all_inside(&positions, side).map(|()| positions))
            .map_err(|source| ConfigError::OutOfBounds { layout: kind, source })?;

        // 7. No shared cells.
        let mut cells = vec![0u32; side * side * side];
        for (i, &pos) in positions.iter().enumerate() {
            let idx = flat_index(pos, side);
            if cells[idx] != 0 {
                return Err(ConfigError::Overlap {
                    layout: kind,
                    cell: pos,
                    first: ModuleId(cells[idx]),
                    second: ModuleId::from_index(i),
                });
            }
            cells[idx] = ModuleId::from_index(i).0;
        }

        Ok(Self {
            side,
            anchor,
            cells,
            positions,
        })
    }

    /// Side length of the cubic grid.
    pub fn side(&self) -> usize {
        self.side
    }

    /// The fixed cell module 1 is kept on.
    pub fn anchor(&self) -> Coord3 {
        self.anchor
    }

    /// Number of modules.
    pub fn module_count(&self) -> usize {
        self.positions.len()
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: Coord3) -> bool {
        inside(cell, self.side)
    }

    /// The module occupying `cell`, or `None` for empty or out-of-grid cells.
    pub fn occupancy_at(&self, cell: Coord3) -> Option<ModuleId> {
        if !self.contains(cell) {
            return None;
        }
        match self.cells[flat_index(cell, self.side)] {
            0 => None,
            id => Some(ModuleId(id)),
        }
    }

    /// Whether `cell` is inside the grid and occupied.
    pub fn is_occupied(&self, cell: Coord3) -> bool {
        self.occupancy_at(cell).is_some()
    }

    /// Position of `module`, or `None` if the id is out of range.
    pub fn position_of(&self, module: ModuleId) -> Option<Coord3> {
        self.positions.get(module.index()).copied()
    }

    /// The position table, indexed by `module - 1`.
    pub fn positions(&self) -> &[Coord3] {
        &self.positions
    }

    /// Iterate `(module, position)` in id order.
    pub fn modules(&self) -> impl Iterator<Item = (ModuleId, Coord3)> + '_ {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, &p)| (ModuleId::from_index(i), p))
    }

    /// The positions as an ordered [`Layout`].
    pub fn layout(&self) -> Layout {
        self.modules().collect()
    }

    /// Whether both grids place every module on the same cell.
    ///
    /// Because the grid is the inverse of the position table, this is the
    /// same as comparing the occupancy arrays cell by cell.
    pub fn same_layout(&self, other: &OccupancyGrid) -> bool {
        self.side == other.side && self.positions == other.positions
    }

    /// Translate the lattice so module 1 sits on the anchor again.
    pub fn recenter(&mut self) -> Result<(), BoundsError> {
        let shifted = recentered(&self.positions, self.anchor);
        check_all_inside(&shifted, self.side)?;
        self.replace_positions(shifted);
        Ok(())
    }

    /// Move `module` to `destination`, then recenter.
    ///
    /// Atomic: the destination and every recentered position are
    /// bounds-checked first, and on error the grid is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `module` is not a module of this grid.
    pub fn relocate(&mut self, module: ModuleId, destination: Coord3) -> Result<(), BoundsError> {
        self.check_relocation(module, destination)?;
        debug_assert!(
            !self.is_occupied(destination),
            "relocating module {module} onto occupied cell {destination}"
        );

        let mut moved = self.positions.clone();
        moved[module.index()] = destination;
        let shifted = recentered(&moved, self.anchor);

        tracing::trace!(%module, to = %destination, "relocate");
        self.replace_positions(shifted);
        Ok(())
    }

    /// Whether [`relocate`](Self::relocate) would accept this move.
    ///
    /// Does not mutate. The destination and every position after
    /// recentering must stay on the grid.
    pub fn can_relocate(&self, module: ModuleId, destination: Coord3) -> bool {
        self.check_relocation(module, destination).is_ok()
    }

    fn check_relocation(&self, module: ModuleId, destination: Coord3) -> Result<(), BoundsError> {
        let side = self.side;
        if !self.contains(destination) {
            return Err(BoundsError {
                cell: destination,
                side,
            });
        }
        // Only moving module 1 shifts the frame.
        let shift = if module == ModuleId::ANCHOR {
            self.anchor - destination
        } else {
            Coord3::ZERO
        };
        for (i, &pos) in self.positions.iter().enumerate() {
            let pos = if i == module.index() { destination } else { pos };
            let cell = pos + shift;
            if !inside(cell, side) {
                return Err(BoundsError { cell, side });
            }
        }
        Ok(())
    }

    /// Swap in a new position table, clearing only the cells the old one
    /// occupied.
    fn replace_positions(&mut self, positions: Vec<Coord3>) {
        for &pos in &self.positions {
            self.cells[flat_index(pos, self.side)] = 0;
        }
        self.positions = positions;
        for (i, &pos) in self.positions.iter().enumerate() {
            self.cells[flat_index(pos, self.side)] = ModuleId::from_index(i).0;
        }
    }
}

fn anchor_cell(side: usize) -> Coord3 {
    let half = (side / 2) as i32;
    Coord3::new(half, half, half)
}

fn inside(cell: Coord3, side: usize) -> bool {
    let side = side as i32;
    (0..side).contains(&cell.x) && (0..side).contains(&cell.y) && (0..side).contains(&cell.z)
}

/// Caller guarantees `inside(cell, side)`.
fn flat_index(cell: Coord3, side: usize) -> usize {
    cell.x as usize + side * (cell.y as usize + side * cell.z as usize)
}

/// `p` translated by `anchor - anchor_pos`, rejecting overflow.
fn anchored(
    p: Coord3,
    anchor_pos: Coord3,
    anchor: Coord3,
    side: usize,
) -> Result<Coord3, BoundsError> {
    p.checked_sub(anchor_pos)
        .and_then(|d| d.checked_add(anchor))
        .ok_or(BoundsError { cell: p, side })
}

fn recentered(positions: &[Coord3], anchor: Coord3) -> Vec<Coord3> {
    let offset = anchor - positions[0];
    positions.iter().map(|&p| p + offset).collect()
}

fn check_all_inside(positions: &[Coord3], side: usize) -> Result<(), BoundsError> {
    match positions.iter().find(|&&p| !inside(p, side)) {
        Some(&cell) => Err(BoundsError { cell, side }),
        None => Ok(()),
    }
}
