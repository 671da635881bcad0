//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a module (one unit cube) of the lattice.
///
/// Modules are numbered `1..=n`. Module 1 is the anchor: the grid frame is
/// re-centred on it after every move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(pub u32);

impl ModuleId {
    /// The anchor module.
    pub const ANCHOR: ModuleId = ModuleId(1);

    /// Zero-based index into dense per-module tables.
    ///
    /// Only meaningful for valid ids (`>= 1`); `ModuleId(0)` maps to
    /// `usize::MAX` so that any table lookup misses.
    pub fn index(self) -> usize {
        (self.0 as usize).wrapping_sub(1)
    }

    /// Inverse of [`index`](Self::index).
    ///
    /// # Panics
    ///
    /// Panics if `index + 1` does not fit in `u32`.
    pub fn from_index(index: usize) -> Self {
        Self(u32::try_from(index + 1).expect("module index fits in u32"))
    }

    /// Whether this id names a module of a lattice with `module_count` modules.
    pub fn is_within(self, module_count: usize) -> bool {
        self.0 >= 1 && (self.0 as usize) <= module_count
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ModuleId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies one of the 48 canonical pivot moves.
///
/// Valid ids are `1..=48`; see `pivot-moves` for the table layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PivotId(pub u8);

impl PivotId {
    /// Number of entries in the pivot catalog.
    pub const COUNT: usize = 48;

    /// Whether the id falls inside `1..=48`.
    pub fn is_valid(self) -> bool {
        self.0 >= 1 && usize::from(self.0) <= Self::COUNT
    }

    /// Zero-based index into the catalog. Only meaningful for valid ids.
    pub fn index(self) -> usize {
        usize::from(self.0).wrapping_sub(1)
    }
}

impl fmt::Display for PivotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for PivotId {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

/// Number of moves applied since construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
