//! Exact lattice symmetries as signed permutation matrices.
//!
//! Quarter-turn rotations of the cubic lattice map integer cells to integer
//! cells, so no rounding is ever needed. The full symmetry group of the cube
//! (48 elements, 24 proper rotations plus their reflections) is available
//! through [`Rotation::all`] and is used to validate the pivot catalog.

use std::fmt;

use crate::coord::{Axis, Coord3};

/// A signed 3×3 permutation matrix acting on [`Coord3`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rotation {
    m: [[i32; 3]; 3],
}

/// `(cos, sin)` of `quarter_turns * 90°`.
fn quarter_cos_sin(quarter_turns: u8) -> (i32, i32) {
    match quarter_turns % 4 {
        0 => (1, 0),
        1 => (0, 1),
        2 => (-1, 0),
        _ => (0, -1),
    }
}

impl Rotation {
    /// The identity.
    pub const IDENTITY: Rotation = Rotation {
        m: [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
    };

    /// Build from a raw matrix, rejecting anything that is not a signed
    /// permutation.
    pub fn from_matrix(m: [[i32; 3]; 3]) -> Option<Self> {
        let mut seen_cols = [false; 3];
        for row in &m {
            let mut nonzero = None;
            for (col, &v) in row.iter().enumerate() {
                match v {
                    0 => {}
                    1 | -1 if nonzero.is_none() => nonzero = Some(col),
                    _ => return None,
                }
            }
            let col = nonzero?;
            if seen_cols[col] {
                return None;
            }
            seen_cols[col] = true;
        }
        Some(Self { m })
    }

    /// Right-handed rotation by `quarter_turns * 90°` about `axis`.
    pub fn about(axis: Axis, quarter_turns: u8) -> Self {
        let (c, s) = quarter_cos_sin(quarter_turns);
        let m = match axis {
            Axis::X => [[1, 0, 0], [0, c, -s], [0, s, c]],
            Axis::Y => [[c, 0, s], [0, 1, 0], [-s, 0, c]],
            Axis::Z => [[c, -s, 0], [s, c, 0], [0, 0, 1]],
        };
        Self { m }
    }

    /// The identity followed by the nine principal-axis turns:
    /// `Rx90, Rx180, Rx270, Ry90, Ry180, Ry270, Rz90, Rz180, Rz270`.
    pub fn principal() -> [Rotation; 10] {
        let mut out = [Rotation::IDENTITY; 10];
        let mut i = 1;
        for axis in Axis::ALL {
            for turns in 1..=3 {
                out[i] = Rotation::about(axis, turns);
                i += 1;
            }
        }
        out
    }

    /// All 48 symmetries of the cube, proper and improper.
    pub fn all() -> Vec<Rotation> {
        const PERMS: [[usize; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        let mut out = Vec::with_capacity(48);
        for perm in PERMS {
            for signs in 0u8..8 {
                let mut m = [[0; 3]; 3];
                for (row, &col) in perm.iter().enumerate() {
                    m[row][col] = if signs & (1 << row) == 0 { 1 } else { -1 };
                }
                out.push(Rotation { m });
            }
        }
        out
    }

    /// Determinant: `+1` for proper rotations, `-1` for reflections.
    pub fn det(&self) -> i32 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Whether this is a proper rotation (no reflection).
    pub fn is_proper(&self) -> bool {
        self.det() == 1
    }

    /// Apply to an offset (rotation about the origin).
    pub fn apply(&self, v: Coord3) -> Coord3 {
        let a = v.to_array();
        let row = |r: [i32; 3]| r[0] * a[0] + r[1] * a[1] + r[2] * a[2];
        Coord3::new(row(self.m[0]), row(self.m[1]), row(self.m[2]))
    }

    /// Apply to a cell, rotating about `center`.
    pub fn apply_about(&self, cell: Coord3, center: Coord3) -> Coord3 {
        self.apply(cell - center) + center
    }

    /// `self ∘ other`: apply `other` first, then `self`.
    pub fn compose(&self, other: &Rotation) -> Rotation {
        let mut m = [[0; 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, out) in row.iter_mut().enumerate() {
                *out = (0..3).map(|k| self.m[i][k] * other.m[k][j]).sum();
            }
        }
        Rotation { m }
    }

    /// Short label for the identity and the principal turns
    /// (`"I"`, `"Rx90"`, ...), `None` otherwise.
    pub fn label(&self) -> Option<&'static str> {
        const LABELS: [&str; 10] = [
            "I", "Rx90", "Rx180", "Rx270", "Ry90", "Ry180", "Ry270", "Rz90", "Rz180", "Rz270",
        ];
        Rotation::principal()
            .iter()
            .position(|r| r == self)
            .map(|i| LABELS[i])
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => f.write_str(label),
            None => write!(f, "{:?}", self.m),
        }
    }
}
