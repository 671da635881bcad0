//! The static pivot move table.
//!
//! 48 entries: three principal planes (XY = 1..=16, XZ = 17..=32,
//! YZ = 33..=48), four orientation blocks per plane, four variants per
//! block. With the plane's axes written `(a, b)`:
//!
//! | Block | Motion                       | Variants                                |
//! |-------|------------------------------|-----------------------------------------|
//! | 0     | toward `+a`                  | slide/corner on `-b`, then on `+b`      |
//! | 1     | along `b`, supported on `+a` | slide/corner to `+b`, then to `-b`      |
//! | 2     | toward `-a`                  | block 0 mirrored in `a`                 |
//! | 3     | along `b`, supported on `-a` | block 1 mirrored in `a`                 |
//!
//! A **slide** toward `d` over support `s` needs the mover, `s` and
//! `d + s` occupied and `d`, `-s`, `d - s` empty; the module ends on `d`.
//! A **corner** round neighbour `n` toward `q` needs only the mover and `n`
//! occupied inside a 3×3 window that reaches two cells along `q`; the
//! module ends on `n + q`.
//!
//! # Pattern layout
//!
//! Rows walk the first non-fixed axis of the window (in `x, y, z` order)
//! and columns walk the second, each in that axis' sweep direction. A
//! window that reaches into negative Y or Z sweeps that axis high-to-low,
//! so a descending entry is written with the same picture as its positive
//! mirror.

use pivot_core::{Coord3, PivotId};

/// Shape of a pivot move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PivotKind {
    /// One-cell translation along a supporting face.
    Slide,
    /// Diagonal hop around the edge of a neighbour.
    Corner,
}

/// Order in which a window axis is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sweep {
    /// `low..=high`.
    Ascending,
    /// `high..=low`.
    Descending,
}

/// Extent of a precondition window along one axis, relative to the mover.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    /// Lowest offset, inclusive.
    pub low: i32,
    /// Highest offset, inclusive.
    pub high: i32,
    /// Reading order.
    pub sweep: Sweep,
}

impl Span {
    /// Number of cells covered.
    pub fn len(&self) -> usize {
        (self.high - self.low + 1).max(0) as usize
    }

    /// Whether the span covers no cells.
    pub fn is_empty(&self) -> bool {
        self.high < self.low
    }

    /// Whether this is the fixed `0..=0` axis of a planar window.
    pub fn is_fixed(&self) -> bool {
        self.low == 0 && self.high == 0
    }

    /// Offsets in sweep order.
    pub fn offsets(&self) -> impl Iterator<Item = i32> {
        let (low, high, sweep) = (self.low, self.high, self.sweep);
        (0..self.len() as i32).map(move |i| match sweep {
            Sweep::Ascending => low + i,
            Sweep::Descending => high - i,
        })
    }
}

/// One entry of the move table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PivotMove {
    /// Move id, `1..=48`, equal to the entry's position plus one.
    pub id: PivotId,
    /// Slide or corner.
    pub kind: PivotKind,
    /// Window extent along `x`, `y`, `z`.
    pub window: [Span; 3],
    /// Expected occupancy, `#` occupied and `.` empty.
    pub pattern: &'static [&'static str],
    /// Offset from the mover's cell to its destination.
    pub displacement: Coord3,
}

const FIXED: Span = Span {
    low: 0,
    high: 0,
    sweep: Sweep::Ascending,
};

const fn up(low: i32, high: i32) -> Span {
    Span {
        low,
        high,
        sweep: Sweep::Ascending,
    }
}

const fn down(low: i32, high: i32) -> Span {
    Span {
        low,
        high,
        sweep: Sweep::Descending,
    }
}

const fn entry(
    id: u8,
    kind: PivotKind,
    window: [Span; 3],
    pattern: &'static [&'static str],
    d: (i32, i32, i32),
) -> PivotMove {
    PivotMove {
        id: PivotId(id),
        kind,
        window,
        pattern,
        displacement: Coord3::new(d.0, d.1, d.2),
    }
}

const fn slide(
    id: u8,
    window: [Span; 3],
    pattern: &'static [&'static str],
    d: (i32, i32, i32),
) -> PivotMove {
    entry(id, PivotKind::Slide, window, pattern, d)
}

const fn corner(
    id: u8,
    window: [Span; 3],
    pattern: &'static [&'static str],
    d: (i32, i32, i32),
) -> PivotMove {
    entry(id, PivotKind::Corner, window, pattern, d)
}

/// The canonical move table, indexed by `id - 1`.
#[rustfmt::skip]
pub static PIVOT_TABLE: [PivotMove; PivotId::COUNT] = [
    // ── XY plane ──
    // block 0
    slide(1, [up(0, 1), up(-1, 1), FIXED], &["##.", "#.."], (1, 0, 0)),
    corner(2, [up(0, 2), up(-1, 1), FIXED], &["##.", "...", "..."], (1, -1, 0)),
    slide(3, [up(0, 1), up(-1, 1), FIXED], &[".##", "..#"], (1, 0, 0)),
    corner(4, [up(0, 2), up(-1, 1), FIXED], &[".##", "...", "..."], (1, 1, 0)),
    // block 1
    slide(5, [up(-1, 1), up(0, 1), FIXED], &["..", "#.", "##"], (0, 1, 0)),
    corner(6, [up(-1, 1), up(0, 2), FIXED], &["...", "#..", "#.."], (1, 1, 0)),
    slide(7, [up(-1, 1), down(-1, 0), FIXED], &["..", "#.", "##"], (0, -1, 0)),
    corner(8, [up(-1, 1), down(-2, 0), FIXED], &["...", "#..", "#.."], (1, -1, 0)),
    // block 2
    slide(9, [up(-1, 0), up(-1, 1), FIXED], &["#..", "##."], (-1, 0, 0)),
    corner(10, [up(-2, 0), up(-1, 1), FIXED], &["...", "...", "##."], (-1, -1, 0)),
    slide(11, [up(-1, 0), up(-1, 1), FIXED], &["..#", ".##"], (-1, 0, 0)),
    corner(12, [up(-2, 0), up(-1, 1), FIXED], &["...", "...", ".##"], (-1, 1, 0)),
    // block 3
    slide(13, [up(-1, 1), up(0, 1), FIXED], &["##", "#.", ".."], (0, 1, 0)),
    corner(14, [up(-1, 1), up(0, 2), FIXED], &["#..", "#..", "..."], (-1, 1, 0)),
    slide(15, [up(-1, 1), down(-1, 0), FIXED], &["##", "#.", ".."], (0, -1, 0)),
    corner(16, [up(-1, 1), down(-2, 0), FIXED], &["#..", "#..", "..."], (-1, -1, 0)),
    // ── XZ plane ──
    // block 0
    slide(17, [up(0, 1), FIXED, up(-1, 1)], &["##.", "#.."], (1, 0, 0)),
    corner(18, [up(0, 2), FIXED, up(-1, 1)], &["##.", "...", "..."], (1, 0, -1)),
    slide(19, [up(0, 1), FIXED, up(-1, 1)], &[".##", "..#"], (1, 0, 0)),
    corner(20, [up(0, 2), FIXED, up(-1, 1)], &[".##", "...", "..."], (1, 0, 1)),
    // block 1
    slide(21, [up(-1, 1), FIXED, up(0, 1)], &["..", "#.", "##"], (0, 0, 1)),
    corner(22, [up(-1, 1), FIXED, up(0, 2)], &["...", "#..", "#.."], (1, 0, 1)),
    slide(23, [up(-1, 1), FIXED, down(-1, 0)], &["..", "#.", "##"], (0, 0, -1)),
    corner(24, [up(-1, 1), FIXED, down(-2, 0)], &["...", "#..", "#.."], (1, 0, -1)),
    // block 2
    slide(25, [up(-1, 0), FIXED, up(-1, 1)], &["#..", "##."], (-1, 0, 0)),
    corner(26, [up(-2, 0), FIXED, up(-1, 1)], &["...", "...", "##."], (-1, 0, -1)),
    slide(27, [up(-1, 0), FIXED, up(-1, 1)], &["..#", ".##"], (-1, 0, 0)),
    corner(28, [up(-2, 0), FIXED, up(-1, 1)], &["...", "...", ".##"], (-1, 0, 1)),
    // block 3
    slide(29, [up(-1, 1), FIXED, up(0, 1)], &["##", "#.", ".."], (0, 0, 1)),
    corner(30, [up(-1, 1), FIXED, up(0, 2)], &["#..", "#..", "..."], (-1, 0, 1)),
    slide(31, [up(-1, 1), FIXED, down(-1, 0)], &["##", "#.", ".."], (0, 0, -1)),
    corner(32, [up(-1, 1), FIXED, down(-2, 0)], &["#..", "#..", "..."], (-1, 0, -1)),
    // ── YZ plane ──
    // block 0
    slide(33, [FIXED, up(0, 1), up(-1, 1)], &["##.", "#.."], (0, 1, 0)),
    corner(34, [FIXED, up(0, 2), up(-1, 1)], &["##.", "...", "..."], (0, 1, -1)),
    slide(35, [FIXED, up(0, 1), up(-1, 1)], &[".##", "..#"], (0, 1, 0)),
    corner(36, [FIXED, up(0, 2), up(-1, 1)], &[".##", "...", "..."], (0, 1, 1)),
    // block 1
    slide(37, [FIXED, up(-1, 1), up(0, 1)], &["..", "#.", "##"], (0, 0, 1)),
    corner(38, [FIXED, up(-1, 1), up(0, 2)], &["...", "#..", "#.."], (0, 1, 1)),
    slide(39, [FIXED, up(-1, 1), down(-1, 0)], &["..", "#.", "##"], (0, 0, -1)),
    corner(40, [FIXED, up(-1, 1), down(-2, 0)], &["...", "#..", "#.."], (0, 1, -1)),
    // block 2
    slide(41, [FIXED, down(-1, 0), up(-1, 1)], &["##.", "#.."], (0, -1, 0)),
    corner(42, [FIXED, down(-2, 0), up(-1, 1)], &["##.", "...", "..."], (0, -1, -1)),
    slide(43, [FIXED, down(-1, 0), up(-1, 1)], &[".##", "..#"], (0, -1, 0)),
    corner(44, [FIXED, down(-2, 0), up(-1, 1)], &[".##", "...", "..."], (0, -1, 1)),
    // block 3
    slide(45, [FIXED, up(-1, 1), up(0, 1)], &["##", "#.", ".."], (0, 0, 1)),
    corner(46, [FIXED, up(-1, 1), up(0, 2)], &["#..", "#..", "..."], (0, -1, 1)),
    slide(47, [FIXED, up(-1, 1), down(-1, 0)], &["##", "#.", ".."], (0, 0, -1)),
    corner(48, [FIXED, up(-1, 1), down(-2, 0)], &["#..", "#..", "..."], (0, -1, -1)),
];
