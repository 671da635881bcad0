//! Reusable lattice fixtures.
//!
//! - [`l_tromino`]: the three-module L used throughout the regression tests.
//! - [`line`], [`square`], [`ring`]: small shapes with known cut vertices.
//! - [`random_polycube`]: seeded connected lattices for property tests.

use std::collections::HashSet;

use pivot_core::{Axis, Coord3, Layout, ModuleId, Rotation};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Number modules `1..=n` in the order given.
pub fn layout(cells: &[(i32, i32, i32)]) -> Layout {
    cells
        .iter()
        .enumerate()
        .map(|(i, &c)| (ModuleId::from_index(i), Coord3::from(c)))
        .collect()
}

/// `1:(4,4,4), 2:(4,5,4), 3:(5,5,4)`. Module 2 is the only cut vertex.
pub fn l_tromino() -> Layout {
    layout(&[(4, 4, 4), (4, 5, 4), (5, 5, 4)])
}

/// `n` modules in a straight line along `axis`, module 1 at the origin.
pub fn line(n: usize, axis: Axis) -> Layout {
    (0..n)
        .map(|i| {
            (
                ModuleId::from_index(i),
                Coord3::ZERO.with(axis, i as i32),
            )
        })
        .collect()
}

/// A 2×2 square in the XY plane. No cut vertices.
pub fn square() -> Layout {
    layout(&[(0, 0, 0), (1, 0, 0), (1, 1, 0), (0, 1, 0)])
}

/// A 3×3 ring with the centre missing. No cut vertices.
pub fn ring() -> Layout {
    layout(&[
        (0, 0, 0),
        (1, 0, 0),
        (2, 0, 0),
        (2, 1, 0),
        (2, 2, 0),
        (1, 2, 0),
        (0, 2, 0),
        (0, 1, 0),
    ])
}

/// A connected lattice of `n` modules grown one face neighbour at a time.
///
/// Module 1 sits at the origin; module `k` is attached to a uniformly
/// chosen earlier module on a uniformly chosen free face.
pub fn random_polycube(n: usize, seed: u64) -> Layout {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cells: Vec<Coord3> = Vec::with_capacity(n);
    let mut taken: HashSet<Coord3> = HashSet::with_capacity(n);
    if n > 0 {
        cells.push(Coord3::ZERO);
        taken.insert(Coord3::ZERO);
    }
    while cells.len() < n {
        let base = cells[rng.random_range(0..cells.len())];
        let offset = Coord3::FACE_OFFSETS[rng.random_range(0..6)];
        let candidate = base + offset;
        if taken.insert(candidate) {
            cells.push(candidate);
        }
    }
    cells
        .into_iter()
        .enumerate()
        .map(|(i, c)| (ModuleId::from_index(i), c))
        .collect()
}

/// Apply `rotation` to every position, about module 1's position.
pub fn rotate_layout(layout: &Layout, rotation: Rotation) -> Layout {
    let center = layout
        .get(&ModuleId(1))
        .copied()
        .unwrap_or(Coord3::ZERO);
    layout
        .iter()
        .map(|(&m, &p)| (m, rotation.apply_about(p, center)))
        .collect()
}

/// Shift every position by `offset`.
pub fn translate_layout(layout: &Layout, offset: Coord3) -> Layout {
    layout.iter().map(|(&m, &p)| (m, p + offset)).collect()
}
