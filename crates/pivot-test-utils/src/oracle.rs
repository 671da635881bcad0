//! Brute-force connectivity oracles.
//!
//! Works directly on cell coordinates with a hash set and a flood fill.
//! Slow, but shares no code with `pivot-space`, so it can cross-check the
//! engine's adjacency and cut-vertex results.

use std::collections::{BTreeSet, HashSet};

use pivot_core::{Coord3, Layout, ModuleId};

/// Number of face-connected pieces among `cells`.
pub fn piece_count(cells: &[Coord3]) -> usize {
    let remaining: HashSet<Coord3> = cells.iter().copied().collect();
    let mut seen: HashSet<Coord3> = HashSet::with_capacity(remaining.len());
    let mut pieces = 0;
    for &start in cells {
        if !seen.insert(start) {
            continue;
        }
        pieces += 1;
        let mut frontier = vec![start];
        while let Some(c) = frontier.pop() {
            for off in Coord3::FACE_OFFSETS {
                let n = c + off;
                if remaining.contains(&n) && seen.insert(n) {
                    frontier.push(n);
                }
            }
        }
    }
    pieces
}

/// Whether every module of `layout` is face-connected to every other.
pub fn is_connected(layout: &Layout) -> bool {
    let cells: Vec<Coord3> = layout.values().copied().collect();
    piece_count(&cells) <= 1
}

/// Whether the lattice stays connected with `module` lifted out.
pub fn is_connected_without(layout: &Layout, module: ModuleId) -> bool {
    let cells: Vec<Coord3> = layout
        .iter()
        .filter(|&(&m, _)| m != module)
        .map(|(_, &c)| c)
        .collect();
    piece_count(&cells) <= 1
}

/// Modules whose removal increases the number of pieces.
pub fn cut_vertices(layout: &Layout) -> BTreeSet<ModuleId> {
    let all: Vec<Coord3> = layout.values().copied().collect();
    let base = piece_count(&all);
    layout
        .iter()
        .filter(|&(&m, _)| {
            let rest: Vec<Coord3> = layout
                .iter()
                .filter(|&(&other, _)| other != m)
                .map(|(_, &c)| c)
                .collect();
            piece_count(&rest) > base
        })
        .map(|(&m, _)| m)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use pivot_core::Axis;

    #[test]
    fn l_tromino_cut_vertex() {
        let l = fixtures::l_tromino();
        assert!(is_connected(&l));
        assert!(!is_connected_without(&l, ModuleId(2)));
        assert!(is_connected_without(&l, ModuleId(1)));
        assert_eq!(cut_vertices(&l), [ModuleId(2)].into_iter().collect());
    }

    #[test]
    fn square_and_ring_have_none() {
        assert!(cut_vertices(&fixtures::square()).is_empty());
        assert!(cut_vertices(&fixtures::ring()).is_empty());
    }

    #[test]
    fn line_interior_is_cut() {
        let l = fixtures::line(4, Axis::Z);
        assert_eq!(
            cut_vertices(&l),
            [ModuleId(2), ModuleId(3)].into_iter().collect()
        );
    }

    #[test]
    fn random_polycubes_are_connected() {
        for seed in 0..20 {
            let p = fixtures::random_polycube(12, seed);
            assert_eq!(p.len(), 12);
            assert!(is_connected(&p), "seed {seed}");
        }
    }
}
