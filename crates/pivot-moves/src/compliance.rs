//! Catalog compliance test helpers.
//!
//! These functions verify that a compiled catalog satisfies the contracts
//! the engine relies on. Each panics with a descriptive message on the
//! first violation.

use pivot_core::{Coord3, Layout, ModuleId, PivotId, Rotation};
use pivot_space::OccupancyGrid;

use crate::catalog::Catalog;
use crate::table::Sweep;

/// Assert that ids run `1..=len` in order.
pub fn assert_ids_contiguous(catalog: &Catalog) {
    for (i, p) in catalog.iter().enumerate() {
        assert_eq!(p.id.index(), i, "pivot {} sits at slot {i}", p.id);
    }
}

/// Assert the mover is required occupied and the destination required empty.
pub fn assert_mover_and_destination(catalog: &Catalog) {
    for p in catalog.iter() {
        assert_eq!(
            p.stencil.requirement(Coord3::ZERO),
            Some(true),
            "pivot {}: mover not required occupied",
            p.id
        );
        assert_eq!(
            p.stencil.requirement(p.displacement()),
            Some(false),
            "pivot {}: destination not required empty",
            p.id
        );
    }
}

/// Assert every displacement is a face step (slides) or an edge diagonal
/// (corners).
pub fn assert_displacements_are_lattice_steps(catalog: &Catalog) {
    for p in catalog.iter() {
        let d = p.displacement();
        assert!(
            (1..=2).contains(&d.manhattan()),
            "pivot {}: displacement {d} is not a single hop",
            p.id
        );
    }
}

/// Assert that every symmetry of the cube maps each entry onto some entry.
pub fn assert_closed_under_symmetry(catalog: &Catalog) {
    let mut keys: Vec<(Vec<(Coord3, bool)>, Coord3)> = Vec::new();
    for p in catalog.iter() {
        let mut cells = p.stencil.cells().to_vec();
        cells.sort_unstable();
        keys.push((cells, p.displacement()));
    }
    for r in Rotation::all() {
        for p in catalog.iter() {
            let mut cells: Vec<_> = p
                .stencil
                .cells()
                .iter()
                .map(|&(o, occ)| (r.apply(o), occ))
                .collect();
            cells.sort_unstable();
            let image = (cells, r.apply(p.displacement()));
            assert!(
                keys.contains(&image),
                "pivot {}: image under {r} missing",
                p.id
            );
        }
    }
}

/// Assert that exactly `expected` entries read some axis high-to-low, and
/// that X is never one of them.
pub fn assert_descending_sweeps(catalog: &Catalog, expected: usize) {
    let descending = catalog
        .iter()
        .filter(|p| p.entry.window.iter().any(|s| s.sweep == Sweep::Descending))
        .count();
    assert_eq!(descending, expected, "descending sweep count");
    for p in catalog.iter() {
        assert_eq!(
            p.entry.window[0].sweep,
            Sweep::Ascending,
            "pivot {}: x is swept descending",
            p.id
        );
    }
}

/// Assert `inverse` is an involution.
pub fn assert_inverse_involution(catalog: &Catalog) {
    for p in catalog.iter() {
        let inv = catalog
            .inverse(p.id)
            .unwrap_or_else(|| panic!("pivot {} has no inverse", p.id));
        assert_eq!(
            catalog.inverse(inv),
            Some(p.id),
            "inverse of inverse of {} is not itself",
            p.id
        );
    }
}

/// Build the smallest lattice satisfying `pivot`'s window, with module 1
/// as the mover.
fn minimal_grid(catalog: &Catalog, pivot: PivotId) -> OccupancyGrid {
    let p = catalog.get(pivot).expect("pivot in catalog");
    let mut layout = Layout::new();
    layout.insert(ModuleId(1), Coord3::ZERO);
    for &(offset, occupied) in p.stencil.cells() {
        if occupied && offset != Coord3::ZERO {
            layout.insert(ModuleId::from_index(layout.len()), offset);
        }
    }
    let n = layout.len();
    OccupancyGrid::new(&layout, n).expect("minimal layout fits")
}

/// Assert every entry is legal on its own minimal lattice, and that
/// applying it then its inverse restores the lattice.
pub fn assert_inverse_roundtrip(catalog: &Catalog) {
    for p in catalog.iter() {
        let start = minimal_grid(catalog, p.id);
        let mut grid = start.clone();
        assert!(
            catalog.is_legal(&grid, grid.anchor(), p.id),
            "pivot {} not legal on its own window",
            p.id
        );
        grid.relocate(ModuleId(1), grid.anchor() + p.displacement())
            .expect("forward move fits");

        let inv = catalog.inverse(p.id).expect("inverse exists");
        assert!(
            catalog.is_legal(&grid, grid.anchor(), inv),
            "inverse {inv} of {} not legal after the move",
            p.id
        );
        let back = catalog.get(inv).expect("inverse in catalog").displacement();
        grid.relocate(ModuleId(1), grid.anchor() + back)
            .expect("inverse move fits");
        assert!(
            grid.same_layout(&start),
            "pivot {} then {inv} did not restore the lattice",
            p.id
        );
    }
}

/// Run every catalog compliance check.
pub fn run_full_compliance(catalog: &Catalog) {
    assert_ids_contiguous(catalog);
    assert_mover_and_destination(catalog);
    assert_displacements_are_lattice_steps(catalog);
    assert_closed_under_symmetry(catalog);
    assert_descending_sweeps(catalog, 16);
    assert_inverse_involution(catalog);
    assert_inverse_roundtrip(catalog);
}
