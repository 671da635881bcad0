//! Property tests: random walks over random connected lattices.

use std::collections::HashSet;

use pivot_core::{Coord3, ModuleId};
use pivot_engine::{EngineConfig, LatticeEngine, MovePolicy, RandomPolicy};
use pivot_moves::catalog;
use pivot_test_utils::{fixtures, oracle};
use proptest::prelude::*;

fn engine_for(n: usize, seed: u64) -> LatticeEngine {
    let layout = fixtures::random_polycube(n, seed);
    LatticeEngine::new(EngineConfig::new(layout.clone(), layout)).unwrap()
}

/// Every invariant the engine promises between moves.
fn check_invariants(engine: &LatticeEngine) -> Result<(), TestCaseError> {
    let grid = engine.grid();
    let layout = engine.positions();

    // Module 1 on the anchor.
    prop_assert_eq!(grid.position_of(ModuleId(1)), Some(grid.anchor()));

    // Grid and position table are inverse bijections.
    let cells: HashSet<Coord3> = layout.values().copied().collect();
    prop_assert_eq!(cells.len(), engine.module_count());
    for (&module, &pos) in &layout {
        prop_assert_eq!(grid.occupancy_at(pos), Some(module));
    }

    // Still connected; cut vertices agree with brute force.
    prop_assert!(oracle::is_connected(&layout));
    prop_assert!(engine.is_connected());
    prop_assert_eq!(engine.articulation_points(), &oracle::cut_vertices(&layout));

    let legal = engine.legal_moves();
    for (&module, pivots) in &legal {
        if engine.articulation_points().contains(&module) {
            prop_assert!(pivots.is_empty(), "cut vertex {} can move", module);
        } else {
            prop_assert!(oracle::is_connected_without(&layout, module));
        }
        prop_assert!(pivots.windows(2).all(|w| w[0] < w[1]));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_walk_preserves_invariants(
        n in 2usize..9,
        shape_seed in any::<u64>(),
        walk_seed in any::<u64>(),
        steps in 1usize..40,
    ) {
        let mut engine = engine_for(n, shape_seed);
        let mut policy = RandomPolicy::new(walk_seed);
        check_invariants(&engine)?;
        for _ in 0..steps {
            let Some((module, pivot)) = policy.select(&engine.legal_moves()) else {
                break;
            };
            engine.apply_move(module, pivot).unwrap();
            check_invariants(&engine)?;
        }
    }

    #[test]
    fn move_then_inverse_is_identity(
        n in 2usize..9,
        shape_seed in any::<u64>(),
        walk_seed in any::<u64>(),
    ) {
        let mut engine = engine_for(n, shape_seed);
        let mut policy = RandomPolicy::new(walk_seed);
        if let Some((module, pivot)) = policy.select(&engine.legal_moves()) {
            let before = engine.positions();
            engine.apply_move(module, pivot).unwrap();
            let inverse = catalog().inverse(pivot).unwrap();
            prop_assert!(engine.legal_moves_for(module).unwrap().contains(&inverse));
            engine.apply_move(module, inverse).unwrap();
            prop_assert_eq!(engine.positions(), before);
        }
    }

    #[test]
    fn rejected_moves_leave_engine_untouched(
        n in 2usize..9,
        shape_seed in any::<u64>(),
        module in 0u32..12,
        pivot in 0u8..52,
    ) {
        let mut engine = engine_for(n, shape_seed);
        let before = engine.snapshot();
        let legal = engine.legal_moves();
        let allowed = legal
            .get(&ModuleId(module))
            .is_some_and(|p| p.contains(&pivot_core::PivotId(pivot)));
        let result = engine.apply_move(ModuleId(module), pivot_core::PivotId(pivot));
        prop_assert_eq!(result.is_ok(), allowed);
        if !allowed {
            prop_assert_eq!(engine.snapshot(), before);
        }
    }
}
