//! Random search from an L-tromino to a straight bar.
//!
//! Builds a three-module engine, prints the legal moves at the start, then
//! lets a seeded [`RandomPolicy`] wander until the lattice matches a bar
//! in any principal orientation.
//!
//! Run with:
//!   RUST_LOG=pivot_engine=debug cargo run --example random_search

use std::error::Error;

use pivot_core::{Coord3, Layout, ModuleId};
use pivot_engine::{
    EngineConfig, LatticeEngine, RandomPolicy, RandomSearch, SearchConfig, TrajectoryRecorder,
};
use tracing_subscriber::EnvFilter;

// ─── Layouts ────────────────────────────────────────────────────

fn layout(cells: &[(i32, i32, i32)]) -> Layout {
    cells
        .iter()
        .enumerate()
        .map(|(i, &c)| (ModuleId::from_index(i), Coord3::from(c)))
        .collect()
}

const SEED: u64 = 42;
const MAX_STEPS: u64 = 500;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let initial = layout(&[(4, 4, 4), (4, 5, 4), (5, 5, 4)]);
    let goal = layout(&[(0, 0, 0), (1, 0, 0), (2, 0, 0)]);
    let mut engine = LatticeEngine::new(EngineConfig::new(initial, goal))?;

    println!("grid side {}, anchor {}", engine.grid().side(), engine.grid().anchor());
    for (module, pivots) in engine.legal_moves() {
        let ids: Vec<String> = pivots.iter().map(ToString::to_string).collect();
        println!("  module {module}: [{}]", ids.join(", "));
    }

    // ─── Search ─────────────────────────────────────────────────

    let search = RandomSearch::new(SearchConfig {
        max_steps: MAX_STEPS,
        seed: SEED,
    });
    let mut policy: RandomPolicy = search.random_policy();
    let mut recorder = TrajectoryRecorder::new();
    let outcome = search.run(&mut engine, &mut policy, &mut recorder)?;

    println!("{outcome}");
    if let Some(rotation) = engine.matching_orientation() {
        println!("matched goal under {rotation}");
    }
    for frame in recorder.frames().iter().rev().take(3).rev() {
        let cells: Vec<String> = frame
            .positions
            .iter()
            .map(|(m, c)| format!("{m}:{c}"))
            .collect();
        println!("  step {}: {}", frame.step, cells.join(" "));
    }

    Ok(())
}
