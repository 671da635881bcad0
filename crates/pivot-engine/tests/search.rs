//! Bounded search behaviour.

use pivot_core::{ModuleId, MoveError, PivotId, StepId};
use pivot_engine::{
    EngineConfig, LatticeEngine, LegalMoves, MovePolicy, NullObserver, RandomPolicy, RandomSearch,
    SearchConfig, SearchOutcome, TrajectoryRecorder,
};
use pivot_test_utils::fixtures;

/// Replays a fixed list of moves, then gives up.
struct Scripted(Vec<(ModuleId, PivotId)>);

impl MovePolicy for Scripted {
    fn select(&mut self, _legal: &LegalMoves) -> Option<(ModuleId, PivotId)> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.remove(0))
        }
    }
}

fn l_to_corner() -> LatticeEngine {
    // Goal: module 3 slid down beside module 1, one move away.
    let goal = fixtures::layout(&[(4, 4, 4), (4, 5, 4), (5, 4, 4)]);
    LatticeEngine::new(EngineConfig::new(fixtures::l_tromino(), goal)).unwrap()
}

#[test]
fn zero_budget_never_touches_engine() {
    let mut engine = l_to_corner();
    let before = engine.snapshot();
    let mut recorder = TrajectoryRecorder::new();
    let search = RandomSearch::new(SearchConfig {
        max_steps: 0,
        seed: 3,
    });
    let outcome = search
        .run(&mut engine, &mut search.random_policy(), &mut recorder)
        .unwrap();
    assert_eq!(outcome, SearchOutcome::Exhausted { steps: 0 });
    assert!(!outcome.is_solved());
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.step(), StepId(0));
    assert_eq!(recorder.frames(), &[before]);
}

#[test]
fn scripted_move_solves() {
    let mut engine = l_to_corner();
    assert!(!engine.is_goal());
    let mut recorder = TrajectoryRecorder::new();
    let outcome = RandomSearch::new(SearchConfig::default())
        .run(
            &mut engine,
            &mut Scripted(vec![(ModuleId(3), PivotId(15))]),
            &mut recorder,
        )
        .unwrap();
    assert_eq!(outcome, SearchOutcome::Solved { steps: 1 });
    assert!(engine.is_goal());
    assert_eq!(recorder.len(), 2);
    assert_eq!(recorder.frames()[0].step, StepId(0));
    assert_eq!(recorder.frames()[1].step, StepId(1));
    assert_eq!(recorder.frames()[1].positions, engine.positions());
}

#[test]
fn policy_out_of_ideas_is_stuck() {
    let mut engine = l_to_corner();
    let outcome = RandomSearch::new(SearchConfig::default())
        .run(&mut engine, &mut Scripted(Vec::new()), &mut NullObserver)
        .unwrap();
    assert_eq!(outcome, SearchOutcome::Stuck { steps: 0 });
}

#[test]
fn frozen_lattice_is_stuck() {
    let single = fixtures::layout(&[(0, 0, 0)]);
    let mut engine = LatticeEngine::new(EngineConfig::new(single.clone(), single)).unwrap();
    let outcome = RandomSearch::new(SearchConfig::default())
        .run(&mut engine, &mut RandomPolicy::new(0), &mut NullObserver)
        .unwrap();
    assert_eq!(outcome, SearchOutcome::Stuck { steps: 0 });
}

#[test]
fn illegal_policy_choice_is_an_error() {
    let mut engine = l_to_corner();
    let err = RandomSearch::new(SearchConfig::default())
        .run(
            &mut engine,
            &mut Scripted(vec![(ModuleId(2), PivotId(6))]),
            &mut NullObserver,
        )
        .unwrap_err();
    assert_eq!(
        err,
        MoveError::NotLegal {
            module: ModuleId(2),
            pivot: PivotId(6)
        }
    );
    assert_eq!(engine.step(), StepId(0));
}

#[test]
fn budget_bounds_the_walk() {
    // Solved or not, the walk stops within budget.
    let initial = fixtures::line(5, pivot_core::Axis::X);
    let goal = fixtures::layout(&[(0, 0, 0), (1, 0, 0), (1, 1, 0), (0, 1, 0), (0, 2, 0)]);
    let mut engine = LatticeEngine::new(EngineConfig::new(initial, goal)).unwrap();
    let mut recorder = TrajectoryRecorder::new();
    let outcome = RandomSearch::new(SearchConfig {
        max_steps: 3,
        seed: 11,
    })
    .run(&mut engine, &mut RandomPolicy::new(11), &mut recorder)
    .unwrap();
    assert!(outcome.steps() <= 3);
    assert_eq!(recorder.len() as u64, outcome.steps() + 1);
    assert_eq!(engine.step(), StepId(outcome.steps()));
}

#[test]
fn walk_near_the_grid_edge_never_errors() {
    // Module 2 starts on the edge of the grid, detached from the others.
    let cells = fixtures::layout(&[(0, 0, 0), (4, 0, 0), (0, 1, 0)]);
    let goal = fixtures::line(3, pivot_core::Axis::X);
    for seed in 0..20 {
        let mut engine =
            LatticeEngine::new(EngineConfig::new(cells.clone(), goal.clone())).unwrap();
        let search = RandomSearch::new(SearchConfig {
            max_steps: 50,
            seed,
        });
        match search.run(&mut engine, &mut search.random_policy(), &mut NullObserver) {
            Ok(outcome) => assert_eq!(engine.step(), StepId(outcome.steps())),
            Err(err) => panic!("seed {seed}: walk failed with {err}"),
        }
    }
}

#[test]
fn same_seed_same_trajectory() {
    let run = |seed: u64| {
        let layout = fixtures::random_polycube(6, 5);
        let goal = fixtures::line(6, pivot_core::Axis::Y);
        let mut engine = LatticeEngine::new(EngineConfig::new(layout, goal)).unwrap();
        let mut recorder = TrajectoryRecorder::new();
        let search = RandomSearch::new(SearchConfig {
            max_steps: 200,
            seed,
        });
        let outcome = search
            .run(&mut engine, &mut search.random_policy(), &mut recorder)
            .unwrap();
        (outcome, recorder.into_frames())
    };
    let (a_outcome, a_frames) = run(17);
    let (b_outcome, b_frames) = run(17);
    assert_eq!(a_outcome, b_outcome);
    assert_eq!(a_frames, b_frames);
    assert_eq!(a_frames.len() as u64, a_outcome.steps() + 1);
}
