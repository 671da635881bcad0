//! The lattice engine.
//!
//! [`LatticeEngine`] is the composition root: it owns the occupancy grid,
//! the precomputed goal targets, and the adjacency and cut-vertex sets
//! derived from the grid. The only mutation path is
//! [`apply_move`](LatticeEngine::apply_move), which either fully applies a
//! legal move or rejects it before touching anything.
//!
//! # Ownership model
//!
//! `LatticeEngine` is [`Send`]. All mutating methods take `&mut self`;
//! queries borrow immutably. There is no interior mutability and no
//! background work.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use pivot_core::{ConfigError, Layout, ModuleId, MoveError, PivotId, Rotation, StepId};
use pivot_moves::catalog;
use pivot_space::{articulation_points, component_count, face_adjacency, Edge, OccupancyGrid};

use crate::config::EngineConfig;
use crate::goal::GoalMatcher;

// Compile-time assertion: LatticeEngine is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<LatticeEngine>();
    }
};

/// Legal pivots per module: every module in id order, pivot ids ascending.
///
/// A module with no legal move (including every cut vertex) maps to an
/// empty list.
pub type LegalMoves = IndexMap<ModuleId, Vec<PivotId>>;

// ── Snapshot ────────────────────────────────────────────────────

/// Position table captured after a step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Moves applied so far.
    pub step: StepId,
    /// Every module's position, in id order.
    pub positions: Layout,
}

// ── LatticeEngine ───────────────────────────────────────────────

/// Legality engine over one modular lattice.
#[derive(Clone, Debug)]
pub struct LatticeEngine {
    grid: OccupancyGrid,
    goal: GoalMatcher,
    edges: Vec<Edge>,
    cut_vertices: BTreeSet<ModuleId>,
    step: StepId,
}

impl LatticeEngine {
    /// Build an engine from `config`.
    ///
    /// Anchors the initial layout, precomputes the ten goal targets and
    /// runs the first connectivity sweep.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let EngineConfig {
            initial,
            goal,
            module_count,
        } = config;
        if module_count == 0 {
            return Err(ConfigError::NoModules);
        }
        if initial.is_empty() {
            return Err(ConfigError::EmptyInitial);
        }
        let grid = OccupancyGrid::new(&initial, module_count)?;
        let goal = GoalMatcher::new(&goal, module_count)?;
        let mut engine = Self {
            grid,
            goal,
            edges: Vec::new(),
            cut_vertices: BTreeSet::new(),
            step: StepId::default(),
        };
        engine.refresh_connectivity();
        tracing::debug!(
            modules = module_count,
            side = engine.grid.side(),
            connected = engine.is_connected(),
            "lattice engine constructed"
        );
        Ok(engine)
    }

    fn refresh_connectivity(&mut self) {
        self.edges = face_adjacency(self.grid.positions());
        self.cut_vertices = articulation_points(self.grid.module_count(), &self.edges);
        tracing::debug!(cut_vertices = ?self.cut_vertices, "connectivity refreshed");
    }

    fn check_module(&self, module: ModuleId) -> Result<(), MoveError> {
        if module.is_within(self.grid.module_count()) {
            Ok(())
        } else {
            Err(MoveError::UnknownModule { module })
        }
    }

    /// Geometric legality filtered by the cut-vertex veto and by the
    /// grid bounds after recentering.
    fn legal_for(&self, module: ModuleId) -> Vec<PivotId> {
        if self.cut_vertices.contains(&module) {
            return Vec::new();
        }
        let Some(pos) = self.grid.position_of(module) else {
            return Vec::new();
        };
        let catalog = catalog();
        catalog
            .legal_pivots(&self.grid, pos)
            .into_iter()
            .filter(|&pivot| {
                catalog
                    .get(pivot)
                    .is_some_and(|p| self.grid.can_relocate(module, pos + p.displacement()))
            })
            .collect()
    }

    /// Legal pivots for every module.
    pub fn legal_moves(&self) -> LegalMoves {
        let moves: LegalMoves = self
            .grid
            .modules()
            .map(|(m, _)| (m, self.legal_for(m)))
            .collect();
        tracing::debug!(
            movable = moves.values().filter(|v| !v.is_empty()).count(),
            total = moves.values().map(Vec::len).sum::<usize>(),
            "legal moves enumerated"
        );
        moves
    }

    /// Legal pivots for `module`.
    pub fn legal_moves_for(&self, module: ModuleId) -> Result<Vec<PivotId>, MoveError> {
        self.check_module(module)?;
        Ok(self.legal_for(module))
    }

    /// Apply `pivot` to `module`.
    ///
    /// The module must exist, the pivot id must be in `1..=48`, and the
    /// pivot must be in the module's current legal list. On success the
    /// lattice is re-anchored on module 1, connectivity is recomputed and
    /// the step counter advances. On error nothing changes.
    pub fn apply_move(&mut self, module: ModuleId, pivot: PivotId) -> Result<(), MoveError> {
        self.check_module(module)?;
        let entry = catalog()
            .get(pivot)
            .ok_or(MoveError::UnknownPivot { pivot })?;
        if !self.legal_for(module).contains(&pivot) {
            return Err(MoveError::NotLegal { module, pivot });
        }
        let from = self
            .grid
            .position_of(module)
            .ok_or(MoveError::UnknownModule { module })?;
        let to = from + entry.displacement();
        self.grid.relocate(module, to)?;
        self.step = StepId(self.step.0 + 1);
        tracing::trace!(step = self.step.0, %module, %pivot, %from, %to, "move applied");
        self.refresh_connectivity();
        Ok(())
    }

    /// Whether the lattice matches the goal under some principal rotation.
    pub fn is_goal(&self) -> bool {
        self.goal.is_goal(&self.grid)
    }

    /// The goal orientation the lattice currently matches, if any.
    pub fn matching_orientation(&self) -> Option<Rotation> {
        self.goal.matching_orientation(&self.grid)
    }

    /// Modules whose removal would disconnect the lattice.
    pub fn articulation_points(&self) -> &BTreeSet<ModuleId> {
        &self.cut_vertices
    }

    /// Face adjacencies, sorted.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Whether the face-adjacency graph is a single component.
    pub fn is_connected(&self) -> bool {
        component_count(self.grid.module_count(), &self.edges) <= 1
    }

    /// The occupancy grid.
    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    /// The precomputed goal targets.
    pub fn goal(&self) -> &GoalMatcher {
        &self.goal
    }

    /// Current positions in id order.
    pub fn positions(&self) -> Layout {
        self.grid.layout()
    }

    /// Number of modules.
    pub fn module_count(&self) -> usize {
        self.grid.module_count()
    }

    /// Moves applied since construction.
    pub fn step(&self) -> StepId {
        self.step
    }

    /// Capture the current step and positions.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            step: self.step,
            positions: self.positions(),
        }
    }
}
