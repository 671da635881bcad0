//! Goal matching under principal-axis rotations.
//!
//! The goal layout is anchored the same way as the live grid (module 1 on
//! the anchor cell) and then turned 90°, 180° and 270° about X, Y and Z
//! around that cell. Quarter turns map lattice cells to lattice cells
//! exactly, so each target is a plain grid. A layout matches when it is
//! identical to any of the ten targets. Reflections are not recognised.

use pivot_core::{ConfigError, Layout, LayoutKind, Rotation};
use pivot_space::OccupancyGrid;

/// The ten goal targets: identity first, then `Rx90, Rx180, Rx270, Ry90,
/// Ry180, Ry270, Rz90, Rz180, Rz270`.
#[derive(Clone, Debug)]
pub struct GoalMatcher {
    targets: Vec<(Rotation, OccupancyGrid)>,
}

impl GoalMatcher {
    /// Anchor `goal` and precompute its rotations.
    ///
    /// Fails if the goal is malformed or any rotation leaves the grid.
    pub fn new(goal: &Layout, module_count: usize) -> Result<Self, ConfigError> {
        let base = OccupancyGrid::with_kind(goal, module_count, LayoutKind::Goal)?;
        let center = base.anchor();
        let mut targets = Vec::with_capacity(10);
        for rotation in Rotation::principal() {
            let turned: Layout = base
                .modules()
                .map(|(m, p)| (m, rotation.apply_about(p, center)))
                .collect();
            let grid = OccupancyGrid::with_kind(&turned, module_count, LayoutKind::Goal)?;
            targets.push((rotation, grid));
        }
        Ok(Self { targets })
    }

    /// Whether `grid` matches any target.
    pub fn is_goal(&self, grid: &OccupancyGrid) -> bool {
        self.matching_orientation(grid).is_some()
    }

    /// The first target orientation `grid` matches, if any.
    pub fn matching_orientation(&self, grid: &OccupancyGrid) -> Option<Rotation> {
        self.targets
            .iter()
            .find(|(_, target)| target.same_layout(grid))
            .map(|&(rotation, _)| rotation)
    }

    /// The targets in matching order.
    pub fn targets(&self) -> impl Iterator<Item = (Rotation, &OccupancyGrid)> {
        self.targets.iter().map(|(r, g)| (*r, g))
    }
}
