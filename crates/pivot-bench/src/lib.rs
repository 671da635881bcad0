//! Benchmark profiles for the Pivot lattice engine.
//!
//! Provides pre-built [`EngineConfig`] profiles for benchmarks:
//!
//! - [`bar_profile`]: `n` modules in a straight bar, goal a bar on another axis
//! - [`slab_profile`]: a `k`×`k` slab with no cut vertices at all
//! - [`chain_positions`]: a long bar as raw positions, for the graph kernels

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use pivot_core::{Axis, Coord3, Layout, ModuleId};
use pivot_engine::EngineConfig;

/// `n` modules along `axis`, module 1 at the origin.
fn bar(n: usize, axis: Axis) -> Layout {
    (0..n)
        .map(|i| (ModuleId::from_index(i), Coord3::ZERO.with(axis, i as i32)))
        .collect()
}

/// A bar of `n` modules along X with a bar along Z as its goal.
///
/// Every interior module is a cut vertex, so only the two ends can pivot.
pub fn bar_profile(n: usize) -> EngineConfig {
    EngineConfig::new(bar(n, Axis::X), bar(n, Axis::Z))
}

/// A `k`×`k` slab in the XY plane whose goal is the same slab in XZ.
///
/// No module is a cut vertex, so every module is checked against all 48
/// pivots.
pub fn slab_profile(k: usize) -> EngineConfig {
    let cells = |second: Axis| -> Layout {
        (0..k * k)
            .map(|i| {
                let c = Coord3::ZERO
                    .with(Axis::X, (i % k) as i32)
                    .with(second, (i / k) as i32);
                (ModuleId::from_index(i), c)
            })
            .collect()
    };
    EngineConfig::new(cells(Axis::Y), cells(Axis::Z))
}

/// Positions of an `n`-module bar along X, indexed by module.
pub fn chain_positions(n: usize) -> Vec<Coord3> {
    (0..n).map(|i| Coord3::new(i as i32, 0, 0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pivot_engine::LatticeEngine;

    #[test]
    fn bar_profile_validates() {
        let config = bar_profile(16);
        config.validate().unwrap();
        let engine = LatticeEngine::new(config).unwrap();
        assert_eq!(engine.articulation_points().len(), 14);
        assert!(engine.is_goal());
    }

    #[test]
    fn slab_profile_validates() {
        let config = slab_profile(4);
        config.validate().unwrap();
        let engine = LatticeEngine::new(config).unwrap();
        assert_eq!(engine.module_count(), 16);
        assert!(engine.articulation_points().is_empty());
        assert!(engine.is_goal());
    }

    #[test]
    fn chain_positions_are_adjacent() {
        let chain = chain_positions(10);
        assert_eq!(chain.len(), 10);
        assert!(chain.windows(2).all(|w| w[0].is_face_adjacent(w[1])));
    }
}
