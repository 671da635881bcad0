//! Step observers.
//!
//! A search hands every [`Snapshot`] it produces to a [`StepObserver`]:
//! once before the first move, then once after each applied move.

use crate::engine::Snapshot;

/// Receives a snapshot after every step of a search.
pub trait StepObserver {
    /// Called with the engine state after a step.
    fn observe(&mut self, snapshot: &Snapshot);
}

/// Discards every snapshot.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl StepObserver for NullObserver {
    fn observe(&mut self, _snapshot: &Snapshot) {}
}

/// Keeps every snapshot in memory, in order.
#[derive(Clone, Debug, Default)]
pub struct TrajectoryRecorder {
    frames: Vec<Snapshot>,
}

impl TrajectoryRecorder {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded frames, oldest first.
    pub fn frames(&self) -> &[Snapshot] {
        &self.frames
    }

    /// Number of recorded frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Consume the recorder, returning its frames.
    pub fn into_frames(self) -> Vec<Snapshot> {
        self.frames
    }
}

impl StepObserver for TrajectoryRecorder {
    fn observe(&mut self, snapshot: &Snapshot) {
        self.frames.push(snapshot.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pivot_core::{Coord3, Layout, ModuleId, StepId};

    fn frame(step: u64) -> Snapshot {
        let mut positions = Layout::new();
        positions.insert(ModuleId(1), Coord3::new(step as i32, 0, 0));
        Snapshot {
            step: StepId(step),
            positions,
        }
    }

    #[test]
    fn recorder_keeps_frames_in_order() {
        let mut rec = TrajectoryRecorder::new();
        assert!(rec.is_empty());
        for s in 0..3 {
            rec.observe(&frame(s));
        }
        assert_eq!(rec.len(), 3);
        let steps: Vec<_> = rec.frames().iter().map(|f| f.step).collect();
        assert_eq!(steps, vec![StepId(0), StepId(1), StepId(2)]);
        assert_eq!(rec.into_frames()[2], frame(2));
    }

    #[test]
    fn null_observer_accepts_anything() {
        let mut obs = NullObserver;
        obs.observe(&frame(7));
    }
}
