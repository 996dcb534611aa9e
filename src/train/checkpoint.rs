//! Best-checkpoint retention

use crate::model::{GraphModel, ModelState};

/// Retains the best model snapshot seen so far, keyed on validation AUC
///
/// Seeded with the model's initial state and an AUC of 0.0 (the metric's
/// floor), so exactly one snapshot exists at all times. Improvement requires
/// a strictly greater AUC; ties keep the earlier snapshot.
pub struct CheckpointTracker {
    best_auc: f32,
    best_state: ModelState,
}

impl CheckpointTracker {
    /// Seed the tracker from the model's initial parameters
    pub fn new<M: GraphModel + ?Sized>(model: &M) -> Self {
        Self { best_auc: 0.0, best_state: model.snapshot() }
    }

    /// Offer a candidate; on strict improvement, capture a fresh snapshot
    ///
    /// The snapshot is a full independent copy: the model keeps mutating
    /// after this call without touching what was captured.
    pub fn consider<M: GraphModel + ?Sized>(&mut self, candidate_auc: f32, model: &M) -> bool {
        if candidate_auc > self.best_auc {
            self.best_auc = candidate_auc;
            self.best_state = model.snapshot();
            true
        } else {
            false
        }
    }

    /// Deep-overwrite the model's parameters with the best snapshot
    pub fn restore<M: GraphModel + ?Sized>(&self, model: &mut M) {
        model.restore(&self.best_state);
    }

    /// Highest validation AUC observed so far
    pub fn best_auc(&self) -> f32 {
        self.best_auc
    }
}
