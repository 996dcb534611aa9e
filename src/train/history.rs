//! Per-epoch diagnostic history

use serde::{Deserialize, Serialize};

/// Append-only record of per-epoch diagnostics
///
/// Grows by one entry per completed epoch. Purely observational: the
/// stopping decision never reads it. `mixing_weights` stays empty for models
/// without the optional diagnostic.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EpochHistory {
    /// Mean training loss per epoch
    pub train_losses: Vec<f32>,
    /// Train AUC per epoch
    pub train_aucs: Vec<f32>,
    /// Validation loss per epoch
    pub val_losses: Vec<f32>,
    /// Validation AUC per epoch
    pub val_aucs: Vec<f32>,
    /// Optional per-epoch mixing-weight diagnostic
    pub mixing_weights: Vec<f32>,
}

impl EpochHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one epoch's metrics
    pub fn record_epoch(&mut self, train_loss: f32, train_auc: f32, val_loss: f32, val_auc: f32) {
        self.train_losses.push(train_loss);
        self.train_aucs.push(train_auc);
        self.val_losses.push(val_loss);
        self.val_aucs.push(val_auc);
    }

    /// Append a mixing-weight observation
    pub fn record_mixing_weight(&mut self, weight: f32) {
        self.mixing_weights.push(weight);
    }

    /// Number of completed epochs on record
    pub fn epochs(&self) -> usize {
        self.val_aucs.len()
    }
}
