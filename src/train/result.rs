//! Training result types

use serde::{Deserialize, Serialize};

/// Final metrics of a training run
///
/// `val_auc`, `val_loss`, and `train_auc` hold the values from the last
/// improvement event (the epoch the retained checkpoint was captured);
/// `test_auc` is filled once, from the restored checkpoint, at finalization.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Validation AUC at the best epoch
    pub val_auc: f32,
    /// Validation loss at the best epoch
    pub val_loss: f32,
    /// Train AUC at the best epoch
    pub train_auc: f32,
    /// Test AUC of the restored best checkpoint
    pub test_auc: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zeroed() {
        let result = TrainingResult::default();
        assert_eq!(result.val_auc, 0.0);
        assert_eq!(result.val_loss, 0.0);
        assert_eq!(result.train_auc, 0.0);
        assert_eq!(result.test_auc, 0.0);
    }
}
