//! Split-level metric evaluation
//!
//! Runs inference over every batch of a split and aggregates loss or AUC.
//! Both passes put the model in `Mode::Eval` and leave it there; callers
//! resume training mode when they next train.

use crate::data::{DataLoader, Split};
use crate::error::{Error, Result};
use crate::model::{GraphModel, Mode};
use crate::train::loss::BceWithLogitsLoss;
use crate::train::metrics::roc_auc;

/// Average binary cross-entropy over a split
///
/// Returns the mean of per-batch mean losses. Batches may be unequal size;
/// the mean-of-batch-means is kept deliberately (not a single pooled mean).
pub fn evaluate_loss<M, L>(model: &mut M, loader: &L, split: Split) -> Result<f32>
where
    M: GraphModel + ?Sized,
    L: DataLoader + ?Sized,
{
    model.set_mode(Mode::Eval);

    let mut batch_losses = Vec::new();
    for batch in loader.batches() {
        let logits = model.forward(&batch.features, &batch.adjacency);
        let loss = BceWithLogitsLoss.forward(&logits, &batch.targets);
        batch_losses.push(loss.data()[0]);
    }

    if batch_losses.is_empty() {
        return Err(Error::EmptySplit { split });
    }
    Ok(batch_losses.iter().sum::<f32>() / batch_losses.len() as f32)
}

/// ROC AUC over a split
///
/// Applies the sigmoid to raw logits, pools every (label, score) pair across
/// the whole split, and ranks the pooled set. A split whose labels are all
/// one class has no defined AUC; the failure is reported and propagated.
pub fn evaluate_auc<M, L>(model: &mut M, loader: &L, split: Split) -> Result<f32>
where
    M: GraphModel + ?Sized,
    L: DataLoader + ?Sized,
{
    model.set_mode(Mode::Eval);

    let mut labels = Vec::new();
    let mut scores = Vec::new();
    for batch in loader.batches() {
        let logits = model.forward(&batch.features, &batch.adjacency);
        let probs = BceWithLogitsLoss::sigmoid(logits.data());
        labels.extend(batch.targets.data().iter().copied());
        scores.extend(probs.iter().copied());
    }

    if labels.is_empty() {
        return Err(Error::EmptySplit { split });
    }

    roc_auc(&labels, &scores).ok_or_else(|| {
        let err = Error::SingleClassSplit { split };
        eprintln!("AUC evaluation failed: {err}");
        err
    })
}
