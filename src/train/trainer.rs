//! Epoch orchestration

use crate::data::{DataLoader, Split};
use crate::error::{Error, Result};
use crate::model::{GraphModel, Mode};
use crate::optim::Optimizer;
use crate::train::checkpoint::CheckpointTracker;
use crate::train::config::RunConfig;
use crate::train::early_stopping::{EarlyStoppingPolicy, StopState};
use crate::train::evaluator::{evaluate_auc, evaluate_loss};
use crate::train::history::EpochHistory;
use crate::train::loss::BceWithLogitsLoss;
use crate::train::result::TrainingResult;

/// Drives epochs over a model and three data splits
///
/// The optimizer is built once at construction from the configured kind and
/// never replaced. The model's parameters are the single mutable resource:
/// every training batch updates them, and finalization deep-overwrites them
/// with the best retained checkpoint before the one test-split evaluation.
pub struct Trainer<M: GraphModel, L: DataLoader> {
    model: M,
    train_loader: L,
    val_loader: L,
    test_loader: L,
    config: RunConfig,
    optimizer: Box<dyn Optimizer>,
}

impl<M: GraphModel, L: DataLoader> Trainer<M, L> {
    /// Create a trainer, validating the configuration up front
    pub fn new(
        model: M,
        train_loader: L,
        val_loader: L,
        test_loader: L,
        config: RunConfig,
    ) -> Result<Self> {
        config.validate()?;
        let optimizer = config.optimizer.build(config.learning_rate, config.weight_decay);
        Ok(Self { model, train_loader, val_loader, test_loader, config, optimizer })
    }

    /// Run the full training loop
    ///
    /// Returns the final result together with the per-epoch history. Stops
    /// when the early-stopping policy turns terminal or the epoch budget is
    /// exhausted; either way the best checkpoint is restored into the live
    /// model and the test split is scored exactly once.
    pub fn run(&mut self) -> Result<(TrainingResult, EpochHistory)> {
        let mut tracker = CheckpointTracker::new(&self.model);
        let mut policy =
            EarlyStoppingPolicy::new(self.config.early_stopping, self.config.patience);
        let mut result = TrainingResult::default();
        let mut history = EpochHistory::new();
        let logging = self.config.log_interval > 0;

        for epoch in 0..self.config.epochs {
            self.model.set_mode(Mode::Train);

            let mut batch_losses = Vec::new();
            for batch in self.train_loader.batches() {
                self.optimizer.zero_grad(&mut self.model.parameters_mut());
                let logits = self.model.forward(&batch.features, &batch.adjacency);
                let loss = BceWithLogitsLoss.forward(&logits, &batch.targets);
                batch_losses.push(loss.data()[0]);
                if let Some(op) = loss.backward_op() {
                    op.backward();
                }
                self.optimizer.step(&mut self.model.parameters_mut());
            }
            if batch_losses.is_empty() {
                return Err(Error::EmptySplit { split: Split::Train });
            }
            let avg_train_loss = batch_losses.iter().sum::<f32>() / batch_losses.len() as f32;

            if let Some(weight) = self.model.mixing_weight() {
                history.record_mixing_weight(weight);
                if logging {
                    println!("Mixing weight: {weight:.6}");
                }
            }

            let train_auc = evaluate_auc(&mut self.model, &self.train_loader, Split::Train)?;
            let val_loss = evaluate_loss(&mut self.model, &self.val_loader, Split::Validation)?;
            let val_auc = evaluate_auc(&mut self.model, &self.val_loader, Split::Validation)?;
            history.record_epoch(avg_train_loss, train_auc, val_loss, val_auc);

            let previous_best = tracker.best_auc();
            let improved = tracker.consider(val_auc, &self.model);
            if improved {
                if logging {
                    println!("Validation AUC increased ({previous_best:.6} --> {val_auc:.6})");
                }
                result.val_auc = val_auc;
                result.val_loss = val_loss;
                result.train_auc = train_auc;
            }

            match policy.observe(improved) {
                StopState::Stopped => {
                    eprintln!(
                        "Early stopping: no improvement for {} epochs (best AUC: {:.4})",
                        policy.patience(),
                        tracker.best_auc()
                    );
                    return self.finalize(&tracker, result, history);
                }
                StopState::Plateauing => {
                    if logging {
                        println!(
                            "Early-stopping counter: {} out of {}",
                            policy.stall_counter(),
                            policy.patience()
                        );
                    }
                }
                StopState::Improving => {}
            }

            if logging && (epoch + 1) % self.config.log_interval == 0 {
                println!(
                    "[{}/{}] train_loss: {:.6} train_auc: {:.6} val_loss: {:.6} val_auc: {:.6}",
                    epoch + 1,
                    self.config.epochs,
                    avg_train_loss,
                    train_auc,
                    val_loss,
                    val_auc
                );
            }
        }

        self.finalize(&tracker, result, history)
    }

    /// Restore the best checkpoint and score the test split once
    fn finalize(
        &mut self,
        tracker: &CheckpointTracker,
        mut result: TrainingResult,
        history: EpochHistory,
    ) -> Result<(TrainingResult, EpochHistory)> {
        tracker.restore(&mut self.model);
        result.test_auc = evaluate_auc(&mut self.model, &self.test_loader, Split::Test)?;
        Ok((result, history))
    }

    /// The live model (holds the restored best checkpoint after `run`)
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Consume the trainer, keeping the model
    pub fn into_model(self) -> M {
        self.model
    }

    /// The run configuration
    pub fn config(&self) -> &RunConfig {
        &self.config
    }
}
