//! Training and evaluation loop
//!
//! This module holds the run orchestration:
//! - [`Trainer`]: epoch loop over the train split with per-epoch evaluation
//! - [`evaluate_loss`] / [`evaluate_auc`]: split-level metric passes
//! - [`CheckpointTracker`]: best-snapshot retention on validation AUC
//! - [`EarlyStoppingPolicy`]: plateau-aware stop decision
//! - [`RunConfig`] / [`TrainingResult`] / [`EpochHistory`]
//!
//! # Example
//!
//! ```ignore
//! use grafeno::train::{RunConfig, Trainer};
//!
//! let config = RunConfig::new().with_epochs(200);
//! let mut trainer = Trainer::new(model, train, val, test, config)?;
//! let (result, history) = trainer.run()?;
//! ```

mod checkpoint;
mod config;
mod early_stopping;
mod evaluator;
mod history;
mod loss;
mod metrics;
mod result;
mod trainer;

pub use checkpoint::CheckpointTracker;
pub use config::RunConfig;
pub use early_stopping::{EarlyStoppingPolicy, StopState};
pub use evaluator::{evaluate_auc, evaluate_loss};
pub use history::EpochHistory;
pub use loss::BceWithLogitsLoss;
pub use metrics::roc_auc;
pub use result::TrainingResult;
pub use trainer::Trainer;
