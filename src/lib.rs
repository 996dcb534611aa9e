//! Grafeno: graph classifier training with early stopping
//!
//! This crate provides a complete training and evaluation loop for binary
//! classifiers over graph-structured microbiome data:
//! - Tape-based autograd tensors ([`Tensor`])
//! - Optimizers (Adam, SGD) selected by [`optim::OptimizerKind`]
//! - Binary cross-entropy loss and pooled ROC AUC scoring
//! - Best-checkpoint retention keyed on validation AUC
//! - Plateau-aware early stopping
//!
//! Model architecture and raw-file loading are collaborator contracts
//! ([`model::GraphModel`], [`data::DataLoader`]), not part of this crate.
//!
//! # Example
//!
//! ```ignore
//! use grafeno::train::{RunConfig, Trainer};
//!
//! let config = RunConfig::new().with_epochs(200).with_patience(20);
//! let mut trainer = Trainer::new(model, train, val, test, config)?;
//! let (result, history) = trainer.run()?;
//! println!("test AUC: {:.4} after {} epochs", result.test_auc, history.epochs());
//! ```

pub mod autograd;
pub mod data;
pub mod error;
pub mod model;
pub mod optim;
pub mod train;

pub use autograd::{backward, BackwardOp, Tensor};
pub use error::{Error, Result};
