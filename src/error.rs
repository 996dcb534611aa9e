//! Crate error types

use crate::data::Split;

/// Errors surfaced by training and evaluation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// AUC is undefined when every label in a split belongs to one class.
    #[error("{split} split contains a single class; AUC is undefined")]
    SingleClassSplit {
        /// Split the degenerate labels came from
        split: Split,
    },

    /// A loader produced zero batches; no mean loss or AUC can be formed.
    #[error("{split} split is empty")]
    EmptySplit {
        /// Split whose loader was empty
        split: Split,
    },

    /// Optimizer name did not match any supported update rule.
    #[error("Unknown optimizer: {0} (must be one of: adam, sgd)")]
    UnknownOptimizer(String),

    /// Dataset name is not in the catalog.
    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    /// Run configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for training and evaluation operations
pub type Result<T> = std::result::Result<T, Error>;
