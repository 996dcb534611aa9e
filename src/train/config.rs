//! Run configuration

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::optim::OptimizerKind;

/// Configuration for one training run
///
/// Immutable for the duration of the run. Defaults mirror the production
/// setup: Adam, 100 epochs, patience 20, early stopping on.
///
/// # Example
///
/// ```
/// use grafeno::optim::OptimizerKind;
/// use grafeno::train::RunConfig;
///
/// let config = RunConfig::new()
///     .with_epochs(300)
///     .with_optimizer(OptimizerKind::Sgd)
///     .with_learning_rate(0.01)
///     .with_weight_decay(1e-4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunConfig {
    /// Epoch budget
    pub epochs: usize,
    /// Update rule
    pub optimizer: OptimizerKind,
    /// Step size
    pub learning_rate: f32,
    /// L2 regularization strength
    pub weight_decay: f32,
    /// Whether plateaus terminate the run
    pub early_stopping: bool,
    /// Consecutive non-improving epochs tolerated before stopping
    pub patience: usize,
    /// Print progress every N epochs; 0 silences all output
    pub log_interval: usize,
}

impl RunConfig {
    /// Create a config with production defaults
    pub fn new() -> Self {
        Self {
            epochs: 100,
            optimizer: OptimizerKind::Adam,
            learning_rate: 1e-3,
            weight_decay: 0.0,
            early_stopping: true,
            patience: 20,
            log_interval: 1,
        }
    }

    /// Set the epoch budget
    pub fn with_epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    /// Set the update rule
    pub fn with_optimizer(mut self, optimizer: OptimizerKind) -> Self {
        self.optimizer = optimizer;
        self
    }

    /// Set the step size
    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Set the L2 regularization strength
    pub fn with_weight_decay(mut self, weight_decay: f32) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    /// Enable or disable early stopping
    pub fn with_early_stopping(mut self, enabled: bool) -> Self {
        self.early_stopping = enabled;
        self
    }

    /// Set the stall tolerance
    pub fn with_patience(mut self, patience: usize) -> Self {
        self.patience = patience;
        self
    }

    /// Set the progress-printing interval (0 = silent)
    pub fn with_log_interval(mut self, log_interval: usize) -> Self {
        self.log_interval = log_interval;
        self
    }

    /// Check the configuration before a run starts
    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(Error::InvalidConfig("epochs must be > 0".to_string()));
        }
        if !(self.learning_rate > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "learning rate must be > 0.0, got {}",
                self.learning_rate
            )));
        }
        if self.weight_decay < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "weight decay must be >= 0.0, got {}",
                self.weight_decay
            )));
        }
        if self.early_stopping && self.patience == 0 {
            return Err(Error::InvalidConfig(
                "patience must be > 0 when early stopping is enabled".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new()
    }
}
