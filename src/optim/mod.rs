//! Optimization algorithms
//!
//! Two update rules are supported, selected by [`OptimizerKind`]:
//! - [`Adam`]: momentum-based adaptive updates with L2 weight decay
//! - [`Sgd`]: plain gradient descent with L2 weight decay
//!
//! Both operate on parameters borrowed from a model each step.

mod adam;
mod optimizer;
mod sgd;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use adam::Adam;
pub use optimizer::Optimizer;
pub use sgd::Sgd;

use crate::error::Error;

/// Supported optimizer update rules
///
/// Construction from a name fails immediately on anything unrecognized;
/// no rule is ever silently substituted.
///
/// # Example
///
/// ```
/// use grafeno::optim::OptimizerKind;
///
/// let kind: OptimizerKind = "adam".parse().unwrap();
/// assert_eq!(kind, OptimizerKind::Adam);
/// assert!("rmsprop".parse::<OptimizerKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizerKind {
    /// Momentum-based adaptive updates (first/second moment estimates)
    Adam,
    /// Plain gradient descent
    Sgd,
}

impl OptimizerKind {
    /// Build the optimizer for this kind, once, before the epoch loop
    pub fn build(self, learning_rate: f32, weight_decay: f32) -> Box<dyn Optimizer> {
        match self {
            OptimizerKind::Adam => Box::new(Adam::new(learning_rate, weight_decay)),
            OptimizerKind::Sgd => Box::new(Sgd::new(learning_rate, weight_decay)),
        }
    }
}

impl FromStr for OptimizerKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "adam" => Ok(OptimizerKind::Adam),
            "sgd" => Ok(OptimizerKind::Sgd),
            other => Err(Error::UnknownOptimizer(other.to_string())),
        }
    }
}

impl std::fmt::Display for OptimizerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptimizerKind::Adam => write!(f, "adam"),
            OptimizerKind::Sgd => write!(f, "sgd"),
        }
    }
}
