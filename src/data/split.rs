//! Data split identifiers

use serde::{Deserialize, Serialize};

/// A disjoint partition of the dataset
///
/// Partitions are assigned before training starts and never mutated during
/// a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    /// Optimization split
    Train,
    /// Early-stopping and checkpoint-selection split
    Validation,
    /// Held-out split, scored once at finalization
    Test,
}

impl std::fmt::Display for Split {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Split::Train => write!(f, "train"),
            Split::Validation => write!(f, "validation"),
            Split::Test => write!(f, "test"),
        }
    }
}
