//! Data structures and collaborator contracts
//!
//! Batches, splits, the loader seam the training loop consumes, and
//! dataset-path resolution for the microbiome cohorts.

mod batch;
mod datasets;
mod loader;
mod split;

pub use batch::GraphBatch;
pub use datasets::{DatasetCatalog, SplitFiles};
pub use loader::{DataLoader, InMemoryLoader};
pub use split::Split;
