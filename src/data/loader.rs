//! Data loader contract

use super::GraphBatch;

/// A finite, restartable sequence of batches for one split
///
/// `batches` may be called once per epoch (and once per metric pass); each
/// call yields the same batches in the same order. Shuffling, batching
/// mechanics, and file parsing belong to the implementation behind this
/// seam, not to the training loop.
pub trait DataLoader {
    /// Iterate the split's batches from the beginning
    fn batches(&self) -> Box<dyn Iterator<Item = &GraphBatch> + '_>;
}

/// Loader over batches already materialized in memory
///
/// # Example
///
/// ```
/// use grafeno::data::{DataLoader, GraphBatch, InMemoryLoader};
/// use grafeno::Tensor;
/// use ndarray::Array2;
///
/// let batch = GraphBatch::new(
///     Tensor::from_vec(vec![0.5, 0.2], false),
///     Array2::zeros((2, 2)),
///     Tensor::from_vec(vec![1.0, 0.0], false),
/// );
/// let loader = InMemoryLoader::new(vec![batch]);
/// assert_eq!(loader.batches().count(), 1);
/// ```
pub struct InMemoryLoader {
    batches: Vec<GraphBatch>,
}

impl InMemoryLoader {
    /// Create a loader over the given batches
    pub fn new(batches: Vec<GraphBatch>) -> Self {
        Self { batches }
    }

    /// Number of batches
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    /// Whether the loader holds no batches
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

impl DataLoader for InMemoryLoader {
    fn batches(&self) -> Box<dyn Iterator<Item = &GraphBatch> + '_> {
        Box::new(self.batches.iter())
    }
}
