//! Batch data structure

use ndarray::Array2;

use crate::Tensor;

/// A batch of graph samples
///
/// `features` is the model's flat per-batch feature tensor, `adjacency` the
/// relation structure for the batch, and `targets` the 0/1 class labels,
/// one per sample. How features and adjacency are interpreted is the model's
/// concern; the loop only requires one logit per target.
#[derive(Clone)]
pub struct GraphBatch {
    /// Input features
    pub features: Tensor,
    /// Relation/adjacency structure
    pub adjacency: Array2<f32>,
    /// Binary target labels
    pub targets: Tensor,
}

impl GraphBatch {
    /// Create a new batch
    pub fn new(features: Tensor, adjacency: Array2<f32>, targets: Tensor) -> Self {
        Self { features, adjacency, targets }
    }

    /// Number of samples in the batch
    pub fn size(&self) -> usize {
        self.targets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_size_follows_targets() {
        let batch = GraphBatch::new(
            Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], false),
            Array2::zeros((3, 3)),
            Tensor::from_vec(vec![1.0, 0.0, 1.0], false),
        );
        assert_eq!(batch.size(), 3);
    }
}
