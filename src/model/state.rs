//! Deep parameter snapshots

use ndarray::Array1;

use crate::Tensor;

/// A captured copy of model parameters at a point in time
///
/// Fully independent of the live model: the data is copied out at capture
/// and copied back in at apply, never aliased. Gradient cells are not part
/// of a snapshot.
#[derive(Clone, Debug)]
pub struct ModelState {
    tensors: Vec<Array1<f32>>,
}

impl ModelState {
    /// Deep-copy the given parameters
    pub fn capture(params: &[&Tensor]) -> Self {
        Self { tensors: params.iter().map(|p| p.data().clone()).collect() }
    }

    /// Deep-overwrite the given parameters from this snapshot
    ///
    /// Parameter count and per-tensor lengths must match the capture.
    pub fn apply(&self, params: &mut [&mut Tensor]) {
        assert_eq!(
            self.tensors.len(),
            params.len(),
            "Snapshot and model must have same parameter count"
        );
        for (stored, param) in self.tensors.iter().zip(params.iter_mut()) {
            assert_eq!(
                stored.len(),
                param.len(),
                "Snapshot and parameter must have same length"
            );
            param.data_mut().assign(stored);
        }
    }

    /// Number of parameter tensors captured
    pub fn len(&self) -> usize {
        self.tensors.len()
    }

    /// Whether the snapshot holds no tensors
    pub fn is_empty(&self) -> bool {
        self.tensors.is_empty()
    }
}
