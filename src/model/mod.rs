//! Model collaborator contract
//!
//! The training loop never sees a concrete architecture; it drives anything
//! implementing [`GraphModel`]: a forward pass over (features, adjacency),
//! parameter access for the optimizer, deep snapshot/restore of parameter
//! state, and a train/inference mode toggle.

mod state;

pub use state::ModelState;

use ndarray::Array2;

use crate::Tensor;

/// Train/inference mode
///
/// Evaluation puts the model in [`Mode::Eval`] for the full pass; restoring
/// [`Mode::Train`] afterwards is the caller's responsibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Learning mode: stochastic layers active, gradients expected
    Train,
    /// Inference mode: no parameter updates, no gradient tracking
    Eval,
}

/// A binary classifier over graph-structured samples
///
/// `forward` receives a batch's feature tensor and adjacency structure and
/// returns one raw logit per sample. Implementations that participate in
/// training register backward operations on the returned tensor routing loss
/// gradients into their parameters.
pub trait GraphModel {
    /// Compute raw logits for a batch
    fn forward(&mut self, features: &Tensor, adjacency: &Array2<f32>) -> Tensor;

    /// Immutable access to every learned parameter, in a stable order
    fn parameters(&self) -> Vec<&Tensor>;

    /// Mutable access to every learned parameter, in the same order
    fn parameters_mut(&mut self) -> Vec<&mut Tensor>;

    /// Switch between learning and inference behavior
    fn set_mode(&mut self, mode: Mode);

    /// Deep copy of the current parameter state
    fn snapshot(&self) -> ModelState {
        ModelState::capture(&self.parameters())
    }

    /// Deep-overwrite parameters from a snapshot
    fn restore(&mut self, state: &ModelState) {
        state.apply(&mut self.parameters_mut());
    }

    /// Optional mixing-weight diagnostic
    ///
    /// Attention-style architectures expose the scalar that blends their
    /// feature and neighborhood branches; everything else reports `None`.
    /// Queried once per epoch, recorded in the history only.
    fn mixing_weight(&self) -> Option<f32> {
        None
    }
}
