//! Tape-based autograd engine
//!
//! Provides the gradient plumbing models and losses communicate through: a
//! 1-D `f32` tensor with a shared gradient cell and a pluggable backward
//! operation. Kept deliberately small; model implementations register their
//! own [`BackwardOp`] to route loss gradients into their parameters.

mod backward;
mod tensor;

pub use backward::BackwardOp;
pub use tensor::Tensor;

/// Perform backward pass on a tensor
///
/// Seeds the tensor's gradient (ones for a scalar loss when `grad_output` is
/// `None`) and walks its backward operation.
pub fn backward(tensor: &mut Tensor, grad_output: Option<ndarray::Array1<f32>>) {
    if let Some(grad) = grad_output {
        tensor.set_grad(grad);
    } else {
        let ones = ndarray::Array1::ones(tensor.len());
        tensor.set_grad(ones);
    }

    if let Some(op) = tensor.backward_op() {
        op.backward();
    }
}
