//! 1-D tensor with a shared gradient cell

use std::cell::RefCell;
use std::rc::Rc;

use ndarray::Array1;

use super::BackwardOp;

/// A 1-D `f32` tensor participating in automatic differentiation.
///
/// Data is owned per tensor; the gradient lives in a reference-counted cell
/// so backward operations captured at forward time can write into it after
/// the forward borrow has ended. Cloning a tensor clones its data but shares
/// the gradient cell.
///
/// # Example
///
/// ```
/// use grafeno::Tensor;
/// use ndarray::arr1;
///
/// let t = Tensor::from_vec(vec![1.0, 2.0, 3.0], true);
/// assert_eq!(t.len(), 3);
/// assert!(t.grad().is_none());
///
/// t.set_grad(arr1(&[0.1, 0.2, 0.3]));
/// assert_eq!(t.grad().unwrap()[1], 0.2);
/// ```
#[derive(Clone)]
pub struct Tensor {
    data: Array1<f32>,
    grad: Rc<RefCell<Option<Array1<f32>>>>,
    requires_grad: bool,
    backward_op: Option<Rc<dyn BackwardOp>>,
}

impl Tensor {
    /// Create a tensor from a vector of values
    pub fn from_vec(data: Vec<f32>, requires_grad: bool) -> Self {
        Self::from_array(Array1::from(data), requires_grad)
    }

    /// Create a tensor from an ndarray array
    pub fn from_array(data: Array1<f32>, requires_grad: bool) -> Self {
        Self {
            data,
            grad: Rc::new(RefCell::new(None)),
            requires_grad,
            backward_op: None,
        }
    }

    /// Create a zero-filled tensor of the given length
    pub fn zeros(len: usize, requires_grad: bool) -> Self {
        Self::from_array(Array1::zeros(len), requires_grad)
    }

    /// Immutable view of the underlying data
    pub fn data(&self) -> &Array1<f32> {
        &self.data
    }

    /// Mutable view of the underlying data
    pub fn data_mut(&mut self) -> &mut Array1<f32> {
        &mut self.data
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the tensor holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether gradients are tracked for this tensor
    pub fn requires_grad(&self) -> bool {
        self.requires_grad
    }

    /// Current gradient, if one has been accumulated
    pub fn grad(&self) -> Option<Array1<f32>> {
        self.grad.borrow().clone()
    }

    /// Overwrite the gradient
    pub fn set_grad(&self, grad: Array1<f32>) {
        *self.grad.borrow_mut() = Some(grad);
    }

    /// Clear the gradient
    pub fn zero_grad(&self) {
        *self.grad.borrow_mut() = None;
    }

    /// Shared handle to the gradient cell, for backward operations
    pub fn grad_cell(&self) -> Rc<RefCell<Option<Array1<f32>>>> {
        Rc::clone(&self.grad)
    }

    /// Accumulate a gradient contribution into the cell
    pub fn accumulate_grad(&self, contribution: &Array1<f32>) {
        let mut cell = self.grad.borrow_mut();
        if let Some(existing) = cell.as_mut() {
            *existing = &*existing + contribution;
        } else {
            *cell = Some(contribution.clone());
        }
    }

    /// Attach the backward operation produced with this tensor
    pub fn set_backward_op(&mut self, op: Rc<dyn BackwardOp>) {
        self.backward_op = Some(op);
    }

    /// Backward operation attached to this tensor, if any
    pub fn backward_op(&self) -> Option<Rc<dyn BackwardOp>> {
        self.backward_op.clone()
    }
}

impl std::fmt::Debug for Tensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tensor")
            .field("data", &self.data)
            .field("requires_grad", &self.requires_grad)
            .field("has_grad", &self.grad.borrow().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    #[test]
    fn test_from_vec() {
        let t = Tensor::from_vec(vec![1.0, 2.0], true);
        assert_eq!(t.len(), 2);
        assert!(t.requires_grad());
        assert!(!t.is_empty());
    }

    #[test]
    fn test_zeros() {
        let t = Tensor::zeros(4, false);
        assert_eq!(t.data().sum(), 0.0);
        assert!(!t.requires_grad());
    }

    #[test]
    fn test_grad_roundtrip() {
        let t = Tensor::from_vec(vec![1.0, 2.0], true);
        assert!(t.grad().is_none());

        t.set_grad(arr1(&[0.5, 1.5]));
        assert_eq!(t.grad().unwrap(), arr1(&[0.5, 1.5]));

        t.zero_grad();
        assert!(t.grad().is_none());
    }

    #[test]
    fn test_accumulate_grad_adds() {
        let t = Tensor::from_vec(vec![1.0, 2.0], true);
        t.accumulate_grad(&arr1(&[1.0, 1.0]));
        t.accumulate_grad(&arr1(&[0.5, 0.25]));
        assert_eq!(t.grad().unwrap(), arr1(&[1.5, 1.25]));
    }

    #[test]
    fn test_clone_shares_grad_cell() {
        let t = Tensor::from_vec(vec![1.0], true);
        let cloned = t.clone();
        t.set_grad(arr1(&[2.0]));
        // Gradient cell is shared between clones
        assert_eq!(cloned.grad().unwrap(), arr1(&[2.0]));
    }

    #[test]
    fn test_clone_data_is_independent() {
        let t = Tensor::from_vec(vec![1.0], true);
        let mut cloned = t.clone();
        cloned.data_mut()[0] = 9.0;
        assert_eq!(t.data()[0], 1.0);
    }

    #[test]
    fn test_data_mut() {
        let mut t = Tensor::from_vec(vec![1.0, 2.0], false);
        t.data_mut()[0] = 7.0;
        assert_eq!(t.data()[0], 7.0);
    }
}
