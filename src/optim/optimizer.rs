//! Optimizer trait

use crate::Tensor;

/// Trait for optimization algorithms
///
/// Parameters arrive borrowed from the model that owns them; the optimizer
/// holds only its own state (learning rate, moment buffers) across steps.
pub trait Optimizer {
    /// Apply one update to parameters carrying gradients
    ///
    /// Parameters without an accumulated gradient are left untouched.
    fn step(&mut self, params: &mut [&mut Tensor]);

    /// Clear all gradients
    fn zero_grad(&mut self, params: &mut [&mut Tensor]) {
        for param in params.iter_mut() {
            param.zero_grad();
        }
    }

    /// Get learning rate
    fn lr(&self) -> f32;

    /// Set learning rate
    fn set_lr(&mut self, lr: f32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    /// Minimal implementation exercising the default `zero_grad`
    struct PlainDescent {
        learning_rate: f32,
    }

    impl Optimizer for PlainDescent {
        fn step(&mut self, params: &mut [&mut Tensor]) {
            for param in params.iter_mut() {
                if let Some(grad) = param.grad() {
                    *param.data_mut() -= &(&grad * self.learning_rate);
                }
            }
        }

        fn lr(&self) -> f32 {
            self.learning_rate
        }

        fn set_lr(&mut self, lr: f32) {
            self.learning_rate = lr;
        }
    }

    #[test]
    fn test_step_skips_params_without_grad() {
        let mut opt = PlainDescent { learning_rate: 0.1 };
        let mut param = Tensor::from_vec(vec![1.0, 2.0], true);

        opt.step(&mut [&mut param]);
        assert_eq!(param.data().to_vec(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_step_applies_update() {
        let mut opt = PlainDescent { learning_rate: 0.1 };
        let mut param = Tensor::from_vec(vec![1.0, 2.0], true);
        param.set_grad(arr1(&[0.5, 1.0]));

        opt.step(&mut [&mut param]);
        assert!((param.data()[0] - 0.95).abs() < 1e-6);
        assert!((param.data()[1] - 1.9).abs() < 1e-6);
    }

    #[test]
    fn test_default_zero_grad() {
        let mut opt = PlainDescent { learning_rate: 0.1 };
        let mut param = Tensor::from_vec(vec![1.0], true);
        param.set_grad(arr1(&[0.5]));

        opt.zero_grad(&mut [&mut param]);
        assert!(param.grad().is_none());
    }

    #[test]
    fn test_set_lr() {
        let mut opt = PlainDescent { learning_rate: 0.1 };
        opt.set_lr(0.01);
        assert_eq!(opt.lr(), 0.01);
    }
}
