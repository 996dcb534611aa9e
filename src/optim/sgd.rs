//! Plain gradient descent with L2 weight decay

use super::Optimizer;
use crate::Tensor;

/// Gradient descent: θ_t = θ_{t-1} - lr · (∇θ + λ·θ_{t-1})
pub struct Sgd {
    lr: f32,
    weight_decay: f32,
}

impl Sgd {
    /// Create a new SGD optimizer
    pub fn new(lr: f32, weight_decay: f32) -> Self {
        Self { lr, weight_decay }
    }
}

impl Optimizer for Sgd {
    fn step(&mut self, params: &mut [&mut Tensor]) {
        for param in params.iter_mut() {
            if let Some(grad) = param.grad() {
                let update = if self.weight_decay > 0.0 {
                    (&grad + &(param.data() * self.weight_decay)) * self.lr
                } else {
                    &grad * self.lr
                };
                *param.data_mut() -= &update;
            }
        }
    }

    fn lr(&self) -> f32 {
        self.lr
    }

    fn set_lr(&mut self, lr: f32) {
        self.lr = lr;
    }
}
