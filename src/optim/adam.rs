//! Adam optimizer with L2 weight decay

use ndarray::Array1;

use super::Optimizer;
use crate::Tensor;

/// Adam optimizer
///
/// Maintains exponential moving averages of the gradient (first moment) and
/// its square (second moment), with bias-corrected step size. Weight decay is
/// coupled into the gradient as L2 regularization before the moment updates:
///
/// g_t = ∇θ + λ·θ_{t-1}
/// m_t = β₁·m_{t-1} + (1-β₁)·g_t
/// v_t = β₂·v_{t-1} + (1-β₂)·g_t²
/// θ_t = θ_{t-1} - lr_t · m_t / (√v_t + ε)
pub struct Adam {
    lr: f32,
    beta1: f32,
    beta2: f32,
    epsilon: f32,
    weight_decay: f32,
    t: u64,
    m: Vec<Option<Array1<f32>>>,
    v: Vec<Option<Array1<f32>>>,
}

impl Adam {
    /// Create Adam with default betas (0.9, 0.999) and epsilon 1e-8
    pub fn new(lr: f32, weight_decay: f32) -> Self {
        Self::with_betas(lr, 0.9, 0.999, 1e-8, weight_decay)
    }

    /// Create Adam with explicit hyperparameters
    pub fn with_betas(lr: f32, beta1: f32, beta2: f32, epsilon: f32, weight_decay: f32) -> Self {
        Self { lr, beta1, beta2, epsilon, weight_decay, t: 0, m: Vec::new(), v: Vec::new() }
    }

    /// Initialize moment buffers if needed
    fn ensure_moments(&mut self, count: usize) {
        if self.m.is_empty() {
            self.m = (0..count).map(|_| None).collect();
            self.v = (0..count).map(|_| None).collect();
        }
    }
}

impl Optimizer for Adam {
    fn step(&mut self, params: &mut [&mut Tensor]) {
        self.ensure_moments(params.len());
        self.t += 1;

        // Bias correction folded into the step size
        let lr_t = self.lr
            * ((1.0 - self.beta2.powi(self.t as i32)).sqrt()
                / (1.0 - self.beta1.powi(self.t as i32)));

        for (i, param) in params.iter_mut().enumerate() {
            if let Some(grad) = param.grad() {
                let grad = if self.weight_decay > 0.0 {
                    &grad + &(param.data() * self.weight_decay)
                } else {
                    grad
                };

                let m = match self.m[i].take() {
                    Some(m) => m * self.beta1 + &grad * (1.0 - self.beta1),
                    None => &grad * (1.0 - self.beta1),
                };
                let grad_sq = &grad * &grad;
                let v = match self.v[i].take() {
                    Some(v) => v * self.beta2 + &grad_sq * (1.0 - self.beta2),
                    None => &grad_sq * (1.0 - self.beta2),
                };

                let denom = v.mapv(f32::sqrt) + self.epsilon;
                *param.data_mut() -= &(&m / &denom * lr_t);

                self.m[i] = Some(m);
                self.v[i] = Some(v);
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
