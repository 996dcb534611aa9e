//! Binary cross-entropy with logits
//!
//! Combines the sigmoid activation with binary cross-entropy in one
//! numerically stable computation over raw logits:
//!
//! ```text
//! L_i = max(x_i, 0) - x_i * t_i + log(1 + exp(-|x_i|))
//! L = mean(L_i) over the batch
//! ```
//!
//! Gradient: `∂L/∂x_i = (σ(x_i) - t_i) / N`

use std::rc::Rc;

use ndarray::Array1;

use crate::autograd::BackwardOp;
use crate::Tensor;

/// Binary cross-entropy with logits over a batch
///
/// One raw logit per sample; targets are 0/1 class labels. The returned
/// tensor is a scalar carrying a backward operation that routes gradients
/// into the logits' gradient cell.
pub struct BceWithLogitsLoss;

impl BceWithLogitsLoss {
    /// Element-wise numerically stable sigmoid
    pub(crate) fn sigmoid(x: &Array1<f32>) -> Array1<f32> {
        x.mapv(|v| {
            if v >= 0.0 {
                1.0 / (1.0 + (-v).exp())
            } else {
                let exp_v = v.exp();
                exp_v / (1.0 + exp_v)
            }
        })
    }

    /// Stable per-element BCE: max(x, 0) - x*t + log(1 + exp(-|x|))
    fn stable_bce(logit: f32, target: f32) -> f32 {
        logit.max(0.0) - logit * target + (1.0 + (-logit.abs()).exp()).ln()
    }

    /// Compute the mean loss for a batch of logits
    pub fn forward(&self, logits: &Tensor, targets: &Tensor) -> Tensor {
        assert_eq!(
            logits.len(),
            targets.len(),
            "Logits and targets must have same length"
        );

        let mean_loss = logits
            .data()
            .iter()
            .zip(targets.data().iter())
            .map(|(&logit, &target)| Self::stable_bce(logit, target))
            .sum::<f32>()
            / logits.len() as f32;

        let mut loss = Tensor::from_vec(vec![mean_loss], true);

        if logits.requires_grad() {
            let n = logits.len() as f32;
            let grad = (&Self::sigmoid(logits.data()) - targets.data()) / n;
            loss.set_backward_op(Rc::new(BceBackward { logits: logits.clone(), grad }));
        }

        loss
    }
}

struct BceBackward {
    // Clone shares the gradient cell and carries the logits' own tape node
    logits: Tensor,
    grad: Array1<f32>,
}

impl BackwardOp for BceBackward {
    fn backward(&self) {
        self.logits.accumulate_grad(&self.grad);
        if let Some(op) = self.logits.backward_op() {
            op.backward();
        }
    }
}
