use crate::error::ScalarGradError;
use crate::node::Node;
use crate::optim::optimizer::Optimizer;
use crate::optim::{validate_decay, validate_lr, EPSILON};

/// Adam: first and second moment estimates with bias correction.
///
/// ```text
/// m = β1·m + (1-β1)·grad        m̂ = m / (1 - β1^t)
/// s = β2·s + (1-β2)·grad²       ŝ = s / (1 - β2^t)
/// data -= lr·m̂ / (√ŝ + ε)
/// ```
///
/// `t` starts at 1 and increments once per step, after the update.
#[derive(Debug)]
pub struct AdamOptimizer {
    params: Vec<Node>,
    lr: f64,
    beta1: f64,
    beta2: f64,
    first_moments: Vec<f64>,
    second_moments: Vec<f64>,
    time: u32,
}

impl AdamOptimizer {
    pub fn new(
        params: Vec<Node>,
        lr: f64,
        beta1: f64,
        beta2: f64,
    ) -> Result<Self, ScalarGradError> {
        validate_lr(lr)?;
        validate_decay("Beta1", beta1)?;
        validate_decay("Beta2", beta2)?;
        let first_moments = vec![0.0; params.len()];
        let second_moments = vec![0.0; params.len()];
        Ok(AdamOptimizer {
            params,
            lr,
            beta1,
            beta2,
            first_moments,
            second_moments,
            time: 1,
        })
    }
}

impl Optimizer for AdamOptimizer {
    fn params(&self) -> &[Node] {
        &self.params
    }

    fn update(&mut self) {
        let bias_correction1 = 1.0 - self.beta1.powi(self.time as i32);
        let bias_correction2 = 1.0 - self.beta2.powi(self.time as i32);

        for (index, param) in self.params.iter().enumerate() {
            let grad = param.grad();
            self.first_moments[index] =
                self.beta1 * self.first_moments[index] + (1.0 - self.beta1) * grad;
            self.second_moments[index] =
                self.beta2 * self.second_moments[index] + (1.0 - self.beta2) * grad * grad;

            let m_hat = self.first_moments[index] / bias_correction1;
            let s_hat = self.second_moments[index] / bias_correction2;
            param.set_data(param.data() - self.lr * m_hat / (s_hat.sqrt() + EPSILON));
        }
        self.time += 1;
    }
}
