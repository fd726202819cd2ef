use crate::error::ScalarGradError;
use crate::node::Node;
use crate::optim::optimizer::Optimizer;
use crate::optim::{validate_lr, EPSILON};

/// AdaGrad: a per-parameter sum of squared gradients scales the step down
/// on frequently updated coordinates.
///
/// `s += grad²`, then `data -= lr·grad / √(s + ε)`.
#[derive(Debug)]
pub struct AdaGradOptimizer {
    params: Vec<Node>,
    lr: f64,
    accums: Vec<f64>,
}

impl AdaGradOptimizer {
    pub fn new(params: Vec<Node>, lr: f64) -> Result<Self, ScalarGradError> {
        validate_lr(lr)?;
        let accums = vec![0.0; params.len()];
        Ok(AdaGradOptimizer { params, lr, accums })
    }
}

impl Optimizer for AdaGradOptimizer {
    fn params(&self) -> &[Node] {
        &self.params
    }

    fn update(&mut self) {
        for (accum, param) in self.accums.iter_mut().zip(self.params.iter()) {
            let grad = param.grad();
            *accum += grad * grad;
            param.set_data(param.data() - self.lr * grad / (*accum + EPSILON).sqrt());
        }
    }
}
