use crate::error::ScalarGradError;
use crate::node::Node;
use crate::optim::optimizer::Optimizer;
use crate::optim::{validate_decay, validate_lr};

/// SGD with momentum. The accumulator is an exponentially weighted average
/// of past gradients:
///
/// `m = β·m + (1-β)·grad`, then `data -= lr·m`.
#[derive(Debug)]
pub struct MomentumOptimizer {
    params: Vec<Node>,
    lr: f64,
    momentum: f64,
    accums: Vec<f64>,
}

impl MomentumOptimizer {
    /// One accumulator per parameter, allocated once and persisted across
    /// steps.
    pub fn new(params: Vec<Node>, lr: f64, momentum: f64) -> Result<Self, ScalarGradError> {
        validate_lr(lr)?;
        validate_decay("Momentum coefficient", momentum)?;
        let accums = vec![0.0; params.len()];
        Ok(MomentumOptimizer {
            params,
            lr,
            momentum,
            accums,
        })
    }
}

impl Optimizer for MomentumOptimizer {
    fn params(&self) -> &[Node] {
        &self.params
    }

    fn update(&mut self) {
        for (accum, param) in self.accums.iter_mut().zip(self.params.iter()) {
            *accum = self.momentum * *accum + (1.0 - self.momentum) * param.grad();
            param.set_data(param.data() - self.lr * *accum);
        }
    }
}
