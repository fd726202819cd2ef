use crate::error::ScalarGradError;
use crate::node::Node;
use crate::optim::optimizer::Optimizer;
use crate::optim::{validate_decay, validate_lr, EPSILON};

/// RMSProp: like AdaGrad, but the squared-gradient accumulator decays, so
/// the effective step size can recover.
///
/// `s = β·s + (1-β)·grad²`, then `data -= lr·grad / √(s + ε)`.
#[derive(Debug)]
pub struct RmsPropOptimizer {
    params: Vec<Node>,
    lr: f64,
    decay: f64,
    accums: Vec<f64>,
}

impl RmsPropOptimizer {
    pub fn new(params: Vec<Node>, lr: f64, decay: f64) -> Result<Self, ScalarGradError> {
        validate_lr(lr)?;
        validate_decay("Decay coefficient", decay)?;
        let accums = vec![0.0; params.len()];
        Ok(RmsPropOptimizer {
            params,
            lr,
            decay,
            accums,
        })
    }
}

impl Optimizer for RmsPropOptimizer {
    fn params(&self) -> &[Node] {
        &self.params
    }

    fn update(&mut self) {
        for (accum, param) in self.accums.iter_mut().zip(self.params.iter()) {
            let grad = param.grad();
            *accum = self.decay * *accum + (1.0 - self.decay) * grad * grad;
            param.set_data(param.data() - self.lr * grad / (*accum + EPSILON).sqrt());
        }
    }
}
