use crate::error::ScalarGradError;
use crate::node::Node;
use crate::optim::optimizer::Optimizer;
use crate::optim::validate_lr;

/// Plain stochastic gradient descent: `data -= lr * grad`.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: Vec<Node>,
    lr: f64,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer` over the given flattened parameters.
    pub fn new(params: Vec<Node>, lr: f64) -> Result<Self, ScalarGradError> {
        validate_lr(lr)?;
        log::debug!("SGD tracking {} parameters", params.len());
        Ok(SgdOptimizer { params, lr })
    }
}

impl Optimizer for SgdOptimizer {
    fn params(&self) -> &[Node] {
        &self.params
    }

    fn update(&mut self) {
        for param in &self.params {
            param.set_data(param.data() - self.lr * param.grad());
        }
    }
}
