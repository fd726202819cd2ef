use crate::error::ScalarGradError;
use crate::linalg::Matrix;
use crate::nn::module::Module;

/// Logistic activation: `1 / (1 + e^(-x))`, composed entirely from core
/// operators.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sigmoid;

impl Sigmoid {
    pub fn new() -> Self {
        Sigmoid
    }
}

impl Module for Sigmoid {
    fn forward(&self, input: &Matrix) -> Result<Matrix, ScalarGradError> {
        Ok(input.neg().exp().add_scalar(1.0).powf(-1.0))
    }
}
