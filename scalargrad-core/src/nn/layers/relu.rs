use crate::error::ScalarGradError;
use crate::linalg::Matrix;
use crate::nn::module::Module;

/// Rectified linear unit: elementwise `max(x, 0)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReLU;

impl ReLU {
    pub fn new() -> Self {
        ReLU
    }
}

impl Module for ReLU {
    fn forward(&self, input: &Matrix) -> Result<Matrix, ScalarGradError> {
        Ok(input.max(0.0))
    }
}
