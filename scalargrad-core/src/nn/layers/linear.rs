use crate::error::ScalarGradError;
use crate::linalg::{Matrix, Vector};
use crate::nn::init;
use crate::nn::module::Module;
use crate::node::Node;

/// Applies a linear transformation to the incoming batch: `y = x·W + b`.
///
/// The weight has shape `fan_in x fan_out`; the bias is broadcast across
/// every row of the product.
#[derive(Debug, Clone)]
pub struct Linear {
    weight: Matrix,
    bias: Vector,
}

impl Linear {
    /// Creates a new `Linear` layer with standard-normal weights and a zero
    /// bias.
    pub fn new(fan_in: usize, fan_out: usize) -> Self {
        Linear {
            weight: init::normal_matrix(fan_in, fan_out),
            bias: Vector::zeros(fan_out),
        }
    }

    /// Builds the layer from explicit parameter containers, e.g. for
    /// deterministic tests or restoring trained weights.
    pub fn from_parts(weight: Matrix, bias: Vector) -> Result<Self, ScalarGradError> {
        let (_, fan_out) = weight.dims();
        if bias.len() != fan_out {
            return Err(ScalarGradError::DimensionMismatch {
                expected: vec![fan_out],
                actual: vec![bias.len()],
                operation: "Linear::from_parts".to_string(),
            });
        }
        Ok(Linear { weight, bias })
    }

    pub fn weight(&self) -> &Matrix {
        &self.weight
    }

    pub fn bias(&self) -> &Vector {
        &self.bias
    }
}

impl Module for Linear {
    fn forward(&self, input: &Matrix) -> Result<Matrix, ScalarGradError> {
        input.matmul(&self.weight)?.add_vector(&self.bias)
    }

    fn parameters(&self) -> Vec<Node> {
        let mut params = self.weight.nodes();
        params.extend(self.bias.nodes());
        params
    }
}
