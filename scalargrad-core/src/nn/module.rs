use crate::error::ScalarGradError;
use crate::linalg::Matrix;
use crate::node::Node;

/// A differentiable model component.
pub trait Module {
    /// Forward pass over a batch matrix, one sample per row.
    fn forward(&self, input: &Matrix) -> Result<Matrix, ScalarGradError>;

    /// The flattened leaf parameters of this module, ready to hand to an
    /// optimizer. Parameterless modules (activations) use the default.
    fn parameters(&self) -> Vec<Node> {
        Vec::new()
    }
}
