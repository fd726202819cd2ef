use crate::error::ScalarGradError;
use crate::linalg::Matrix;
use crate::node::Node;

/// Mean squared error: squared deviations summed over output columns,
/// averaged over samples (rows).
pub fn mean_squared_error(
    actual: &Matrix,
    predicted: &Matrix,
) -> Result<Node, ScalarGradError> {
    let (rows, _) = actual.dims();
    let total = actual.sub(predicted)?.powf(2.0).col_sum().sum();
    Ok(&total / rows as f64)
}
