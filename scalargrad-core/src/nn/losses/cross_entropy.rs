use crate::error::ScalarGradError;
use crate::linalg::Matrix;
use crate::node::Node;

/// Negative log-likelihood: `-Σ(actual · ln predicted) / rows`.
///
/// Expects `predicted` to hold probabilities; `ln` is ε-guarded, so a zero
/// probability contributes a large but finite penalty.
pub fn negative_log_likelihood(
    actual: &Matrix,
    predicted: &Matrix,
) -> Result<Node, ScalarGradError> {
    let (rows, _) = actual.dims();
    let total = actual.mul(&predicted.ln())?.row_sum().sum();
    let negated = -&total;
    Ok(&negated / rows as f64)
}

/// Binary cross-entropy over probability outputs:
/// `-Σ(actual·ln p + (1-actual)·ln(1-p)) / rows`.
pub fn binary_cross_entropy(
    actual: &Matrix,
    predicted: &Matrix,
) -> Result<Node, ScalarGradError> {
    let (rows, _) = actual.dims();
    let positive = actual.mul(&predicted.ln())?;
    let negative = actual
        .neg()
        .add_scalar(1.0)
        .mul(&predicted.neg().add_scalar(1.0).ln())?;
    let total = positive.add(&negative)?.col_sum().sum();
    let negated = -&total;
    Ok(&negated / rows as f64)
}
