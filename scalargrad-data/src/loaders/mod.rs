//! Batch loaders. Each yields `(features, targets)` batches whose rows
//! share node handles with the source matrices, so gradients computed on a
//! batch flow back to the original rows.

mod full_batch;
mod mini_batch;
mod stochastic;

#[cfg(test)]
mod mini_batch_test;

pub use full_batch::FullBatchLoader;
pub use mini_batch::MiniBatchLoader;
pub use stochastic::StochasticLoader;

use scalargrad_core::linalg::Matrix;
use scalargrad_core::ScalarGradError;

/// Yields successive `(features, targets)` batches for a training loop.
/// Loaders cycle forever: every call produces a batch.
pub trait DataLoader {
    fn next_batch(&mut self) -> Result<(Matrix, Matrix), ScalarGradError>;
}

pub(crate) fn check_row_counts(
    features: &Matrix,
    targets: &Matrix,
    operation: &str,
) -> Result<(), ScalarGradError> {
    let (feature_rows, _) = features.dims();
    let (target_rows, _) = targets.dims();
    if feature_rows != target_rows {
        return Err(ScalarGradError::DimensionMismatch {
            expected: vec![feature_rows],
            actual: vec![target_rows],
            operation: operation.to_string(),
        });
    }
    Ok(())
}

pub(crate) fn check_not_empty(
    features: &Matrix,
    operation: &str,
) -> Result<(), ScalarGradError> {
    let (rows, _) = features.dims();
    if rows == 0 {
        return Err(ScalarGradError::ConfigurationError(format!(
            "{} requires a non-empty dataset",
            operation
        )));
    }
    Ok(())
}
