use scalargrad_core::linalg::Matrix;
use scalargrad_core::ScalarGradError;

use super::{check_row_counts, DataLoader};

/// Returns the entire dataset on every step: plain (full-batch) gradient
/// descent.
#[derive(Debug, Clone)]
pub struct FullBatchLoader {
    features: Matrix,
    targets: Matrix,
}

impl FullBatchLoader {
    pub fn new(features: Matrix, targets: Matrix) -> Result<Self, ScalarGradError> {
        check_row_counts(&features, &targets, "FullBatchLoader::new")?;
        Ok(FullBatchLoader { features, targets })
    }
}

impl DataLoader for FullBatchLoader {
    fn next_batch(&mut self) -> Result<(Matrix, Matrix), ScalarGradError> {
        Ok((self.features.clone(), self.targets.clone()))
    }
}
