use scalargrad_core::linalg::Matrix;
use scalargrad_core::ScalarGradError;

use super::{check_not_empty, check_row_counts, DataLoader};

/// One sample per step, cycling through the dataset in order.
#[derive(Debug, Clone)]
pub struct StochasticLoader {
    features: Matrix,
    targets: Matrix,
    cursor: usize,
}

impl StochasticLoader {
    pub fn new(features: Matrix, targets: Matrix) -> Result<Self, ScalarGradError> {
        check_row_counts(&features, &targets, "StochasticLoader::new")?;
        check_not_empty(&features, "StochasticLoader::new")?;
        Ok(StochasticLoader {
            features,
            targets,
            cursor: 0,
        })
    }
}

impl DataLoader for StochasticLoader {
    fn next_batch(&mut self) -> Result<(Matrix, Matrix), ScalarGradError> {
        let indices = [self.cursor];
        let batch = (
            self.features.rows(&indices)?,
            self.targets.rows(&indices)?,
        );
        let (rows, _) = self.features.dims();
        self.cursor = if self.cursor + 1 < rows {
            self.cursor + 1
        } else {
            0
        };
        Ok(batch)
    }
}
