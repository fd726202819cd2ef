use scalargrad_core::linalg::Matrix;
use scalargrad_core::ScalarGradError;

/// Per-column standardization: records each column's mean and population
/// standard deviation on `fit`, then maps `x` to `(x - mean) / std` on
/// `transform`, producing fresh leaf nodes.
///
/// A constant column has zero standard deviation and yields non-finite
/// output; callers are expected to drop such columns beforehand.
#[derive(Debug, Default, Clone)]
pub struct ColumnNormalizer {
    means: Vec<f64>,
    stds: Vec<f64>,
}

impl ColumnNormalizer {
    pub fn new() -> Self {
        ColumnNormalizer::default()
    }

    /// Records per-column statistics from `matrix`, replacing any previous
    /// fit.
    pub fn fit(&mut self, matrix: &Matrix) -> Result<(), ScalarGradError> {
        let (rows, cols) = matrix.dims();
        self.means.clear();
        self.stds.clear();
        for index in 0..cols {
            let column = matrix.col(index)?.data();
            let mean = column.iter().sum::<f64>() / rows as f64;
            let variance = column
                .iter()
                .map(|value| (value - mean) * (value - mean))
                .sum::<f64>()
                / rows as f64;
            self.means.push(mean);
            self.stds.push(variance.sqrt());
        }
        Ok(())
    }

    /// Standardizes `matrix` into fresh leaves. Fails when called before
    /// `fit`, or with a column count different from the fitted one.
    pub fn transform(&self, matrix: &Matrix) -> Result<Matrix, ScalarGradError> {
        let (_, cols) = matrix.dims();
        if cols != self.means.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: vec![self.means.len()],
                actual: vec![cols],
                operation: "ColumnNormalizer::transform".to_string(),
            });
        }
        let standardized: Vec<Vec<f64>> = matrix
            .data()
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(index, value)| (value - self.means[index]) / self.stds[index])
                    .collect()
            })
            .collect();
        Matrix::new(&standardized)
    }

    /// `fit` followed by `transform` on the same matrix.
    pub fn fit_transform(&mut self, matrix: &Matrix) -> Result<Matrix, ScalarGradError> {
        self.fit(matrix)?;
        self.transform(matrix)
    }
}
