// src/linalg/matrix.rs

use std::ops::Index;
use std::slice;

use crate::error::ScalarGradError;
use crate::node::Node;

use super::vector::Vector;

/// Axis along which [`Matrix::broadcast`] repeats a vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The vector becomes every row: result is `copies x vector.len()`.
    Rows,
    /// The vector becomes every column: result is `vector.len() x copies`.
    Columns,
}

/// A rectangular matrix: ordered rows of equal length.
///
/// Cloning a matrix clones the node handles: the clone shares the same
/// underlying graph entries.
#[derive(Clone, Debug)]
pub struct Matrix {
    rows: Vec<Vector>,
}

impl Matrix {
    /// Builds a matrix of fresh leaf nodes. All rows must share one length.
    pub fn new(values: &[Vec<f64>]) -> Result<Matrix, ScalarGradError> {
        Matrix::from_rows(values.iter().map(|row| Vector::new(row)).collect())
    }

    /// Builds a matrix from row vectors, preserving their graph links.
    /// Ragged input is rejected.
    pub fn from_rows(rows: Vec<Vector>) -> Result<Matrix, ScalarGradError> {
        if let Some(first) = rows.first() {
            let columns = first.len();
            for row in &rows {
                if row.len() != columns {
                    return Err(ScalarGradError::DimensionMismatch {
                        expected: vec![columns],
                        actual: vec![row.len()],
                        operation: "Matrix::from_rows".to_string(),
                    });
                }
            }
        }
        Ok(Matrix { rows })
    }

    /// Builds a matrix from existing nodes, preserving their graph links.
    pub fn from_nodes(values: Vec<Vec<Node>>) -> Result<Matrix, ScalarGradError> {
        Matrix::from_rows(values.into_iter().map(Vector::from_nodes).collect())
    }

    /// Rows known to share one length skip the rectangularity check.
    pub(crate) fn from_rows_unchecked(rows: Vec<Vector>) -> Matrix {
        Matrix { rows }
    }

    /// `(rows, columns)`. An empty matrix is `(0, 0)`.
    pub fn dims(&self) -> (usize, usize) {
        match self.rows.first() {
            None => (0, 0),
            Some(first) => (self.rows.len(), first.len()),
        }
    }

    pub fn iter(&self) -> slice::Iter<'_, Vector> {
        self.rows.iter()
    }

    fn check_dims(&self, other: &Matrix, operation: &str) -> Result<(), ScalarGradError> {
        if self.dims() != other.dims() {
            let (expected_rows, expected_columns) = self.dims();
            let (actual_rows, actual_columns) = other.dims();
            return Err(ScalarGradError::DimensionMismatch {
                expected: vec![expected_rows, expected_columns],
                actual: vec![actual_rows, actual_columns],
                operation: operation.to_string(),
            });
        }
        Ok(())
    }

    fn map_elementwise<F>(&self, f: F) -> Matrix
    where
        F: Fn(&Node) -> Node,
    {
        Matrix::from_rows_unchecked(
            self.rows
                .iter()
                .map(|row| Vector::from_nodes(row.iter().map(&f).collect()))
                .collect(),
        )
    }

    // --- Elementwise algebra ---

    /// Elementwise sum of two matrices of equal shape.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, ScalarGradError> {
        self.check_dims(other, "Matrix::add")?;
        let rows = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| a.add(b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Matrix::from_rows_unchecked(rows))
    }

    /// Adds a vector to every row (broadcast across rows). The vector's
    /// length must match the column count.
    pub fn add_vector(&self, other: &Vector) -> Result<Matrix, ScalarGradError> {
        let (_, columns) = self.dims();
        if !self.rows.is_empty() && columns != other.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: vec![columns],
                actual: vec![other.len()],
                operation: "Matrix::add_vector".to_string(),
            });
        }
        let rows = self
            .rows
            .iter()
            .map(|row| row.add(other))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Matrix::from_rows_unchecked(rows))
    }

    /// Adds one node to every element. The node is shared, so its gradient
    /// accumulates across the whole matrix.
    pub fn add_node(&self, other: &Node) -> Matrix {
        self.map_elementwise(|value| value + other)
    }

    /// Adds a constant, first promoted to a single shared leaf node.
    pub fn add_scalar(&self, value: f64) -> Matrix {
        self.add_node(&Node::new(value))
    }

    /// `self - other`, expressed as `self + (-other)`.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix, ScalarGradError> {
        self.check_dims(other, "Matrix::sub")?;
        self.add(&other.neg())
    }

    /// Elementwise product of two matrices of equal shape.
    pub fn mul(&self, other: &Matrix) -> Result<Matrix, ScalarGradError> {
        self.check_dims(other, "Matrix::mul")?;
        let rows = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .map(|(a, b)| a.mul(b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Matrix::from_rows_unchecked(rows))
    }

    /// Elementwise negation.
    pub fn neg(&self) -> Matrix {
        Matrix::from_rows_unchecked(self.rows.iter().map(|row| row.neg()).collect())
    }

    /// Elementwise power with a constant exponent.
    pub fn powf(&self, exponent: f64) -> Matrix {
        self.map_elementwise(|value| value.powf(exponent))
    }

    /// Elementwise exponential.
    pub fn exp(&self) -> Matrix {
        self.map_elementwise(|value| value.exp())
    }

    /// Elementwise guarded natural logarithm.
    pub fn ln(&self) -> Matrix {
        self.map_elementwise(|value| value.ln())
    }

    /// Elementwise clamp from below at a constant. Returns a new matrix;
    /// the receiver is never mutated.
    pub fn max(&self, threshold: f64) -> Matrix {
        self.map_elementwise(|value| value.max(threshold))
    }

    /// Elementwise clamp from above at a constant. Returns a new matrix;
    /// the receiver is never mutated.
    pub fn min(&self, threshold: f64) -> Matrix {
        self.map_elementwise(|value| value.min(threshold))
    }

    // --- Extraction and reductions ---

    /// Row `index` as a vector of shared handles.
    pub fn row(&self, index: usize) -> Result<Vector, ScalarGradError> {
        self.rows
            .get(index)
            .cloned()
            .ok_or(ScalarGradError::IndexOutOfBounds {
                index,
                len: self.rows.len(),
            })
    }

    /// Multi-row selection by index list, in list order; indices may
    /// repeat. The selected rows share handles with the receiver, so this
    /// supports both batching and embedding lookup: gradients flow back to
    /// the original rows.
    pub fn rows(&self, indices: &[usize]) -> Result<Matrix, ScalarGradError> {
        let selected = indices
            .iter()
            .map(|&index| self.row(index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Matrix::from_rows_unchecked(selected))
    }

    /// Column `index` as a vector of shared handles.
    pub fn col(&self, index: usize) -> Result<Vector, ScalarGradError> {
        let (_, columns) = self.dims();
        if index >= columns {
            return Err(ScalarGradError::IndexOutOfBounds {
                index,
                len: columns,
            });
        }
        Ok(Vector::from_nodes(
            self.rows.iter().map(|row| row[index].clone()).collect(),
        ))
    }

    /// Per-row sums.
    pub fn row_sum(&self) -> Vector {
        Vector::from_nodes(self.rows.iter().map(|row| row.sum()).collect())
    }

    /// Per-column sums.
    pub fn col_sum(&self) -> Vector {
        let (_, columns) = self.dims();
        Vector::from_nodes(
            (0..columns)
                .map(|index| {
                    Vector::from_nodes(
                        self.rows.iter().map(|row| row[index].clone()).collect(),
                    )
                    .sum()
                })
                .collect(),
        )
    }

    /// Expands a vector into a matrix by repetition along `axis`. The node
    /// handles are shared, so a copy's gradient accumulates on the vector.
    pub fn broadcast(vector: &Vector, copies: usize, axis: Axis) -> Matrix {
        let rows = match axis {
            Axis::Rows => (0..copies).map(|_| vector.clone()).collect(),
            Axis::Columns => vector
                .iter()
                .map(|value| Vector::from_nodes(vec![value.clone(); copies]))
                .collect(),
        };
        Matrix::from_rows_unchecked(rows)
    }

    /// Matrix product: `result[i][j] = Σ_k self[i][k] * other[k][j]`.
    /// Requires `self.columns == other.rows`.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix, ScalarGradError> {
        let (_, self_columns) = self.dims();
        let (other_rows, other_columns) = other.dims();
        if self_columns != other_rows {
            return Err(ScalarGradError::DimensionMismatch {
                expected: vec![self_columns],
                actual: vec![other_rows],
                operation: "Matrix::matmul".to_string(),
            });
        }

        let other_cols: Vec<Vector> = (0..other_columns)
            .map(|index| {
                Vector::from_nodes(other.rows.iter().map(|row| row[index].clone()).collect())
            })
            .collect();

        let mut rows = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let out_row = other_cols
                .iter()
                .map(|col| row.dot(col))
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(Vector::from_nodes(out_row));
        }
        Ok(Matrix::from_rows_unchecked(rows))
    }

    // --- Gradient plumbing ---

    /// Runs `backward()` on every element independently. Seeding a scalar
    /// loss remains the caller's responsibility.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        for row in &self.rows {
            row.backward()?;
        }
        Ok(())
    }

    /// Resets every element's gradient to zero.
    pub fn zero_grad(&self) {
        for row in &self.rows {
            row.zero_grad();
        }
    }

    /// Every constituent node in row-major order, the flattened form
    /// optimizers consume.
    pub fn nodes(&self) -> Vec<Node> {
        self.rows.iter().flat_map(|row| row.nodes()).collect()
    }

    /// Snapshot of the forward data, row-major.
    pub fn data(&self) -> Vec<Vec<f64>> {
        self.rows.iter().map(|row| row.data()).collect()
    }
}

impl Index<usize> for Matrix {
    type Output = Vector;

    fn index(&self, index: usize) -> &Vector {
        &self.rows[index]
    }
}
