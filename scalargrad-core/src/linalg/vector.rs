// src/linalg/vector.rs

use std::ops::Index;
use std::slice;

use crate::error::ScalarGradError;
use crate::node::Node;

/// A fixed-length ordered sequence of [`Node`]s.
///
/// Cloning a vector clones the node handles: the clone shares the same
/// underlying graph entries.
#[derive(Clone, Debug)]
pub struct Vector {
    values: Vec<Node>,
}

impl Vector {
    /// Builds a vector of fresh leaf nodes from raw numbers.
    pub fn new(values: &[f64]) -> Self {
        Vector {
            values: values.iter().map(|&value| Node::new(value)).collect(),
        }
    }

    /// Builds a vector from existing nodes, preserving their graph links.
    pub fn from_nodes(values: Vec<Node>) -> Self {
        Vector { values }
    }

    /// A vector of `len` fresh zero leaves.
    pub fn zeros(len: usize) -> Self {
        Vector {
            values: (0..len).map(|_| Node::new(0.0)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.values.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Node> {
        self.values.iter()
    }

    fn check_len(&self, other: &Vector, operation: &str) -> Result<(), ScalarGradError> {
        if self.len() != other.len() {
            return Err(ScalarGradError::DimensionMismatch {
                expected: vec![self.len()],
                actual: vec![other.len()],
                operation: operation.to_string(),
            });
        }
        Ok(())
    }

    /// Elementwise sum of two vectors of equal length.
    pub fn add(&self, other: &Vector) -> Result<Vector, ScalarGradError> {
        self.check_len(other, "Vector::add")?;
        Ok(Vector::from_nodes(
            self.values
                .iter()
                .zip(other.values.iter())
                .map(|(a, b)| a + b)
                .collect(),
        ))
    }

    /// Elementwise product of two vectors of equal length.
    pub fn mul(&self, other: &Vector) -> Result<Vector, ScalarGradError> {
        self.check_len(other, "Vector::mul")?;
        Ok(Vector::from_nodes(
            self.values
                .iter()
                .zip(other.values.iter())
                .map(|(a, b)| a * b)
                .collect(),
        ))
    }

    /// Elementwise negation.
    pub fn neg(&self) -> Vector {
        Vector::from_nodes(self.values.iter().map(|value| -value).collect())
    }

    /// Sum reduction. An empty vector sums to a fresh zero leaf.
    pub fn sum(&self) -> Node {
        match self.values.split_first() {
            None => Node::new(0.0),
            Some((first, rest)) => rest.iter().fold(first.clone(), |acc, value| &acc + value),
        }
    }

    /// Arithmetic mean: `sum / len`.
    pub fn mean(&self) -> Node {
        let total = self.sum();
        &total / self.len() as f64
    }

    /// Population variance: mean squared deviation, with divisor = length
    /// (not length - 1).
    pub fn variance(&self) -> Node {
        let mean = self.mean();
        let squared_deviations: Vec<Node> = self
            .values
            .iter()
            .map(|value| (value - &mean).powf(2.0))
            .collect();
        let total = Vector::from_nodes(squared_deviations).sum();
        &total / self.len() as f64
    }

    /// Standard deviation: `variance^0.5`.
    pub fn std(&self) -> Node {
        self.variance().powf(0.5)
    }

    /// Dot product: elementwise multiply, then sum.
    pub fn dot(&self, other: &Vector) -> Result<Node, ScalarGradError> {
        self.check_len(other, "Vector::dot")?;
        Ok(self.mul(other)?.sum())
    }

    /// Runs `backward()` on every element independently. Seeding a scalar
    /// loss remains the caller's responsibility.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        for value in &self.values {
            value.backward()?;
        }
        Ok(())
    }

    /// Resets every element's gradient to zero.
    pub fn zero_grad(&self) {
        for value in &self.values {
            value.zero_grad();
        }
    }

    /// Every constituent node, in order. The handles are cheap clones
    /// sharing the underlying graph entries, the form optimizers consume.
    pub fn nodes(&self) -> Vec<Node> {
        self.values.clone()
    }

    /// Snapshot of the forward data.
    pub fn data(&self) -> Vec<f64> {
        self.values.iter().map(|value| value.data()).collect()
    }
}

impl Index<usize> for Vector {
    type Output = Node;

    fn index(&self, index: usize) -> &Node {
        &self.values[index]
    }
}
