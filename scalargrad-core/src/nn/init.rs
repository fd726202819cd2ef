//! Parameter initialization helpers.

use rand::prelude::*;
use rand_distr::StandardNormal;

use crate::linalg::{Matrix, Vector};
use crate::node::Node;

/// A `rows x cols` matrix of fresh leaf parameters drawn from the standard
/// normal distribution.
pub fn normal_matrix(rows: usize, cols: usize) -> Matrix {
    let mut rng = rand::thread_rng();
    Matrix::from_rows_unchecked(
        (0..rows)
            .map(|_| {
                Vector::from_nodes(
                    (0..cols)
                        .map(|_| {
                            let sample: f64 = rng.sample(StandardNormal);
                            Node::new(sample)
                        })
                        .collect(),
                )
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_matrix_has_the_requested_shape() {
        let matrix = normal_matrix(3, 5);
        assert_eq!(matrix.dims(), (3, 5));
        assert!(matrix.nodes().iter().all(|node| node.is_leaf()));
    }
}
