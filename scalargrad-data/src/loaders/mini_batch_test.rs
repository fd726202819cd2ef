#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use scalargrad_core::linalg::Matrix;
    use scalargrad_core::ScalarGradError;

    use crate::loaders::{DataLoader, MiniBatchLoader};

    fn dataset() -> (Matrix, Matrix) {
        let features =
            Matrix::new(&[vec![0.0], vec![1.0], vec![2.0], vec![3.0], vec![4.0]])
                .unwrap();
        let targets =
            Matrix::new(&[vec![0.0], vec![10.0], vec![20.0], vec![30.0], vec![40.0]])
                .unwrap();
        (features, targets)
    }

    #[test]
    fn batches_have_the_requested_size() {
        let (features, targets) = dataset();
        let mut loader = MiniBatchLoader::with_seed(features, targets, 2, 42).unwrap();
        for _ in 0..10 {
            let (batch_x, batch_y) = loader.next_batch().unwrap();
            assert_eq!(batch_x.dims(), (2, 1));
            assert_eq!(batch_y.dims(), (2, 1));
        }
    }

    #[test]
    fn every_row_is_visited_once_per_permutation() {
        let (features, targets) = dataset();
        let mut loader = MiniBatchLoader::with_seed(features, targets, 2, 7).unwrap();

        // 10 batches of 2 over 5 rows consume exactly 4 permutations.
        let mut counts: HashMap<u64, usize> = HashMap::new();
        for _ in 0..10 {
            let (batch_x, _) = loader.next_batch().unwrap();
            for row in batch_x.data() {
                *counts.entry(row[0] as u64).or_insert(0) += 1;
            }
        }
        assert_eq!(counts.len(), 5);
        assert!(counts.values().all(|&count| count == 4));
    }

    #[test]
    fn features_and_targets_stay_paired() {
        let (features, targets) = dataset();
        let mut loader = MiniBatchLoader::with_seed(features, targets, 3, 123).unwrap();
        for _ in 0..6 {
            let (batch_x, batch_y) = loader.next_batch().unwrap();
            for (x_row, y_row) in batch_x.data().iter().zip(batch_y.data()) {
                assert_eq!(y_row[0], x_row[0] * 10.0);
            }
        }
    }

    #[test]
    fn invalid_batch_sizes_are_rejected() {
        let (features, targets) = dataset();
        assert!(matches!(
            MiniBatchLoader::with_seed(features.clone(), targets.clone(), 0, 1),
            Err(ScalarGradError::ConfigurationError(_))
        ));
        assert!(matches!(
            MiniBatchLoader::with_seed(features, targets, 6, 1),
            Err(ScalarGradError::ConfigurationError(_))
        ));
    }

    #[test]
    fn row_counts_must_agree() {
        let (features, _) = dataset();
        let targets = Matrix::new(&[vec![0.0]]).unwrap();
        assert!(matches!(
            MiniBatchLoader::with_seed(features, targets, 2, 1),
            Err(ScalarGradError::DimensionMismatch { .. })
        ));
    }
}
