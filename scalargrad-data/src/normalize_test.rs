#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use scalargrad_core::linalg::Matrix;
    use scalargrad_core::ScalarGradError;

    use crate::normalize::ColumnNormalizer;

    #[test]
    fn standardizes_each_column_independently() {
        let matrix = Matrix::new(&[vec![1.0, 10.0], vec![3.0, 30.0]]).unwrap();
        let mut normalizer = ColumnNormalizer::new();
        let standardized = normalizer.fit_transform(&matrix).unwrap();

        // means (2, 20), population stds (1, 10)
        assert_eq!(
            standardized.data(),
            vec![vec![-1.0, -1.0], vec![1.0, 1.0]]
        );
    }

    #[test]
    fn transformed_columns_have_zero_mean_and_unit_std() {
        let matrix =
            Matrix::new(&[vec![2.0], vec![4.0], vec![4.0], vec![6.0]]).unwrap();
        let mut normalizer = ColumnNormalizer::new();
        let standardized = normalizer.fit_transform(&matrix).unwrap();

        let column = standardized.col(0).unwrap();
        assert_relative_eq!(column.mean().data(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(column.std().data(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn transform_produces_fresh_leaves() {
        let matrix = Matrix::new(&[vec![1.0], vec![3.0]]).unwrap();
        let mut normalizer = ColumnNormalizer::new();
        let standardized = normalizer.fit_transform(&matrix).unwrap();

        assert!(standardized.nodes().iter().all(|node| node.is_leaf()));
        assert_ne!(standardized[0][0], matrix[0][0]);
    }

    #[test]
    fn transform_before_fit_is_rejected() {
        let matrix = Matrix::new(&[vec![1.0], vec![3.0]]).unwrap();
        let normalizer = ColumnNormalizer::new();
        assert!(matches!(
            normalizer.transform(&matrix),
            Err(ScalarGradError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn column_count_must_match_the_fit() {
        let fitted = Matrix::new(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let other = Matrix::new(&[vec![1.0], vec![3.0]]).unwrap();
        let mut normalizer = ColumnNormalizer::new();
        normalizer.fit(&fitted).unwrap();
        assert!(normalizer.transform(&other).is_err());
    }
}
