#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::error::ScalarGradError;
    use crate::linalg::Vector;
    use crate::node::Node;

    #[test]
    fn raw_numbers_are_wrapped_into_leaves() {
        let vector = Vector::new(&[1.0, 2.0, 3.0]);
        assert_eq!(vector.len(), 3);
        assert!(vector.iter().all(|value| value.is_leaf()));
        assert_eq!(vector.data(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn elementwise_add_and_mul() {
        let a = Vector::new(&[1.0, 2.0, 3.0]);
        let b = Vector::new(&[4.0, 5.0, 6.0]);

        assert_eq!(a.add(&b).unwrap().data(), vec![5.0, 7.0, 9.0]);
        assert_eq!(a.mul(&b).unwrap().data(), vec![4.0, 10.0, 18.0]);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let a = Vector::new(&[1.0, 2.0, 3.0]);
        let b = Vector::new(&[1.0, 2.0]);

        let result = a.add(&b);
        assert_eq!(
            result.unwrap_err(),
            ScalarGradError::DimensionMismatch {
                expected: vec![3],
                actual: vec![2],
                operation: "Vector::add".to_string(),
            }
        );
        assert!(a.mul(&b).is_err());
        assert!(a.dot(&b).is_err());
    }

    #[test]
    fn negation() {
        let vector = Vector::new(&[1.0, -2.0]);
        assert_eq!(vector.neg().data(), vec![-1.0, 2.0]);
    }

    #[test]
    fn reductions() {
        let vector = Vector::new(&[1.0, 2.0, 3.0, 4.0]);
        assert_relative_eq!(vector.sum().data(), 10.0);
        assert_relative_eq!(vector.mean().data(), 2.5);
        // Population variance divides by the length, not length - 1.
        assert_relative_eq!(vector.variance().data(), 1.25);
        assert_relative_eq!(vector.std().data(), 1.25f64.sqrt());
    }

    #[test]
    fn empty_vector_sums_to_zero() {
        let vector = Vector::new(&[]);
        assert_relative_eq!(vector.sum().data(), 0.0);
    }

    #[test]
    fn dot_product() {
        let a = Vector::new(&[1.0, 2.0, 3.0]);
        let b = Vector::new(&[4.0, 5.0, 6.0]);
        assert_relative_eq!(a.dot(&b).unwrap().data(), 32.0);
    }

    #[test]
    fn mean_backpropagates_uniformly() {
        let vector = Vector::new(&[1.0, 2.0, 3.0, 4.0]);
        vector.mean().backward().unwrap();
        for value in vector.iter() {
            assert_relative_eq!(value.grad(), 0.25, epsilon = 1e-12);
        }
    }

    #[test]
    fn dot_backpropagates_the_other_vector() {
        let a = Vector::new(&[1.0, 2.0]);
        let b = Vector::new(&[3.0, 4.0]);
        a.dot(&b).unwrap().backward().unwrap();

        assert_eq!(a.iter().map(|v| v.grad()).collect::<Vec<_>>(), vec![3.0, 4.0]);
        assert_eq!(b.iter().map(|v| v.grad()).collect::<Vec<_>>(), vec![1.0, 2.0]);
    }

    #[test]
    fn zero_grad_resets_every_element() {
        let vector = Vector::new(&[1.0, 2.0]);
        vector.sum().backward().unwrap();
        assert!(vector.iter().all(|value| value.grad() != 0.0));

        vector.zero_grad();
        assert!(vector.iter().all(|value| value.grad() == 0.0));
    }

    #[test]
    fn nodes_flattening_shares_handles() {
        let vector = Vector::new(&[1.0, 2.0]);
        let nodes = vector.nodes();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0], vector[0]);

        nodes[1].set_data(9.0);
        assert_relative_eq!(vector[1].data(), 9.0);
    }

    #[test]
    fn from_nodes_preserves_graph_links() {
        let x = Node::new(2.0);
        let vector = Vector::from_nodes(vec![x.clone(), &x * 2.0]);
        vector.sum().backward().unwrap();
        // d(x + 2x)/dx = 3.
        assert_relative_eq!(x.grad(), 3.0);
    }
}
