use crate::error::ScalarGradError;
use crate::linalg::Matrix;
use crate::nn::module::Module;
use crate::node::Node;

/// Chains modules, feeding each output into the next.
pub struct Sequential {
    layers: Vec<Box<dyn Module>>,
}

impl Sequential {
    pub fn new(layers: Vec<Box<dyn Module>>) -> Self {
        Sequential { layers }
    }

    /// Appends a layer, builder-style.
    pub fn push(mut self, layer: impl Module + 'static) -> Self {
        self.layers.push(Box::new(layer));
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Module for Sequential {
    fn forward(&self, input: &Matrix) -> Result<Matrix, ScalarGradError> {
        let mut current = input.clone();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    fn parameters(&self) -> Vec<Node> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::linalg::{Matrix, Vector};
    use crate::nn::layers::{Linear, ReLU};

    use super::*;

    fn identity(fan: usize) -> Linear {
        let rows: Vec<Vec<f64>> = (0..fan)
            .map(|i| (0..fan).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
            .collect();
        Linear::from_parts(Matrix::new(&rows).unwrap(), Vector::zeros(fan)).unwrap()
    }

    #[test]
    fn forward_chains_layers_in_order() {
        let model = Sequential::new(vec![Box::new(identity(2)), Box::new(ReLU::new())]);
        let input = Matrix::new(&[vec![-1.0, 2.0]]).unwrap();
        let output = model.forward(&input).unwrap();
        assert_eq!(output.data(), vec![vec![0.0, 2.0]]);
    }

    #[test]
    fn parameters_concatenate_across_layers() {
        let model = Sequential::new(vec![Box::new(Linear::new(2, 4))])
            .push(ReLU::new())
            .push(Linear::new(4, 1));
        assert_eq!(model.len(), 3);
        assert_eq!(model.parameters().len(), (2 * 4 + 4) + (4 * 1 + 1));
    }

    #[test]
    fn empty_model_is_the_identity() {
        let model = Sequential::new(Vec::new());
        let input = Matrix::new(&[vec![1.0, 2.0]]).unwrap();
        let output = model.forward(&input).unwrap();
        assert_eq!(output.data(), input.data());
    }
}
