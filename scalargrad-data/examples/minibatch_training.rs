//! # Régression linéaire par mini-batches
//!
//! Normalise les colonnes d'entrée, puis entraîne une couche `Linear` par
//! descente de gradient stochastique sur des mini-batches mélangés.
//!
//! ## Exécution
//! `cargo run --example minibatch_training`

use scalargrad_core::linalg::Matrix;
use scalargrad_core::nn::layers::Linear;
use scalargrad_core::nn::losses::mean_squared_error;
use scalargrad_core::nn::Module;
use scalargrad_core::optim::{Optimizer, SgdOptimizer};
use scalargrad_core::ScalarGradError;
use scalargrad_data::{ColumnNormalizer, DataLoader, MiniBatchLoader};

fn main() -> Result<(), ScalarGradError> {
    // y = 3·x1 - 2·x2 + 1, with features on very different scales.
    let raw_features = Matrix::new(&[
        vec![100.0, 0.1],
        vec![200.0, 0.2],
        vec![300.0, 0.4],
        vec![400.0, 0.3],
        vec![500.0, 0.8],
        vec![600.0, 0.5],
    ])?;
    let targets = Matrix::new(
        &raw_features
            .data()
            .iter()
            .map(|row| vec![3.0 * row[0] / 100.0 - 2.0 * row[1] + 1.0])
            .collect::<Vec<_>>(),
    )?;

    let mut normalizer = ColumnNormalizer::new();
    let features = normalizer.fit_transform(&raw_features)?;

    let model = Linear::new(2, 1);
    let mut optimizer = SgdOptimizer::new(model.parameters(), 0.05)?;
    let mut loader = MiniBatchLoader::with_seed(features, targets, 2, 42)?;

    for step in 0..300 {
        let (batch_x, batch_y) = loader.next_batch()?;
        let predicted = model.forward(&batch_x)?;
        let loss = mean_squared_error(&batch_y, &predicted)?;
        optimizer.step(&loss)?;

        if step % 30 == 0 {
            println!("step {step:3}  batch loss {:.6}", loss.data());
        }
    }

    println!("weights {:?}", model.weight().data());
    println!("bias    {:?}", model.bias().data());
    Ok(())
}
