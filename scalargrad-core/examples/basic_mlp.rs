//! # Exemple d'entraînement d'un MLP simple
//!
//! Illustre les étapes fondamentales d'un entraînement avec
//! `scalargrad-core`: construction du modèle (`Sequential` de couches
//! `Linear` + `ReLU`), calcul de la perte MSE, et boucle d'optimisation
//! avec Adam.
//!
//! ## Exécution
//! `cargo run --example basic_mlp`

use scalargrad_core::linalg::Matrix;
use scalargrad_core::nn::layers::{Linear, ReLU};
use scalargrad_core::nn::losses::mean_squared_error;
use scalargrad_core::nn::{Module, Sequential};
use scalargrad_core::optim::{AdamOptimizer, Optimizer};
use scalargrad_core::ScalarGradError;

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    // XOR: not linearly separable, so the hidden layer has to earn its keep.
    let features = Matrix::new(&[
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ])?;
    let targets = Matrix::new(&[vec![0.0], vec![1.0], vec![1.0], vec![0.0]])?;

    let model = Sequential::new(vec![Box::new(Linear::new(2, 8))])
        .push(ReLU::new())
        .push(Linear::new(8, 1));
    let mut optimizer = AdamOptimizer::new(model.parameters(), 0.05, 0.9, 0.999)?;

    for epoch in 0..200 {
        let predicted = model.forward(&features)?;
        let loss = mean_squared_error(&targets, &predicted)?;
        optimizer.step(&loss)?;

        if epoch % 20 == 0 {
            println!("epoch {epoch:3}  loss {:.6}", loss.data());
        }
    }

    let predicted = model.forward(&features)?;
    for (input, output) in features.data().iter().zip(predicted.data()) {
        println!("{input:?} -> {:.3}", output[0]);
    }
    Ok(())
}
