// Déclare les modules principaux de la crate
pub mod autograd;
pub mod error;
pub mod linalg;
pub mod nn;
pub mod node;
pub mod ops;
pub mod optim;

// Ré-exporte les types de base pour qu'ils soient accessibles directement
// via `scalargrad_core::Node`, etc.
pub use error::ScalarGradError;
pub use linalg::{Axis, Matrix, Vector};
pub use node::Node;
