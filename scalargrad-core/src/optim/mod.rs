//! Gradient-based optimizers over a flattened list of leaf parameters.
//!
//! Chaque optimiseur garde son état d'accumulateur alloué une seule fois à
//! la construction; `step(loss)` remet les gradients à zéro, relance la
//! passe arrière depuis `loss`, puis applique sa règle de mise à jour.

pub mod adagrad;
pub mod adam;
pub mod momentum;
pub mod optimizer;
pub mod rmsprop;
pub mod sgd;


pub use adagrad::AdaGradOptimizer;
pub use adam::AdamOptimizer;
pub use momentum::MomentumOptimizer;
pub use optimizer::Optimizer;
pub use rmsprop::RmsPropOptimizer;
pub use sgd::SgdOptimizer;

use crate::error::ScalarGradError;

/// Denominator guard shared by the adaptive optimizers.
pub(crate) const EPSILON: f64 = 1e-8;

pub(crate) fn validate_lr(lr: f64) -> Result<(), ScalarGradError> {
    if lr <= 0.0 {
        return Err(ScalarGradError::ConfigurationError(
            "Learning rate must be positive".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_decay(name: &str, value: f64) -> Result<(), ScalarGradError> {
    if !(0.0..1.0).contains(&value) {
        return Err(ScalarGradError::ConfigurationError(format!(
            "{} must be in [0, 1)",
            name
        )));
    }
    Ok(())
}
