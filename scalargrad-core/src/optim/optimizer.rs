use crate::error::ScalarGradError;
use crate::node::Node;

/// Trait defining the common interface for all optimizers.
///
/// An optimizer is constructed from the flattened leaf parameters of a
/// model (see `Module::parameters` and the containers' `nodes()`), plus a
/// learning rate. It owns no graph: each `step` consumes the gradients of a
/// freshly built loss.
pub trait Optimizer {
    /// The tracked parameters.
    fn params(&self) -> &[Node];

    /// Applies the update rule, consuming each parameter's freshly
    /// accumulated gradient and mutating its `data` in place.
    ///
    /// Called by [`Optimizer::step`] after the backward pass; callable
    /// directly when gradients were produced by other means.
    fn update(&mut self);

    /// Clears the gradients of all tracked parameters.
    fn zero_grad(&mut self) {
        for param in self.params() {
            param.zero_grad();
        }
    }

    /// Performs a single optimization step: zeroes every tracked
    /// parameter's gradient, seeds and runs the backward pass from `loss`,
    /// then applies the update rule.
    fn step(&mut self, loss: &Node) -> Result<(), ScalarGradError> {
        self.zero_grad();
        loss.backward()?;
        self.update();
        Ok(())
    }
}
