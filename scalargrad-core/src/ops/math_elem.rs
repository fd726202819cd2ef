// src/ops/math_elem.rs

use crate::autograd::{Op, LN_EPSILON};
use crate::node::Node;

/// `e^a`.
pub fn exp_op(a: &Node) -> Node {
    Node::from_op(a.data().exp(), Op::Exp, vec![a.clone()])
}

/// `ln(a + ε)`. The shift keeps a zero input finite; the derivative rule
/// applies the same shift.
pub fn ln_op(a: &Node) -> Node {
    Node::from_op((a.data() + LN_EPSILON).ln(), Op::Ln, vec![a.clone()])
}

impl Node {
    /// Exponential. See [`exp_op`].
    pub fn exp(&self) -> Node {
        exp_op(self)
    }

    /// Guarded natural logarithm. See [`ln_op`].
    pub fn ln(&self) -> Node {
        ln_op(self)
    }
}
