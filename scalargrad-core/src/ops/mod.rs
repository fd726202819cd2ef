//! Graph-building operators: each computes its forward value eagerly and
//! records the producing operation and operand links on the result node.

pub mod arithmetic;
pub mod clamp;
pub mod math_elem;

pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use clamp::{max_op, min_op};
pub use math_elem::{exp_op, ln_op};
