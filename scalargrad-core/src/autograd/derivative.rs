use crate::error::ScalarGradError;
use crate::node::Node;

use super::Op;

/// Shift applied to the argument of `ln`, in the forward value and in the
/// derivative alike, so a zero input stays finite.
pub const LN_EPSILON: f64 = 1e-10;

/// Local partial derivative of `out` with respect to its operand at
/// `wrt_index`.
///
/// Pure: reads the recorded operation and the operands' forward data, never
/// touches a gradient. A node with no derivative rule (a leaf) fails with
/// [`ScalarGradError::UnsupportedOperation`] instead of silently yielding
/// zero; an operand index outside the recorded list fails with
/// [`ScalarGradError::IndexOutOfBounds`].
pub fn local_derivative(out: &Node, wrt_index: usize) -> Result<f64, ScalarGradError> {
    let op = out.op();
    if matches!(op, Op::Leaf) {
        return Err(ScalarGradError::UnsupportedOperation(
            "derivative requested for a leaf node, which records no operation".to_string(),
        ));
    }

    let operands = out.operands();
    let operand = operands
        .get(wrt_index)
        .ok_or(ScalarGradError::IndexOutOfBounds {
            index: wrt_index,
            len: operands.len(),
        })?;
    let x = operand.data();

    Ok(match op {
        Op::Add => 1.0,
        // The partial with respect to one factor is the other factor. When
        // the same node fills both slots, distribution visits each slot and
        // the contributions sum to 2x.
        Op::Mul => operands[1 - wrt_index].data(),
        Op::Neg => -1.0,
        Op::Pow(exponent) => exponent * x.powf(exponent - 1.0),
        Op::Exp => x.exp(),
        Op::Ln => 1.0 / (x + LN_EPSILON),
        Op::Max(threshold) => {
            if x >= threshold {
                1.0
            } else {
                0.0
            }
        }
        Op::Min(threshold) => {
            if x <= threshold {
                1.0
            } else {
                0.0
            }
        }
        Op::Leaf => unreachable!("leaf handled above"),
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn leaf_has_no_derivative_rule() {
        let leaf = Node::new(1.5);
        let result = local_derivative(&leaf, 0);
        assert!(matches!(
            result,
            Err(ScalarGradError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn operand_index_is_bounds_checked() {
        let a = Node::new(1.0);
        let b = Node::new(2.0);
        let sum = &a + &b;
        let result = local_derivative(&sum, 2);
        assert_eq!(
            result,
            Err(ScalarGradError::IndexOutOfBounds { index: 2, len: 2 })
        );
    }

    #[test]
    fn mul_returns_the_other_operand() {
        let a = Node::new(2.0);
        let b = Node::new(7.0);
        let product = &a * &b;
        assert_relative_eq!(local_derivative(&product, 0).unwrap(), 7.0);
        assert_relative_eq!(local_derivative(&product, 1).unwrap(), 2.0);
    }

    #[test]
    fn ln_derivative_is_guarded_at_zero() {
        let x = Node::new(0.0);
        let y = x.ln();
        assert_relative_eq!(local_derivative(&y, 0).unwrap(), 1.0 / LN_EPSILON);
    }

    #[test]
    fn clamp_derivatives_pass_through_at_the_boundary() {
        let x = Node::new(3.0);
        let clamped_below = x.max(3.0);
        let clamped_above = x.min(3.0);
        assert_relative_eq!(local_derivative(&clamped_below, 0).unwrap(), 1.0);
        assert_relative_eq!(local_derivative(&clamped_above, 0).unwrap(), 1.0);
    }
}
