use std::collections::HashSet;

use crate::node::Node;

/// Reverse-topological order over the ancestor set of `sink` (the sink
/// included): every consumer appears before any of its operands, so a
/// node's gradient is final by the time its distribution step runs.
///
/// Two-phase depth-first post-order with an explicit worklist; the visited
/// set keys on graph identity, so shared subexpressions are ordered exactly
/// once. Recursion is avoided deliberately; a deep chain of operations
/// would otherwise overflow the call stack.
pub(crate) fn reverse_topological(sink: &Node) -> Vec<Node> {
    let mut visited = HashSet::new();
    let mut post_order = Vec::new();
    let mut worklist = vec![(sink.clone(), false)];

    while let Some((node, operands_done)) = worklist.pop() {
        if operands_done {
            post_order.push(node);
            continue;
        }
        if !visited.insert(node.as_ptr()) {
            continue;
        }
        worklist.push((node.clone(), true));
        for operand in node.operands() {
            worklist.push((operand, false));
        }
    }

    post_order.reverse();
    post_order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(order: &[Node], node: &Node) -> usize {
        order
            .iter()
            .position(|candidate| candidate == node)
            .expect("node missing from order")
    }

    #[test]
    fn consumers_precede_operands() {
        let x = Node::new(2.0);
        let left = &x + 1.0;
        let right = &x * 3.0;
        let top = &left * &right;

        let order = reverse_topological(&top);

        assert_eq!(order.len(), 6); // top, left, right, x, and the two promoted constants
        assert!(position(&order, &top) < position(&order, &left));
        assert!(position(&order, &top) < position(&order, &right));
        assert!(position(&order, &left) < position(&order, &x));
        assert!(position(&order, &right) < position(&order, &x));
    }

    #[test]
    fn shared_subexpression_is_ordered_once() {
        let x = Node::new(4.0);
        let square = &x * &x;
        let order = reverse_topological(&square);
        assert_eq!(order.len(), 2);
        assert_eq!(
            order.iter().filter(|candidate| *candidate == &x).count(),
            1
        );
    }

    #[test]
    fn only_ancestors_of_the_sink_are_ordered() {
        let x = Node::new(1.0);
        let used = &x + 2.0;
        let _unused = &x * 5.0;
        let order = reverse_topological(&used);
        assert_eq!(order.len(), 3); // used, x, and the promoted constant
    }
}
