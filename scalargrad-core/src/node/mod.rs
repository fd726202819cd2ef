// src/node/mod.rs

use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::autograd::{self, Op};
use crate::error::ScalarGradError;


/// Inner state of a [`Node`]. Every field is initialized eagerly at
/// construction; in particular `grad` starts at `0.0` and only ever
/// accumulates until explicitly reset.
pub(crate) struct NodeData {
    pub(crate) data: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) operands: Vec<Node>,
}

/// A scalar differentiable value: one entry of the computation graph.
///
/// `Node` uses `Rc<RefCell<NodeData>>` internally to allow for:
/// 1.  **Shared ownership:** many downstream nodes can reference the same
///     operand without copying it (cheap clones). An operand stays alive
///     until the last downstream node that references it is dropped.
/// 2.  **Interior mutability:** `grad` (and, for leaf parameters, `data`)
///     can be updated through a shared handle during the backward pass and
///     optimizer steps.
///
/// Equality and hashing are identity-based: two nodes with equal `data` are
/// distinct graph entries, and a node only ever equals a clone of itself.
pub struct Node {
    pub(crate) data: Rc<RefCell<NodeData>>,
}

impl Node {
    /// Creates a leaf node holding `data`, with no recorded operation.
    pub fn new(data: f64) -> Self {
        Node::from_op(data, Op::Leaf, Vec::new())
    }

    /// Creates a node recording the operation that produced it. The forward
    /// value is computed by the caller (the graph-building operators) and is
    /// immutable afterwards, except for leaf parameters mutated by an
    /// optimizer.
    pub(crate) fn from_op(data: f64, op: Op, operands: Vec<Node>) -> Self {
        Node {
            data: Rc::new(RefCell::new(NodeData {
                data,
                grad: 0.0,
                op,
                operands,
            })),
        }
    }

    /// The forward value.
    pub fn data(&self) -> f64 {
        self.data.borrow().data
    }

    /// Overwrites the forward value. Only meaningful on leaf parameters;
    /// intermediate nodes keep the value computed at construction.
    pub fn set_data(&self, value: f64) {
        self.data.borrow_mut().data = value;
    }

    /// The accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.data.borrow().grad
    }

    /// Overwrites the accumulated gradient (used to seed a backward pass).
    pub fn set_grad(&self, value: f64) {
        self.data.borrow_mut().grad = value;
    }

    /// Resets the accumulated gradient to zero.
    pub fn zero_grad(&self) {
        self.data.borrow_mut().grad = 0.0;
    }

    /// The recorded operation tag.
    pub fn op(&self) -> Op {
        self.data.borrow().op
    }

    /// The ordered operand handles. A node may appear more than once (e.g.
    /// squaring via `x * x`).
    pub fn operands(&self) -> Vec<Node> {
        self.data.borrow().operands.clone()
    }

    /// True for nodes created directly from a number rather than an
    /// operation (parameters and inputs).
    pub fn is_leaf(&self) -> bool {
        self.data.borrow().operands.is_empty()
    }

    pub(crate) fn accumulate_grad(&self, contribution: f64) {
        self.data.borrow_mut().grad += contribution;
    }

    /// Stable identity of the underlying graph entry.
    pub(crate) fn as_ptr(&self) -> *const RefCell<NodeData> {
        Rc::as_ptr(&self.data)
    }

    /// Runs a backward pass with this node as the sink.
    ///
    /// Seeds `self.grad = 1`, orders the ancestor set reverse-topologically
    /// (consumers before operands) and executes each node's gradient
    /// distribution exactly once:
    /// `operand.grad += node.grad * local_derivative(node, operand)`.
    ///
    /// Gradients accumulate across calls; callers reset them with
    /// [`Node::zero_grad`] between training steps.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        self.set_grad(1.0);
        let order = autograd::reverse_topological(self);
        log::trace!("backward pass over {} graph nodes", order.len());
        for node in &order {
            let operands = node.operands();
            if operands.is_empty() {
                continue;
            }
            let upstream = node.grad();
            for (index, operand) in operands.iter().enumerate() {
                let local = autograd::local_derivative(node, index)?;
                operand.accumulate_grad(upstream * local);
            }
        }
        Ok(())
    }
}

impl Drop for NodeData {
    /// Dismantles the operand chain iteratively so that freeing a deep
    /// graph does not recurse (and overflow the stack) through nested
    /// `Rc` operands. Mirrors the explicit-worklist traversal used for the
    /// backward pass. Only entries we uniquely own are unlinked here;
    /// operands still shared with live handles are left for their last
    /// owner to reclaim.
    fn drop(&mut self) {
        let mut stack: Vec<Node> = std::mem::take(&mut self.operands);
        while let Some(node) = stack.pop() {
            if let Ok(cell) = Rc::try_unwrap(node.data) {
                let mut inner = cell.into_inner();
                stack.append(&mut inner.operands);
            }
        }
    }
}

impl Clone for Node {
    /// Cloning a node clones the shared handle, not the graph entry: the
    /// clone aliases the same `data`/`grad`.
    fn clone(&self) -> Self {
        Node {
            data: Rc::clone(&self.data),
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.data).hash(state);
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.data.borrow();
        f.debug_struct("Node")
            .field("data", &inner.data)
            .field("grad", &inner.grad)
            .field("op", &inner.op)
            .finish()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.data.borrow();
        write!(f, "{{{:.2}, {:.2}}}", inner.data, inner.grad)
    }
}
