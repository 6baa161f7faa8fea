use std::fmt;

/// Non-owning handle to a [`ValueNode`] inside a circuit's node arena.
///
/// A handle is a plain index: it is only meaningful for the circuit that
/// issued it, and it stays valid for that circuit's whole lifetime because
/// nodes are never removed.
pub type NodeId = usize;

/// A scalar node of the computation circuit: the value produced (or set)
/// by the forward pass, and the gradient accumulated by the backward pass.
///
/// `gradient` is the derivative of the seeded output with respect to this
/// node's value, accumulated *so far*. It starts at zero, every backward
/// contribution is added with `+=` (a node feeding several gates receives one
/// contribution per consumer, and they must sum), and it has to be reset to
/// zero before the node takes part in another backward pass.
///
/// Neither field is validated: non-finite floats are stored as provided and
/// numerical sanity is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValueNode {
    pub value: f64,
    pub gradient: f64,
}

impl ValueNode {
    pub fn new(value: f64, gradient: f64) -> Self {
        ValueNode { value, gradient }
    }
}

impl fmt::Display for ValueNode {
    /// Diagnostic form used when printing training progress:
    /// `V: <value> - G: <gradient>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V: {} - G: {}", self.value, self.gradient)
    }
}
