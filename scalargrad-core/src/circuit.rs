//! The circuit: an arena of [`ValueNode`]s plus the gates wired between them,
//! with forward and backward passes driven by the declared wiring order.

use crate::error::ScalarGradError;
use crate::gates::{Gate, GateKind};
use crate::node::{NodeId, ValueNode};
use log::debug;

/// A computation circuit over scalar nodes.
///
/// Nodes live in an arena owned by the circuit and are addressed through
/// [`NodeId`] handles; gates hold handles, never nodes. Wiring a gate
/// allocates its output node, and since every input handle must already exist
/// at wiring time, the wiring order is itself a valid topological order:
/// [`forward`](Circuit::forward) evaluates gates in that order and
/// [`backward`](Circuit::backward) replays the exact reverse. There is no
/// other scheduling.
///
/// # Iteration protocol
///
/// One training iteration is:
///
/// 1. overwrite sample inputs with [`set_value`](Circuit::set_value)
///    (and labels with [`set_label`](Circuit::set_label)),
/// 2. [`forward`](Circuit::forward),
/// 3. [`backward`](Circuit::backward) from the objective node,
/// 4. apply parameter updates from the accumulated gradients,
/// 5. [`zero_gradients`](Circuit::zero_gradients).
///
/// The ordering of 2, 3 and 5 is enforced: backward fails fast with
/// [`ScalarGradError::BackwardBeforeForward`] when node values changed since
/// the last completed forward pass, and with
/// [`ScalarGradError::GradientsNotReset`] when a previous backward's
/// gradients were never cleared. Running on top of stale values or live
/// gradients would silently corrupt the `+=` accumulation, so both are
/// errors rather than warnings.
#[derive(Debug, Default)]
pub struct Circuit {
    nodes: Vec<ValueNode>,
    gates: Vec<Gate>,
    /// Node values are consistent with a completed forward pass.
    forward_valid: bool,
    /// A backward pass accumulated gradients that were not cleared yet.
    gradients_live: bool,
}

impl Circuit {
    pub fn new() -> Self {
        Circuit::default()
    }

    // --- Nodes ---

    /// Allocates a leaf node (parameter or sample input) with gradient zero
    /// and returns its handle.
    pub fn leaf(&mut self, value: f64) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(ValueNode::new(value, 0.0));
        id
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Read access to a node, mostly for diagnostic printing.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this circuit.
    pub fn node(&self, id: NodeId) -> &ValueNode {
        &self.nodes[id]
    }

    /// Current value of a node.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this circuit.
    pub fn value(&self, id: NodeId) -> f64 {
        self.nodes[id].value
    }

    /// Gradient accumulated for a node by the last backward pass.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this circuit.
    pub fn gradient(&self, id: NodeId) -> f64 {
        self.nodes[id].gradient
    }

    /// Overwrites a node's value (sample inputs, parameter updates).
    ///
    /// Invalidates the last forward pass: downstream gate outputs are stale
    /// until [`forward`](Circuit::forward) runs again.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this circuit.
    pub fn set_value(&mut self, id: NodeId, value: f64) {
        self.nodes[id].value = value;
        self.forward_valid = false;
    }

    /// Overwrites a node's gradient.
    ///
    /// [`backward`](Circuit::backward) seeds its own starting node; this is
    /// for hand-seeding extra nodes when the circuit's outputs feed an
    /// enclosing computation that supplies upstream gradients.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this circuit.
    pub fn set_gradient(&mut self, id: NodeId, gradient: f64) {
        self.nodes[id].gradient = gradient;
    }

    // --- Wiring ---

    fn check_node(&self, id: NodeId, operation: &str) -> Result<(), ScalarGradError> {
        if id < self.nodes.len() {
            Ok(())
        } else {
            Err(ScalarGradError::InvalidNode {
                id,
                len: self.nodes.len(),
                operation: operation.to_string(),
            })
        }
    }

    /// Appends a gate, allocating its output node. Inputs were validated by
    /// the caller, so output > inputs holds and wiring order stays
    /// topological.
    fn wire(&mut self, name: &str, kind: GateKind) -> NodeId {
        let output = self.nodes.len();
        self.nodes.push(ValueNode::new(0.0, 0.0));
        self.gates.push(Gate {
            name: name.to_string(),
            kind,
            output,
        });
        self.forward_valid = false;
        output
    }

    /// Wires `u = lhs + rhs`; returns the handle of the new output node.
    pub fn add(&mut self, name: &str, lhs: NodeId, rhs: NodeId) -> Result<NodeId, ScalarGradError> {
        self.check_node(lhs, "add")?;
        self.check_node(rhs, "add")?;
        Ok(self.wire(name, GateKind::Add { lhs, rhs }))
    }

    /// Wires `u = lhs * rhs`; returns the handle of the new output node.
    ///
    /// `lhs` and `rhs` may alias the same node; the aliased input then
    /// accumulates both backward contributions, which sums to the square
    /// rule `2x`.
    pub fn multiply(
        &mut self,
        name: &str,
        lhs: NodeId,
        rhs: NodeId,
    ) -> Result<NodeId, ScalarGradError> {
        self.check_node(lhs, "multiply")?;
        self.check_node(rhs, "multiply")?;
        Ok(self.wire(name, GateKind::Multiply { lhs, rhs }))
    }

    /// Wires `u = constant * input`. The constant is a gate parameter and
    /// receives no gradient.
    pub fn multiply_constant(
        &mut self,
        name: &str,
        input: NodeId,
        constant: f64,
    ) -> Result<NodeId, ScalarGradError> {
        self.check_node(input, "multiply_constant")?;
        Ok(self.wire(name, GateKind::MultiplyConstant { input, constant }))
    }

    /// Wires `u = scale * input^exponent`. Exponent and scale are gate
    /// parameters and receive no gradient.
    ///
    /// A negative input value combined with a non-integer exponent is
    /// reported by [`forward`](Circuit::forward), not here: values may
    /// legally change sign between passes.
    pub fn power(
        &mut self,
        name: &str,
        input: NodeId,
        exponent: f64,
        scale: f64,
    ) -> Result<NodeId, ScalarGradError> {
        self.check_node(input, "power")?;
        Ok(self.wire(
            name,
            GateKind::Power {
                input,
                exponent,
                scale,
            },
        ))
    }

    /// Wires `u = 1 / (1 + e^(-input))`.
    pub fn sigmoid(&mut self, name: &str, input: NodeId) -> Result<NodeId, ScalarGradError> {
        self.check_node(input, "sigmoid")?;
        Ok(self.wire(name, GateKind::Sigmoid { input }))
    }

    /// Wires the binary cross-entropy gate over a probability-like input and
    /// a label of 0.0 or 1.0. The label is a gate parameter; rebind it per
    /// sample with [`set_label`](Circuit::set_label).
    ///
    /// Note the gate's documented sign split: its forward value is the
    /// negated log-likelihood (a loss), while its backward pass follows the
    /// positive log-likelihood. A positive update step moves predictions
    /// toward the label.
    pub fn cross_entropy(
        &mut self,
        name: &str,
        input: NodeId,
        label: f64,
    ) -> Result<NodeId, ScalarGradError> {
        self.check_node(input, "cross_entropy")?;
        Ok(self.wire(name, GateKind::CrossEntropy { input, label }))
    }

    /// Rebinds the label of the CrossEntropy gate producing `output`.
    ///
    /// # Errors
    /// [`ScalarGradError::NotACrossEntropyGate`] if no CrossEntropy gate
    /// writes `output`, [`ScalarGradError::InvalidNode`] if the handle is
    /// unknown.
    pub fn set_label(&mut self, output: NodeId, label: f64) -> Result<(), ScalarGradError> {
        self.check_node(output, "set_label")?;
        // Every non-leaf node has exactly one producing gate.
        match self.gates.iter_mut().find(|gate| gate.output == output) {
            Some(Gate {
                kind: GateKind::CrossEntropy { label: slot, .. },
                ..
            }) => {
                *slot = label;
                self.forward_valid = false;
                Ok(())
            }
            _ => Err(ScalarGradError::NotACrossEntropyGate { id: output }),
        }
    }

    // --- Passes ---

    /// Evaluates every gate in wiring order, storing each output value in the
    /// gate's output node.
    ///
    /// # Errors
    /// Propagates the first gate failure (currently only
    /// [`ScalarGradError::PowerDomain`]). The pass stops there and node
    /// values stay marked stale, so a subsequent backward is rejected.
    pub fn forward(&mut self) -> Result<(), ScalarGradError> {
        self.forward_valid = false;
        for gate in &self.gates {
            let value = gate.kind.forward(&self.nodes)?;
            self.nodes[gate.output].value = value;
        }
        self.forward_valid = true;
        debug!("Circuit: forward pass over {} gates done", self.gates.len());
        Ok(())
    }

    /// Seeds `output`'s gradient and replays every gate in exact reverse
    /// wiring order, accumulating chain-rule contributions into the input
    /// gradients.
    ///
    /// The seed is the upstream gradient of `output` itself: `None` means
    /// 1.0, the usual choice when `output` is the objective. Gates whose
    /// output carries a zero gradient are skipped; they are not on a path
    /// from any seeded node, so they have nothing to contribute.
    ///
    /// # Errors
    /// - [`ScalarGradError::BackwardBeforeForward`] when node values changed
    ///   since the last completed forward pass (or none ever ran).
    /// - [`ScalarGradError::GradientsNotReset`] when gradients from an
    ///   earlier backward pass were never zeroed.
    /// - [`ScalarGradError::InvalidNode`] when `output` is unknown.
    pub fn backward(&mut self, output: NodeId, seed: Option<f64>) -> Result<(), ScalarGradError> {
        self.check_node(output, "backward")?;
        if !self.forward_valid {
            return Err(ScalarGradError::BackwardBeforeForward);
        }
        if self.gradients_live {
            return Err(ScalarGradError::GradientsNotReset);
        }

        let seed = seed.unwrap_or(1.0);
        self.nodes[output].gradient = seed;
        for gate in self.gates.iter().rev() {
            let upstream = self.nodes[gate.output].gradient;
            if upstream == 0.0 {
                continue;
            }
            gate.kind.backward(&mut self.nodes, upstream);
        }
        self.gradients_live = true;
        debug!(
            "Circuit: backward pass from node {} (seed {}) done",
            output, seed
        );
        Ok(())
    }

    /// Resets every node's gradient, leaves and intermediates alike, to zero
    /// so the next backward pass starts from clean accumulators.
    pub fn zero_gradients(&mut self) {
        for node in self.nodes.iter_mut() {
            node.gradient = 0.0;
        }
        self.gradients_live = false;
        debug!("Circuit: gradients zeroed for {} nodes", self.nodes.len());
    }

    // --- Diagnostics ---

    /// Diagnostic name of the gate producing `output`, or `None` for leaves.
    pub fn gate_name(&self, output: NodeId) -> Option<&str> {
        self.gates
            .iter()
            .find(|gate| gate.output == output)
            .map(|gate| gate.name.as_str())
    }

    /// The wired gates in declared (topological) order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }
}
