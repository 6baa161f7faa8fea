//! The closed family of elementary gates a circuit is wired from.
//!
//! Each submodule holds one gate's local rules: a `forward` function turning
//! input value(s) into the output value, and a `backward` function turning the
//! output gradient into the contribution(s) for the input gradient(s).
//! [`GateKind`] ties the family together as a single tagged enum, so both
//! passes dispatch through one exhaustive `match` and adding a gate is a
//! compile-checked change.

pub mod add;
pub mod cross_entropy;
pub mod multiply;
pub mod multiply_constant;
pub mod power;
pub mod sigmoid;

use crate::error::ScalarGradError;
use crate::node::{NodeId, ValueNode};

/// One position in a circuit's wiring order: a gate variant together with its
/// diagnostic name and the handle of the node it writes.
#[derive(Debug, Clone, PartialEq)]
pub struct Gate {
    pub(crate) name: String,
    pub(crate) kind: GateKind,
    pub(crate) output: NodeId,
}

impl Gate {
    /// Diagnostic name given at wiring time (e.g. `"a*x + b*y"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &GateKind {
        &self.kind
    }

    /// Handle of the node this gate writes during the forward pass.
    pub fn output(&self) -> NodeId {
        self.output
    }
}

/// The gate variants and the node handles / scalar parameters each one
/// operates on.
///
/// Handles are indices into the owning circuit's node arena; gates never own
/// nodes. Scalar parameters (`constant`, `exponent`, `scale`, `label`) are not
/// nodes: they receive no gradient and are invisible to optimizers.
#[derive(Debug, Clone, PartialEq)]
pub enum GateKind {
    /// `u = lhs + rhs`
    Add { lhs: NodeId, rhs: NodeId },
    /// `u = lhs * rhs`
    Multiply { lhs: NodeId, rhs: NodeId },
    /// `u = constant * input`
    MultiplyConstant { input: NodeId, constant: f64 },
    /// `u = scale * input^exponent`
    Power {
        input: NodeId,
        exponent: f64,
        scale: f64,
    },
    /// `u = 1 / (1 + e^(-input))`
    Sigmoid { input: NodeId },
    /// `u = -(label*ln(input + eps) + (1 - label)*ln(1 - input + eps))`
    CrossEntropy { input: NodeId, label: f64 },
}

impl GateKind {
    /// Computes this gate's output value from the current input values.
    ///
    /// Reads `nodes` without touching it; the caller stores the returned value
    /// into the gate's output node.
    pub(crate) fn forward(&self, nodes: &[ValueNode]) -> Result<f64, ScalarGradError> {
        match *self {
            GateKind::Add { lhs, rhs } => Ok(add::forward(nodes[lhs].value, nodes[rhs].value)),
            GateKind::Multiply { lhs, rhs } => {
                Ok(multiply::forward(nodes[lhs].value, nodes[rhs].value))
            }
            GateKind::MultiplyConstant { input, constant } => {
                Ok(multiply_constant::forward(nodes[input].value, constant))
            }
            GateKind::Power {
                input,
                exponent,
                scale,
            } => power::forward(nodes[input].value, exponent, scale),
            GateKind::Sigmoid { input } => Ok(sigmoid::forward(nodes[input].value)),
            GateKind::CrossEntropy { input, label } => {
                Ok(cross_entropy::forward(nodes[input].value, label))
            }
        }
    }

    /// Adds each input's chain-rule contribution (local partial times
    /// `upstream`) into that input's gradient.
    ///
    /// Contributions are accumulated with `+=`, never assigned, so fan-out
    /// through several consumers sums correctly. This also makes aliased
    /// inputs work: `Multiply { lhs: x, rhs: x }` deposits both `x * upstream`
    /// contributions, yielding the expected `2x * upstream`.
    pub(crate) fn backward(&self, nodes: &mut [ValueNode], upstream: f64) {
        match *self {
            GateKind::Add { lhs, rhs } => {
                let (d_lhs, d_rhs) = add::backward(upstream);
                nodes[lhs].gradient += d_lhs;
                nodes[rhs].gradient += d_rhs;
            }
            GateKind::Multiply { lhs, rhs } => {
                let (d_lhs, d_rhs) =
                    multiply::backward(nodes[lhs].value, nodes[rhs].value, upstream);
                nodes[lhs].gradient += d_lhs;
                nodes[rhs].gradient += d_rhs;
            }
            GateKind::MultiplyConstant { input, constant } => {
                nodes[input].gradient += multiply_constant::backward(constant, upstream);
            }
            GateKind::Power {
                input,
                exponent,
                scale,
            } => {
                nodes[input].gradient +=
                    power::backward(nodes[input].value, exponent, scale, upstream);
            }
            GateKind::Sigmoid { input } => {
                nodes[input].gradient += sigmoid::backward(nodes[input].value, upstream);
            }
            GateKind::CrossEntropy { input, label } => {
                nodes[input].gradient +=
                    cross_entropy::backward(nodes[input].value, label, upstream);
            }
        }
    }
}
