// scalargrad-optim/src/sgd.rs

use crate::Optimizer;
use scalargrad_core::{Circuit, NodeId};

/// Implements stochastic gradient stepping over circuit leaves.
///
/// Updates parameters `p` according to the rule:
/// `p = p + step_size * grad(p)`
///
/// The sign of `step_size` picks the direction. A squared-error loss
/// descends with a negative step. The CrossEntropy gate accumulates
/// positive log-likelihood gradients, so circuits trained through it
/// ascend with a positive step.
#[derive(Debug, Clone, Copy)]
pub struct Sgd {
    step_size: f64,
}

impl Sgd {
    /// Creates a new `Sgd` optimizer instance.
    ///
    /// # Arguments
    ///
    /// * `step_size` - Signed step applied along each gradient.
    pub fn new(step_size: f64) -> Self {
        Sgd { step_size }
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }
}

impl Optimizer for Sgd {
    /// Performs a single optimization step (parameter update).
    fn step(&mut self, circuit: &mut Circuit, params: &[NodeId]) {
        log::debug!(
            "Sgd: step() over {} params with step_size {}",
            params.len(),
            self.step_size
        );
        for &param in params {
            let update = circuit.value(param) + self.step_size * circuit.gradient(param);
            circuit.set_value(param, update);
        }
    }

    /// Clears the gradients of every node in the circuit.
    fn zero_grad(&self, circuit: &mut Circuit) {
        circuit.zero_gradients();
    }
}
