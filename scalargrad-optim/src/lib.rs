use scalargrad_core::{Circuit, NodeId};

// Define modules for optimizers
pub mod sgd;

pub use sgd::Sgd;

/// Trait for optimization algorithms.
/// Optimizers update trainable leaf nodes of a circuit based on the
/// gradients the last backward pass accumulated.
pub trait Optimizer {
    /// Performs a single optimization step (parameter update).
    ///
    /// # Arguments
    /// * `circuit` - The circuit holding the parameters.
    /// * `params` - The handles of the leaf nodes to update. Handles of
    ///   non-leaf nodes are legal but get overwritten by the next forward
    ///   pass.
    ///
    /// # Panics
    /// Panics if a handle in `params` was not issued by `circuit`.
    fn step(&mut self, circuit: &mut Circuit, params: &[NodeId]);

    /// Clears every gradient in the circuit, parameters and intermediates
    /// alike. Must run once per iteration so the next backward pass starts
    /// from zero accumulators.
    fn zero_grad(&self, circuit: &mut Circuit);
}
