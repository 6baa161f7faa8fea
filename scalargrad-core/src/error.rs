use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    /// A node handle does not belong to the circuit it was used with.
    #[error("Unknown node id {id} in operation '{operation}' (circuit holds {len} nodes)")]
    InvalidNode {
        id: usize,
        len: usize,
        operation: String,
    },

    /// Backward was requested while the stored node values are stale
    /// (no forward pass ran since the last wiring or value change).
    #[error(
        "Backward pass requested before a forward pass: gate outputs are stale, \
         run Circuit::forward first"
    )]
    BackwardBeforeForward,

    /// Backward was requested while gradients from a previous backward pass
    /// are still accumulated.
    #[error(
        "Gradients from a previous backward pass were not cleared: \
         call Circuit::zero_gradients before running backward again"
    )]
    GradientsNotReset,

    /// Raising a negative base to a non-integer exponent has no real result.
    #[error("Power of negative base {base} with non-integer exponent {exponent} is undefined over the reals")]
    PowerDomain { base: f64, exponent: f64 },

    /// A label was assigned to a node that no CrossEntropy gate produces.
    #[error("Node {id} is not the output of a CrossEntropy gate")]
    NotACrossEntropyGate { id: usize },

    /// Index used on a dataset was out of bounds.
    #[error("Index {index} out of bounds for dataset of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Reading or parsing sample data from a file failed.
    #[error("Failed to load pair data from '{path}': {message}")]
    DataLoad { path: String, message: String },
}
