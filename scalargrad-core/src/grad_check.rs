use crate::circuit::Circuit;
use crate::error::ScalarGradError;
use crate::node::NodeId;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error(
        "Gradient mismatch for leaf {node}: analytical {analytical} vs numerical {numerical} \
         (difference {difference}, tolerance {tolerance})"
    )]
    GradientMismatch {
        node: NodeId,
        analytical: f64,
        numerical: f64,
        difference: f64,
        tolerance: f64,
    },

    #[error("Forward pass failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),

    #[error("Backward pass failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),

    #[error("Analytical gradient for leaf {node} is not finite: {value}")]
    AnalyticalGradNotFinite { node: NodeId, value: f64 },

    #[error(
        "Numerical gradient for leaf {node} is not finite (f(x+h) = {value_plus}, f(x-h) = {value_minus})"
    )]
    NumericalGradNotFinite {
        node: NodeId,
        value_plus: f64,
        value_minus: f64,
    },
}

/// Validates the analytical gradients of `output` with respect to each leaf
/// in `leaves` against central finite differences.
///
/// The circuit's gradients are reset, one forward/backward cycle collects the
/// analytical gradients, then forward runs twice per leaf with the leaf's
/// value displaced by `+epsilon` and `-epsilon` to measure the slope
/// `(f(x+h) - f(x-h)) / 2h`. A gradient passes when either the absolute or
/// the relative difference is within `tolerance`. On return the circuit holds
/// the unperturbed values again, with the analytical gradients still in
/// place.
///
/// Only meaningful when backward follows the same objective forward computes.
/// The CrossEntropy gate deliberately does not (its backward tracks the
/// positive log-likelihood while forward reports the negated loss), so any
/// circuit routing gradients through one fails here with a sign-flipped
/// mismatch.
pub fn check_gradients(
    circuit: &mut Circuit,
    output: NodeId,
    leaves: &[NodeId],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError> {
    circuit.zero_gradients();
    circuit.forward().map_err(GradCheckError::ForwardPassError)?;
    circuit
        .backward(output, None)
        .map_err(GradCheckError::BackwardPassError)?;

    let analytical: Vec<f64> = leaves.iter().map(|&leaf| circuit.gradient(leaf)).collect();

    for (&leaf, &analytical_grad) in leaves.iter().zip(analytical.iter()) {
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNotFinite {
                node: leaf,
                value: analytical_grad,
            });
        }

        let original = circuit.value(leaf);

        circuit.set_value(leaf, original + epsilon);
        circuit.forward().map_err(GradCheckError::ForwardPassError)?;
        let value_plus = circuit.value(output);

        circuit.set_value(leaf, original - epsilon);
        circuit.forward().map_err(GradCheckError::ForwardPassError)?;
        let value_minus = circuit.value(output);

        circuit.set_value(leaf, original);

        let numerical_grad = (value_plus - value_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNotFinite {
                node: leaf,
                value_plus,
                value_minus,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        let relative = difference / (analytical_grad.abs() + epsilon);
        if difference > tolerance && relative > tolerance {
            return Err(GradCheckError::GradientMismatch {
                node: leaf,
                analytical: analytical_grad,
                numerical: numerical_grad,
                difference,
                tolerance,
            });
        }
    }

    // Restore unperturbed forward values for the caller.
    circuit.forward().map_err(GradCheckError::ForwardPassError)
}
