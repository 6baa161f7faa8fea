use crate::circuit::Circuit;
use crate::node::NodeId;

/// Checks that a node's value and gradient are both within `tolerance` of the
/// expected pair. Panics with the offending quantity on mismatch.
pub fn check_node_near(
    circuit: &Circuit,
    id: NodeId,
    expected_value: f64,
    expected_gradient: f64,
    tolerance: f64,
) {
    let actual_value = circuit.value(id);
    let value_diff = (actual_value - expected_value).abs();
    if value_diff > tolerance {
        panic!(
            "Value mismatch for node {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            id, actual_value, expected_value, value_diff, tolerance
        );
    }

    let actual_gradient = circuit.gradient(id);
    let gradient_diff = (actual_gradient - expected_gradient).abs();
    if gradient_diff > tolerance {
        panic!(
            "Gradient mismatch for node {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            id, actual_gradient, expected_gradient, gradient_diff, tolerance
        );
    }
}

/// Checks only a node's value against an expected scalar.
pub fn check_value_near(circuit: &Circuit, id: NodeId, expected: f64, tolerance: f64) {
    let actual = circuit.value(id);
    let diff = (actual - expected).abs();
    if diff > tolerance {
        panic!(
            "Value mismatch for node {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            id, actual, expected, diff, tolerance
        );
    }
}
