// scalargrad-core/src/gates/sigmoid.rs

//! Local rules for the Sigmoid gate: `u = 1 / (1 + e^(-x))`.

pub(crate) fn forward(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// `ds/dx = s * (1 - s)`, with `s` recomputed from the cached input value.
///
/// Valid only while the input value is the one the preceding forward pass
/// saw; the circuit guarantees that ordering.
pub(crate) fn backward(x: f64, upstream: f64) -> f64 {
    let s = forward(x);
    s * (1.0 - s) * upstream
}
