// scalargrad-core/src/gates/multiply_constant.rs

//! Local rules for the MultiplyConstant gate: `u = k * x`.
//!
//! The constant is a gate parameter, not a node: it receives no gradient.

pub(crate) fn forward(x: f64, constant: f64) -> f64 {
    constant * x
}

pub(crate) fn backward(constant: f64, upstream: f64) -> f64 {
    constant * upstream
}
