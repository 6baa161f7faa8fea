// scalargrad-core/src/gates/add.rs

//! Local rules for the Add gate: `u = x + y`.

pub(crate) fn forward(x: f64, y: f64) -> f64 {
    x + y
}

/// Both partials are 1, so each input receives the output gradient unchanged.
pub(crate) fn backward(upstream: f64) -> (f64, f64) {
    (upstream, upstream)
}
