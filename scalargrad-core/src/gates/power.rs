// scalargrad-core/src/gates/power.rs

//! Local rules for the Power gate: `u = k * x^p`.
//!
//! `k` (scale) and `p` (exponent) are gate parameters, not nodes; only the
//! base receives a gradient.

use crate::error::ScalarGradError;

/// Computes `k * x^p`.
///
/// A negative base is only meaningful over the reals when the exponent is an
/// integer; any other combination is reported instead of silently producing
/// NaN downstream.
pub(crate) fn forward(x: f64, exponent: f64, scale: f64) -> Result<f64, ScalarGradError> {
    if x < 0.0 && exponent.fract() != 0.0 {
        return Err(ScalarGradError::PowerDomain { base: x, exponent });
    }
    Ok(scale * x.powf(exponent))
}

/// `d(k * x^p)/dx = k * p * x^(p-1)`, scaled by the output gradient.
///
/// Infallible: forward already rejected the negative-base/non-integer cases,
/// and `p - 1` stays an integer whenever `p` is one.
pub(crate) fn backward(x: f64, exponent: f64, scale: f64, upstream: f64) -> f64 {
    scale * exponent * x.powf(exponent - 1.0) * upstream
}

// --- Tests ---
#[cfg(test)]
#[path = "power_test.rs"]
mod tests; // Link to the test file
