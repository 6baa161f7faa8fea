// scalargrad-core/src/gates/cross_entropy.rs

//! Local rules for the CrossEntropy gate over a probability-like input
//! `x` and a binary label `y`:
//!
//! `u = -(y*ln(x + eps) + (1 - y)*ln(1 - x + eps))`
//!
//! The label is a gate parameter, not a node; it receives no gradient and is
//! rebound per sample through `Circuit::set_label`.

/// Offset keeping logs and divisions away from the singularities at inputs of
/// exactly 0 or 1. A stability patch only; inputs outside `[0, 1]` are not
/// validated.
pub const EPSILON: f64 = 1e-8;

/// Negated log-likelihood of the label under prediction `x`: lower is better.
pub(crate) fn forward(x: f64, label: f64) -> f64 {
    -(label * (x + EPSILON).ln() + (1.0 - label) * (1.0 - x + EPSILON).ln())
}

/// Gradient of the *positive* log-likelihood `y*ln(x) + (1-y)*ln(1-x)`, not
/// of the negated value `forward` returns.
///
/// The two passes disagree in sign on purpose: this is long-standing,
/// observable behavior, and training loops built on this gate already choose
/// the sign of their update step around it. A positive step moves predictions
/// toward the label; anything downstream that assumes gradient-of-forward
/// must negate.
pub(crate) fn backward(x: f64, label: f64, upstream: f64) -> f64 {
    (label / (x + EPSILON) - (1.0 - label) / (1.0 - x + EPSILON)) * upstream
}

// --- Tests ---
#[cfg(test)]
#[path = "cross_entropy_test.rs"]
mod tests; // Link to the test file
