// scalargrad-core/src/gates/cross_entropy_test.rs

#[cfg(test)]
mod tests {
    use crate::gates::cross_entropy::{backward, forward, EPSILON};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_cross_entropy_forward_label_one() {
        // -ln(0.5) = ln 2
        assert_relative_eq!(forward(0.5, 1.0), std::f64::consts::LN_2, max_relative = 1e-7);
        // Confident correct prediction has near-zero loss.
        assert_abs_diff_eq!(forward(1.0, 1.0), 0.0, epsilon = 1e-7);
    }

    #[test]
    fn test_cross_entropy_forward_label_zero() {
        assert_relative_eq!(forward(0.5, 0.0), std::f64::consts::LN_2, max_relative = 1e-7);
        assert_abs_diff_eq!(forward(0.0, 0.0), 0.0, epsilon = 1e-7);
    }

    #[test]
    fn test_cross_entropy_epsilon_keeps_boundaries_finite() {
        // Without the offset these would be ln(0).
        let wrong_one = forward(0.0, 1.0);
        let wrong_zero = forward(1.0, 0.0);
        assert!(wrong_one.is_finite() && wrong_one > 18.0);
        assert!(wrong_zero.is_finite() && wrong_zero > 18.0);
        assert!(backward(0.0, 1.0, 1.0).is_finite());
        assert!(backward(1.0, 0.0, 1.0).is_finite());
    }

    #[test]
    fn test_cross_entropy_backward_points_toward_label() {
        // Label 1: gradient is positive, pushing the prediction up.
        assert!(backward(0.3, 1.0, 1.0) > 0.0);
        // Label 0: gradient is negative, pushing the prediction down.
        assert!(backward(0.7, 0.0, 1.0) < 0.0);
    }

    #[test]
    fn test_cross_entropy_backward_is_likelihood_gradient_not_loss_gradient() {
        // The analytical gradient tracks the positive log-likelihood while
        // forward returns the negated loss, so it is the exact *negative* of
        // the finite-difference slope of forward.
        let h = 1e-6;
        for (x, label) in [(0.7, 1.0), (0.2, 1.0), (0.3, 0.0), (0.9, 0.0)] {
            let numerical = (forward(x + h, label) - forward(x - h, label)) / (2.0 * h);
            let analytical = backward(x, label, 1.0);
            assert_relative_eq!(analytical, -numerical, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_cross_entropy_backward_values() {
        // Label 1 at x: y/(x+eps).
        assert_relative_eq!(backward(0.7, 1.0, 1.0), 1.0 / (0.7 + EPSILON), max_relative = 1e-12);
        // Label 0 at x: -(1-y)/(1-x+eps).
        assert_relative_eq!(backward(0.7, 0.0, 1.0), -1.0 / (0.3 + EPSILON), max_relative = 1e-12);
        // Upstream scales linearly.
        assert_relative_eq!(backward(0.7, 1.0, 2.0), 2.0 / (0.7 + EPSILON), max_relative = 1e-12);
    }
}
