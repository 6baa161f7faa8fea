// scalargrad-core/src/gates/multiply.rs

//! Local rules for the Multiply gate: `u = x * y`.

pub(crate) fn forward(x: f64, y: f64) -> f64 {
    x * y
}

/// Each input's partial is the *other* input's value.
pub(crate) fn backward(x: f64, y: f64, upstream: f64) -> (f64, f64) {
    (y * upstream, x * upstream)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiply_forward() {
        assert_eq!(forward(2.0, 3.0), 6.0);
        assert_eq!(forward(-4.0, 0.5), -2.0);
    }

    #[test]
    fn test_multiply_backward_swaps_values() {
        let (d_x, d_y) = backward(2.0, 3.0, 1.0);
        assert_eq!(d_x, 3.0);
        assert_eq!(d_y, 2.0);
    }

    #[test]
    fn test_multiply_backward_scales_by_upstream() {
        let (d_x, d_y) = backward(2.0, 3.0, -2.0);
        assert_eq!(d_x, -6.0);
        assert_eq!(d_y, -4.0);
    }
}
