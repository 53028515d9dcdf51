use nalgebra as na;

/// Cartesian vector used for every position, velocity and force (SI units).
pub type Vector3 = na::Vector3<f64>;

/// Builds `a1 * u1 + a2 * u2`.
///
/// Each component is evaluated as a single fused multiply-add so the sum is
/// rounded once, which matters when the two terms nearly cancel (e.g. the
/// perifocal projection of a state vector close to an axis).
pub fn linear_combination(a1: f64, u1: &Vector3, a2: f64, u2: &Vector3) -> Vector3 {
    Vector3::new(
        linear_combination_scalar(a1, u1.x, a2, u2.x),
        linear_combination_scalar(a1, u1.y, a2, u2.y),
        linear_combination_scalar(a1, u1.z, a2, u2.z),
    )
}

/// `a1 * b1 + a2 * b2` with a single rounding on the final addition.
fn linear_combination_scalar(a1: f64, b1: f64, a2: f64, b2: f64) -> f64 {
    a1.mul_add(b1, a2 * b2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    #[test_case(
        2.0, Vector3::new(1.0, 0.0, 0.0),
        3.0, Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(2.0, 3.0, 0.0);
        "orthogonal axes"
    )]
    #[test_case(
        1.0, Vector3::new(1.5, -2.0, 4.0),
        -1.0, Vector3::new(1.5, -2.0, 4.0),
        Vector3::zeros();
        "exact cancellation"
    )]
    #[test_case(
        0.5, Vector3::new(2.0, 4.0, 6.0),
        0.0, Vector3::new(1e300, 1e300, 1e300),
        Vector3::new(1.0, 2.0, 3.0);
        "zero weight on second vector"
    )]
    fn test_linear_combination(a1: f64, u1: Vector3, a2: f64, u2: Vector3, expected: Vector3) {
        let result = linear_combination(a1, &u1, a2, &u2);
        assert_abs_diff_eq!(result, expected, epsilon = 1e-12);
    }

    #[test]
    fn fused_product_keeps_low_order_bits() {
        // a*a - a*a with a = 1 + 2^-30: the rounded product loses 2^-60, fma keeps it
        let a = 1.0 + 2f64.powi(-30);
        let rounded = a * a;
        let residual = linear_combination_scalar(a, a, -1.0, rounded);
        assert_eq!(residual, 2f64.powi(-60));
    }
}
