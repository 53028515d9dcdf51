use crate::constants::{PI, TWO_PI};

/// Normalizes an angle into the `[center - π, center + π)` interval.
pub fn normalize_angle(angle: f64, center: f64) -> f64 {
    angle - TWO_PI * ((angle + PI - center) / TWO_PI).floor()
}

/// Returns `magnitude` carrying the sign of `sign`; zero and NaN signs count as negative.
pub fn copy_sign(magnitude: f64, sign: f64) -> f64 {
    let abs_magnitude = magnitude.abs();
    if sign > 0.0 {
        abs_magnitude
    } else {
        -abs_magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    #[test_case(0.5, 0.0, 0.5; "already reduced")]
    #[test_case(-PI, 0.0, -PI; "lower bound is kept")]
    #[test_case(7.0, 0.0, 7.0 - TWO_PI; "one turn above")]
    #[test_case(-20.0, 0.0, -20.0 + 3.0 * TWO_PI; "several turns below")]
    #[test_case(0.1, PI, 0.1; "centered on pi")]
    fn test_normalize_angle(angle: f64, center: f64, expected: f64) {
        assert_abs_diff_eq!(normalize_angle(angle, center), expected, epsilon = 1e-12);
    }

    #[test_case(2.0, 1.0, 2.0; "positive sign")]
    #[test_case(2.0, -1.0, -2.0; "negative sign")]
    #[test_case(-2.0, 3.0, 2.0; "negative magnitude positive sign")]
    #[test_case(2.0, 0.0, -2.0; "zero sign counts as negative")]
    fn test_copy_sign(magnitude: f64, sign: f64, expected: f64) {
        assert_eq!(copy_sign(magnitude, sign), expected);
    }
}
