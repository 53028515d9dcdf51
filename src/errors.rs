use thiserror::Error;

/// Failures raised while building bodies and orbits.
///
/// Every variant is reported at construction time; no partially valid
/// orbit or body is ever handed out.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhysicsError {
    #[error(
        "orbit should be either elliptic with a > 0 and e < 1 or hyperbolic with a < 0 and e > 1, a = {a}, e = {e}"
    )]
    InvalidOrbitGeometry { a: f64, e: f64 },

    #[error("invalid parameter {name}: {value} not in range [{lower}, {upper}]")]
    ParameterOutOfRange {
        name: &'static str,
        value: f64,
        lower: f64,
        upper: f64,
    },

    #[error("true anomaly {v} out of hyperbolic range (e = {e}, -{v_max} < v < {v_max})")]
    TrueAnomalyOutOfHyperbolicRange { v: f64, e: f64, v_max: f64 },

    #[error(
        "unable to compute hyperbolic eccentric anomaly from the mean anomaly after {iterations} iterations"
    )]
    KeplerSolverDidNotConverge { iterations: u32 },
}

impl PhysicsError {
    /// Checks `value` against the closed interval `[lower, upper]`.
    pub(crate) fn check_range_inclusive(
        name: &'static str,
        value: f64,
        lower: f64,
        upper: f64,
    ) -> Result<(), PhysicsError> {
        // NaN fails both comparisons, so test for membership instead
        if value >= lower && value <= upper {
            Ok(())
        } else {
            Err(PhysicsError::ParameterOutOfRange {
                name,
                value,
                lower,
                upper,
            })
        }
    }
}
