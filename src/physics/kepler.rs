//! Solvers for Kepler's equation and anomaly conversions.
//!
//! Elliptic orbits use the Odell & Gooding procedure ("Procedures for solving
//! Kepler's Equation", Celestial Mechanics 38, 1986): an S12 starter followed by
//! two combined Halley / Newton-Raphson corrections. Hyperbolic orbits use
//! Danby's third-order iteration with Vallado's starter.

use crate::constants::{HYPERBOLIC_MAX_ITERATIONS, HYPERBOLIC_TOLERANCE, PI};
use crate::errors::PhysicsError;
use crate::numerics::{copy_sign, normalize_angle};
use tracing::{debug, warn};

/// First coefficient of the S12 starter.
const A: f64 = 3.0 * (PI - 1.0) * (PI - 1.0) / (3.0 * PI + 2.0);

/// Second coefficient of the S12 starter.
const B: f64 = (6.0 * PI - 1.0) * (6.0 * PI - 1.0) / (6.0 * (3.0 * PI + 2.0));

/// Computes the elliptic eccentric anomaly E from the mean anomaly M (rad).
///
/// The result lies in the same 2π turn as `mean_anomaly`. A non-finite mean
/// anomaly yields NaN.
#[allow(non_snake_case)]
pub fn mean_to_elliptic_eccentric(mean_anomaly: f64, e: f64) -> f64 {
    if !mean_anomaly.is_finite() {
        return f64::NAN;
    }
    let reduced_m = normalize_angle(mean_anomaly, 0.0);

    // S12 starter
    let mut E = if reduced_m.abs() < 1.0 / 6.0 {
        reduced_m + e * ((6.0 * reduced_m).cbrt() - reduced_m)
    } else if reduced_m < 0.0 {
        let w = PI + reduced_m;
        reduced_m + e * (A * w / (B - w) - PI - reduced_m)
    } else {
        let w = PI - reduced_m;
        reduced_m + e * (PI - A * w / (B - w) - reduced_m)
    };

    let e1 = 1.0 - e;
    let no_cancellation_risk = (e1 + E * E / 6.0) >= 0.1;

    // two iterations, each one Halley step followed by one Newton-Raphson step
    for _ in 0..2 {
        let (sin_e, cos_e) = E.sin_cos();
        let fdd = e * sin_e;
        let fddd = e * cos_e;
        let (f, mut fd) = if no_cancellation_risk {
            ((E - fdd) - reduced_m, 1.0 - fddd)
        } else {
            let s = (0.5 * E).sin();
            (e_minus_e_sin_e(E, e) - reduced_m, e1 + 2.0 * e * s * s)
        };
        let dee = f * fd / (0.5 * f * fdd - fd * fd);

        // written to limit underflow
        let w = fd + 0.5 * dee * (fdd + dee * fddd / 3.0);
        fd += dee * (fdd + 0.5 * dee * fddd);
        E -= (f - dee * (fd - w)) / fd;
    }

    E + (mean_anomaly - reduced_m)
}

/// Accurate `E - e·sin(E)` near perigee of almost parabolic orbits (E ≈ 0, e ≈ 1).
#[allow(non_snake_case)]
fn e_minus_e_sin_e(E: f64, e: f64) -> f64 {
    let mut x = (1.0 - e) * E.sin();
    let minus_e2 = -E * E;
    let mut term = E;
    let mut d = 0.0;
    // iterate until the sum stops changing; a tolerance here would lose digits
    let mut x0 = f64::NAN;
    while x != x0 {
        d += 2.0;
        term *= minus_e2 / (d * (d + 1.0));
        x0 = x;
        x -= term;
    }
    x
}

/// Converts an elliptic eccentric anomaly into the true anomaly.
#[allow(non_snake_case)]
pub fn elliptic_eccentric_to_true(E: f64, e: f64) -> f64 {
    let beta = e / (1.0 + ((1.0 - e) * (1.0 + e)).sqrt());
    let (sin_e, cos_e) = E.sin_cos();
    E + 2.0 * (beta * sin_e / (1.0 - beta * cos_e)).atan()
}

/// Converts a true anomaly into the elliptic eccentric anomaly.
pub fn true_to_elliptic_eccentric(v: f64, e: f64) -> f64 {
    let beta = e / (1.0 + (1.0 - e * e).sqrt());
    let (sin_v, cos_v) = v.sin_cos();
    v - 2.0 * (beta * sin_v / (1.0 + beta * cos_v)).atan()
}

/// Kepler's equation for ellipses: M = E - e·sin(E)
#[allow(non_snake_case)]
pub fn elliptic_eccentric_to_mean(E: f64, e: f64) -> f64 {
    E - e * E.sin()
}

/// Computes the hyperbolic eccentric anomaly H from the mean anomaly M.
///
/// Fails with [`PhysicsError::KeplerSolverDidNotConverge`] when the correction
/// does not drop below the tolerance within the iteration budget.
#[allow(non_snake_case)]
pub fn mean_to_hyperbolic_eccentric(mean_anomaly: f64, ecc: f64) -> Result<f64, PhysicsError> {
    let mut H = hyperbolic_starter(mean_anomaly, ecc);

    let mut iterations = 0;
    while iterations < HYPERBOLIC_MAX_ITERATIONS {
        iterations += 1;

        let f3 = ecc * H.cosh();
        let f2 = ecc * H.sinh();
        let f1 = f3 - 1.0;
        let f0 = f2 - H - mean_anomaly;
        let d = f0 / (2.0 * f1);
        let fdf = f1 - d * f2;
        let ds = f0 / fdf;
        let shift = f0 / (fdf + ds * ds * f3 / 6.0);

        H -= shift;

        if shift.abs() <= HYPERBOLIC_TOLERANCE {
            debug!(iterations, H, "hyperbolic Kepler equation converged");
            return Ok(H);
        }
    }

    warn!(
        mean_anomaly,
        ecc, iterations, "hyperbolic Kepler equation did not converge"
    );
    Err(PhysicsError::KeplerSolverDidNotConverge { iterations })
}

/// Vallado's starter, clamped to the root bound |H| ≤ asinh(|M| / (e - 1)).
///
/// The bound follows from e·sinh(H) - H ≥ (e - 1)·sinh(H) for H ≥ 0. Without it
/// the starter lands far out on the exponential branch for large |M|, and the
/// iteration then needs roughly one step per unit of overshoot.
#[allow(non_snake_case)]
fn hyperbolic_starter(mean_anomaly: f64, ecc: f64) -> f64 {
    let H = if ecc < 1.6 {
        if (-PI < mean_anomaly && mean_anomaly < 0.0) || mean_anomaly > PI {
            mean_anomaly - ecc
        } else {
            mean_anomaly + ecc
        }
    } else if ecc < 3.6 && mean_anomaly.abs() > PI {
        mean_anomaly - copy_sign(ecc, mean_anomaly)
    } else {
        mean_anomaly / (ecc - 1.0)
    };

    let bound = (mean_anomaly.abs() / (ecc - 1.0)).asinh();
    if H.abs() > bound {
        copy_sign(bound, mean_anomaly)
    } else {
        H
    }
}

/// Converts a hyperbolic eccentric anomaly into the true anomaly.
#[allow(non_snake_case)]
pub fn hyperbolic_eccentric_to_true(H: f64, e: f64) -> f64 {
    2.0 * (((e + 1.0) / (e - 1.0)).sqrt() * (H / 2.0).tanh()).atan()
}

/// Converts a true anomaly into the hyperbolic eccentric anomaly.
pub fn true_to_hyperbolic_eccentric(v: f64, e: f64) -> f64 {
    let (sin_v, cos_v) = v.sin_cos();
    let sinh_h = (e * e - 1.0).sqrt() * sin_v / (1.0 + e * cos_v);
    sinh_h.asinh()
}

/// Kepler's equation for hyperbolas: M = e·sinh(H) - H
#[allow(non_snake_case)]
pub fn hyperbolic_eccentric_to_mean(H: f64, e: f64) -> f64 {
    e * H.sinh() - H
}
