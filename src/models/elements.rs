use serde::{Deserialize, Serialize};

/// Classical Keplerian orbital elements in SI units.
///
/// A negative semi-major axis denotes a hyperbolic trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeplerianElements {
    /// Semi-major axis [m]
    pub semi_major_axis: f64,
    /// Eccentricity [-]
    pub eccentricity: f64,
    /// Inclination [rad]
    pub inclination: f64,
    /// Argument of perigee [rad]
    pub perigee_argument: f64,
    /// Right ascension of the ascending node [rad]
    pub raan: f64,
    /// Mean anomaly [rad]
    pub mean_anomaly: f64,
}

impl KeplerianElements {
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: f64,
        perigee_argument: f64,
        raan: f64,
        mean_anomaly: f64,
    ) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            inclination,
            perigee_argument,
            raan,
            mean_anomaly,
        }
    }

    pub fn is_hyperbolic(&self) -> bool {
        self.semi_major_axis < 0.0
    }
}
