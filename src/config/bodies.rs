use crate::constants::{M_JUPITER, R_JUPITER};
use crate::errors::PhysicsError;
use crate::models::Body;

/// Bodies of the Jupiter flyby scenario.
pub struct BodyFactory;

impl BodyFactory {
    pub const SATELLITE_MASS: f64 = 1000.0; // kg
    pub const SATELLITE_RADIUS: f64 = 3.0; // meters
    pub const COMET_RADIUS: f64 = 100_000.0; // meters

    pub fn jupiter() -> Result<Body, PhysicsError> {
        Body::new(M_JUPITER, R_JUPITER)
    }

    pub fn satellite() -> Result<Body, PhysicsError> {
        Body::new(Self::SATELLITE_MASS, Self::SATELLITE_RADIUS)
    }

    /// Comet of the given mass [kg]
    pub fn comet(mass: f64) -> Result<Body, PhysicsError> {
        Body::new(mass, Self::COMET_RADIUS)
    }
}
