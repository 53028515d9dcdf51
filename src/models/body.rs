use crate::constants::G;
use crate::errors::PhysicsError;
use crate::numerics::Vector3;

/// A gravitating point mass.
///
/// Position and velocity are placed once by the caller (usually from a
/// [`KeplerianOrbit`](crate::physics::orbital::KeplerianOrbit)) before the
/// body is handed to a [`Simulator`](crate::simulation::Simulator); after
/// that only the integrator moves it.
#[derive(Debug, Clone)]
pub struct Body {
    mass: f64,
    mu: f64,
    radius: f64,

    pub position: Vector3,
    pub velocity: Vector3,

    // Force accumulated during one force pass, cleared when applied
    accumulated_force: Vector3,
    timestep_over_mass: f64,
}

impl Body {
    pub fn new(mass: f64, radius: f64) -> Result<Self, PhysicsError> {
        PhysicsError::check_range_inclusive("mass", mass, f64::MIN_POSITIVE, f64::MAX)?;
        PhysicsError::check_range_inclusive("radius", radius, 0.0, f64::MAX)?;

        Ok(Body {
            mass,
            mu: G * mass,
            radius,
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            accumulated_force: Vector3::zeros(),
            timestep_over_mass: 0.0,
        })
    }

    /// Places the body on its initial state.
    pub fn place(&mut self, position: Vector3, velocity: Vector3) {
        self.position = position;
        self.velocity = velocity;
    }

    /// Builder form of [`Body::place`].
    pub fn with_state(mut self, position: Vector3, velocity: Vector3) -> Self {
        self.place(position, velocity);
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Gravitational parameter G·m (m³/s²)
    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_timestep(&mut self, dt: f64) {
        self.timestep_over_mass = dt / self.mass;
    }

    pub fn timestep_over_mass(&self) -> f64 {
        self.timestep_over_mass
    }

    pub fn accumulated_force(&self) -> Vector3 {
        self.accumulated_force
    }

    pub(crate) fn accumulate_force(&mut self, force: &Vector3) {
        self.accumulated_force += force;
    }

    /// Returns the accumulated force and resets the accumulator.
    pub(crate) fn take_accumulated_force(&mut self) -> Vector3 {
        std::mem::replace(&mut self.accumulated_force, Vector3::zeros())
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (other.position - self.position).magnitude()
    }
}
