use crate::models::Body;

/// Fixed-step semi-implicit Euler: kick the velocity with the accumulated
/// force, then drift the position with the updated velocity.
#[derive(Debug, Clone, Copy)]
pub struct SymplecticEuler {
    dt: f64,
}

impl SymplecticEuler {
    pub fn new(dt: f64) -> Self {
        SymplecticEuler { dt }
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Applies and clears `body`'s accumulated force, then moves it one step.
    ///
    /// # Panics
    ///
    /// If the body's timestep was never set.
    pub fn advance(&self, body: &mut Body) {
        assert!(
            body.timestep_over_mass() > 0.0,
            "body timestep must be set before integration"
        );

        let force = body.take_accumulated_force();
        body.velocity += force * body.timestep_over_mass();
        body.position += body.velocity * self.dt;
    }
}
