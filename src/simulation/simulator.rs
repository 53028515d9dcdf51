use super::status::{FlightStatus, SimulatorState};
use crate::constants::TIMESTEP;
use crate::integrators::SymplecticEuler;
use crate::models::Body;
use crate::physics::energy::specific_orbital_energy;
use crate::physics::gravity::pairwise_force;
use tracing::info;

/// Snapshot of the running diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics {
    /// Closest satellite–comet approach so far [m]
    pub min_distance: f64,
    /// Closest satellite–primary approach so far, center to center [m]
    pub min_altitude: f64,
    /// Change of the satellite's specific orbital energy since construction [m²/s²]
    pub energy_drift: f64,
}

/// Fixed-step integrator for a primary, a satellite and a comet.
///
/// The primary is a fixed gravitational anchor: it pulls on the other two
/// bodies but never accumulates force and is never advanced. The satellite
/// and the comet are advanced with a symplectic Euler step.
#[derive(Debug, Clone)]
pub struct Simulator {
    primary: Body,
    satellite: Body,
    comet: Body,
    integrator: SymplecticEuler,

    start_specific_energy: f64,
    min_distance: f64,
    min_altitude: f64,
    steps: u64,
}

impl Simulator {
    /// Takes ownership of the three bodies, already placed on their initial states.
    pub fn new(mut primary: Body, mut satellite: Body, mut comet: Body) -> Self {
        let start_specific_energy = specific_orbital_energy(&satellite, &primary);

        let integrator = SymplecticEuler::new(TIMESTEP);
        for body in [&mut primary, &mut satellite, &mut comet] {
            body.set_timestep(integrator.dt());
        }

        info!(
            start_specific_energy,
            dt = integrator.dt(),
            "simulator initialized"
        );

        Simulator {
            primary,
            satellite,
            comet,
            integrator,
            start_specific_energy,
            min_distance: f64::INFINITY,
            min_altitude: f64::INFINITY,
            steps: 0,
        }
    }

    /// Advances the satellite and the comet by one timestep.
    pub fn step(&mut self) {
        self.accumulate_forces();
        self.apply_forces();
        self.steps += 1;
    }

    fn accumulate_forces(&mut self) {
        let altitude = accumulate_pull(&mut self.satellite, &self.primary);
        self.min_altitude = self.min_altitude.min(altitude);

        let distance = accumulate_pull(&mut self.satellite, &self.comet);
        self.min_distance = self.min_distance.min(distance);

        accumulate_pull(&mut self.comet, &self.primary);
    }

    fn apply_forces(&mut self) {
        self.integrator.advance(&mut self.satellite);
        self.integrator.advance(&mut self.comet);
    }

    pub fn min_altitude(&self) -> f64 {
        self.min_altitude
    }

    pub fn min_distance(&self) -> f64 {
        self.min_distance
    }

    /// Satellite's specific orbital energy minus its value at construction.
    ///
    /// Stays near zero while the integration is accurate and the satellite
    /// remains bound; the comet has no counterpart.
    pub fn energy_drift(&self) -> f64 {
        specific_orbital_energy(&self.satellite, &self.primary) - self.start_specific_energy
    }

    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics {
            min_distance: self.min_distance,
            min_altitude: self.min_altitude,
            energy_drift: self.energy_drift(),
        }
    }

    pub fn status(&self, safe_altitude: f64) -> FlightStatus {
        FlightStatus::from_min_altitude(self.min_altitude, safe_altitude)
    }

    pub fn state(&self) -> SimulatorState {
        if self.steps == 0 {
            SimulatorState::Constructed
        } else {
            SimulatorState::Advancing
        }
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Simulated time since construction [s]
    pub fn elapsed(&self) -> f64 {
        self.steps as f64 * self.integrator.dt()
    }

    pub fn dt(&self) -> f64 {
        self.integrator.dt()
    }

    pub fn primary(&self) -> &Body {
        &self.primary
    }

    pub fn satellite(&self) -> &Body {
        &self.satellite
    }

    pub fn comet(&self) -> &Body {
        &self.comet
    }
}

/// Adds the pull of `other` to `body` and returns their separation.
fn accumulate_pull(body: &mut Body, other: &Body) -> f64 {
    let (force, distance) = pairwise_force(body, other);
    body.accumulate_force(&force);
    distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{G, M_JUPITER, R_JUPITER};
    use crate::numerics::Vector3;
    use approx::assert_relative_eq;

    fn jupiter() -> Body {
        Body::new(M_JUPITER, R_JUPITER).unwrap()
    }

    fn head_on_simulator() -> Simulator {
        let satellite = Body::new(1000.0, 3.0)
            .unwrap()
            .with_state(Vector3::new(1.0e8, 0.0, 0.0), Vector3::new(0.0, 3.0e4, 0.0));
        let comet = Body::new(5.0e18, 1.0e5)
            .unwrap()
            .with_state(Vector3::new(-3.0e8, 0.0, 0.0), Vector3::new(0.0, -4.0e4, 0.0));
        Simulator::new(jupiter(), satellite, comet)
    }

    #[test]
    fn fresh_simulator_has_unset_minima_and_no_drift() {
        let sim = head_on_simulator();
        assert_eq!(sim.state(), SimulatorState::Constructed);
        assert_eq!(sim.min_distance(), f64::INFINITY);
        assert_eq!(sim.min_altitude(), f64::INFINITY);
        assert_eq!(sim.energy_drift(), 0.0);
        assert_eq!(sim.status(72.0e6), FlightStatus::Orbiting);
    }

    #[test]
    fn construction_sets_the_timestep_on_every_body() {
        let sim = head_on_simulator();
        assert_relative_eq!(sim.primary().timestep_over_mass(), TIMESTEP / M_JUPITER);
        assert_relative_eq!(sim.satellite().timestep_over_mass(), TIMESTEP / 1000.0);
        assert_relative_eq!(sim.comet().timestep_over_mass(), TIMESTEP / 5.0e18);
    }

    #[test]
    fn first_step_records_the_initial_separations() {
        let mut sim = head_on_simulator();
        sim.step();
        assert_eq!(sim.state(), SimulatorState::Advancing);
        assert_eq!(sim.min_altitude(), 1.0e8);
        assert_eq!(sim.min_distance(), 4.0e8);
        assert_eq!(sim.steps(), 1);
        assert_relative_eq!(sim.elapsed(), TIMESTEP);
    }

    #[test]
    fn primary_is_never_advanced() {
        let mut sim = head_on_simulator();
        for _ in 0..1000 {
            sim.step();
        }
        assert_eq!(sim.primary().position, Vector3::zeros());
        assert_eq!(sim.primary().velocity, Vector3::zeros());
        assert_eq!(sim.primary().accumulated_force(), Vector3::zeros());
        assert_eq!(sim.satellite().accumulated_force(), Vector3::zeros());
        assert_eq!(sim.comet().accumulated_force(), Vector3::zeros());
    }

    #[test]
    fn one_step_matches_hand_computation() {
        let mut sim = head_on_simulator();
        sim.step();

        // satellite pulled by jupiter (-x) and the comet (-x)
        let a = G * M_JUPITER / 1.0e16 + G * 5.0e18 / 1.6e17;
        let vx = -a * TIMESTEP;
        assert_relative_eq!(sim.satellite().velocity.x, vx, max_relative = 1e-12);
        assert_relative_eq!(
            sim.satellite().position,
            Vector3::new(1.0e8 + vx * TIMESTEP, 3.0e4 * TIMESTEP, 0.0),
            max_relative = 1e-12
        );

        // the comet feels only jupiter
        let a_comet = G * M_JUPITER / 9.0e16;
        assert_relative_eq!(
            sim.comet().velocity.x,
            a_comet * TIMESTEP,
            max_relative = 1e-12
        );
    }

    #[test]
    fn minima_never_increase() {
        let mut sim = head_on_simulator();
        let mut previous = sim.diagnostics();
        for _ in 0..5000 {
            sim.step();
            let current = sim.diagnostics();
            assert!(current.min_distance <= previous.min_distance);
            assert!(current.min_altitude <= previous.min_altitude);
            previous = current;
        }
    }
}
