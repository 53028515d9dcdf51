use approx::assert_relative_eq;
use orbitsim::config::{BodyFactory, ScenarioConfig};
use orbitsim::constants::{MIN_SAFE_ALTITUDE, TIMESTEP};
use orbitsim::numerics::Vector3;
use orbitsim::physics::orbital::{circular_velocity, KeplerianOrbit};
use orbitsim::simulation::{FlightStatus, Simulator, SimulatorState};

fn circular_satellite_simulator(radius: f64) -> Simulator {
    let jupiter = BodyFactory::jupiter().unwrap();
    let speed = circular_velocity(radius, jupiter.mu());
    let satellite = BodyFactory::satellite()
        .unwrap()
        .with_state(Vector3::new(radius, 0.0, 0.0), Vector3::new(0.0, speed, 0.0));
    // a light comet parked far away
    let comet = BodyFactory::comet(1.0)
        .unwrap()
        .with_state(Vector3::new(1.0e13, 0.0, 0.0), Vector3::zeros());
    Simulator::new(jupiter, satellite, comet)
}

#[test]
fn comet_and_satellite_orbits_feed_the_simulator() {
    let mu = BodyFactory::jupiter().unwrap().mu();
    let comet_orbit = KeplerianOrbit::new(-1.8e9, 2.0, 0.0, 0.0, 0.0, -125f64.to_radians(), mu).unwrap();
    let satellite_orbit = KeplerianOrbit::new(
        1.2e9,
        0.93,
        0.0,
        135f64.to_radians(),
        0.0,
        -13.38f64.to_radians(),
        mu,
    )
    .unwrap();

    let satellite = BodyFactory::satellite()
        .unwrap()
        .with_state(satellite_orbit.position(), satellite_orbit.velocity());
    let comet = BodyFactory::comet(5.0e21)
        .unwrap()
        .with_state(comet_orbit.position(), comet_orbit.velocity());
    let initial_separation = satellite.distance_to(&comet);

    let mut sim = Simulator::new(BodyFactory::jupiter().unwrap(), satellite, comet);
    assert_eq!(sim.state(), SimulatorState::Constructed);

    sim.step();
    assert_eq!(sim.min_distance(), initial_separation);
    assert_relative_eq!(
        sim.min_altitude(),
        satellite_orbit.position().magnitude(),
        max_relative = 1e-15
    );
}

#[test]
fn circular_orbit_energy_drift_stays_small() {
    let radius = 1.0e9;
    let mut sim = circular_satellite_simulator(radius);
    let start_energy = -sim.primary().mu() / radius;

    for _ in 0..10_000 {
        sim.step();
    }

    assert_relative_eq!(sim.elapsed(), 10_000.0 * TIMESTEP, max_relative = 1e-12);
    assert!(sim.energy_drift().abs() < 1.0e-6 * start_energy.abs());
    assert_relative_eq!(sim.min_altitude(), radius, max_relative = 1e-6);
    assert_eq!(sim.status(MIN_SAFE_ALTITUDE), FlightStatus::Orbiting);
}

#[test]
fn satellite_inside_the_safe_altitude_burns() {
    let mut sim = circular_satellite_simulator(7.0e7);
    sim.step();
    assert_eq!(sim.status(MIN_SAFE_ALTITUDE), FlightStatus::Burned);
    assert_eq!(sim.status(MIN_SAFE_ALTITUDE).to_string(), "Burned!");
}

#[test]
fn default_scenario_runs_frames_without_burning() {
    let config = ScenarioConfig {
        warp: 1,
        ..ScenarioConfig::default()
    };
    let mut sim = config.build_simulator().unwrap();

    let mut previous = sim.diagnostics();
    for _ in 0..20 {
        for _ in 0..config.steps_per_frame() {
            sim.step();
        }
        let current = sim.diagnostics();
        assert!(current.min_distance <= previous.min_distance);
        assert!(current.min_altitude <= previous.min_altitude);
        assert!(current.energy_drift.is_finite());
        previous = current;
    }

    assert_eq!(sim.steps(), 20_000);
    assert!(sim.min_distance().is_finite());
    assert!(sim.min_altitude() > config.safe_altitude());
    assert_eq!(sim.status(config.safe_altitude()), FlightStatus::Orbiting);
}

#[test]
fn scenario_file_round_trips_through_yaml() {
    let config = ScenarioConfig::default();
    let yaml = serde_yaml::to_string(&config).unwrap();
    assert_eq!(ScenarioConfig::from_yaml_str(&yaml).unwrap(), config);
}
