//! Scenario configuration for the Jupiter flyby.
//!
//! A scenario places a satellite and a comet around Jupiter from Keplerian
//! elements given in host units (kilometers and degrees) and chooses how many
//! integration steps run per rendered frame. Every field has a default, so a
//! YAML file only needs the values it changes:
//!
//! ```yaml
//! comet:
//!   mass_tonnes: 5.0e18
//!   elements:
//!     a_km: -1800000.0
//!     e: 2.0
//!     i_deg: 0.0
//!     pa_deg: 0.0
//!     raan_deg: 0.0
//!     mean_anomaly_deg: -125.0
//!
//! satellite:
//!   a_km: 1200000.0
//!   e: 0.93
//!   pa_deg: 135.0
//!   mean_anomaly_deg: -13.38
//!
//! warp: 20                  # steps per frame = 1000 × warp
//! frames: 600
//! safe_altitude_km: 72000.0
//! ```

use super::bodies::BodyFactory;
use crate::constants::{DEG_TO_RAD, MIN_SAFE_ALTITUDE, SPEED_FACTOR};
use crate::errors::PhysicsError;
use crate::models::KeplerianElements;
use crate::physics::orbital::KeplerianOrbit;
use crate::simulation::Simulator;
use serde::{Deserialize, Serialize};
use std::io::Read;
use tracing::{info, warn};

/// Keplerian elements as entered by a user: kilometers and degrees
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ElementsConfig {
    pub a_km: f64,             // semi-major axis, negative for a hyperbola
    pub e: f64,                // eccentricity
    pub i_deg: f64,            // inclination
    pub pa_deg: f64,           // argument of perigee
    pub raan_deg: f64,         // longitude of the ascending node
    pub mean_anomaly_deg: f64, // mean anomaly at start
}

impl ElementsConfig {
    /// Converts to meters and radians.
    pub fn to_si(&self) -> KeplerianElements {
        KeplerianElements::new(
            self.a_km * 1000.0,
            self.e,
            self.i_deg * DEG_TO_RAD,
            self.pa_deg * DEG_TO_RAD,
            self.raan_deg * DEG_TO_RAD,
            self.mean_anomaly_deg * DEG_TO_RAD,
        )
    }
}

impl Default for ElementsConfig {
    fn default() -> Self {
        // the satellite's orbit
        Self {
            a_km: 1_200_000.0,
            e: 0.93,
            i_deg: 0.0,
            pa_deg: 135.0,
            raan_deg: 0.0,
            mean_anomaly_deg: -13.38,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct CometConfig {
    pub mass_tonnes: f64,
    pub elements: ElementsConfig,
}

impl Default for CometConfig {
    fn default() -> Self {
        Self {
            mass_tonnes: 5.0e18,
            elements: ElementsConfig {
                a_km: -1_800_000.0,
                e: 2.0,
                i_deg: 0.0,
                pa_deg: 0.0,
                raan_deg: 0.0,
                mean_anomaly_deg: -125.0,
            },
        }
    }
}

/// Top-level scenario loaded from YAML.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub comet: CometConfig,
    pub satellite: ElementsConfig,
    pub warp: u32,             // time acceleration, 0 pauses
    pub frames: u32,           // frames rendered by the headless runner
    pub safe_altitude_km: f64, // satellite burns below this distance from Jupiter's center
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            comet: CometConfig::default(),
            satellite: ElementsConfig::default(),
            warp: 20,
            frames: 600,
            safe_altitude_km: MIN_SAFE_ALTITUDE / 1000.0,
        }
    }
}

impl ScenarioConfig {
    pub fn from_yaml_reader<R: Read>(reader: R) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn steps_per_frame(&self) -> u64 {
        u64::from(SPEED_FACTOR) * u64::from(self.warp)
    }

    /// Safe altitude in meters
    pub fn safe_altitude(&self) -> f64 {
        self.safe_altitude_km * 1000.0
    }

    /// Places the comet and the satellite on their orbits around Jupiter.
    pub fn build_simulator(&self) -> Result<Simulator, PhysicsError> {
        let jupiter = BodyFactory::jupiter()?;
        let mu = jupiter.mu();

        let comet_orbit = KeplerianOrbit::from_elements(&self.comet.elements.to_si(), mu)?;
        let satellite_orbit = KeplerianOrbit::from_elements(&self.satellite.to_si(), mu)?;

        if satellite_orbit.perigee_radius() < self.safe_altitude() {
            warn!(
                perigee_km = satellite_orbit.perigee_radius() / 1000.0,
                safe_altitude_km = self.safe_altitude_km,
                "satellite perigee lies below the safe altitude"
            );
        }
        info!(
            comet_perigee_km = comet_orbit.perigee_radius() / 1000.0,
            satellite_perigee_km = satellite_orbit.perigee_radius() / 1000.0,
            "orbits placed"
        );

        let comet = BodyFactory::comet(self.comet.mass_tonnes * 1000.0)?
            .with_state(comet_orbit.position(), comet_orbit.velocity());
        let satellite = BodyFactory::satellite()?
            .with_state(satellite_orbit.position(), satellite_orbit.velocity());

        Ok(Simulator::new(jupiter, satellite, comet))
    }
}
