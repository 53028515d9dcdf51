use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatorState {
    /// Diagnostics initialized, no step taken yet
    Constructed,
    Advancing,
}

/// Whether the satellite has stayed clear of the primary's atmosphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightStatus {
    Orbiting,
    Burned,
}

impl FlightStatus {
    /// `Burned` once the minimum altitude has dropped below `safe_altitude`.
    pub fn from_min_altitude(min_altitude: f64, safe_altitude: f64) -> Self {
        if safe_altitude <= min_altitude {
            FlightStatus::Orbiting
        } else {
            FlightStatus::Burned
        }
    }

    pub fn is_safe(self) -> bool {
        self == FlightStatus::Orbiting
    }
}

impl fmt::Display for SimulatorState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimulatorState::Constructed => write!(f, "Constructed"),
            SimulatorState::Advancing => write!(f, "Advancing"),
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FlightStatus::Orbiting => write!(f, "Orbiting"),
            FlightStatus::Burned => write!(f, "Burned!"),
        }
    }
}
