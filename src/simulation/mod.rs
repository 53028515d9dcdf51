pub mod simulator;
pub mod status;

pub use simulator::{Diagnostics, Simulator};
pub use status::{FlightStatus, SimulatorState};
