pub mod bodies;
pub mod scenario;

pub use bodies::BodyFactory;
pub use scenario::{CometConfig, ElementsConfig, ScenarioConfig};
