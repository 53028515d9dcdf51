pub mod energy;
pub mod gravity;
pub mod kepler;
pub mod orbital;
