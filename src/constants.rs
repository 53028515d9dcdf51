pub const G: f64 = 6.67408e-11; // Gravitational constant (m³/kg/s²)

// Jupiter, the fixed primary of the flyby scenario
pub const M_JUPITER: f64 = 1.8986e27; // Mass of Jupiter (kg)
pub const R_JUPITER: f64 = 69_911_000.0; // Mean radius of Jupiter (m)
pub const MIN_SAFE_ALTITUDE: f64 = 72_000_000.0; // Below this the satellite burns up (m)

// Integration
pub const TIMESTEP: f64 = 0.05; // Fixed integration step (s)
pub const SPEED_FACTOR: u32 = 1000; // Steps per frame for a warp of 1

// Hyperbolic Kepler solver
pub const HYPERBOLIC_MAX_ITERATIONS: u32 = 50;
pub const HYPERBOLIC_TOLERANCE: f64 = 1.0e-12;

// Math
pub const PI: f64 = std::f64::consts::PI;
pub const TWO_PI: f64 = 2.0 * PI;
pub const DEG_TO_RAD: f64 = PI / 180.0;
