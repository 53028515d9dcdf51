use crate::models::Body;
use crate::numerics::Vector3;

/// Specific orbital energy of `body` around `primary`, as `|v|² - 2μ/r`.
///
/// This is twice the textbook `|v|²/2 - μ/r`; only differences of it are
/// meaningful, so the scale is kept for the energy-drift diagnostic. `v` is the
/// body's own velocity: the primary is a fixed anchor.
pub fn specific_orbital_energy(body: &Body, primary: &Body) -> f64 {
    let r = body.distance_to(primary);

    body.velocity.magnitude_squared() - 2.0 * primary.mu() / r
}

/// Angular momentum per unit mass of `body` around `primary` (m²/s)
pub fn specific_angular_momentum(body: &Body, primary: &Body) -> Vector3 {
    (body.position - primary.position).cross(&(body.velocity - primary.velocity))
}
