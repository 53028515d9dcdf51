use crate::models::Body;
use crate::numerics::Vector3;

/// Newtonian pull of `other` on `body`, returned with the distance between them.
///
/// The force is `mu_body * m_other / r³ · Δr` with `Δr` pointing from `body`
/// towards `other`; dividing by `body`'s mass gives its acceleration.
pub fn pairwise_force(body: &Body, other: &Body) -> (Vector3, f64) {
    let delta = other.position - body.position;
    let square_distance = delta.magnitude_squared();
    let distance = square_distance.sqrt();

    let f_scalar = body.mu() * other.mass() / (square_distance * distance);
    (delta * f_scalar, distance)
}
