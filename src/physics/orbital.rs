use crate::constants::{PI, TWO_PI};
use crate::errors::PhysicsError;
use crate::models::KeplerianElements;
use crate::numerics::{linear_combination, Vector3};
use crate::physics::kepler;
use std::sync::OnceLock;

/// Relative threshold below which the node or eccentricity vector is treated as zero
const DEGENERATE_THRESHOLD: f64 = 1e-11;

/// Conic family of an orbit; selects the Kepler solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conic {
    Elliptic,
    Hyperbolic,
}

impl Conic {
    /// Elliptic orbits need a > 0 and e < 1, hyperbolic ones a < 0 and e > 1.
    pub fn classify(a: f64, e: f64) -> Result<Self, PhysicsError> {
        if a > 0.0 && e < 1.0 {
            Ok(Conic::Elliptic)
        } else if a < 0.0 && e > 1.0 {
            Ok(Conic::Hyperbolic)
        } else {
            Err(PhysicsError::InvalidOrbitGeometry { a, e })
        }
    }

    /// Solves Kepler's equation and returns the true anomaly.
    pub fn mean_to_true(self, mean_anomaly: f64, e: f64) -> Result<f64, PhysicsError> {
        match self {
            Conic::Elliptic => Ok(kepler::elliptic_eccentric_to_true(
                kepler::mean_to_elliptic_eccentric(mean_anomaly, e),
                e,
            )),
            Conic::Hyperbolic => Ok(kepler::hyperbolic_eccentric_to_true(
                kepler::mean_to_hyperbolic_eccentric(mean_anomaly, e)?,
                e,
            )),
        }
    }

    pub fn true_to_eccentric(self, v: f64, e: f64) -> f64 {
        match self {
            Conic::Elliptic => kepler::true_to_elliptic_eccentric(v, e),
            Conic::Hyperbolic => kepler::true_to_hyperbolic_eccentric(v, e),
        }
    }

    pub fn eccentric_to_mean(self, eccentric_anomaly: f64, e: f64) -> f64 {
        match self {
            Conic::Elliptic => kepler::elliptic_eccentric_to_mean(eccentric_anomaly, e),
            Conic::Hyperbolic => kepler::hyperbolic_eccentric_to_mean(eccentric_anomaly, e),
        }
    }
}

/// Cartesian state in the inertial frame centered on the attracting body [m, m/s]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PVCoordinates {
    pub position: Vector3,
    pub velocity: Vector3,
}

/// An orbit described by classical Keplerian elements.
///
/// The true anomaly is solved at construction; the Cartesian state is
/// computed on first access and cached.
#[derive(Debug, Clone)]
pub struct KeplerianOrbit {
    a: f64,
    e: f64,
    i: f64,
    pa: f64,
    raan: f64,
    v: f64,
    mu: f64,
    conic: Conic,
    pv: OnceLock<PVCoordinates>,
}

impl KeplerianOrbit {
    /// Builds an orbit from elements in SI units (m, rad) and the central body's
    /// gravitational parameter (m³/s²).
    pub fn new(
        a: f64,
        e: f64,
        i: f64,
        pa: f64,
        raan: f64,
        mean_anomaly: f64,
        mu: f64,
    ) -> Result<Self, PhysicsError> {
        let conic = Conic::classify(a, e)?;
        PhysicsError::check_range_inclusive("eccentricity", e, 0.0, f64::INFINITY)?;
        PhysicsError::check_range_inclusive("mu", mu, f64::MIN_POSITIVE, f64::MAX)?;
        for (name, angle) in [
            ("inclination", i),
            ("perigee argument", pa),
            ("right ascension of ascending node", raan),
            ("mean anomaly", mean_anomaly),
        ] {
            PhysicsError::check_range_inclusive(name, angle, f64::MIN, f64::MAX)?;
        }

        let v = conic.mean_to_true(mean_anomaly, e)?;
        check_hyperbolic_range(v, e)?;

        Ok(KeplerianOrbit {
            a,
            e,
            i,
            pa,
            raan,
            v,
            mu,
            conic,
            pv: OnceLock::new(),
        })
    }

    pub fn from_elements(elements: &KeplerianElements, mu: f64) -> Result<Self, PhysicsError> {
        Self::new(
            elements.semi_major_axis,
            elements.eccentricity,
            elements.inclination,
            elements.perigee_argument,
            elements.raan,
            elements.mean_anomaly,
            mu,
        )
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.a
    }

    pub fn eccentricity(&self) -> f64 {
        self.e
    }

    pub fn inclination(&self) -> f64 {
        self.i
    }

    pub fn perigee_argument(&self) -> f64 {
        self.pa
    }

    pub fn right_ascension_of_ascending_node(&self) -> f64 {
        self.raan
    }

    pub fn true_anomaly(&self) -> f64 {
        self.v
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn conic(&self) -> Conic {
        self.conic
    }

    /// Eccentric anomaly E (elliptic) or hyperbolic eccentric anomaly H [rad]
    pub fn eccentric_anomaly(&self) -> f64 {
        self.conic.true_to_eccentric(self.v, self.e)
    }

    /// Mean anomaly recovered from the solved true anomaly, reduced to a single turn
    pub fn mean_anomaly(&self) -> f64 {
        self.conic.eccentric_to_mean(self.eccentric_anomaly(), self.e)
    }

    pub fn elements(&self) -> KeplerianElements {
        KeplerianElements::new(
            self.a,
            self.e,
            self.i,
            self.pa,
            self.raan,
            self.mean_anomaly(),
        )
    }

    /// Distance of closest approach to the focus [m]
    pub fn perigee_radius(&self) -> f64 {
        self.a * (1.0 - self.e)
    }

    pub fn pv_coordinates(&self) -> &PVCoordinates {
        self.pv.get_or_init(|| self.compute_pv())
    }

    pub fn position(&self) -> Vector3 {
        self.pv_coordinates().position
    }

    pub fn velocity(&self) -> Vector3 {
        self.pv_coordinates().velocity
    }

    fn compute_pv(&self) -> PVCoordinates {
        let (p, q) = perifocal_basis(self.i, self.pa, self.raan);

        let (x, y, x_dot, y_dot) = match self.conic {
            Conic::Elliptic => {
                let s1_me2 = ((1.0 - self.e) * (1.0 + self.e)).sqrt();
                let (sin_e, cos_e) = self.eccentric_anomaly().sin_cos();

                let factor = (self.mu / self.a).sqrt() / (1.0 - self.e * cos_e);
                (
                    self.a * (cos_e - self.e),
                    self.a * sin_e * s1_me2,
                    -sin_e * factor,
                    cos_e * s1_me2 * factor,
                )
            }
            Conic::Hyperbolic => {
                let (sin_v, cos_v) = self.v.sin_cos();
                let f = self.a * (1.0 - self.e * self.e);
                let pos_factor = f / (1.0 + self.e * cos_v);
                let vel_factor = (self.mu / f).sqrt();
                (
                    pos_factor * cos_v,
                    pos_factor * sin_v,
                    -vel_factor * sin_v,
                    vel_factor * (self.e + cos_v),
                )
            }
        };

        PVCoordinates {
            position: linear_combination(x, &p, y, &q),
            velocity: linear_combination(x_dot, &p, y_dot, &q),
        }
    }
}

/// Unit vectors P (towards perigee) and Q (along the velocity at perigee).
pub fn perifocal_basis(i: f64, pa: f64, raan: f64) -> (Vector3, Vector3) {
    let (sin_raan, cos_raan) = raan.sin_cos();
    let (sin_pa, cos_pa) = pa.sin_cos();
    let (sin_i, cos_i) = i.sin_cos();

    let crcp = cos_raan * cos_pa;
    let crsp = cos_raan * sin_pa;
    let srcp = sin_raan * cos_pa;
    let srsp = sin_raan * sin_pa;

    let p = Vector3::new(crcp - cos_i * srsp, srcp + cos_i * crsp, sin_i * sin_pa);
    let q = Vector3::new(-crsp - cos_i * srcp, -srsp + cos_i * crcp, sin_i * cos_pa);
    (p, q)
}

/// A hyperbola only reaches true anomalies with 1 + e·cos(v) > 0.
fn check_hyperbolic_range(v: f64, e: f64) -> Result<(), PhysicsError> {
    if 1.0 + e * v.cos() <= 0.0 {
        let v_max = (-1.0 / e).acos();
        return Err(PhysicsError::TrueAnomalyOutOfHyperbolicRange { v, e, v_max });
    }
    Ok(())
}

/// Converts a Cartesian state into Keplerian elements.
///
/// Angles are returned in [0, 2π) except the mean anomaly, which keeps the sign
/// of the true anomaly measured in (-π, π]. Circular orbits report a zero
/// argument of perigee and equatorial orbits a zero node.
pub fn cartesian_to_keplerian(r: &Vector3, v: &Vector3, mu: f64) -> KeplerianElements {
    // Angular momentum and node vectors
    let h = r.cross(v);
    let h_mag = h.magnitude();
    let n = Vector3::z().cross(&h);
    let equatorial = n.magnitude() < DEGENERATE_THRESHOLD * h_mag;

    let r_mag = r.magnitude();
    let v_mag = v.magnitude();
    let e_vec = ((v_mag * v_mag - mu / r_mag) * r - r.dot(v) * v) / mu;
    let e = e_vec.magnitude();
    let circular = e < DEGENERATE_THRESHOLD;

    let specific_energy = v_mag * v_mag / 2.0 - mu / r_mag;
    let a = -mu / (2.0 * specific_energy);

    let i = (h.z / h_mag).acos();

    let raan = if equatorial {
        0.0
    } else {
        wrap_positive(n.y.atan2(n.x))
    };

    let pa = if circular {
        0.0
    } else if equatorial {
        wrap_positive(e_vec.y.atan2(e_vec.x))
    } else {
        wrap_positive(h.dot(&n.cross(&e_vec)).atan2(h_mag * n.dot(&e_vec)))
    };

    // True anomaly from perigee, or from the node / x axis when there is no perigee
    let nu = if !circular {
        h.dot(&e_vec.cross(r)).atan2(h_mag * e_vec.dot(r))
    } else if equatorial {
        r.y.atan2(r.x)
    } else {
        h.dot(&n.cross(r)).atan2(h_mag * n.dot(r))
    };

    let mean_anomaly = match Conic::classify(a, e) {
        Ok(conic) => conic.eccentric_to_mean(conic.true_to_eccentric(nu, e), e),
        // parabolic or degenerate: no mean anomaly of either family
        Err(_) => f64::NAN,
    };

    KeplerianElements::new(a, e, i, pa, raan, mean_anomaly)
}

fn wrap_positive(angle: f64) -> f64 {
    if angle < 0.0 {
        angle + TWO_PI
    } else {
        angle
    }
}

/// Period of an elliptic orbit [s]
pub fn orbital_period(a: f64, mu: f64) -> f64 {
    2.0 * PI * (a.powi(3) / mu).sqrt()
}

/// Speed on a circular orbit of radius `r` [m/s]
pub fn circular_velocity(r: f64, mu: f64) -> f64 {
    (mu / r).sqrt()
}
