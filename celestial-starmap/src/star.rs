//! Output star type and the equatorial to unit-sphere projection.

use crate::constants::{DEG_TO_RAD, HOUR_TO_RAD};
use serde::{Deserialize, Serialize};

/// A naked-eye star as a direction on the unit sphere.
///
/// Serializes as `{"x":..,"y":..,"z":..,"mag":..,"color":..}` in that key
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibleStar {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Apparent visual magnitude.
    pub mag: f64,
    /// B−V color index, unchanged from the catalog.
    pub color: f64,
}

impl VisibleStar {
    pub fn from_equatorial(ra_hours: f64, dec_deg: f64, mag: f64, color: f64) -> Self {
        let [x, y, z] = unit_vector(ra_hours, dec_deg);
        Self {
            x,
            y,
            z,
            mag,
            color,
        }
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Cartesian unit vector for right ascension in hours and declination in degrees.
///
/// +x points at RA 0h on the equator, +z at the north celestial pole.
pub fn unit_vector(ra_hours: f64, dec_deg: f64) -> [f64; 3] {
    let theta = ra_hours * HOUR_TO_RAD;
    let phi = dec_deg * DEG_TO_RAD;
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    [cos_phi * cos_theta, cos_phi * sin_theta, sin_phi]
}
