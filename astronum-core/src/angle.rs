//! Degree/radian conversions.
//!
//! The physical models feeding the solvers take their angles in degrees
//! (true anomaly, entry angle) while the equations work in radians. These
//! helpers go through [`uom`] so the conversion factor lives in one place.

use uom::si::angle::{degree, radian};

pub use uom::si::f64::Angle;

/// Converts an angle in degrees to radians.
#[must_use]
pub fn to_radians(degrees: f64) -> f64 {
    Angle::new::<degree>(degrees).get::<radian>()
}

/// Converts an angle in radians to degrees.
#[must_use]
pub fn to_degrees(radians: f64) -> f64 {
    Angle::new::<radian>(radians).get::<degree>()
}
