//! Spherical position type and the angle/coordinate helpers shared by the
//! frame converter and the parallax corrector.
//!
//! A [`Spherical`] is a (longitude, latitude, radius) triple. The two angle
//! components are in radians; the radius unit is whatever the caller works in
//! (kilometers or astronomical units) and is always passed through unchanged
//! by angular transforms.

use nalgebra::Vector3;
use std::f64::consts::PI;

use crate::constants::{Radian, DPI};

/// Reduce an angle to the `[0, 2π)` interval.
#[inline]
pub fn normalize_two_pi(a: Radian) -> Radian {
    a.rem_euclid(DPI)
}

/// Reduce an angle to the `(-π, π]` interval.
#[inline]
pub fn normalize_pm_pi(a: Radian) -> Radian {
    let v = a.rem_euclid(DPI);
    if v > PI {
        v - DPI
    } else {
        v
    }
}

/// A position on the celestial sphere: longitude-like angle, latitude-like
/// angle and a radial distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Longitude-like angle in radians (right ascension, azimuth reference, …)
    pub lon: Radian,
    /// Latitude-like angle in radians (declination, altitude, …)
    pub lat: Radian,
    /// Radial distance, unit chosen by the caller
    pub r: f64,
}

impl Spherical {
    pub fn new(lon: Radian, lat: Radian, r: f64) -> Self {
        Spherical { lon, lat, r }
    }

    /// Convert to Cartesian coordinates in the same distance unit.
    pub fn to_cartesian(&self) -> Vector3<f64> {
        let (sin_lat, cos_lat) = self.lat.sin_cos();
        let (sin_lon, cos_lon) = self.lon.sin_cos();
        Vector3::new(
            self.r * cos_lat * cos_lon,
            self.r * cos_lat * sin_lon,
            self.r * sin_lat,
        )
    }

    /// Convert from Cartesian coordinates. The longitude comes out in
    /// `[0, 2π)` and the latitude in `[-π/2, π/2]`.
    pub fn from_cartesian(xyz: &Vector3<f64>) -> Self {
        let r = xyz.norm();
        Spherical {
            lon: normalize_two_pi(xyz.y.atan2(xyz.x)),
            lat: (xyz.z / r).asin(),
            r,
        }
    }

    /// Rotate the pole of the coordinate frame about the x-axis by `e`
    /// (the obliquity-style rotation used for ecliptic ↔ equatorial and
    /// equatorial ↔ horizontal conversions). The radius passes through.
    pub fn rotated(&self, e: Radian) -> Self {
        let (sin_lon, cos_lon) = self.lon.sin_cos();
        let (sin_lat, cos_lat) = self.lat.sin_cos();
        let (sin_e, cos_e) = e.sin_cos();

        let lon = (sin_lon * cos_e - self.lat.tan() * sin_e).atan2(cos_lon);
        let lat = (cos_e * sin_lat + sin_e * cos_lat * sin_lon).asin();
        Spherical {
            lon: normalize_two_pi(lon),
            lat,
            r: self.r,
        }
    }
}
