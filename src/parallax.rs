//! Topocentric parallax correction.
//!
//! Shifts a geocentric equatorial position to the observer's site using an
//! oblate-Earth model of the observer's geocentric position. The correction
//! is a pure function: callers that want in-place semantics assign the result
//! back themselves.

use crate::constants::{
    Kilometer, Radian, AU_KM, EARTH_EQUATORIAL_RADIUS_KM, EARTH_POLAR_FLATTENING,
};
use crate::spherical::Spherical;

/// Unit of the radial component of a position handed to [`topocentric`].
///
/// The distance unit is carried explicitly instead of being guessed from the
/// magnitude of the radial component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    /// Radial component in astronomical units (planets, the Sun)
    Au,
    /// Radial component in kilometers (the Moon)
    Kilometers,
}

impl DistanceUnit {
    /// Scale factor from this unit to kilometers, the working unit of the
    /// observer-offset subtraction.
    fn to_km(self) -> f64 {
        match self {
            DistanceUnit::Au => AU_KM,
            DistanceUnit::Kilometers => 1.0,
        }
    }
}

/// Correct a geocentric equatorial position for topocentric parallax.
///
/// Arguments
/// ---------
/// * `geo`: geocentric equatorial position; the radial component is in `unit`.
/// * `unit`: unit of `geo.r` (restored on output).
/// * `hour_angle`: hour angle of the target at the site, in radians.
/// * `site_lat`: geographic latitude of the site, in radians.
/// * `height_km`: site altitude above sea level, in kilometers.
///
/// Return
/// ------
/// * The topocentric position: the direction and distance of the target as
///   seen from the site rather than from the geocenter.
pub fn topocentric(
    geo: &Spherical,
    unit: DistanceUnit,
    hour_angle: Radian,
    site_lat: Radian,
    height_km: Kilometer,
) -> Spherical {
    let scale = unit.to_km();
    let target = Spherical::new(geo.lon, geo.lat, geo.r * scale);

    // Observer's geocentric position on the oblate Earth: u is the reduced
    // (parametric) latitude, r0/z0 the equatorial-plane and polar-axis
    // projections of the site's position vector.
    let f = EARTH_POLAR_FLATTENING;
    let u = (f * site_lat.tan()).atan();
    let r0 = EARTH_EQUATORIAL_RADIUS_KM * u.cos() + height_km * site_lat.cos();
    let z0 = EARTH_EQUATORIAL_RADIUS_KM * u.sin() * f + height_km * site_lat.sin();
    let g = target.lon + hour_angle;

    let mut s = target.to_cartesian();
    s.x -= r0 * g.cos();
    s.y -= r0 * g.sin();
    s.z -= z0;

    let mut out = Spherical::from_cartesian(&s);
    out.r /= scale;
    out
}
