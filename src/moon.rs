//! Lunar apparent size and illumination.

use crate::constants::{
    ArcSec, JulianCentury, Kilometer, Radian, EARTH_EQUATORIAL_RADIUS_KM, MOON_APPARENT_RADIUS,
};
use std::f64::consts::PI;

/// Apparent (topocentric) angular radius of the Moon, in arcseconds.
///
/// Arguments
/// ---------
/// * `r`: geocentric Earth–Moon distance in kilometers.
/// * `h`: topocentric altitude of the Moon in radians.
///
/// The `sin(h)·R_earth/r` term is the first-order correction for the observer
/// sitting up to one Earth radius closer to the Moon than the geocenter.
#[inline]
pub fn moon_apparent_radius(r: Kilometer, h: Radian) -> ArcSec {
    MOON_APPARENT_RADIUS / r * (1.0 + h.sin() * EARTH_EQUATORIAL_RADIUS_KM / r)
}

/// Illuminated fraction of the lunar disk, in `[0, 1]`.
///
/// Closed-form series in the mean elongation `D`, the solar mean anomaly `M`
/// and the lunar mean anomaly `M'` (Meeus, Astronomical Algorithms ch. 48).
/// `t` is in Julian centuries since J2000.0 (TT).
pub fn moon_illuminated_fraction(t: JulianCentury) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let dm = PI / 180.0;

    let d = (297.8502042 + 445267.1115168 * t - 0.0016300 * t2 + t3 / 545868.0
        - t4 / 113065000.0)
        * dm;
    let m = (357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24490000.0) * dm;
    let mm = (134.9634114 + 477198.8676313 * t + 0.0089970 * t2 + t3 / 69699.0
        - t4 / 14712000.0)
        * dm;

    let a = PI - d
        + (-6.289 * mm.sin() + 2.100 * m.sin()
            - 1.274 * (2.0 * d - mm).sin()
            - 0.658 * (2.0 * d).sin()
            - 0.214 * (2.0 * mm).sin()
            - 0.110 * d.sin())
            * dm;

    (1.0 + a.cos()) / 2.0
}
