//! Coordinate-frame conversion and angular relations between positions on
//! the celestial sphere.
//!
//! The equatorial → horizontal conversion, the great-circle separation and
//! the parallactic angle all live here. Everything is a pure function over
//! [`Spherical`] values or plain radian angles.

use std::f64::consts::FRAC_PI_2;

use crate::constants::Radian;
use crate::spherical::{normalize_pm_pi, normalize_two_pi, Spherical};

/// Small-angle threshold (radians) below which the flat-sky approximation of
/// the separation is used instead of the spherical law of cosines.
const FLAT_SKY_LIMIT: Radian = 1e-3;

/// Convert an equatorial position to horizontal coordinates.
///
/// Arguments
/// ---------
/// * `eq`: geocentric or topocentric equatorial position (right ascension,
///   declination, distance); the distance passes through unchanged.
/// * `site_lon`: observer longitude in radians, east positive.
/// * `site_lat`: observer geographic latitude in radians.
/// * `gst`: Greenwich sidereal time as an angle in radians.
///
/// Return
/// ------
/// * The horizontal position (azimuth in `[0, 2π)`, altitude, distance).
pub fn equatorial_to_horizontal(
    eq: &Spherical,
    site_lon: Radian,
    site_lat: Radian,
    gst: Radian,
) -> Spherical {
    // Re-reference the longitude to the local hour-angle frame, then swap
    // the pole from the celestial pole to the zenith.
    let a = Spherical::new(eq.lon + FRAC_PI_2 - gst - site_lon, eq.lat, eq.r);
    let a = a.rotated(FRAC_PI_2 - site_lat);
    Spherical {
        lon: normalize_two_pi(FRAC_PI_2 - a.lon),
        lat: a.lat,
        r: a.r,
    }
}

/// Angular separation between two positions on the sphere, in `[0, π]`.
///
/// When both the reduced longitude difference and the latitude difference are
/// below [`FLAT_SKY_LIMIT`], a flat-sky approximation (longitude difference
/// scaled by the cosine of the mean latitude) avoids the loss of precision of
/// `acos` near 1.
pub fn angular_separation(lon1: Radian, lat1: Radian, lon2: Radian, lat2: Radian) -> Radian {
    let d_lon = normalize_pm_pi(lon1 - lon2);
    let d_lat = lat1 - lat2;
    if d_lon.abs() < FLAT_SKY_LIMIT && d_lat.abs() < FLAT_SKY_LIMIT {
        let d_lon = d_lon * ((lat1 + lat2) / 2.0).cos();
        (d_lon * d_lon + d_lat * d_lat).sqrt()
    } else {
        // Rounding can push the cosine a ulp past ±1 for antipodal points.
        (lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * d_lon.cos())
            .clamp(-1.0, 1.0)
            .acos()
    }
}

/// Parallactic angle of a celestial position, in `[0, 2π)`.
///
/// `H = gst + site_lon − ra` is the hour angle of the target. Undefined at
/// `site_lat = ±π/2` (tangent singularity); the caller must avoid exact pole
/// latitudes.
pub fn parallactic_angle(
    gst: Radian,
    site_lon: Radian,
    site_lat: Radian,
    ra: Radian,
    dec: Radian,
) -> Radian {
    let h = gst + site_lon - ra;
    normalize_two_pi(
        h.sin()
            .atan2(site_lat.tan() * dec.cos() - dec.sin() * h.cos()),
    )
}

#[cfg(test)]
mod frames_tests {
    use super::*;
    use std::f64::consts::PI;

    /// Undo `equatorial_to_horizontal` by applying the rotations in reverse.
    fn horizontal_to_equatorial(
        hz: &Spherical,
        site_lon: f64,
        site_lat: f64,
        gst: f64,
    ) -> Spherical {
        let a = Spherical::new(FRAC_PI_2 - hz.lon, hz.lat, hz.r);
        let a = a.rotated(-(FRAC_PI_2 - site_lat));
        Spherical {
            lon: normalize_two_pi(a.lon - (FRAC_PI_2 - gst - site_lon)),
            lat: a.lat,
            r: a.r,
        }
    }

    #[test]
    fn test_frame_round_trip() {
        let (site_lon, site_lat, gst) = (0.5, 0.9, 2.0);
        let eq = Spherical::new(1.2, 0.3, 1.0);

        let hz = equatorial_to_horizontal(&eq, site_lon, site_lat, gst);
        let back = horizontal_to_equatorial(&hz, site_lon, site_lat, gst);

        assert!((normalize_pm_pi(back.lon - eq.lon)).abs() < 1e-9);
        assert!((back.lat - eq.lat).abs() < 1e-9);
        assert_eq!(back.r, eq.r);
    }

    #[test]
    fn test_zenith_target() {
        // A target on the meridian (hour angle 0) with declination equal to
        // the site latitude sits at the zenith.
        let (site_lon, site_lat, gst) = (0.5, 0.9, 2.0);
        let eq = Spherical::new(gst + site_lon, site_lat, 1.0);
        let hz = equatorial_to_horizontal(&eq, site_lon, site_lat, gst);
        assert!((hz.lat - FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn test_separation_identity_and_symmetry() {
        assert_eq!(angular_separation(1.1, -0.4, 1.1, -0.4), 0.0);

        let s12 = angular_separation(0.2, 0.5, 2.9, -0.8);
        let s21 = angular_separation(2.9, -0.8, 0.2, 0.5);
        assert!((s12 - s21).abs() < 1e-12);
        assert!(s12 > 0.0 && s12 <= PI);
    }

    #[test]
    fn test_separation_antipodal() {
        let (lon, lat) = (0.7, 0.25);
        let s = angular_separation(lon, lat, lon + PI, -lat);
        assert!((s - PI).abs() < 1e-12);
    }

    #[test]
    fn test_separation_small_angle_path() {
        // Both offsets below the flat-sky limit: the fast path must agree
        // with the law of cosines.
        let (lon1, lat1) = (0.1000, 0.2000);
        let (lon2, lat2) = (0.1004, 0.2003);
        let fast = angular_separation(lon1, lat1, lon2, lat2);
        let exact = (lat1.sin() * lat2.sin()
            + lat1.cos() * lat2.cos() * (lon1 - lon2).cos())
        .acos();
        assert!((fast - exact).abs() < 1e-7);
        assert!(fast > 0.0);
    }

    #[test]
    fn test_separation_wraps_longitude() {
        // Longitudes just either side of 0/2π are close, not far apart.
        let s = angular_separation(0.0001, 0.0, 2.0 * PI - 0.0001, 0.0);
        assert!(s < 1e-3);
    }

    #[test]
    fn test_parallactic_angle_on_meridian() {
        // Hour angle 0 with the target south of the zenith: angle is 0.
        let q = parallactic_angle(2.0, 0.5, 0.9, 2.5, 0.3);
        assert!(q.abs() < 1e-12);
    }

    #[test]
    fn test_parallactic_angle_mirror() {
        // q(-H) = 2π − q(H): sin is odd, cos even in the hour angle.
        let (site_lat, dec) = (0.9, 0.3);
        let q_east = parallactic_angle(1.0, 0.0, site_lat, 0.7, dec);
        let q_west = parallactic_angle(0.7, 0.0, site_lat, 1.0, dec);
        assert!((q_east + q_west - 2.0 * PI).abs() < 1e-12);
    }
}
