//! Greenwich mean sidereal time.

use crate::constants::{Radian, ARCSEC_PER_RAD, DPI, JULIAN_CENTURY_DAYS};

/// Greenwich mean sidereal time as an angle in radians (not normalized).
///
/// Arguments
/// ---------
/// * `days_ut`: days elapsed since J2000.0 in UT.
/// * `delta_t_days`: ΔT = TT − UT in days, added to form the TT argument of
///   the precession polynomial.
///
/// IAU 2000 expression: the linear Earth-rotation-angle term in UT plus a
/// quartic precession polynomial in Julian centuries TT.
pub fn mean_sidereal_time(days_ut: f64, delta_t_days: f64) -> Radian {
    let t = (days_ut + delta_t_days) / JULIAN_CENTURY_DAYS;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    DPI * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * days_ut)
        + (0.014506 + 4612.15739966 * t + 1.39667721 * t2 - 0.00009344 * t3
            + 0.00001882 * t4)
            / ARCSEC_PER_RAD
}
