//! Apsis and node finders.
//!
//! Epochs of lunar perigee/apogee, lunar node crossings and Earth
//! perihelion/aphelion, found by seeding at the nearest mean event time and
//! refining through a fixed schedule of three-sample quadratic-interpolation
//! passes of decreasing step size and increasing series precision.
//!
//! The periodic-series ephemeris itself is injected through the
//! [`LunarEphemeris`] and [`SolarDistance`] traits, so the refinement can be
//! exercised against synthetic series with known analytic events.

use crate::constants::{JulianCentury, Kilometer, Radian, JULIAN_CENTURY_DAYS};
use crate::errors::SkyAngleError;

/// Truncation selector for a periodic-series evaluation.
///
/// Coarse refinement passes sum only the leading terms; the final pass sums
/// the full series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Sum roughly this many leading periodic terms
    Terms(u32),
    /// Sum every term of the series
    Full,
}

/// Lunar periodic-series evaluator (the three coordinate channels of a
/// semi-analytic lunar theory). Implementations must be deterministic and
/// continuous in `t` for the Newton-style refinement to converge.
pub trait LunarEphemeris {
    /// Geocentric ecliptic longitude in radians.
    fn longitude(&self, t: JulianCentury, precision: Precision) -> Radian;
    /// Geocentric ecliptic latitude in radians.
    fn latitude(&self, t: JulianCentury, precision: Precision) -> Radian;
    /// Geocentric distance in kilometers.
    fn distance(&self, t: JulianCentury, precision: Precision) -> Kilometer;
}

/// Heliocentric Earth distance evaluator (the radial channel of a planetary
/// theory), in astronomical units.
pub trait SolarDistance {
    fn distance(&self, t: JulianCentury, precision: Precision) -> f64;
}

/// Which of the two distance extrema to find.
///
/// `Nearest` is perigee for [`lunar_apsis`] and perihelion for
/// [`earth_apsis`]; `Farthest` is apogee / aphelion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApsisKind {
    Nearest,
    Farthest,
}

/// Which node crossing to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Ascending,
    Descending,
}

/// A refined distance extremum: epoch in Julian centuries and the extremal
/// distance in the unit of the driving series (km for the Moon, AU for Earth).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApsisEvent {
    pub t: JulianCentury,
    pub distance: f64,
}

/// A refined node crossing: epoch in Julian centuries and the ecliptic
/// longitude of the body at that epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeEvent {
    pub t: JulianCentury,
    pub lon: Radian,
}

/// Nearest occurrence of a mean periodic event: round `(t − phase) / period`
/// to the nearest integer and reconstruct the epoch.
fn nearest_mean_event(t: JulianCentury, period: f64, phase: f64) -> JulianCentury {
    phase + period * ((t - phase) / period + 0.5).floor()
}

/// Three-sample quadratic refinement of a series extremum.
///
/// Each pass evaluates the series at `t − dt, t, t + dt`, fits a parabola and
/// steps `t` to its vertex. After the last pass the extremal value itself is
/// corrected to second order from the same three samples. The pass count is
/// fixed; a locally flat series makes the vertex step non-finite and the
/// caller turns that into an error.
fn refine_extremum<F>(
    seed: JulianCentury,
    schedule: &[(f64, Precision)],
    series: F,
) -> (JulianCentury, f64)
where
    F: Fn(JulianCentury, Precision) -> f64,
{
    let mut t = seed;
    let (mut r1, mut r2, mut r3) = (0.0, 0.0, 0.0);
    for &(dt, precision) in schedule {
        r1 = series(t - dt, precision);
        r2 = series(t, precision);
        r3 = series(t + dt, precision);
        t += (r1 - r3) / (r1 + r3 - 2.0 * r2) * dt / 2.0;
    }
    r2 += (r1 - r3) / (r1 + r3 - 2.0 * r2) * (r3 - r1) / 8.0;
    (t, r2)
}

fn finite_apsis(
    what: &'static str,
    t: JulianCentury,
    distance: f64,
) -> Result<ApsisEvent, SkyAngleError> {
    if t.is_finite() && distance.is_finite() {
        Ok(ApsisEvent { t, distance })
    } else {
        Err(SkyAngleError::NonFiniteRefinement(what))
    }
}

/// Find the lunar perigee or apogee nearest to the epoch `t` (Julian
/// centuries TT).
///
/// Mean anomalistic period 27.55454988 days; three refinement passes at
/// 1 d / 0.5 d / 20 min steps with 10 / 20 / all series terms.
pub fn lunar_apsis<E: LunarEphemeris + ?Sized>(
    eph: &E,
    t: JulianCentury,
    kind: ApsisKind,
) -> Result<ApsisEvent, SkyAngleError> {
    let period = 27.55454988 / JULIAN_CENTURY_DAYS;
    let phase = match kind {
        ApsisKind::Nearest => -10.3302,
        ApsisKind::Farthest => 3.4471,
    } / JULIAN_CENTURY_DAYS;
    let schedule = [
        (1.0 / JULIAN_CENTURY_DAYS, Precision::Terms(10)),
        (0.5 / JULIAN_CENTURY_DAYS, Precision::Terms(20)),
        (1200.0 / 86400.0 / JULIAN_CENTURY_DAYS, Precision::Full),
    ];

    let seed = nearest_mean_event(t, period, phase);
    let (t, r) = refine_extremum(seed, &schedule, |t, p| eph.distance(t, p));
    finite_apsis("lunar apsis", t, r)
}

/// Find the Earth perihelion or aphelion nearest to the epoch `t` (Julian
/// centuries TT).
///
/// Mean anomalistic period 365.25963586 days; three refinement passes at
/// 3 d / 0.2 d / 0.01 d steps with 10 / 80 / all series terms.
pub fn earth_apsis<E: SolarDistance + ?Sized>(
    eph: &E,
    t: JulianCentury,
    kind: ApsisKind,
) -> Result<ApsisEvent, SkyAngleError> {
    let period = 365.25963586 / JULIAN_CENTURY_DAYS;
    let phase = match kind {
        ApsisKind::Nearest => 1.7,
        ApsisKind::Farthest => 184.5,
    } / JULIAN_CENTURY_DAYS;
    let schedule = [
        (3.0 / JULIAN_CENTURY_DAYS, Precision::Terms(10)),
        (0.2 / JULIAN_CENTURY_DAYS, Precision::Terms(80)),
        (0.01 / JULIAN_CENTURY_DAYS, Precision::Full),
    ];

    let seed = nearest_mean_event(t, period, phase);
    let (t, r) = refine_extremum(seed, &schedule, |t, p| eph.distance(t, p));
    finite_apsis("earth apsis", t, r)
}

/// Find the lunar ascending or descending node crossing nearest to the epoch
/// `t` (Julian centuries TT).
///
/// Mean draconic period 27.21222082 days. Two Newton passes on the ecliptic
/// latitude (0.5 d step with 10 terms, then 0.05 d with 40), followed by one
/// full-precision latitude evaluation reusing the last slope estimate. The
/// returned longitude is the full-precision series longitude at the refined
/// epoch.
pub fn lunar_node<E: LunarEphemeris + ?Sized>(
    eph: &E,
    t: JulianCentury,
    kind: NodeKind,
) -> Result<NodeEvent, SkyAngleError> {
    let period = 27.21222082 / JULIAN_CENTURY_DAYS;
    let phase = match kind {
        NodeKind::Ascending => 21.0,
        NodeKind::Descending => 35.0,
    } / JULIAN_CENTURY_DAYS;

    let mut t = nearest_mean_event(t, period, phase);
    let mut v = 0.0;
    for (dt, precision) in [
        (0.5 / JULIAN_CENTURY_DAYS, Precision::Terms(10)),
        (0.05 / JULIAN_CENTURY_DAYS, Precision::Terms(40)),
    ] {
        let w = eph.latitude(t, precision);
        let w2 = eph.latitude(t + dt, precision);
        v = (w2 - w) / dt;
        t -= w / v;
    }
    let w = eph.latitude(t, Precision::Full);
    t -= w / v;

    if !t.is_finite() {
        return Err(SkyAngleError::NonFiniteRefinement("lunar node"));
    }
    let lon = eph.longitude(t, Precision::Full);
    if !lon.is_finite() {
        return Err(SkyAngleError::NonFiniteRefinement("lunar node"));
    }
    Ok(NodeEvent { t, lon })
}
