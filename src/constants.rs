//! # Constants and type definitions for skyangle
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `skyangle` library.
//!
//! ## Overview
//!
//! - Geophysical constants (Earth radius, polar flattening)
//! - Astronomical constants (AU length, lunar apparent-radius scale)
//! - Angle conversions (radians ↔ arcseconds)
//! - Core type aliases used across the crate
//!
//! These definitions are used by all main modules, including the frame converter,
//! the parallax corrector and the apsis/node finders.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU_KM: f64 = 1.495_978_706_91e8;

/// Earth equatorial radius in kilometers (IAU 2009)
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.1366;

/// Earth polar-to-equatorial axis ratio (oblateness factor)
pub const EARTH_POLAR_FLATTENING: f64 = 0.996_647_19;

/// Arcseconds per radian
pub const ARCSEC_PER_RAD: f64 = 180.0 * 3600.0 / std::f64::consts::PI;

/// Moon-to-Earth radius ratio (penumbral value)
pub const MOON_EARTH_RADIUS_RATIO: f64 = 0.2725076;

/// Lunar apparent-radius scale in arcsec·km: divide by the geocentric
/// distance in kilometers to obtain an angular radius in arcseconds
pub const MOON_APPARENT_RADIUS: f64 =
    MOON_EARTH_RADIUS_RATIO * EARTH_EQUATORIAL_RADIUS_KM * 1.0000036 * ARCSEC_PER_RAD;

/// Number of days in a Julian century
pub const JULIAN_CENTURY_DAYS: f64 = 36_525.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Time in Julian centuries since J2000.0 (TT)
pub type JulianCentury = f64;
