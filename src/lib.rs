//! # skyangle
//!
//! Positional-astronomy formula library: coordinate-frame conversion,
//! angular separation, atmospheric refraction, topocentric parallax, lunar
//! apparent size and illumination, and iterative apsis/node finders driven
//! by an injected periodic-series ephemeris.
//!
//! All angles are radians unless a function documents otherwise; epochs are
//! Julian centuries since J2000.0. The closed-form functions are total over
//! finite inputs; only the apsis/node finders can fail, returning
//! [`errors::SkyAngleError`] when a refinement degenerates.

pub mod apsis;
pub mod constants;
pub mod errors;
pub mod frames;
pub mod moon;
pub mod parallax;
pub mod refraction;
pub mod sidereal;
pub mod spherical;
