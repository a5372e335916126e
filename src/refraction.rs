//! Atmospheric refraction corrections.
//!
//! Two closed-form empirical approximations (Bennett-style tangent formulas):
//! one parameterized by the true altitude, one by the apparent altitude. Both
//! are pure and total over finite inputs; the tangent singularities of the
//! empirical coefficients are not guarded and propagate as non-finite values.

use crate::constants::Radian;

/// Refraction from the **true** altitude `h` (radians). Add the result to the
/// true altitude to obtain the apparent altitude.
#[inline]
pub fn refraction_from_true(h: Radian) -> Radian {
    0.0002967 / (h + 0.003138 / (h + 0.08919)).tan()
}

/// Refraction from the **apparent** altitude `h0` (radians). The result is
/// negative: add it to the apparent altitude to recover the true altitude.
#[inline]
pub fn refraction_from_apparent(h0: Radian) -> Radian {
    -0.0002909 / (h0 + 0.002227 / (h0 + 0.07679)).tan()
}

#[cfg(test)]
mod refraction_tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_horizon_values() {
        // Exact-formula regression targets, not astronomical plausibility:
        // 0.0002967 / tan(0.003138 / 0.08919) and the apparent-altitude twin.
        assert!((refraction_from_true(0.0) - 0.00843).abs() < 5e-5);
        assert!((refraction_from_apparent(0.0) + 0.010028).abs() < 1e-4);
    }

    #[test]
    fn test_monotone_decrease_toward_zenith() {
        let mut prev = refraction_from_true(0.0);
        let mut h = 0.05;
        while h < 1.5 {
            let r = refraction_from_true(h);
            assert!(r < prev, "refraction not decreasing at h = {h}");
            assert!(r > -1e-5);
            prev = r;
            h += 0.05;
        }
    }

    #[test]
    fn test_apparent_magnitude_decreases() {
        let mut prev = refraction_from_apparent(0.0).abs();
        let mut h = 0.05;
        while h < 1.5 {
            let r = refraction_from_apparent(h).abs();
            assert!(r < prev, "refraction magnitude not decreasing at h = {h}");
            prev = r;
            h += 0.05;
        }
    }

    #[test]
    fn test_negligible_near_zenith() {
        assert!(refraction_from_true(FRAC_PI_2 - 0.01).abs() < 1e-5);
        assert!(refraction_from_apparent(FRAC_PI_2 - 0.01).abs() < 1e-5);
    }
}
