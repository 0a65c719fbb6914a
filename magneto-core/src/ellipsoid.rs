//! Reference ellipsoid parameters.
//!
//! | Field | Meaning | WGS84 |
//! |-------|---------|-------|
//! | `a` | semi-major (equatorial) axis, m | 6 378 137.0 |
//! | `b` | semi-minor (polar) axis, m | 6 356 752.314 245 |
//! | `f` | flattening `(a - b) / a` | 1 / 298.257 223 563 |
//! | `e_sq` | first eccentricity squared `f(2 - f)` | 6.694 379 990 14e-3 |

use crate::constants::{WGS84_FLATTENING, WGS84_SEMI_MAJOR_AXIS};
use crate::Real;

/// An oblate reference ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipsoid<T> {
    pub a: T,
    pub b: T,
    pub f: T,
    pub e_sq: T,
}

impl<T: Real> Ellipsoid<T> {
    /// The WGS84 ellipsoid, in the working precision.
    ///
    /// ```
    /// use magneto_core::Ellipsoid;
    ///
    /// let wgs84 = Ellipsoid::<f64>::wgs84();
    /// assert_eq!(wgs84.a, 6_378_137.0);
    /// assert!((wgs84.e_sq - 0.006_694_379_990_14).abs() < 1e-14);
    /// ```
    pub fn wgs84() -> Self {
        Self::from_flattening(
            T::from_f64(WGS84_SEMI_MAJOR_AXIS),
            T::from_f64(WGS84_FLATTENING),
        )
    }

    /// Builds an ellipsoid from its semi-major axis and flattening.
    pub fn from_flattening(a: T, f: T) -> Self {
        Self {
            a,
            b: a * (T::ONE - f),
            f,
            e_sq: f * (T::TWO - f),
        }
    }

    /// Builds an ellipsoid from its two semi-axes.
    ///
    /// `a = 0` produces `f = 0` rather than NaN.
    pub fn from_axes(a: T, b: T) -> Self {
        let f = if a == T::ZERO { T::ZERO } else { (a - b) / a };
        Self {
            a,
            b,
            f,
            e_sq: f * (T::TWO - f),
        }
    }

    /// Prime-vertical radius of curvature `a / sqrt(1 - e² sin²φ)`.
    ///
    /// Returns `None` if the denominator is zero or the result is not finite.
    #[inline]
    pub fn prime_vertical_radius(&self, sin_lat: T) -> Option<T> {
        let denom = (T::ONE - self.e_sq * sin_lat * sin_lat).sqrt();
        if denom == T::ZERO || !denom.is_finite() {
            return None;
        }
        let n = self.a / denom;
        n.is_finite().then_some(n)
    }
}

impl<T: Real> Default for Ellipsoid<T> {
    fn default() -> Self {
        Self::wgs84()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{WGS84_ECCENTRICITY_SQUARED, WGS84_SEMI_MINOR_AXIS};

    #[test]
    fn test_wgs84_matches_constants() {
        let e = Ellipsoid::<f64>::wgs84();
        assert_eq!(e.b, WGS84_SEMI_MINOR_AXIS);
        assert_eq!(e.e_sq, WGS84_ECCENTRICITY_SQUARED);
        assert_eq!(Ellipsoid::default(), e);
    }

    #[test]
    fn test_from_axes_agrees_with_flattening() {
        let e = Ellipsoid::<f64>::from_axes(WGS84_SEMI_MAJOR_AXIS, WGS84_SEMI_MINOR_AXIS);
        let wgs84 = Ellipsoid::<f64>::wgs84();
        assert!((e.f - wgs84.f).abs() < 1e-15);
        assert!((e.e_sq - wgs84.e_sq).abs() < 1e-15);
    }

    #[test]
    fn test_sphere_and_degenerate_axes() {
        let sphere = Ellipsoid::<f64>::from_axes(6_371_200.0, 6_371_200.0);
        assert_eq!(sphere.f, 0.0);
        assert_eq!(sphere.e_sq, 0.0);

        let empty = Ellipsoid::<f64>::from_axes(0.0, 0.0);
        assert_eq!(empty.f, 0.0);
        assert_eq!(empty.e_sq, 0.0);
    }

    #[test]
    fn test_prime_vertical_radius() {
        let e = Ellipsoid::<f64>::wgs84();
        assert_eq!(e.prime_vertical_radius(0.0), Some(e.a));

        let polar = e.prime_vertical_radius(1.0).unwrap();
        assert!((polar - e.a * e.a / e.b).abs() < 1e-6);

        let degenerate = Ellipsoid::<f64>::from_flattening(1.0, 1.0);
        assert_eq!(degenerate.e_sq, 1.0);
        assert_eq!(degenerate.prime_vertical_radius(1.0), None);
    }

    #[test]
    fn test_single_precision_wgs84() {
        let e = Ellipsoid::<f32>::wgs84();
        assert_eq!(e.a, 6_378_137.0_f32);
        assert!((e.e_sq - 0.006_694_38).abs() < 1e-7);
    }
}
