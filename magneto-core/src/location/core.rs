//! Position types: geodetic, Earth-centered Cartesian and geocentric spherical.
//!
//! All three are plain value types with public fields. Angles are degrees, lengths metres.
//!
//! | Type | Fields | Frame |
//! |------|--------|-------|
//! | [`GeodeticCoords`] | latitude, longitude, height | reference ellipsoid |
//! | [`EcefPosition`] | x, y, z | Earth-centered, Earth-fixed |
//! | [`SphericalCoords`] | radius, polar, azimuth | geocentric sphere |
//!
//! `polar` in [`SphericalCoords`] is the geocentric *latitude* (angle above the equatorial
//! plane), not the colatitude. It differs from geodetic latitude by up to about 0.19° at
//! mid-latitudes.
//!
//! # Example
//!
//! ```
//! use magneto_core::GeodeticCoords;
//!
//! let boulder = GeodeticCoords::try_new(40.015, -105.27, 1655.0)?;
//! assert!(boulder.is_valid());
//!
//! assert!(GeodeticCoords::try_new(91.0, 0.0, 0.0).is_err());
//! # Ok::<(), magneto_core::MagnetoError>(())
//! ```

use std::fmt;

use crate::errors::{MagnetoError, MagnetoResult};
use crate::{Real, Vector3};

/// Position relative to the reference ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeodeticCoords<T> {
    /// Geodetic latitude in degrees, north positive.
    pub latitude: T,
    /// Longitude in degrees, east positive.
    pub longitude: T,
    /// Height above the ellipsoid in metres.
    pub height: T,
}

impl<T: Real> GeodeticCoords<T> {
    /// Creates coordinates without validation.
    #[inline]
    pub fn new(latitude: T, longitude: T, height: T) -> Self {
        Self {
            latitude,
            longitude,
            height,
        }
    }

    /// Creates coordinates, rejecting non-finite values and latitudes outside [-90, 90].
    pub fn try_new(latitude: T, longitude: T, height: T) -> MagnetoResult<Self> {
        let coords = Self::new(latitude, longitude, height);
        if !latitude.is_finite() || !longitude.is_finite() || !height.is_finite() {
            return Err(MagnetoError::invalid_coordinate(format!(
                "geodetic coordinates must be finite: {}",
                coords
            )));
        }
        if !coords.is_valid() {
            return Err(MagnetoError::invalid_coordinate(format!(
                "latitude {} outside [-90, 90] degrees",
                latitude
            )));
        }
        Ok(coords)
    }

    /// Latitude within [-90, 90] and every field finite.
    ///
    /// Longitude is not range-checked: it only enters through trigonometric functions.
    pub fn is_valid(&self) -> bool {
        let ninety = T::from_f64(90.0);
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.height.is_finite()
            && self.latitude >= -ninety
            && self.latitude <= ninety
    }
}

impl<T: Real> fmt::Display for GeodeticCoords<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lat {:.6}°, lon {:.6}°, h {:.3} m",
            self.latitude, self.longitude, self.height
        )
    }
}

/// Earth-centered, Earth-fixed Cartesian position in metres.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EcefPosition<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Real> EcefPosition<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Distance from the Earth's center.
    #[inline]
    pub fn norm(&self) -> T {
        self.as_vector().magnitude()
    }

    #[inline]
    pub fn as_vector(&self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn is_finite(&self) -> bool {
        self.as_vector().is_finite()
    }
}

impl<T: Real> From<Vector3<T>> for EcefPosition<T> {
    fn from(v: Vector3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl<T: Real> From<EcefPosition<T>> for Vector3<T> {
    fn from(p: EcefPosition<T>) -> Self {
        p.as_vector()
    }
}

/// Geocentric spherical position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SphericalCoords<T> {
    /// Distance from the Earth's center in metres.
    pub radius: T,
    /// Geocentric latitude in degrees.
    pub polar: T,
    /// Longitude in degrees.
    pub azimuth: T,
}

impl<T: Real> SphericalCoords<T> {
    #[inline]
    pub fn new(radius: T, polar: T, azimuth: T) -> Self {
        Self {
            radius,
            polar,
            azimuth,
        }
    }

    /// Non-negative finite radius and polar angle within [-90, 90].
    pub fn is_valid(&self) -> bool {
        let ninety = T::from_f64(90.0);
        self.radius.is_finite()
            && self.polar.is_finite()
            && self.azimuth.is_finite()
            && self.radius >= T::ZERO
            && self.polar >= -ninety
            && self.polar <= ninety
    }

    /// Geocentric colatitude in degrees (`90 - polar`).
    #[inline]
    pub fn colatitude(&self) -> T {
        T::from_f64(90.0) - self.polar
    }
}

impl<T: Real> fmt::Display for SphericalCoords<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "r {:.3} m, polar {:.6}°, azimuth {:.6}°",
            self.radius, self.polar, self.azimuth
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geodetic_validity() {
        assert!(GeodeticCoords::new(90.0, 0.0, 0.0).is_valid());
        assert!(GeodeticCoords::new(-90.0, 270.0, -400.0).is_valid());
        assert!(!GeodeticCoords::new(90.000_001, 0.0, 0.0).is_valid());
        assert!(!GeodeticCoords::new(0.0, f64::NAN, 0.0).is_valid());
        assert!(!GeodeticCoords::new(0.0_f32, 0.0, f32::INFINITY).is_valid());
    }

    #[test]
    fn test_try_new_errors() {
        let err = GeodeticCoords::try_new(-91.0, 0.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("latitude -91 outside [-90, 90]"));

        let err = GeodeticCoords::try_new(0.0, f64::NAN, 0.0).unwrap_err();
        assert!(err.to_string().contains("must be finite"));

        let ok = GeodeticCoords::try_new(45.0, 7.5, 100.0).unwrap();
        assert_eq!(ok, GeodeticCoords::new(45.0, 7.5, 100.0));
    }

    #[test]
    fn test_default_is_zero() {
        let g = GeodeticCoords::<f64>::default();
        assert_eq!((g.latitude, g.longitude, g.height), (0.0, 0.0, 0.0));
        assert_eq!(EcefPosition::<f32>::default().norm(), 0.0);
        assert_eq!(SphericalCoords::<f64>::default().radius, 0.0);
    }

    #[test]
    fn test_ecef_vector_conversions() {
        let p = EcefPosition::new(3.0, 4.0, 12.0);
        assert_eq!(p.norm(), 13.0);

        let v: Vector3<f64> = p.into();
        assert_eq!(EcefPosition::from(v), p);
        assert!(p.is_finite());
    }

    #[test]
    fn test_spherical_validity_and_colatitude() {
        let s = SphericalCoords::new(6_371_200.0, 30.0, -45.0);
        assert!(s.is_valid());
        assert_eq!(s.colatitude(), 60.0);

        assert!(!SphericalCoords::new(-1.0, 0.0, 0.0).is_valid());
        assert!(!SphericalCoords::new(1.0, 95.0, 0.0).is_valid());
    }

    #[test]
    fn test_display() {
        let g = GeodeticCoords::new(80.0, 0.0, 0.0);
        assert_eq!(g.to_string(), "lat 80.000000°, lon 0.000000°, h 0.000 m");

        let s = SphericalCoords::new(1.0, 2.0, 3.0);
        assert!(s.to_string().starts_with("r 1.000 m"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let g = GeodeticCoords::new(-33.9, 151.2, 58.0);
        let json = serde_json::to_string(&g).unwrap();
        assert!(json.contains("\"latitude\":-33.9"));
        let back: GeodeticCoords<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
