//! Conversions between geodetic, ECEF and geocentric spherical coordinates.
//!
//! # Geodetic vs Geocentric
//!
//! **Geodetic latitude** is the angle between the equatorial plane and the ellipsoid normal at
//! the point. **Geocentric latitude** is the angle between the equatorial plane and the line to
//! the Earth's center. Spherical-harmonic field models are defined on the geocentric sphere, so
//! every evaluation goes geodetic → ECEF → spherical, and the resulting field vector is rotated
//! back by the difference between the two latitudes.
//!
//! # Degenerate input
//!
//! None of these conversions return `Result`. Every intermediate denominator is checked and a
//! zero divisor (or a non-finite intermediate) short-circuits to the all-zero value of the output
//! type. Callers that care can test for it with `== Default::default()`.
//!
//! # ECEF → Geodetic
//!
//! The inverse uses the closed-form quartic solution of Vermeille (2002), in the normalized
//! form given by Markley & Crassidis. No iteration is needed; accuracy is at the level of the
//! floating-point type for points from the center of the Earth out to geostationary distance,
//! apart from a small region around the center where the solution is not unique.
//!
//! ```
//! use magneto_core::{Ellipsoid, GeodeticCoords};
//!
//! let wgs84 = Ellipsoid::<f64>::wgs84();
//! let p = GeodeticCoords::new(-89.0, 135.0, 2800.0);
//!
//! let back = wgs84.ecef_to_geodetic(&wgs84.geodetic_to_ecef(&p));
//! assert!((back.latitude - p.latitude).abs() < 1e-9);
//! assert!((back.height - p.height).abs() < 1e-5);
//! ```

use crate::{EcefPosition, Ellipsoid, GeodeticCoords, Real, SphericalCoords};

impl<T: Real> Ellipsoid<T> {
    /// Geodetic to ECEF via the prime-vertical radius of curvature.
    ///
    /// Returns the zero position if the radius of curvature is undefined (`e² sin²φ = 1`).
    pub fn geodetic_to_ecef(&self, geodetic: &GeodeticCoords<T>) -> EcefPosition<T> {
        let (sin_lat, cos_lat) = geodetic.latitude.to_radians().sin_cos();
        let (sin_lon, cos_lon) = geodetic.longitude.to_radians().sin_cos();

        let Some(rc) = self.prime_vertical_radius(sin_lat) else {
            return EcefPosition::default();
        };

        let h = geodetic.height;
        let horizontal = (rc + h) * cos_lat;

        EcefPosition::new(
            horizontal * cos_lon,
            horizontal * sin_lon,
            (rc * (T::ONE - self.e_sq) + h) * sin_lat,
        )
    }

    /// ECEF to geodetic, closed form.
    ///
    /// Returns zeroed coordinates when the ellipsoid is degenerate (`a = 0` or `e² ≥ 1`), at the
    /// Earth's center, or whenever an intermediate divisor vanishes.
    pub fn ecef_to_geodetic(&self, ecef: &EcefPosition<T>) -> GeodeticCoords<T> {
        self.solve_geodetic(ecef).unwrap_or_default()
    }

    fn solve_geodetic(&self, ecef: &EcefPosition<T>) -> Option<GeodeticCoords<T>> {
        let a = self.a;
        let e2 = self.e_sq;
        if a == T::ZERO || e2 >= T::ONE || !ecef.is_finite() {
            return None;
        }

        let six = T::from_f64(6.0);
        let four = T::from_f64(4.0);
        let e4 = e2 * e2;
        let a_sq = a * a;

        let (x, y, z) = (ecef.x, ecef.y, ecef.z);
        let rho_sq = x * x + y * y;

        let p = rho_sq / a_sq;
        let q = (T::ONE - e2) * z * z / a_sq;
        let r = (p + q - e4) / six;
        non_zero(r)?;

        let s = e4 * p * q / (four * r * r * r);
        let discriminant = s * (T::TWO + s);
        if discriminant < T::ZERO {
            return None;
        }

        let t = non_zero((T::ONE + s + discriminant.sqrt()).cbrt())?;
        let u = r * (T::ONE + t + T::ONE / t);
        let v = non_zero((u * u + e4 * q).sqrt())?;
        let w = e2 * (u + v - q) / (T::TWO * v);

        let k = non_zero((u + v + w * w).sqrt() - w)?;
        let k_plus_e2 = non_zero(k + e2)?;

        let rho = rho_sq.sqrt();
        let d = k * rho / k_plus_e2;
        let hyp = non_zero((d * d + z * z).sqrt())?;

        let lat = T::TWO * (z / (d + hyp)).atan();
        let (sin_lat, cos_lat) = lat.sin_cos();

        // a²/N = a·sqrt(1 - e² sin²φ)
        let rc = self.prime_vertical_radius(sin_lat)?;
        let height = rho * cos_lat + z * sin_lat - a_sq / rc;

        Some(GeodeticCoords::new(
            lat.to_degrees(),
            y.atan2(x).to_degrees(),
            height,
        ))
    }

    /// Geodetic to geocentric spherical, through ECEF.
    ///
    /// Longitude is carried into `azimuth` unchanged. A zero radius yields zeroed coordinates.
    pub fn geodetic_to_spherical(&self, geodetic: &GeodeticCoords<T>) -> SphericalCoords<T> {
        let ecef = self.geodetic_to_ecef(geodetic);
        let radius = ecef.norm();
        if radius == T::ZERO || !radius.is_finite() {
            return SphericalCoords::default();
        }

        SphericalCoords::new(
            radius,
            (ecef.z / radius).asin().to_degrees(),
            geodetic.longitude,
        )
    }

    /// Geocentric spherical to geodetic, through ECEF.
    ///
    /// `azimuth` is carried into longitude unchanged. A zero radius yields zeroed coordinates.
    pub fn spherical_to_geodetic(&self, spherical: &SphericalCoords<T>) -> GeodeticCoords<T> {
        if spherical.radius == T::ZERO {
            return GeodeticCoords::default();
        }

        let mut geodetic = self.ecef_to_geodetic(&spherical_to_ecef(spherical));
        if geodetic == GeodeticCoords::default() {
            return geodetic;
        }
        geodetic.longitude = spherical.azimuth;
        geodetic
    }
}

/// ECEF to geocentric spherical. Zero radius yields zeroed coordinates.
pub fn ecef_to_spherical<T: Real>(ecef: &EcefPosition<T>) -> SphericalCoords<T> {
    let radius = ecef.norm();
    if radius == T::ZERO || !radius.is_finite() {
        return SphericalCoords::default();
    }

    SphericalCoords::new(
        radius,
        (ecef.z / radius).asin().to_degrees(),
        ecef.y.atan2(ecef.x).to_degrees(),
    )
}

/// Geocentric spherical to ECEF.
pub fn spherical_to_ecef<T: Real>(spherical: &SphericalCoords<T>) -> EcefPosition<T> {
    let (sin_polar, cos_polar) = spherical.polar.to_radians().sin_cos();
    let (sin_az, cos_az) = spherical.azimuth.to_radians().sin_cos();
    let r = spherical.radius;

    EcefPosition::new(
        r * cos_polar * cos_az,
        r * cos_polar * sin_az,
        r * sin_polar,
    )
}

#[inline]
fn non_zero<T: Real>(value: T) -> Option<T> {
    (value != T::ZERO && value.is_finite()).then_some(value)
}

impl<T: Real> GeodeticCoords<T> {
    /// ECEF position on the WGS84 ellipsoid.
    pub fn to_ecef(&self) -> EcefPosition<T> {
        Ellipsoid::wgs84().geodetic_to_ecef(self)
    }

    /// Geocentric spherical position on the WGS84 ellipsoid.
    pub fn to_spherical(&self) -> SphericalCoords<T> {
        Ellipsoid::wgs84().geodetic_to_spherical(self)
    }
}

impl<T: Real> EcefPosition<T> {
    /// Geodetic coordinates on the WGS84 ellipsoid.
    pub fn to_geodetic(&self) -> GeodeticCoords<T> {
        Ellipsoid::wgs84().ecef_to_geodetic(self)
    }

    pub fn to_spherical(&self) -> SphericalCoords<T> {
        ecef_to_spherical(self)
    }
}

impl<T: Real> SphericalCoords<T> {
    /// Geodetic coordinates on the WGS84 ellipsoid.
    pub fn to_geodetic(&self) -> GeodeticCoords<T> {
        Ellipsoid::wgs84().spherical_to_geodetic(self)
    }

    pub fn to_ecef(&self) -> EcefPosition<T> {
        spherical_to_ecef(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{WGS84_SEMI_MAJOR_AXIS, WGS84_SEMI_MINOR_AXIS};
    use crate::test_helpers::assert_close;

    #[test]
    fn test_ecef_at_equator() {
        let ecef = GeodeticCoords::new(0.0, 0.0, 0.0).to_ecef();
        assert_eq!(ecef.x, WGS84_SEMI_MAJOR_AXIS);
        assert_eq!(ecef.y, 0.0);
        assert_eq!(ecef.z, 0.0);
    }

    #[test]
    fn test_ecef_at_north_pole() {
        let ecef = GeodeticCoords::new(90.0, 0.0, 0.0).to_ecef();
        assert!(ecef.x.abs() < 1e-9, "x = {}", ecef.x);
        assert_close(ecef.z, WGS84_SEMI_MINOR_AXIS, 1e-6, "z at pole");
    }

    #[test]
    fn test_ecef_with_height_and_longitude() {
        let ecef = GeodeticCoords::new(0.0, 90.0, 1000.0).to_ecef();
        assert!(ecef.x.abs() < 1e-6);
        assert_close(ecef.y, WGS84_SEMI_MAJOR_AXIS + 1000.0, 1e-6, "y");
    }

    #[test]
    fn test_negative_latitude_is_southern() {
        let ecef = GeodeticCoords::new(-45.0, 0.0, 0.0).to_ecef();
        assert!(ecef.x > 0.0);
        assert!(ecef.z < 0.0);
    }

    #[test]
    fn test_geodetic_round_trip() {
        let wgs84 = Ellipsoid::<f64>::wgs84();
        let points = [
            (0.0, 0.0, 0.0),
            (0.0, 179.5, 0.0),
            (45.0, -120.0, 1500.0),
            (-33.9, 151.2, 58.0),
            (60.0, 25.0, -300.0),
            (89.0, 10.0, 0.0),
            (-89.0, -170.0, 100.0),
            (12.5, 45.0, 400_000.0),
        ];

        for &(lat, lon, h) in &points {
            let p = GeodeticCoords::new(lat, lon, h);
            let back = wgs84.ecef_to_geodetic(&wgs84.geodetic_to_ecef(&p));
            assert_close(back.latitude, lat, 1e-9, "latitude");
            assert_close(back.longitude, lon, 1e-9, "longitude");
            assert_close(back.height, h, 1e-5, "height");
        }
    }

    #[test]
    fn test_round_trip_at_poles() {
        for &lat in &[90.0, -90.0] {
            let p = GeodeticCoords::new(lat, 0.0, 250.0);
            let back = p.to_ecef().to_geodetic();
            assert_close(back.latitude, lat, 1e-9, "latitude at pole");
            assert_close(back.height, 250.0, 1e-5, "height at pole");
        }
    }

    #[test]
    fn test_ecef_to_geodetic_origin_is_zeroed() {
        let result = EcefPosition::new(0.0, 0.0, 0.0).to_geodetic();
        assert_eq!(result, GeodeticCoords::default());
    }

    #[test]
    fn test_degenerate_ellipsoid_is_zeroed() {
        let ecef = EcefPosition::new(6_378_137.0, 0.0, 0.0);

        let no_axis = Ellipsoid::from_flattening(0.0, 0.003);
        assert_eq!(no_axis.ecef_to_geodetic(&ecef), GeodeticCoords::default());

        let flat = Ellipsoid::from_flattening(6_378_137.0, 1.0);
        assert_eq!(flat.ecef_to_geodetic(&ecef), GeodeticCoords::default());
        assert_eq!(
            flat.geodetic_to_ecef(&GeodeticCoords::new(90.0, 0.0, 0.0)),
            EcefPosition::default()
        );
    }

    #[test]
    fn test_non_finite_ecef_is_zeroed() {
        let result = EcefPosition::new(f64::NAN, 0.0, 1.0).to_geodetic();
        assert_eq!(result, GeodeticCoords::default());
    }

    #[test]
    fn test_spherical_polar_is_geocentric_latitude() {
        let s = GeodeticCoords::new(45.0, 10.0, 0.0).to_spherical();
        // geocentric latitude lags geodetic by about 0.19° at 45°
        assert!(s.polar < 45.0 && s.polar > 44.7, "polar = {}", s.polar);
        assert_eq!(s.azimuth, 10.0);

        let equator = GeodeticCoords::new(0.0, -75.0, 0.0).to_spherical();
        assert_eq!(equator.polar, 0.0);
        assert_eq!(equator.radius, WGS84_SEMI_MAJOR_AXIS);
    }

    #[test]
    fn test_spherical_round_trip_carries_longitude() {
        let p = GeodeticCoords::new(52.0, 200.0, 10_000.0);
        let back = p.to_spherical().to_geodetic();

        assert_eq!(back.longitude, 200.0);
        assert_close(back.latitude, 52.0, 1e-9, "latitude");
        assert_close(back.height, 10_000.0, 1e-5, "height");
    }

    #[test]
    fn test_zero_radius_spherical_is_zeroed() {
        let s = SphericalCoords::new(0.0, 45.0, 30.0);
        assert_eq!(s.to_geodetic(), GeodeticCoords::default());
        assert_eq!(
            ecef_to_spherical(&EcefPosition::<f64>::default()),
            SphericalCoords::default()
        );
    }

    #[test]
    fn test_ecef_spherical_round_trip() {
        let ecef = EcefPosition::new(-2_000_000.0, 4_500_000.0, -3_900_000.0);
        let back = ecef.to_spherical().to_ecef();
        assert_close(back.x, ecef.x, 1e-6, "x");
        assert_close(back.y, ecef.y, 1e-6, "y");
        assert_close(back.z, ecef.z, 1e-6, "z");
    }

    #[test]
    fn test_single_precision_round_trip() {
        let p = GeodeticCoords::new(37.0_f32, -122.0, 30.0);
        let back = p.to_ecef().to_geodetic();
        assert!((back.latitude - 37.0).abs() < 1e-4);
        assert!((back.longitude + 122.0).abs() < 1e-4);
        assert!((back.height - 30.0).abs() < 2.0, "height = {}", back.height);
    }
}
