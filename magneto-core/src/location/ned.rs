//! Rotation between the local North-East-Down frame and ECEF axes.
//!
//! The direction-cosine matrix `R` has the North, East and Down unit vectors, expressed in ECEF
//! axes, as its rows:
//!
//! ```text
//!     | -sinφ cosλ   -sinφ sinλ    cosφ |   North
//! R = |    -sinλ        cosλ        0   |   East
//!     | -cosφ cosλ   -cosφ sinλ   -sinφ |   Down
//! ```
//!
//! so `R * v_ecef` gives NED components and `Rᵀ * v_ned` gives ECEF components. φ and λ are
//! geodetic latitude and longitude.
//!
//! ```
//! use magneto_core::location::ned::{ecef_to_ned, ned_to_ecef};
//! use magneto_core::{GeodeticCoords, Vector3};
//!
//! let equator = GeodeticCoords::new(0.0_f64, 0.0, 0.0);
//!
//! // At (0°, 0°) North is +Z and Down is -X.
//! let north = ned_to_ecef(Vector3::new(1.0, 0.0, 0.0), &equator);
//! assert!((north - Vector3::z_axis()).magnitude() < 1e-15);
//!
//! let down = ecef_to_ned(Vector3::new(-1.0, 0.0, 0.0), &equator);
//! assert!((down - Vector3::z_axis()).magnitude() < 1e-15);
//! ```

use crate::{GeodeticCoords, Real, RotationMatrix3, Vector3};

impl<T: Real> RotationMatrix3<T> {
    /// ECEF → NED rotation at the given geodetic latitude and longitude (degrees).
    pub fn ecef_to_ned(latitude: T, longitude: T) -> Self {
        let (sin_lat, cos_lat) = latitude.to_radians().sin_cos();
        let (sin_lon, cos_lon) = longitude.to_radians().sin_cos();

        Self::from_array([
            [-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat],
            [-sin_lon, cos_lon, T::ZERO],
            [-cos_lat * cos_lon, -cos_lat * sin_lon, -sin_lat],
        ])
    }

    /// NED → ECEF rotation, the transpose of [`ecef_to_ned`](Self::ecef_to_ned).
    pub fn ned_to_ecef(latitude: T, longitude: T) -> Self {
        Self::ecef_to_ned(latitude, longitude).transpose()
    }
}

/// Expresses a NED vector at `position` in ECEF axes.
pub fn ned_to_ecef<T: Real>(ned: Vector3<T>, position: &GeodeticCoords<T>) -> Vector3<T> {
    RotationMatrix3::ecef_to_ned(position.latitude, position.longitude)
        .apply_transpose_to_vector(ned)
}

/// Expresses an ECEF vector in the NED frame at `position`.
pub fn ecef_to_ned<T: Real>(ecef: Vector3<T>, position: &GeodeticCoords<T>) -> Vector3<T> {
    RotationMatrix3::ecef_to_ned(position.latitude, position.longitude) * ecef
}
