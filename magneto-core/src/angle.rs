//! Degree/radian conversion.
//!
//! Public APIs in this workspace take and return degrees; the numerical kernels run in radians.
//! Free-function forms of [`Real::to_radians`] and [`Real::to_degrees`].

use crate::Real;

/// Converts degrees to radians.
///
/// ```
/// use magneto_core::angle::deg_to_rad;
///
/// assert!((deg_to_rad(60.0_f64) - std::f64::consts::FRAC_PI_3).abs() < 1e-15);
/// ```
#[inline]
pub fn deg_to_rad<T: Real>(deg: T) -> T {
    deg.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub fn rad_to_deg<T: Real>(rad: T) -> T {
    rad.to_degrees()
}
