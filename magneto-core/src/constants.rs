//! Mathematical, calendar and WGS84 constants.
//!
//! Constants are stored as `f64` and converted into the working precision with
//! [`Real::from_f64`](crate::Real::from_f64) where they are used.

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

pub const HOURS_PER_DAY: f64 = 24.0;

pub const MINUTES_PER_DAY: f64 = 1440.0;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

/// WGS84 semi-major axis (equatorial radius) in meters.
pub const WGS84_SEMI_MAJOR_AXIS: f64 = 6_378_137.0;

/// WGS84 reciprocal flattening, exact by definition.
pub const WGS84_INVERSE_FLATTENING: f64 = 298.257223563;

pub const WGS84_FLATTENING: f64 = 1.0 / WGS84_INVERSE_FLATTENING;

/// WGS84 semi-minor axis (polar radius) in meters: b = a(1 - f).
pub const WGS84_SEMI_MINOR_AXIS: f64 = WGS84_SEMI_MAJOR_AXIS * (1.0 - WGS84_FLATTENING);

/// WGS84 first eccentricity squared: e² = f(2 - f).
pub const WGS84_ECCENTRICITY_SQUARED: f64 = WGS84_FLATTENING * (2.0 - WGS84_FLATTENING);
