//! Positions and frame transforms.
//!
//! - [`core`]: [`GeodeticCoords`], [`EcefPosition`], [`SphericalCoords`]
//! - [`geodesy`]: geodetic ↔ ECEF ↔ geocentric spherical conversions
//! - [`ned`]: North-East-Down ↔ ECEF rotation

pub mod core;
pub mod geodesy;
pub mod ned;

pub use core::{EcefPosition, GeodeticCoords, SphericalCoords};
