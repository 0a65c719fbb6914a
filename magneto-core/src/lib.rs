//! Precision-generic math and geodesy for geomagnetic field evaluation.
//!
//! `magneto-core` holds everything the field evaluator needs that is not specific to magnetism:
//! a scalar abstraction over `f32`/`f64`, 3-vectors and 3×3 rotations, the WGS84 ellipsoid and
//! the coordinate conversions between geodetic, ECEF and geocentric spherical positions.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`real`] | [`Real`] scalar trait (`f32`, `f64` via `libm`) and the [`Precision`] alias |
//! | [`angle`] | Degree/radian conversion |
//! | [`matrix`] | [`Vector3`] and [`RotationMatrix3`] |
//! | [`ellipsoid`] | [`Ellipsoid`] parameters (WGS84 by default) |
//! | [`location`] | Geodetic/ECEF/spherical types and conversions, NED rotation |
//! | [`constants`] | Angle, calendar and WGS84 constants |
//! | [`errors`] | [`MagnetoError`] and [`MagnetoResult`] |
//!
//! # Transformation Pipeline
//!
//! ```
//! use magneto_core::{GeodeticCoords, RotationMatrix3};
//!
//! let site = GeodeticCoords::new(80.0_f64, 0.0, 0.0);
//!
//! // Geodetic → ECEF → geocentric spherical
//! let ecef = site.to_ecef();
//! let spherical = site.to_spherical();
//! assert!(spherical.polar < site.latitude);
//!
//! // Local tangent frame at the site
//! let r = RotationMatrix3::ecef_to_ned(site.latitude, site.longitude);
//! assert!(r.is_rotation_matrix(1e-14));
//! # let _ = ecef;
//! ```
//!
//! # Design Notes
//!
//! - **Degrees at the boundary**: public types store degrees and metres. Radians exist only
//!   inside the numerical kernels.
//!
//! - **Zeroed results, not errors**: the conversions never fail. Degenerate geometry produces
//!   the all-zero value of the output type. Checked constructors such as
//!   [`GeodeticCoords::try_new`] are there for callers that want a `Result`.

pub mod angle;
pub mod constants;
pub mod ellipsoid;
pub mod errors;
pub mod location;
pub mod matrix;
pub mod real;

pub use ellipsoid::Ellipsoid;
pub use errors::{MagnetoError, MagnetoResult, MathErrorKind};
pub use location::{EcefPosition, GeodeticCoords, SphericalCoords};
pub use matrix::{RotationMatrix3, Vector3};
pub use real::{Precision, Real};

pub mod test_helpers;
