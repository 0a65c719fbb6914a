//! Spherical-harmonic geomagnetic field evaluation.
//!
//! Given a [`GeomagneticModel`], a [`DecimalYear`] and a geodetic position, this crate computes
//! the main-field vector in the local North-East-Down frame and the derived elements
//! (horizontal and total intensity, declination, inclination).
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`model`] | Coefficient tables, index layout, epoch selection and interpolation |
//! | [`legendre`] | Gauss-normalized `P(n,m)` and `dP/dθ` recurrences |
//! | [`expansion`] | Field synthesis in spherical coordinates, rotation to NED |
//! | [`state`] | [`FieldState`] derivation from a NED vector |
//! | [`cof`] | `.COF` coefficient file reader |
//! | [`wmm`] | Bundled WMM2020 model |
//! | [`errors`] | [`FieldError`] and [`FieldResult`] |
//!
//! # Example
//!
//! ```
//! use magneto_core::GeodeticCoords;
//! use magneto_field::{eval_field, wmm::wmm2020};
//! use magneto_time::{CalendarDateTime, DecimalYear};
//!
//! let model = wmm2020::<f64>()?;
//! let when = DecimalYear::from_date_time(&CalendarDateTime::parse_iso8601("2022-07-02T12:00:00")?);
//! let site = GeodeticCoords::new(80.0, 0.0, 0.0);
//!
//! let field = eval_field(&model, when, site);
//! assert!(field.total > 50_000.0 && field.total < 60_000.0);
//! assert!(field.inclination > 80.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Design Notes
//!
//! - **Caller-owned model**: nothing is global. Build a model once (from a `.COF` file or
//!   [`GeomagneticModel::new`]) and share it by reference; it is `Send + Sync`.
//!
//! - **Infallible evaluation**: [`eval_field`] never returns an error. Positions that cannot be
//!   converted give the all-zero state. [`try_eval_field`] validates inputs first.
//!
//! - **Precision**: everything is generic over [`Real`](magneto_core::Real); `f32` and `f64`
//!   share one code path.

pub mod cof;
pub mod errors;
pub mod expansion;
pub mod legendre;
pub mod model;
pub mod state;
pub mod wmm;

pub use errors::{FieldError, FieldResult};
pub use expansion::{
    eval_field, eval_field_ned, eval_spherical_expansion, rotate_to_ned, try_eval_field,
    SphericalVector,
};
pub use model::{
    coefficient_count, coefficient_index, GaussCoefficient, GeomagneticModel, ModelEpoch,
};
pub use state::FieldState;

pub use magneto_core::{GeodeticCoords, Vector3};
pub use magneto_time::DecimalYear;
