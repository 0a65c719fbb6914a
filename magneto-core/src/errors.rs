//! Error types for the core math and geodesy layer.
//!
//! The numerical transforms in this crate never fail: degenerate geometry is reported through
//! zeroed results (see [`location`](crate::location)). [`MagnetoError`] covers the checked entry
//! points, such as [`GeodeticCoords::try_new`](crate::GeodeticCoords::try_new) and component
//! access by index.
//!
//! # Usage
//!
//! ```
//! use magneto_core::{MagnetoError, MathErrorKind};
//!
//! fn checked_sqrt(x: f64) -> Result<f64, MagnetoError> {
//!     if x < 0.0 {
//!         return Err(MagnetoError::math_error(
//!             "checked_sqrt",
//!             MathErrorKind::InvalidInput,
//!             "argument is negative",
//!         ));
//!     }
//!     Ok(x.sqrt())
//! }
//!
//! assert!(checked_sqrt(-1.0).is_err());
//! ```

use thiserror::Error;

/// Classification of mathematical errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MathErrorKind {
    /// Input value is invalid for the operation.
    InvalidInput,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MagnetoError {
    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// Coordinate outside the domain accepted by a checked constructor.
    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },
}

/// Convenience alias for `Result<T, MagnetoError>`.
pub type MagnetoResult<T> = Result<T, MagnetoError>;

impl MagnetoError {
    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    pub fn invalid_coordinate(message: impl Into<String>) -> Self {
        Self::InvalidCoordinate {
            message: message.into(),
        }
    }
}
