//! Floating-point abstraction shared by every magneto type.
//!
//! Geomagnetic evaluation runs on flight computers that only have single-precision FPUs as well
//! as on desktops where double precision is free. Rather than fixing the scalar type, every
//! public type and function in this workspace is generic over [`Real`], which is implemented for
//! `f32` and `f64`.
//!
//! Transcendental functions go through `libm` so that `f32` code never silently widens to
//! `f64` and results are identical across targets.
//!
//! # Choosing a precision
//!
//! Most callers simply write `GeodeticCoords::<f64>` or let inference pick the type from
//! literals. For a build-time switch, use the [`Precision`] alias, which is `f64` by default and
//! `f32` when the `single-precision` feature is enabled:
//!
//! ```
//! use magneto_core::{Precision, Real};
//!
//! let x: Precision = Precision::from_f64(0.5);
//! assert!((x.sin().to_f64() - 0.479425538604203).abs() < 1e-6);
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::constants::{DEG_TO_RAD, RAD_TO_DEG};

/// Scalar type used for all geodetic and field arithmetic.
///
/// The method names mirror the inherent `f64` methods so generic code reads the same as
/// concrete code. All angles taken or returned by the trigonometric methods are in radians.
pub trait Real:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    /// Machine epsilon of the underlying type.
    const EPSILON: Self;

    /// Converts from `f64`, rounding to nearest when narrowing.
    fn from_f64(value: f64) -> Self;

    /// Converts a small integer such as a harmonic degree or order.
    fn from_usize(value: usize) -> Self;

    fn to_f64(self) -> f64;

    fn sin(self) -> Self;
    fn cos(self) -> Self;
    /// Returns `(sin, cos)` in one call.
    fn sin_cos(self) -> (Self, Self);
    fn asin(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn sqrt(self) -> Self;
    fn cbrt(self) -> Self;
    fn hypot(self, other: Self) -> Self;
    fn powi(self, n: i32) -> Self;
    fn abs(self) -> Self;
    fn floor(self) -> Self;
    fn is_finite(self) -> bool;

    #[inline]
    fn to_radians(self) -> Self {
        self * Self::from_f64(DEG_TO_RAD)
    }

    #[inline]
    fn to_degrees(self) -> Self {
        self * Self::from_f64(RAD_TO_DEG)
    }

    #[inline]
    fn max(self, other: Self) -> Self {
        if self >= other {
            self
        } else {
            other
        }
    }
}

macro_rules! impl_real {
    ($t:ident {
        sin: $sin:path,
        cos: $cos:path,
        sincos: $sincos:path,
        asin: $asin:path,
        atan: $atan:path,
        atan2: $atan2:path,
        sqrt: $sqrt:path,
        cbrt: $cbrt:path,
        hypot: $hypot:path,
        abs: $abs:path,
        floor: $floor:path $(,)?
    }) => {
        #[allow(clippy::unnecessary_cast)]
        impl Real for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const EPSILON: Self = <$t>::EPSILON;

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn from_usize(value: usize) -> Self {
                value as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn sin(self) -> Self {
                $sin(self)
            }

            #[inline]
            fn cos(self) -> Self {
                $cos(self)
            }

            #[inline]
            fn sin_cos(self) -> (Self, Self) {
                $sincos(self)
            }

            #[inline]
            fn asin(self) -> Self {
                $asin(self)
            }

            #[inline]
            fn atan(self) -> Self {
                $atan(self)
            }

            #[inline]
            fn atan2(self, other: Self) -> Self {
                $atan2(self, other)
            }

            #[inline]
            fn sqrt(self) -> Self {
                $sqrt(self)
            }

            #[inline]
            fn cbrt(self) -> Self {
                $cbrt(self)
            }

            #[inline]
            fn hypot(self, other: Self) -> Self {
                $hypot(self, other)
            }

            #[inline]
            fn powi(self, n: i32) -> Self {
                <$t>::powi(self, n)
            }

            #[inline]
            fn abs(self) -> Self {
                $abs(self)
            }

            #[inline]
            fn floor(self) -> Self {
                $floor(self)
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }
        }
    };
}

impl_real!(f64 {
    sin: libm::sin,
    cos: libm::cos,
    sincos: libm::sincos,
    asin: libm::asin,
    atan: libm::atan,
    atan2: libm::atan2,
    sqrt: libm::sqrt,
    cbrt: libm::cbrt,
    hypot: libm::hypot,
    abs: libm::fabs,
    floor: libm::floor,
});

impl_real!(f32 {
    sin: libm::sinf,
    cos: libm::cosf,
    sincos: libm::sincosf,
    asin: libm::asinf,
    atan: libm::atanf,
    atan2: libm::atan2f,
    sqrt: libm::sqrtf,
    cbrt: libm::cbrtf,
    hypot: libm::hypotf,
    abs: libm::fabsf,
    floor: libm::floorf,
});

/// Build-time default precision: `f64`, or `f32` with the `single-precision` feature.
#[cfg(not(feature = "single-precision"))]
pub type Precision = f64;

/// Build-time default precision: `f64`, or `f32` with the `single-precision` feature.
#[cfg(feature = "single-precision")]
pub type Precision = f32;
