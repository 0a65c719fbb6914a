use std::fmt;

use magneto_core::{Real, Vector3};

/// Magnetic field at a point, in the local North-East-Down frame.
///
/// Intensities are in nanotesla and angles in degrees. Declination is positive east of true
/// north; inclination is positive when the field points below the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldState<T> {
    /// North (X), East (Y), Down (Z) components.
    pub ned: Vector3<T>,
    /// Horizontal intensity H.
    pub horizontal: T,
    /// Total intensity F.
    pub total: T,
    /// Declination D.
    pub declination: T,
    /// Inclination I.
    pub inclination: T,
}

impl<T: Real> FieldState<T> {
    /// Derives the scalar elements from a NED field vector.
    ///
    /// ```
    /// use magneto_core::Vector3;
    /// use magneto_field::FieldState;
    ///
    /// let state = FieldState::from_ned(Vector3::new(3.0_f64, 3.0, 0.0));
    /// assert!((state.declination - 45.0).abs() < 1e-12);
    /// assert_eq!(state.inclination, 0.0);
    /// ```
    pub fn from_ned(ned: Vector3<T>) -> Self {
        let horizontal = ned.x.hypot(ned.y);
        Self {
            ned,
            horizontal,
            total: horizontal.hypot(ned.z),
            declination: ned.y.atan2(ned.x).to_degrees(),
            inclination: ned.z.atan2(horizontal).to_degrees(),
        }
    }

    /// [`from_ned`](Self::from_ned), or the all-zero state for `None`.
    pub fn from_optional_ned(ned: Option<Vector3<T>>) -> Self {
        ned.map(Self::from_ned).unwrap_or_default()
    }

    #[inline]
    pub fn north(&self) -> T {
        self.ned.x
    }

    #[inline]
    pub fn east(&self) -> T {
        self.ned.y
    }

    #[inline]
    pub fn down(&self) -> T {
        self.ned.z
    }

    pub fn is_finite(&self) -> bool {
        self.ned.is_finite()
            && self.horizontal.is_finite()
            && self.total.is_finite()
            && self.declination.is_finite()
            && self.inclination.is_finite()
    }
}

impl<T: Real> fmt::Display for FieldState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X {:.1} nT, Y {:.1} nT, Z {:.1} nT, H {:.1} nT, F {:.1} nT, D {:.2}°, I {:.2}°",
            self.ned.x,
            self.ned.y,
            self.ned.z,
            self.horizontal,
            self.total,
            self.declination,
            self.inclination
        )
    }
}
