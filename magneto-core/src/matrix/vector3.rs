//! 3D Cartesian vectors.
//!
//! [`Vector3`] carries ECEF positions, NED field vectors and the intermediate spherical-frame
//! gradient. It is generic over the scalar type so the same code serves `f32` and `f64` builds.
//!
//! ```
//! use magneto_core::Vector3;
//!
//! let a = Vector3::<f64>::x_axis();
//! let b = Vector3::<f64>::y_axis();
//!
//! assert_eq!(a.dot(&b), 0.0);
//! assert_eq!(a.cross(&b), Vector3::z_axis());
//! ```
use crate::{MagnetoError, MagnetoResult, MathErrorKind, Real};
use std::fmt;

/// A 3D Cartesian vector.
///
/// Components are public. When the vector is a field in the local tangent frame the order is
/// North, East, Down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Real> Vector3<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Returns the zero vector `[0, 0, 0]`.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO)
    }

    #[inline]
    pub fn x_axis() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO)
    }

    #[inline]
    pub fn y_axis() -> Self {
        Self::new(T::ZERO, T::ONE, T::ZERO)
    }

    #[inline]
    pub fn z_axis() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ONE)
    }

    /// Returns the component at the given index (0=x, 1=y, 2=z).
    ///
    /// Returns an error for indices outside 0-2. For unchecked access, use
    /// indexing syntax `v[i]` or the public fields directly.
    pub fn get(&self, index: usize) -> MagnetoResult<T> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(MagnetoError::math_error(
                "Vector3::get",
                MathErrorKind::InvalidInput,
                &format!("index {} out of bounds (valid range: 0-2)", index),
            )),
        }
    }

    /// Returns the Euclidean length (L2 norm) of the vector.
    #[inline]
    pub fn magnitude(&self) -> T {
        self.magnitude_squared().sqrt()
    }

    #[inline]
    pub fn magnitude_squared(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns a unit vector pointing in the same direction.
    ///
    /// If the vector has zero length, returns the zero vector unchanged (avoids NaN).
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag == T::ZERO {
            *self
        } else {
            Self::new(self.x / mag, self.y / mag, self.z / mag)
        }
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product with another vector (right-hand rule).
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Returns `true` when every component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn to_array(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn from_array(arr: [T; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl<T: Real> From<[T; 3]> for Vector3<T> {
    fn from(arr: [T; 3]) -> Self {
        Self::from_array(arr)
    }
}

/// Vector + Vector
impl<T: Real> std::ops::Add for Vector3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Vector - Vector
impl<T: Real> std::ops::Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Vector * scalar
impl<T: Real> std::ops::Mul<T> for Vector3<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

/// Vector / scalar
impl<T: Real> std::ops::Div<T> for Vector3<T> {
    type Output = Self;

    fn div(self, scalar: T) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

/// -Vector
impl<T: Real> std::ops::Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// v[i] indexing (panics if i > 2)
impl<T> std::ops::Index<usize> for Vector3<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

/// v[i] = value mutable indexing (panics if i > 2)
impl<T> std::ops::IndexMut<usize> for Vector3<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl<T: Real> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({:.9}, {:.9}, {:.9})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector3_construction() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);

        assert_eq!(Vector3::<f64>::zeros(), Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(Vector3::<f64>::x_axis(), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(Vector3::from([4.0_f32, 5.0, 6.0]), Vector3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_vector3_magnitude() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.magnitude_squared(), 25.0);

        let unit = v.normalize();
        assert!((unit.magnitude() - 1.0).abs() < 1e-15);
        assert_eq!(unit, Vector3::new(0.6, 0.8, 0.0));
    }

    #[test]
    fn test_vector3_arithmetic() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, Vector3::new(0.5, 1.0, 1.5));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_vector3_dot_cross() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 1.0, 0.0);

        assert_eq!(a.dot(&b), 0.0);
        assert_eq!(a.cross(&b), Vector3::new(0.0, 0.0, 1.0));

        let d = Vector3::new(1.0, 2.0, 3.0);
        let e = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(d.dot(&e), 32.0);
    }

    #[test]
    fn test_get_error() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.get(2).unwrap(), 3.0);

        let result = v.get(3);
        assert!(result.is_err());
        if let Err(err) = result {
            assert!(err.to_string().contains("index 3 out of bounds"));
        }
    }

    #[test]
    fn test_normalize_zero_vector() {
        let zero = Vector3::<f64>::zeros();
        assert_eq!(zero.normalize(), zero);
    }

    #[test]
    fn test_is_finite() {
        assert!(Vector3::new(1.0, -2.0, 3.0).is_finite());
        assert!(!Vector3::new(1.0, f64::NAN, 3.0).is_finite());
        assert!(!Vector3::new(f32::INFINITY, 0.0, 0.0).is_finite());
    }

    #[test]
    fn test_indexing_operators() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);

        v[1] = 20.0;
        assert_eq!(v, Vector3::new(1.0, 20.0, 3.0));
        assert_eq!(v.to_array(), [1.0, 20.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "Vector3 index out of bounds: 4")]
    fn test_index_panic() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let _ = v[4];
    }

    #[test]
    fn test_display_formatting() {
        let v = Vector3::new(1.234567890, -2.345678901, 3.456789012);
        let display_output = format!("{}", v);

        assert!(display_output.starts_with("Vector3("));
        assert!(display_output.contains("-2.345678901"));
        assert!(display_output.ends_with(")"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let v = Vector3::new(6570.4, -146.3, 54606.0);
        let json = serde_json::to_string(&v).unwrap();
        let back: Vector3<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
