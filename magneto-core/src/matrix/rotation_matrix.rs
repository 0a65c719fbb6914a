//! 3x3 rotation matrices.
//!
//! The only rotation the field pipeline needs is the local tangent-plane rotation between ECEF
//! and North-East-Down axes (see [`location::ned`](crate::location::ned)), but the type is kept
//! general: any orthogonal 3x3 with determinant +1 can be stored, composed and inverted.
//!
//! # Storage Layout
//!
//! Elements are stored in row-major order as `[[T; 3]; 3]`. The element at row `i`, column `j`
//! is `matrix[(i, j)]` or `matrix.get(i, j)`. Multiplying a column vector gives the standard
//! product:
//!
//! ```text
//! | r00 r01 r02 |   | x |   | r00*x + r01*y + r02*z |
//! | r10 r11 r12 | * | y | = | r10*x + r11*y + r12*z |
//! | r20 r21 r22 |   | z |   | r20*x + r21*y + r22*z |
//! ```
//!
//! # Inverting Rotations
//!
//! For a proper rotation the inverse is the transpose:
//!
//! ```
//! use magneto_core::{RotationMatrix3, Vector3};
//!
//! let m = RotationMatrix3::ecef_to_ned(45.0_f64, 30.0);
//! let v = Vector3::new(1.0, 2.0, 3.0);
//!
//! let back = m.transpose() * (m * v);
//! assert!((back - v).magnitude() < 1e-12);
//! ```

use crate::{Real, Vector3};
use std::fmt;

/// A 3x3 rotation matrix, row-major.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationMatrix3<T> {
    elements: [[T; 3]; 3],
}

impl<T: Real> RotationMatrix3<T> {
    pub fn identity() -> Self {
        Self {
            elements: [
                [T::ONE, T::ZERO, T::ZERO],
                [T::ZERO, T::ONE, T::ZERO],
                [T::ZERO, T::ZERO, T::ONE],
            ],
        }
    }

    /// Creates a matrix from a row-major array: `elements[i][j]` is row `i`, column `j`.
    ///
    /// This does not validate that the matrix is a proper rotation. Use
    /// [`is_rotation_matrix`](Self::is_rotation_matrix) to check if needed.
    pub fn from_array(elements: [[T; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Builds a matrix whose rows are the three given vectors.
    pub fn from_rows(r0: Vector3<T>, r1: Vector3<T>, r2: Vector3<T>) -> Self {
        Self::from_array([r0.to_array(), r1.to_array(), r2.to_array()])
    }

    /// Returns the element at the specified row and column.
    ///
    /// Indices are 0-based. Panics if `row >= 3` or `col >= 3`.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.elements[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.elements[row][col] = value;
    }

    pub fn elements(&self) -> &[[T; 3]; 3] {
        &self.elements
    }

    /// Returns row `i` as a vector.
    pub fn row(&self, i: usize) -> Vector3<T> {
        Vector3::from_array(self.elements[i])
    }

    /// Matrix product `self * other`; `other` acts first on a vector.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[T::ZERO; 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                let mut sum = T::ZERO;
                for k in 0..3 {
                    sum += self.elements[i][k] * other.elements[k][j];
                }
                *cell = sum;
            }
        }

        Self::from_array(result)
    }

    /// Applies the matrix to a vector: `self * v`.
    #[inline]
    pub fn apply_to_vector(&self, v: Vector3<T>) -> Vector3<T> {
        let m = &self.elements;
        Vector3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }

    /// Applies the transpose without building it: `selfᵀ * v`.
    #[inline]
    pub fn apply_transpose_to_vector(&self, v: Vector3<T>) -> Vector3<T> {
        let m = &self.elements;
        Vector3::new(
            m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z,
            m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z,
            m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z,
        )
    }

    pub fn determinant(&self) -> T {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns the transpose, which for a rotation is also the inverse.
    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::from_array([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Checks determinant +1 and `M * Mᵀ = I`, both within `tolerance`.
    ///
    /// ```
    /// use magneto_core::RotationMatrix3;
    ///
    /// assert!(RotationMatrix3::ecef_to_ned(-33.9_f64, 151.2).is_rotation_matrix(1e-14));
    ///
    /// let scaled = RotationMatrix3::from_array([
    ///     [2.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 1.0],
    /// ]);
    /// assert!(!scaled.is_rotation_matrix(1e-14));
    /// ```
    pub fn is_rotation_matrix(&self, tolerance: T) -> bool {
        if (self.determinant() - T::ONE).abs() > tolerance {
            return false;
        }

        self.multiply(&self.transpose())
            .max_difference(&Self::identity())
            <= tolerance
    }

    /// Returns the largest absolute element-wise difference.
    pub fn max_difference(&self, other: &Self) -> T {
        let mut max_diff = T::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                max_diff = max_diff.max((self.elements[i][j] - other.elements[i][j]).abs());
            }
        }
        max_diff
    }
}

impl<T: Real> Default for RotationMatrix3<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Real> std::ops::Mul for RotationMatrix3<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<T: Real> std::ops::Mul<&RotationMatrix3<T>> for &RotationMatrix3<T> {
    type Output = RotationMatrix3<T>;

    fn mul(self, rhs: &RotationMatrix3<T>) -> RotationMatrix3<T> {
        self.multiply(rhs)
    }
}

impl<T: Real> std::ops::Mul<Vector3<T>> for RotationMatrix3<T> {
    type Output = Vector3<T>;

    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        self.apply_to_vector(v)
    }
}

impl<T: Real> std::ops::Mul<Vector3<T>> for &RotationMatrix3<T> {
    type Output = Vector3<T>;

    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        self.apply_to_vector(v)
    }
}

impl<T> std::ops::Index<(usize, usize)> for RotationMatrix3<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.elements[row][col]
    }
}

impl<T> std::ops::IndexMut<(usize, usize)> for RotationMatrix3<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.elements[row][col]
    }
}

impl<T: Real> fmt::Display for RotationMatrix3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RotationMatrix3 [")?;
        for row in &self.elements {
            writeln!(f, "  [{:12.9}, {:12.9}, {:12.9}]", row[0], row[1], row[2])?;
        }
        write!(f, "]")
    }
}
