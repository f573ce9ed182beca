//! 3x3 rotation matrices for frame transformations.
//!
//! # Rotation Conventions (ERFA-Compatible)
//!
//! Rotations are "passive": they rotate the coordinate frame, not the vector. A positive
//! rotation of 90° about Z takes the vector `[1, 0, 0]` to `[0, -1, 0]`.
//!
//! - `rotate_y(theta)`: `self ← Ry(theta) · self`
//! - `rotate_z(psi)`: `self ← Rz(psi) · self`
//!
//! Building a frame change is a sequence of these calls, the first call acting first on the
//! vector. The transpose is the inverse rotation.
//!
//! ```
//! use geoframe_core::{RotationMatrix3, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let mut m = RotationMatrix3::identity();
//! m.rotate_z(FRAC_PI_2);
//!
//! let v = m * Vector3::x_axis();
//! assert!((v.y + 1.0).abs() < 1e-15);
//!
//! let back = m.transpose() * v;
//! assert!((back.x - 1.0).abs() < 1e-15);
//! ```
//!
//! # Storage Layout
//!
//! Row-major `[[f64; 3]; 3]`.

use std::fmt;

use super::Vector3;

/// A 3x3 rotation matrix. All angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix3 {
    elements: [[f64; 3]; 3],
}

impl Default for RotationMatrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl RotationMatrix3 {
    /// Creates the 3x3 identity matrix.
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Creates a matrix from row-major elements. No orthogonality check is made.
    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Applies a rotation about the Z-axis to this matrix (in place).
    ///
    /// ```text
    /// Rz(psi) = | cos(psi)  sin(psi)  0 |
    ///           |-sin(psi)  cos(psi)  0 |
    ///           |    0         0      1 |
    /// ```
    pub fn rotate_z(&mut self, psi: f64) {
        let (s, c) = psi.sin_cos();

        let a00 = c * self.elements[0][0] + s * self.elements[1][0];
        let a01 = c * self.elements[0][1] + s * self.elements[1][1];
        let a02 = c * self.elements[0][2] + s * self.elements[1][2];
        let a10 = -s * self.elements[0][0] + c * self.elements[1][0];
        let a11 = -s * self.elements[0][1] + c * self.elements[1][1];
        let a12 = -s * self.elements[0][2] + c * self.elements[1][2];

        self.elements[0] = [a00, a01, a02];
        self.elements[1] = [a10, a11, a12];
    }

    /// Applies a rotation about the Y-axis to this matrix (in place).
    ///
    /// ```text
    /// Ry(theta) = | cos(theta)  0  -sin(theta) |
    ///             |     0       1       0      |
    ///             | sin(theta)  0   cos(theta) |
    /// ```
    pub fn rotate_y(&mut self, theta: f64) {
        let (s, c) = theta.sin_cos();

        let a00 = c * self.elements[0][0] - s * self.elements[2][0];
        let a01 = c * self.elements[0][1] - s * self.elements[2][1];
        let a02 = c * self.elements[0][2] - s * self.elements[2][2];
        let a20 = s * self.elements[0][0] + c * self.elements[2][0];
        let a21 = s * self.elements[0][1] + c * self.elements[2][1];
        let a22 = s * self.elements[0][2] + c * self.elements[2][2];

        self.elements[0] = [a00, a01, a02];
        self.elements[2] = [a20, a21, a22];
    }

    /// Computes the matrix-vector product `M · v`.
    pub fn apply_to_vector(&self, vector: [f64; 3]) -> [f64; 3] {
        let m = &self.elements;
        [
            m[0][0] * vector[0] + m[0][1] * vector[1] + m[0][2] * vector[2],
            m[1][0] * vector[0] + m[1][1] * vector[1] + m[1][2] * vector[2],
            m[2][0] * vector[0] + m[2][1] * vector[1] + m[2][2] * vector[2],
        ]
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns the transpose, which for a rotation is its inverse.
    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::from_array([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Checks orthogonality (`M · Mᵀ = I`) and `det = +1` within `tolerance`.
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        if (self.determinant() - 1.0).abs() > tolerance {
            return false;
        }

        let t = self.transpose();
        for i in 0..3 {
            for j in 0..3 {
                let product: f64 = (0..3)
                    .map(|k| self.elements[i][k] * t.elements[k][j])
                    .sum();
                let expected = if i == j { 1.0 } else { 0.0 };
                if (product - expected).abs() > tolerance {
                    return false;
                }
            }
        }
        true
    }
}

impl std::ops::Mul<Vector3> for RotationMatrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        Vector3::from_array(self.apply_to_vector(vec.to_array()))
    }
}

impl fmt::Display for RotationMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RotationMatrix3:")?;
        for row in &self.elements {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HALF_PI;

    #[test]
    fn test_identity() {
        let m = RotationMatrix3::identity();
        let v = Vector3::new(1.0, -2.0, 3.0);
        assert_eq!(m * v, v);
        assert_eq!(m.determinant(), 1.0);
        assert_eq!(RotationMatrix3::default(), m);
    }

    #[test]
    fn test_rotate_z() {
        // Passive: [1,0,0] -> [cos(psi), -sin(psi), 0]
        let mut m = RotationMatrix3::identity();
        m.rotate_z(HALF_PI);
        let result = m.apply_to_vector([1.0, 0.0, 0.0]);
        assert!(result[0].abs() < 1e-15);
        assert!((result[1] + 1.0).abs() < 1e-15);
        assert!(result[2].abs() < 1e-15);
    }

    #[test]
    fn test_rotate_y() {
        // Passive: [0,0,1] -> [-sin(theta), 0, cos(theta)]
        let mut m = RotationMatrix3::identity();
        m.rotate_y(HALF_PI);
        let result = m.apply_to_vector([0.0, 0.0, 1.0]);
        assert!((result[0] + 1.0).abs() < 1e-15);
        assert!(result[1].abs() < 1e-15);
        assert!(result[2].abs() < 1e-15);
    }

    #[test]
    fn test_rotations_compose_in_call_order() {
        // z first, then y: +Y maps to +X, then +X maps to +Z
        let mut m = RotationMatrix3::identity();
        m.rotate_z(HALF_PI);
        m.rotate_y(HALF_PI);
        let v = m * Vector3::y_axis();
        assert!(v.x.abs() < 1e-15, "{}", v);
        assert!(v.y.abs() < 1e-15, "{}", v);
        assert!((v.z - 1.0).abs() < 1e-15, "{}", v);
    }

    #[test]
    fn test_transpose_inverts() {
        let mut m = RotationMatrix3::identity();
        m.rotate_z(0.5);
        m.rotate_y(-0.3);
        let v = Vector3::new(1.0, 2.0, 3.0);
        let restored = m.transpose() * (m * v);
        assert!((restored - v).magnitude() < 1e-14);
    }

    #[test]
    fn test_is_rotation_matrix() {
        let mut m = RotationMatrix3::identity();
        m.rotate_z(0.7);
        m.rotate_y(1.1);
        assert!(m.is_rotation_matrix(1e-14));
        assert!((m.determinant() - 1.0).abs() < 1e-14);

        let scaled =
            RotationMatrix3::from_array([[2.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(!scaled.is_rotation_matrix(1e-15));

        let sheared =
            RotationMatrix3::from_array([[1.0, 0.1, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        assert!(!sheared.is_rotation_matrix(1e-15));
    }

    #[test]
    fn test_display() {
        let m = RotationMatrix3::identity();
        let s = format!("{}", m);
        assert!(s.contains("RotationMatrix3:"));
        assert_eq!(s.lines().count(), 4);
    }
}
