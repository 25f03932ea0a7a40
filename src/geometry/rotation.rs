//! Sphere orientation: Euler angles, the composed rotation matrix, and its application to points.

use glam::{DMat3, DVec3};

use crate::foundation::core::Point3;

/// Rotation angles in radians about the x, y and z axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EulerAngles {
    /// Rotation about the x axis (alpha).
    pub x: f64,
    /// Rotation about the y axis (beta).
    pub y: f64,
    /// Rotation about the z axis (gamma).
    pub z: f64,
}

impl EulerAngles {
    /// Angles given in radians.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Angles given in degrees.
    pub fn from_degrees(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: x.to_radians(),
            y: y.to_radians(),
            z: z.to_radians(),
        }
    }

    /// Whether every angle is a finite number.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Immutable orthonormal 3x3 rotation, `R = Rz(gamma) * Ry(beta) * Rx(alpha)`.
///
/// Built once per run and shared read-only by every pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationMatrix(DMat3);

impl RotationMatrix {
    /// No rotation.
    pub const IDENTITY: Self = Self(DMat3::IDENTITY);

    /// Compose the rotation for `alpha` about x, then `beta` about y, then `gamma` about z.
    ///
    /// The entries are written out in closed form rather than multiplied from three factor
    /// matrices, so the result does not depend on the order of floating-point products.
    pub fn from_euler(alpha: f64, beta: f64, gamma: f64) -> Self {
        let (sa, ca) = alpha.sin_cos();
        let (sb, cb) = beta.sin_cos();
        let (sg, cg) = gamma.sin_cos();

        let rows = [
            [cg * cb, cg * sb * sa - sg * ca, cg * sb * ca + sg * sa],
            [sg * cb, sg * sb * sa + cg * ca, sg * sb * ca - cg * sa],
            [-sb, cb * sa, cb * ca],
        ];
        Self::from_rows(rows)
    }

    /// Same as [`RotationMatrix::from_euler`] with the angles bundled.
    pub fn from_angles(angles: EulerAngles) -> Self {
        Self::from_euler(angles.x, angles.y, angles.z)
    }

    fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        // glam stores columns.
        Self(DMat3::from_cols_array_2d(&rows).transpose())
    }

    /// Row-major copy of the entries.
    pub fn rows(&self) -> [[f64; 3]; 3] {
        self.0.transpose().to_cols_array_2d()
    }

    /// Underlying glam matrix.
    pub fn as_mat3(&self) -> DMat3 {
        self.0
    }

    /// Matrix-vector product `R * p`. Preserves the length of `p`.
    #[inline]
    pub fn rotate(&self, p: Point3) -> Point3 {
        self.0 * p
    }

    /// Largest absolute deviation of `R^T * R` from the identity.
    pub fn orthonormality_error(&self) -> f64 {
        let d = self.0.transpose() * self.0 - DMat3::IDENTITY;
        [d.x_axis, d.y_axis, d.z_axis]
            .into_iter()
            .map(|c: DVec3| c.abs().max_element())
            .fold(0.0, f64::max)
    }
}

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<EulerAngles> for RotationMatrix {
    fn from(angles: EulerAngles) -> Self {
        Self::from_angles(angles)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/rotation.rs"]
mod tests;
