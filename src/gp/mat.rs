//! 3x3 matrix.
//!
//! Linear part of rotations and reflections applied to raw coordinates.

use super::XYZ;

/// 3x3 matrix, row-major.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Mat {
    data: [[f64; 3]; 3],
}

impl Mat {
    /// Builds a matrix whose columns are the given vectors.
    pub fn from_columns(c1: &XYZ, c2: &XYZ, c3: &XYZ) -> Self {
        Self {
            data: [
                [c1.x(), c2.x(), c3.x()],
                [c1.y(), c2.y(), c3.y()],
                [c1.z(), c2.z(), c3.z()],
            ],
        }
    }

    /// Rotation by `angle` radians about the unit vector `d`.
    ///
    /// Built from the unit quaternion `(cos(θ/2), sin(θ/2) * d)` so that the
    /// result is orthonormal to working precision even for large angles.
    pub fn rotation(d: &XYZ, angle: f64) -> Self {
        let half_angle = 0.5 * angle;
        let sin_half_angle = half_angle.sin();
        let qx = d.x() * sin_half_angle;
        let qy = d.y() * sin_half_angle;
        let qz = d.z() * sin_half_angle;
        let qw = half_angle.cos();
        let wx = qw * qx;
        let wy = qw * qy;
        let wz = qw * qz;
        let xx = qx * qx;
        let xy = qx * qy;
        let xz = qx * qz;
        let yy = qy * qy;
        let yz = qy * qz;
        let zz = qz * qz;
        Self {
            data: [
                [1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz), 2.0 * (xz + wy)],
                [2.0 * (xy + wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx)],
                [2.0 * (xz - wy), 2.0 * (yz + wx), 1.0 - 2.0 * (xx + yy)],
            ],
        }
    }

    /// Reflection across the plane through the origin with unit normal `n`:
    /// `I - 2 n nᵀ`.
    pub fn mirror(n: &XYZ) -> Self {
        let (x, y, z) = n.coords();
        let xy = -2.0 * x * y;
        let xz = -2.0 * x * z;
        let yz = -2.0 * y * z;
        Self {
            data: [
                [1.0 - 2.0 * x * x, xy, xz],
                [xy, 1.0 - 2.0 * y * y, yz],
                [xz, yz, 1.0 - 2.0 * z * z],
            ],
        }
    }

    /// Multiplies matrix by XYZ (column vector).
    pub fn multiply_xyz(&self, xyz: &XYZ) -> XYZ {
        let m = &self.data;
        XYZ::from_coords(
            m[0][0] * xyz.x() + m[0][1] * xyz.y() + m[0][2] * xyz.z(),
            m[1][0] * xyz.x() + m[1][1] * xyz.y() + m[1][2] * xyz.z(),
            m[2][0] * xyz.x() + m[2][1] * xyz.y() + m[2][2] * xyz.z(),
        )
    }

    /// Computes determinant.
    pub fn determinant(&self) -> f64 {
        let m = &self.data;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_mat_rotation_90deg_about_z() {
        let m = Mat::rotation(&XYZ::from_coords(0.0, 0.0, 1.0), PI / 2.0);
        let r = m.multiply_xyz(&XYZ::from_coords(1.0, 0.0, 0.0));
        assert!(r.x().abs() < 1e-12);
        assert!((r.y() - 1.0).abs() < 1e-12);
        assert!(r.z().abs() < 1e-12);
    }

    #[test]
    fn test_mat_rotation_is_proper() {
        let d = XYZ::from_coords(1.0, 2.0, 2.0).normalized().unwrap();
        let m = Mat::rotation(&d, 1.234);
        assert!((m.determinant() - 1.0).abs() < 1e-12);
        // The axis is fixed by the rotation
        let fixed = m.multiply_xyz(&d);
        assert!((fixed - d).modulus() < 1e-12);
    }

    #[test]
    fn test_mat_mirror() {
        let m = Mat::mirror(&XYZ::from_coords(0.0, 0.0, 1.0));
        assert_eq!(m.multiply_xyz(&XYZ::from_coords(1.0, 2.0, 3.0)), XYZ::from_coords(1.0, 2.0, -3.0));
        assert!((m.determinant() + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_mat_from_columns_determinant() {
        let m = Mat::from_columns(
            &XYZ::from_coords(1.0, 0.0, 0.0),
            &XYZ::from_coords(0.0, 1.0, 0.0),
            &XYZ::from_coords(0.0, 0.0, 1.0),
        );
        assert_eq!(m.determinant(), 1.0);
    }
}
