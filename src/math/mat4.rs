//! 4x4 matrix
//!
//! Row-major, used for 3D rotations and perspective projection of
//! homogeneous points.

use core::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::math::Vec3;

/// A row-major 4x4 matrix of f64.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mat4 {
    pub rows: [[f64; 4]; 4],
}

impl Mat4 {
    #[inline]
    pub const fn new(rows: [[f64; 4]; 4]) -> Self {
        Self { rows }
    }

    /// Build from untrusted row data. Fails unless the input is exactly
    /// 4 rows of 4 columns.
    pub fn try_from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        if rows.len() != 4 || rows.iter().any(|r| r.len() != 4) {
            return Err(Error::validation(
                "matrix data",
                format!(
                    "expected 4x4, got {} rows of {:?} columns",
                    rows.len(),
                    rows.iter().map(Vec::len).collect::<Vec<_>>()
                ),
            ));
        }
        let mut m = [[0.0; 4]; 4];
        for (dst, src) in m.iter_mut().zip(rows) {
            dst.copy_from_slice(src);
        }
        Ok(Self::new(m))
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the x axis, right-hand rule
    pub fn rotation_x(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, cos, -sin, 0.0],
            [0.0, sin, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the y axis, right-hand rule
    pub fn rotation_y(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new([
            [cos, 0.0, sin, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-sin, 0.0, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation about the z axis, right-hand rule
    pub fn rotation_z(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new([
            [cos, -sin, 0.0, 0.0],
            [sin, cos, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Perspective projection. `aspect` is height/width, `fov` the vertical
    /// field of view in radians. Depth maps through
    /// `q = z_far / (z_far - z_near)`; the projected w carries the view-space
    /// z so [`transform_point`](Self::transform_point) can divide it back
    /// out.
    pub fn perspective(aspect: f64, fov: f64, z_near: f64, z_far: f64) -> Self {
        let f = 1.0 / (fov / 2.0).tan();
        let q = z_far / (z_far - z_near);
        Self::new([
            [aspect * f, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, q, -z_near * q],
            [0.0, 0.0, 1.0, 0.0],
        ])
    }

    pub fn transpose(self) -> Self {
        let m = &self.rows;
        let mut t = [[0.0; 4]; 4];
        for (i, row) in t.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = m[j][i];
            }
        }
        Self::new(t)
    }

    /// Cofactor expansion along the first row, via 3x3 minors
    pub fn determinant(self) -> f64 {
        let m = &self.rows;
        let minor = |col: usize| -> f64 {
            let mut sub = [[0.0; 3]; 3];
            for (si, mi) in (1..4).enumerate() {
                let mut sj = 0;
                for mj in 0..4 {
                    if mj == col {
                        continue;
                    }
                    sub[si][sj] = m[mi][mj];
                    sj += 1;
                }
            }
            det3(&sub)
        };
        m[0][0] * minor(0) - m[0][1] * minor(1) + m[0][2] * minor(2) - m[0][3] * minor(3)
    }

    /// Element-wise scalar multiply
    pub fn scale(self, s: f64) -> Self {
        let mut m = self.rows;
        for row in &mut m {
            for v in row {
                *v *= s;
            }
        }
        Self::new(m)
    }

    /// Right-multiply a column vector. No perspective divide.
    pub fn mul_vec(self, v: [f64; 4]) -> [f64; 4] {
        let m = &self.rows;
        let mut out = [0.0; 4];
        for (o, row) in out.iter_mut().zip(m) {
            *o = row[0] * v[0] + row[1] * v[1] + row[2] * v[2] + row[3] * v[3];
        }
        out
    }

    /// Transform a homogeneous point and divide through by the resulting w
    /// (when nonzero), restoring Cartesian space after projection.
    pub fn transform_point(self, p: Vec3) -> Vec3 {
        let [x, y, z, w] = self.mul_vec([p.x, p.y, p.z, p.w]);
        let mut out = if w != 0.0 {
            Vec3::new(x / w, y / w, z / w)
        } else {
            Vec3::new(x, y, z)
        };
        out.w = w;
        out
    }
}

fn det3(m: &[[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

impl Add for Mat4 {
    type Output = Mat4;
    fn add(self, rhs: Mat4) -> Mat4 {
        let mut m = self.rows;
        for (row, rrow) in m.iter_mut().zip(&rhs.rows) {
            for (v, rv) in row.iter_mut().zip(rrow) {
                *v += rv;
            }
        }
        Mat4::new(m)
    }
}

impl Sub for Mat4 {
    type Output = Mat4;
    fn sub(self, rhs: Mat4) -> Mat4 {
        let mut m = self.rows;
        for (row, rrow) in m.iter_mut().zip(&rhs.rows) {
            for (v, rv) in row.iter_mut().zip(rrow) {
                *v -= rv;
            }
        }
        Mat4::new(m)
    }
}

impl Mul<f64> for Mat4 {
    type Output = Mat4;
    #[inline]
    fn mul(self, rhs: f64) -> Mat4 {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_identity_passthrough() {
        let p = Vec3::new(1.0, -2.0, 3.0);
        assert_eq!(Mat4::identity().transform_point(p), p);
    }

    #[test]
    fn test_rotation_z_quarter_turn() {
        let r = Mat4::rotation_z(FRAC_PI_2);
        let p = r.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!(p.x.abs() < 1e-12);
        assert!((p.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_determinant_is_one() {
        assert!((Mat4::rotation_x(1.1).determinant() - 1.0).abs() < 1e-12);
        assert!((Mat4::rotation_y(-0.4).determinant() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_try_from_rows_shape() {
        let ragged = Mat4::try_from_rows(&[vec![0.0; 4], vec![0.0; 4], vec![0.0; 3], vec![0.0; 4]]);
        assert!(ragged.is_err());
        let ok = Mat4::try_from_rows(&[vec![0.0; 4], vec![0.0; 4], vec![0.0; 4], vec![0.0; 4]]);
        assert!(ok.is_ok());
    }

    #[test]
    fn test_perspective_depth_mapping() {
        let (z_near, z_far) = (0.1, 100.0);
        let proj = Mat4::perspective(1.0, FRAC_PI_2, z_near, z_far);

        // A point on the near plane projects to depth 0
        let near = proj.transform_point(Vec3::new(0.0, 0.0, z_near));
        assert!(near.z.abs() < 1e-9);

        // A point on the far plane projects to depth 1
        let far = proj.transform_point(Vec3::new(0.0, 0.0, z_far));
        assert!((far.z - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_perspective_divide_carries_w() {
        let proj = Mat4::perspective(1.0, FRAC_PI_2, 0.1, 100.0);
        let p = proj.transform_point(Vec3::new(2.0, 1.0, 10.0));
        // w picks up the view-space z
        assert!((p.w - 10.0).abs() < 1e-12);
        // x and y are divided by it
        assert!((p.x - 2.0 / 10.0).abs() < 1e-12);
        assert!((p.y - 1.0 / 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_determinant_diagonal() {
        let m = Mat4::identity().scale(2.0);
        assert!((m.determinant() - 16.0).abs() < 1e-12);
    }
}
