//! 3x3 matrix
//!
//! Row-major, used for 2D transforms in homogeneous form (rotation about the
//! origin, map-to-world projections).

use core::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::math::Vec2;

/// A row-major 3x3 matrix of f64.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mat3 {
    pub rows: [[f64; 3]; 3],
}

impl Mat3 {
    #[inline]
    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Build from untrusted row data. Fails unless the input is exactly
    /// 3 rows of 3 columns.
    pub fn try_from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        if rows.len() != 3 || rows.iter().any(|r| r.len() != 3) {
            return Err(Error::validation(
                "matrix data",
                format!(
                    "expected 3x3, got {} rows of {:?} columns",
                    rows.len(),
                    rows.iter().map(Vec::len).collect::<Vec<_>>()
                ),
            ));
        }
        let mut m = [[0.0; 3]; 3];
        for (dst, src) in m.iter_mut().zip(rows) {
            dst.copy_from_slice(src);
        }
        Ok(Self::new(m))
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// 2D counter-clockwise rotation about the origin, embedded in
    /// homogeneous form.
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new([[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Row/column swap
    pub fn transpose(self) -> Self {
        let m = &self.rows;
        Self::new([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Cofactor expansion along the first row
    pub fn determinant(self) -> f64 {
        let m = &self.rows;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
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

    /// Right-multiply a column vector
    pub fn mul_vec(self, v: [f64; 3]) -> [f64; 3] {
        let m = &self.rows;
        [
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        ]
    }

    /// Transform a 2D point, padding it to homogeneous form with w = 1
    pub fn transform_point(self, p: Vec2) -> [f64; 3] {
        self.mul_vec([p.x, p.y, 1.0])
    }
}

impl Add for Mat3 {
    type Output = Mat3;
    fn add(self, rhs: Mat3) -> Mat3 {
        let mut m = self.rows;
        for (row, rrow) in m.iter_mut().zip(&rhs.rows) {
            for (v, rv) in row.iter_mut().zip(rrow) {
                *v += rv;
            }
        }
        Mat3::new(m)
    }
}

impl Sub for Mat3 {
    type Output = Mat3;
    fn sub(self, rhs: Mat3) -> Mat3 {
        let mut m = self.rows;
        for (row, rrow) in m.iter_mut().zip(&rhs.rows) {
            for (v, rv) in row.iter_mut().zip(rrow) {
                *v -= rv;
            }
        }
        Mat3::new(m)
    }
}

impl Mul<f64> for Mat3 {
    type Output = Mat3;
    #[inline]
    fn mul(self, rhs: f64) -> Mat3 {
        self.scale(rhs)
    }
}
