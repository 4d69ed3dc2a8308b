//! 2D vector type
//!
//! Positions, velocities, dimensions and grid math all flow through `Vec2`.

use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 2D vector of f64 components.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Squared length (avoids the square root in hot-path comparisons)
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Heading angle in (-π, π]
    #[inline]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn dot(self, rhs: Vec2) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }

    /// The two perpendicular vectors: left `(-y, x)` first, right `(y, -x)`
    /// second. Both are returned so a caller building a wall's side offsets
    /// can pick a side deterministically.
    #[inline]
    pub fn perpendiculars(self) -> (Vec2, Vec2) {
        (Vec2::new(-self.y, self.x), Vec2::new(self.y, -self.x))
    }

    /// Unit vector in the same direction, or the zero vector when the length
    /// is zero.
    #[inline]
    pub fn normalize_or_zero(self) -> Vec2 {
        let len = self.length();
        if len == 0.0 { Vec2::ZERO } else { self / len }
    }

    /// Euclidean distance to another point. Symmetric.
    #[inline]
    pub fn distance(self, rhs: Vec2) -> f64 {
        (rhs - self).length()
    }

    #[inline]
    pub fn distance_squared(self, rhs: Vec2) -> f64 {
        (rhs - self).length_squared()
    }

    /// `self + rhs * s` in one step
    #[inline]
    pub fn add_scaled(self, rhs: Vec2, s: f64) -> Vec2 {
        Vec2::new(self.x + rhs.x * s, self.y + rhs.y * s)
    }

    /// Rotate counter-clockwise by `angle` radians
    pub fn rotated(self, angle: f64) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Cosine of the angle between two vectors, computed as
    /// `dot / (|a| |b|)`. The quotient is NOT clamped to [-1, 1]: floating
    /// point can push it slightly outside, and a zero vector yields NaN.
    /// Callers own those guards.
    pub fn cos_angle_between(self, rhs: Vec2) -> f64 {
        self.dot(rhs) / (self.length() * rhs.length())
    }

    /// Apply `f` to each component
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Vec2 {
        Vec2::new(f(self.x), f(self.y))
    }

    #[inline]
    pub fn floor(self) -> Vec2 {
        Vec2::new(self.x.floor(), self.y.floor())
    }

    #[inline]
    pub fn ceil(self) -> Vec2 {
        Vec2::new(self.x.ceil(), self.y.ceil())
    }

    /// Componentwise minimum
    #[inline]
    pub fn min(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x.min(rhs.x), self.y.min(rhs.y))
    }

    /// Componentwise maximum
    #[inline]
    pub fn max(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x.max(rhs.x), self.y.max(rhs.y))
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Build a vector from an ordered slice of at least two components.
    /// Anything shorter is rejected.
    pub fn from_slice(data: &[f64]) -> Result<Vec2> {
        match data {
            [x, y, ..] => Ok(Vec2::new(*x, *y)),
            _ => Err(Error::validation(
                "vector data",
                format!("need at least 2 components, got {}", data.len()),
            )),
        }
    }
}

impl From<(f64, f64)> for Vec2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Vec2::new(x, y)
    }
}

impl From<[f64; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Vec2::new(x, y)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        *self = *self - rhs;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

/// Componentwise product
impl Mul<Vec2> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl MulAssign<f64> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_add_identity() {
        let v = Vec2::new(3.5, -2.0);
        assert_eq!(v + Vec2::ZERO, v);
        assert_eq!(v - v, Vec2::ZERO);
    }

    #[test]
    fn test_length_and_angle() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-12);
        assert!((Vec2::new(0.0, 1.0).angle() - FRAC_PI_2).abs() < 1e-12);
        assert!((Vec2::new(-1.0, 0.0).angle() - PI).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_or_zero() {
        let v = Vec2::new(10.0, -3.0);
        assert!((v.normalize_or_zero().length() - 1.0).abs() < 1e-9);
        assert_eq!(Vec2::ZERO.normalize_or_zero(), Vec2::ZERO);
    }

    #[test]
    fn test_perpendiculars() {
        let (left, right) = Vec2::new(1.0, 0.0).perpendiculars();
        assert_eq!(left, Vec2::new(0.0, 1.0));
        assert_eq!(right, Vec2::new(0.0, -1.0));
        // Both are orthogonal to the input
        let v = Vec2::new(2.0, 7.0);
        let (l, r) = v.perpendiculars();
        assert_eq!(v.dot(l), 0.0);
        assert_eq!(v.dot(r), 0.0);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(-4.0, 6.5);
        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn test_rotated_quarter_turn() {
        let v = Vec2::new(1.0, 0.0).rotated(FRAC_PI_2);
        assert!((v.x).abs() < 1e-12);
        assert!((v.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_slice() {
        assert_eq!(Vec2::from_slice(&[1.0, 2.0, 9.0]).unwrap(), Vec2::new(1.0, 2.0));
        assert!(Vec2::from_slice(&[1.0]).is_err());
    }

    #[test]
    fn test_add_scaled() {
        let v = Vec2::new(1.0, 1.0).add_scaled(Vec2::new(2.0, -1.0), 0.5);
        assert_eq!(v, Vec2::new(2.0, 0.5));
    }

    #[test]
    fn test_cos_angle_between() {
        let x = Vec2::new(3.0, 0.0);
        assert!(x.cos_angle_between(Vec2::new(0.0, 2.0)).abs() < 1e-12);
        assert!((x.cos_angle_between(Vec2::new(5.0, 0.0)) - 1.0).abs() < 1e-12);
        assert!((x.cos_angle_between(Vec2::new(-1.0, 0.0)) + 1.0).abs() < 1e-12);
        // Unclamped quotient: a zero vector comes out NaN, the caller guards
        assert!(x.cos_angle_between(Vec2::ZERO).is_nan());
    }
}
