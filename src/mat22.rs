use core::fmt;
use core::ops::{Add, Mul};

use crate::vec2::Vec2;

/// Column-major 2x2 matrix: `ex` is the first column, `ey` the second.
///
/// ```text
/// | ex.x  ey.x |
/// | ex.y  ey.y |
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Mat22 {
    pub ex: Vec2,
    pub ey: Vec2,
}

impl Mat22 {
    #[inline]
    pub const fn new(ex: Vec2, ey: Vec2) -> Self {
        Self { ex, ey }
    }

    /// Builds from row-major scalars: `a, c` form the first column,
    /// `b, d` the second.
    #[inline]
    pub const fn from_scalars(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::new(Vec2::new(a, c), Vec2::new(b, d))
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0))
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0))
    }

    #[inline]
    pub fn from_angle(angle: f64) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self::new(Vec2::new(c, s), Vec2::new(-s, c))
    }

    #[inline]
    pub fn set_identity(&mut self) {
        self.ex.set(1.0, 0.0);
        self.ey.set(0.0, 1.0);
    }

    #[inline]
    pub fn set_zero(&mut self) {
        self.ex.set_zero();
        self.ey.set_zero();
    }

    #[inline]
    pub fn set_from_scalars(&mut self, a: f64, b: f64, c: f64, d: f64) {
        self.ex.set(a, c);
        self.ey.set(b, d);
    }

    #[inline]
    pub fn set_from_columns(&mut self, ex: Vec2, ey: Vec2) {
        self.ex = ex;
        self.ey = ey;
    }

    #[inline]
    pub fn set_from_matrix(&mut self, m: Mat22) {
        debug_assert!(m.is_valid(), "set_from_matrix given invalid matrix: {m}");
        self.ex = m.ex;
        self.ey = m.ey;
    }

    #[inline]
    pub fn det(self) -> f64 {
        self.ex.x * self.ey.y - self.ey.x * self.ex.y
    }

    #[inline]
    pub fn is_invertible(self) -> bool {
        self.det() != 0.0
    }

    /// Adjugate-over-determinant inverse. A singular matrix does not
    /// panic: the reciprocal stays zero and the result is the zero
    /// matrix. Callers that need to detect this case should check
    /// [`Mat22::is_invertible`] first.
    #[inline]
    pub fn inverse(self) -> Self {
        debug_assert!(self.is_valid(), "inverse of invalid matrix: {self}");
        let a = self.ex.x;
        let b = self.ey.x;
        let c = self.ex.y;
        let d = self.ey.y;

        let mut det = a * d - b * c;
        if det != 0.0 {
            det = 1.0 / det;
        }
        Self::new(Vec2::new(det * d, -det * c), Vec2::new(-det * b, det * a))
    }

    /// Solves `self * x = v` by Cramer's rule without forming the
    /// inverse. Same singular-matrix policy as [`Mat22::inverse`].
    #[inline]
    pub fn solve(self, v: Vec2) -> Vec2 {
        debug_assert!(self.is_valid(), "solve on invalid matrix: {self}");
        debug_assert!(v.is_valid(), "solve given invalid vector");
        let a = self.ex.x;
        let b = self.ey.x;
        let c = self.ex.y;
        let d = self.ey.y;

        let mut det = a * d - b * c;
        if det != 0.0 {
            det = 1.0 / det;
        }
        Vec2::new(det * (d * v.x - b * v.y), det * (a * v.y - c * v.x))
    }

    #[inline]
    pub fn transpose(self) -> Self {
        Self::new(
            Vec2::new(self.ex.x, self.ey.x),
            Vec2::new(self.ex.y, self.ey.y),
        )
    }

    /// Transpose times vector: `(v . ex, v . ey)`. For a rotation
    /// matrix this is the inverse transform.
    #[inline]
    pub fn mul_t(self, v: Vec2) -> Vec2 {
        debug_assert!(self.is_valid(), "mul_t on invalid matrix: {self}");
        debug_assert!(v.is_valid(), "mul_t given invalid vector");
        Vec2::new(v.dot(self.ex), v.dot(self.ey))
    }

    /// Transpose times matrix: `self^T * m`.
    #[inline]
    pub fn mul_t_mat(self, m: Mat22) -> Self {
        debug_assert!(self.is_valid(), "mul_t_mat on invalid matrix: {self}");
        debug_assert!(m.is_valid(), "mul_t_mat given invalid matrix: {m}");
        Self::new(
            Vec2::new(self.ex.dot(m.ex), self.ey.dot(m.ex)),
            Vec2::new(self.ex.dot(m.ey), self.ey.dot(m.ey)),
        )
    }

    #[inline]
    pub fn abs(self) -> Self {
        debug_assert!(self.is_valid(), "abs of invalid matrix: {self}");
        Self::new(self.ex.abs(), self.ey.abs())
    }

    /// Both columns finite and not NaN.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.ex.is_valid() && self.ey.is_valid()
    }
}

impl Mul<Vec2> for Mat22 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        self.ex * rhs.x + self.ey * rhs.y
    }
}

impl Mul for Mat22 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self * rhs.ex, self * rhs.ey)
    }
}

impl Add for Mat22 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.ex + rhs.ex, self.ey + rhs.ey)
    }
}

impl fmt::Display for Mat22 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ex: ({}, {}), ey: ({}, {})]",
            self.ex.x, self.ex.y, self.ey.x, self.ey.y
        )
    }
}
