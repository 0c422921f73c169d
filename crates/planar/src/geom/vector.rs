use std::ops::{Add, Mul, Neg, Sub};

use rand::Rng;

use super::angle::TWO_PI;

/// Immutable 2D point/direction vector.
///
/// Equality is exact component-wise f64 equality; no epsilon.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Random vector with both components drawn from `[0, 1)`.
    ///
    /// Draws come from the thread-local CSPRNG, the one piece of
    /// process-wide state this crate touches.
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self::new(rng.gen(), rng.gen())
    }

    /// Random vector with both components in `[min, max)`.
    pub fn random_range(min: f64, max: f64) -> Self {
        Self::random_rect(min, max, min, max)
    }

    /// Random vector with x in `[x_min, x_max)` and y in `[y_min, y_max)`.
    pub fn random_rect(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        let mut rng = rand::thread_rng();
        Self::new(
            x_min + rng.gen::<f64>() * (x_max - x_min),
            y_min + rng.gen::<f64>() * (y_max - y_min),
        )
    }

    /// Rotates around the coordinate origin by `angle` radians.
    ///
    /// ```text
    /// n.x = x cos a - y sin a
    /// n.y = x sin a + y cos a
    /// ```
    pub fn rotate(self, angle: f64) -> Self {
        let ca = angle.cos();
        let sa = angle.sin();
        Self::new(self.x * ca - self.y * sa, self.x * sa + self.y * ca)
    }

    /// Rotates around `origin` by `angle` radians.
    pub fn rotate_around(self, origin: Vector, angle: f64) -> Self {
        (self - origin).rotate(angle) + origin
    }

    /// Angle in `[0, 2π)` between this vector and `v`, measured at the
    /// origin. `acos` alone yields `[0, π]`; the sign of the z cross
    /// component decides whether the reflex angle is meant.
    pub fn angle(self, v: Vector) -> f64 {
        let dot = (self.dot(v) / (self.length() * v.length())).clamp(-1.0, 1.0);
        let angle = dot.acos();
        let z_cross = self.x * v.y - self.y * v.x;
        if z_cross < 0.0 {
            TWO_PI - angle
        } else {
            angle
        }
    }

    #[inline]
    pub fn dot(self, v: Vector) -> f64 {
        self.x * v.x + self.y * v.y
    }

    /// z-component of the 2D cross product, `x1*y2 - y1*x2`.
    #[inline]
    pub fn determinant(self, v: Vector) -> f64 {
        self.x * v.y - self.y * v.x
    }

    #[inline]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Distance from this point to `v`.
    #[inline]
    pub fn distance(self, v: Vector) -> f64 {
        (v - self).length()
    }

    /// Unit vector. A zero-length input yields NaN components by
    /// contract, not an error; callers that care test for NaN.
    pub fn normalize(self) -> Self {
        let n = self.length();
        Self::new(self.x / n, self.y / n)
    }

    /// Whether `dir` is linearly dependent on this direction vector.
    /// False when either has zero length; otherwise the normalized
    /// forms must be exactly equal or exactly negated.
    pub fn is_linearly_dependent(self, dir: Vector) -> bool {
        if self.length() == 0.0 || dir.length() == 0.0 {
            return false;
        }
        let v1 = self.normalize();
        let v2 = dir.normalize();
        v1 == v2 || -v1 == v2
    }
}

impl Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, f: f64) -> Vector {
        Vector::new(self.x * f, self.y * f)
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}
