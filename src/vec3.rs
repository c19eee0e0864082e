//! Small 3-vector used for arrow geometry and camera math.

use crate::{Error, Result};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Below this magnitude a vector has no usable direction.
const NORMALIZE_EPS: f64 = 1e-10;

/// A point or direction in 3-D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// `self × other`.
    #[inline]
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// Fails for vectors shorter than `1e-10` (including NaN components).
    pub fn normalize(self) -> Result<Vec3> {
        let mag = self.magnitude();
        // `!(mag >= eps)` also catches NaN.
        if !(mag >= NORMALIZE_EPS) || !mag.is_finite() {
            return Err(Error::ZeroVector("cannot normalize a zero-length vector"));
        }
        Ok(self * (1.0 / mag))
    }

    /// Projection of `self` onto `onto`: `(a·b / |b|²) b`.
    pub fn project_onto(self, onto: Vec3) -> Result<Vec3> {
        let b_sq = onto.dot(onto);
        if !(b_sq >= NORMALIZE_EPS) {
            return Err(Error::ZeroVector("cannot project onto a zero-length vector"));
        }
        Ok(onto * (self.dot(onto) / b_sq))
    }

    /// Mirror `self` across the plane with the given normal: `v - 2·proj_n(v)`.
    pub fn reflect(self, normal: Vec3) -> Result<Vec3> {
        Ok(self - self.project_onto(normal)? * 2.0)
    }

    /// Angle between two vectors in radians, in `[0, π]`.
    pub fn angle_between(self, other: Vec3) -> Result<f64> {
        let mags = self.magnitude() * other.magnitude();
        if !(mags >= 1e-20) {
            return Err(Error::ZeroVector("cannot take the angle with a zero-length vector"));
        }
        Ok((self.dot(other) / mags).clamp(-1.0, 1.0).acos())
    }

    /// Rotate `self` about the unit axis `k` by `angle` radians (Rodrigues).
    pub fn rotate_about(self, k: Vec3, angle: f64) -> Vec3 {
        let (s, c) = angle.sin_cos();
        self * c + k.cross(self) * s + k * (k.dot(self) * (1.0 - c))
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Vec3) {
        *self = *self - rhs;
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, s: f64) -> Vec3 {
        Vec3::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, v: Vec3) -> Vec3 {
        v * self
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, s: f64) {
        *self = *self * s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, -5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, -3.0, 9.0));
        assert_eq!(a - b, Vec3::new(-3.0, 7.0, -3.0));
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        c -= b;
        c *= 3.0;
        assert_eq!(c, Vec3::new(3.0, 6.0, 9.0));
    }

    #[test]
    fn dot_and_cross() {
        assert_eq!(Vec3::X.dot(Vec3::Y), 0.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
    }

    #[test]
    fn normalize_unit_length() {
        let n = Vec3::new(3.0, 0.0, 4.0).normalize().unwrap();
        assert!((n.magnitude() - 1.0).abs() < 1e-12);
        assert!((n.x - 0.6).abs() < 1e-12);
    }

    #[test]
    fn normalize_rejects_zero_and_nan() {
        assert!(Vec3::ZERO.normalize().is_err());
        assert!(Vec3::new(f64::NAN, 1.0, 0.0).normalize().is_err());
        assert!(Vec3::new(f64::INFINITY, 1.0, 0.0).normalize().is_err());
    }

    #[test]
    fn projection_and_reflection() {
        let v = Vec3::new(2.0, 3.0, 0.0);
        let p = v.project_onto(Vec3::X * 5.0).unwrap();
        assert_eq!(p, Vec3::new(2.0, 0.0, 0.0));

        // Bounce off the floor.
        let r = Vec3::new(1.0, -1.0, 0.0).reflect(Vec3::Y).unwrap();
        assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));

        assert!(v.project_onto(Vec3::ZERO).is_err());
        assert!(v.reflect(Vec3::ZERO).is_err());
    }

    #[test]
    fn angles() {
        assert!((Vec3::X.angle_between(Vec3::Y).unwrap() - FRAC_PI_2).abs() < 1e-12);
        assert!((Vec3::X.angle_between(-Vec3::X).unwrap() - PI).abs() < 1e-12);
        assert!(Vec3::X.angle_between(Vec3::X * 7.0).unwrap().abs() < 1e-7);
        assert!(Vec3::ZERO.angle_between(Vec3::X).is_err());
    }

    #[test]
    fn rotate_quarter_turn() {
        let r = Vec3::X.rotate_about(Vec3::Z, FRAC_PI_2);
        assert!((r - Vec3::Y).magnitude() < 1e-12);
    }

    fn finite_vec() -> impl Strategy<Value = Vec3> {
        (-1e3f64..1e3, -1e3f64..1e3, -1e3f64..1e3).prop_map(|(x, y, z)| Vec3::new(x, y, z))
    }

    proptest! {
        #[test]
        fn prop_cross_is_orthogonal(a in finite_vec(), b in finite_vec()) {
            let c = a.cross(b);
            let scale = (a.magnitude() * b.magnitude()).max(1.0);
            prop_assert!(c.dot(a).abs() / (scale * a.magnitude().max(1.0)) < 1e-9);
            prop_assert!(c.dot(b).abs() / (scale * b.magnitude().max(1.0)) < 1e-9);
        }

        #[test]
        fn prop_rotation_preserves_length(v in finite_vec(), angle in -6.3f64..6.3) {
            let r = v.rotate_about(Vec3::Z, angle);
            prop_assert!((r.magnitude() - v.magnitude()).abs() < 1e-9 * v.magnitude().max(1.0));
        }
    }
}
