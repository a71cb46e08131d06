//! 3D coordinate triplet.
//!
//! The raw storage behind every 3D primitive (vectors, points, directions).
//! Carries no unit or frame tags.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::units::interpolate;

/// 3D cartesian coordinate entity {X, Y, Z}.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct XYZ {
    x: f64,
    y: f64,
    z: f64,
}

impl XYZ {
    /// Creates an XYZ with zero coordinates (0, 0, 0).
    #[inline]
    pub const fn new() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Creates an XYZ with given coordinates.
    #[inline]
    pub const fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the X coordinate.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the Y coordinate.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns the Z coordinate.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Returns all three coordinates.
    #[inline]
    pub const fn coords(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    #[inline]
    fn largest_component(&self) -> f64 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }

    /// Computes the modulus by scaling with the largest absolute component,
    /// so that squaring can neither overflow nor underflow.
    pub fn modulus(&self) -> f64 {
        let largest = self.largest_component();
        if largest == 0.0 {
            return 0.0;
        }
        let sx = self.x / largest;
        let sy = self.y / largest;
        let sz = self.z / largest;
        (sx * sx + sy * sy + sz * sz).sqrt() * largest
    }

    /// Computes the square of the modulus.
    #[inline]
    pub const fn square_modulus(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns the modulus and the unit vector, or None for the exact zero
    /// vector.
    pub fn modulus_and_normalized(&self) -> Option<(f64, XYZ)> {
        let largest = self.largest_component();
        if largest == 0.0 {
            return None;
        }
        let sx = self.x / largest;
        let sy = self.y / largest;
        let sz = self.z / largest;
        let scaled_length = (sx * sx + sy * sy + sz * sz).sqrt();
        Some((
            scaled_length * largest,
            XYZ::from_coords(sx / scaled_length, sy / scaled_length, sz / scaled_length),
        ))
    }

    /// Returns the unit vector, or None for the exact zero vector.
    #[inline]
    pub fn normalized(&self) -> Option<XYZ> {
        self.modulus_and_normalized().map(|(_, unit)| unit)
    }

    /// Returns `self + other`.
    #[inline]
    pub fn added(&self, other: &XYZ) -> XYZ {
        XYZ::from_coords(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Returns `self - other`.
    #[inline]
    pub fn subtracted(&self, other: &XYZ) -> XYZ {
        XYZ::from_coords(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Returns the triple scaled by `scalar`.
    #[inline]
    pub fn multiplied(&self, scalar: f64) -> XYZ {
        XYZ::from_coords(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Returns the triple divided by `scalar`.
    #[inline]
    pub fn divided(&self, scalar: f64) -> XYZ {
        XYZ::from_coords(self.x / scalar, self.y / scalar, self.z / scalar)
    }

    /// Returns the negated triple.
    #[inline]
    pub fn reversed(&self) -> XYZ {
        XYZ::from_coords(-self.x, -self.y, -self.z)
    }

    /// Returns the scalar product.
    #[inline]
    pub const fn dot(&self, other: &XYZ) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Returns the cross product `self × other`.
    #[inline]
    pub fn crossed(&self, other: &XYZ) -> XYZ {
        XYZ::from_coords(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// `a1 * xyz1 + a2 * xyz2`.
    #[inline]
    pub fn linear_form_2(a1: f64, xyz1: &XYZ, a2: f64, xyz2: &XYZ) -> XYZ {
        XYZ::from_coords(
            a1 * xyz1.x + a2 * xyz2.x,
            a1 * xyz1.y + a2 * xyz2.y,
            a1 * xyz1.z + a2 * xyz2.z,
        )
    }

    /// `a1 * xyz1 + a2 * xyz2 + a3 * xyz3`.
    #[inline]
    pub fn linear_form_3(a1: f64, xyz1: &XYZ, a2: f64, xyz2: &XYZ, a3: f64, xyz3: &XYZ) -> XYZ {
        XYZ::from_coords(
            a1 * xyz1.x + a2 * xyz2.x + a3 * xyz3.x,
            a1 * xyz1.y + a2 * xyz2.y + a3 * xyz3.y,
            a1 * xyz1.z + a2 * xyz2.z + a3 * xyz3.z,
        )
    }

    /// Componentwise interpolation, exact at `t = 0` and `t = 1`.
    #[inline]
    pub fn interpolated(a: &XYZ, b: &XYZ, t: f64) -> XYZ {
        XYZ::from_coords(
            interpolate(a.x, b.x, t),
            interpolate(a.y, b.y, t),
            interpolate(a.z, b.z, t),
        )
    }

    /// A vector perpendicular to this one with comparable magnitude: the
    /// smallest-magnitude component is dropped and the other two swapped.
    pub fn perpendicular(&self) -> XYZ {
        let ax = self.x.abs();
        let ay = self.y.abs();
        let az = self.z.abs();
        if ax <= ay {
            if ax <= az {
                XYZ::from_coords(0.0, -self.z, self.y)
            } else {
                XYZ::from_coords(-self.y, self.x, 0.0)
            }
        } else if ay <= az {
            XYZ::from_coords(self.z, 0.0, -self.x)
        } else {
            XYZ::from_coords(-self.y, self.x, 0.0)
        }
    }
}

impl Add for XYZ {
    type Output = XYZ;
    fn add(self, other: XYZ) -> XYZ {
        self.added(&other)
    }
}

impl Sub for XYZ {
    type Output = XYZ;
    fn sub(self, other: XYZ) -> XYZ {
        self.subtracted(&other)
    }
}

impl Mul<f64> for XYZ {
    type Output = XYZ;
    fn mul(self, scalar: f64) -> XYZ {
        self.multiplied(scalar)
    }
}

impl Neg for XYZ {
    type Output = XYZ;
    fn neg(self) -> XYZ {
        self.reversed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xyz_modulus() {
        assert!((XYZ::from_coords(2.0, 3.0, 6.0).modulus() - 7.0).abs() < 1e-12);
        assert_eq!(XYZ::new().modulus(), 0.0);
    }

    #[test]
    fn test_xyz_modulus_extreme_magnitudes() {
        let big = XYZ::from_coords(2.0e300, 3.0e300, 6.0e300);
        assert!((big.modulus() / 7.0e300 - 1.0).abs() < 1e-14);
        let small = XYZ::from_coords(2.0e-300, 3.0e-300, 6.0e-300);
        assert!((small.modulus() / 7.0e-300 - 1.0).abs() < 1e-14);
    }

    #[test]
    fn test_xyz_crossed() {
        let i = XYZ::from_coords(1.0, 0.0, 0.0);
        let j = XYZ::from_coords(0.0, 1.0, 0.0);
        assert_eq!(i.crossed(&j), XYZ::from_coords(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_xyz_perpendicular() {
        let v = XYZ::from_coords(1.0, 2.0, 3.0);
        assert_eq!(v.perpendicular().dot(&v), 0.0);
        let w = XYZ::from_coords(-5.0, 0.5, 4.0);
        assert_eq!(w.perpendicular().dot(&w), 0.0);
        assert_eq!(XYZ::new().perpendicular(), XYZ::new());
    }
}
