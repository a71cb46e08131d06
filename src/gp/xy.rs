//! 2D coordinate pair.
//!
//! Raw storage and algebra shared by every 2D primitive. Carries no unit or
//! frame tags; the typed wrappers in this module add those.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::units::interpolate;

/// 2D cartesian coordinate entity {X, Y}.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct XY {
    x: f64,
    y: f64,
}

impl XY {
    /// Creates an XY with zero coordinates (0, 0).
    #[inline]
    pub const fn new() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Creates an XY with given coordinates.
    #[inline]
    pub const fn from_coords(x: f64, y: f64) -> Self {
        Self { x, y }
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

    /// Returns both coordinates.
    #[inline]
    pub const fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Computes the modulus without intermediate overflow or underflow.
    ///
    /// Both components are divided by the largest absolute component before
    /// squaring, and the result is scaled back up afterwards.
    pub fn modulus(&self) -> f64 {
        let largest = self.x.abs().max(self.y.abs());
        if largest == 0.0 {
            return 0.0;
        }
        let sx = self.x / largest;
        let sy = self.y / largest;
        (sx * sx + sy * sy).sqrt() * largest
    }

    /// Computes the square of the modulus.
    #[inline]
    pub const fn square_modulus(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns the modulus together with the unit vector, or None for the
    /// exact zero vector. Uses the same scaling as [`XY::modulus`].
    pub fn modulus_and_normalized(&self) -> Option<(f64, XY)> {
        let largest = self.x.abs().max(self.y.abs());
        if largest == 0.0 {
            return None;
        }
        let sx = self.x / largest;
        let sy = self.y / largest;
        let scaled_length = (sx * sx + sy * sy).sqrt();
        Some((
            scaled_length * largest,
            XY::from_coords(sx / scaled_length, sy / scaled_length),
        ))
    }

    /// Returns the unit vector, or None for the exact zero vector.
    #[inline]
    pub fn normalized(&self) -> Option<XY> {
        self.modulus_and_normalized().map(|(_, unit)| unit)
    }

    /// Returns sum of this and other XY.
    #[inline]
    pub fn added(&self, other: &XY) -> XY {
        XY::from_coords(self.x + other.x, self.y + other.y)
    }

    /// Returns difference of this and other XY.
    #[inline]
    pub fn subtracted(&self, other: &XY) -> XY {
        XY::from_coords(self.x - other.x, self.y - other.y)
    }

    /// Returns this multiplied by scalar.
    #[inline]
    pub fn multiplied(&self, scalar: f64) -> XY {
        XY::from_coords(self.x * scalar, self.y * scalar)
    }

    /// Returns this divided by scalar.
    #[inline]
    pub fn divided(&self, scalar: f64) -> XY {
        XY::from_coords(self.x / scalar, self.y / scalar)
    }

    /// Returns the negated pair.
    #[inline]
    pub fn reversed(&self) -> XY {
        XY::from_coords(-self.x, -self.y)
    }

    /// Returns the scalar product.
    #[inline]
    pub const fn dot(&self, other: &XY) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product: `self.x * other.y - self.y * other.x`.
    #[inline]
    pub const fn crossed(&self, other: &XY) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// `a1 * xy1 + a2 * xy2`.
    #[inline]
    pub fn linear_form(a1: f64, xy1: &XY, a2: f64, xy2: &XY) -> XY {
        XY::from_coords(a1 * xy1.x + a2 * xy2.x, a1 * xy1.y + a2 * xy2.y)
    }

    /// Componentwise interpolation, exact at `t = 0` and `t = 1`.
    #[inline]
    pub fn interpolated(a: &XY, b: &XY, t: f64) -> XY {
        XY::from_coords(interpolate(a.x, b.x, t), interpolate(a.y, b.y, t))
    }

    /// Rotates counterclockwise given the cosine and sine of the angle.
    #[inline]
    pub fn rotated(&self, cos: f64, sin: f64) -> XY {
        XY::from_coords(cos * self.x - sin * self.y, sin * self.x + cos * self.y)
    }

    /// Rotates a quarter turn counterclockwise.
    #[inline]
    pub fn perpendicular(&self) -> XY {
        XY::from_coords(-self.y, self.x)
    }

    /// Reflects across a line through the origin with unit direction `d`.
    pub fn mirrored(&self, d: &XY) -> XY {
        let a = 1.0 - 2.0 * d.y * d.y;
        let b = 2.0 * d.x * d.y;
        let c = 1.0 - 2.0 * d.x * d.x;
        XY::from_coords(a * self.x + b * self.y, b * self.x + c * self.y)
    }
}

impl Add for XY {
    type Output = XY;
    fn add(self, other: XY) -> XY {
        self.added(&other)
    }
}

impl Sub for XY {
    type Output = XY;
    fn sub(self, other: XY) -> XY {
        self.subtracted(&other)
    }
}

impl Mul<f64> for XY {
    type Output = XY;
    fn mul(self, scalar: f64) -> XY {
        self.multiplied(scalar)
    }
}

impl Neg for XY {
    type Output = XY;
    fn neg(self) -> XY {
        self.reversed()
    }
}
