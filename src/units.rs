//! Unit-tagged scalar quantities.
//!
//! A [`Quantity`] is an `f64` paired with a zero-sized unit marker. Units are
//! modelled as uninhabited enums; composite units are built from
//! [`Product`] and [`Rate`]. The marker only exists at compile time, so a
//! `Quantity<Meters>` has exactly the size and cost of an `f64`.
//!
//! Values are always stored in the base unit of their marker (meters,
//! radians, seconds); the named constructors convert on the way in.

use std::cmp::Ordering;
use std::f64::consts::PI;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Marker for dimensionless quantities.
pub enum Unitless {}

/// Marker for lengths, stored in meters.
pub enum Meters {}

/// Marker for angles, stored in radians.
pub enum Radians {}

/// Marker for durations, stored in seconds.
pub enum Seconds {}

/// Marker for on-screen lengths.
pub enum Pixels {}

/// Marker for the product of two units (`A * B`).
pub struct Product<A, B>(PhantomData<fn() -> (A, B)>);

/// Marker for the ratio of two units (`A / B`).
pub struct Rate<A, B>(PhantomData<fn() -> (A, B)>);

/// Marker for a unit multiplied by itself.
pub type Squared<U> = Product<U, U>;

/// A floating-point value tagged with a unit of measure.
#[derive(Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct Quantity<U> {
    value: f64,
    units: PhantomData<fn() -> U>,
}

/// Length in meters.
pub type Length = Quantity<Meters>;

/// Angle in radians.
pub type Angle = Quantity<Radians>;

/// Duration in seconds.
pub type Duration = Quantity<Seconds>;

/// Area in square meters.
pub type Area = Quantity<Squared<Meters>>;

impl_value_traits!(Quantity<U> { value });

impl<U> Default for Quantity<U> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<U> Quantity<U> {
    /// Wraps a raw value expressed in the base unit of `U`.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self { value, units: PhantomData }
    }

    /// Zero in any unit.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0)
    }

    /// Positive infinity in any unit.
    #[inline]
    pub const fn infinity() -> Self {
        Self::new(f64::INFINITY)
    }

    /// Returns the raw value in the base unit of `U`.
    #[inline]
    pub const fn value(self) -> f64 {
        self.value
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }

    /// Returns -1, 0 or 1 as a plain number.
    #[inline]
    pub fn sign(self) -> f64 {
        if self.value > 0.0 {
            1.0
        } else if self.value < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    /// True unless the value is infinite or NaN.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.value.is_finite()
    }

    /// The smaller of two quantities.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.value.min(other.value))
    }

    /// The larger of two quantities.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.value.max(other.value))
    }

    /// Clamps into `[lower, upper]`.
    #[inline]
    pub fn clamp(self, lower: Self, upper: Self) -> Self {
        if self.value < lower.value {
            lower
        } else if self.value > upper.value {
            upper
        } else {
            self
        }
    }

    /// Returns true if the two quantities differ by at most `tolerance`.
    #[inline]
    pub fn equal_within(self, tolerance: Self, other: Self) -> bool {
        (self.value - other.value).abs() <= tolerance.value
    }

    /// Linear interpolation `a + t * (b - a)`, extrapolating outside
    /// `[0, 1]`. Exact at both `t = 0` and `t = 1`.
    #[inline]
    pub fn interpolate_from(a: Self, b: Self, t: f64) -> Self {
        Self::new(interpolate(a.value, b.value, t))
    }

    /// Midpoint of two quantities.
    #[inline]
    pub fn midpoint(a: Self, b: Self) -> Self {
        Self::new(a.value + 0.5 * (b.value - a.value))
    }

    /// Multiplies two quantities, combining their units.
    #[inline]
    pub fn times<U2>(self, other: Quantity<U2>) -> Quantity<Product<U, U2>> {
        Quantity::new(self.value * other.value)
    }

    /// Multiplies the quantity by itself.
    #[inline]
    pub fn squared(self) -> Quantity<Squared<U>> {
        Quantity::new(self.value * self.value)
    }

    /// Divides by another quantity, producing a rate such as a speed.
    #[inline]
    pub fn per<U2>(self, other: Quantity<U2>) -> Quantity<Rate<U, U2>> {
        Quantity::new(self.value / other.value)
    }

    /// Converts into another unit using a rate expressed as `U2` per `U`.
    #[inline]
    pub fn at<U2>(self, rate: Quantity<Rate<U2, U>>) -> Quantity<U2> {
        Quantity::new(self.value * rate.value)
    }

    /// Converts into another unit using a rate expressed as `U` per `U2`.
    #[inline]
    pub fn at_<U2>(self, rate: Quantity<Rate<U, U2>>) -> Quantity<U2> {
        Quantity::new(self.value / rate.value)
    }

    /// Three-way comparison; NaN compares equal to everything.
    #[inline]
    pub fn compare(self, other: Self) -> Ordering {
        self.value.partial_cmp(&other.value).unwrap_or(Ordering::Equal)
    }
}

impl<D, I> Quantity<Rate<D, I>> {
    /// Multiplies a rate by an amount of its independent unit.
    #[inline]
    pub fn for_(self, amount: Quantity<I>) -> Quantity<D> {
        Quantity::new(self.value * amount.value)
    }
}

impl<U> Quantity<Squared<U>> {
    /// Square root of a squared quantity.
    #[inline]
    pub fn sqrt(self) -> Quantity<U> {
        Quantity::new(self.value.sqrt())
    }
}

impl Quantity<Unitless> {
    /// A plain dimensionless number.
    #[inline]
    pub const fn float(value: f64) -> Self {
        Self::new(value)
    }
}

impl Quantity<Meters> {
    /// Length in meters.
    #[inline]
    pub const fn meters(value: f64) -> Self {
        Self::new(value)
    }

    /// Length in centimeters.
    #[inline]
    pub fn centimeters(value: f64) -> Self {
        Self::new(value * 0.01)
    }

    /// Length in millimeters.
    #[inline]
    pub fn millimeters(value: f64) -> Self {
        Self::new(value * 0.001)
    }

    /// Length in inches.
    #[inline]
    pub fn inches(value: f64) -> Self {
        Self::new(value * 0.0254)
    }

    /// Length in feet.
    #[inline]
    pub fn feet(value: f64) -> Self {
        Self::new(value * 0.3048)
    }

    /// Value in meters.
    #[inline]
    pub const fn in_meters(self) -> f64 {
        self.value
    }

    /// Value in centimeters.
    #[inline]
    pub fn in_centimeters(self) -> f64 {
        self.value / 0.01
    }

    /// Value in millimeters.
    #[inline]
    pub fn in_millimeters(self) -> f64 {
        self.value / 0.001
    }

    /// Value in inches.
    #[inline]
    pub fn in_inches(self) -> f64 {
        self.value / 0.0254
    }

    /// Value in feet.
    #[inline]
    pub fn in_feet(self) -> f64 {
        self.value / 0.3048
    }
}

impl Quantity<Pixels> {
    /// Distance in on-screen pixels.
    #[inline]
    pub const fn pixels(value: f64) -> Self {
        Self::new(value)
    }

    /// Value in pixels.
    #[inline]
    pub const fn in_pixels(self) -> f64 {
        self.value
    }
}

impl Quantity<Seconds> {
    /// Duration in seconds.
    #[inline]
    pub const fn seconds(value: f64) -> Self {
        Self::new(value)
    }

    /// Value in seconds.
    #[inline]
    pub const fn in_seconds(self) -> f64 {
        self.value
    }
}

impl Quantity<Radians> {
    /// Angle in radians.
    #[inline]
    pub const fn radians(value: f64) -> Self {
        Self::new(value)
    }

    /// Angle in degrees.
    #[inline]
    pub fn degrees(value: f64) -> Self {
        Self::new(value * (PI / 180.0))
    }

    /// Whole turns (1 turn = 2π radians).
    #[inline]
    pub fn turns(value: f64) -> Self {
        Self::new(value * 2.0 * PI)
    }

    /// Value in radians.
    #[inline]
    pub const fn in_radians(self) -> f64 {
        self.value
    }

    /// Value in degrees.
    #[inline]
    pub fn in_degrees(self) -> f64 {
        self.value * (180.0 / PI)
    }

    /// Value in full turns.
    #[inline]
    pub fn in_turns(self) -> f64 {
        self.value / (2.0 * PI)
    }

    /// Sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        self.value.sin()
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        self.value.cos()
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(self) -> f64 {
        self.value.tan()
    }

    /// Angle of the point `(x, y)` from the positive X axis, in `(-π, π]`.
    #[inline]
    pub fn atan2(y: f64, x: f64) -> Self {
        Self::new(y.atan2(x))
    }

    /// Wraps into `[-π, π]`.
    pub fn normalize(self) -> Self {
        let two_pi = 2.0 * PI;
        let turns = (self.value / two_pi).round();
        Self::new(self.value - turns * two_pi)
    }
}

/// `a + t * (b - a)` for `t <= 0.5`, `b + (1 - t) * (a - b)` otherwise, so
/// that both endpoints are reproduced exactly.
#[inline]
pub(crate) fn interpolate(a: f64, b: f64, t: f64) -> f64 {
    if t <= 0.5 {
        a + t * (b - a)
    } else {
        b + (1.0 - t) * (a - b)
    }
}

impl<U> PartialOrd for Quantity<U> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<U> Add for Quantity<U> {
    type Output = Quantity<U>;
    fn add(self, other: Quantity<U>) -> Quantity<U> {
        Quantity::new(self.value + other.value)
    }
}

impl<U> AddAssign for Quantity<U> {
    fn add_assign(&mut self, other: Quantity<U>) {
        self.value += other.value;
    }
}

impl<U> Sub for Quantity<U> {
    type Output = Quantity<U>;
    fn sub(self, other: Quantity<U>) -> Quantity<U> {
        Quantity::new(self.value - other.value)
    }
}

impl<U> SubAssign for Quantity<U> {
    fn sub_assign(&mut self, other: Quantity<U>) {
        self.value -= other.value;
    }
}

impl<U> Neg for Quantity<U> {
    type Output = Quantity<U>;
    fn neg(self) -> Quantity<U> {
        Quantity::new(-self.value)
    }
}

impl<U> Mul<f64> for Quantity<U> {
    type Output = Quantity<U>;
    fn mul(self, scalar: f64) -> Quantity<U> {
        Quantity::new(self.value * scalar)
    }
}

impl<U> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;
    fn mul(self, quantity: Quantity<U>) -> Quantity<U> {
        Quantity::new(self * quantity.value)
    }
}

impl<U> Div<f64> for Quantity<U> {
    type Output = Quantity<U>;
    fn div(self, scalar: f64) -> Quantity<U> {
        Quantity::new(self.value / scalar)
    }
}

/// Ratio of two like quantities is a plain number.
impl<U> Div for Quantity<U> {
    type Output = f64;
    fn div(self, other: Quantity<U>) -> f64 {
        self.value / other.value
    }
}

impl<U> std::iter::Sum for Quantity<U> {
    fn sum<I: Iterator<Item = Quantity<U>>>(iter: I) -> Self {
        Quantity::new(iter.map(|q| q.value).sum())
    }
}
