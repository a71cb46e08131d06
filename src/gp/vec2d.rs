//! 2D vector.
//!
//! A free vector with components in units `U`, expressed in coordinate
//! system `C`. Unlike a point, a vector is unaffected by translation and by
//! the origin of a frame.

use std::cmp::Ordering;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use super::{Axis2d, Direction2d, Frame2d, Point2d, XY};
use crate::interop::Record2d;
use crate::units::{Angle, Meters, Pixels, Product, Quantity, Rate, Squared, Unitless};

/// A 2D vector in cartesian space.
#[derive(Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct Vector2d<U, C> {
    coord: XY,
    tag: PhantomData<fn() -> (U, C)>,
}

impl_value_traits!(Vector2d<U, C> { coord });

impl<U, C> Default for Vector2d<U, C> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<U, C> Vector2d<U, C> {
    /// The zero vector.
    #[inline]
    pub const fn zero() -> Self {
        Self::from_xy(XY::new())
    }

    #[inline]
    pub(crate) const fn from_xy(xy: XY) -> Self {
        Self { coord: xy, tag: PhantomData }
    }

    #[inline]
    pub(crate) const fn xy(&self) -> XY {
        self.coord
    }

    /// Creates a vector from its X and Y components.
    #[inline]
    pub fn from_components(x: Quantity<U>, y: Quantity<U>) -> Self {
        Self::from_xy(XY::from_coords(x.value(), y.value()))
    }

    /// Creates a vector from a length and an angle measured
    /// counterclockwise from the positive X axis.
    pub fn from_polar_components(radius: Quantity<U>, angle: Angle) -> Self {
        let r = radius.value();
        Self::from_xy(XY::from_coords(r * angle.cos(), r * angle.sin()))
    }

    /// The vector from `p1` to `p2`.
    #[inline]
    pub fn from_points(p1: Point2d<U, C>, p2: Point2d<U, C>) -> Self {
        Self::from_xy(p2.xy().subtracted(&p1.xy()))
    }

    /// A vector of the given length in the given direction.
    #[inline]
    pub fn with_length(length: Quantity<U>, direction: Direction2d<C>) -> Self {
        Self::from_xy(direction.xy().multiplied(length.value()))
    }

    /// The vector rotated a quarter turn counterclockwise. Always
    /// perpendicular to `v` and of the same length; zero for zero.
    #[inline]
    pub fn perpendicular_to(v: Self) -> Self {
        Self::from_xy(v.coord.perpendicular())
    }

    /// `v1 + t * (v2 - v1)`; `t` outside `[0, 1]` extrapolates.
    #[inline]
    pub fn interpolate_from(v1: Self, v2: Self, t: f64) -> Self {
        Self::from_xy(XY::interpolated(&v1.coord, &v2.coord, t))
    }

    /// Sum of a slice of vectors; zero for an empty slice.
    pub fn sum(vectors: &[Self]) -> Self {
        vectors.iter().fold(Self::zero(), |acc, v| acc + *v)
    }

    /// Returns the X component.
    #[inline]
    pub fn x_component(self) -> Quantity<U> {
        Quantity::new(self.coord.x())
    }

    /// Returns the Y component.
    #[inline]
    pub fn y_component(self) -> Quantity<U> {
        Quantity::new(self.coord.y())
    }

    /// Returns the X and Y components.
    #[inline]
    pub fn components(self) -> (Quantity<U>, Quantity<U>) {
        (self.x_component(), self.y_component())
    }

    /// Length and counterclockwise angle from the positive X axis.
    pub fn polar_components(self) -> (Quantity<U>, Angle) {
        (self.length(), Angle::atan2(self.coord.y(), self.coord.x()))
    }

    /// Length, computed without intermediate overflow or underflow.
    #[inline]
    pub fn length(self) -> Quantity<U> {
        Quantity::new(self.coord.modulus())
    }

    /// Squared length, without the square root.
    #[inline]
    pub fn length_squared(self) -> Quantity<Squared<U>> {
        Quantity::new(self.coord.square_modulus())
    }

    /// Direction of the vector, or None if it is exactly zero.
    #[inline]
    pub fn direction(self) -> Option<Direction2d<C>> {
        self.coord.normalized().map(Direction2d::unchecked)
    }

    /// Length and direction together, or None if the vector is exactly zero.
    pub fn length_and_direction(self) -> Option<(Quantity<U>, Direction2d<C>)> {
        self.coord
            .modulus_and_normalized()
            .map(|(length, unit)| (Quantity::new(length), Direction2d::unchecked(unit)))
    }

    /// Unit-length copy of the vector, or the zero vector if the input is
    /// zero. Prefer [`Vector2d::direction`], which makes the zero case
    /// explicit.
    #[inline]
    pub fn normalize(self) -> Vector2d<Unitless, C> {
        Vector2d::from_xy(self.coord.normalized().unwrap_or_default())
    }

    /// Signed component of the vector along the given direction.
    #[inline]
    pub fn component_in(self, direction: Direction2d<C>) -> Quantity<U> {
        Quantity::new(self.coord.dot(&direction.xy()))
    }

    /// True if `other` differs from this vector by at most `tolerance`.
    #[inline]
    pub fn equal_within(self, tolerance: Quantity<U>, other: Self) -> bool {
        (other - self).length() <= tolerance
    }

    /// Orders by X component, then Y, using exact comparison.
    pub fn lexicographic_comparison(self, other: Self) -> Ordering {
        let (x1, y1) = self.coord.coords();
        let (x2, y2) = other.coord.coords();
        if x1 != x2 {
            x1.total_cmp(&x2)
        } else if y1 != y2 {
            y1.total_cmp(&y2)
        } else {
            Ordering::Equal
        }
    }

    /// `self + other`.
    #[inline]
    pub fn plus(self, other: Self) -> Self {
        Self::from_xy(self.coord.added(&other.coord))
    }

    /// `self - other`.
    #[inline]
    pub fn minus(self, other: Self) -> Self {
        Self::from_xy(self.coord.subtracted(&other.coord))
    }

    /// Dot product; the result carries the product of both units.
    #[inline]
    pub fn dot<U2>(self, other: Vector2d<U2, C>) -> Quantity<Product<U, U2>> {
        Quantity::new(self.coord.dot(&other.coord))
    }

    /// Scalar cross product `self × other`: positive when `other` lies
    /// counterclockwise of `self`.
    #[inline]
    pub fn cross<U2>(self, other: Vector2d<U2, C>) -> Quantity<Product<U, U2>> {
        Quantity::new(self.coord.crossed(&other.coord))
    }

    /// Returns the reversed vector.
    #[inline]
    pub fn reverse(self) -> Self {
        Self::from_xy(self.coord.reversed())
    }

    /// Scales by a dimensionless factor.
    #[inline]
    pub fn scale_by(self, k: f64) -> Self {
        Self::from_xy(self.coord.multiplied(k))
    }

    /// Same direction, new length; the zero vector stays zero.
    pub fn scale_to<U2>(self, length: Quantity<U2>) -> Vector2d<U2, C> {
        match self.coord.normalized() {
            Some(unit) => Vector2d::from_xy(unit.multiplied(length.value())),
            None => Vector2d::zero(),
        }
    }

    /// Multiplies each component by a quantity, combining units.
    #[inline]
    pub fn times<U2>(self, q: Quantity<U2>) -> Vector2d<Product<U, U2>, C> {
        Vector2d::from_xy(self.coord.multiplied(q.value()))
    }

    /// Half of the vector.
    #[inline]
    pub fn half(self) -> Self {
        self.scale_by(0.5)
    }

    /// Twice the vector.
    #[inline]
    pub fn twice(self) -> Self {
        self.scale_by(2.0)
    }

    /// Rotates counterclockwise by the given angle.
    pub fn rotate_by(self, angle: Angle) -> Self {
        Self::from_xy(self.coord.rotated(angle.cos(), angle.sin()))
    }

    /// Rotates by 90 degrees counterclockwise.
    #[inline]
    pub fn rotate_counterclockwise(self) -> Self {
        Self::from_xy(self.coord.perpendicular())
    }

    /// Rotates by 90 degrees clockwise.
    #[inline]
    pub fn rotate_clockwise(self) -> Self {
        Self::from_xy(XY::from_coords(self.coord.y(), -self.coord.x()))
    }

    /// Mirrors across the given axis. Only the axis direction matters.
    #[inline]
    pub fn mirror_across<AU>(self, axis: &Axis2d<AU, C>) -> Self {
        Self::from_xy(self.coord.mirrored(&axis.direction().xy()))
    }

    /// The part of this vector along the given direction.
    #[inline]
    pub fn projection_in(self, direction: Direction2d<C>) -> Self {
        Self::with_length(self.component_in(direction), direction)
    }

    /// Component along the axis direction, as a vector.
    #[inline]
    pub fn project_onto<AU>(self, axis: &Axis2d<AU, C>) -> Self {
        self.projection_in(axis.direction())
    }

    /// Expresses the vector in the local coordinates of `frame`.
    pub fn relative_to<FU, L>(self, frame: &Frame2d<FU, C, L>) -> Vector2d<U, L> {
        Vector2d::from_xy(XY::from_coords(
            self.coord.dot(&frame.x_direction().xy()),
            self.coord.dot(&frame.y_direction().xy()),
        ))
    }

    /// Takes a vector defined in the local coordinates of `frame` and
    /// expresses it in the frame's parent coordinates.
    pub fn place_in<FU, G>(self, frame: &Frame2d<FU, G, C>) -> Vector2d<U, G> {
        let (x, y) = self.coord.coords();
        Vector2d::from_xy(XY::linear_form(
            x,
            &frame.x_direction().xy(),
            y,
            &frame.y_direction().xy(),
        ))
    }

    /// Converts units with a rate given as `U2` per `U`.
    #[inline]
    pub fn at<U2>(self, rate: Quantity<Rate<U2, U>>) -> Vector2d<U2, C> {
        Vector2d::from_xy(self.coord.multiplied(rate.value()))
    }

    /// Converts units with a rate given as `U` per `U2`.
    #[inline]
    pub fn at_<U2>(self, rate: Quantity<Rate<U, U2>>) -> Vector2d<U2, C> {
        Vector2d::from_xy(self.coord.divided(rate.value()))
    }

    /// Divides by a quantity, e.g. a displacement per duration.
    #[inline]
    pub fn per<U2>(self, q: Quantity<U2>) -> Vector2d<Rate<U, U2>, C> {
        Vector2d::from_xy(self.coord.divided(q.value()))
    }

    /// Builds a vector from raw components through a unit conversion.
    pub fn from_tuple(to_quantity: impl Fn(f64) -> Quantity<U>, (x, y): (f64, f64)) -> Self {
        Self::from_components(to_quantity(x), to_quantity(y))
    }

    /// Converts each component back to a raw number.
    pub fn to_tuple(self, from_quantity: impl Fn(Quantity<U>) -> f64) -> (f64, f64) {
        (from_quantity(self.x_component()), from_quantity(self.y_component()))
    }

    /// Builds a vector from a plain record, converting each field with `to_quantity`.
    pub fn from_record(to_quantity: impl Fn(f64) -> Quantity<U>, record: Record2d) -> Self {
        Self::from_components(to_quantity(record.x), to_quantity(record.y))
    }

    /// Converts to a plain record, reading each component with `from_quantity`.
    pub fn to_record(self, from_quantity: impl Fn(Quantity<U>) -> f64) -> Record2d {
        Record2d {
            x: from_quantity(self.x_component()),
            y: from_quantity(self.y_component()),
        }
    }
}

impl<D, I, C> Vector2d<Rate<D, I>, C> {
    /// Multiplies a rate vector by an amount of its independent unit, e.g.
    /// a velocity for a duration.
    #[inline]
    pub fn for_(self, amount: Quantity<I>) -> Vector2d<D, C> {
        Vector2d::from_xy(self.coord.multiplied(amount.value()))
    }
}

impl<C> Vector2d<Meters, C> {
    /// Creates a vector from components in meters.
    #[inline]
    pub const fn meters(x: f64, y: f64) -> Self {
        Self::from_xy(XY::from_coords(x, y))
    }
}

impl<C> Vector2d<Pixels, C> {
    /// Creates a vector from components in pixels.
    #[inline]
    pub const fn pixels(x: f64, y: f64) -> Self {
        Self::from_xy(XY::from_coords(x, y))
    }
}

impl<C> Vector2d<Unitless, C> {
    /// Creates a dimensionless vector.
    #[inline]
    pub const fn unitless(x: f64, y: f64) -> Self {
        Self::from_xy(XY::from_coords(x, y))
    }
}

impl<U, C> Add for Vector2d<U, C> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        self.plus(other)
    }
}

impl<U, C> AddAssign for Vector2d<U, C> {
    fn add_assign(&mut self, other: Self) {
        *self = self.plus(other);
    }
}

impl<U, C> Sub for Vector2d<U, C> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        self.minus(other)
    }
}

impl<U, C> SubAssign for Vector2d<U, C> {
    fn sub_assign(&mut self, other: Self) {
        *self = self.minus(other);
    }
}

impl<U, C> Mul<f64> for Vector2d<U, C> {
    type Output = Self;
    fn mul(self, k: f64) -> Self {
        self.scale_by(k)
    }
}

impl<U, C> Div<f64> for Vector2d<U, C> {
    type Output = Self;
    fn div(self, k: f64) -> Self {
        Self::from_xy(self.coord.divided(k))
    }
}

impl<U, C> Neg for Vector2d<U, C> {
    type Output = Self;
    fn neg(self) -> Self {
        self.reverse()
    }
}
