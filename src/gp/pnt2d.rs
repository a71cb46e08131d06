//! 2D point.
//!
//! Point minus point is a [`Vector2d`]; point plus vector is a point.

use std::marker::PhantomData;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use super::{Axis2d, Direction2d, Frame2d, Vector2d, XY};
use crate::interop::Record2d;
use crate::units::{Angle, Meters, Pixels, Quantity, Squared, Unitless};

/// A position in 2D space.
#[derive(Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct Point2d<U, C> {
    coord: XY,
    tag: PhantomData<fn() -> (U, C)>,
}

impl_value_traits!(Point2d<U, C> { coord });

impl<U, C> Point2d<U, C> {
    /// The origin point (0, 0).
    #[inline]
    pub const fn origin() -> Self {
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

    /// Creates a point from its coordinates.
    #[inline]
    pub fn from_coordinates(x: Quantity<U>, y: Quantity<U>) -> Self {
        Self::from_xy(XY::from_coords(x.value(), y.value()))
    }

    /// Creates a point at `radius` from the origin, at `angle` from the X axis.
    pub fn from_polar_coordinates(radius: Quantity<U>, angle: Angle) -> Self {
        let r = radius.value();
        Self::from_xy(XY::from_coords(r * angle.cos(), r * angle.sin()))
    }

    /// Returns the X coordinate.
    #[inline]
    pub fn x_coordinate(self) -> Quantity<U> {
        Quantity::new(self.coord.x())
    }

    /// Returns the Y coordinate.
    #[inline]
    pub fn y_coordinate(self) -> Quantity<U> {
        Quantity::new(self.coord.y())
    }

    /// Returns the coordinates as a tuple.
    #[inline]
    pub fn coordinates(self) -> (Quantity<U>, Quantity<U>) {
        (self.x_coordinate(), self.y_coordinate())
    }

    /// Radius and counterclockwise angle from +X, measured from the origin.
    pub fn polar_coordinates(self) -> (Quantity<U>, Angle) {
        (
            Quantity::new(self.coord.modulus()),
            Angle::atan2(self.coord.y(), self.coord.x()),
        )
    }

    /// Point halfway between `p1` and `p2`.
    #[inline]
    pub fn midpoint(p1: Self, p2: Self) -> Self {
        Self::interpolate_from(p1, p2, 0.5)
    }

    /// Interpolates between two points. Returns `p1` exactly at `t = 0` and
    /// `p2` exactly at `t = 1`; other values extrapolate.
    #[inline]
    pub fn interpolate_from(p1: Self, p2: Self, t: f64) -> Self {
        Self::from_xy(XY::interpolated(&p1.coord, &p2.coord, t))
    }

    /// Average of the points, or None for an empty slice.
    pub fn centroid(points: &[Self]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let offset = rest
            .iter()
            .fold(XY::new(), |acc, p| acc.added(&p.coord.subtracted(&first.coord)));
        Some(Self::from_xy(
            first.coord.added(&offset.divided(points.len() as f64)),
        ))
    }

    /// The point at a signed distance along an axis from its origin.
    pub fn along(axis: &Axis2d<U, C>, distance: Quantity<U>) -> Self {
        axis.origin_point().translate_in(axis.direction(), distance)
    }

    /// Computes the distance between two points.
    #[inline]
    pub fn distance_from(self, other: Self) -> Quantity<U> {
        Quantity::new(self.coord.subtracted(&other.coord).modulus())
    }

    /// Computes the square distance between two points.
    #[inline]
    pub fn squared_distance_from(self, other: Self) -> Quantity<Squared<U>> {
        Quantity::new(self.coord.subtracted(&other.coord).square_modulus())
    }

    /// Position of the projection of this point onto the axis, measured
    /// from the axis origin.
    pub fn signed_distance_along(self, axis: &Axis2d<U, C>) -> Quantity<U> {
        let displacement = self.coord.subtracted(&axis.origin_point().coord);
        Quantity::new(displacement.dot(&axis.direction().xy()))
    }

    /// Perpendicular distance from the axis; positive to the left of it.
    pub fn signed_distance_from(self, axis: &Axis2d<U, C>) -> Quantity<U> {
        let displacement = self.coord.subtracted(&axis.origin_point().coord);
        Quantity::new(axis.direction().xy().crossed(&displacement))
    }

    /// True if the points are at most `tolerance` apart.
    #[inline]
    pub fn equal_within(self, tolerance: Quantity<U>, other: Self) -> bool {
        self.distance_from(other) <= tolerance
    }

    /// Translates by a vector.
    #[inline]
    pub fn translate_by(self, vector: Vector2d<U, C>) -> Self {
        Self::from_xy(self.coord.added(&vector.xy()))
    }

    /// Translates by `distance` in `direction`.
    #[inline]
    pub fn translate_in(self, direction: Direction2d<C>, distance: Quantity<U>) -> Self {
        self.translate_by(Vector2d::with_length(distance, direction))
    }

    /// Scales the displacement from `center` by `k`.
    pub fn scale_about(self, center: Self, k: f64) -> Self {
        let (x0, y0) = center.coord.coords();
        let (x, y) = self.coord.coords();
        Self::from_xy(XY::from_coords(x0 + k * (x - x0), y0 + k * (y - y0)))
    }

    /// Rotates about `center` by `angle`, counterclockwise.
    pub fn rotate_around(self, center: Self, angle: Angle) -> Self {
        let displacement = self.coord.subtracted(&center.coord);
        Self::from_xy(center.coord.added(&displacement.rotated(angle.cos(), angle.sin())))
    }

    /// Mirrors across the given axis.
    pub fn mirror_across(self, axis: &Axis2d<U, C>) -> Self {
        let origin = axis.origin_point().coord;
        let displacement = self.coord.subtracted(&origin);
        Self::from_xy(origin.added(&displacement.mirrored(&axis.direction().xy())))
    }

    /// Foot of the perpendicular from this point to the axis.
    pub fn project_onto(self, axis: &Axis2d<U, C>) -> Self {
        Self::along(axis, self.signed_distance_along(axis))
    }

    /// Expresses the point in the local coordinates of `frame`.
    pub fn relative_to<L>(self, frame: &Frame2d<U, C, L>) -> Point2d<U, L> {
        let displacement = self.coord.subtracted(&frame.origin_point().coord);
        Point2d::from_xy(XY::from_coords(
            displacement.dot(&frame.x_direction().xy()),
            displacement.dot(&frame.y_direction().xy()),
        ))
    }

    /// Takes a point given in the local coordinates of `frame` into the
    /// frame's parent coordinates.
    pub fn place_in<G>(self, frame: &Frame2d<U, G, C>) -> Point2d<U, G> {
        let (x, y) = self.coord.coords();
        let offset = XY::linear_form(x, &frame.x_direction().xy(), y, &frame.y_direction().xy());
        Point2d::from_xy(frame.origin_point().coord.added(&offset))
    }

    /// Builds a point from a tuple, converting each field with `to_quantity`.
    pub fn from_tuple(to_quantity: impl Fn(f64) -> Quantity<U>, (x, y): (f64, f64)) -> Self {
        Self::from_coordinates(to_quantity(x), to_quantity(y))
    }

    /// Converts to a tuple, reading each coordinate with `from_quantity`.
    pub fn to_tuple(self, from_quantity: impl Fn(Quantity<U>) -> f64) -> (f64, f64) {
        (from_quantity(self.x_coordinate()), from_quantity(self.y_coordinate()))
    }

    /// Builds a point from a plain record, converting each field with `to_quantity`.
    pub fn from_record(to_quantity: impl Fn(f64) -> Quantity<U>, record: Record2d) -> Self {
        Self::from_coordinates(to_quantity(record.x), to_quantity(record.y))
    }

    /// Converts to a plain record, reading each coordinate with `from_quantity`.
    pub fn to_record(self, from_quantity: impl Fn(Quantity<U>) -> f64) -> Record2d {
        Record2d {
            x: from_quantity(self.x_coordinate()),
            y: from_quantity(self.y_coordinate()),
        }
    }
}

impl<C> Point2d<Meters, C> {
    /// Creates a point from coordinates in meters.
    #[inline]
    pub const fn meters(x: f64, y: f64) -> Self {
        Self::from_xy(XY::from_coords(x, y))
    }
}

impl<C> Point2d<Pixels, C> {
    /// Creates a point from coordinates in pixels.
    #[inline]
    pub const fn pixels(x: f64, y: f64) -> Self {
        Self::from_xy(XY::from_coords(x, y))
    }
}

impl<C> Point2d<Unitless, C> {
    /// Creates a point from dimensionless coordinates.
    #[inline]
    pub const fn unitless(x: f64, y: f64) -> Self {
        Self::from_xy(XY::from_coords(x, y))
    }
}

impl<U, C> Add<Vector2d<U, C>> for Point2d<U, C> {
    type Output = Self;
    fn add(self, vector: Vector2d<U, C>) -> Self {
        self.translate_by(vector)
    }
}

impl<U, C> Sub<Vector2d<U, C>> for Point2d<U, C> {
    type Output = Self;
    fn sub(self, vector: Vector2d<U, C>) -> Self {
        self.translate_by(vector.reverse())
    }
}

impl<U, C> Sub for Point2d<U, C> {
    type Output = Vector2d<U, C>;
    fn sub(self, other: Self) -> Vector2d<U, C> {
        Vector2d::from_points(other, self)
    }
}
