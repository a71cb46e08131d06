//! 2D axis: an origin point plus a direction.

use super::{Direction2d, Frame2d, Point2d, Vector2d};
use crate::units::{Angle, Quantity};

/// Describes an axis in the plane.
pub struct Axis2d<U, C> {
    origin: Point2d<U, C>,
    direction: Direction2d<C>,
}

impl_value_traits!(Axis2d<U, C> { origin, direction });

impl<U, C> Axis2d<U, C> {
    /// The X axis through the origin.
    #[inline]
    pub const fn x() -> Self {
        Self::through(Point2d::origin(), Direction2d::x())
    }

    /// The Y axis through the origin.
    #[inline]
    pub const fn y() -> Self {
        Self::through(Point2d::origin(), Direction2d::y())
    }

    /// Creates an axis through `origin` along `direction`.
    #[inline]
    pub const fn through(origin: Point2d<U, C>, direction: Direction2d<C>) -> Self {
        Self { origin, direction }
    }

    /// Same as `through`, with the arguments swapped.
    #[inline]
    pub const fn with_direction(direction: Direction2d<C>, origin: Point2d<U, C>) -> Self {
        Self::through(origin, direction)
    }

    /// Returns the origin point.
    #[inline]
    pub const fn origin_point(&self) -> Point2d<U, C> {
        self.origin
    }

    /// Returns the direction.
    #[inline]
    pub const fn direction(&self) -> Direction2d<C> {
        self.direction
    }

    /// Reverses the direction, keeping the origin.
    #[inline]
    pub fn reverse(&self) -> Self {
        Self::through(self.origin, self.direction.reverse())
    }

    /// Moves the origin, keeping the direction.
    #[inline]
    pub fn move_to(&self, origin: Point2d<U, C>) -> Self {
        Self::through(origin, self.direction)
    }

    /// Rotates about `center` by `angle`.
    pub fn rotate_around(&self, center: Point2d<U, C>, angle: Angle) -> Self {
        Self::through(
            self.origin.rotate_around(center, angle),
            self.direction.rotate_by(angle),
        )
    }

    /// Translates by a vector.
    #[inline]
    pub fn translate_by(&self, vector: Vector2d<U, C>) -> Self {
        Self::through(self.origin.translate_by(vector), self.direction)
    }

    /// Translates by `distance` in `direction`.
    #[inline]
    pub fn translate_in(&self, direction: Direction2d<C>, distance: Quantity<U>) -> Self {
        Self::through(self.origin.translate_in(direction, distance), self.direction)
    }

    /// Mirrors across the given axis.
    pub fn mirror_across(&self, axis: &Axis2d<U, C>) -> Self {
        Self::through(
            self.origin.mirror_across(axis),
            self.direction.mirror_across(axis),
        )
    }

    /// Expresses the axis in the local coordinates of `frame`.
    pub fn relative_to<L>(&self, frame: &Frame2d<U, C, L>) -> Axis2d<U, L> {
        Axis2d::through(
            self.origin.relative_to(frame),
            self.direction.relative_to(frame),
        )
    }

    /// Converts from the local coordinates of `frame` to its parent coordinates.
    pub fn place_in<G>(&self, frame: &Frame2d<U, G, C>) -> Axis2d<U, G> {
        Axis2d::through(self.origin.place_in(frame), self.direction.place_in(frame))
    }
}
