//! 2D coordinate frame.
//!
//! A frame is an origin point plus two perpendicular unit directions, all
//! expressed in the parent coordinates `C`. It defines the local coordinate
//! system `L`: `relative_to` on any entity maps `C` to `L`, `place_in` maps
//! `L` back to `C`.

use std::marker::PhantomData;

use super::{Axis2d, Direction2d, Point2d, Vector2d};
use crate::units::{Angle, Quantity};

/// Positioned orthonormal 2D coordinate system.
pub struct Frame2d<U, C, L> {
    origin: Point2d<U, C>,
    x_direction: Direction2d<C>,
    y_direction: Direction2d<C>,
    local: PhantomData<fn() -> L>,
}

impl_value_traits!(Frame2d<U, C, L> { origin, x_direction, y_direction });

impl<U, C, L> Frame2d<U, C, L> {
    /// Builds a frame from directions that are already orthonormal.
    #[inline]
    pub(crate) const fn unchecked(
        origin: Point2d<U, C>,
        x_direction: Direction2d<C>,
        y_direction: Direction2d<C>,
    ) -> Self {
        Self { origin, x_direction, y_direction, local: PhantomData }
    }

    /// The global frame: origin at (0, 0), axes along +X and +Y.
    #[inline]
    pub const fn at_origin() -> Self {
        Self::at_point(Point2d::origin())
    }

    /// Axis-aligned frame at the given point.
    #[inline]
    pub const fn at_point(origin: Point2d<U, C>) -> Self {
        Self::unchecked(origin, Direction2d::x(), Direction2d::y())
    }

    /// Right-handed frame with the given X direction.
    pub fn with_x_direction(x_direction: Direction2d<C>, origin: Point2d<U, C>) -> Self {
        Self::unchecked(origin, x_direction, Direction2d::perpendicular_to(x_direction))
    }

    /// Right-handed frame with the given Y direction.
    pub fn with_y_direction(y_direction: Direction2d<C>, origin: Point2d<U, C>) -> Self {
        Self::unchecked(origin, y_direction.rotate_clockwise(), y_direction)
    }

    /// Right-handed frame whose X axis is `axis`.
    #[inline]
    pub fn from_x_axis(axis: &Axis2d<U, C>) -> Self {
        Self::with_x_direction(axis.direction(), axis.origin_point())
    }

    /// Right-handed frame whose Y axis is `axis`.
    #[inline]
    pub fn from_y_axis(axis: &Axis2d<U, C>) -> Self {
        Self::with_y_direction(axis.direction(), axis.origin_point())
    }

    /// Same frame, defining a different local coordinate system.
    #[inline]
    pub const fn copy<L2>(&self) -> Frame2d<U, C, L2> {
        Frame2d::unchecked(self.origin, self.x_direction, self.y_direction)
    }

    /// Returns the origin point.
    #[inline]
    pub const fn origin_point(&self) -> Point2d<U, C> {
        self.origin
    }

    /// Returns the X direction.
    #[inline]
    pub const fn x_direction(&self) -> Direction2d<C> {
        self.x_direction
    }

    /// Returns the Y direction.
    #[inline]
    pub const fn y_direction(&self) -> Direction2d<C> {
        self.y_direction
    }

    /// Returns the X axis.
    #[inline]
    pub const fn x_axis(&self) -> Axis2d<U, C> {
        Axis2d::through(self.origin, self.x_direction)
    }

    /// Returns the Y axis.
    #[inline]
    pub const fn y_axis(&self) -> Axis2d<U, C> {
        Axis2d::through(self.origin, self.y_direction)
    }

    /// True if Y is a counterclockwise quarter turn from X.
    pub fn is_right_handed(&self) -> bool {
        self.x_direction.xy().crossed(&self.y_direction.xy()) > 0.0
    }

    /// Flips the X direction, changing handedness.
    pub fn reverse_x(&self) -> Self {
        Self::unchecked(self.origin, self.x_direction.reverse(), self.y_direction)
    }

    /// Flips the Y direction, changing handedness.
    pub fn reverse_y(&self) -> Self {
        Self::unchecked(self.origin, self.x_direction, self.y_direction.reverse())
    }

    /// Moves the origin, keeping the orientation.
    #[inline]
    pub fn move_to(&self, origin: Point2d<U, C>) -> Self {
        Self::unchecked(origin, self.x_direction, self.y_direction)
    }

    /// Rotates the frame about its own origin.
    pub fn rotate_by(&self, angle: Angle) -> Self {
        Self::unchecked(
            self.origin,
            self.x_direction.rotate_by(angle),
            self.y_direction.rotate_by(angle),
        )
    }

    /// Rotates the origin and both directions about `center`.
    pub fn rotate_around(&self, center: Point2d<U, C>, angle: Angle) -> Self {
        Self::unchecked(
            self.origin.rotate_around(center, angle),
            self.x_direction.rotate_by(angle),
            self.y_direction.rotate_by(angle),
        )
    }

    /// Translates by a vector.
    #[inline]
    pub fn translate_by(&self, vector: Vector2d<U, C>) -> Self {
        self.move_to(self.origin.translate_by(vector))
    }

    /// Translates by `distance` along the direction of `axis`.
    pub fn translate_along(&self, axis: &Axis2d<U, C>, distance: Quantity<U>) -> Self {
        self.translate_by(Vector2d::with_length(distance, axis.direction()))
    }

    /// Mirrors the frame; the result has the opposite handedness.
    pub fn mirror_across(&self, axis: &Axis2d<U, C>) -> Self {
        Self::unchecked(
            self.origin.mirror_across(axis),
            self.x_direction.mirror_across(axis),
            self.y_direction.mirror_across(axis),
        )
    }

    /// Expresses this frame in the local coordinates of `other`.
    pub fn relative_to<L2>(&self, other: &Frame2d<U, C, L2>) -> Frame2d<U, L2, L> {
        Frame2d::unchecked(
            self.origin.relative_to(other),
            self.x_direction.relative_to(other),
            self.y_direction.relative_to(other),
        )
    }

    /// Takes a frame defined in the local coordinates of `other` into the
    /// parent coordinates of `other`.
    pub fn place_in<G>(&self, other: &Frame2d<U, G, C>) -> Frame2d<U, G, L> {
        Frame2d::unchecked(
            self.origin.place_in(other),
            self.x_direction.place_in(other),
            self.y_direction.place_in(other),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Length, Meters};

    enum Global {}
    enum Local {}
    enum Nested {}

    type F = Frame2d<Meters, Global, Local>;

    #[test]
    fn test_frame2d_handedness() {
        assert!(F::at_origin().is_right_handed());
        assert!(!F::at_origin().reverse_x().is_right_handed());
        let d = Direction2d::from_angle(Angle::degrees(-70.0));
        assert!(F::with_x_direction(d, Point2d::origin()).is_right_handed());
        assert!(F::with_y_direction(d, Point2d::origin()).is_right_handed());
        assert!(!F::at_origin().mirror_across(&Axis2d::x()).is_right_handed());
    }

    #[test]
    fn test_frame2d_point_in_rotated_frame() {
        let frame = F::at_point(Point2d::meters(1.0, 0.0)).rotate_by(Angle::degrees(90.0));
        let local = Point2d::<Meters, Global>::meters(1.0, 2.0).relative_to(&frame);
        assert!(local.equal_within(Length::meters(1e-12), Point2d::meters(2.0, 0.0)));
    }

    #[test]
    fn test_frame2d_nested_placement() {
        let outer = F::at_point(Point2d::meters(3.0, 0.0)).rotate_by(Angle::degrees(30.0));
        let inner: Frame2d<Meters, Local, Nested> =
            Frame2d::with_x_direction(Direction2d::from_angle(Angle::degrees(45.0)), Point2d::meters(1.0, 1.0));
        let placed = inner.place_in(&outer);
        let p = Point2d::<Meters, Nested>::meters(2.0, -1.0);
        let direct = p.place_in(&placed);
        let stepwise = p.place_in(&inner).place_in(&outer);
        assert!(direct.equal_within(Length::meters(1e-12), stepwise));
        let back = placed.relative_to(&outer);
        assert!(back.origin_point().equal_within(Length::meters(1e-12), inner.origin_point()));
    }
}
