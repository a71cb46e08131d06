//! Sketch plane: a 2D coordinate system embedded in 3D space.
//!
//! Origin plus two perpendicular in-plane directions in 3D coordinates `C`;
//! 2D entities in coordinates `L` are lifted with `on` and brought down
//! with `project_into`.

use std::marker::PhantomData;

use super::{Axis3d, Direction3d, Frame3d, Plane3d, Point3d, Vector3d};
use crate::units::{Angle, Quantity};

/// A positioned 2D coordinate system in 3D.
pub struct SketchPlane3d<U, C, L> {
    origin: Point3d<U, C>,
    x_direction: Direction3d<C>,
    y_direction: Direction3d<C>,
    local: PhantomData<fn() -> L>,
}

impl_value_traits!(SketchPlane3d<U, C, L> { origin, x_direction, y_direction });

impl<U, C, L> SketchPlane3d<U, C, L> {
    /// Builds a sketch plane from perpendicular unit directions.
    #[inline]
    pub(crate) const fn unchecked(
        origin: Point3d<U, C>,
        x_direction: Direction3d<C>,
        y_direction: Direction3d<C>,
    ) -> Self {
        Self { origin, x_direction, y_direction, local: PhantomData }
    }

    /// Global XY plane, local axes along global X and Y.
    #[inline]
    pub const fn xy() -> Self {
        Self::unchecked(Point3d::origin(), Direction3d::x(), Direction3d::y())
    }

    /// Global XY plane, local axes along global Y and X.
    #[inline]
    pub const fn yx() -> Self {
        Self::unchecked(Point3d::origin(), Direction3d::y(), Direction3d::x())
    }

    /// Global YZ plane, local axes along global Y and Z.
    #[inline]
    pub const fn yz() -> Self {
        Self::unchecked(Point3d::origin(), Direction3d::y(), Direction3d::z())
    }

    /// Global YZ plane, local axes along global Z and Y.
    #[inline]
    pub const fn zy() -> Self {
        Self::unchecked(Point3d::origin(), Direction3d::z(), Direction3d::y())
    }

    /// Global ZX plane, local axes along global Z and X.
    #[inline]
    pub const fn zx() -> Self {
        Self::unchecked(Point3d::origin(), Direction3d::z(), Direction3d::x())
    }

    /// Global ZX plane, local axes along global X and Z.
    #[inline]
    pub const fn xz() -> Self {
        Self::unchecked(Point3d::origin(), Direction3d::x(), Direction3d::z())
    }

    /// Sketch plane through a point with the given normal. The in-plane
    /// directions are chosen so that `x × y` is the normal.
    pub fn through(origin: Point3d<U, C>, normal: Direction3d<C>) -> Self {
        let (x_direction, y_direction) = Direction3d::perpendicular_basis(normal);
        Self::unchecked(origin, x_direction, y_direction)
    }

    /// Sketch plane with the origin and normal of `plane`.
    #[inline]
    pub fn from_plane(plane: &Plane3d<U, C>) -> Self {
        Self::through(plane.origin_point(), plane.normal_direction())
    }

    /// Same plane, with a different 2D coordinate tag.
    #[inline]
    pub const fn copy<L2>(&self) -> SketchPlane3d<U, C, L2> {
        SketchPlane3d::unchecked(self.origin, self.x_direction, self.y_direction)
    }

    /// Returns the origin point.
    #[inline]
    pub const fn origin_point(&self) -> Point3d<U, C> {
        self.origin
    }

    /// Returns the local X direction.
    #[inline]
    pub const fn x_direction(&self) -> Direction3d<C> {
        self.x_direction
    }

    /// Returns the local Y direction.
    #[inline]
    pub const fn y_direction(&self) -> Direction3d<C> {
        self.y_direction
    }

    /// `x × y`.
    pub fn normal_direction(&self) -> Direction3d<C> {
        Direction3d::unchecked(self.x_direction.xyz().crossed(&self.y_direction.xyz()))
    }

    /// Returns the local X axis.
    #[inline]
    pub const fn x_axis(&self) -> Axis3d<U, C> {
        Axis3d::through(self.origin, self.x_direction)
    }

    /// Returns the local Y axis.
    #[inline]
    pub const fn y_axis(&self) -> Axis3d<U, C> {
        Axis3d::through(self.origin, self.y_direction)
    }

    /// Axis through the origin along `x × y`.
    pub fn normal_axis(&self) -> Axis3d<U, C> {
        Axis3d::through(self.origin, self.normal_direction())
    }

    /// Plane with the same origin and normal.
    pub fn to_plane(&self) -> Plane3d<U, C> {
        Plane3d::through(self.origin, self.normal_direction())
    }

    /// Shifts along the normal by a signed distance.
    pub fn offset_by(&self, distance: Quantity<U>) -> Self {
        self.move_to(self.origin.translate_in(self.normal_direction(), distance))
    }

    /// Flips the local X direction, reversing the normal.
    pub fn reverse_x(&self) -> Self {
        Self::unchecked(self.origin, self.x_direction.reverse(), self.y_direction)
    }

    /// Flips the local Y direction, reversing the normal.
    pub fn reverse_y(&self) -> Self {
        Self::unchecked(self.origin, self.x_direction, self.y_direction.reverse())
    }

    /// Moves the origin, keeping the orientation.
    #[inline]
    pub fn move_to(&self, origin: Point3d<U, C>) -> Self {
        Self::unchecked(origin, self.x_direction, self.y_direction)
    }

    /// Rotates about `axis` by `angle`.
    pub fn rotate_around(&self, axis: &Axis3d<U, C>, angle: Angle) -> Self {
        Self::unchecked(
            self.origin.rotate_around(axis, angle),
            self.x_direction.rotate_around(axis, angle),
            self.y_direction.rotate_around(axis, angle),
        )
    }

    /// Translates by a vector.
    #[inline]
    pub fn translate_by(&self, vector: Vector3d<U, C>) -> Self {
        self.move_to(self.origin.translate_by(vector))
    }

    /// Mirrors across the given plane.
    pub fn mirror_across(&self, plane: &Plane3d<U, C>) -> Self {
        Self::unchecked(
            self.origin.mirror_across(plane),
            self.x_direction.mirror_across(plane),
            self.y_direction.mirror_across(plane),
        )
    }

    /// Expresses the sketch plane in the local coordinates of `frame`.
    pub fn relative_to<F>(&self, frame: &Frame3d<U, C, F>) -> SketchPlane3d<U, F, L> {
        SketchPlane3d::unchecked(
            self.origin.relative_to(frame),
            self.x_direction.relative_to(frame),
            self.y_direction.relative_to(frame),
        )
    }

    /// Converts from the local coordinates of `frame` to its parent coordinates.
    pub fn place_in<G>(&self, frame: &Frame3d<U, G, C>) -> SketchPlane3d<U, G, L> {
        SketchPlane3d::unchecked(
            self.origin.place_in(frame),
            self.x_direction.place_in(frame),
            self.y_direction.place_in(frame),
        )
    }
}
