//! Plane in 3D space: an origin point plus a normal direction.

use super::{Axis3d, Direction3d, Frame3d, Point3d, Vector3d};
use crate::units::{Angle, Quantity};

/// Describes a plane.
pub struct Plane3d<U, C> {
    origin: Point3d<U, C>,
    normal: Direction3d<C>,
}

impl_value_traits!(Plane3d<U, C> { origin, normal });

impl<U, C> Plane3d<U, C> {
    /// The XY plane, normal +Z.
    #[inline]
    pub const fn xy() -> Self {
        Self::through(Point3d::origin(), Direction3d::z())
    }

    /// The YZ plane, normal +X.
    #[inline]
    pub const fn yz() -> Self {
        Self::through(Point3d::origin(), Direction3d::x())
    }

    /// The ZX plane, normal +Y.
    #[inline]
    pub const fn zx() -> Self {
        Self::through(Point3d::origin(), Direction3d::y())
    }

    /// Plane through `origin` with the given normal.
    #[inline]
    pub const fn through(origin: Point3d<U, C>, normal: Direction3d<C>) -> Self {
        Self { origin, normal }
    }

    /// Same as `through`, with the arguments swapped.
    #[inline]
    pub const fn with_normal_direction(normal: Direction3d<C>, origin: Point3d<U, C>) -> Self {
        Self::through(origin, normal)
    }

    /// Plane through three points, with its normal following the
    /// right-hand rule `p1 -> p2 -> p3`. None if the points are collinear.
    pub fn through_points(p1: Point3d<U, C>, p2: Point3d<U, C>, p3: Point3d<U, C>) -> Option<Self> {
        let first = Vector3d::from_points(p1, p2);
        let second = Vector3d::from_points(p2, p3);
        let normal = first.cross(second).direction()?;
        Some(Self::through(p1, normal))
    }

    /// Returns the origin point.
    #[inline]
    pub const fn origin_point(&self) -> Point3d<U, C> {
        self.origin
    }

    /// Returns the normal direction.
    #[inline]
    pub const fn normal_direction(&self) -> Direction3d<C> {
        self.normal
    }

    /// Axis through the origin along the normal.
    #[inline]
    pub const fn normal_axis(&self) -> Axis3d<U, C> {
        Axis3d::through(self.origin, self.normal)
    }

    /// Shifts the plane along its normal by a signed distance.
    pub fn offset_by(&self, distance: Quantity<U>) -> Self {
        Self::through(self.origin.translate_in(self.normal, distance), self.normal)
    }

    /// Flips the normal, keeping the origin.
    #[inline]
    pub fn reverse_normal(&self) -> Self {
        Self::through(self.origin, self.normal.reverse())
    }

    /// Moves the origin, keeping the normal.
    #[inline]
    pub fn move_to(&self, origin: Point3d<U, C>) -> Self {
        Self::through(origin, self.normal)
    }

    /// Rotates about `axis` by `angle`.
    pub fn rotate_around(&self, axis: &Axis3d<U, C>, angle: Angle) -> Self {
        Self::through(
            self.origin.rotate_around(axis, angle),
            self.normal.rotate_around(axis, angle),
        )
    }

    /// Translates by a vector.
    #[inline]
    pub fn translate_by(&self, vector: Vector3d<U, C>) -> Self {
        Self::through(self.origin.translate_by(vector), self.normal)
    }

    /// Translates by `distance` in `direction`.
    #[inline]
    pub fn translate_in(&self, direction: Direction3d<C>, distance: Quantity<U>) -> Self {
        Self::through(self.origin.translate_in(direction, distance), self.normal)
    }

    /// Mirrors across another plane.
    pub fn mirror_across(&self, plane: &Plane3d<U, C>) -> Self {
        Self::through(
            self.origin.mirror_across(plane),
            self.normal.mirror_across(plane),
        )
    }

    /// Expresses the plane in the local coordinates of `frame`.
    pub fn relative_to<L>(&self, frame: &Frame3d<U, C, L>) -> Plane3d<U, L> {
        Plane3d::through(self.origin.relative_to(frame), self.normal.relative_to(frame))
    }

    /// Converts from the local coordinates of `frame` to its parent coordinates.
    pub fn place_in<G>(&self, frame: &Frame3d<U, G, C>) -> Plane3d<U, G> {
        Plane3d::through(self.origin.place_in(frame), self.normal.place_in(frame))
    }
}
