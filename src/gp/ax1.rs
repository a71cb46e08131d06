//! 3D axis: an origin point plus a direction.

use super::{Axis2d, Direction3d, Frame3d, Plane3d, Point3d, SketchPlane3d, Vector3d};
use crate::units::{Angle, Quantity};

/// Describes an axis in 3D space.
pub struct Axis3d<U, C> {
    origin: Point3d<U, C>,
    direction: Direction3d<C>,
}

impl_value_traits!(Axis3d<U, C> { origin, direction });

impl<U, C> Axis3d<U, C> {
    /// The global X axis.
    #[inline]
    pub const fn x() -> Self {
        Self::through(Point3d::origin(), Direction3d::x())
    }

    /// The global Y axis.
    #[inline]
    pub const fn y() -> Self {
        Self::through(Point3d::origin(), Direction3d::y())
    }

    /// The global Z axis.
    #[inline]
    pub const fn z() -> Self {
        Self::through(Point3d::origin(), Direction3d::z())
    }

    /// Creates an axis through `origin` along `direction`.
    #[inline]
    pub const fn through(origin: Point3d<U, C>, direction: Direction3d<C>) -> Self {
        Self { origin, direction }
    }

    /// Same as `through`, with the arguments swapped.
    #[inline]
    pub const fn with_direction(direction: Direction3d<C>, origin: Point3d<U, C>) -> Self {
        Self::through(origin, direction)
    }

    /// Lifts a 2D axis in a sketch plane into 3D.
    pub fn on<L>(sketch_plane: &SketchPlane3d<U, C, L>, axis: &Axis2d<U, L>) -> Self {
        Self::through(
            Point3d::on(sketch_plane, axis.origin_point()),
            Direction3d::on(sketch_plane, axis.direction()),
        )
    }

    /// Returns the origin point.
    #[inline]
    pub const fn origin_point(&self) -> Point3d<U, C> {
        self.origin
    }

    /// Returns the direction.
    #[inline]
    pub const fn direction(&self) -> Direction3d<C> {
        self.direction
    }

    /// Reverses the direction, keeping the origin.
    #[inline]
    pub fn reverse(&self) -> Self {
        Self::through(self.origin, self.direction.reverse())
    }

    /// Moves the origin, keeping the direction.
    #[inline]
    pub fn move_to(&self, origin: Point3d<U, C>) -> Self {
        Self::through(origin, self.direction)
    }

    /// Rotates about `axis` by `angle`.
    pub fn rotate_around(&self, axis: &Axis3d<U, C>, angle: Angle) -> Self {
        Self::through(
            self.origin.rotate_around(axis, angle),
            self.direction.rotate_around(axis, angle),
        )
    }

    /// Translates by a vector.
    #[inline]
    pub fn translate_by(&self, vector: Vector3d<U, C>) -> Self {
        Self::through(self.origin.translate_by(vector), self.direction)
    }

    /// Translates by `distance` in `direction`.
    #[inline]
    pub fn translate_in(&self, direction: Direction3d<C>, distance: Quantity<U>) -> Self {
        Self::through(self.origin.translate_in(direction, distance), self.direction)
    }

    /// Mirrors across the given plane.
    pub fn mirror_across(&self, plane: &Plane3d<U, C>) -> Self {
        Self::through(
            self.origin.mirror_across(plane),
            self.direction.mirror_across(plane),
        )
    }

    /// Projects onto a plane. None if the axis is perpendicular to it.
    pub fn project_onto(&self, plane: &Plane3d<U, C>) -> Option<Self> {
        let direction = self.direction.to_vector().project_onto(plane).direction()?;
        Some(Self::through(self.origin.project_onto(plane), direction))
    }

    /// Expresses the axis in the local coordinates of `frame`.
    pub fn relative_to<L>(&self, frame: &Frame3d<U, C, L>) -> Axis3d<U, L> {
        Axis3d::through(
            self.origin.relative_to(frame),
            self.direction.relative_to(frame),
        )
    }

    /// Converts from the local coordinates of `frame` to its parent coordinates.
    pub fn place_in<G>(&self, frame: &Frame3d<U, G, C>) -> Axis3d<U, G> {
        Axis3d::through(self.origin.place_in(frame), self.direction.place_in(frame))
    }

    /// Projects into a sketch plane. None if the axis is perpendicular to it.
    pub fn project_into<L>(&self, sketch_plane: &SketchPlane3d<U, C, L>) -> Option<Axis2d<U, L>> {
        let direction = self.direction.project_into(sketch_plane)?;
        Some(Axis2d::through(self.origin.project_into(sketch_plane), direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gp::{Direction2d, Point2d};
    use crate::units::{Length, Meters};

    enum Global {}
    enum Sketch {}

    type A = Axis3d<Meters, Global>;

    #[test]
    fn test_ax1_project_onto_plane() {
        let axis = A::through(Point3d::meters(1.0, 2.0, 3.0), Direction3d::x());
        let projected = axis.project_onto(&Plane3d::xy()).unwrap();
        assert_eq!(projected.origin_point(), Point3d::meters(1.0, 2.0, 0.0));
        assert_eq!(projected.direction(), Direction3d::x());
        assert!(A::z().project_onto(&Plane3d::xy()).is_none());
    }

    #[test]
    fn test_ax1_sketch_plane_round_trip() {
        let sketch: SketchPlane3d<Meters, Global, Sketch> = SketchPlane3d::xy();
        let axis2d = Axis2d::through(Point2d::meters(1.0, -1.0), Direction2d::y());
        let axis = A::on(&sketch, &axis2d);
        assert_eq!(axis.origin_point(), Point3d::meters(1.0, -1.0, 0.0));
        assert_eq!(axis.direction(), Direction3d::y());
        assert!(A::z().project_into(&sketch).is_none());
        assert_eq!(axis.project_into(&sketch), Some(axis2d));
    }

    #[test]
    fn test_ax1_rotate_and_mirror() {
        let rotated = A::x().rotate_around(&A::z(), Angle::degrees(90.0));
        assert!(rotated.direction().equal_within(Angle::radians(1e-12), Direction3d::y()));
        let mirrored = A::through(Point3d::meters(0.0, 0.0, 1.0), Direction3d::z())
            .mirror_across(&Plane3d::xy());
        assert_eq!(mirrored.origin_point(), Point3d::meters(0.0, 0.0, -1.0));
        assert_eq!(mirrored.direction(), Direction3d::negative_z());
        let moved = A::x().translate_in(Direction3d::z(), Length::meters(2.0));
        assert_eq!(moved.origin_point(), Point3d::meters(0.0, 0.0, 2.0));
    }
}
