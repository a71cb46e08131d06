//! 3D coordinate frame.
//!
//! Origin plus three mutually perpendicular unit directions in parent
//! coordinates `C`, defining local coordinates `L`. Frames built by the
//! constructors here are right-handed; `reverse_*` and `mirror_across`
//! produce left-handed ones.

use std::marker::PhantomData;

use super::{Axis3d, Direction3d, Mat, Plane3d, Point3d, SketchPlane3d, Vector3d};
use crate::units::{Angle, Quantity};

/// Positioned orthonormal 3D coordinate system.
pub struct Frame3d<U, C, L> {
    origin: Point3d<U, C>,
    x_direction: Direction3d<C>,
    y_direction: Direction3d<C>,
    z_direction: Direction3d<C>,
    local: PhantomData<fn() -> L>,
}

impl_value_traits!(Frame3d<U, C, L> { origin, x_direction, y_direction, z_direction });

impl<U, C, L> Frame3d<U, C, L> {
    /// Builds a frame from directions that are already orthonormal.
    #[inline]
    pub(crate) const fn unchecked(
        origin: Point3d<U, C>,
        x_direction: Direction3d<C>,
        y_direction: Direction3d<C>,
        z_direction: Direction3d<C>,
    ) -> Self {
        Self { origin, x_direction, y_direction, z_direction, local: PhantomData }
    }

    /// Axis-aligned frame at the origin.
    #[inline]
    pub const fn at_origin() -> Self {
        Self::at_point(Point3d::origin())
    }

    /// Axis-aligned frame at the given point.
    #[inline]
    pub const fn at_point(origin: Point3d<U, C>) -> Self {
        Self::unchecked(origin, Direction3d::x(), Direction3d::y(), Direction3d::z())
    }

    /// Right-handed frame with the given X direction; Y and Z are chosen
    /// arbitrarily.
    pub fn with_x_direction(x_direction: Direction3d<C>, origin: Point3d<U, C>) -> Self {
        let (y_direction, z_direction) = Direction3d::perpendicular_basis(x_direction);
        Self::unchecked(origin, x_direction, y_direction, z_direction)
    }

    /// Right-handed frame with the given Y direction; X and Z are chosen arbitrarily.
    pub fn with_y_direction(y_direction: Direction3d<C>, origin: Point3d<U, C>) -> Self {
        let (z_direction, x_direction) = Direction3d::perpendicular_basis(y_direction);
        Self::unchecked(origin, x_direction, y_direction, z_direction)
    }

    /// Right-handed frame with the given Z direction; X and Y are chosen arbitrarily.
    pub fn with_z_direction(z_direction: Direction3d<C>, origin: Point3d<U, C>) -> Self {
        let (x_direction, y_direction) = Direction3d::perpendicular_basis(z_direction);
        Self::unchecked(origin, x_direction, y_direction, z_direction)
    }

    /// Right-handed frame whose X axis is `axis`.
    #[inline]
    pub fn from_x_axis(axis: &Axis3d<U, C>) -> Self {
        Self::with_x_direction(axis.direction(), axis.origin_point())
    }

    /// Right-handed frame whose Y axis is `axis`.
    #[inline]
    pub fn from_y_axis(axis: &Axis3d<U, C>) -> Self {
        Self::with_y_direction(axis.direction(), axis.origin_point())
    }

    /// Right-handed frame whose Z axis is `axis`.
    #[inline]
    pub fn from_z_axis(axis: &Axis3d<U, C>) -> Self {
        Self::with_z_direction(axis.direction(), axis.origin_point())
    }

    /// Same frame, defining a different local coordinate system.
    #[inline]
    pub const fn copy<L2>(&self) -> Frame3d<U, C, L2> {
        Frame3d::unchecked(self.origin, self.x_direction, self.y_direction, self.z_direction)
    }

    /// Returns the origin point.
    #[inline]
    pub const fn origin_point(&self) -> Point3d<U, C> {
        self.origin
    }

    /// Returns the X direction.
    #[inline]
    pub const fn x_direction(&self) -> Direction3d<C> {
        self.x_direction
    }

    /// Returns the Y direction.
    #[inline]
    pub const fn y_direction(&self) -> Direction3d<C> {
        self.y_direction
    }

    /// Returns the Z direction.
    #[inline]
    pub const fn z_direction(&self) -> Direction3d<C> {
        self.z_direction
    }

    /// Returns the X axis.
    #[inline]
    pub const fn x_axis(&self) -> Axis3d<U, C> {
        Axis3d::through(self.origin, self.x_direction)
    }

    /// Returns the Y axis.
    #[inline]
    pub const fn y_axis(&self) -> Axis3d<U, C> {
        Axis3d::through(self.origin, self.y_direction)
    }

    /// Returns the Z axis.
    #[inline]
    pub const fn z_axis(&self) -> Axis3d<U, C> {
        Axis3d::through(self.origin, self.z_direction)
    }

    /// True if `x × y` points along Z.
    pub fn is_right_handed(&self) -> bool {
        let basis = Mat::from_columns(
            &self.x_direction.xyz(),
            &self.y_direction.xyz(),
            &self.z_direction.xyz(),
        );
        basis.determinant() > 0.0
    }

    /// Flips the X direction, changing handedness.
    pub fn reverse_x(&self) -> Self {
        Self::unchecked(self.origin, self.x_direction.reverse(), self.y_direction, self.z_direction)
    }

    /// Flips the Y direction, changing handedness.
    pub fn reverse_y(&self) -> Self {
        Self::unchecked(self.origin, self.x_direction, self.y_direction.reverse(), self.z_direction)
    }

    /// Flips the Z direction, changing handedness.
    pub fn reverse_z(&self) -> Self {
        Self::unchecked(self.origin, self.x_direction, self.y_direction, self.z_direction.reverse())
    }

    /// Moves the origin, keeping the orientation.
    #[inline]
    pub fn move_to(&self, origin: Point3d<U, C>) -> Self {
        Self::unchecked(origin, self.x_direction, self.y_direction, self.z_direction)
    }

    /// Rotates the origin and all directions about `axis`.
    pub fn rotate_around(&self, axis: &Axis3d<U, C>, angle: Angle) -> Self {
        Self::unchecked(
            self.origin.rotate_around(axis, angle),
            self.x_direction.rotate_around(axis, angle),
            self.y_direction.rotate_around(axis, angle),
            self.z_direction.rotate_around(axis, angle),
        )
    }

    /// Translates by a vector.
    #[inline]
    pub fn translate_by(&self, vector: Vector3d<U, C>) -> Self {
        self.move_to(self.origin.translate_by(vector))
    }

    /// Translates by `distance` along the direction of `axis`.
    pub fn translate_along(&self, axis: &Axis3d<U, C>, distance: Quantity<U>) -> Self {
        self.translate_by(Vector3d::with_length(distance, axis.direction()))
    }

    /// Mirrors across the given plane, changing handedness.
    pub fn mirror_across(&self, plane: &Plane3d<U, C>) -> Self {
        Self::unchecked(
            self.origin.mirror_across(plane),
            self.x_direction.mirror_across(plane),
            self.y_direction.mirror_across(plane),
            self.z_direction.mirror_across(plane),
        )
    }

    /// Expresses this frame in the local coordinates of `other`.
    pub fn relative_to<L2>(&self, other: &Frame3d<U, C, L2>) -> Frame3d<U, L2, L> {
        Frame3d::unchecked(
            self.origin.relative_to(other),
            self.x_direction.relative_to(other),
            self.y_direction.relative_to(other),
            self.z_direction.relative_to(other),
        )
    }

    /// Converts this frame from the local coordinates of `other` to its parent coordinates.
    pub fn place_in<G>(&self, other: &Frame3d<U, G, C>) -> Frame3d<U, G, L> {
        Frame3d::unchecked(
            self.origin.place_in(other),
            self.x_direction.place_in(other),
            self.y_direction.place_in(other),
            self.z_direction.place_in(other),
        )
    }

    /// The plane spanned by the X and Y directions, normal along Z.
    #[inline]
    pub const fn xy_plane(&self) -> Plane3d<U, C> {
        Plane3d::through(self.origin, self.z_direction)
    }

    /// Plane through the origin with normal along X.
    #[inline]
    pub const fn yz_plane(&self) -> Plane3d<U, C> {
        Plane3d::through(self.origin, self.x_direction)
    }

    /// Plane through the origin with normal along Y.
    #[inline]
    pub const fn zx_plane(&self) -> Plane3d<U, C> {
        Plane3d::through(self.origin, self.y_direction)
    }

    /// Sketch plane with local X and Y along the frame X and Y.
    #[inline]
    pub const fn xy_sketch_plane<S>(&self) -> SketchPlane3d<U, C, S> {
        SketchPlane3d::unchecked(self.origin, self.x_direction, self.y_direction)
    }

    /// Sketch plane with local X and Y along the frame Y and X.
    #[inline]
    pub const fn yx_sketch_plane<S>(&self) -> SketchPlane3d<U, C, S> {
        SketchPlane3d::unchecked(self.origin, self.y_direction, self.x_direction)
    }

    /// Sketch plane with local X and Y along the frame Y and Z.
    #[inline]
    pub const fn yz_sketch_plane<S>(&self) -> SketchPlane3d<U, C, S> {
        SketchPlane3d::unchecked(self.origin, self.y_direction, self.z_direction)
    }

    /// Sketch plane with local X and Y along the frame Z and Y.
    #[inline]
    pub const fn zy_sketch_plane<S>(&self) -> SketchPlane3d<U, C, S> {
        SketchPlane3d::unchecked(self.origin, self.z_direction, self.y_direction)
    }

    /// Sketch plane with local X and Y along the frame Z and X.
    #[inline]
    pub const fn zx_sketch_plane<S>(&self) -> SketchPlane3d<U, C, S> {
        SketchPlane3d::unchecked(self.origin, self.z_direction, self.x_direction)
    }

    /// Sketch plane with local X and Y along the frame X and Z.
    #[inline]
    pub const fn xz_sketch_plane<S>(&self) -> SketchPlane3d<U, C, S> {
        SketchPlane3d::unchecked(self.origin, self.x_direction, self.z_direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Length, Meters};

    enum Global {}
    enum Local {}

    type F = Frame3d<Meters, Global, Local>;

    fn assert_orthonormal(frame: &F) {
        let x = frame.x_direction();
        let y = frame.y_direction();
        let z = frame.z_direction();
        assert!(x.component_in(y).abs() < 1e-14);
        assert!(y.component_in(z).abs() < 1e-14);
        assert!(z.component_in(x).abs() < 1e-14);
    }

    #[test]
    fn test_frame3d_constructors_right_handed() {
        let d = Direction3d::from_azimuth_and_elevation(Angle::degrees(200.0), Angle::degrees(-25.0));
        for frame in [
            F::with_x_direction(d, Point3d::origin()),
            F::with_y_direction(d, Point3d::origin()),
            F::with_z_direction(d, Point3d::origin()),
        ] {
            assert_orthonormal(&frame);
            assert!(frame.is_right_handed());
        }
        assert_eq!(F::with_y_direction(d, Point3d::origin()).y_direction(), d);
    }

    #[test]
    fn test_frame3d_handedness_flips() {
        assert!(F::at_origin().is_right_handed());
        assert!(!F::at_origin().reverse_z().is_right_handed());
        assert!(!F::at_origin().mirror_across(&Plane3d::xy()).is_right_handed());
    }

    #[test]
    fn test_frame3d_planes_and_sketch_planes() {
        let frame = F::at_point(Point3d::meters(1.0, 2.0, 3.0));
        assert_eq!(frame.xy_plane().normal_direction(), Direction3d::z());
        assert_eq!(frame.zx_plane().normal_direction(), Direction3d::y());
        let sketch: SketchPlane3d<Meters, Global, Local> = frame.zx_sketch_plane();
        assert_eq!(sketch.normal_direction(), Direction3d::y());
        let sketch: SketchPlane3d<Meters, Global, Local> = frame.xz_sketch_plane();
        assert_eq!(sketch.normal_direction(), Direction3d::negative_y());
    }

    #[test]
    fn test_frame3d_translate_along() {
        let frame = F::at_origin().translate_along(&Axis3d::y(), Length::meters(4.0));
        assert_eq!(frame.origin_point(), Point3d::meters(0.0, 4.0, 0.0));
    }
}
