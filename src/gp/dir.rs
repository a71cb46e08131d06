//! 3D direction (unit vector).

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use super::{Axis3d, Direction2d, Frame3d, Mat, Plane3d, Point3d, SketchPlane3d, Vector3d, XY, XYZ};
use crate::interop::Record3d;
use crate::precision;
use crate::units::{Angle, Unitless};
use crate::GeomError;

/// A unit vector in 3D space.
#[derive(Serialize, Deserialize)]
#[serde(into = "Record3d", try_from = "Record3d", bound = "")]
pub struct Direction3d<C> {
    coord: XYZ,
    tag: PhantomData<fn() -> C>,
}

impl_value_traits!(Direction3d<C> { coord });

impl<C> Direction3d<C> {
    /// Wraps coordinates that are already known to have unit length.
    #[inline]
    pub(crate) const fn unchecked(xyz: XYZ) -> Self {
        Self { coord: xyz, tag: PhantomData }
    }

    #[inline]
    pub(crate) const fn xyz(&self) -> XYZ {
        self.coord
    }

    /// The global X direction.
    #[inline]
    pub const fn x() -> Self {
        Self::unchecked(XYZ::from_coords(1.0, 0.0, 0.0))
    }

    /// The global Y direction.
    #[inline]
    pub const fn y() -> Self {
        Self::unchecked(XYZ::from_coords(0.0, 1.0, 0.0))
    }

    /// The global Z direction.
    #[inline]
    pub const fn z() -> Self {
        Self::unchecked(XYZ::from_coords(0.0, 0.0, 1.0))
    }

    /// Same as `x()`.
    #[inline]
    pub const fn positive_x() -> Self {
        Self::x()
    }

    /// The negative X direction.
    #[inline]
    pub const fn negative_x() -> Self {
        Self::unchecked(XYZ::from_coords(-1.0, 0.0, 0.0))
    }

    /// Same as `y()`.
    #[inline]
    pub const fn positive_y() -> Self {
        Self::y()
    }

    /// The negative Y direction.
    #[inline]
    pub const fn negative_y() -> Self {
        Self::unchecked(XYZ::from_coords(0.0, -1.0, 0.0))
    }

    /// Same as `z()`.
    #[inline]
    pub const fn positive_z() -> Self {
        Self::z()
    }

    /// The negative Z direction.
    #[inline]
    pub const fn negative_z() -> Self {
        Self::unchecked(XYZ::from_coords(0.0, 0.0, -1.0))
    }

    /// Direction from an azimuth measured counterclockwise from +X in the
    /// XY plane and an elevation measured up from that plane towards +Z.
    pub fn from_azimuth_and_elevation(azimuth: Angle, elevation: Angle) -> Self {
        let cos_elevation = elevation.cos();
        Self::unchecked(XYZ::from_coords(
            cos_elevation * azimuth.cos(),
            cos_elevation * azimuth.sin(),
            elevation.sin(),
        ))
    }

    /// Like [`Direction3d::from_azimuth_and_elevation`], with azimuth taken
    /// in the given sketch plane and elevation towards its normal.
    pub fn from_azimuth_in_and_elevation_from<SU, L>(
        sketch_plane: &SketchPlane3d<SU, C, L>,
        azimuth: Angle,
        elevation: Angle,
    ) -> Self {
        let cos_elevation = elevation.cos();
        Self::unchecked(XYZ::linear_form_3(
            cos_elevation * azimuth.cos(),
            &sketch_plane.x_direction().coord,
            cos_elevation * azimuth.sin(),
            &sketch_plane.y_direction().coord,
            elevation.sin(),
            &sketch_plane.normal_direction().coord,
        ))
    }

    /// Azimuth in the global XY plane.
    pub fn azimuth(self) -> Angle {
        Angle::atan2(self.coord.y(), self.coord.x())
    }

    /// Elevation above the global XY plane, in `[-π/2, π/2]`.
    pub fn elevation(self) -> Angle {
        let horizontal = XY::from_coords(self.coord.x(), self.coord.y()).modulus();
        Angle::atan2(self.coord.z(), horizontal)
    }

    /// Azimuth measured in the sketch plane, from its X direction towards its Y direction.
    pub fn azimuth_in<SU, L>(self, sketch_plane: &SketchPlane3d<SU, C, L>) -> Angle {
        Angle::atan2(
            self.component_in(sketch_plane.y_direction()),
            self.component_in(sketch_plane.x_direction()),
        )
    }

    /// Elevation above the sketch plane, in `[-π/2, π/2]`.
    pub fn elevation_from<SU, L>(self, sketch_plane: &SketchPlane3d<SU, C, L>) -> Angle {
        let horizontal = XY::from_coords(
            self.component_in(sketch_plane.x_direction()),
            self.component_in(sketch_plane.y_direction()),
        )
        .modulus();
        Angle::atan2(self.component_in(sketch_plane.normal_direction()), horizontal)
    }

    /// Direction from `p1` towards `p2`, or None if the points coincide.
    pub fn from_points<U>(p1: Point3d<U, C>, p2: Point3d<U, C>) -> Option<Self> {
        Vector3d::from_points(p1, p2).direction()
    }

    /// Some direction perpendicular to `d`.
    pub fn perpendicular_to(d: Self) -> Self {
        let perpendicular = d.coord.perpendicular();
        Self::unchecked(perpendicular.divided(perpendicular.modulus()))
    }

    /// Two directions that together with `d` form a right-handed
    /// orthonormal basis `(x, y, d)`.
    pub fn perpendicular_basis(d: Self) -> (Self, Self) {
        let x_direction = Self::perpendicular_to(d);
        let y_direction = Self::unchecked(d.coord.crossed(&x_direction.coord));
        (x_direction, y_direction)
    }

    /// Gram-Schmidt on three vectors. None if they are linearly dependent,
    /// including when a vector lies within [`precision::ANGULAR`] of the
    /// span of the ones before it.
    pub fn orthonormalize<U>(
        x_vector: Vector3d<U, C>,
        xy_vector: Vector3d<U, C>,
        xyz_vector: Vector3d<U, C>,
    ) -> Option<(Self, Self, Self)> {
        let x = x_vector.xyz().normalized()?;
        let u = xy_vector.xyz();
        let y = independent_residual(&u, u.subtracted(&x.multiplied(u.dot(&x))))?;
        let v = xyz_vector.xyz();
        let z_raw = v
            .subtracted(&x.multiplied(v.dot(&x)))
            .subtracted(&y.multiplied(v.dot(&y)));
        let z = independent_residual(&v, z_raw)?;
        Some((Self::unchecked(x), Self::unchecked(y), Self::unchecked(z)))
    }

    /// Returns the X component.
    #[inline]
    pub fn x_component(self) -> f64 {
        self.coord.x()
    }

    /// Returns the Y component.
    #[inline]
    pub fn y_component(self) -> f64 {
        self.coord.y()
    }

    /// Returns the Z component.
    #[inline]
    pub fn z_component(self) -> f64 {
        self.coord.z()
    }

    /// Returns all three components.
    #[inline]
    pub fn components(self) -> (f64, f64, f64) {
        self.coord.coords()
    }

    /// Unit vector with this direction.
    #[inline]
    pub fn to_vector(self) -> Vector3d<Unitless, C> {
        Vector3d::from_xyz(self.coord)
    }

    /// Cosine of the angle between the two directions.
    #[inline]
    pub fn component_in(self, other: Self) -> f64 {
        self.coord.dot(&other.coord)
    }

    /// Unsigned angle between the two directions, in `[0, π]`.
    pub fn angle_from(self, other: Self) -> Angle {
        let cross = other.coord.crossed(&self.coord).modulus();
        Angle::atan2(cross, other.coord.dot(&self.coord))
    }

    /// True if the angle between the directions is at most `tolerance`.
    pub fn equal_within(self, tolerance: Angle, other: Self) -> bool {
        self.angle_from(other) <= tolerance
    }

    /// Returns the opposite direction.
    #[inline]
    pub fn reverse(self) -> Self {
        Self::unchecked(self.coord.reversed())
    }

    /// Rotates about the direction of `axis`.
    pub fn rotate_around<AU>(self, axis: &Axis3d<AU, C>, angle: Angle) -> Self {
        let rotation = Mat::rotation(&axis.direction().coord, angle.value());
        Self::unchecked(rotation.multiply_xyz(&self.coord))
    }

    /// Mirrors across a plane parallel to `plane`.
    pub fn mirror_across<PU>(self, plane: &Plane3d<PU, C>) -> Self {
        let mirror = Mat::mirror(&plane.normal_direction().coord);
        Self::unchecked(mirror.multiply_xyz(&self.coord))
    }

    /// Expresses the direction in the local coordinates of `frame`.
    pub fn relative_to<FU, L>(self, frame: &Frame3d<FU, C, L>) -> Direction3d<L> {
        Direction3d::unchecked(XYZ::from_coords(
            self.component_in(frame.x_direction()),
            self.component_in(frame.y_direction()),
            self.component_in(frame.z_direction()),
        ))
    }

    /// Converts from the local coordinates of `frame` to its parent coordinates.
    pub fn place_in<FU, G>(self, frame: &Frame3d<FU, G, C>) -> Direction3d<G> {
        let (x, y, z) = self.coord.coords();
        Direction3d::unchecked(XYZ::linear_form_3(
            x,
            &frame.x_direction().coord,
            y,
            &frame.y_direction().coord,
            z,
            &frame.z_direction().coord,
        ))
    }

    /// Projects into a sketch plane and renormalizes. None if the
    /// direction is perpendicular to the plane.
    pub fn project_into<SU, L>(self, sketch_plane: &SketchPlane3d<SU, C, L>) -> Option<Direction2d<L>> {
        XY::from_coords(
            self.component_in(sketch_plane.x_direction()),
            self.component_in(sketch_plane.y_direction()),
        )
        .normalized()
        .map(Direction2d::unchecked)
    }

    /// Builds a 3D direction from a 2D direction in a sketch plane.
    pub fn on<SU, L>(sketch_plane: &SketchPlane3d<SU, C, L>, direction: Direction2d<L>) -> Self {
        let (x, y) = direction.xy().coords();
        Self::unchecked(XYZ::linear_form_2(
            x,
            &sketch_plane.x_direction().coord,
            y,
            &sketch_plane.y_direction().coord,
        ))
    }
}

impl<C> std::ops::Neg for Direction3d<C> {
    type Output = Self;
    fn neg(self) -> Self {
        self.reverse()
    }
}

impl<C> From<Direction3d<C>> for Record3d {
    fn from(direction: Direction3d<C>) -> Self {
        let (x, y, z) = direction.coord.coords();
        Record3d { x, y, z }
    }
}

impl<C> TryFrom<Record3d> for Direction3d<C> {
    type Error = GeomError;

    fn try_from(record: Record3d) -> Result<Self, Self::Error> {
        XYZ::from_coords(record.x, record.y, record.z)
            .normalized()
            .map(Self::unchecked)
            .ok_or(GeomError::ZeroDirection)
    }
}

/// Normalized Gram-Schmidt residual of `input`, or None when the residual
/// is rounding noise relative to the input.
fn independent_residual(input: &XYZ, residual: XYZ) -> Option<XYZ> {
    let (length, unit) = residual.modulus_and_normalized()?;
    (length > precision::ANGULAR * input.modulus()).then_some(unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Meters;
    use approx::assert_relative_eq;

    enum Global {}
    enum Sketch {}

    type D = Direction3d<Global>;

    fn assert_unit(d: D) {
        assert_relative_eq!(d.coord.modulus(), 1.0, epsilon = 1e-14);
    }

    #[test]
    fn test_dir_azimuth_elevation() {
        let d = D::from_azimuth_and_elevation(Angle::degrees(30.0), Angle::degrees(45.0));
        assert_unit(d);
        assert_relative_eq!(d.azimuth().in_degrees(), 30.0, epsilon = 1e-9);
        assert_relative_eq!(d.elevation().in_degrees(), 45.0, epsilon = 1e-9);
    }

    #[test]
    fn test_dir_azimuth_in_sketch_plane() {
        let sketch: SketchPlane3d<Meters, Global, Sketch> = SketchPlane3d::yz();
        let d = D::from_azimuth_in_and_elevation_from(&sketch, Angle::degrees(90.0), Angle::zero());
        assert!(d.equal_within(Angle::radians(1e-12), D::z()));
        assert_relative_eq!(d.azimuth_in(&sketch).in_degrees(), 90.0, epsilon = 1e-9);
        assert_relative_eq!(D::x().elevation_from(&sketch).in_degrees(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_dir_perpendicular_basis() {
        let d = D::from_azimuth_and_elevation(Angle::degrees(-120.0), Angle::degrees(10.0));
        let (x, y) = D::perpendicular_basis(d);
        assert_unit(x);
        assert_unit(y);
        assert!(x.component_in(d).abs() < 1e-15);
        assert!(y.component_in(d).abs() < 1e-15);
        assert!(x.component_in(y).abs() < 1e-15);
        let z = x.coord.crossed(&y.coord);
        assert!((z - d.coord).modulus() < 1e-14);
    }

    #[test]
    fn test_dir_orthonormalize() {
        let (x, y, z) = D::orthonormalize(
            Vector3d::<Meters, Global>::meters(2.0, 0.0, 0.0),
            Vector3d::meters(1.0, 3.0, 0.0),
            Vector3d::meters(5.0, 5.0, -1.0),
        )
        .unwrap();
        assert_eq!(x, D::x());
        assert_eq!(y, D::y());
        assert_eq!(z, D::negative_z());
        assert!(D::orthonormalize(
            Vector3d::<Meters, Global>::meters(1.0, 0.0, 0.0),
            Vector3d::meters(0.0, 1.0, 0.0),
            Vector3d::meters(1.0, 1.0, 0.0),
        )
        .is_none());
    }

    #[test]
    fn test_dir_orthonormalize_rejects_inexact_dependence() {
        let a = Vector3d::<Meters, Global>::meters(0.1, 0.2, 0.3);
        let b = Vector3d::meters(0.4, 0.5, 0.6);
        let c = a * 3.0 + b * 7.0;
        assert!(D::orthonormalize(a, b, c).is_none());
        assert!(D::orthonormalize(a, a * 3.0, b).is_none());

        let (x, y, z) = D::orthonormalize(a, b, Vector3d::meters(0.0, 0.0, 1.0)).unwrap();
        assert!(x.to_vector().dot(y.to_vector()).value().abs() < 1e-14);
        assert!(x.to_vector().dot(z.to_vector()).value().abs() < 1e-14);
        assert!(y.to_vector().dot(z.to_vector()).value().abs() < 1e-14);
    }

    #[test]
    fn test_dir_angle_from() {
        assert_relative_eq!(D::x().angle_from(D::y()).in_degrees(), 90.0, epsilon = 1e-12);
        assert_relative_eq!(D::x().angle_from(D::negative_x()).in_degrees(), 180.0, epsilon = 1e-12);
    }

    #[test]
    fn test_dir_project_into() {
        let sketch: SketchPlane3d<Meters, Global, Sketch> = SketchPlane3d::xy();
        assert_eq!(D::z().project_into(&sketch), None);
        assert_eq!(
            D::from_azimuth_and_elevation(Angle::zero(), Angle::degrees(60.0)).project_into(&sketch),
            Some(Direction2d::x())
        );
    }

    #[test]
    fn test_dir_mirror() {
        let plane = Plane3d::<Meters, Global>::zx();
        assert_eq!(D::y().mirror_across(&plane), D::negative_y());
    }
}
