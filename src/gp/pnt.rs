//! 3D point.

use std::marker::PhantomData;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use super::{Axis3d, Direction3d, Frame3d, Mat, Plane3d, Point2d, SketchPlane3d, Vector3d, XY, XYZ};
use crate::interop::Record3d;
use crate::units::{Angle, Meters, Pixels, Quantity, Squared, Unitless};

/// A position in 3D space.
#[derive(Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct Point3d<U, C> {
    coord: XYZ,
    tag: PhantomData<fn() -> (U, C)>,
}

impl_value_traits!(Point3d<U, C> { coord });

impl<U, C> Point3d<U, C> {
    /// Returns the origin point.
    #[inline]
    pub const fn origin() -> Self {
        Self::from_xyz(XYZ::new())
    }

    #[inline]
    pub(crate) const fn from_xyz(xyz: XYZ) -> Self {
        Self { coord: xyz, tag: PhantomData }
    }

    #[inline]
    pub(crate) const fn xyz(&self) -> XYZ {
        self.coord
    }

    /// Creates a point from its coordinates.
    #[inline]
    pub fn from_coordinates(x: Quantity<U>, y: Quantity<U>, z: Quantity<U>) -> Self {
        Self::from_xyz(XYZ::from_coords(x.value(), y.value(), z.value()))
    }

    /// Places 2D sketch coordinates onto a sketch plane.
    pub fn on<L>(sketch_plane: &SketchPlane3d<U, C, L>, point: Point2d<U, L>) -> Self {
        let (x, y) = point.xy().coords();
        let offset = XYZ::linear_form_2(
            x,
            &sketch_plane.x_direction().xyz(),
            y,
            &sketch_plane.y_direction().xyz(),
        );
        Self::from_xyz(sketch_plane.origin_point().coord.added(&offset))
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

    /// Returns the Z coordinate.
    #[inline]
    pub fn z_coordinate(self) -> Quantity<U> {
        Quantity::new(self.coord.z())
    }

    /// Returns the coordinates as a tuple.
    #[inline]
    pub fn coordinates(self) -> (Quantity<U>, Quantity<U>, Quantity<U>) {
        (self.x_coordinate(), self.y_coordinate(), self.z_coordinate())
    }

    /// Point halfway between `p1` and `p2`.
    #[inline]
    pub fn midpoint(p1: Self, p2: Self) -> Self {
        Self::interpolate_from(p1, p2, 0.5)
    }

    /// Exact at `t = 0` and `t = 1`; extrapolates outside `[0, 1]`.
    #[inline]
    pub fn interpolate_from(p1: Self, p2: Self, t: f64) -> Self {
        Self::from_xyz(XYZ::interpolated(&p1.coord, &p2.coord, t))
    }

    /// Average of the points, or None for an empty slice.
    pub fn centroid(points: &[Self]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let offset = rest
            .iter()
            .fold(XYZ::new(), |acc, p| acc.added(&p.coord.subtracted(&first.coord)));
        Some(Self::from_xyz(
            first.coord.added(&offset.divided(points.len() as f64)),
        ))
    }

    /// Point at `distance` along `axis` from its origin.
    pub fn along(axis: &Axis3d<U, C>, distance: Quantity<U>) -> Self {
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

    /// Signed distance of the projection onto `axis` from its origin.
    pub fn signed_distance_along(self, axis: &Axis3d<U, C>) -> Quantity<U> {
        let displacement = self.coord.subtracted(&axis.origin_point().coord);
        Quantity::new(displacement.dot(&axis.direction().xyz()))
    }

    /// Perpendicular (always non-negative) distance from an axis.
    pub fn distance_from_axis(self, axis: &Axis3d<U, C>) -> Quantity<U> {
        let displacement = self.coord.subtracted(&axis.origin_point().coord);
        Quantity::new(displacement.crossed(&axis.direction().xyz()).modulus())
    }

    /// Distance from a plane; positive on the side its normal points to.
    pub fn signed_distance_from(self, plane: &Plane3d<U, C>) -> Quantity<U> {
        let displacement = self.coord.subtracted(&plane.origin_point().coord);
        Quantity::new(displacement.dot(&plane.normal_direction().xyz()))
    }

    /// True if the points are at most `tolerance` apart.
    #[inline]
    pub fn equal_within(self, tolerance: Quantity<U>, other: Self) -> bool {
        self.distance_from(other) <= tolerance
    }

    /// Translates by a vector.
    #[inline]
    pub fn translate_by(self, vector: Vector3d<U, C>) -> Self {
        Self::from_xyz(self.coord.added(&vector.xyz()))
    }

    /// Translates by `distance` in `direction`.
    #[inline]
    pub fn translate_in(self, direction: Direction3d<C>, distance: Quantity<U>) -> Self {
        self.translate_by(Vector3d::with_length(distance, direction))
    }

    /// Scales about `center` by the factor `k`.
    pub fn scale_about(self, center: Self, k: f64) -> Self {
        let displacement = self.coord.subtracted(&center.coord);
        Self::from_xyz(center.coord.added(&displacement.multiplied(k)))
    }

    /// Rotates about `axis` by `angle`.
    pub fn rotate_around(self, axis: &Axis3d<U, C>, angle: Angle) -> Self {
        let origin = axis.origin_point().coord;
        let rotation = Mat::rotation(&axis.direction().xyz(), angle.value());
        let displacement = self.coord.subtracted(&origin);
        Self::from_xyz(origin.added(&rotation.multiply_xyz(&displacement)))
    }

    /// Mirrors across the given plane.
    pub fn mirror_across(self, plane: &Plane3d<U, C>) -> Self {
        let origin = plane.origin_point().coord;
        let mirror = Mat::mirror(&plane.normal_direction().xyz());
        let displacement = self.coord.subtracted(&origin);
        Self::from_xyz(origin.added(&mirror.multiply_xyz(&displacement)))
    }

    /// Foot of the perpendicular from this point to the plane.
    pub fn project_onto(self, plane: &Plane3d<U, C>) -> Self {
        let distance = self.signed_distance_from(plane);
        self.translate_in(plane.normal_direction(), -distance)
    }

    /// Foot of the perpendicular from this point to the axis.
    pub fn project_onto_axis(self, axis: &Axis3d<U, C>) -> Self {
        Self::along(axis, self.signed_distance_along(axis))
    }

    /// Expresses the point in the local coordinates of `frame`.
    pub fn relative_to<L>(self, frame: &Frame3d<U, C, L>) -> Point3d<U, L> {
        let displacement = self.coord.subtracted(&frame.origin_point().coord);
        Point3d::from_xyz(XYZ::from_coords(
            displacement.dot(&frame.x_direction().xyz()),
            displacement.dot(&frame.y_direction().xyz()),
            displacement.dot(&frame.z_direction().xyz()),
        ))
    }

    /// Converts from the local coordinates of `frame` to its parent coordinates.
    pub fn place_in<G>(self, frame: &Frame3d<U, G, C>) -> Point3d<U, G> {
        let (x, y, z) = self.coord.coords();
        let offset = XYZ::linear_form_3(
            x,
            &frame.x_direction().xyz(),
            y,
            &frame.y_direction().xyz(),
            z,
            &frame.z_direction().xyz(),
        );
        Point3d::from_xyz(frame.origin_point().coord.added(&offset))
    }

    /// 2D coordinates of the projection of this point into a sketch plane.
    pub fn project_into<L>(self, sketch_plane: &SketchPlane3d<U, C, L>) -> Point2d<U, L> {
        let displacement = self.coord.subtracted(&sketch_plane.origin_point().coord);
        Point2d::from_xy(XY::from_coords(
            displacement.dot(&sketch_plane.x_direction().xyz()),
            displacement.dot(&sketch_plane.y_direction().xyz()),
        ))
    }

    /// Builds a point from a tuple, converting each field with `to_quantity`.
    pub fn from_tuple(
        to_quantity: impl Fn(f64) -> Quantity<U>,
        (x, y, z): (f64, f64, f64),
    ) -> Self {
        Self::from_coordinates(to_quantity(x), to_quantity(y), to_quantity(z))
    }

    /// Converts to a tuple, reading each coordinate with `from_quantity`.
    pub fn to_tuple(self, from_quantity: impl Fn(Quantity<U>) -> f64) -> (f64, f64, f64) {
        (
            from_quantity(self.x_coordinate()),
            from_quantity(self.y_coordinate()),
            from_quantity(self.z_coordinate()),
        )
    }

    /// Builds a point from a plain record, converting each field with `to_quantity`.
    pub fn from_record(to_quantity: impl Fn(f64) -> Quantity<U>, record: Record3d) -> Self {
        Self::from_coordinates(to_quantity(record.x), to_quantity(record.y), to_quantity(record.z))
    }

    /// Converts to a plain record, reading each coordinate with `from_quantity`.
    pub fn to_record(self, from_quantity: impl Fn(Quantity<U>) -> f64) -> Record3d {
        Record3d {
            x: from_quantity(self.x_coordinate()),
            y: from_quantity(self.y_coordinate()),
            z: from_quantity(self.z_coordinate()),
        }
    }
}

impl<C> Point3d<Meters, C> {
    /// Creates a point from coordinates in meters.
    #[inline]
    pub const fn meters(x: f64, y: f64, z: f64) -> Self {
        Self::from_xyz(XYZ::from_coords(x, y, z))
    }
}

impl<C> Point3d<Pixels, C> {
    /// Creates a point from coordinates in pixels.
    #[inline]
    pub const fn pixels(x: f64, y: f64, z: f64) -> Self {
        Self::from_xyz(XYZ::from_coords(x, y, z))
    }
}

impl<C> Point3d<Unitless, C> {
    /// Creates a point from dimensionless coordinates.
    #[inline]
    pub const fn unitless(x: f64, y: f64, z: f64) -> Self {
        Self::from_xyz(XYZ::from_coords(x, y, z))
    }
}

impl<U, C> Add<Vector3d<U, C>> for Point3d<U, C> {
    type Output = Self;
    fn add(self, vector: Vector3d<U, C>) -> Self {
        self.translate_by(vector)
    }
}

impl<U, C> Sub<Vector3d<U, C>> for Point3d<U, C> {
    type Output = Self;
    fn sub(self, vector: Vector3d<U, C>) -> Self {
        self.translate_by(vector.reverse())
    }
}

impl<U, C> Sub for Point3d<U, C> {
    type Output = Vector3d<U, C>;
    fn sub(self, other: Self) -> Vector3d<U, C> {
        Vector3d::from_points(other, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Length;
    use approx::assert_relative_eq;

    enum Global {}
    enum Local {}
    enum Sketch {}

    type P = Point3d<Meters, Global>;

    #[test]
    fn test_pnt_distance() {
        let p1 = P::meters(1.0, 1.0, 1.0);
        let p2 = P::meters(3.0, 4.0, 7.0);
        assert_relative_eq!(p1.distance_from(p2).in_meters(), 7.0, epsilon = 1e-12);
        assert_eq!(p1.squared_distance_from(p2).value(), 49.0);
    }

    #[test]
    fn test_pnt_rotate_around_offset_axis() {
        let axis = Axis3d::through(P::meters(1.0, 1.0, 0.0), Direction3d::z());
        let p = P::meters(2.0, 1.0, 5.0).rotate_around(&axis, Angle::degrees(90.0));
        assert!(p.equal_within(Length::meters(1e-12), P::meters(1.0, 2.0, 5.0)));
    }

    #[test]
    fn test_pnt_plane_distance_and_projection() {
        let plane = Plane3d::through(P::meters(0.0, 0.0, 2.0), Direction3d::z());
        let p = P::meters(3.0, -1.0, 5.0);
        assert_eq!(p.signed_distance_from(&plane), Length::meters(3.0));
        assert_eq!(p.project_onto(&plane), P::meters(3.0, -1.0, 2.0));
        assert_eq!(p.mirror_across(&plane), P::meters(3.0, -1.0, -1.0));
    }

    #[test]
    fn test_pnt_axis_distances() {
        let axis = Axis3d::through(P::meters(0.0, 1.0, 0.0), Direction3d::x());
        let p = P::meters(4.0, 4.0, 4.0);
        assert_eq!(p.signed_distance_along(&axis), Length::meters(4.0));
        assert_eq!(p.distance_from_axis(&axis), Length::meters(5.0));
        assert_eq!(p.project_onto_axis(&axis), P::meters(4.0, 1.0, 0.0));
    }

    #[test]
    fn test_pnt_frame_round_trip() {
        let frame: Frame3d<Meters, Global, Local> = Frame3d::with_z_direction(
            Direction3d::from_azimuth_and_elevation(Angle::degrees(20.0), Angle::degrees(35.0)),
            P::meters(-2.0, 0.5, 9.0),
        );
        let p = P::meters(1.0, 2.0, 3.0);
        let back = p.relative_to(&frame).place_in(&frame);
        assert!(back.equal_within(Length::meters(1e-12), p));
    }

    #[test]
    fn test_pnt_sketch_plane_round_trip() {
        let sketch: SketchPlane3d<Meters, Global, Sketch> =
            SketchPlane3d::xz().move_to(P::meters(0.0, 7.0, 0.0));
        let p = P::meters(2.0, 3.0, 4.0);
        let p2 = p.project_into(&sketch);
        assert_eq!(p2, Point2d::meters(2.0, 4.0));
        assert_eq!(P::on(&sketch, p2), P::meters(2.0, 7.0, 4.0));
    }

    #[test]
    fn test_pnt_centroid() {
        let points = [P::meters(0.0, 0.0, 0.0), P::meters(4.0, 0.0, 2.0)];
        assert_eq!(P::centroid(&points), Some(P::meters(2.0, 0.0, 1.0)));
    }
}
