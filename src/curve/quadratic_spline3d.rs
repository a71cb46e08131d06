//! 3D quadratic Bezier spline.

use tracing::trace;

use super::bezier;
use super::{bspline, ArcLengthParameterized, Curve, Nondegenerate, Polyline3d, QuadraticSpline2d};
use crate::gp::{Axis3d, Direction3d, Frame3d, Plane3d, Point3d, SketchPlane3d, Vector3d, XYZ};
use crate::precision;
use crate::units::{Angle, Quantity};
use crate::Result;

/// A quadratic Bezier curve in 3D.
pub struct QuadraticSpline3d<U, C> {
    control_points: [Point3d<U, C>; 3],
}

impl_value_traits!(QuadraticSpline3d<U, C> { control_points });

impl<U, C> QuadraticSpline3d<U, C> {
    /// Creates a spline from its control points, in order.
    #[inline]
    pub fn from_control_points(p1: Point3d<U, C>, p2: Point3d<U, C>, p3: Point3d<U, C>) -> Self {
        Self { control_points: [p1, p2, p3] }
    }

    /// Lifts a 2D spline onto a sketch plane.
    pub fn on<L>(sketch_plane: &SketchPlane3d<U, C, L>, spline: &QuadraticSpline2d<U, L>) -> Self {
        Self { control_points: spline.control_points().map(|p| Point3d::on(sketch_plane, p)) }
    }

    fn from_coords(coords: [XYZ; 3]) -> Self {
        Self { control_points: coords.map(Point3d::from_xyz) }
    }

    fn coords(&self) -> [XYZ; 3] {
        self.control_points.map(|p| p.xyz())
    }

    fn map_points<C2>(&self, f: impl Fn(Point3d<U, C>) -> Point3d<U, C2>) -> QuadraticSpline3d<U, C2> {
        QuadraticSpline3d { control_points: self.control_points.map(f) }
    }

    /// Bezier segments of a quadratic B-spline; takes `points.len() + 1` knots.
    pub fn b_spline_segments(knots: &[f64], points: &[Point3d<U, C>]) -> Result<Vec<Self>> {
        let coords: Vec<XYZ> = points.iter().map(|p| p.xyz()).collect();
        let segments = bspline::quadratic_segments(knots, &coords)?;
        Ok(segments.into_iter().map(Self::from_coords).collect())
    }

    /// Returns all control points.
    #[inline]
    pub fn control_points(&self) -> [Point3d<U, C>; 3] {
        self.control_points
    }

    /// Returns the first control point.
    #[inline]
    pub fn first_control_point(&self) -> Point3d<U, C> {
        self.control_points[0]
    }

    /// Returns the second control point.
    #[inline]
    pub fn second_control_point(&self) -> Point3d<U, C> {
        self.control_points[1]
    }

    /// Returns the third control point.
    #[inline]
    pub fn third_control_point(&self) -> Point3d<U, C> {
        self.control_points[2]
    }

    /// Point at `t = 0`, the first control point.
    #[inline]
    pub fn start_point(&self) -> Point3d<U, C> {
        self.control_points[0]
    }

    /// Point at `t = 1`, the last control point.
    #[inline]
    pub fn end_point(&self) -> Point3d<U, C> {
        self.control_points[2]
    }

    /// First derivative at `t = 0`.
    pub fn start_derivative(&self) -> Vector3d<U, C> {
        Vector3d::from_points(self.control_points[0], self.control_points[1]).twice()
    }

    /// First derivative at `t = 1`.
    pub fn end_derivative(&self) -> Vector3d<U, C> {
        Vector3d::from_points(self.control_points[1], self.control_points[2]).twice()
    }

    /// Evaluates the spline at parameter `t`; exact at both ends.
    pub fn point_on(self, t: f64) -> Point3d<U, C> {
        Point3d::from_xyz(bezier::quadratic_point(&self.coords(), t))
    }

    /// First derivative with respect to `t`.
    pub fn first_derivative(self, t: f64) -> Vector3d<U, C> {
        Vector3d::from_xyz(bezier::quadratic_first_derivative(&self.coords(), t))
    }

    /// Second derivative, constant along the curve.
    pub fn second_derivative(self) -> Vector3d<U, C> {
        Vector3d::from_xyz(bezier::quadratic_second_derivative(&self.coords()))
    }

    /// Splits into `n` pieces of equal parameter width.
    pub fn segments(self, n: usize) -> Vec<Self> {
        let coords = self.coords();
        bezier::segment_bounds(n)
            .map(|(t0, t1)| Self::from_coords(bezier::quadratic_subsegment(&coords, t0, t1)))
            .collect()
    }

    /// Splits at parameter `t` into two splines covering `[0, t]` and `[t, 1]`.
    pub fn split_at(self, t: f64) -> (Self, Self) {
        let coords = self.coords();
        (
            Self::from_coords(bezier::quadratic_subsegment(&coords, 0.0, t)),
            Self::from_coords(bezier::quadratic_subsegment(&coords, t, 1.0)),
        )
    }

    /// Splits at `t = 0.5`.
    #[inline]
    pub fn bisect(self) -> (Self, Self) {
        self.split_at(0.5)
    }

    /// Same curve traversed from end to start.
    pub fn reverse(self) -> Self {
        let [p1, p2, p3] = self.control_points;
        Self::from_control_points(p3, p2, p1)
    }

    /// Number of polyline segments `approximate` uses for `max_error`.
    pub fn num_approximation_segments(self, max_error: Quantity<U>) -> usize {
        precision::num_approximation_segments(
            max_error.value(),
            bezier::quadratic_second_derivative(&self.coords()).modulus(),
        )
    }

    /// Polyline whose segments stay within `max_error` of the curve.
    pub fn approximate(self, max_error: Quantity<U>) -> Polyline3d<U, C> {
        let n = self.num_approximation_segments(max_error);
        trace!(segments = n, "approximating quadratic spline");
        Polyline3d::from_vertices((0..=n).map(|i| self.point_on(i as f64 / n as f64)).collect())
    }

    /// Scales about `center` by the factor `k`.
    pub fn scale_about(self, center: Point3d<U, C>, k: f64) -> Self {
        self.map_points(|p| p.scale_about(center, k))
    }

    /// Rotates about `axis` by `angle`.
    pub fn rotate_around(self, axis: &Axis3d<U, C>, angle: Angle) -> Self {
        self.map_points(|p| p.rotate_around(axis, angle))
    }

    /// Translates by a vector.
    pub fn translate_by(self, vector: Vector3d<U, C>) -> Self {
        self.map_points(|p| p.translate_by(vector))
    }

    /// Translates by `distance` in `direction`.
    pub fn translate_in(self, direction: Direction3d<C>, distance: Quantity<U>) -> Self {
        self.map_points(|p| p.translate_in(direction, distance))
    }

    /// Mirrors across the given plane.
    pub fn mirror_across(self, plane: &Plane3d<U, C>) -> Self {
        self.map_points(|p| p.mirror_across(plane))
    }

    /// Orthographic projection onto a plane.
    pub fn project_onto(self, plane: &Plane3d<U, C>) -> Self {
        self.map_points(|p| p.project_onto(plane))
    }

    /// Orthographic projection into the 2D coordinates of a sketch plane.
    pub fn project_into<L>(self, sketch_plane: &SketchPlane3d<U, C, L>) -> QuadraticSpline2d<U, L> {
        let [p1, p2, p3] = self.control_points.map(|p| p.project_into(sketch_plane));
        QuadraticSpline2d::from_control_points(p1, p2, p3)
    }

    /// Expresses the spline in the local coordinates of `frame`.
    pub fn relative_to<L>(self, frame: &Frame3d<U, C, L>) -> QuadraticSpline3d<U, L> {
        self.map_points(|p| p.relative_to(frame))
    }

    /// Converts from the local coordinates of `frame` to its parent coordinates.
    pub fn place_in<G>(self, frame: &Frame3d<U, G, C>) -> QuadraticSpline3d<U, G> {
        self.map_points(|p| p.place_in(frame))
    }

    /// Fails with `DegenerateCurve` if all control points coincide.
    pub fn nondegenerate(self) -> Result<Nondegenerate<Self>> {
        Nondegenerate::from_curve(self)
    }

    /// Shorthand for `nondegenerate` then `arc_length_parameterized`.
    pub fn arc_length_parameterized(self, max_error: Quantity<U>) -> Result<ArcLengthParameterized<Self>> {
        Ok(self.nondegenerate()?.arc_length_parameterized(max_error))
    }
}

impl<U, C> Curve for QuadraticSpline3d<U, C> {
    type Units = U;
    type Point = Point3d<U, C>;
    type Direction = Direction3d<C>;

    fn point_on(&self, t: f64) -> Point3d<U, C> {
        QuadraticSpline3d::point_on(*self, t)
    }

    fn derivative_magnitude(&self, t: f64) -> Quantity<U> {
        self.first_derivative(t).length()
    }

    fn max_second_derivative_magnitude(&self) -> Quantity<U> {
        self.second_derivative().length()
    }

    fn tangent_direction_at(&self, t: f64) -> Option<Direction3d<C>> {
        self.first_derivative(t).direction().or_else(|| {
            let second = self.second_derivative().direction()?;
            Some(if t < 0.5 { second } else { second.reverse() })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gp::Point2d;
    use crate::units::{Length, Meters};
    use approx::assert_relative_eq;

    enum World {}
    enum Sketch {}

    type Spline = QuadraticSpline3d<Meters, World>;

    fn arch() -> Spline {
        QuadraticSpline3d::from_control_points(
            Point3d::meters(0.0, 0.0, 0.0),
            Point3d::meters(1.0, 2.0, 1.0),
            Point3d::meters(2.0, 0.0, 2.0),
        )
    }

    #[test]
    fn test_evaluation() {
        let spline = arch();
        assert_eq!(spline.point_on(0.0), spline.start_point());
        assert_eq!(spline.point_on(1.0), spline.end_point());
        assert_eq!(spline.point_on(0.5), Point3d::meters(1.0, 1.0, 1.0));
        assert_eq!(spline.second_derivative(), Vector3d::meters(0.0, -8.0, 0.0));
    }

    #[test]
    fn test_sketch_plane_round_trip() {
        let sketch: SketchPlane3d<Meters, World, Sketch> =
            SketchPlane3d::through(Point3d::meters(1.0, 1.0, 1.0), Direction3d::z());
        let flat = QuadraticSpline2d::from_control_points(
            Point2d::meters(0.0, 0.0),
            Point2d::meters(1.0, 1.0),
            Point2d::meters(2.0, 0.0),
        );
        let lifted = QuadraticSpline3d::on(&sketch, &flat);
        for p in lifted.control_points() {
            assert_relative_eq!(p.z_coordinate().value(), 1.0, epsilon = 1e-12);
        }
        let back = lifted.project_into(&sketch);
        for (a, b) in back.control_points().into_iter().zip(flat.control_points()) {
            assert!(a.equal_within(Length::meters(1e-12), b));
        }
    }

    #[test]
    fn test_project_onto_plane() {
        let flattened = arch().project_onto(&Plane3d::xy());
        for p in flattened.control_points() {
            assert_eq!(p.z_coordinate(), Length::zero());
        }
    }

    #[test]
    fn test_arc_length_of_straight_spline() {
        let spline: Spline = QuadraticSpline3d::from_control_points(
            Point3d::meters(0.0, 0.0, 0.0),
            Point3d::meters(1.0, 2.0, 2.0),
            Point3d::meters(2.0, 4.0, 4.0),
        );
        let parameterized = spline.arc_length_parameterized(Length::meters(1e-4)).unwrap();
        assert_relative_eq!(parameterized.arc_length().value(), 6.0, epsilon = 1e-12);
        let midpoint = parameterized.midpoint();
        assert!(midpoint.equal_within(Length::meters(1e-12), Point3d::meters(1.0, 2.0, 2.0)));
    }
}
