//! 3D cubic Bezier spline.

use tracing::trace;

use super::bezier;
use super::{
    bspline, ArcLengthParameterized, CubicSpline2d, Curve, Nondegenerate, Polyline3d, QuadraticSpline3d,
};
use crate::gp::{Axis3d, Direction3d, Frame3d, Plane3d, Point3d, SketchPlane3d, Vector3d, XYZ};
use crate::precision;
use crate::units::{Angle, Quantity};
use crate::Result;

/// A cubic Bezier curve in 3D.
pub struct CubicSpline3d<U, C> {
    control_points: [Point3d<U, C>; 4],
}

impl_value_traits!(CubicSpline3d<U, C> { control_points });

impl<U, C> CubicSpline3d<U, C> {
    /// Creates a spline from its control points, in order.
    #[inline]
    pub fn from_control_points(
        p1: Point3d<U, C>,
        p2: Point3d<U, C>,
        p3: Point3d<U, C>,
        p4: Point3d<U, C>,
    ) -> Self {
        Self { control_points: [p1, p2, p3, p4] }
    }

    /// Hermite form: the spline with the given end points and end derivatives.
    pub fn from_endpoints(
        start_point: Point3d<U, C>,
        start_derivative: Vector3d<U, C>,
        end_point: Point3d<U, C>,
        end_derivative: Vector3d<U, C>,
    ) -> Self {
        Self::from_control_points(
            start_point,
            start_point + start_derivative / 3.0,
            end_point - end_derivative / 3.0,
            end_point,
        )
    }

    /// Exact degree elevation of a quadratic spline.
    pub fn from_quadratic(quadratic: &QuadraticSpline3d<U, C>) -> Self {
        let [q1, q2, q3] = quadratic.control_points();
        Self::from_control_points(
            q1,
            Point3d::interpolate_from(q1, q2, 2.0 / 3.0),
            Point3d::interpolate_from(q3, q2, 2.0 / 3.0),
            q3,
        )
    }

    /// Lifts a 2D spline onto a sketch plane.
    pub fn on<L>(sketch_plane: &SketchPlane3d<U, C, L>, spline: &CubicSpline2d<U, L>) -> Self {
        Self { control_points: spline.control_points().map(|p| Point3d::on(sketch_plane, p)) }
    }

    fn from_coords(coords: [XYZ; 4]) -> Self {
        Self { control_points: coords.map(Point3d::from_xyz) }
    }

    fn coords(&self) -> [XYZ; 4] {
        self.control_points.map(|p| p.xyz())
    }

    fn map_points<C2>(&self, f: impl Fn(Point3d<U, C>) -> Point3d<U, C2>) -> CubicSpline3d<U, C2> {
        CubicSpline3d { control_points: self.control_points.map(f) }
    }

    /// Splits a cubic B-spline into one Bezier segment per non-empty knot
    /// span. `knots` must hold `points.len() + 2` non-decreasing values.
    pub fn b_spline_segments(knots: &[f64], points: &[Point3d<U, C>]) -> Result<Vec<Self>> {
        let coords: Vec<XYZ> = points.iter().map(|p| p.xyz()).collect();
        let segments = bspline::cubic_segments(knots, &coords)?;
        Ok(segments.into_iter().map(Self::from_coords).collect())
    }

    /// Returns all control points.
    #[inline]
    pub fn control_points(&self) -> [Point3d<U, C>; 4] {
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

    /// Returns the fourth control point.
    #[inline]
    pub fn fourth_control_point(&self) -> Point3d<U, C> {
        self.control_points[3]
    }

    /// Point at `t = 0`, the first control point.
    #[inline]
    pub fn start_point(&self) -> Point3d<U, C> {
        self.control_points[0]
    }

    /// Point at `t = 1`, the last control point.
    #[inline]
    pub fn end_point(&self) -> Point3d<U, C> {
        self.control_points[3]
    }

    /// First derivative at `t = 0`.
    pub fn start_derivative(&self) -> Vector3d<U, C> {
        Vector3d::from_points(self.control_points[0], self.control_points[1]) * 3.0
    }

    /// First derivative at `t = 1`.
    pub fn end_derivative(&self) -> Vector3d<U, C> {
        Vector3d::from_points(self.control_points[2], self.control_points[3]) * 3.0
    }

    /// Evaluates the spline at parameter `t`; exact at both ends.
    pub fn point_on(self, t: f64) -> Point3d<U, C> {
        Point3d::from_xyz(bezier::cubic_point(&self.coords(), t))
    }

    /// First derivative with respect to `t`.
    pub fn first_derivative(self, t: f64) -> Vector3d<U, C> {
        Vector3d::from_xyz(bezier::cubic_first_derivative(&self.coords(), t))
    }

    /// Second derivative with respect to `t`.
    pub fn second_derivative(self, t: f64) -> Vector3d<U, C> {
        Vector3d::from_xyz(bezier::cubic_second_derivative(&self.coords(), t))
    }

    /// Third derivative, constant along the curve.
    pub fn third_derivative(self) -> Vector3d<U, C> {
        Vector3d::from_xyz(bezier::cubic_third_derivative(&self.coords()))
    }

    /// Splits into `n` pieces of equal parameter width.
    pub fn segments(self, n: usize) -> Vec<Self> {
        let coords = self.coords();
        bezier::segment_bounds(n)
            .map(|(t0, t1)| Self::from_coords(bezier::cubic_subsegment(&coords, t0, t1)))
            .collect()
    }

    /// Splits at parameter `t` into two splines covering `[0, t]` and `[t, 1]`.
    pub fn split_at(self, t: f64) -> (Self, Self) {
        let coords = self.coords();
        (
            Self::from_coords(bezier::cubic_subsegment(&coords, 0.0, t)),
            Self::from_coords(bezier::cubic_subsegment(&coords, t, 1.0)),
        )
    }

    /// Splits at `t = 0.5`.
    #[inline]
    pub fn bisect(self) -> (Self, Self) {
        self.split_at(0.5)
    }

    /// Same curve traversed from end to start.
    pub fn reverse(self) -> Self {
        let [p1, p2, p3, p4] = self.control_points;
        Self::from_control_points(p4, p3, p2, p1)
    }

    /// Number of polyline segments `approximate` uses for `max_error`.
    pub fn num_approximation_segments(self, max_error: Quantity<U>) -> usize {
        precision::num_approximation_segments(
            max_error.value(),
            bezier::cubic_max_second_derivative_magnitude(&self.coords()),
        )
    }

    /// Polyline whose segments stay within `max_error` of the curve.
    pub fn approximate(self, max_error: Quantity<U>) -> Polyline3d<U, C> {
        let n = self.num_approximation_segments(max_error);
        trace!(segments = n, "approximating cubic spline");
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

    /// Projects every control point onto `plane`.
    pub fn project_onto(self, plane: &Plane3d<U, C>) -> Self {
        self.map_points(|p| p.project_onto(plane))
    }

    /// Projects into a sketch plane, giving a 2D spline.
    pub fn project_into<L>(self, sketch_plane: &SketchPlane3d<U, C, L>) -> CubicSpline2d<U, L> {
        let [p1, p2, p3, p4] = self.control_points.map(|p| p.project_into(sketch_plane));
        CubicSpline2d::from_control_points(p1, p2, p3, p4)
    }

    /// Expresses the spline in the local coordinates of `frame`.
    pub fn relative_to<L>(self, frame: &Frame3d<U, C, L>) -> CubicSpline3d<U, L> {
        self.map_points(|p| p.relative_to(frame))
    }

    /// Converts from the local coordinates of `frame` to its parent coordinates.
    pub fn place_in<G>(self, frame: &Frame3d<U, G, C>) -> CubicSpline3d<U, G> {
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

impl<U, C> Curve for CubicSpline3d<U, C> {
    type Units = U;
    type Point = Point3d<U, C>;
    type Direction = Direction3d<C>;

    fn point_on(&self, t: f64) -> Point3d<U, C> {
        CubicSpline3d::point_on(*self, t)
    }

    fn derivative_magnitude(&self, t: f64) -> Quantity<U> {
        self.first_derivative(t).length()
    }

    fn max_second_derivative_magnitude(&self) -> Quantity<U> {
        Quantity::new(bezier::cubic_max_second_derivative_magnitude(&self.coords()))
    }

    fn tangent_direction_at(&self, t: f64) -> Option<Direction3d<C>> {
        self.first_derivative(t)
            .direction()
            .or_else(|| {
                let second = self.second_derivative(t).direction()?;
                Some(if t < 0.5 { second } else { second.reverse() })
            })
            .or_else(|| self.third_derivative().direction())
    }
}
