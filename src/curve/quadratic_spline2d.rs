//! 2D quadratic Bezier spline.

use tracing::trace;

use super::bezier;
use super::{bspline, ArcLengthParameterized, Curve, Nondegenerate, Polyline2d};
use crate::gp::{Axis2d, Direction2d, Frame2d, Point2d, Vector2d, XY};
use crate::precision;
use crate::units::{Angle, Quantity};
use crate::Result;

/// A quadratic Bezier curve defined by three control points.
pub struct QuadraticSpline2d<U, C> {
    control_points: [Point2d<U, C>; 3],
}

impl_value_traits!(QuadraticSpline2d<U, C> { control_points });

impl<U, C> QuadraticSpline2d<U, C> {
    /// Creates a spline from its control points, in order.
    #[inline]
    pub fn from_control_points(p1: Point2d<U, C>, p2: Point2d<U, C>, p3: Point2d<U, C>) -> Self {
        Self { control_points: [p1, p2, p3] }
    }

    fn from_coords(coords: [XY; 3]) -> Self {
        Self { control_points: coords.map(Point2d::from_xy) }
    }

    fn coords(&self) -> [XY; 3] {
        self.control_points.map(|p| p.xy())
    }

    fn map_points<U2, C2>(&self, f: impl Fn(Point2d<U, C>) -> Point2d<U2, C2>) -> QuadraticSpline2d<U2, C2> {
        QuadraticSpline2d { control_points: self.control_points.map(f) }
    }

    /// Splits a quadratic B-spline into one Bezier segment per non-empty
    /// knot span. `knots` must hold `points.len() + 1` non-decreasing values.
    pub fn b_spline_segments(knots: &[f64], points: &[Point2d<U, C>]) -> Result<Vec<Self>> {
        let coords: Vec<XY> = points.iter().map(|p| p.xy()).collect();
        let segments = bspline::quadratic_segments(knots, &coords)?;
        Ok(segments.into_iter().map(Self::from_coords).collect())
    }

    /// Returns all control points.
    #[inline]
    pub fn control_points(&self) -> [Point2d<U, C>; 3] {
        self.control_points
    }

    /// Returns the first control point.
    #[inline]
    pub fn first_control_point(&self) -> Point2d<U, C> {
        self.control_points[0]
    }

    /// Returns the second control point.
    #[inline]
    pub fn second_control_point(&self) -> Point2d<U, C> {
        self.control_points[1]
    }

    /// Returns the third control point.
    #[inline]
    pub fn third_control_point(&self) -> Point2d<U, C> {
        self.control_points[2]
    }

    /// Point at `t = 0`, the first control point.
    #[inline]
    pub fn start_point(&self) -> Point2d<U, C> {
        self.control_points[0]
    }

    /// Point at `t = 1`, the last control point.
    #[inline]
    pub fn end_point(&self) -> Point2d<U, C> {
        self.control_points[2]
    }

    /// First derivative at `t = 0`.
    pub fn start_derivative(&self) -> Vector2d<U, C> {
        Vector2d::from_points(self.control_points[0], self.control_points[1]).twice()
    }

    /// First derivative at `t = 1`.
    pub fn end_derivative(&self) -> Vector2d<U, C> {
        Vector2d::from_points(self.control_points[1], self.control_points[2]).twice()
    }

    /// Evaluates the spline at parameter `t`; exact at both ends.
    pub fn point_on(self, t: f64) -> Point2d<U, C> {
        Point2d::from_xy(bezier::quadratic_point(&self.coords(), t))
    }

    /// First derivative with respect to `t`.
    pub fn first_derivative(self, t: f64) -> Vector2d<U, C> {
        Vector2d::from_xy(bezier::quadratic_first_derivative(&self.coords(), t))
    }

    /// The second derivative is constant along a quadratic.
    pub fn second_derivative(self) -> Vector2d<U, C> {
        Vector2d::from_xy(bezier::quadratic_second_derivative(&self.coords()))
    }

    /// Splits the curve into `n` pieces of equal parameter width (at least one).
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
    pub fn approximate(self, max_error: Quantity<U>) -> Polyline2d<U, C> {
        let n = self.num_approximation_segments(max_error);
        trace!(segments = n, "approximating quadratic spline");
        Polyline2d::from_vertices((0..=n).map(|i| self.point_on(i as f64 / n as f64)).collect())
    }

    /// Scales about `center` by the factor `k`.
    pub fn scale_about(self, center: Point2d<U, C>, k: f64) -> Self {
        self.map_points(|p| p.scale_about(center, k))
    }

    /// Rotates about `center` by `angle`.
    pub fn rotate_around(self, center: Point2d<U, C>, angle: Angle) -> Self {
        self.map_points(|p| p.rotate_around(center, angle))
    }

    /// Translates by a vector.
    pub fn translate_by(self, vector: Vector2d<U, C>) -> Self {
        self.map_points(|p| p.translate_by(vector))
    }

    /// Translates by `distance` in `direction`.
    pub fn translate_in(self, direction: Direction2d<C>, distance: Quantity<U>) -> Self {
        self.map_points(|p| p.translate_in(direction, distance))
    }

    /// Mirrors across the given axis.
    pub fn mirror_across(self, axis: &Axis2d<U, C>) -> Self {
        self.map_points(|p| p.mirror_across(axis))
    }

    /// Expresses the spline in the local coordinates of `frame`.
    pub fn relative_to<L>(self, frame: &Frame2d<U, C, L>) -> QuadraticSpline2d<U, L> {
        self.map_points(|p| p.relative_to(frame))
    }

    /// Converts from the local coordinates of `frame` to its parent coordinates.
    pub fn place_in<G>(self, frame: &Frame2d<U, G, C>) -> QuadraticSpline2d<U, G> {
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

impl<U, C> Curve for QuadraticSpline2d<U, C> {
    type Units = U;
    type Point = Point2d<U, C>;
    type Direction = Direction2d<C>;

    fn point_on(&self, t: f64) -> Point2d<U, C> {
        QuadraticSpline2d::point_on(*self, t)
    }

    fn derivative_magnitude(&self, t: f64) -> Quantity<U> {
        self.first_derivative(t).length()
    }

    fn max_second_derivative_magnitude(&self) -> Quantity<U> {
        self.second_derivative().length()
    }

    fn tangent_direction_at(&self, t: f64) -> Option<Direction2d<C>> {
        // Where the first derivative vanishes the curve leaves its start
        // along the second derivative and arrives at its end against it.
        self.first_derivative(t).direction().or_else(|| {
            let second = self.second_derivative().direction()?;
            Some(if t < 0.5 { second } else { second.reverse() })
        })
    }
}
