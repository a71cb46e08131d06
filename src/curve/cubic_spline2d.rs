//! 2D cubic Bezier spline.

use tracing::trace;

use super::bezier;
use super::{bspline, ArcLengthParameterized, Curve, Nondegenerate, Polyline2d, QuadraticSpline2d};
use crate::gp::{Axis2d, Direction2d, Frame2d, Point2d, Vector2d, XY};
use crate::precision;
use crate::units::{Angle, Quantity};
use crate::Result;

/// A cubic Bezier curve defined by four control points.
pub struct CubicSpline2d<U, C> {
    control_points: [Point2d<U, C>; 4],
}

impl_value_traits!(CubicSpline2d<U, C> { control_points });

impl<U, C> CubicSpline2d<U, C> {
    /// Creates a spline from its control points, in order.
    #[inline]
    pub fn from_control_points(
        p1: Point2d<U, C>,
        p2: Point2d<U, C>,
        p3: Point2d<U, C>,
        p4: Point2d<U, C>,
    ) -> Self {
        Self { control_points: [p1, p2, p3, p4] }
    }

    /// Hermite form: endpoints together with the derivatives there.
    pub fn from_endpoints(
        start_point: Point2d<U, C>,
        start_derivative: Vector2d<U, C>,
        end_point: Point2d<U, C>,
        end_derivative: Vector2d<U, C>,
    ) -> Self {
        Self::from_control_points(
            start_point,
            start_point + start_derivative / 3.0,
            end_point - end_derivative / 3.0,
            end_point,
        )
    }

    /// Exact degree elevation of a quadratic spline.
    pub fn from_quadratic(quadratic: &QuadraticSpline2d<U, C>) -> Self {
        let [q1, q2, q3] = quadratic.control_points();
        Self::from_control_points(
            q1,
            Point2d::interpolate_from(q1, q2, 2.0 / 3.0),
            Point2d::interpolate_from(q3, q2, 2.0 / 3.0),
            q3,
        )
    }

    fn from_coords(coords: [XY; 4]) -> Self {
        Self { control_points: coords.map(Point2d::from_xy) }
    }

    fn coords(&self) -> [XY; 4] {
        self.control_points.map(|p| p.xy())
    }

    fn map_points<U2, C2>(&self, f: impl Fn(Point2d<U, C>) -> Point2d<U2, C2>) -> CubicSpline2d<U2, C2> {
        CubicSpline2d { control_points: self.control_points.map(f) }
    }

    /// Splits a cubic B-spline into one Bezier segment per non-empty knot
    /// span. `knots` must hold `points.len() + 2` non-decreasing values.
    pub fn b_spline_segments(knots: &[f64], points: &[Point2d<U, C>]) -> Result<Vec<Self>> {
        let coords: Vec<XY> = points.iter().map(|p| p.xy()).collect();
        let segments = bspline::cubic_segments(knots, &coords)?;
        Ok(segments.into_iter().map(Self::from_coords).collect())
    }

    /// Returns all control points.
    #[inline]
    pub fn control_points(&self) -> [Point2d<U, C>; 4] {
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

    /// Returns the fourth control point.
    #[inline]
    pub fn fourth_control_point(&self) -> Point2d<U, C> {
        self.control_points[3]
    }

    /// Point at `t = 0`, the first control point.
    #[inline]
    pub fn start_point(&self) -> Point2d<U, C> {
        self.control_points[0]
    }

    /// Point at `t = 1`, the last control point.
    #[inline]
    pub fn end_point(&self) -> Point2d<U, C> {
        self.control_points[3]
    }

    /// First derivative at `t = 0`.
    pub fn start_derivative(&self) -> Vector2d<U, C> {
        Vector2d::from_points(self.control_points[0], self.control_points[1]) * 3.0
    }

    /// First derivative at `t = 1`.
    pub fn end_derivative(&self) -> Vector2d<U, C> {
        Vector2d::from_points(self.control_points[2], self.control_points[3]) * 3.0
    }

    /// Evaluates the spline at parameter `t`; exact at both ends.
    pub fn point_on(self, t: f64) -> Point2d<U, C> {
        Point2d::from_xy(bezier::cubic_point(&self.coords(), t))
    }

    /// First derivative with respect to `t`.
    pub fn first_derivative(self, t: f64) -> Vector2d<U, C> {
        Vector2d::from_xy(bezier::cubic_first_derivative(&self.coords(), t))
    }

    /// Second derivative with respect to `t`.
    pub fn second_derivative(self, t: f64) -> Vector2d<U, C> {
        Vector2d::from_xy(bezier::cubic_second_derivative(&self.coords(), t))
    }

    /// Third derivative, constant along the curve.
    pub fn third_derivative(self) -> Vector2d<U, C> {
        Vector2d::from_xy(bezier::cubic_third_derivative(&self.coords()))
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
    pub fn approximate(self, max_error: Quantity<U>) -> Polyline2d<U, C> {
        let n = self.num_approximation_segments(max_error);
        trace!(segments = n, "approximating cubic spline");
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
    pub fn relative_to<L>(self, frame: &Frame2d<U, C, L>) -> CubicSpline2d<U, L> {
        self.map_points(|p| p.relative_to(frame))
    }

    /// Converts from the local coordinates of `frame` to its parent coordinates.
    pub fn place_in<G>(self, frame: &Frame2d<U, G, C>) -> CubicSpline2d<U, G> {
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

impl<U, C> Curve for CubicSpline2d<U, C> {
    type Units = U;
    type Point = Point2d<U, C>;
    type Direction = Direction2d<C>;

    fn point_on(&self, t: f64) -> Point2d<U, C> {
        CubicSpline2d::point_on(*self, t)
    }

    fn derivative_magnitude(&self, t: f64) -> Quantity<U> {
        self.first_derivative(t).length()
    }

    fn max_second_derivative_magnitude(&self) -> Quantity<U> {
        Quantity::new(bezier::cubic_max_second_derivative_magnitude(&self.coords()))
    }

    fn tangent_direction_at(&self, t: f64) -> Option<Direction2d<C>> {
        self.first_derivative(t)
            .direction()
            .or_else(|| {
                let second = self.second_derivative(t).direction()?;
                Some(if t < 0.5 { second } else { second.reverse() })
            })
            .or_else(|| self.third_derivative().direction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Length, Meters};
    use crate::GeomError;

    enum World {}

    type Spline = CubicSpline2d<Meters, World>;

    fn s_curve() -> Spline {
        CubicSpline2d::from_control_points(
            Point2d::meters(0.0, 0.0),
            Point2d::meters(1.0, 2.0),
            Point2d::meters(3.0, -2.0),
            Point2d::meters(4.0, 0.0),
        )
    }

    #[test]
    fn test_evaluation() {
        let spline = s_curve();
        assert_eq!(spline.point_on(0.0), spline.start_point());
        assert_eq!(spline.point_on(1.0), spline.end_point());
        assert_eq!(spline.point_on(0.5), Point2d::meters(2.0, 0.0));
        assert_eq!(spline.first_derivative(0.0), spline.start_derivative());
        assert_eq!(spline.first_derivative(1.0), spline.end_derivative());
        assert_eq!(spline.third_derivative(), Vector2d::meters(-12.0, 72.0));
    }

    #[test]
    fn test_from_endpoints() {
        let spline = s_curve();
        let rebuilt = CubicSpline2d::from_endpoints(
            spline.start_point(),
            spline.start_derivative(),
            spline.end_point(),
            spline.end_derivative(),
        );
        let tolerance = Length::meters(1e-12);
        for (a, b) in rebuilt.control_points().into_iter().zip(spline.control_points()) {
            assert!(a.equal_within(tolerance, b));
        }
    }

    #[test]
    fn test_degree_elevation_preserves_curve() {
        let quadratic = QuadraticSpline2d::from_control_points(
            Point2d::meters(0.0, 0.0),
            Point2d::meters(3.0, 3.0),
            Point2d::meters(6.0, 0.0),
        );
        let cubic: Spline = CubicSpline2d::from_quadratic(&quadratic);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert!(cubic.point_on(t).equal_within(Length::meters(1e-12), quadratic.point_on(t)));
        }
    }

    #[test]
    fn test_segments_cover_curve() {
        let spline = s_curve();
        let pieces = spline.segments(3);
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces[0].start_point(), spline.start_point());
        assert_eq!(pieces[2].end_point(), spline.end_point());
        let expected = spline.point_on(0.5);
        assert!(pieces[1].point_on(0.5).equal_within(Length::meters(1e-12), expected));
    }

    #[test]
    fn test_approximate_within_tolerance() {
        let spline = s_curve();
        let tolerance = Length::meters(1e-2);
        let polyline = spline.approximate(tolerance);
        let segments = polyline.segments();
        let n = segments.len();
        for (i, (a, b)) in segments.into_iter().enumerate() {
            let curve_mid = spline.point_on((i as f64 + 0.5) / n as f64);
            assert!(Point2d::midpoint(a, b).distance_from(curve_mid) <= tolerance);
        }
    }

    #[test]
    fn test_cusp_tangents() {
        let a = Point2d::meters(0.0, 0.0);
        let b = Point2d::meters(0.0, 5.0);
        let spline: Spline = CubicSpline2d::from_control_points(a, a, a, b);
        let curve = spline.nondegenerate().unwrap();
        assert_eq!(curve.tangent_direction(0.0), Direction2d::y());
        assert_eq!(curve.tangent_direction(1.0), Direction2d::y());

        let spline: Spline = CubicSpline2d::from_control_points(a, b, b, b);
        let curve = spline.nondegenerate().unwrap();
        assert_eq!(curve.tangent_direction(1.0), Direction2d::y());
    }

    #[test]
    fn test_degenerate() {
        let p = Point2d::meters(1.0, 1.0);
        let spline: Spline = CubicSpline2d::from_control_points(p, p, p, p);
        assert_eq!(spline.nondegenerate().err(), Some(GeomError::DegenerateCurve));
        assert_eq!(
            spline.arc_length_parameterized(Length::meters(1e-3)).err().map(|e| e.to_string()),
            Some("Degenerate curve: all control points coincide".to_string())
        );
    }
}
