use approx::assert_relative_eq;
use cascade_geom::units::Meters;
use cascade_geom::{CubicSpline2d, CubicSpline3d, GeomError, Length, Point2d, Point3d, QuadraticSpline2d};

enum World {}

fn wave() -> CubicSpline2d<Meters, World> {
    CubicSpline2d::from_control_points(
        Point2d::meters(1.0, 1.0),
        Point2d::meters(3.0, 4.0),
        Point2d::meters(5.0, 1.0),
        Point2d::meters(7.0, 4.0),
    )
}

#[test]
fn test_point_along_hits_endpoints_exactly() {
    let spline = wave();
    let parameterized = spline
        .nondegenerate()
        .expect("control points are distinct")
        .arc_length_parameterized(Length::meters(1e-3));
    let length = parameterized.arc_length();
    assert_eq!(parameterized.point_along(Length::zero()), spline.start_point());
    assert_eq!(parameterized.point_along(length), spline.end_point());
    // Distances outside the curve are clamped to its ends.
    assert_eq!(parameterized.point_along(Length::meters(-1.0)), spline.start_point());
    assert_eq!(parameterized.point_along(length * 2.0), spline.end_point());
}

#[test]
fn test_arc_length_of_straight_cubic() {
    let spline: CubicSpline3d<Meters, World> = CubicSpline3d::from_control_points(
        Point3d::meters(0.0, 0.0, 0.0),
        Point3d::meters(1.0, 0.0, 0.0),
        Point3d::meters(2.0, 0.0, 0.0),
        Point3d::meters(3.0, 0.0, 0.0),
    );
    let parameterized = spline.arc_length_parameterized(Length::meters(1e-6)).unwrap();
    assert_relative_eq!(parameterized.arc_length().value(), 3.0, epsilon = 1e-12);
    let p = parameterized.point_along(Length::meters(1.2));
    assert!(p.equal_within(Length::meters(1e-12), Point3d::meters(1.2, 0.0, 0.0)));
}

#[test]
fn test_arc_length_matches_fine_polyline() {
    let spline = wave();
    let tolerance = Length::meters(1e-4);
    let parameterized = spline.arc_length_parameterized(tolerance).unwrap();
    let polyline = spline.approximate(Length::meters(1e-8));
    assert_relative_eq!(
        parameterized.arc_length().value(),
        polyline.length().value(),
        epsilon = 1e-4
    );
}

#[test]
fn test_distance_and_parameter_are_inverse() {
    let spline = wave();
    let parameterized = spline.arc_length_parameterized(Length::meters(1e-5)).unwrap();
    for i in 1..10 {
        let t = i as f64 / 10.0;
        let distance = parameterized.arc_length_at(t);
        assert_relative_eq!(parameterized.parameter_value(distance), t, epsilon = 1e-6);
    }
}

#[test]
fn test_midpoint_splits_length_evenly() {
    let spline = wave();
    let parameterized = spline.arc_length_parameterized(Length::meters(1e-5)).unwrap();
    let midpoint = parameterized.midpoint();
    // The wave is point-symmetric about its parameter midpoint.
    assert!(midpoint.equal_within(Length::meters(1e-6), spline.point_on(0.5)));
}

#[test]
fn test_tangent_directions_along_curve() {
    let spline = wave();
    let parameterized = spline.arc_length_parameterized(Length::meters(1e-4)).unwrap();
    let start = parameterized.tangent_direction_along(Length::zero());
    let expected = spline.start_derivative().direction().unwrap();
    assert_eq!(start, expected);
    for (point, direction) in parameterized.sample_along(8) {
        let (x, y) = direction.components();
        assert_relative_eq!(x * x + y * y, 1.0, epsilon = 1e-12);
        assert!(point.x_coordinate() >= Length::meters(1.0));
    }
}

#[test]
fn test_approximation_midpoints_within_tolerance() {
    let spline = wave();
    for tolerance in [1.0, 1e-1, 1e-2, 1e-3] {
        let tolerance = Length::meters(tolerance);
        let polyline = spline.approximate(tolerance);
        let segments = polyline.segments();
        let n = segments.len() as f64;
        for (i, (a, b)) in segments.into_iter().enumerate() {
            let curve_mid = spline.point_on((i as f64 + 0.5) / n);
            assert!(Point2d::midpoint(a, b).distance_from(curve_mid) <= tolerance);
        }
    }
}

#[test]
fn test_large_spline_approximation_within_tolerance() {
    let spline: CubicSpline2d<Meters, World> = CubicSpline2d::from_control_points(
        Point2d::meters(0.0, 0.0),
        Point2d::meters(0.0, 1e9),
        Point2d::meters(1e9, 1e9),
        Point2d::meters(1e9, 0.0),
    );
    let tolerance = Length::meters(1e-2);
    let polyline = spline.approximate(tolerance);
    let segments = polyline.segments();
    assert!(segments.len() > cascade_geom::precision::MAX_APPROXIMATION_SEGMENTS);
    let n = segments.len() as f64;
    let worst = segments
        .into_iter()
        .enumerate()
        .map(|(i, (a, b))| Point2d::midpoint(a, b).distance_from(spline.point_on((i as f64 + 0.5) / n)))
        .fold(Length::zero(), Length::max);
    // Coordinates near 1e9 carry rounding of about 1e-7.
    assert!(worst <= tolerance + Length::meters(1e-6));
    assert!(worst > tolerance * 0.5);
}

#[test]
fn test_degenerate_spline_is_rejected() {
    let p = Point2d::meters(3.0, 3.0);
    let spline: QuadraticSpline2d<Meters, World> = QuadraticSpline2d::from_control_points(p, p, p);
    assert!(matches!(spline.nondegenerate(), Err(GeomError::DegenerateCurve)));
    assert!(spline.arc_length_parameterized(Length::meters(1e-3)).is_err());
}
