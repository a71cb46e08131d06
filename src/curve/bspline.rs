//! Conversion of uniform-degree B-splines into Bezier segments.
//!
//! Knot vectors omit the two redundant outer knots: a quadratic B-spline
//! with `n` control points takes `n + 1` knots, a cubic one `n + 2`. Every
//! knot span of non-zero width yields one segment, whose control points are
//! blossoms of the B-spline evaluated at the span's end knots.

use tracing::debug;

use super::bezier::Coords;
use crate::{GeomError, Result};

fn validate_knots(knots: &[f64], expected: usize) -> Result<()> {
    if knots.len() != expected {
        return Err(GeomError::InvalidKnots { expected, found: knots.len() });
    }
    if !knots.windows(2).all(|pair| pair[0] <= pair[1]) {
        return Err(GeomError::UnsortedKnots);
    }
    Ok(())
}

/// Blossom of the quadratic piece defined by knots `u[0..4]` and control
/// points `p[0..3]`, valid on the span `[u[1], u[2]]`.
fn quadratic_blossom<T: Coords>(u: &[f64], p: &[T], t1: f64, t2: f64) -> T {
    let q0 = T::interpolated(&p[0], &p[1], (t1 - u[0]) / (u[2] - u[0]));
    let q1 = T::interpolated(&p[1], &p[2], (t1 - u[1]) / (u[3] - u[1]));
    T::interpolated(&q0, &q1, (t2 - u[1]) / (u[2] - u[1]))
}

/// Blossom of the cubic piece defined by knots `u[0..6]` and control
/// points `p[0..4]`, valid on the span `[u[2], u[3]]`.
fn cubic_blossom<T: Coords>(u: &[f64], p: &[T], t1: f64, t2: f64, t3: f64) -> T {
    let q0 = T::interpolated(&p[0], &p[1], (t1 - u[0]) / (u[3] - u[0]));
    let q1 = T::interpolated(&p[1], &p[2], (t1 - u[1]) / (u[4] - u[1]));
    let q2 = T::interpolated(&p[2], &p[3], (t1 - u[2]) / (u[5] - u[2]));
    let r0 = T::interpolated(&q0, &q1, (t2 - u[1]) / (u[3] - u[1]));
    let r1 = T::interpolated(&q1, &q2, (t2 - u[2]) / (u[4] - u[2]));
    T::interpolated(&r0, &r1, (t3 - u[2]) / (u[3] - u[2]))
}

pub(crate) fn quadratic_segments<T: Coords>(knots: &[f64], points: &[T]) -> Result<Vec<[T; 3]>> {
    validate_knots(knots, points.len() + 1)?;
    let mut segments = Vec::new();
    for i in 0..points.len().saturating_sub(2) {
        let u = &knots[i..i + 4];
        let p = &points[i..i + 3];
        let (a, b) = (u[1], u[2]);
        if a == b {
            debug!(span = i, knot = a, "skipping zero-width knot span");
            continue;
        }
        segments.push([
            quadratic_blossom(u, p, a, a),
            quadratic_blossom(u, p, a, b),
            quadratic_blossom(u, p, b, b),
        ]);
    }
    Ok(segments)
}

pub(crate) fn cubic_segments<T: Coords>(knots: &[f64], points: &[T]) -> Result<Vec<[T; 4]>> {
    validate_knots(knots, points.len() + 2)?;
    let mut segments = Vec::new();
    for i in 0..points.len().saturating_sub(3) {
        let u = &knots[i..i + 6];
        let p = &points[i..i + 4];
        let (a, b) = (u[2], u[3]);
        if a == b {
            debug!(span = i, knot = a, "skipping zero-width knot span");
            continue;
        }
        segments.push([
            cubic_blossom(u, p, a, a, a),
            cubic_blossom(u, p, a, a, b),
            cubic_blossom(u, p, a, b, b),
            cubic_blossom(u, p, b, b, b),
        ]);
    }
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::bezier::cubic_point;
    use crate::gp::XY;

    fn xy(x: f64, y: f64) -> XY {
        XY::from_coords(x, y)
    }

    #[test]
    fn test_knot_validation() {
        let points = [xy(0.0, 0.0), xy(1.0, 0.0), xy(2.0, 0.0), xy(3.0, 0.0)];
        assert_eq!(
            cubic_segments(&[0.0, 1.0], &points),
            Err(GeomError::InvalidKnots { expected: 6, found: 2 })
        );
        assert_eq!(
            cubic_segments(&[0.0, 0.0, 2.0, 1.0, 1.0, 1.0], &points),
            Err(GeomError::UnsortedKnots)
        );
        assert_eq!(
            quadratic_segments(&[0.0, 0.0, 1.0], &points[..3]),
            Err(GeomError::InvalidKnots { expected: 4, found: 3 })
        );
    }

    #[test]
    fn test_clamped_cubic_is_single_bezier() {
        let points = [xy(0.0, 0.0), xy(1.0, 3.0), xy(4.0, -1.0), xy(5.0, 2.0)];
        let segments = cubic_segments(&[0.0, 0.0, 0.0, 1.0, 1.0, 1.0], &points).unwrap();
        assert_eq!(segments, vec![points]);
    }

    #[test]
    fn test_uniform_cubic_segments_join() {
        let points = [
            xy(0.0, 0.0),
            xy(1.0, 2.0),
            xy(3.0, 3.0),
            xy(5.0, 1.0),
            xy(6.0, -2.0),
            xy(8.0, 0.0),
        ];
        let knots = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let segments = cubic_segments(&knots, &points).unwrap();
        assert_eq!(segments.len(), 3);
        for pair in segments.windows(2) {
            let end = cubic_point(&pair[0], 1.0);
            let start = cubic_point(&pair[1], 0.0);
            assert!(end.subtracted(&start).modulus() < 1e-12);
        }
        // Uniform cubic B-spline: segment starts at (p0 + 4 p1 + p2) / 6
        let expected = xy((0.0 + 4.0 * 1.0 + 3.0) / 6.0, (0.0 + 4.0 * 2.0 + 3.0) / 6.0);
        assert!(segments[0][0].subtracted(&expected).modulus() < 1e-12);
    }

    #[test]
    fn test_repeated_interior_knot_skips_span() {
        let points = [xy(0.0, 0.0), xy(1.0, 1.0), xy(2.0, 0.0), xy(3.0, 1.0), xy(4.0, 0.0)];
        let knots = [0.0, 0.0, 1.0, 1.0, 2.0, 2.0];
        let segments = quadratic_segments(&knots, &points).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], [points[0], points[1], points[2]]);
        assert_eq!(segments[1], [points[2], points[3], points[4]]);
    }

    #[test]
    fn test_too_few_points_gives_no_segments() {
        let points = [xy(0.0, 0.0), xy(1.0, 1.0)];
        assert_eq!(cubic_segments(&[0.0, 0.0, 1.0, 1.0], &points), Ok(vec![]));
    }
}
