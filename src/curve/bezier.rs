//! Bezier evaluation on raw coordinates.
//!
//! Everything is expressed through blossoms (polar forms): a point on the
//! curve is the blossom with all arguments equal, and the control points of
//! the sub-curve over `[t0, t1]` are the blossoms over every multiset of
//! `{t0, t1}`. Each level interpolates with [`Coords::interpolated`], which
//! is exact at 0 and 1, so endpoints are reproduced bit for bit.

use crate::gp::{XY, XYZ};

/// Raw coordinate algebra shared by the 2D and 3D curves.
pub(crate) trait Coords: Copy {
    fn added(&self, other: &Self) -> Self;
    fn subtracted(&self, other: &Self) -> Self;
    fn multiplied(&self, scalar: f64) -> Self;
    fn modulus(&self) -> f64;
    fn interpolated(a: &Self, b: &Self, t: f64) -> Self;
}

impl Coords for XY {
    #[inline]
    fn added(&self, other: &Self) -> Self {
        XY::added(self, other)
    }

    #[inline]
    fn subtracted(&self, other: &Self) -> Self {
        XY::subtracted(self, other)
    }

    #[inline]
    fn multiplied(&self, scalar: f64) -> Self {
        XY::multiplied(self, scalar)
    }

    #[inline]
    fn modulus(&self) -> f64 {
        XY::modulus(self)
    }

    #[inline]
    fn interpolated(a: &Self, b: &Self, t: f64) -> Self {
        XY::interpolated(a, b, t)
    }
}

impl Coords for XYZ {
    #[inline]
    fn added(&self, other: &Self) -> Self {
        XYZ::added(self, other)
    }

    #[inline]
    fn subtracted(&self, other: &Self) -> Self {
        XYZ::subtracted(self, other)
    }

    #[inline]
    fn multiplied(&self, scalar: f64) -> Self {
        XYZ::multiplied(self, scalar)
    }

    #[inline]
    fn modulus(&self) -> f64 {
        XYZ::modulus(self)
    }

    #[inline]
    fn interpolated(a: &Self, b: &Self, t: f64) -> Self {
        XYZ::interpolated(a, b, t)
    }
}

/// True if every point equals the first one exactly.
pub(crate) fn all_coincide<T: Coords>(points: &[T]) -> bool {
    match points.split_first() {
        Some((first, rest)) => rest.iter().all(|p| p.subtracted(first).modulus() == 0.0),
        None => true,
    }
}

pub(crate) fn quadratic_blossom<T: Coords>(p: &[T; 3], t1: f64, t2: f64) -> T {
    let q0 = T::interpolated(&p[0], &p[1], t1);
    let q1 = T::interpolated(&p[1], &p[2], t1);
    T::interpolated(&q0, &q1, t2)
}

pub(crate) fn cubic_blossom<T: Coords>(p: &[T; 4], t1: f64, t2: f64, t3: f64) -> T {
    let q0 = T::interpolated(&p[0], &p[1], t1);
    let q1 = T::interpolated(&p[1], &p[2], t1);
    let q2 = T::interpolated(&p[2], &p[3], t1);
    let r0 = T::interpolated(&q0, &q1, t2);
    let r1 = T::interpolated(&q1, &q2, t2);
    T::interpolated(&r0, &r1, t3)
}

#[inline]
pub(crate) fn quadratic_point<T: Coords>(p: &[T; 3], t: f64) -> T {
    quadratic_blossom(p, t, t)
}

#[inline]
pub(crate) fn cubic_point<T: Coords>(p: &[T; 4], t: f64) -> T {
    cubic_blossom(p, t, t, t)
}

pub(crate) fn quadratic_first_derivative<T: Coords>(p: &[T; 3], t: f64) -> T {
    let d0 = p[1].subtracted(&p[0]);
    let d1 = p[2].subtracted(&p[1]);
    T::interpolated(&d0, &d1, t).multiplied(2.0)
}

pub(crate) fn quadratic_second_derivative<T: Coords>(p: &[T; 3]) -> T {
    let d0 = p[1].subtracted(&p[0]);
    let d1 = p[2].subtracted(&p[1]);
    d1.subtracted(&d0).multiplied(2.0)
}

pub(crate) fn cubic_first_derivative<T: Coords>(p: &[T; 4], t: f64) -> T {
    let d = [
        p[1].subtracted(&p[0]),
        p[2].subtracted(&p[1]),
        p[3].subtracted(&p[2]),
    ];
    quadratic_point(&d, t).multiplied(3.0)
}

fn cubic_second_differences<T: Coords>(p: &[T; 4]) -> (T, T) {
    let d0 = p[1].subtracted(&p[0]);
    let d1 = p[2].subtracted(&p[1]);
    let d2 = p[3].subtracted(&p[2]);
    (d1.subtracted(&d0), d2.subtracted(&d1))
}

pub(crate) fn cubic_second_derivative<T: Coords>(p: &[T; 4], t: f64) -> T {
    let (e0, e1) = cubic_second_differences(p);
    T::interpolated(&e0, &e1, t).multiplied(6.0)
}

pub(crate) fn cubic_third_derivative<T: Coords>(p: &[T; 4]) -> T {
    let (e0, e1) = cubic_second_differences(p);
    e1.subtracted(&e0).multiplied(6.0)
}

/// The second derivative of a cubic is linear in `t`, so its magnitude
/// peaks at one of the endpoints.
pub(crate) fn cubic_max_second_derivative_magnitude<T: Coords>(p: &[T; 4]) -> f64 {
    let (e0, e1) = cubic_second_differences(p);
    6.0 * e0.modulus().max(e1.modulus())
}

/// Control points of the part of the curve over `[t0, t1]`.
pub(crate) fn quadratic_subsegment<T: Coords>(p: &[T; 3], t0: f64, t1: f64) -> [T; 3] {
    [
        quadratic_blossom(p, t0, t0),
        quadratic_blossom(p, t0, t1),
        quadratic_blossom(p, t1, t1),
    ]
}

pub(crate) fn cubic_subsegment<T: Coords>(p: &[T; 4], t0: f64, t1: f64) -> [T; 4] {
    [
        cubic_blossom(p, t0, t0, t0),
        cubic_blossom(p, t0, t0, t1),
        cubic_blossom(p, t0, t1, t1),
        cubic_blossom(p, t1, t1, t1),
    ]
}

/// Parameter bounds of `n` equal pieces of `[0, 1]`. At least one piece.
pub(crate) fn segment_bounds(n: usize) -> impl Iterator<Item = (f64, f64)> {
    let n = n.max(1);
    (0..n).map(move |i| (i as f64 / n as f64, (i + 1) as f64 / n as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xy(x: f64, y: f64) -> XY {
        XY::from_coords(x, y)
    }

    #[test]
    fn test_cubic_point_endpoints_exact() {
        let p = [xy(0.1, 0.3), xy(1.7, 2.9), xy(3.3, -1.1), xy(4.9, 0.7)];
        assert_eq!(cubic_point(&p, 0.0), p[0]);
        assert_eq!(cubic_point(&p, 1.0), p[3]);
    }

    #[test]
    fn test_cubic_derivatives_of_line() {
        let p = [xy(0.0, 0.0), xy(1.0, 0.0), xy(2.0, 0.0), xy(3.0, 0.0)];
        assert_eq!(cubic_first_derivative(&p, 0.3), xy(3.0, 0.0));
        assert_eq!(cubic_second_derivative(&p, 0.3), xy(0.0, 0.0));
        assert_eq!(cubic_max_second_derivative_magnitude(&p), 0.0);
    }

    #[test]
    fn test_quadratic_derivatives() {
        // y = x^2 sampled as a Bezier: (0,0), (0.5,0), (1,1)
        let p = [xy(0.0, 0.0), xy(0.5, 0.0), xy(1.0, 1.0)];
        assert_eq!(quadratic_point(&p, 0.5), xy(0.5, 0.25));
        assert_eq!(quadratic_first_derivative(&p, 0.5), xy(1.0, 1.0));
        assert_eq!(quadratic_second_derivative(&p), xy(0.0, 2.0));
    }

    #[test]
    fn test_subsegment_matches_curve() {
        let p = [xy(0.0, 0.0), xy(1.0, 2.0), xy(3.0, 2.0), xy(4.0, 0.0)];
        let sub = cubic_subsegment(&p, 0.25, 0.75);
        for i in 0..=4 {
            let s = i as f64 / 4.0;
            let expected = cubic_point(&p, 0.25 + 0.5 * s);
            assert!(cubic_point(&sub, s).subtracted(&expected).modulus() < 1e-14);
        }
        assert_eq!(cubic_subsegment(&p, 0.0, 1.0), p);
    }

    #[test]
    fn test_all_coincide() {
        assert!(all_coincide(&[xy(1.0, 1.0), xy(1.0, 1.0), xy(1.0, 1.0)]));
        assert!(!all_coincide(&[xy(0.0, 0.0), xy(0.0, 1e-300)]));
    }

    #[test]
    fn test_segment_bounds() {
        let bounds: Vec<_> = segment_bounds(4).collect();
        assert_eq!(bounds.first(), Some(&(0.0, 0.25)));
        assert_eq!(bounds.last(), Some(&(0.75, 1.0)));
        assert_eq!(segment_bounds(0).count(), 1);
    }
}
