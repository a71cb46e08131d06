//! Parametric curves and their arc-length parameterization.
//!
//! Splines are evaluated over the parameter range `[0, 1]`. A spline whose
//! control points do not all coincide can be wrapped in [`Nondegenerate`],
//! which guarantees a tangent direction everywhere, and from there
//! parameterized by arc length with [`ArcLengthParameterized`].

use std::fmt;

use tracing::debug;

use crate::units::Quantity;
use crate::{GeomError, Result};

mod arc_length;
pub(crate) mod bezier;
mod bspline;
mod cubic_spline2d;
mod cubic_spline3d;
mod polyline;
mod quadratic_spline2d;
mod quadratic_spline3d;

use arc_length::SegmentTree;

pub use cubic_spline2d::CubicSpline2d;
pub use cubic_spline3d::CubicSpline3d;
pub use polyline::{Polyline2d, Polyline3d};
pub use quadratic_spline2d::QuadraticSpline2d;
pub use quadratic_spline3d::QuadraticSpline3d;

/// A curve over the parameter range `[0, 1]`.
pub trait Curve: Copy + fmt::Debug {
    /// Units of the curve's coordinates.
    type Units;
    type Point: Copy + fmt::Debug;
    type Direction: Copy + fmt::Debug;

    fn point_on(&self, t: f64) -> Self::Point;

    /// Magnitude of the first derivative at `t`.
    fn derivative_magnitude(&self, t: f64) -> Quantity<Self::Units>;

    /// Upper bound on the magnitude of the second derivative over `[0, 1]`.
    fn max_second_derivative_magnitude(&self) -> Quantity<Self::Units>;

    /// Direction of the first non-vanishing derivative at `t`, or None if
    /// every derivative vanishes there.
    fn tangent_direction_at(&self, t: f64) -> Option<Self::Direction>;
}

/// A curve known to have a tangent direction at every parameter value.
pub struct Nondegenerate<S: Curve> {
    curve: S,
    start_tangent: S::Direction,
}

impl<S: Curve> Clone for Nondegenerate<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Curve> Copy for Nondegenerate<S> {}

impl<S: Curve> fmt::Debug for Nondegenerate<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nondegenerate").field("curve", &self.curve).finish()
    }
}

impl<S: Curve> Nondegenerate<S> {
    /// Fails with [`GeomError::DegenerateCurve`] if the curve is a single
    /// point, i.e. all its control points coincide.
    pub fn from_curve(curve: S) -> Result<Self> {
        match curve.tangent_direction_at(0.0) {
            Some(start_tangent) => Ok(Self { curve, start_tangent }),
            None => {
                debug!(?curve, "rejected degenerate curve");
                Err(GeomError::DegenerateCurve)
            }
        }
    }

    /// The wrapped curve.
    #[inline]
    pub fn spline(&self) -> &S {
        &self.curve
    }

    /// Tangent direction at `t`. Where the first derivative vanishes the
    /// direction of the next non-vanishing derivative is used.
    pub fn tangent_direction(&self, t: f64) -> S::Direction {
        self.curve.tangent_direction_at(t).unwrap_or(self.start_tangent)
    }

    /// Point and tangent direction at `t`.
    pub fn sample(&self, t: f64) -> (S::Point, S::Direction) {
        (self.curve.point_on(t), self.tangent_direction(t))
    }

    /// Builds the arc-length table to within `max_error`.
    pub fn arc_length_parameterized(&self, max_error: Quantity<S::Units>) -> ArcLengthParameterized<S> {
        let curve = self.curve;
        let tree = SegmentTree::build(
            &|t| curve.derivative_magnitude(t).value(),
            max_error.value(),
            curve.max_second_derivative_magnitude().value(),
        );
        ArcLengthParameterized { curve: *self, tree }
    }
}

/// A nondegenerate curve together with a table mapping arc length to the
/// curve parameter.
pub struct ArcLengthParameterized<S: Curve> {
    curve: Nondegenerate<S>,
    tree: SegmentTree,
}

impl<S: Curve> Clone for ArcLengthParameterized<S> {
    fn clone(&self) -> Self {
        Self { curve: self.curve, tree: self.tree.clone() }
    }
}

impl<S: Curve> fmt::Debug for ArcLengthParameterized<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArcLengthParameterized")
            .field("curve", &self.curve.curve)
            .field("arc_length", &self.tree.length_at_end())
            .finish()
    }
}

impl<S: Curve> ArcLengthParameterized<S> {
    /// Total length of the curve.
    #[inline]
    pub fn arc_length(&self) -> Quantity<S::Units> {
        Quantity::new(self.tree.length_at_end())
    }

    /// Curve parameter at the given distance along the curve. Distances are
    /// clamped to `[0, arc_length]`, with both ends mapped exactly.
    #[inline]
    pub fn parameter_value(&self, distance: Quantity<S::Units>) -> f64 {
        self.tree.parameter_value(distance.value())
    }

    /// Distance along the curve at the given parameter value.
    #[inline]
    pub fn arc_length_at(&self, parameter: f64) -> Quantity<S::Units> {
        Quantity::new(self.tree.length_at(parameter))
    }

    /// Point at the given distance along the curve. Zero gives the start
    /// point and `arc_length()` the end point exactly.
    pub fn point_along(&self, distance: Quantity<S::Units>) -> S::Point {
        self.curve.curve.point_on(self.parameter_value(distance))
    }

    /// Tangent direction at the given distance along the curve.
    pub fn tangent_direction_along(&self, distance: Quantity<S::Units>) -> S::Direction {
        self.curve.tangent_direction(self.parameter_value(distance))
    }

    /// Point halfway along the curve by arc length.
    pub fn midpoint(&self) -> S::Point {
        self.point_along(self.arc_length() * 0.5)
    }

    /// `n + 1` samples (point and tangent direction) evenly spaced by arc
    /// length, including both endpoints. A single start sample for `n = 0`.
    pub fn sample_along(&self, n: usize) -> Vec<(S::Point, S::Direction)> {
        if n == 0 {
            return vec![self.curve.sample(0.0)];
        }
        let total = self.arc_length();
        (0..=n)
            .map(|i| {
                let t = self.parameter_value(total * (i as f64 / n as f64));
                self.curve.sample(t)
            })
            .collect()
    }

    /// Returns the spline this parameterization was built from.
    #[inline]
    pub fn underlying_spline(&self) -> &S {
        &self.curve.curve
    }

    /// Returns the nondegenerate spline this parameterization was built from.
    #[inline]
    pub fn nondegenerate(&self) -> &Nondegenerate<S> {
        &self.curve
    }
}
