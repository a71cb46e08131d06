//! 2D direction (unit vector).
//!
//! Always unitless and of unit length. Public construction goes through
//! normalization or trigonometry only; the raw constructor is crate-private.

use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use super::{Axis2d, Frame2d, Point2d, Vector2d, XY};
use crate::interop::Record2d;
use crate::units::{Angle, Unitless};
use crate::GeomError;

/// A unit vector in 2D space.
#[derive(Serialize, Deserialize)]
#[serde(into = "Record2d", try_from = "Record2d", bound = "")]
pub struct Direction2d<C> {
    coord: XY,
    tag: PhantomData<fn() -> C>,
}

impl_value_traits!(Direction2d<C> { coord });

impl<C> Direction2d<C> {
    /// Wraps coordinates that are already known to have unit length.
    #[inline]
    pub(crate) const fn unchecked(xy: XY) -> Self {
        Self { coord: xy, tag: PhantomData }
    }

    #[inline]
    pub(crate) const fn xy(&self) -> XY {
        self.coord
    }

    /// Direction of +X.
    #[inline]
    pub const fn x() -> Self {
        Self::unchecked(XY::from_coords(1.0, 0.0))
    }

    /// Direction of +Y.
    #[inline]
    pub const fn y() -> Self {
        Self::unchecked(XY::from_coords(0.0, 1.0))
    }

    /// Same as `x()`.
    #[inline]
    pub const fn positive_x() -> Self {
        Self::x()
    }

    /// The negative X direction.
    #[inline]
    pub const fn negative_x() -> Self {
        Self::unchecked(XY::from_coords(-1.0, 0.0))
    }

    /// Same as `y()`.
    #[inline]
    pub const fn positive_y() -> Self {
        Self::y()
    }

    /// The negative Y direction.
    #[inline]
    pub const fn negative_y() -> Self {
        Self::unchecked(XY::from_coords(0.0, -1.0))
    }

    /// Direction at the given angle counterclockwise from +X.
    pub fn from_angle(angle: Angle) -> Self {
        Self::unchecked(XY::from_coords(angle.cos(), angle.sin()))
    }

    /// Counterclockwise angle from +X, in `(-π, π]`.
    pub fn to_angle(self) -> Angle {
        Angle::atan2(self.coord.y(), self.coord.x())
    }

    /// Counterclockwise angle from `other` to this direction, in `(-π, π]`.
    pub fn angle_from(self, other: Self) -> Angle {
        Angle::atan2(other.coord.crossed(&self.coord), other.coord.dot(&self.coord))
    }

    /// Direction from `p1` towards `p2`, or None if the points coincide.
    pub fn from_points<U>(p1: Point2d<U, C>, p2: Point2d<U, C>) -> Option<Self> {
        Vector2d::from_points(p1, p2).direction()
    }

    /// The direction rotated a quarter turn counterclockwise.
    #[inline]
    pub fn perpendicular_to(d: Self) -> Self {
        Self::unchecked(d.coord.perpendicular())
    }

    /// Gram-Schmidt: normalizes `x_vector`, then takes the unit direction
    /// perpendicular to it on the same side as `xy_vector`. None if either
    /// vector is zero or they are parallel.
    pub fn orthonormalize<U>(
        x_vector: Vector2d<U, C>,
        xy_vector: Vector2d<U, C>,
    ) -> Option<(Self, Self)> {
        let x_direction = x_vector.direction()?;
        let cross = x_vector.xy().crossed(&xy_vector.xy());
        if cross == 0.0 || cross.is_nan() {
            return None;
        }
        let perpendicular = Self::perpendicular_to(x_direction);
        let y_direction = if cross > 0.0 { perpendicular } else { perpendicular.reverse() };
        Some((x_direction, y_direction))
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

    /// Returns both components.
    #[inline]
    pub fn components(self) -> (f64, f64) {
        self.coord.coords()
    }

    /// Unit vector with this direction.
    #[inline]
    pub fn to_vector(self) -> Vector2d<Unitless, C> {
        Vector2d::from_xy(self.coord)
    }

    /// Cosine of the angle between the two directions.
    #[inline]
    pub fn component_in(self, other: Self) -> f64 {
        self.coord.dot(&other.coord)
    }

    /// True if the angle between the directions is at most `tolerance`.
    pub fn equal_within(self, tolerance: Angle, other: Self) -> bool {
        self.angle_from(other).abs() <= tolerance
    }

    /// Returns the opposite direction.
    #[inline]
    pub fn reverse(self) -> Self {
        Self::unchecked(self.coord.reversed())
    }

    /// Rotates counterclockwise by `angle`.
    pub fn rotate_by(self, angle: Angle) -> Self {
        Self::unchecked(self.coord.rotated(angle.cos(), angle.sin()))
    }

    /// Rotates by 90 degrees counterclockwise.
    #[inline]
    pub fn rotate_counterclockwise(self) -> Self {
        Self::perpendicular_to(self)
    }

    /// Rotates by 90 degrees clockwise.
    #[inline]
    pub fn rotate_clockwise(self) -> Self {
        Self::unchecked(XY::from_coords(self.coord.y(), -self.coord.x()))
    }

    /// Mirrors across the direction of `axis`.
    #[inline]
    pub fn mirror_across<AU>(self, axis: &Axis2d<AU, C>) -> Self {
        Self::unchecked(self.coord.mirrored(&axis.direction().coord))
    }

    /// Expresses the direction in the local coordinates of `frame`.
    pub fn relative_to<FU, L>(self, frame: &Frame2d<FU, C, L>) -> Direction2d<L> {
        Direction2d::unchecked(XY::from_coords(
            self.coord.dot(&frame.x_direction().coord),
            self.coord.dot(&frame.y_direction().coord),
        ))
    }

    /// Converts from the local coordinates of `frame` to its parent coordinates.
    pub fn place_in<FU, G>(self, frame: &Frame2d<FU, G, C>) -> Direction2d<G> {
        let (x, y) = self.coord.coords();
        Direction2d::unchecked(XY::linear_form(
            x,
            &frame.x_direction().coord,
            y,
            &frame.y_direction().coord,
        ))
    }
}

impl<C> std::ops::Neg for Direction2d<C> {
    type Output = Self;
    fn neg(self) -> Self {
        self.reverse()
    }
}

impl<C> From<Direction2d<C>> for Record2d {
    fn from(direction: Direction2d<C>) -> Self {
        let (x, y) = direction.coord.coords();
        Record2d { x, y }
    }
}

/// Normalizes the record; an all-zero record has no direction.
impl<C> TryFrom<Record2d> for Direction2d<C> {
    type Error = GeomError;

    fn try_from(record: Record2d) -> Result<Self, Self::Error> {
        XY::from_coords(record.x, record.y)
            .normalized()
            .map(Self::unchecked)
            .ok_or(GeomError::ZeroDirection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Meters;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    enum Global {}

    type D = Direction2d<Global>;

    #[test]
    fn test_dir2d_from_angle() {
        let d = D::from_angle(Angle::degrees(90.0));
        assert!(d.x_component().abs() < 1e-15);
        assert_relative_eq!(d.y_component(), 1.0);
        assert_relative_eq!(d.to_angle().in_degrees(), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_dir2d_angle_from() {
        let a = D::x();
        let b = D::from_angle(Angle::degrees(120.0));
        assert_relative_eq!(b.angle_from(a).in_degrees(), 120.0, epsilon = 1e-9);
        assert_relative_eq!(a.angle_from(b).in_degrees(), -120.0, epsilon = 1e-9);
    }

    #[test]
    fn test_dir2d_from_points() {
        let p1 = Point2d::<Meters, Global>::meters(1.0, 1.0);
        let p2 = Point2d::meters(1.0, 4.0);
        assert_eq!(D::from_points(p1, p2), Some(D::y()));
        assert_eq!(D::from_points(p1, p1), None);
    }

    #[test]
    fn test_dir2d_orthonormalize() {
        let x = Vector2d::<Meters, Global>::meters(2.0, 0.0);
        let xy = Vector2d::meters(3.0, -1.0);
        let (dx, dy) = D::orthonormalize(x, xy).unwrap();
        assert_eq!(dx, D::x());
        assert_eq!(dy, D::negative_y());
        assert!(D::orthonormalize(x, Vector2d::meters(-4.0, 0.0)).is_none());
        assert!(D::orthonormalize(Vector2d::zero(), xy).is_none());
    }

    #[test]
    fn test_dir2d_rotations() {
        assert_eq!(D::x().rotate_counterclockwise(), D::y());
        assert_eq!(D::x().rotate_clockwise(), D::negative_y());
        let d = D::x().rotate_by(Angle::radians(PI));
        assert!(d.equal_within(Angle::radians(1e-12), D::negative_x()));
    }

    #[test]
    fn test_dir2d_mirror() {
        let axis = Axis2d::<Meters, Global>::y();
        let d = D::from_angle(Angle::degrees(30.0)).mirror_across(&axis);
        assert_relative_eq!(d.to_angle().in_degrees(), 150.0, epsilon = 1e-9);
    }

    #[test]
    fn test_dir2d_serde_normalizes() {
        let d: D = serde_json::from_str(r#"{"x":3.0,"y":4.0}"#).unwrap();
        assert_relative_eq!(d.x_component(), 0.6, epsilon = 1e-15);
        assert_relative_eq!(d.y_component(), 0.8, epsilon = 1e-15);
        let zero: Result<D, _> = serde_json::from_str(r#"{"x":0.0,"y":0.0}"#);
        assert!(zero.is_err());
    }
}
