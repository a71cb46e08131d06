//! 3D vector.
//!
//! Free vector with components in units `U`, expressed in coordinate system
//! `C`. Rotations go through a quaternion-derived matrix ([`Mat::rotation`]);
//! reflections through `I - 2nnᵀ`.

use std::cmp::Ordering;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use super::{Axis3d, Direction3d, Frame3d, Mat, Plane3d, Point3d, SketchPlane3d, Vector2d, XY, XYZ};
use crate::interop::Record3d;
use crate::units::{Angle, Meters, Pixels, Product, Quantity, Rate, Squared, Unitless};

/// A 3D vector in cartesian space.
#[derive(Serialize, Deserialize)]
#[serde(transparent, bound = "")]
pub struct Vector3d<U, C> {
    coord: XYZ,
    tag: PhantomData<fn() -> (U, C)>,
}

impl_value_traits!(Vector3d<U, C> { coord });

impl<U, C> Default for Vector3d<U, C> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<U, C> Vector3d<U, C> {
    /// Creates a null vector.
    #[inline]
    pub const fn zero() -> Self {
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

    /// Creates a vector from its three components.
    #[inline]
    pub fn from_components(x: Quantity<U>, y: Quantity<U>, z: Quantity<U>) -> Self {
        Self::from_xyz(XYZ::from_coords(x.value(), y.value(), z.value()))
    }

    /// The vector from `p1` to `p2`.
    #[inline]
    pub fn from_points(p1: Point3d<U, C>, p2: Point3d<U, C>) -> Self {
        Self::from_xyz(p2.xyz().subtracted(&p1.xyz()))
    }

    /// Vector of the given length along `direction`.
    #[inline]
    pub fn with_length(length: Quantity<U>, direction: Direction3d<C>) -> Self {
        Self::from_xyz(direction.xyz().multiplied(length.value()))
    }

    /// A vector perpendicular to `v` of comparable length: the component
    /// of smallest magnitude is zeroed and the other two are swapped, one
    /// of them negated. Zero for the zero vector.
    #[inline]
    pub fn perpendicular_to(v: Self) -> Self {
        Self::from_xyz(v.coord.perpendicular())
    }

    /// Linear interpolation; `t = 0` gives `v1`, `t = 1` gives `v2`.
    #[inline]
    pub fn interpolate_from(v1: Self, v2: Self, t: f64) -> Self {
        Self::from_xyz(XYZ::interpolated(&v1.coord, &v2.coord, t))
    }

    /// Sum of all vectors, zero for an empty slice.
    pub fn sum(vectors: &[Self]) -> Self {
        vectors.iter().fold(Self::zero(), |acc, v| acc + *v)
    }

    /// Builds a 3D vector from 2D components in a sketch plane.
    pub fn on<SU, L>(sketch_plane: &SketchPlane3d<SU, C, L>, vector: Vector2d<U, L>) -> Self {
        let (x, y) = vector.xy().coords();
        Self::from_xyz(XYZ::linear_form_2(
            x,
            &sketch_plane.x_direction().xyz(),
            y,
            &sketch_plane.y_direction().xyz(),
        ))
    }

    /// Returns the X component.
    #[inline]
    pub fn x_component(self) -> Quantity<U> {
        Quantity::new(self.coord.x())
    }

    /// Returns the Y component.
    #[inline]
    pub fn y_component(self) -> Quantity<U> {
        Quantity::new(self.coord.y())
    }

    /// Returns the Z component.
    #[inline]
    pub fn z_component(self) -> Quantity<U> {
        Quantity::new(self.coord.z())
    }

    /// Returns the X, Y and Z components.
    #[inline]
    pub fn components(self) -> (Quantity<U>, Quantity<U>, Quantity<U>) {
        (self.x_component(), self.y_component(), self.z_component())
    }

    /// Returns the length (magnitude).
    #[inline]
    pub fn length(self) -> Quantity<U> {
        Quantity::new(self.coord.modulus())
    }

    /// Squared length, without the square root.
    #[inline]
    pub fn length_squared(self) -> Quantity<Squared<U>> {
        Quantity::new(self.coord.square_modulus())
    }

    /// Direction of the vector, or None if it is exactly zero.
    #[inline]
    pub fn direction(self) -> Option<Direction3d<C>> {
        self.coord.normalized().map(Direction3d::unchecked)
    }

    /// Length and direction together, or None for the zero vector.
    pub fn length_and_direction(self) -> Option<(Quantity<U>, Direction3d<C>)> {
        self.coord
            .modulus_and_normalized()
            .map(|(length, unit)| (Quantity::new(length), Direction3d::unchecked(unit)))
    }

    /// Unit-length copy, or zero for the zero vector.
    #[inline]
    pub fn normalize(self) -> Vector3d<Unitless, C> {
        Vector3d::from_xyz(self.coord.normalized().unwrap_or_default())
    }

    /// Signed length of the projection onto `direction`.
    #[inline]
    pub fn component_in(self, direction: Direction3d<C>) -> Quantity<U> {
        Quantity::new(self.coord.dot(&direction.xyz()))
    }

    /// True if the two vectors differ by at most `tolerance`.
    #[inline]
    pub fn equal_within(self, tolerance: Quantity<U>, other: Self) -> bool {
        (other - self).length() <= tolerance
    }

    /// Orders by X, then Y, then Z, using exact comparison.
    pub fn lexicographic_comparison(self, other: Self) -> Ordering {
        let (x1, y1, z1) = self.coord.coords();
        let (x2, y2, z2) = other.coord.coords();
        if x1 != x2 {
            x1.total_cmp(&x2)
        } else if y1 != y2 {
            y1.total_cmp(&y2)
        } else if z1 != z2 {
            z1.total_cmp(&z2)
        } else {
            Ordering::Equal
        }
    }

    /// `self + other`.
    #[inline]
    pub fn plus(self, other: Self) -> Self {
        Self::from_xyz(self.coord.added(&other.coord))
    }

    /// `self - other`.
    #[inline]
    pub fn minus(self, other: Self) -> Self {
        Self::from_xyz(self.coord.subtracted(&other.coord))
    }

    /// Dot product; the result carries the product of both units.
    #[inline]
    pub fn dot<U2>(self, other: Vector3d<U2, C>) -> Quantity<Product<U, U2>> {
        Quantity::new(self.coord.dot(&other.coord))
    }

    /// Cross product `self × other`.
    #[inline]
    pub fn cross<U2>(self, other: Vector3d<U2, C>) -> Vector3d<Product<U, U2>, C> {
        Vector3d::from_xyz(self.coord.crossed(&other.coord))
    }

    /// Returns the reversed vector.
    #[inline]
    pub fn reverse(self) -> Self {
        Self::from_xyz(self.coord.reversed())
    }

    /// Scales by a dimensionless factor.
    #[inline]
    pub fn scale_by(self, k: f64) -> Self {
        Self::from_xyz(self.coord.multiplied(k))
    }

    /// Vector of the given length in the same direction; zero stays zero.
    pub fn scale_to<U2>(self, length: Quantity<U2>) -> Vector3d<U2, C> {
        match self.coord.normalized() {
            Some(unit) => Vector3d::from_xyz(unit.multiplied(length.value())),
            None => Vector3d::zero(),
        }
    }

    /// Multiplies by a quantity, giving a vector in the product unit.
    #[inline]
    pub fn times<U2>(self, q: Quantity<U2>) -> Vector3d<Product<U, U2>, C> {
        Vector3d::from_xyz(self.coord.multiplied(q.value()))
    }

    /// Half of the vector.
    #[inline]
    pub fn half(self) -> Self {
        self.scale_by(0.5)
    }

    /// Twice the vector.
    #[inline]
    pub fn twice(self) -> Self {
        self.scale_by(2.0)
    }

    /// Rotates about the direction of `axis` (its position is irrelevant
    /// for a free vector), counterclockwise when looking down the axis.
    pub fn rotate_around<AU>(self, axis: &Axis3d<AU, C>, angle: Angle) -> Self {
        let rotation = Mat::rotation(&axis.direction().xyz(), angle.value());
        Self::from_xyz(rotation.multiply_xyz(&self.coord))
    }

    /// Mirrors across a plane through the origin parallel to `plane`.
    pub fn mirror_across<PU>(self, plane: &Plane3d<PU, C>) -> Self {
        let mirror = Mat::mirror(&plane.normal_direction().xyz());
        Self::from_xyz(mirror.multiply_xyz(&self.coord))
    }

    /// Component along `direction`, as a vector.
    #[inline]
    pub fn projection_in(self, direction: Direction3d<C>) -> Self {
        Self::with_length(self.component_in(direction), direction)
    }

    /// Removes the component normal to the plane.
    pub fn project_onto<PU>(self, plane: &Plane3d<PU, C>) -> Self {
        self.minus(self.projection_in(plane.normal_direction()))
    }

    /// Expresses the vector in the local coordinates of `frame`.
    pub fn relative_to<FU, L>(self, frame: &Frame3d<FU, C, L>) -> Vector3d<U, L> {
        Vector3d::from_xyz(XYZ::from_coords(
            self.coord.dot(&frame.x_direction().xyz()),
            self.coord.dot(&frame.y_direction().xyz()),
            self.coord.dot(&frame.z_direction().xyz()),
        ))
    }

    /// Converts from the local coordinates of `frame` to its parent coordinates.
    pub fn place_in<FU, G>(self, frame: &Frame3d<FU, G, C>) -> Vector3d<U, G> {
        let (x, y, z) = self.coord.coords();
        Vector3d::from_xyz(XYZ::linear_form_3(
            x,
            &frame.x_direction().xyz(),
            y,
            &frame.y_direction().xyz(),
            z,
            &frame.z_direction().xyz(),
        ))
    }

    /// Projects into a sketch plane, giving the 2D in-plane components.
    pub fn project_into<SU, L>(self, sketch_plane: &SketchPlane3d<SU, C, L>) -> Vector2d<U, L> {
        Vector2d::from_xy(XY::from_coords(
            self.coord.dot(&sketch_plane.x_direction().xyz()),
            self.coord.dot(&sketch_plane.y_direction().xyz()),
        ))
    }

    /// Converts units through a rate, e.g. seconds at meters per second.
    #[inline]
    pub fn at<U2>(self, rate: Quantity<Rate<U2, U>>) -> Vector3d<U2, C> {
        Vector3d::from_xyz(self.coord.multiplied(rate.value()))
    }

    /// Converts units through an inverse rate, dividing by it.
    #[inline]
    pub fn at_<U2>(self, rate: Quantity<Rate<U, U2>>) -> Vector3d<U2, C> {
        Vector3d::from_xyz(self.coord.divided(rate.value()))
    }

    /// Divides by a quantity, giving a rate vector.
    #[inline]
    pub fn per<U2>(self, q: Quantity<U2>) -> Vector3d<Rate<U, U2>, C> {
        Vector3d::from_xyz(self.coord.divided(q.value()))
    }

    /// Builds a vector from a tuple, converting each field with `to_quantity`.
    pub fn from_tuple(
        to_quantity: impl Fn(f64) -> Quantity<U>,
        (x, y, z): (f64, f64, f64),
    ) -> Self {
        Self::from_components(to_quantity(x), to_quantity(y), to_quantity(z))
    }

    /// Converts to a tuple, reading each component with `from_quantity`.
    pub fn to_tuple(self, from_quantity: impl Fn(Quantity<U>) -> f64) -> (f64, f64, f64) {
        (
            from_quantity(self.x_component()),
            from_quantity(self.y_component()),
            from_quantity(self.z_component()),
        )
    }

    /// Builds a vector from a plain record, converting each field with `to_quantity`.
    pub fn from_record(to_quantity: impl Fn(f64) -> Quantity<U>, record: Record3d) -> Self {
        Self::from_components(to_quantity(record.x), to_quantity(record.y), to_quantity(record.z))
    }

    /// Converts to a plain record, reading each component with `from_quantity`.
    pub fn to_record(self, from_quantity: impl Fn(Quantity<U>) -> f64) -> Record3d {
        Record3d {
            x: from_quantity(self.x_component()),
            y: from_quantity(self.y_component()),
            z: from_quantity(self.z_component()),
        }
    }
}

impl<D, I, C> Vector3d<Rate<D, I>, C> {
    /// Accumulates a rate over an amount of its denominator unit.
    #[inline]
    pub fn for_(self, amount: Quantity<I>) -> Vector3d<D, C> {
        Vector3d::from_xyz(self.coord.multiplied(amount.value()))
    }
}

impl<C> Vector3d<Meters, C> {
    /// Creates a vector from components in meters.
    #[inline]
    pub const fn meters(x: f64, y: f64, z: f64) -> Self {
        Self::from_xyz(XYZ::from_coords(x, y, z))
    }
}

impl<C> Vector3d<Pixels, C> {
    /// Creates a vector from components in pixels.
    #[inline]
    pub const fn pixels(x: f64, y: f64, z: f64) -> Self {
        Self::from_xyz(XYZ::from_coords(x, y, z))
    }
}

impl<C> Vector3d<Unitless, C> {
    /// Creates a dimensionless vector.
    #[inline]
    pub const fn unitless(x: f64, y: f64, z: f64) -> Self {
        Self::from_xyz(XYZ::from_coords(x, y, z))
    }
}

impl<U, C> Add for Vector3d<U, C> {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        self.plus(other)
    }
}

impl<U, C> AddAssign for Vector3d<U, C> {
    fn add_assign(&mut self, other: Self) {
        *self = self.plus(other);
    }
}

impl<U, C> Sub for Vector3d<U, C> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        self.minus(other)
    }
}

impl<U, C> SubAssign for Vector3d<U, C> {
    fn sub_assign(&mut self, other: Self) {
        *self = self.minus(other);
    }
}

impl<U, C> Mul<f64> for Vector3d<U, C> {
    type Output = Self;
    fn mul(self, k: f64) -> Self {
        self.scale_by(k)
    }
}

impl<U, C> Div<f64> for Vector3d<U, C> {
    type Output = Self;
    fn div(self, k: f64) -> Self {
        Self::from_xyz(self.coord.divided(k))
    }
}

impl<U, C> Neg for Vector3d<U, C> {
    type Output = Self;
    fn neg(self) -> Self {
        self.reverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Duration, Length, Seconds};
    use approx::assert_relative_eq;

    enum Global {}
    enum Local {}
    enum Sketch {}

    type V = Vector3d<Meters, Global>;

    #[test]
    fn test_vec_length_and_direction() {
        let (len, dir) = V::meters(2.0, 3.0, 6.0).length_and_direction().unwrap();
        assert_relative_eq!(len.in_meters(), 7.0, epsilon = 1e-12);
        assert_relative_eq!(dir.x_component(), 2.0 / 7.0, epsilon = 1e-15);
        assert!(V::zero().direction().is_none());
    }

    #[test]
    fn test_vec_cross_right_handed() {
        let i = V::meters(1.0, 0.0, 0.0);
        let j = V::meters(0.0, 1.0, 0.0);
        assert_eq!(i.cross(j).components().2.value(), 1.0);
        assert_eq!(j.cross(i).components().2.value(), -1.0);
        assert_eq!(i.cross(i).length().value(), 0.0);
    }

    #[test]
    fn test_vec_rotate_around_z() {
        let v = V::meters(1.0, 0.0, 2.0).rotate_around(&Axis3d::<Meters, Global>::z(), Angle::degrees(90.0));
        assert!(v.equal_within(Length::meters(1e-12), V::meters(0.0, 1.0, 2.0)));
    }

    #[test]
    fn test_vec_mirror_and_project_onto_plane() {
        let plane = Plane3d::<Meters, Global>::xy();
        let v = V::meters(1.0, 2.0, 3.0);
        assert_eq!(v.mirror_across(&plane), V::meters(1.0, 2.0, -3.0));
        assert_eq!(v.project_onto(&plane), V::meters(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_vec_perpendicular_to() {
        let v = V::meters(-5.0, 0.5, 4.0);
        assert_eq!(V::perpendicular_to(v).dot(v).value(), 0.0);
        assert_eq!(V::perpendicular_to(V::zero()), V::zero());
    }

    #[test]
    fn test_vec_frame_round_trip() {
        let frame: Frame3d<Meters, Global, Local> = Frame3d::at_point(Point3d::meters(1.0, 2.0, 3.0))
            .rotate_around(&Axis3d::x(), Angle::degrees(40.0))
            .rotate_around(&Axis3d::z(), Angle::degrees(-75.0));
        let v = V::meters(0.3, -2.0, 5.0);
        let back = v.relative_to(&frame).place_in(&frame);
        assert!(back.equal_within(Length::meters(1e-12), v));
    }

    #[test]
    fn test_vec_sketch_plane_round_trip() {
        let sketch: SketchPlane3d<Meters, Global, Sketch> = SketchPlane3d::yz();
        let v = V::meters(7.0, 2.0, 3.0);
        let v2 = v.project_into(&sketch);
        assert_eq!(v2, Vector2d::meters(2.0, 3.0));
        assert_eq!(V::on(&sketch, v2), V::meters(0.0, 2.0, 3.0));
    }

    #[test]
    fn test_vec_rates() {
        let displacement = V::meters(10.0, 0.0, -5.0);
        let velocity: Vector3d<Rate<Meters, Seconds>, Global> = displacement.per(Duration::seconds(5.0));
        assert_eq!(velocity.for_(Duration::seconds(1.0)), V::meters(2.0, 0.0, -1.0));
    }

    #[test]
    fn test_vec_serde_as_record() {
        let json = serde_json::to_string(&V::meters(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0,"z":3.0}"#);
    }
}
