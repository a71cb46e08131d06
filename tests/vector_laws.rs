use cascade_geom::units::{Meters, Unitless};
use cascade_geom::{
    Angle, Direction2d, Direction3d, Frame2d, Frame3d, Point2d, Point3d, Vector2d, Vector3d,
};
use proptest::prelude::*;

enum World {}
enum Local {}

const TOLERANCE: f64 = 1e-9;

fn coordinate() -> impl Strategy<Value = f64> {
    -1.0e3..1.0e3f64
}

fn vector2d() -> impl Strategy<Value = Vector2d<Meters, World>> {
    (coordinate(), coordinate()).prop_map(|(x, y)| Vector2d::meters(x, y))
}

fn vector3d() -> impl Strategy<Value = Vector3d<Meters, World>> {
    (coordinate(), coordinate(), coordinate()).prop_map(|(x, y, z)| Vector3d::meters(x, y, z))
}

fn angle() -> impl Strategy<Value = Angle> {
    (-10.0..10.0f64).prop_map(Angle::radians)
}

fn frame2d() -> impl Strategy<Value = Frame2d<Meters, World, Local>> {
    (coordinate(), coordinate(), angle())
        .prop_map(|(x, y, a)| Frame2d::at_point(Point2d::meters(x, y)).rotate_by(a))
}

fn frame3d() -> impl Strategy<Value = Frame3d<Meters, World, Local>> {
    (coordinate(), coordinate(), coordinate(), angle(), angle()).prop_map(|(x, y, z, azimuth, elevation)| {
        let origin = Point3d::meters(x, y, z);
        let z_direction = Direction3d::from_azimuth_and_elevation(azimuth, elevation);
        Frame3d::with_z_direction(z_direction, origin)
    })
}

fn close2d(a: Vector2d<Meters, World>, b: Vector2d<Meters, World>, scale: f64) -> bool {
    a.minus(b).length().value() <= TOLERANCE * scale.max(1.0)
}

proptest! {
    #[test]
    fn direction_has_unit_length(v in vector2d()) {
        if let Some(direction) = v.direction() {
            prop_assert!((direction.to_vector().length().value() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn direction3d_has_unit_length(v in vector3d()) {
        if let Some(direction) = v.direction() {
            prop_assert!((direction.to_vector().length().value() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn normalize_matches_direction(v in vector2d()) {
        let normalized: Vector2d<Unitless, World> = v.normalize();
        match v.direction() {
            Some(direction) => prop_assert_eq!(normalized, direction.to_vector()),
            None => prop_assert_eq!(normalized, Vector2d::zero()),
        }
    }

    #[test]
    fn frame2d_round_trip(v in vector2d(), frame in frame2d()) {
        let back = v.relative_to(&frame).place_in(&frame);
        prop_assert!(close2d(back, v, v.length().value()));
    }

    #[test]
    fn frame3d_round_trip(v in vector3d(), frame in frame3d()) {
        let back = v.relative_to(&frame).place_in(&frame);
        prop_assert!(back.minus(v).length().value() <= TOLERANCE * v.length().value().max(1.0));
    }

    #[test]
    fn cross_is_antisymmetric(a in vector2d(), b in vector2d()) {
        prop_assert_eq!(a.cross(b), -b.cross(a));
        prop_assert_eq!(a.cross(a).value(), 0.0);
    }

    #[test]
    fn cross3d_is_antisymmetric(a in vector3d(), b in vector3d()) {
        prop_assert_eq!(a.cross(b), -b.cross(a));
        prop_assert_eq!(a.cross(a), Vector3d::zero());
    }

    #[test]
    fn rotation_has_inverse(v in vector2d(), a in angle()) {
        let back = v.rotate_by(a).rotate_by(-a);
        prop_assert!(close2d(back, v, v.length().value()));
        let full_turn = v.rotate_by(Angle::turns(1.0));
        prop_assert!(close2d(full_turn, v, v.length().value()));
    }

    #[test]
    fn perpendicular_is_orthogonal(v in vector2d(), w in vector3d()) {
        prop_assert_eq!(Vector2d::perpendicular_to(v).dot(v).value(), 0.0);
        prop_assert_eq!(Vector3d::perpendicular_to(w).dot(w).value(), 0.0);
    }

    #[test]
    fn direction_angle_round_trip(a in angle()) {
        let direction: Direction2d<World> = Direction2d::from_angle(a);
        let back = Direction2d::from_angle(direction.to_angle());
        prop_assert!(back.equal_within(Angle::radians(1e-12), direction));
    }
}

#[test]
fn test_length_scenario() {
    let v: Vector2d<Meters, World> = Vector2d::meters(3.0, 4.0);
    assert_eq!(v.length().value(), 5.0);
}

#[test]
fn test_interpolation_scenario() {
    let zero: Vector2d<Meters, World> = Vector2d::zero();
    let v = Vector2d::meters(8.0, 12.0);
    assert_eq!(Vector2d::interpolate_from(zero, v, 0.25), Vector2d::meters(2.0, 3.0));
    assert_eq!(Vector2d::interpolate_from(zero, v, -0.5), Vector2d::meters(-4.0, -6.0));
}

#[test]
fn test_cross_scenario() {
    let first: Vector2d<Meters, World> = Vector2d::meters(2.0, 0.0);
    let second = Vector2d::meters(0.0, 3.0);
    assert_eq!(first.cross(second).value(), 6.0);
    assert_eq!(second.cross(first).value(), -6.0);
    assert_eq!(first.cross(first).value(), 0.0);
}
