use approx::assert_relative_eq;
use cascade_geom::units::{Meters, Pixels};
use cascade_geom::{
    Direction2d, Direction3d, Length, Point2d, Point3d, Quantity, Record2d, Record3d, Vector2d, Vector3d,
};

enum World {}
enum Screen {}

#[test]
fn test_tuples_convert_units() {
    let p: Point2d<Meters, World> = Point2d::from_tuple(Length::inches, (10.0, 20.0));
    assert_relative_eq!(p.x_coordinate().in_meters(), 0.254, epsilon = 1e-15);
    assert_relative_eq!(p.y_coordinate().in_meters(), 0.508, epsilon = 1e-15);

    let (x, y) = p.to_tuple(Length::in_inches);
    assert_relative_eq!(x, 10.0, epsilon = 1e-12);
    assert_relative_eq!(y, 20.0, epsilon = 1e-12);

    let v: Vector3d<Meters, World> = Vector3d::from_tuple(Length::centimeters, (100.0, 0.0, -50.0));
    let (x, y, z) = v.to_tuple(Length::in_meters);
    assert_relative_eq!(x, 1.0, epsilon = 1e-15);
    assert_eq!(y, 0.0);
    assert_relative_eq!(z, -0.5, epsilon = 1e-15);
}

#[test]
fn test_records_convert_units() {
    let record = Record2d { x: 640.0, y: 480.0 };
    let v: Vector2d<Pixels, Screen> = Vector2d::from_record(Quantity::<Pixels>::pixels, record);
    assert_eq!(v, Vector2d::pixels(640.0, 480.0));
    assert_eq!(v.to_record(Quantity::<Pixels>::in_pixels), record);

    let record = Record3d { x: 1.0, y: 2.0, z: 3.0 };
    let p: Point3d<Meters, World> = Point3d::from_record(Length::millimeters, record);
    assert_relative_eq!(p.z_coordinate().in_meters(), 0.003, epsilon = 1e-15);
    let back = p.to_record(Length::in_millimeters);
    assert_relative_eq!(back.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(back.y, 2.0, epsilon = 1e-12);
    assert_relative_eq!(back.z, 3.0, epsilon = 1e-12);
}

#[test]
fn test_record_tuple_conversions() {
    let record: Record3d = (1.0, 2.0, 3.0).into();
    assert_eq!(record, Record3d { x: 1.0, y: 2.0, z: 3.0 });
    let tuple: (f64, f64) = Record2d { x: 4.0, y: 5.0 }.into();
    assert_eq!(tuple, (4.0, 5.0));
}

#[test]
fn test_serialize_as_plain_records() {
    let p: Point2d<Meters, World> = Point2d::meters(1.5, -2.0);
    assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"x":1.5,"y":-2.0}"#);
    let back: Point2d<Meters, World> = serde_json::from_str(r#"{"x":1.5,"y":-2.0}"#).unwrap();
    assert_eq!(back, p);

    let length = Length::meters(2.5);
    assert_eq!(serde_json::to_string(&length).unwrap(), "2.5");
}

#[test]
fn test_direction_deserialization_normalizes() {
    let d: Direction2d<World> = serde_json::from_str(r#"{"x":3.0,"y":4.0}"#).unwrap();
    assert_relative_eq!(d.x_component(), 0.6, epsilon = 1e-15);
    assert_relative_eq!(d.y_component(), 0.8, epsilon = 1e-15);

    let d: Direction3d<World> = serde_json::from_str(r#"{"x":0.0,"y":0.0,"z":-2.0}"#).unwrap();
    assert_eq!(d, Direction3d::negative_z());

    let zero = serde_json::from_str::<Direction2d<World>>(r#"{"x":0.0,"y":0.0}"#);
    assert!(zero.is_err());
}

#[test]
fn test_direction_to_record() {
    let d: Direction2d<World> = Direction2d::y();
    assert_eq!(Record2d::from(d), Record2d { x: 0.0, y: 1.0 });
}
