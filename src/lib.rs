//! cascade-geom: unit-aware 2D/3D geometric primitives.
//!
//! Every entity carries two zero-sized tags: the units its components are
//! measured in and the coordinate system they are expressed in. Mixing
//! meters with pixels, or world coordinates with a local frame, is a type
//! error rather than a silent bug.
//!
//! ```
//! use cascade_geom::gp::{Point2d, Vector2d};
//! use cascade_geom::units::{Length, Meters};
//!
//! enum World {}
//!
//! let p1: Point2d<Meters, World> = Point2d::meters(1.0, 1.0);
//! let p2 = Point2d::meters(4.0, 5.0);
//! let v = Vector2d::from_points(p1, p2);
//! assert_eq!(v.length(), Length::meters(5.0));
//! ```

/// Implements `Clone`, `Copy`, `PartialEq` and `Debug` for a phantom-tagged
/// value type without placing any bounds on the tag parameters.
macro_rules! impl_value_traits {
    ($name:ident<$($param:ident),+> { $($field:ident),+ $(,)? }) => {
        impl<$($param),+> Clone for $name<$($param),+> {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$($param),+> Copy for $name<$($param),+> {}

        impl<$($param),+> PartialEq for $name<$($param),+> {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                true $(&& self.$field == other.$field)+
            }
        }

        impl<$($param),+> std::fmt::Debug for $name<$($param),+> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    $(.field(stringify!($field), &self.$field))+
                    .finish()
            }
        }
    };
}

pub mod precision;
pub mod units;
pub mod interop;
pub mod gp;
pub mod curve;

// Re-exports for convenience
pub use units::{Angle, Area, Duration, Length, Quantity};
pub use gp::{
    Axis2d, Axis3d, Direction2d, Direction3d, Frame2d, Frame3d, Plane3d, Point2d, Point3d,
    SketchPlane3d, Vector2d, Vector3d,
};
pub use curve::{
    ArcLengthParameterized, CubicSpline2d, CubicSpline3d, Curve, Nondegenerate, Polyline2d, Polyline3d,
    QuadraticSpline2d, QuadraticSpline3d,
};
pub use interop::{Record2d, Record3d};

/// Result type for fallible geometry operations
pub type Result<T> = std::result::Result<T, GeomError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeomError {
    #[error("Degenerate curve: all control points coincide")]
    DegenerateCurve,

    #[error("Invalid knot vector: expected {expected} knots, found {found}")]
    InvalidKnots { expected: usize, found: usize },

    #[error("Invalid knot vector: knots must be non-decreasing")]
    UnsortedKnots,

    #[error("Zero-length record cannot define a direction")]
    ZeroDirection,
}
