//! Geometric primitives package.
//!
//! Vectors, directions, points, axes, planes, frames and sketch planes in
//! 2D and 3D. Every type is tagged with its units `U` and the coordinate
//! system `C` it is expressed in; frames and sketch planes carry a third
//! tag for the local coordinates they define.

// Raw coordinate algebra
mod mat;
mod xy;
mod xyz;

pub(crate) use mat::Mat;
pub(crate) use xy::XY;
pub(crate) use xyz::XYZ;

// 2D
mod ax2d;
mod dir2d;
mod frame2d;
mod pnt2d;
mod vec2d;

pub use ax2d::Axis2d;
pub use dir2d::Direction2d;
pub use frame2d::Frame2d;
pub use pnt2d::Point2d;
pub use vec2d::Vector2d;

// 3D
mod ax1;
mod dir;
mod frame3d;
mod pln;
mod pnt;
mod sketch_plane;
mod vec;

pub use ax1::Axis3d;
pub use dir::Direction3d;
pub use frame3d::Frame3d;
pub use pln::Plane3d;
pub use pnt::Point3d;
pub use sketch_plane::SketchPlane3d;
pub use vec::Vector3d;
