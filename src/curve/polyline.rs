//! Polylines: the output of curve approximation.

use std::fmt;

use crate::gp::{Point2d, Point3d};
use crate::units::Quantity;

/// A chain of straight segments through a list of 2D vertices.
pub struct Polyline2d<U, C> {
    vertices: Vec<Point2d<U, C>>,
}

/// A chain of straight segments through a list of 3D vertices.
pub struct Polyline3d<U, C> {
    vertices: Vec<Point3d<U, C>>,
}

macro_rules! impl_polyline {
    ($name:ident, $point:ident) => {
        impl<U, C> Clone for $name<U, C> {
            fn clone(&self) -> Self {
                Self { vertices: self.vertices.clone() }
            }
        }

        impl<U, C> PartialEq for $name<U, C> {
            fn eq(&self, other: &Self) -> bool {
                self.vertices == other.vertices
            }
        }

        impl<U, C> fmt::Debug for $name<U, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.vertices).finish()
            }
        }

        impl<U, C> $name<U, C> {
            /// Creates a polyline through the given vertices, in order.
            #[inline]
            pub fn from_vertices(vertices: Vec<$point<U, C>>) -> Self {
                Self { vertices }
            }

            /// Returns the vertices.
            #[inline]
            pub fn vertices(&self) -> &[$point<U, C>] {
                &self.vertices
            }

            /// Consecutive vertex pairs. Empty for fewer than two vertices.
            pub fn segments(&self) -> Vec<($point<U, C>, $point<U, C>)> {
                self.vertices.windows(2).map(|pair| (pair[0], pair[1])).collect()
            }

            /// Sum of the segment lengths.
            pub fn length(&self) -> Quantity<U> {
                self.vertices
                    .windows(2)
                    .fold(Quantity::zero(), |total, pair| total + pair[0].distance_from(pair[1]))
            }

            /// First vertex, or None for an empty polyline.
            #[inline]
            pub fn start_point(&self) -> Option<$point<U, C>> {
                self.vertices.first().copied()
            }

            /// Last vertex, or None for an empty polyline.
            #[inline]
            pub fn end_point(&self) -> Option<$point<U, C>> {
                self.vertices.last().copied()
            }
        }
    };
}

impl_polyline!(Polyline2d, Point2d);
impl_polyline!(Polyline3d, Point3d);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Length, Meters};

    enum World {}

    #[test]
    fn test_length_and_segments() {
        let polyline: Polyline2d<Meters, World> = Polyline2d::from_vertices(vec![
            Point2d::meters(0.0, 0.0),
            Point2d::meters(3.0, 4.0),
            Point2d::meters(3.0, 6.0),
        ]);
        assert_eq!(polyline.length(), Length::meters(7.0));
        assert_eq!(polyline.segments().len(), 2);
        assert_eq!(polyline.start_point(), Some(Point2d::meters(0.0, 0.0)));
        assert_eq!(polyline.end_point(), Some(Point2d::meters(3.0, 6.0)));
    }

    #[test]
    fn test_empty() {
        let polyline: Polyline3d<Meters, World> = Polyline3d::from_vertices(Vec::new());
        assert_eq!(polyline.length(), Length::zero());
        assert!(polyline.segments().is_empty());
        assert_eq!(polyline.start_point(), None);
    }
}
