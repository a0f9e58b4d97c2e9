//! Linestring is an ordered sequence of points.
//!
//! There is no dedicated linestring type: every slice, array or `Vec` of registered points (see
//! [`CartesianPoint2d`]) is a linestring, so message point sequences can be passed to the algorithms as they are.
//! [`Linestring2D`] is a convenience alias for a sequence of [`Point2D`].
//!
//! A linestring is considered closed when the first and the last points are equal, as in the OGC Simple Feature
//! Access standard.

use crate::cartesian_point::CartesianPoint2d;
use crate::point::Point2D;

/// Linestring made of [`Point2D`] vertices.
pub type Linestring2D = Vec<Point2D>;

/// Ordered sequence of points. See module level documentation for details.
pub trait Linestring {
    /// Type of the points the linestring consists of.
    type Point: CartesianPoint2d;

    /// Iterates over the points of the linestring in order.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;

    /// Number of points.
    fn len(&self) -> usize {
        self.iter_points().count()
    }

    /// Returns true if the linestring has no points.
    fn is_empty(&self) -> bool {
        self.iter_points().next().is_none()
    }

    /// Returns true if the linestring has at least two points and the last point equals the first one.
    fn is_closed(&self) -> bool {
        let mut iter = self.iter_points();
        let Some(first) = iter.next() else {
            return false;
        };

        match iter.last() {
            Some(last) => first.equal(last),
            None => false,
        }
    }
}

impl<P: CartesianPoint2d> Linestring for [P] {
    type Point = P;

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        self.iter()
    }

    fn len(&self) -> usize {
        <[P]>::len(self)
    }
}

impl<P: CartesianPoint2d, const N: usize> Linestring for [P; N] {
    type Point = P;

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        self.iter()
    }

    fn len(&self) -> usize {
        N
    }
}

impl<P: CartesianPoint2d> Linestring for Vec<P> {
    type Point = P;

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        self.iter()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}
