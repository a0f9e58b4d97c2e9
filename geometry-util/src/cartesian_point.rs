use geo_types::{coord, Coord};
use num_traits::Num;

/// Point in 2d cartesian coordinates.
///
/// Implementing this trait is what makes a type usable as a point by the rest of the crate: as a linestring vertex,
/// a polygon vertex, or an argument to the functions of [`algorithm`](crate::algorithm). The implementation only
/// reads the coordinates, so foreign structs can be registered as they are. For structs with plain coordinate fields
/// use [`register_point_2d!`](crate::register_point_2d).
pub trait CartesianPoint2d {
    /// Coordinate type.
    type Num: Num + Copy + PartialOrd + Into<f64>;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Returns true if both coordinates of the points are exactly equal.
    fn equal(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }

    /// Squared euclidean distance between two points.
    fn distance_sq(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Self::Num {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        dx * dx + dy * dy
    }

    /// Copies the coordinates into a [`geo_types::Coord`].
    fn to_geo_coord(&self) -> Coord<f64> {
        coord! { x: self.x().into(), y: self.y().into() }
    }

    /// Copies the coordinates into a [`geo_types::Point`].
    fn to_geo_point(&self) -> geo_types::Point<f64> {
        geo_types::Point(self.to_geo_coord())
    }
}

/// Point that can be constructed from its coordinates.
pub trait NewCartesianPoint2d<Num = f64>: CartesianPoint2d<Num = Num> {
    /// Creates a new point.
    fn new(x: Num, y: Num) -> Self;
}

impl<T: CartesianPoint2d + ?Sized> CartesianPoint2d for &T {
    type Num = T::Num;

    fn x(&self) -> Self::Num {
        (**self).x()
    }

    fn y(&self) -> Self::Num {
        (**self).y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point2D;
    use geometry_msgs::msg;

    #[test]
    fn distance_sq() {
        let a = Point2D::new(1.0, 1.0);
        let b = Point2D::new(4.0, 5.0);
        assert_eq!(a.distance_sq(&b), 25.0);
        assert_eq!(b.distance_sq(&a), 25.0);
        assert_eq!(a.distance_sq(&a), 0.0);
    }

    #[test]
    fn equal_ignores_z_of_message_points() {
        let a = msg::Point {
            x: 1.0,
            y: 2.0,
            z: 0.0,
        };
        let b = msg::Point {
            x: 1.0,
            y: 2.0,
            z: 7.0,
        };
        assert!(a.equal(&b));
        assert!(!a.equal(&msg::Point { x: 1.5, ..b }));
    }

    #[test]
    fn references_are_points() {
        fn sum<P: CartesianPoint2d<Num = f64>>(p: P) -> f64 {
            p.x() + p.y()
        }

        let p = Point2D::new(1.5, 2.0);
        assert_eq!(sum(&p), 3.5);
        assert_eq!(sum(p), 3.5);
    }
}
