use geo_types::Coord;
use geometry_msgs::msg;
use serde::{Deserialize, Serialize};

use crate::cartesian_point::{CartesianPoint2d, NewCartesianPoint2d};

/// A point in 2-dimensional cartesian coordinate space.
///
/// This is the vertex type of [`Box2D`](crate::Box2D) and [`Polygon`](crate::Polygon). Message points convert into it
/// by dropping their `z` coordinate.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point2D {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Copies `x` and `y` of any registered point.
    pub fn from_point<P: CartesianPoint2d + ?Sized>(point: &P) -> Self {
        Self {
            x: point.x().into(),
            y: point.y().into(),
        }
    }
}

crate::register_point_2d!(Point2D, f64, x, y);

impl NewCartesianPoint2d for Point2D {
    fn new(x: f64, y: f64) -> Self {
        Point2D::new(x, y)
    }
}

impl From<&msg::Point> for Point2D {
    fn from(point: &msg::Point) -> Self {
        Self::new(point.x, point.y)
    }
}

impl From<msg::Point> for Point2D {
    fn from(point: msg::Point) -> Self {
        Self::from(&point)
    }
}

impl From<&msg::Point32> for Point2D {
    fn from(point: &msg::Point32) -> Self {
        Self::new(point.x.into(), point.y.into())
    }
}

impl From<msg::Point32> for Point2D {
    fn from(point: msg::Point32) -> Self {
        Self::from(&point)
    }
}

impl From<Point2D> for msg::Point {
    fn from(point: Point2D) -> Self {
        msg::Point {
            x: point.x,
            y: point.y,
            z: 0.0,
        }
    }
}

impl From<Coord<f64>> for Point2D {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.x, coord.y)
    }
}

impl From<geo_types::Point<f64>> for Point2D {
    fn from(point: geo_types::Point<f64>) -> Self {
        Self::from(point.0)
    }
}

impl From<Point2D> for Coord<f64> {
    fn from(point: Point2D) -> Self {
        point.to_geo_coord()
    }
}

impl From<Point2D> for geo_types::Point<f64> {
    fn from(point: Point2D) -> Self {
        point.to_geo_point()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_point() {
        let point = Point2D::new(3.0, 5.0);
        assert_eq!(point.x(), 3.0);
        assert_eq!(point.y(), 5.0);
        assert_eq!(Point2D::default(), Point2D::new(0.0, 0.0));
    }

    #[test]
    fn from_message_point_drops_z() {
        let ros_point = msg::Point {
            x: 1.0,
            y: 2.0,
            z: 0.3,
        };
        assert_eq!(Point2D::from(&ros_point), Point2D::new(1.0, 2.0));
        assert_eq!(Point2D::from_point(&ros_point), Point2D::new(1.0, 2.0));

        let back: msg::Point = Point2D::from(ros_point).into();
        assert_eq!(back.z, 0.0);
    }

    #[test]
    fn from_point32_widens() {
        let point = Point2D::from(msg::Point32 {
            x: 0.1,
            y: -4.5,
            z: 1.0,
        });
        assert_relative_eq!(point.x, 0.1, epsilon = 1e-7);
        assert_eq!(point.y, -4.5);
    }

    #[test]
    fn geo_types_conversions() {
        let point = Point2D::new(-1.0, 8.0);
        let coord: Coord<f64> = point.into();
        assert_eq!(coord, geo_types::coord! { x: -1.0, y: 8.0 });
        assert_eq!(Point2D::from(geo_types::Point(coord)), point);
    }

    #[test]
    fn serde_uses_plain_fields() {
        let json = serde_json::to_string(&Point2D::new(1.0, 2.5)).expect("serializable");
        assert_eq!(json, r#"{"x":1.0,"y":2.5}"#);
    }
}
