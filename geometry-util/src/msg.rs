//! Registration of the `geometry_msgs` point types.

use geometry_msgs::msg;

use crate::cartesian_point::NewCartesianPoint2d;
use crate::register_point_2d;

register_point_2d!(msg::Point, f64, x, y);
register_point_2d!(msg::Point32, f32, x, y);

impl NewCartesianPoint2d for msg::Point {
    fn new(x: f64, y: f64) -> Self {
        msg::Point { x, y, z: 0.0 }
    }
}

impl NewCartesianPoint2d<f32> for msg::Point32 {
    fn new(x: f32, y: f32) -> Self {
        msg::Point32 { x, y, z: 0.0 }
    }
}
