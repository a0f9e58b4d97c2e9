/// Registers a struct with two coordinate fields as a 2d cartesian point.
///
/// The macro implements [`CartesianPoint2d`](crate::CartesianPoint2d) by reading the named fields, and
/// [`ToGeo`](crate::ToGeo) so the type can be passed to the [`algorithm`](crate::algorithm) functions. Any other
/// fields of the struct (e.g. `z` of a 3d message point) are ignored.
///
/// ```
/// use geometry_util::algorithm::intersects;
/// use geometry_util::{register_point_2d, Box2D, CartesianPoint2d, Point2D};
///
/// struct Waypoint {
///     east: f64,
///     north: f64,
///     heading: f64,
/// }
///
/// register_point_2d!(Waypoint, f64, east, north);
///
/// let wp = Waypoint { east: 1.0, north: 2.0, heading: 0.5 };
/// assert_eq!(wp.y(), 2.0);
///
/// let area = Box2D::new(Point2D::new(0.0, 0.0), Point2D::new(5.0, 5.0));
/// assert!(intersects(&area, &wp));
/// assert!(intersects(&area, &vec![wp, Waypoint { east: 9.0, north: 9.0, heading: 0.0 }]));
/// ```
///
/// Tuple structs are registered with field indices: `register_point_2d!(Xy, f32, 0, 1)`.
#[macro_export]
macro_rules! register_point_2d {
    ($point:ty, $num:ty, $x:tt, $y:tt) => {
        impl $crate::CartesianPoint2d for $point {
            type Num = $num;

            fn x(&self) -> $num {
                self.$x
            }

            fn y(&self) -> $num {
                self.$y
            }
        }

        impl $crate::ToGeo for $point {
            fn to_geo(&self) -> $crate::geo_types::Geometry<f64> {
                $crate::geo_types::Geometry::Point($crate::CartesianPoint2d::to_geo_point(self))
            }
        }
    };
}
