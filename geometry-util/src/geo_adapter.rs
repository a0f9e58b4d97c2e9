//! Conversion of the crate geometries into [`geo_types`] geometries, which the [`geo`] algorithms operate on.

use geo_types::{Coord, CoordNum, Geometry, LineString};
use geometry_msgs::msg;

use crate::box2d::Box2D;
use crate::cartesian_point::{CartesianPoint2d, NewCartesianPoint2d};
use crate::polygon::Polygon;

/// Geometry that can be handed to the [`geo`] algorithms.
///
/// Implemented for every registered point (see [`register_point_2d!`](crate::register_point_2d)), for slices,
/// arrays and `Vec`s of registered points (as linestrings), for [`Box2D`], [`Polygon`] and message polygons.
pub trait ToGeo {
    /// Copies the geometry into its [`geo_types`] counterpart.
    fn to_geo(&self) -> Geometry<f64>;
}

fn line_string<'a, P: CartesianPoint2d + 'a>(points: impl Iterator<Item = &'a P>) -> LineString<f64> {
    LineString(points.map(CartesianPoint2d::to_geo_coord).collect())
}

impl<P: CartesianPoint2d> ToGeo for [P] {
    fn to_geo(&self) -> Geometry<f64> {
        Geometry::LineString(line_string(self.iter()))
    }
}

impl<P: CartesianPoint2d, const N: usize> ToGeo for [P; N] {
    fn to_geo(&self) -> Geometry<f64> {
        self.as_slice().to_geo()
    }
}

impl<P: CartesianPoint2d> ToGeo for Vec<P> {
    fn to_geo(&self) -> Geometry<f64> {
        self.as_slice().to_geo()
    }
}

impl ToGeo for Box2D {
    fn to_geo(&self) -> Geometry<f64> {
        Geometry::Rect(geo_types::Rect::new(
            self.min_corner.to_geo_coord(),
            self.max_corner.to_geo_coord(),
        ))
    }
}

impl<P: CartesianPoint2d> ToGeo for Polygon<P> {
    fn to_geo(&self) -> Geometry<f64> {
        Geometry::Polygon(geo_types::Polygon::new(
            line_string(self.exterior().iter()),
            self.interiors()
                .iter()
                .map(|ring| line_string(ring.iter()))
                .collect(),
        ))
    }
}

impl ToGeo for msg::Polygon {
    fn to_geo(&self) -> Geometry<f64> {
        Geometry::Polygon(geo_types::Polygon::new(
            line_string(self.points.iter()),
            vec![],
        ))
    }
}

impl ToGeo for Geometry<f64> {
    fn to_geo(&self) -> Geometry<f64> {
        self.clone()
    }
}

impl<T: CoordNum + Into<f64>> CartesianPoint2d for Coord<T> {
    type Num = T;

    fn x(&self) -> Self::Num {
        self.x
    }

    fn y(&self) -> Self::Num {
        self.y
    }
}

impl<T: CoordNum + Into<f64>> NewCartesianPoint2d<T> for Coord<T> {
    fn new(x: T, y: T) -> Self {
        geo_types::coord!(x: x, y: y)
    }
}

impl<T: CoordNum + Into<f64>> ToGeo for Coord<T> {
    fn to_geo(&self) -> Geometry<f64> {
        Geometry::Point(self.to_geo_point())
    }
}

impl<T: CoordNum + Into<f64>> CartesianPoint2d for geo_types::Point<T> {
    type Num = T;

    fn x(&self) -> Self::Num {
        self.0.x
    }

    fn y(&self) -> Self::Num {
        self.0.y
    }
}

impl<T: CoordNum + Into<f64>> NewCartesianPoint2d<T> for geo_types::Point<T> {
    fn new(x: T, y: T) -> Self {
        geo_types::point!(x: x, y: y)
    }
}

impl<T: CoordNum + Into<f64>> ToGeo for geo_types::Point<T> {
    fn to_geo(&self) -> Geometry<f64> {
        Geometry::Point(self.to_geo_point())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point2D;
    use geo_types::{coord, line_string, point, polygon};

    #[test]
    fn linestring_of_message_points() {
        let line = vec![
            msg::Point {
                x: 0.0,
                y: 2.0,
                z: 1.0,
            },
            msg::Point {
                x: 2.0,
                y: 2.0,
                z: 1.0,
            },
        ];
        assert_eq!(
            line.to_geo(),
            Geometry::LineString(line_string![(x: 0.0, y: 2.0), (x: 2.0, y: 2.0)])
        );
        assert_eq!(line[..1].to_geo(), Geometry::LineString(line_string![(x: 0.0, y: 2.0)]));
    }

    #[test]
    fn box_becomes_rect() {
        let bbox = Box2D::new(Point2D::new(0.0, 1.0), Point2D::new(3.0, 4.0));
        let Geometry::Rect(rect) = bbox.to_geo() else {
            panic!("box must convert into a rect");
        };
        assert_eq!(rect.min(), coord! { x: 0.0, y: 1.0 });
        assert_eq!(rect.max(), coord! { x: 3.0, y: 4.0 });
    }

    #[test]
    fn polygon_ring_is_closed_by_geo() {
        let polygon = Polygon::new(
            vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(1.0, 0.0),
                Point2D::new(1.0, 1.0),
            ],
            vec![],
        );
        assert_eq!(
            polygon.to_geo(),
            Geometry::Polygon(polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0)])
        );
    }

    #[test]
    fn geo_points_are_points() {
        let p = point!(x: 1.0f32, y: 2.0f32);
        assert_eq!(CartesianPoint2d::x(&p), 1.0);
        assert_eq!(CartesianPoint2d::y(&p), 2.0);
        assert_eq!(p.to_geo(), Geometry::Point(point!(x: 1.0, y: 2.0)));

        let c: Coord<f64> = NewCartesianPoint2d::new(3.0, 4.0);
        assert_eq!(c.distance_sq(&coord! { x: 0.0, y: 0.0 }), 25.0);
    }
}
