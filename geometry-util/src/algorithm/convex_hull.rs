use geo::{ConvexHull, CoordsIter};

use crate::geo_adapter::ToGeo;
use crate::point::Point2D;
use crate::polygon::Polygon;

/// Returns the convex hull of all the points of the geometry.
///
/// The hull exterior ring is oriented counter-clockwise and closed. Collinear points on the hull boundary are not
/// included. For an empty geometry the result is an empty polygon.
pub fn convex_hull<G: ToGeo + ?Sized>(geometry: &G) -> Polygon<Point2D> {
    let points: geo_types::MultiPoint<f64> = geometry
        .to_geo()
        .coords_iter()
        .map(geo_types::Point::from)
        .collect();

    Polygon::from(points.convex_hull())
}
