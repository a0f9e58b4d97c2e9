use geo::BoundingRect;

use crate::box2d::Box2D;
use crate::geo_adapter::ToGeo;
use crate::point::Point2D;

/// Smallest axis aligned box containing the geometry, or `None` if the geometry has no points.
pub fn envelope<G: ToGeo + ?Sized>(geometry: &G) -> Option<Box2D> {
    let rect = geometry.to_geo().bounding_rect()?;
    Some(Box2D::new(Point2D::from(rect.min()), Point2D::from(rect.max())))
}
