use geometry_msgs::msg;
use serde::{Deserialize, Serialize};

use crate::cartesian_point::CartesianPoint2d;
use crate::error::GeometryUtilError;
use crate::linestring::Linestring;
use crate::point::Point2D;

/// Polygon geometry. Polygon consists of one exterior ring, and zero or more interior rings (holes).
///
/// Rings are stored as they were given: they are not closed or reoriented automatically. Use [`Polygon::close`] to
/// append the missing closing points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon<P = Point2D> {
    exterior: Vec<P>,
    interiors: Vec<Vec<P>>,
}

impl<P> Default for Polygon<P> {
    fn default() -> Self {
        Self {
            exterior: Vec::new(),
            interiors: Vec::new(),
        }
    }
}

impl<P> Polygon<P> {
    /// Creates a new polygon.
    pub fn new(exterior: Vec<P>, interiors: Vec<Vec<P>>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    /// Exterior ring of the polygon.
    pub fn exterior(&self) -> &[P] {
        &self.exterior
    }

    /// Mutable access to the exterior ring.
    pub fn exterior_mut(&mut self) -> &mut Vec<P> {
        &mut self.exterior
    }

    /// Interior rings of the polygon.
    pub fn interiors(&self) -> &[Vec<P>] {
        &self.interiors
    }

    /// Adds a hole to the polygon.
    pub fn push_interior(&mut self, ring: Vec<P>) {
        self.interiors.push(ring);
    }

    /// Iterates over all rings of the polygon starting with the exterior one.
    pub fn iter_rings(&self) -> impl Iterator<Item = &'_ [P]> {
        std::iter::once(self.exterior.as_slice()).chain(self.interiors.iter().map(Vec::as_slice))
    }

    /// Returns true if the polygon has no exterior points.
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }
}

impl<P: CartesianPoint2d + Clone> Polygon<P> {
    /// Returns true if the exterior ring is closed and every non-empty interior ring ends with its first point.
    ///
    /// A polygon without exterior points is not closed, same as an empty [`Linestring`].
    pub fn is_closed(&self) -> bool {
        self.exterior.is_closed()
            && self
                .interiors
                .iter()
                .filter(|ring| !ring.is_empty())
                .all(|ring| ring.is_closed())
    }

    /// Appends the first point of every open ring to its end.
    pub fn close(&mut self) {
        for ring in std::iter::once(&mut self.exterior).chain(self.interiors.iter_mut()) {
            close_ring(ring);
        }
    }
}

fn close_ring<P: CartesianPoint2d + Clone>(ring: &mut Vec<P>) {
    if ring.is_empty() || ring.is_closed() {
        return;
    }

    let first = ring[0].clone();
    ring.push(first);
}

/// Copies a sequence of points into the exterior ring of a new polygon.
///
/// Only `x` and `y` of each point are taken, in order. The ring is not closed and no validation is done, so the result
/// may be degenerate (e.g. two points only).
pub fn to_polygon<T: CartesianPoint2d>(linestring: &[T]) -> Polygon<Point2D> {
    if !linestring.is_empty() && linestring.len() < 3 {
        log::debug!(
            "Creating a degenerate polygon from {} point(s)",
            linestring.len()
        );
    }

    Polygon {
        exterior: linestring.iter().map(Point2D::from_point).collect(),
        interiors: vec![],
    }
}

impl From<&msg::Polygon> for Polygon<Point2D> {
    fn from(polygon: &msg::Polygon) -> Self {
        to_polygon(&polygon.points)
    }
}

impl From<msg::Polygon> for Polygon<Point2D> {
    fn from(polygon: msg::Polygon) -> Self {
        Self::from(&polygon)
    }
}

impl From<&Polygon<Point2D>> for msg::Polygon {
    /// Converts the exterior ring into a message polygon. Coordinates are narrowed to `f32`, holes are dropped and
    /// the closing point is removed since message polygons are implicitly closed.
    fn from(polygon: &Polygon<Point2D>) -> Self {
        let ring = polygon.exterior();
        let ring = if ring.len() > 1 && ring.is_closed() {
            &ring[..ring.len() - 1]
        } else {
            ring
        };

        if !polygon.interiors().is_empty() {
            log::trace!(
                "Dropping {} interior ring(s) in polygon message conversion",
                polygon.interiors().len()
            );
        }

        msg::Polygon {
            points: ring
                .iter()
                .map(|p| msg::Point32 {
                    x: p.x as f32,
                    y: p.y as f32,
                    z: 0.0,
                })
                .collect(),
        }
    }
}

impl TryFrom<geo_types::Geometry<f64>> for Polygon<Point2D> {
    type Error = GeometryUtilError;

    fn try_from(geometry: geo_types::Geometry<f64>) -> Result<Self, Self::Error> {
        match geometry {
            geo_types::Geometry::Polygon(polygon) => Ok(Self::from(polygon)),
            geo_types::Geometry::Rect(rect) => Ok(Self::from(rect.to_polygon())),
            geo_types::Geometry::Triangle(triangle) => Ok(Self::from(triangle.to_polygon())),
            other => {
                let kind = geometry_kind(&other);
                log::debug!("Cannot convert {kind} into a polygon");
                Err(GeometryUtilError::Conversion(format!(
                    "expected a polygonal geometry, got {kind}"
                )))
            }
        }
    }
}

fn geometry_kind(geometry: &geo_types::Geometry<f64>) -> &'static str {
    match geometry {
        geo_types::Geometry::Point(_) => "Point",
        geo_types::Geometry::Line(_) => "Line",
        geo_types::Geometry::LineString(_) => "LineString",
        geo_types::Geometry::MultiPoint(_) => "MultiPoint",
        geo_types::Geometry::MultiLineString(_) => "MultiLineString",
        geo_types::Geometry::MultiPolygon(_) => "MultiPolygon",
        geo_types::Geometry::GeometryCollection(_) => "GeometryCollection",
        _ => "polygonal geometry",
    }
}

impl From<geo_types::Polygon<f64>> for Polygon<Point2D> {
    fn from(polygon: geo_types::Polygon<f64>) -> Self {
        let (exterior, interiors) = polygon.into_inner();
        Self {
            exterior: exterior.into_iter().map(Point2D::from).collect(),
            interiors: interiors
                .into_iter()
                .map(|ring| ring.into_iter().map(Point2D::from).collect())
                .collect(),
        }
    }
}
