use serde::{Deserialize, Serialize};

use crate::cartesian_point::CartesianPoint2d;
use crate::error::GeometryUtilError;
use crate::point::Point2D;

/// Axis aligned box given by its min and max corners.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Box2D {
    /// Corner with the smallest coordinates.
    pub min_corner: Point2D,
    /// Corner with the largest coordinates.
    pub max_corner: Point2D,
}

impl Box2D {
    /// Creates a box from two corners.
    ///
    /// Each corner can be either a [`Point2D`] or a message point. The corners are stored as given, use
    /// [`Box2D::try_new`] to check their order.
    pub fn new(min_corner: impl Into<Point2D>, max_corner: impl Into<Point2D>) -> Self {
        Self {
            min_corner: min_corner.into(),
            max_corner: max_corner.into(),
        }
    }

    /// Same as [`Box2D::new`], but fails if `min_corner` is above `max_corner` on any axis, or if any coordinate is
    /// NaN.
    pub fn try_new(
        min_corner: impl Into<Point2D>,
        max_corner: impl Into<Point2D>,
    ) -> Result<Self, GeometryUtilError> {
        let bbox = Self::new(min_corner, max_corner);
        let ordered =
            bbox.min_corner.x <= bbox.max_corner.x && bbox.min_corner.y <= bbox.max_corner.y;
        if !ordered {
            log::debug!("Rejected box with unordered corners: {bbox:?}");
            return Err(GeometryUtilError::InvalidBox {
                min_x: bbox.min_corner.x,
                min_y: bbox.min_corner.y,
                max_x: bbox.max_corner.x,
                max_y: bbox.max_corner.y,
            });
        }

        Ok(bbox)
    }

    /// Smallest box containing all the given points. Returns `None` if the iterator is empty.
    pub fn from_points<'a, P: CartesianPoint2d + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = Point2D::from_point(points.next()?);
        let mut min_corner = first;
        let mut max_corner = first;

        for p in points {
            let p = Point2D::from_point(p);
            min_corner.x = min_corner.x.min(p.x);
            min_corner.y = min_corner.y.min(p.y);
            max_corner.x = max_corner.x.max(p.x);
            max_corner.y = max_corner.y.max(p.y);
        }

        Some(Self {
            min_corner,
            max_corner,
        })
    }

    /// Size of the box along the x axis.
    pub fn width(&self) -> f64 {
        self.max_corner.x - self.min_corner.x
    }

    /// Size of the box along the y axis.
    pub fn height(&self) -> f64 {
        self.max_corner.y - self.min_corner.y
    }

    /// Center point of the box.
    pub fn center(&self) -> Point2D {
        Point2D::new(
            (self.min_corner.x + self.max_corner.x) / 2.0,
            (self.min_corner.y + self.max_corner.y) / 2.0,
        )
    }

    /// Returns true if the point is inside the box or on its boundary.
    pub fn contains(&self, point: &impl CartesianPoint2d) -> bool {
        let p = Point2D::from_point(point);
        self.min_corner.x <= p.x
            && self.max_corner.x >= p.x
            && self.min_corner.y <= p.y
            && self.max_corner.y >= p.y
    }

    /// Smallest box containing both boxes.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            min_corner: Point2D::new(
                self.min_corner.x.min(other.min_corner.x),
                self.min_corner.y.min(other.min_corner.y),
            ),
            max_corner: Point2D::new(
                self.max_corner.x.max(other.max_corner.x),
                self.max_corner.y.max(other.max_corner.y),
            ),
        }
    }

    /// Corners of the box as a closed clockwise ring, starting and ending at the min corner.
    pub fn into_ring(self) -> [Point2D; 5] {
        [
            self.min_corner,
            Point2D::new(self.min_corner.x, self.max_corner.y),
            self.max_corner,
            Point2D::new(self.max_corner.x, self.min_corner.y),
            self.min_corner,
        ]
    }
}
