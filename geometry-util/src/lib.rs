//! Adapters that let `geometry_msgs` message types and a few small value types be used with the algorithms of the
//! [`geo`] crate.
//!
//! The crate defines a point concept ([`CartesianPoint2d`]) and registers both its own [`Point2D`] and the message
//! point types with it. Anything registered as a point can then be used as a linestring (any slice or `Vec` of
//! points), a polygon ring, or a box corner, and passed to the functions in [`algorithm`]:
//!
//! ```
//! use geometry_msgs::msg;
//! use geometry_util::algorithm::{area, disjoint, intersects};
//! use geometry_util::{Box2D, Point2D};
//!
//! let b = Box2D::new(Point2D::new(0.0, 0.0), Point2D::new(3.0, 3.0));
//! assert_eq!(area(&b), 9.0);
//!
//! let p = msg::Point { x: 2.0, y: 2.0, z: 0.3 };
//! assert!(!disjoint(&b, &p));
//!
//! let l0 = vec![msg::Point { x: 0.0, y: 2.0, z: 0.0 }, msg::Point { x: 2.0, y: 2.0, z: 0.0 }];
//! let l1 = vec![Point2D::new(1.0, 0.0), Point2D::new(1.0, 4.0)];
//! assert!(intersects(&l0, &l1));
//! ```
//!
//! Own types can be registered with [`register_point_2d!`].

pub mod algorithm;
mod box2d;
mod cartesian_point;
mod error;
mod geo_adapter;
mod linestring;
mod msg;
mod point;
mod polygon;
mod register;

pub use geo_types;

pub use box2d::Box2D;
pub use cartesian_point::{CartesianPoint2d, NewCartesianPoint2d};
pub use error::GeometryUtilError;
pub use geo_adapter::ToGeo;
pub use linestring::{Linestring, Linestring2D};
pub use point::Point2D;
pub use polygon::{to_polygon, Polygon};
