//! Geometry algorithms.
//!
//! All computations are done by the [`geo`] crate: every function converts its arguments with [`ToGeo`](crate::ToGeo)
//! and dispatches to the corresponding `geo` trait. Any mix of registered points, linestrings, boxes and polygons can
//! be passed, e.g. a [`Box2D`](crate::Box2D) and a `geometry_msgs::msg::Point`.

mod area;
mod convex_hull;
mod envelope;
mod intersects;

pub use area::{area, signed_area};
pub use convex_hull::convex_hull;
pub use envelope::envelope;
pub use intersects::{disjoint, intersects};
