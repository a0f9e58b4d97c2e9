//! `geometry_msgs/msg` definitions.

use serde::{Deserialize, Serialize};

/// Position in free space (`geometry_msgs/msg/Point`).
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

/// Single precision position in free space (`geometry_msgs/msg/Point32`).
///
/// Mostly used as the vertex type of [`Polygon`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point32 {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
    /// Z coordinate.
    pub z: f32,
}

/// Polygon given as a list of vertices (`geometry_msgs/msg/Polygon`).
///
/// The last vertex is implicitly connected to the first one.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Vertices of the polygon.
    pub points: Vec<Point32>,
}
