//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryUtilError {
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
    /// Box corners are not ordered as `min <= max` on both axes.
    #[error("invalid box: min corner ({min_x}, {min_y}) is not below max corner ({max_x}, {max_y})")]
    InvalidBox {
        /// X coordinate of the given min corner.
        min_x: f64,
        /// Y coordinate of the given min corner.
        min_y: f64,
        /// X coordinate of the given max corner.
        max_x: f64,
        /// Y coordinate of the given max corner.
        max_y: f64,
    },
}
