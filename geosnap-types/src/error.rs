//! Error type used by the crate.

use crate::geometry::GeometryKind;
use crate::path::PathLocator;
use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoSnapTypesError {
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
    /// A string could not be parsed as a [`PathLocator`].
    #[error("invalid path locator: {0:?}")]
    InvalidPath(String),
    /// The path does not address a vertex slot of the geometry.
    #[error("path {path:?} does not match {kind:?} geometry")]
    PathMismatch {
        /// Path that was given.
        path: PathLocator,
        /// Kind of the geometry the path was applied to.
        kind: GeometryKind,
    },
}
