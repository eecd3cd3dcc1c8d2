//! Error types used by the crate.

use crate::feature::FeatureId;
use geosnap_types::error::GeoSnapTypesError;
use thiserror::Error;

/// Geosnap error type.
///
/// Snapping itself never fails, these errors come from applying a snap result to the feature store and from reading
/// configuration.
#[derive(Debug, Error)]
pub enum GeoSnapError {
    /// Feature with the given id is not in the store.
    #[error("feature {0} not found")]
    FeatureNotFound(FeatureId),
    /// Geometry error, e.g. a path that does not address a vertex of the feature.
    #[error(transparent)]
    Geometry(#[from] GeoSnapTypesError),
    /// Options document could not be parsed.
    #[error("invalid snap options: {0}")]
    Options(#[from] serde_json::Error),
}
