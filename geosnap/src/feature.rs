//! Identifiers and geometries of the features the host renders.

use geosnap_types::geo::Coordinate;
use geosnap_types::Geom;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Identifier of a drawn feature. GeoJSON allows both string and numeric ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureId {
    /// String id.
    String(String),
    /// Integer id.
    Number(i64),
}

impl Display for FeatureId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureId::String(v) => write!(f, "{v}"),
            FeatureId::Number(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for FeatureId {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FeatureId {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for FeatureId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// A feature returned by the host's rendered feature query.
///
/// Rendered geometries may be simplified or clipped to tiles, so the snapper uses them only for features that are
/// not in the authoritative store. A feature without an id can be neither deduplicated nor excluded as a selected
/// feature.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFeature {
    /// Id of the drawn feature this rendered feature belongs to.
    pub id: Option<FeatureId>,
    /// Rendered geometry. `None` if the host rendered a geometry kind the snapper does not support.
    pub geometry: Option<Geom<Coordinate>>,
}

impl RenderedFeature {
    /// Creates a new rendered feature.
    pub fn new(id: Option<FeatureId>, geometry: impl Into<Geom<Coordinate>>) -> Self {
        Self {
            id,
            geometry: Some(geometry.into()),
        }
    }
}

#[cfg(feature = "geojson")]
impl RenderedFeature {
    /// Converts a GeoJSON feature as returned by a rendered features query.
    ///
    /// The id is taken from the `id` property, which is where drawing layers put the id of the source feature, and
    /// if there is no such property, from the id of the GeoJSON feature itself. Geometries that cannot be converted
    /// are dropped.
    pub fn from_geojson(feature: &geojson::Feature) -> Self {
        let id = feature
            .property("id")
            .and_then(id_from_json)
            .or_else(|| match &feature.id {
                Some(geojson::feature::Id::String(v)) => Some(FeatureId::String(v.clone())),
                Some(geojson::feature::Id::Number(v)) => v.as_i64().map(FeatureId::Number),
                None => None,
            });

        let geometry = feature.geometry.as_ref().and_then(|geometry| {
            Geom::<Coordinate>::try_from(geometry)
                .map_err(|err| log::debug!("Rendered feature {id:?} is skipped: {err}"))
                .ok()
        });

        Self { id, geometry }
    }
}

#[cfg(feature = "geojson")]
fn id_from_json(value: &serde_json::Value) -> Option<FeatureId> {
    match value {
        serde_json::Value::String(v) => Some(FeatureId::String(v.clone())),
        serde_json::Value::Number(v) => v.as_i64().map(FeatureId::Number),
        _ => None,
    }
}
