//! In-memory authoritative storage of drawn features.

use crate::error::GeoSnapError;
use crate::feature::FeatureId;
use crate::host::InsertVertex;
use ahash::{HashMap, HashMapExt};
use geosnap_types::geo::Coordinate;
use geosnap_types::{Geom, PathLocator};

/// Feature storage keyed by feature id.
///
/// Geometries in the store are kept with full precision, unlike the geometries returned by rendered feature
/// queries, so the snapper prefers them when both are available.
#[derive(Debug, Default, Clone)]
pub struct FeatureStore {
    features: HashMap<FeatureId, Geom<Coordinate>>,
}

impl FeatureStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            features: HashMap::new(),
        }
    }

    /// Adds a feature to the store, returning the previous geometry stored with the same id.
    pub fn insert(
        &mut self,
        id: FeatureId,
        geometry: impl Into<Geom<Coordinate>>,
    ) -> Option<Geom<Coordinate>> {
        self.features.insert(id, geometry.into())
    }

    /// Returns a reference to the geometry of the feature.
    pub fn get(&self, id: &FeatureId) -> Option<&Geom<Coordinate>> {
        self.features.get(id)
    }

    /// Returns a mutable reference to the geometry of the feature.
    pub fn get_mut(&mut self, id: &FeatureId) -> Option<&mut Geom<Coordinate>> {
        self.features.get_mut(id)
    }

    /// Removes the feature from the store.
    pub fn remove(&mut self, id: &FeatureId) -> Option<Geom<Coordinate>> {
        self.features.remove(id)
    }

    /// Number of features in the store.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Returns true if there are no features in the store.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Iterates over all features in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&FeatureId, &Geom<Coordinate>)> {
        self.features.iter()
    }
}

impl InsertVertex for FeatureStore {
    fn insert_coordinate_at(
        &mut self,
        id: &FeatureId,
        path: &PathLocator,
        coords: Coordinate,
    ) -> Result<(), GeoSnapError> {
        let geometry = self
            .features
            .get_mut(id)
            .ok_or_else(|| GeoSnapError::FeatureNotFound(id.clone()))?;
        geometry.insert_point(path, coords)?;

        log::debug!("Inserted vertex {coords:?} into feature {id} at {path}");
        Ok(())
    }
}
