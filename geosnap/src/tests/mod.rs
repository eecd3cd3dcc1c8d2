use std::cell::RefCell;

use geosnap_types::cartesian::{Point2d, Rect};
use geosnap_types::geo::Coordinate;
use geosnap_types::{Geom, PathLocator};

use crate::error::GeoSnapError;
use crate::feature::{FeatureId, RenderedFeature};
use crate::host::{InsertVertex, SnapHost};
use crate::store::FeatureStore;

/// Host over an in-memory set of features. Each rendered feature is anchored at a screen position and is returned
/// by the query if the anchor is inside of the query box.
pub struct TestHost {
    rendered: Vec<(Point2d, RenderedFeature)>,
    selected: Vec<FeatureId>,
    mode: String,
    store: FeatureStore,
    last_query: RefCell<Option<(Rect, Vec<String>)>>,
}

impl TestHost {
    pub fn new(mode: &str) -> Self {
        Self {
            rendered: vec![],
            selected: vec![],
            mode: mode.to_string(),
            store: FeatureStore::new(),
            last_query: RefCell::new(None),
        }
    }

    pub fn add_rendered(&mut self, anchor: Point2d, feature: RenderedFeature) {
        self.rendered.push((anchor, feature));
    }

    pub fn select(&mut self, id: impl Into<FeatureId>) {
        self.selected.push(id.into());
    }

    pub fn set_mode(&mut self, mode: &str) {
        self.mode = mode.to_string();
    }

    pub fn store(&self) -> &FeatureStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut FeatureStore {
        &mut self.store
    }

    pub fn last_query(&self) -> Option<(Rect, Vec<String>)> {
        self.last_query.borrow().clone()
    }
}

impl SnapHost for TestHost {
    fn query_features_near(&self, area: Rect, layers: &[String]) -> Vec<RenderedFeature> {
        *self.last_query.borrow_mut() = Some((area, layers.to_vec()));

        self.rendered
            .iter()
            .filter(|(anchor, _)| area.contains(anchor))
            .map(|(_, feature)| feature.clone())
            .collect()
    }

    fn selected_feature_ids(&self) -> Vec<FeatureId> {
        self.selected.clone()
    }

    fn current_mode_name(&self) -> &str {
        &self.mode
    }

    fn stored_geometry(&self, id: &FeatureId) -> Option<&Geom<Coordinate>> {
        self.store.get(id)
    }
}

impl InsertVertex for TestHost {
    fn insert_coordinate_at(
        &mut self,
        id: &FeatureId,
        path: &PathLocator,
        coords: Coordinate,
    ) -> Result<(), GeoSnapError> {
        self.store.insert_coordinate_at(id, path, coords)
    }
}
