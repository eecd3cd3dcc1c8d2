//! Capabilities the snapper needs from the application hosting the map.

use crate::error::GeoSnapError;
use crate::feature::{FeatureId, RenderedFeature};
use geosnap_types::cartesian::Rect;
use geosnap_types::geo::Coordinate;
use geosnap_types::{Geom, PathLocator};

/// Read access to the map and the drawing state.
///
/// The snapper never keeps references to the host between calls, so a host can be anything from a live map widget to
/// a set of features prepared in a test.
pub trait SnapHost {
    /// Returns features rendered in the given `layers` that intersect the `area` on the screen (in pixels).
    fn query_features_near(&self, area: Rect, layers: &[String]) -> Vec<RenderedFeature>;

    /// Ids of the currently selected features.
    fn selected_feature_ids(&self) -> Vec<FeatureId>;

    /// Name of the active interaction mode, e.g. `draw_line_string` or `simple_select`.
    fn current_mode_name(&self) -> &str;

    /// Full precision geometry of a feature from the authoritative store.
    fn stored_geometry(&self, id: &FeatureId) -> Option<&Geom<Coordinate>>;
}

/// Mutation of stored features that is needed to add a snapped vertex to a feature.
pub trait InsertVertex {
    /// Inserts a new vertex with `coords` into the feature `id` at the vertex slot `path`.
    fn insert_coordinate_at(
        &mut self,
        id: &FeatureId,
        path: &PathLocator,
        coords: Coordinate,
    ) -> Result<(), GeoSnapError>;
}
