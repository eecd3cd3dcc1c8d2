//! The snap engine: finds the point of a nearby feature closest to the pointer.

use crate::feature::FeatureId;
use crate::host::SnapHost;
use crate::options::SnapOptions;
use crate::pointer::PointerEvent;
use ahash::{HashSet, HashSetExt};
use geosnap_types::cartesian::Rect;
use geosnap_types::geo::Coordinate;
use geosnap_types::PathLocator;

mod candidate;
mod metric;
mod selector;
mod walker;

pub use candidate::ProjectedCandidate;
pub use metric::distance_km;
pub use selector::{select, CORNER_TOLERANCE};
pub use walker::walk;

/// Substring of the names of the interaction modes in which features are selected rather than drawn.
const SELECT_MODE_MARKER: &str = "select";

/// Decision of the snapper for one pointer event.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapResult {
    /// Distance from the pointer to the snapped point in kilometers. `f64::INFINITY` if nothing was snapped to.
    pub distance: f64,
    /// Position of the snapped point.
    pub coords: Coordinate,
    /// True if the point lies inside of a feature segment and can be inserted into the feature as a new vertex.
    pub interpolated: bool,
    /// Feature the point can be inserted into. Only set for interpolated results.
    pub feature_id: Option<FeatureId>,
    /// Vertex slot the point can be inserted at. Only set for interpolated results.
    pub path: Option<PathLocator>,
}

impl SnapResult {
    /// Result that means "no snap".
    pub fn none() -> Self {
        Self {
            distance: f64::INFINITY,
            coords: Coordinate::default(),
            interpolated: false,
            feature_id: None,
            path: None,
        }
    }

    /// Result snapped to an existing vertex.
    pub fn vertex(distance: f64, coords: Coordinate) -> Self {
        Self {
            distance,
            coords,
            interpolated: false,
            feature_id: None,
            path: None,
        }
    }

    /// Returns true if a point to snap to was found.
    pub fn is_snapped(&self) -> bool {
        self.distance.is_finite()
    }

    /// Moves the pointer to the snapped point. Does nothing if the result is not snapped.
    pub fn apply_to(&self, event: &mut PointerEvent) {
        if self.is_snapped() {
            event.position = self.coords;
        }
    }

    /// Feature and vertex slot the snapped point should be inserted at, if the point is not a vertex already.
    pub fn insertion_site(&self) -> Option<(&FeatureId, &PathLocator)> {
        if !self.is_snapped() || !self.interpolated {
            return None;
        }

        match (&self.feature_id, &self.path) {
            (Some(id), Some(path)) => Some((id, path)),
            _ => None,
        }
    }
}

impl Default for SnapResult {
    fn default() -> Self {
        Self::none()
    }
}

/// Snaps pointer events to the features provided by a [`SnapHost`].
#[derive(Debug, Clone, Default)]
pub struct Snapper {
    options: SnapOptions,
}

impl Snapper {
    /// Creates a new snapper.
    pub fn new(options: SnapOptions) -> Self {
        Self { options }
    }

    /// Options of the snapper.
    pub fn options(&self) -> &SnapOptions {
        &self.options
    }

    /// Finds the point of a nearby feature closest to the event position.
    ///
    /// Features are requested from the `host` in the box around the event screen position. Features that are
    /// currently selected are never snapped to. Returns [`SnapResult::none`] if snapping is disabled, the Alt key is
    /// held, a select mode is active with nothing selected, or no feature is close enough.
    pub fn snap(&self, event: &PointerEvent, host: &impl SnapHost) -> SnapResult {
        if !self.options.snap_enabled {
            log::trace!("Snapping is disabled");
            return SnapResult::none();
        }

        if event.modifiers.alt {
            log::trace!("Snapping is suppressed by the Alt key");
            return SnapResult::none();
        }

        let selected = host.selected_feature_ids();
        let mode = host.current_mode_name();
        if mode.contains(SELECT_MODE_MARKER) && selected.is_empty() {
            log::trace!("Nothing is selected in mode {mode}, snapping skipped");
            return SnapResult::none();
        }

        let area = Rect::around(&event.screen_position, self.options.buffer(event.kind));
        let features = host.query_features_near(area, &self.options.snap_layers);
        let queried = features.len();

        let mut seen = HashSet::new();
        let candidates: Vec<_> = features
            .iter()
            .filter(|feature| match &feature.id {
                Some(id) => !selected.contains(id) && seen.insert(id),
                None => true,
            })
            .collect();

        log::trace!(
            "{} of {queried} queried features are snap candidates",
            candidates.len()
        );

        let query = event.position;
        let mut result = SnapResult::none();
        for feature in candidates {
            let stored = feature
                .id
                .as_ref()
                .and_then(|id| host.stored_geometry(id));
            let Some(geometry) = stored.or(feature.geometry.as_ref()) else {
                continue;
            };

            result = walk(query, geometry, feature.id.as_ref())
                .fold(result, |running, candidate| select(running, candidate, &query));
        }

        if result.is_snapped() {
            log::debug!(
                "Snapped {query:?} to {:?} at {:.6} km (interpolated: {})",
                result.coords,
                result.distance,
                result.interpolated
            );
        }

        result
    }

    /// Snaps the event and moves its position to the snapped point.
    pub fn snap_event(&self, event: &mut PointerEvent, host: &impl SnapHost) -> SnapResult {
        let result = self.snap(event, host);
        result.apply_to(event);
        result
    }
}
