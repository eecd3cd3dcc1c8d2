//! Geosnap is a snap-to-feature engine for interactive map drawing tools. Given a pointer event, it finds the
//! closest point of a nearby feature, tells whether that point is an existing vertex or lies inside of a segment,
//! and reports where in the feature a new vertex should be inserted.
//!
//! The engine does not know anything about the map it works with. All the map and drawing state it needs is
//! requested through the [`SnapHost`] trait, and features are changed through the [`InsertVertex`] trait.
//!
//! # Quick start
//!
//! ```
//! use geosnap::geosnap_types::cartesian::{Point2d, Rect};
//! use geosnap::geosnap_types::geo::{Coordinate, GeoPoint};
//! use geosnap::geosnap_types::impls::Contour;
//! use geosnap::geosnap_types::Geom;
//! use geosnap::{FeatureId, PointerEvent, RenderedFeature, SnapHost, Snapper};
//!
//! struct Map {
//!     line: RenderedFeature,
//! }
//!
//! impl SnapHost for Map {
//!     fn query_features_near(&self, _area: Rect, _layers: &[String]) -> Vec<RenderedFeature> {
//!         vec![self.line.clone()]
//!     }
//!
//!     fn selected_feature_ids(&self) -> Vec<FeatureId> {
//!         vec![]
//!     }
//!
//!     fn current_mode_name(&self) -> &str {
//!         "draw_line_string"
//!     }
//!
//!     fn stored_geometry(&self, _id: &FeatureId) -> Option<&Geom<Coordinate>> {
//!         None
//!     }
//! }
//!
//! let map = Map {
//!     line: RenderedFeature::new(
//!         Some("road".into()),
//!         Contour::open(vec![Coordinate::new(10.0, 50.0), Coordinate::new(10.1, 50.0)]),
//!     ),
//! };
//!
//! let mut event = PointerEvent::new(Point2d::new(200.0, 150.0), Coordinate::new(10.05, 50.001));
//! let result = Snapper::default().snap_event(&mut event, &map);
//!
//! assert!(result.interpolated);
//! assert!((event.position.lat() - 50.0).abs() < 1e-9);
//! ```

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod error;
mod feature;
mod host;
mod insertion;
mod options;
mod pointer;
pub mod snap;
mod store;

#[cfg(test)]
pub(crate) mod tests;

pub use error::GeoSnapError;
pub use feature::{FeatureId, RenderedFeature};
pub use host::{InsertVertex, SnapHost};
pub use insertion::snapped_segment_update;
pub use options::{SnapOptions, DEFAULT_SNAP_LAYERS};
pub use pointer::{Modifiers, PointerEvent, PointerKind};
pub use snap::{SnapResult, Snapper};
pub use store::FeatureStore;

pub use geosnap_types;
