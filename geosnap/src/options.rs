//! Configuration of the snapper.

use crate::error::GeoSnapError;
use crate::pointer::PointerKind;
use serde::{Deserialize, Serialize};

/// Layers of the drawing tool that are queried for snap candidates by default: the feature layers and the inactive
/// render layers of the cold bucket.
pub const DEFAULT_SNAP_LAYERS: [&str; 6] = [
    "drawPoints",
    "drawLines",
    "drawPolygons",
    "gl-draw-polygon-stroke-inactive.cold",
    "gl-draw-line-inactive.cold",
    "gl-draw-point-inactive.cold",
];

/// Snapping options.
///
/// Options can be deserialized from a partial document, missing fields take default values:
///
/// ```
/// use geosnap::SnapOptions;
///
/// let options = SnapOptions::from_json(r#"{"snapClickBuffer": 10}"#).unwrap();
/// assert!(options.snap_enabled);
/// assert_eq!(options.snap_click_buffer, 10.0);
/// assert_eq!(options.snap_touch_buffer, 30.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnapOptions {
    /// Whether snapping is enabled at all.
    pub snap_enabled: bool,
    /// Half-width in pixels of the box around a mouse pointer in which features are looked up.
    pub snap_click_buffer: f64,
    /// Half-width in pixels of the box around a touch point in which features are looked up.
    pub snap_touch_buffer: f64,
    /// Names of the rendered layers to query for snap candidates.
    pub snap_layers: Vec<String>,
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self {
            snap_enabled: true,
            snap_click_buffer: 20.0,
            snap_touch_buffer: 30.0,
            snap_layers: DEFAULT_SNAP_LAYERS.iter().map(|v| v.to_string()).collect(),
        }
    }
}

impl SnapOptions {
    /// Parses options from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, GeoSnapError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Enables or disables snapping.
    pub fn with_snap_enabled(mut self, enabled: bool) -> Self {
        self.snap_enabled = enabled;
        self
    }

    /// Sets buffer size for mouse events.
    pub fn with_click_buffer(mut self, buffer: f64) -> Self {
        self.snap_click_buffer = buffer;
        self
    }

    /// Sets buffer size for touch events.
    pub fn with_touch_buffer(mut self, buffer: f64) -> Self {
        self.snap_touch_buffer = buffer;
        self
    }

    /// Sets the list of layers to query.
    pub fn with_layers(mut self, layers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.snap_layers = layers.into_iter().map(Into::into).collect();
        self
    }

    /// Buffer size for the given kind of pointer.
    pub fn buffer(&self, kind: PointerKind) -> f64 {
        match kind {
            PointerKind::Mouse => self.snap_click_buffer,
            PointerKind::Touch => self.snap_touch_buffer,
        }
    }
}
