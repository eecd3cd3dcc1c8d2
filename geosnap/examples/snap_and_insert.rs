//! This example snaps a few pointer events to features loaded from GeoJSON and inserts the snapped points into the
//! features they lie on.
//!
//! ```shell
//! RUST_LOG=debug cargo run --example snap_and_insert
//! ```

use geojson::{FeatureCollection, GeoJson};
use geosnap::geosnap_types::cartesian::{Point2d, Rect};
use geosnap::geosnap_types::geo::{Coordinate, GeoPoint};
use geosnap::geosnap_types::{Geom, PathLocator};
use geosnap::{
    snapped_segment_update, FeatureId, FeatureStore, GeoSnapError, InsertVertex, Modifiers,
    PointerEvent, RenderedFeature, SnapHost, SnapOptions, Snapper,
};

const FEATURES: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "id": "road" },
      "geometry": {
        "type": "LineString",
        "coordinates": [[10.0, 50.0], [10.01, 50.0], [10.02, 50.005]]
      }
    },
    {
      "type": "Feature",
      "id": 2,
      "properties": {},
      "geometry": {
        "type": "Polygon",
        "coordinates": [[[10.0, 50.002], [10.004, 50.002], [10.004, 50.006], [10.0, 50.006], [10.0, 50.002]]]
      }
    },
    {
      "type": "Feature",
      "properties": { "id": "well" },
      "geometry": { "type": "Point", "coordinates": [10.015, 49.998] }
    }
  ]
}"#;

/// Geographic position of the top-left corner of the screen.
const ORIGIN: Coordinate = Coordinate::new(9.995, 50.01);
const PIXELS_PER_DEGREE: f64 = 40_000.0;

struct DemoMap {
    rendered: Vec<RenderedFeature>,
    store: FeatureStore,
}

impl DemoMap {
    fn load(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let collection = FeatureCollection::try_from(json.parse::<GeoJson>()?)?;
        let rendered: Vec<_> = collection
            .features
            .iter()
            .map(RenderedFeature::from_geojson)
            .collect();

        let mut store = FeatureStore::new();
        for feature in &rendered {
            if let (Some(id), Some(geometry)) = (&feature.id, &feature.geometry) {
                store.insert(id.clone(), geometry.clone());
            }
        }

        Ok(Self { rendered, store })
    }

    fn to_screen(position: &Coordinate) -> Point2d {
        Point2d::new(
            (position.lon() - ORIGIN.lon()) * PIXELS_PER_DEGREE,
            (ORIGIN.lat() - position.lat()) * PIXELS_PER_DEGREE,
        )
    }

    fn pointer_at(lon: f64, lat: f64) -> PointerEvent {
        let position = Coordinate::new(lon, lat);
        PointerEvent::new(Self::to_screen(&position), position)
    }
}

impl SnapHost for DemoMap {
    fn query_features_near(&self, area: Rect, _layers: &[String]) -> Vec<RenderedFeature> {
        self.rendered
            .iter()
            .filter(|feature| {
                feature
                    .geometry
                    .as_ref()
                    .and_then(|geometry| {
                        let points: Vec<_> = geometry.iter_points().map(Self::to_screen).collect();
                        Rect::from_points(points.iter())
                    })
                    .is_some_and(|bbox| bbox.intersects(&area))
            })
            .cloned()
            .collect()
    }

    fn selected_feature_ids(&self) -> Vec<FeatureId> {
        vec![]
    }

    fn current_mode_name(&self) -> &str {
        "draw_line_string"
    }

    fn stored_geometry(&self, id: &FeatureId) -> Option<&Geom<Coordinate>> {
        self.store.get(id)
    }
}

impl InsertVertex for DemoMap {
    fn insert_coordinate_at(
        &mut self,
        id: &FeatureId,
        path: &PathLocator,
        coords: Coordinate,
    ) -> Result<(), GeoSnapError> {
        self.store.insert_coordinate_at(id, path, coords)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut map = DemoMap::load(FEATURES)?;
    let snapper = Snapper::new(SnapOptions::default().with_click_buffer(15.0));

    let events = [
        ("middle of the road", DemoMap::pointer_at(10.005, 50.0001)),
        ("near a parcel corner", DemoMap::pointer_at(10.0041, 50.0021)),
        ("next to the well", DemoMap::pointer_at(10.0151, 49.9981)),
        (
            "road with Alt held",
            DemoMap::pointer_at(10.005, 50.0001).with_modifiers(Modifiers {
                alt: true,
                ..Default::default()
            }),
        ),
    ];

    for (name, mut event) in events {
        let result = snapped_segment_update(&snapper, &mut event, &mut map)?;
        if result.is_snapped() {
            println!(
                "{name}: snapped to {:?} at {:.1} m, interpolated: {}, inserted at: {:?}",
                result.coords.to_array(),
                result.distance * 1000.0,
                result.interpolated,
                result.insertion_site()
            );
        } else {
            println!("{name}: not snapped");
        }
    }

    for (id, geometry) in map.store.iter() {
        println!("{id}: {} vertices", geometry.iter_points().count());
    }

    Ok(())
}
