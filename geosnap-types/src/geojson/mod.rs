use crate::error::GeoSnapTypesError;
use crate::geo::Coordinate;
use crate::geometry::Geom;
use crate::impls::{ClosedContour, Contour, MultiContour, MultiPoint, MultiPolygon, Polygon};
use geojson::{LineStringType, PolygonType, Position, Value};

impl TryFrom<&geojson::Geometry> for Geom<Coordinate> {
    type Error = GeoSnapTypesError;

    /// Converts a GeoJSON geometry keeping all of its coordinates as they are, so that path locators of the result
    /// address the same positions as in the GeoJSON arrays. Altitude is dropped.
    ///
    /// Geometry collections are not supported.
    fn try_from(value: &geojson::Geometry) -> Result<Self, Self::Error> {
        match &value.value {
            Value::Point(p) => Ok(Geom::Point(convert_position(p)?)),
            Value::MultiPoint(points) => Ok(Geom::MultiPoint(MultiPoint::from(
                convert_positions(points)?,
            ))),
            Value::LineString(points) => Ok(Geom::Contour(convert_contour(points)?)),
            Value::MultiLineString(lines) => Ok(Geom::MultiContour(MultiContour::from(
                lines
                    .iter()
                    .map(convert_contour)
                    .collect::<Result<Vec<_>, _>>()?,
            ))),
            Value::Polygon(polygon) => Ok(Geom::Polygon(convert_polygon(polygon)?)),
            Value::MultiPolygon(mp) => Ok(Geom::MultiPolygon(MultiPolygon::from(
                mp.iter()
                    .map(convert_polygon)
                    .collect::<Result<Vec<_>, _>>()?,
            ))),
            Value::GeometryCollection(_) => Err(GeoSnapTypesError::Conversion(
                "geometry collections are not supported".to_string(),
            )),
        }
    }
}

fn convert_position(position: &Position) -> Result<Coordinate, GeoSnapTypesError> {
    match position[..] {
        [lon, lat, ..] => Ok(Coordinate::new(lon, lat)),
        _ => Err(GeoSnapTypesError::Conversion(
            "point must contain at least 2 dimensions".to_string(),
        )),
    }
}

fn convert_positions(positions: &[Position]) -> Result<Vec<Coordinate>, GeoSnapTypesError> {
    positions.iter().map(convert_position).collect()
}

fn convert_contour(line_string: &LineStringType) -> Result<Contour<Coordinate>, GeoSnapTypesError> {
    Ok(Contour::open(convert_positions(line_string)?))
}

fn convert_polygon(polygon: &PolygonType) -> Result<Polygon<Coordinate>, GeoSnapTypesError> {
    let mut rings = polygon
        .iter()
        .map(|ring| convert_positions(ring).map(ClosedContour::new));

    let outer = rings.next().transpose()?.ok_or_else(|| {
        GeoSnapTypesError::Conversion("polygon must have an outer ring".to_string())
    })?;

    Ok(Polygon::new(outer, rings.collect::<Result<Vec<_>, _>>()?))
}
