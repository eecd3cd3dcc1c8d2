use crate::error::GeoSnapTypesError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Location of a vertex slot inside of a geometry's nested coordinate structure.
///
/// Vertex indices address the **end** point of the segment a snap candidate was found on, so inserting a new vertex
/// at the index puts it between the segment's endpoints. For the closing segment of a ring the index equals the ring
/// length, which appends the vertex after the last one.
///
/// The string form (see [`Display`] and [`FromStr`]) is the dot-separated list of indices, e.g. `"0.3"` for the
/// fourth vertex slot of the outer ring of a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathLocator {
    /// The geometry as a whole, e.g. a point.
    Whole,
    /// Vertex index in a line string.
    Index(usize),
    /// Part index and vertex index: ring of a polygon, or line of a multi line string.
    RingIndex(usize, usize),
    /// Polygon, ring and vertex indices in a multi polygon.
    PolygonRingIndex(usize, usize, usize),
}

impl Display for PathLocator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PathLocator::Whole => Ok(()),
            PathLocator::Index(i) => write!(f, "{i}"),
            PathLocator::RingIndex(r, i) => write!(f, "{r}.{i}"),
            PathLocator::PolygonRingIndex(p, r, i) => write!(f, "{p}.{r}.{i}"),
        }
    }
}

impl FromStr for PathLocator {
    type Err = GeoSnapTypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(PathLocator::Whole);
        }

        let indices = s
            .split('.')
            .map(usize::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| GeoSnapTypesError::InvalidPath(s.to_string()))?;

        match indices[..] {
            [i] => Ok(PathLocator::Index(i)),
            [r, i] => Ok(PathLocator::RingIndex(r, i)),
            [p, r, i] => Ok(PathLocator::PolygonRingIndex(p, r, i)),
            _ => Err(GeoSnapTypesError::InvalidPath(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn display() {
        assert_eq!(PathLocator::Whole.to_string(), "");
        assert_eq!(PathLocator::Index(1).to_string(), "1");
        assert_eq!(PathLocator::RingIndex(0, 3).to_string(), "0.3");
        assert_eq!(PathLocator::PolygonRingIndex(2, 1, 5).to_string(), "2.1.5");
    }

    #[test]
    fn parse() {
        assert_eq!("".parse::<PathLocator>(), Ok(PathLocator::Whole));
        assert_eq!("7".parse::<PathLocator>(), Ok(PathLocator::Index(7)));
        assert_eq!("0.3".parse::<PathLocator>(), Ok(PathLocator::RingIndex(0, 3)));
        assert_eq!(
            "2.1.5".parse::<PathLocator>(),
            Ok(PathLocator::PolygonRingIndex(2, 1, 5))
        );
    }

    #[test]
    fn parse_invalid() {
        assert_matches!("a".parse::<PathLocator>(), Err(GeoSnapTypesError::InvalidPath(_)));
        assert_matches!("1.".parse::<PathLocator>(), Err(GeoSnapTypesError::InvalidPath(_)));
        assert_matches!("-1".parse::<PathLocator>(), Err(GeoSnapTypesError::InvalidPath(_)));
        assert_matches!(
            "1.2.3.4".parse::<PathLocator>(),
            Err(GeoSnapTypesError::InvalidPath(_))
        );
    }
}
