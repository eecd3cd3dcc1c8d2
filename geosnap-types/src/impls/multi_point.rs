use serde::{Deserialize, Serialize};

/// A set of points.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiPoint<P>(Vec<P>);

impl<P> MultiPoint<P> {
    /// Iterates over the points.
    pub fn iter_points(&self) -> impl Iterator<Item = &'_ P> {
        self.0.iter()
    }
}

impl<P> From<Vec<P>> for MultiPoint<P> {
    fn from(value: Vec<P>) -> Self {
        Self(value)
    }
}
