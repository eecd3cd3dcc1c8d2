use serde::{Deserialize, Serialize};

use crate::impls::contour::Contour;

/// A set of contours.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MultiContour<P>(Vec<Contour<P>>);

impl<P> MultiContour<P> {
    /// Iterates over the contours.
    pub fn contours(&self) -> impl Iterator<Item = &Contour<P>> {
        self.0.iter()
    }

    /// Mutable reference to the contour with the given index.
    pub fn contour_mut(&mut self, index: usize) -> Option<&mut Contour<P>> {
        self.0.get_mut(index)
    }
}

impl<P> From<Vec<Contour<P>>> for MultiContour<P> {
    fn from(value: Vec<Contour<P>>) -> Self {
        Self(value)
    }
}
