//! Pointer events the snapper operates on.

use geosnap_types::cartesian::Point2d;
use geosnap_types::geo::Coordinate;

/// Kind of the pointer device.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum PointerKind {
    /// Mouse or pen.
    #[default]
    Mouse,
    /// Touch screen.
    Touch,
}

/// Modifier keys held during the event.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Alt (Option) key. Holding it disables snapping.
    pub alt: bool,
    /// Shift key.
    pub shift: bool,
    /// Control key.
    pub ctrl: bool,
}

/// State of the pointer at the moment of the event.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    /// Pointer position on the screen in pixels from the top-left corner.
    pub screen_position: Point2d,
    /// Geographic position of the pointer. Overwritten in place when the event is snapped.
    pub position: Coordinate,
    /// Modifier keys.
    pub modifiers: Modifiers,
    /// Device that produced the event.
    pub kind: PointerKind,
}

impl PointerEvent {
    /// Creates a mouse event without modifiers.
    pub fn new(screen_position: Point2d, position: Coordinate) -> Self {
        Self {
            screen_position,
            position,
            modifiers: Modifiers::default(),
            kind: PointerKind::Mouse,
        }
    }

    /// Sets the modifiers of the event.
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Sets the kind of the event.
    pub fn with_kind(mut self, kind: PointerKind) -> Self {
        self.kind = kind;
        self
    }
}
