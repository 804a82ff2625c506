//! Pointer tracking for the repulsion force.

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Last known pointer position relative to the canvas, if the pointer is
/// currently over the interactive region.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    position: Option<Point>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a move event given in client coordinates, translated by the
    /// canvas bounding box origin.
    pub fn track(&mut self, client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) {
        self.position = Some(Point {
            x: client_x - rect_left,
            y: client_y - rect_top,
        });
    }

    /// The pointer left the region; repulsion stops.
    pub fn leave(&mut self) {
        self.position = None;
    }

    pub fn position(&self) -> Option<Point> {
        self.position
    }
}
