//! Shared pointer field and scroll guard
//!
//! One `PointerField` exists per binding. It holds the last known raw
//! pointer position — shared across every element the binding observes —
//! and the scrolling flag with its one-shot clear. Page scrolling moves
//! elements under a stationary pointer; without the guard, the resulting
//! synthetic enter would read as a deliberate hover.

use crate::signal::Point;

/// Binding-shared pointer sampling state
#[derive(Debug, Default)]
pub struct PointerField {
    /// Most recent tracked pointer position, in the binding's frame
    current: Option<Point>,
    /// True from a scroll signal until the next motion signal
    scrolling: bool,
}

impl PointerField {
    /// Create an empty field: no position seen, not scrolling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scroll signal: suppress entry evaluation until the pointer
    /// actually moves again.
    pub fn record_scroll(&mut self) {
        self.scrolling = true;
    }

    /// Note that a motion signal was observed. Clears the scrolling flag
    /// (the one-shot guard: it disarms on the first motion after a scroll).
    pub fn record_motion(&mut self) {
        self.scrolling = false;
    }

    /// Overwrite the shared position with a tracked motion sample.
    pub fn update_position(&mut self, position: Point) {
        self.current = Some(position);
    }

    /// Last known pointer position, if any motion has been tracked yet.
    pub fn current(&self) -> Option<Point> {
        self.current
    }

    /// Whether the page scrolled more recently than the pointer moved.
    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }
}
