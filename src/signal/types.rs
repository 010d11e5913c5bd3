//! Core types for pointer signals
//!
//! Defines the fundamental data structures consumed by the dwell engine.
//! Signals are supplied by the embedding host (a UI toolkit, a replayed
//! trace, a test); the engine never talks to an input device itself.

use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// Opaque identifier for an observed element.
///
/// The host assigns ids; the engine only compares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "element#{}", self.0)
    }
}

/// A 2D pointer position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a point from x/y pixel coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Check both coordinates are finite (traces can carry anything).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Origin point.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

/// Coordinate frame a position is measured in.
///
/// Page coordinates move with the document during scroll; client
/// coordinates are fixed to the viewport. Scroll-suppressed bindings
/// compare in the client frame so that page scrolling under a stationary
/// pointer reads as zero displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Frame {
    /// Document/layout coordinates
    #[default]
    Page,
    /// Viewport/visual coordinates
    Client,
}

/// Signal kinds consumed by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalKind {
    /// Pointer crossed into the element
    PointerEnter,
    /// Pointer crossed out of the element
    PointerLeave,
    /// Pointer moved (position update)
    PointerMove,
    /// Touch lifted; touch input has no settling phase
    TouchEnd,
    /// Page scrolled; only meaningful to scroll-suppressed bindings
    Scroll,
}

impl SignalKind {
    /// Check if this is a motion signal
    pub fn is_motion(&self) -> bool {
        matches!(self, SignalKind::PointerMove)
    }

    /// Check if this signal crosses an element boundary
    pub fn is_boundary(&self) -> bool {
        matches!(self, SignalKind::PointerEnter | SignalKind::PointerLeave)
    }

    /// Check if this is a touch signal
    pub fn is_touch(&self) -> bool {
        matches!(self, SignalKind::TouchEnd)
    }
}

/// Raw signal as delivered by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointerSignal {
    /// Monotonic timestamp (microsecond ticks)
    pub timestamp: Timestamp,
    /// Signal kind
    pub kind: SignalKind,
    /// Element the signal occurred on
    pub element: ElementId,
    /// Position in page coordinates
    pub page: Point,
    /// Position in client coordinates, when it differs from `page`
    #[serde(default)]
    pub client: Option<Point>,
    /// Matched delegation selector, if the host observed via delegation
    #[serde(default)]
    pub selector: Option<String>,
}

impl PointerSignal {
    /// Create a pointer-enter signal
    pub fn enter(element: ElementId, page: Point, timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            kind: SignalKind::PointerEnter,
            element,
            page,
            client: None,
            selector: None,
        }
    }

    /// Create a pointer-leave signal
    pub fn leave(element: ElementId, page: Point, timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            kind: SignalKind::PointerLeave,
            element,
            page,
            client: None,
            selector: None,
        }
    }

    /// Create a pointer-move signal
    pub fn motion(element: ElementId, page: Point, timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            kind: SignalKind::PointerMove,
            element,
            page,
            client: None,
            selector: None,
        }
    }

    /// Create a touch-end signal
    pub fn touch_end(element: ElementId, page: Point, timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            kind: SignalKind::TouchEnd,
            element,
            page,
            client: None,
            selector: None,
        }
    }

    /// Create a scroll signal. Scroll is binding-wide; the element id is
    /// whatever the host routes it through and position is not meaningful.
    pub fn scroll(element: ElementId, timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            kind: SignalKind::Scroll,
            element,
            page: Point::ZERO,
            client: None,
            selector: None,
        }
    }

    /// Attach a distinct client-frame position
    pub fn with_client(mut self, client: Point) -> Self {
        self.client = Some(client);
        self
    }

    /// Attach the matched delegation selector
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Position in the requested coordinate frame.
    ///
    /// Falls back to the page position when the host supplied no distinct
    /// client position (the frames coincide for an unscrolled document).
    pub fn position(&self, frame: Frame) -> Point {
        match frame {
            Frame::Page => self.page,
            Frame::Client => self.client.unwrap_or(self.page),
        }
    }
}
