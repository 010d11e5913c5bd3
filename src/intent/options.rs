//! Binding Options
//!
//! The resolved configuration record for one binding. The host's
//! call-shape normalization happens outside the engine; by the time an
//! `IntentOptions` reaches a controller it has named fields only.

use crate::signal::Frame;
use crate::time::Duration;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default interval between convergence checks (milliseconds)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Default displacement-per-interval threshold (pixels)
pub const DEFAULT_SENSITIVITY_PX: f64 = 6.0;

/// Default delay between leave and the leave callback (milliseconds)
pub const DEFAULT_EXIT_DELAY_MS: u64 = 0;

/// Options for one dwell binding
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentOptions {
    /// Interval between convergence checks
    pub poll_interval_ms: u64,
    /// Displacement-per-interval threshold below which intent is confirmed
    pub sensitivity_px: f64,
    /// Delay between pointer-leave and the leave callback
    pub exit_delay_ms: u64,
    /// Compare in client coordinates and suppress entry while scrolling
    pub ignore_scroll: bool,
    /// Track the pointer strictly per element instead of sharing the last
    /// known position across every element of the binding
    pub per_element_tracking: bool,
    /// Delegation: only observe signals tagged with this selector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_selector: Option<String>,
}

impl Default for IntentOptions {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            sensitivity_px: DEFAULT_SENSITIVITY_PX,
            exit_delay_ms: DEFAULT_EXIT_DELAY_MS,
            ignore_scroll: false,
            per_element_tracking: false,
            target_selector: None,
        }
    }
}

impl IntentOptions {
    /// Absorb malformed values by falling back to the defaults
    /// field-by-field. Never errors: a binding with a bad option record
    /// behaves like a binding with default options for that field.
    pub fn normalized(mut self) -> Self {
        if self.poll_interval_ms == 0 {
            warn!(
                fallback = DEFAULT_POLL_INTERVAL_MS,
                "poll_interval_ms of 0 is not usable, falling back"
            );
            self.poll_interval_ms = DEFAULT_POLL_INTERVAL_MS;
        }
        if !self.sensitivity_px.is_finite() || self.sensitivity_px <= 0.0 {
            warn!(
                given = self.sensitivity_px,
                fallback = DEFAULT_SENSITIVITY_PX,
                "sensitivity_px must be a positive finite number, falling back"
            );
            self.sensitivity_px = DEFAULT_SENSITIVITY_PX;
        }
        if let Some(selector) = &self.target_selector {
            if selector.trim().is_empty() {
                warn!("empty target_selector, treating the binding as undelegated");
                self.target_selector = None;
            }
        }
        self
    }

    /// Poll interval as a duration
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Exit delay as a duration
    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }

    /// Coordinate frame positions are compared in.
    ///
    /// Scroll-suppressed bindings compare in the client frame, where a
    /// stationary pointer reads as stationary even while the page scrolls
    /// underneath it.
    pub fn frame(&self) -> Frame {
        if self.ignore_scroll {
            Frame::Client
        } else {
            Frame::Page
        }
    }
}
