//! # hoverintent
//!
//! A pointer-intent detection engine that distinguishes a user deliberately
//! pausing over an element from one merely passing across it en route
//! elsewhere, and fires enter/leave callbacks only on deliberate dwell.
//!
//! ## Overview
//!
//! The engine consumes raw pointer signals (enter, leave, move, touch-end,
//! scroll) supplied by an embedding host and wraps them in a velocity-based
//! confirmation protocol: after an enter, the pointer position is polled at
//! a fixed interval, and only when its displacement over one interval drops
//! under the sensitivity threshold is the hover confirmed. Leaving after a
//! confirmed hover fires the leave callback on a symmetric, configurable
//! delay, so brief excursions do not tear a dwell session down.
//!
//! ## Quick Start
//!
//! ```
//! use hoverintent::{DwellController, ElementId, IntentOptions, Point, PointerSignal, Timestamp};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let entered = Rc::new(RefCell::new(0));
//! let sink = Rc::clone(&entered);
//!
//! let mut controller = DwellController::new(IntentOptions::default())
//!     .on_enter(move |_element, _signal| *sink.borrow_mut() += 1);
//!
//! let element = ElementId(1);
//! // Pointer enters, crosses at speed, then settles
//! controller.handle(&PointerSignal::enter(element, Point::new(0.0, 0.0), Timestamp::from_millis(0)));
//! controller.handle(&PointerSignal::motion(element, Point::new(50.0, 50.0), Timestamp::from_millis(20)));
//! controller.advance(Timestamp::from_millis(200));
//!
//! assert_eq!(*entered.borrow(), 1);
//! ```
//!
//! ## Architecture
//!
//! The system is organized into the following modules:
//!
//! - [`signal`]: Typed pointer signals and recorded signal traces
//! - [`time`]: Monotonic timestamps with deterministic construction
//! - [`intent`]: The dwell state machine, displacement comparator, and
//!   shared pointer field with scroll suppression
//! - [`replay`]: Virtual-time trace replay and reporting
//! - [`app`]: CLI and configuration management
//!
//! ## Signal Pipeline
//!
//! ```text
//! ┌─────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │ Host signal │───▶│ DwellController  │───▶│ IntentEvaluator │
//! │  delivery   │    │ (state machine)  │    │ (poll compare)  │
//! └─────────────┘    └──────────────────┘    └─────────────────┘
//!                             │                       │
//!                             ▼                       ▼
//!                    ┌──────────────────┐    ┌─────────────────┐
//!                    │  delayed exit    │    │    on_enter     │
//!                    │  ──▶ on_leave    │    │   (confirmed)   │
//!                    └──────────────────┘    └─────────────────┘
//! ```
//!
//! ## Time
//!
//! The engine is single-threaded and cooperative: it owns no threads and
//! never blocks. Hosts drive it by delivering signals (`handle`) and
//! passing time (`advance`); `next_deadline` tells an event loop how long
//! it may sleep. Replay and tests run entirely in virtual time.

pub mod app;
pub mod intent;
pub mod replay;
pub mod signal;
pub mod time;

// Re-export commonly used types
pub use intent::{DwellController, DwellPhase, IntentEvaluator, IntentOptions, Verdict};
pub use replay::{ReplayReport, TraceReplayer};
pub use signal::{ElementId, Frame, Point, PointerSignal, SignalKind, SignalTrace};
pub use time::{MonoClock, Timestamp};

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the dwell engine
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Trace error: {0}")]
    Trace(String),

    #[error("Replay error: {0}")]
    Replay(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
