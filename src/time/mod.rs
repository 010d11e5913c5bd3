//! Monotonic timing module
//!
//! This module provides the time vocabulary for the dwell engine:
//! - Monotonic (never goes backward) process-anchored timestamps
//! - Raw microsecond ticks stored, human units converted lazily
//! - Deterministic construction for traces and tests

pub mod clock;

pub use clock::{Duration, MonoClock, Timestamp};
