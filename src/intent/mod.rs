//! Dwell intent detection
//!
//! This module transforms raw pointer signals into deliberate-hover
//! decisions using:
//! - A shared pointer field with one-shot scroll suppression
//! - A polled Euclidean-displacement convergence test
//! - A per-element dwell state machine with a delayed-exit timer

pub mod controller;
pub mod evaluator;
pub mod options;
pub mod state;
pub mod tracker;

pub use controller::DwellController;
pub use evaluator::{IntentEvaluator, Verdict};
pub use options::IntentOptions;
pub use state::{DwellPhase, ElementHoverState};
pub use tracker::PointerField;
