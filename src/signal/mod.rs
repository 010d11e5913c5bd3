//! Signal vocabulary and recorded traces
//!
//! This module defines the raw input surface of the dwell engine: typed
//! pointer signals carrying coordinates and a monotonic timestamp, plus a
//! serialization format for recorded signal streams.

pub mod trace;
pub mod types;

pub use trace::{SignalTrace, TraceMetadata};
pub use types::{ElementId, Frame, Point, PointerSignal, SignalKind};
