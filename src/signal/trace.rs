//! Trace Data Structures
//!
//! Defines the serialization format for recorded signal streams. A trace is
//! the replayable unit: a named, timestamped list of pointer signals that can
//! be fed back through the engine deterministically.

use super::types::PointerSignal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Current trace format version
pub const CURRENT_FORMAT_VERSION: &str = "1.0";

/// Trace metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceMetadata {
    /// Unique trace ID
    pub id: Uuid,
    /// Trace name
    pub name: String,
    /// Optional description of the interaction captured
    pub description: Option<String>,
    /// Wall-clock time the trace was recorded
    pub recorded_at: DateTime<Utc>,
    /// Total signal count
    pub signal_count: usize,
    /// Trace duration in milliseconds (first to last signal)
    pub duration_ms: u64,
    /// Version of the trace format
    pub format_version: String,
}

impl TraceMetadata {
    /// Create new metadata for a trace
    pub fn new(name: String, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            recorded_at: Utc::now(),
            signal_count: 0,
            duration_ms: 0,
            format_version: CURRENT_FORMAT_VERSION.to_string(),
        }
    }
}

impl Default for TraceMetadata {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            description: None,
            recorded_at: Utc::now(),
            signal_count: 0,
            duration_ms: 0,
            format_version: CURRENT_FORMAT_VERSION.to_string(),
        }
    }
}

/// A complete recorded signal stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalTrace {
    /// Trace metadata
    pub metadata: TraceMetadata,
    /// Signals in delivery order
    pub signals: Vec<PointerSignal>,
}

impl SignalTrace {
    /// Create a new empty trace
    pub fn new(name: String, description: Option<String>) -> Self {
        Self {
            metadata: TraceMetadata::new(name, description),
            signals: Vec::new(),
        }
    }

    /// Append a signal to the trace
    pub fn push(&mut self, signal: PointerSignal) {
        self.signals.push(signal);
    }

    /// Finalize the trace: fill in signal count and span duration
    pub fn finalize(&mut self) {
        self.metadata.signal_count = self.signals.len();
        self.metadata.duration_ms = match (self.signals.first(), self.signals.last()) {
            (Some(first), Some(last)) => {
                last.timestamp.duration_since(first.timestamp).as_millis()
            }
            _ => 0,
        };
    }

    /// Check the trace is well-formed: timestamps non-decreasing, all
    /// coordinates finite.
    pub fn validate(&self) -> crate::Result<()> {
        let mut prev = None;
        for (i, signal) in self.signals.iter().enumerate() {
            if let Some(prev) = prev {
                if signal.timestamp < prev {
                    return Err(crate::Error::Trace(format!(
                        "signal {} timestamp goes backward ({} < {} us)",
                        i,
                        signal.timestamp.as_micros(),
                        prev.as_micros()
                    )));
                }
            }
            if !signal.page.is_finite()
                || signal.client.map(|c| !c.is_finite()).unwrap_or(false)
            {
                return Err(crate::Error::Trace(format!(
                    "signal {} has non-finite coordinates",
                    i
                )));
            }
            prev = Some(signal.timestamp);
        }
        Ok(())
    }

    /// Save trace to a file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load trace from a file.
    ///
    /// Logs a warning if the trace was saved with an unknown format version,
    /// but still attempts to deserialize it (forward-compatible via
    /// `#[serde(default)]`).
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let trace: SignalTrace = serde_json::from_str(&content)?;
        if trace.metadata.format_version != CURRENT_FORMAT_VERSION {
            tracing::warn!(
                name = %trace.metadata.name,
                found = %trace.metadata.format_version,
                expected = CURRENT_FORMAT_VERSION,
                "Trace has different format version; some fields may use default values"
            );
        }
        Ok(trace)
    }

    /// Get the number of signals
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    /// Check if the trace is empty
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Get signals by filter
    pub fn signals_of_kind(
        &self,
        filter: impl Fn(&PointerSignal) -> bool,
    ) -> Vec<&PointerSignal> {
        self.signals.iter().filter(|s| filter(s)).collect()
    }

    /// Get motion signals only
    pub fn motion_signals(&self) -> Vec<&PointerSignal> {
        self.signals_of_kind(|s| s.kind.is_motion())
    }

    /// Get boundary (enter/leave) signals only
    pub fn boundary_signals(&self) -> Vec<&PointerSignal> {
        self.signals_of_kind(|s| s.kind.is_boundary())
    }
}

impl Default for SignalTrace {
    fn default() -> Self {
        Self::new("untitled".to_string(), None)
    }
}
