//! Displacement comparator
//!
//! The polling comparator at the heart of intent detection: how far did
//! the pointer get from the last sample over one interval? Under the
//! sensitivity threshold means the user has settled; anything else means
//! they are still in transit.

use crate::signal::Point;

/// Outcome of one convergence check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Displacement dropped under the threshold: intent confirmed
    Settled,
    /// Still moving too fast; rebaseline and poll again
    Moving,
}

/// Convergence test engine
#[derive(Debug, Clone, Copy)]
pub struct IntentEvaluator {
    /// Euclidean displacement threshold (pixels per interval)
    pub sensitivity_px: f64,
}

impl IntentEvaluator {
    /// Create an evaluator with the given threshold.
    pub fn new(sensitivity_px: f64) -> Self {
        Self { sensitivity_px }
    }

    /// Compare the poll baseline against the current pointer position.
    pub fn evaluate(&self, baseline: Point, current: Point) -> Verdict {
        if baseline.distance_to(current) < self.sensitivity_px {
            Verdict::Settled
        } else {
            Verdict::Moving
        }
    }
}
