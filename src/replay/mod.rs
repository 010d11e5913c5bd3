//! Trace replay driver
//!
//! Feeds a recorded signal trace through a dwell controller in virtual
//! time and reports every enter/leave the engine decided to fire. Replay
//! is fully deterministic: the same trace and options always produce the
//! same report.

use crate::intent::{DwellController, IntentOptions};
use crate::signal::{ElementId, SignalKind, SignalTrace};
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;

/// Which callback an outcome records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeKind {
    /// The enter callback fired (confirmed dwell, or touch)
    Entered,
    /// The leave callback fired (delayed exit completed)
    Left,
}

/// One callback invocation observed during replay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoverOutcome {
    /// Element the callback was invoked for
    pub element: ElementId,
    /// Enter or leave
    pub kind: OutcomeKind,
    /// Kind of the signal handed to the callback
    pub origin: SignalKind,
    /// Timestamp of that originating signal
    pub origin_at: Timestamp,
}

/// Per-element callback totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementReplay {
    pub element: ElementId,
    pub enters: u32,
    pub leaves: u32,
}

/// Result of replaying one trace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayReport {
    /// Name of the replayed trace
    pub trace_name: String,
    /// Signals fed through the engine
    pub signal_count: usize,
    /// Total enter callbacks
    pub enter_count: u32,
    /// Total leave callbacks
    pub leave_count: u32,
    /// Every callback in firing order
    pub outcomes: Vec<HoverOutcome>,
    /// Totals grouped by element, in element order
    pub elements: Vec<ElementReplay>,
}

impl ReplayReport {
    /// Human-readable summary for the CLI.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "Trace '{}': {} signals, {} enter(s), {} leave(s)\n",
            self.trace_name, self.signal_count, self.enter_count, self.leave_count
        );
        for element in &self.elements {
            out.push_str(&format!(
                "  {}: {} enter(s), {} leave(s)\n",
                element.element, element.enters, element.leaves
            ));
        }
        out
    }
}

/// Deterministic virtual-time trace runner
#[derive(Debug, Clone, Default)]
pub struct TraceReplayer {
    /// Binding options the replayed controller runs with
    pub options: IntentOptions,
}

impl TraceReplayer {
    /// Create a replayer with the given binding options.
    pub fn new(options: IntentOptions) -> Self {
        Self { options }
    }

    /// Replay a trace and collect every callback the engine fires.
    ///
    /// The trace is validated first; a malformed trace is an error, not a
    /// silent partial replay. Timers still outstanding after the last
    /// signal (a pending exit delay, an unfinished poll) are drained so
    /// the report reflects where the machine would come to rest.
    pub fn replay(&self, trace: &SignalTrace) -> crate::Result<ReplayReport> {
        trace.validate()?;

        let outcomes: Rc<RefCell<Vec<HoverOutcome>>> = Rc::new(RefCell::new(Vec::new()));

        let enter_sink = Rc::clone(&outcomes);
        let leave_sink = Rc::clone(&outcomes);
        let mut controller = DwellController::new(self.options.clone())
            .on_enter(move |element, signal| {
                enter_sink.borrow_mut().push(HoverOutcome {
                    element,
                    kind: OutcomeKind::Entered,
                    origin: signal.kind,
                    origin_at: signal.timestamp,
                });
            })
            .on_leave(move |element, signal| {
                leave_sink.borrow_mut().push(HoverOutcome {
                    element,
                    kind: OutcomeKind::Left,
                    origin: signal.kind,
                    origin_at: signal.timestamp,
                });
            });

        for signal in &trace.signals {
            controller.handle(signal);
        }

        // Drain outstanding timers so pending exits and polls resolve
        while let Some(deadline) = controller.next_deadline() {
            controller.advance(deadline);
        }

        // The callbacks own the other Rc handles; release them first
        drop(controller);
        let outcomes = Rc::try_unwrap(outcomes)
            .map_err(|_| crate::Error::Replay("callback sink still shared".to_string()))?
            .into_inner();

        let report = Self::build_report(trace, outcomes);
        info!(
            trace = %report.trace_name,
            enters = report.enter_count,
            leaves = report.leave_count,
            "replay finished"
        );
        Ok(report)
    }

    fn build_report(trace: &SignalTrace, outcomes: Vec<HoverOutcome>) -> ReplayReport {
        let mut elements: Vec<ElementReplay> = Vec::new();
        let mut enter_count = 0;
        let mut leave_count = 0;

        for outcome in &outcomes {
            match outcome.kind {
                OutcomeKind::Entered => enter_count += 1,
                OutcomeKind::Left => leave_count += 1,
            }
            let entry = match elements.iter_mut().find(|e| e.element == outcome.element) {
                Some(entry) => entry,
                None => {
                    elements.push(ElementReplay {
                        element: outcome.element,
                        enters: 0,
                        leaves: 0,
                    });
                    elements.last_mut().expect("just pushed")
                }
            };
            match outcome.kind {
                OutcomeKind::Entered => entry.enters += 1,
                OutcomeKind::Left => entry.leaves += 1,
            }
        }
        elements.sort_by_key(|e| e.element);

        ReplayReport {
            trace_name: trace.metadata.name.clone(),
            signal_count: trace.signals.len(),
            enter_count,
            leave_count,
            outcomes,
            elements,
        }
    }
}
