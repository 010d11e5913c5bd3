//! Dwell state machine
//!
//! One `DwellController` per binding. It consumes raw pointer signals,
//! schedules and fires its own timers in virtual time, and invokes the
//! user callbacks only on deliberate dwell:
//!
//! ```text
//! signal ──▶ DwellController ──▶ ElementHoverState read/write
//!                 │                    PointerField update
//!                 ▼
//!          IntentEvaluator poll ──▶ on_enter (confirmed)
//!          exit-delay timer     ──▶ on_leave (after a confirmed enter)
//! ```
//!
//! The controller never blocks and owns no threads. The host drives it:
//! `handle()` delivers one signal, `advance()` passes time, and
//! `next_deadline()` tells an embedding event loop how long it may sleep.

use super::evaluator::{IntentEvaluator, Verdict};
use super::options::IntentOptions;
use super::state::{DwellPhase, ElementHoverState, PendingTimer, TimerKind};
use super::tracker::PointerField;
use crate::signal::{ElementId, PointerSignal, SignalKind};
use crate::time::Timestamp;
use std::collections::HashMap;
use tracing::debug;

/// User callback invoked with the element and the originating signal
pub type HoverHandler = Box<dyn FnMut(ElementId, &PointerSignal)>;

/// Intent-detecting dwell engine for one binding
pub struct DwellController {
    options: IntentOptions,
    evaluator: IntentEvaluator,
    /// Binding-shared pointer position and scroll flag
    field: PointerField,
    /// Per-element dwell state, created on first pointer-enter
    elements: HashMap<ElementId, ElementHoverState>,
    on_enter: Option<HoverHandler>,
    on_leave: Option<HoverHandler>,
    /// Scheduling counter; breaks deadline ties deterministically
    timer_seq: u64,
}

impl DwellController {
    /// Create a controller. Malformed option values are absorbed to
    /// defaults (see [`IntentOptions::normalized`]); construction never
    /// fails.
    pub fn new(options: IntentOptions) -> Self {
        let options = options.normalized();
        let evaluator = IntentEvaluator::new(options.sensitivity_px);
        Self {
            options,
            evaluator,
            field: PointerField::new(),
            elements: HashMap::new(),
            on_enter: None,
            on_leave: None,
            timer_seq: 0,
        }
    }

    /// Install the enter callback.
    pub fn on_enter(mut self, handler: impl FnMut(ElementId, &PointerSignal) + 'static) -> Self {
        self.on_enter = Some(Box::new(handler));
        self
    }

    /// Install the leave callback.
    pub fn on_leave(mut self, handler: impl FnMut(ElementId, &PointerSignal) + 'static) -> Self {
        self.on_leave = Some(Box::new(handler));
        self
    }

    /// The normalized options this binding runs with.
    pub fn options(&self) -> &IntentOptions {
        &self.options
    }

    /// Current dwell phase of an element. Elements never entered are Idle.
    pub fn phase(&self, element: ElementId) -> DwellPhase {
        self.elements
            .get(&element)
            .map(|s| s.phase)
            .unwrap_or_default()
    }

    /// Earliest outstanding timer deadline across all elements, if any.
    /// An embedding event loop may sleep until this instant.
    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.elements.values().filter_map(|s| s.deadline()).min()
    }

    /// Process one raw signal.
    ///
    /// Timers due at or before the signal's timestamp fire first, so a
    /// poll scheduled before a later signal is observed before that
    /// signal — matching delivery order under a real event loop.
    pub fn handle(&mut self, signal: &PointerSignal) {
        self.advance(signal.timestamp);
        if !self.observes(signal) {
            return;
        }
        match signal.kind {
            SignalKind::PointerEnter => self.pointer_entered(signal),
            SignalKind::PointerLeave => self.pointer_left(signal),
            SignalKind::PointerMove => self.pointer_moved(signal),
            SignalKind::TouchEnd => self.touch_ended(signal),
            SignalKind::Scroll => self.scrolled(),
        }
    }

    /// Fire every timer due at or before `now`, in deadline order
    /// (scheduling order breaks ties). A poll that reschedules inside the
    /// window fires again, so long gaps replay the full poll cadence.
    pub fn advance(&mut self, now: Timestamp) {
        loop {
            let due = self
                .elements
                .iter()
                .filter_map(|(id, state)| {
                    state
                        .timer
                        .as_ref()
                        .filter(|t| t.deadline <= now)
                        .map(|t| (t.deadline, t.seq, *id))
                })
                .min();
            let Some((_, _, id)) = due else { break };
            self.fire_timer(id);
        }
    }

    /// Forget an element entirely (the host removed or unbound it).
    /// Any pending timer dies with the state; no callback fires.
    pub fn unbind(&mut self, element: ElementId) {
        self.elements.remove(&element);
    }

    /// Forget every element.
    pub fn unbind_all(&mut self) {
        self.elements.clear();
    }

    /// Delegation filter: with a target selector configured, only signals
    /// tagged with that selector are observed. Scroll is binding-wide and
    /// always passes.
    fn observes(&self, signal: &PointerSignal) -> bool {
        if signal.kind == SignalKind::Scroll {
            return true;
        }
        match &self.options.target_selector {
            Some(selector) => signal.selector.as_deref() == Some(selector.as_str()),
            None => true,
        }
    }

    fn next_seq(&mut self) -> u64 {
        let seq = self.timer_seq;
        self.timer_seq += 1;
        seq
    }

    fn pointer_entered(&mut self, signal: &PointerSignal) {
        if self.options.ignore_scroll && self.field.is_scrolling() {
            debug!(element = %signal.element, "enter suppressed while scrolling");
            return;
        }

        let baseline = signal.position(self.options.frame());
        let seq = self.next_seq();
        let poll_interval = self.options.poll_interval();
        let state = self.elements.entry(signal.element).or_default();

        // Cancel-before-schedule: a stray exit timer dies here, which is
        // what keeps a re-entry inside the exit window callback-free
        state.cancel_timer();
        state.last_sample = baseline;

        if state.phase.is_hover_confirmed() {
            // Still confirmed from the previous session; nothing to prove
            state.phase = DwellPhase::Confirmed;
            debug!(element = %signal.element, "re-entered within exit window");
            return;
        }

        state.phase = DwellPhase::Polling;
        state.tracking_motion = true;
        state.current = None;
        state.schedule(PendingTimer {
            deadline: signal.timestamp.advanced_by(poll_interval),
            kind: TimerKind::IntentPoll,
            seq,
            origin: signal.clone(),
        });
        debug!(element = %signal.element, "polling for intent");
    }

    fn pointer_left(&mut self, signal: &PointerSignal) {
        let exit_delay = self.options.exit_delay();
        let seq = self.next_seq();
        let Some(state) = self.elements.get_mut(&signal.element) else {
            return;
        };

        state.cancel_timer();
        state.tracking_motion = false;

        if state.phase.is_hover_confirmed() {
            state.phase = DwellPhase::ExitPending;
            state.schedule(PendingTimer {
                deadline: signal.timestamp.advanced_by(exit_delay),
                kind: TimerKind::ExitDelay,
                seq,
                origin: signal.clone(),
            });
            debug!(element = %signal.element, delay_ms = exit_delay.as_millis(), "exit pending");
        } else if state.phase.is_polling() {
            // Left before confirmation: the session never happened
            state.phase = DwellPhase::Idle;
            state.current = None;
            debug!(element = %signal.element, "poll cancelled before confirmation");
        }
    }

    fn pointer_moved(&mut self, signal: &PointerSignal) {
        // One-shot scroll guard: any observed motion disarms it
        self.field.record_motion();

        let position = signal.position(self.options.frame());
        if self.options.per_element_tracking {
            if let Some(state) = self.elements.get_mut(&signal.element) {
                if state.tracking_motion {
                    state.current = Some(position);
                }
            }
        } else {
            // Shared field: only elements currently polling consume motion,
            // but they all write the same last-known position
            let tracking = self
                .elements
                .get(&signal.element)
                .map(|s| s.tracking_motion)
                .unwrap_or(false);
            if tracking {
                self.field.update_position(position);
            }
        }
    }

    fn touch_ended(&mut self, signal: &PointerSignal) {
        // Touch has no settling phase: cancel whatever was in flight and
        // report the enter immediately
        if let Some(state) = self.elements.get_mut(&signal.element) {
            state.cancel_timer();
            state.reset();
        }
        debug!(element = %signal.element, "touch enter");
        if let Some(on_enter) = self.on_enter.as_mut() {
            on_enter(signal.element, signal);
        }
    }

    fn scrolled(&mut self) {
        if self.options.ignore_scroll {
            self.field.record_scroll();
        }
    }

    fn fire_timer(&mut self, id: ElementId) {
        let Some(state) = self.elements.get_mut(&id) else {
            return;
        };
        let Some(timer) = state.cancel_timer() else {
            return;
        };
        match timer.kind {
            TimerKind::IntentPoll => self.poll_expired(id, timer),
            TimerKind::ExitDelay => self.exit_expired(id, timer),
        }
    }

    /// One convergence check. Settled confirms the hover; still moving
    /// rebaselines and re-arms the poll one interval after the expired
    /// deadline, keeping the cadence even under batched advancement.
    fn poll_expired(&mut self, id: ElementId, timer: PendingTimer) {
        let (last_sample, element_current) = match self.elements.get(&id) {
            Some(state) => (state.last_sample, state.current),
            None => return,
        };

        let current = if self.options.per_element_tracking {
            element_current
        } else {
            self.field.current()
        }
        // No motion tracked since entry: the pointer has not moved
        .unwrap_or(last_sample);

        match self.evaluator.evaluate(last_sample, current) {
            Verdict::Settled => {
                if let Some(state) = self.elements.get_mut(&id) {
                    state.phase = DwellPhase::Confirmed;
                    state.tracking_motion = false;
                }
                debug!(element = %id, "intent confirmed");
                if let Some(on_enter) = self.on_enter.as_mut() {
                    on_enter(id, &timer.origin);
                }
            }
            Verdict::Moving => {
                let seq = self.next_seq();
                let deadline = timer.deadline.advanced_by(self.options.poll_interval());
                if let Some(state) = self.elements.get_mut(&id) {
                    state.last_sample = current;
                    state.schedule(PendingTimer {
                        deadline,
                        kind: TimerKind::IntentPoll,
                        seq,
                        origin: timer.origin,
                    });
                }
            }
        }
    }

    fn exit_expired(&mut self, id: ElementId, timer: PendingTimer) {
        if let Some(state) = self.elements.get_mut(&id) {
            state.reset();
        }
        debug!(element = %id, "dwell session ended");
        if let Some(on_leave) = self.on_leave.as_mut() {
            on_leave(id, &timer.origin);
        }
    }
}

impl std::fmt::Debug for DwellController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DwellController")
            .field("options", &self.options)
            .field("elements", &self.elements.len())
            .field("next_deadline", &self.next_deadline())
            .finish()
    }
}
