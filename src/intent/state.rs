//! Per-element dwell state
//!
//! One `ElementHoverState` exists per observed element, created on first
//! pointer-enter and reset (not removed) when a dwell session completes.
//! A single explicit phase enum replaces a confirmed-flag/timer-handle pair,
//! making impossible combinations unrepresentable.
//!
//! ## Phase Transitions
//!
//! ```text
//! Idle        -> Polling      (pointer-enter, not scrolling)
//! Polling     -> Confirmed    (poll finds displacement under threshold)
//! Polling     -> Idle         (pointer-leave before confirmation; no callback)
//! Confirmed   -> ExitPending  (pointer-leave; exit timer armed)
//! ExitPending -> Confirmed    (pointer-enter within the exit window)
//! ExitPending -> Idle         (exit timer expires; leave callback fires)
//! ```

use crate::signal::{Point, PointerSignal};
use crate::time::Timestamp;

/// Phase of one element's dwell session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DwellPhase {
    /// No session in progress
    #[default]
    Idle,
    /// Entered, intent not yet confirmed, poll timer active
    Polling,
    /// Intent confirmed, enter callback fired, no timer
    Confirmed,
    /// Left after confirmation, exit timer active
    ExitPending,
}

impl DwellPhase {
    /// Check if a session is in progress at all
    pub fn is_active(&self) -> bool {
        !matches!(self, DwellPhase::Idle)
    }

    /// Check if the enter callback has fired and the leave callback has not
    pub fn is_hover_confirmed(&self) -> bool {
        matches!(self, DwellPhase::Confirmed | DwellPhase::ExitPending)
    }

    /// Check if a poll is outstanding
    pub fn is_polling(&self) -> bool {
        matches!(self, DwellPhase::Polling)
    }
}

/// What a pending timer does when it expires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Run the displacement comparison
    IntentPoll,
    /// Fire the delayed leave callback
    ExitDelay,
}

/// A scheduled callback for one element.
///
/// At most one exists per element; scheduling a new one always replaces
/// the old one (cancel-before-schedule discipline).
#[derive(Debug, Clone)]
pub struct PendingTimer {
    /// When the timer fires
    pub deadline: Timestamp,
    /// What happens at expiry
    pub kind: TimerKind,
    /// Scheduling order, for deterministic ties between equal deadlines
    pub seq: u64,
    /// The signal handed to the user callback when this timer completes a
    /// transition: the original enter signal for polls, the leave signal
    /// for exit delays
    pub origin: PointerSignal,
}

/// Mutable state for one observed element
#[derive(Debug, Default)]
pub struct ElementHoverState {
    /// Current dwell phase
    pub phase: DwellPhase,
    /// The single outstanding timer, if any
    pub timer: Option<PendingTimer>,
    /// Polling baseline, set on entry and refreshed each interval
    pub last_sample: Point,
    /// Element-local pointer position (per-element tracking mode only)
    pub current: Option<Point>,
    /// Whether this element currently consumes motion signals
    pub tracking_motion: bool,
}

impl ElementHoverState {
    /// Cancel the outstanding timer, if any. Safe to call when none exists.
    pub fn cancel_timer(&mut self) -> Option<PendingTimer> {
        self.timer.take()
    }

    /// Replace the outstanding timer with a new one.
    pub fn schedule(&mut self, timer: PendingTimer) {
        self.timer = Some(timer);
    }

    /// Deadline of the outstanding timer, if any.
    pub fn deadline(&self) -> Option<Timestamp> {
        self.timer.as_ref().map(|t| t.deadline)
    }

    /// Reset to the initial state, keeping the allocation alive for the
    /// next dwell session on the same element.
    pub fn reset(&mut self) {
        self.phase = DwellPhase::Idle;
        self.timer = None;
        self.current = None;
        self.tracking_motion = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::ElementId;

    fn make_timer(deadline_ms: u64, kind: TimerKind, seq: u64) -> PendingTimer {
        PendingTimer {
            deadline: Timestamp::from_millis(deadline_ms),
            kind,
            seq,
            origin: PointerSignal::enter(
                ElementId(1),
                Point::ZERO,
                Timestamp::from_millis(0),
            ),
        }
    }

    #[test]
    fn test_default_phase_is_idle() {
        let state = ElementHoverState::default();
        assert_eq!(state.phase, DwellPhase::Idle);
        assert!(!state.phase.is_active());
        assert!(state.timer.is_none());
        assert!(!state.tracking_motion);
    }

    #[test]
    fn test_phase_predicates() {
        assert!(!DwellPhase::Idle.is_active());
        assert!(DwellPhase::Polling.is_active());
        assert!(DwellPhase::Confirmed.is_active());
        assert!(DwellPhase::ExitPending.is_active());

        assert!(!DwellPhase::Idle.is_hover_confirmed());
        assert!(!DwellPhase::Polling.is_hover_confirmed());
        assert!(DwellPhase::Confirmed.is_hover_confirmed());
        assert!(DwellPhase::ExitPending.is_hover_confirmed());

        assert!(DwellPhase::Polling.is_polling());
        assert!(!DwellPhase::Confirmed.is_polling());
    }

    #[test]
    fn test_cancel_timer_is_idempotent() {
        let mut state = ElementHoverState::default();
        assert!(state.cancel_timer().is_none());

        state.schedule(make_timer(100, TimerKind::IntentPoll, 0));
        assert!(state.cancel_timer().is_some());
        assert!(state.cancel_timer().is_none());
    }

    #[test]
    fn test_schedule_replaces_previous_timer() {
        let mut state = ElementHoverState::default();
        state.schedule(make_timer(100, TimerKind::IntentPoll, 0));
        state.schedule(make_timer(400, TimerKind::ExitDelay, 1));

        let timer = state.timer.as_ref().unwrap();
        assert_eq!(timer.kind, TimerKind::ExitDelay);
        assert_eq!(timer.deadline, Timestamp::from_millis(400));
        assert_eq!(timer.seq, 1);
    }

    #[test]
    fn test_deadline_accessor() {
        let mut state = ElementHoverState::default();
        assert!(state.deadline().is_none());
        state.schedule(make_timer(250, TimerKind::IntentPoll, 0));
        assert_eq!(state.deadline(), Some(Timestamp::from_millis(250)));
    }

    #[test]
    fn test_reset_clears_session_state() {
        let mut state = ElementHoverState {
            phase: DwellPhase::Confirmed,
            timer: Some(make_timer(100, TimerKind::ExitDelay, 3)),
            last_sample: Point::new(5.0, 5.0),
            current: Some(Point::new(6.0, 6.0)),
            tracking_motion: true,
        };

        state.reset();

        assert_eq!(state.phase, DwellPhase::Idle);
        assert!(state.timer.is_none());
        assert!(state.current.is_none());
        assert!(!state.tracking_motion);
        // The baseline is overwritten on the next entry; reset need not touch it
        assert_eq!(state.last_sample, Point::new(5.0, 5.0));
    }
}
