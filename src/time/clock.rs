//! Monotonic Clock Bridge
//!
//! Provides microsecond-precision timing anchored to a process-wide
//! `std::time::Instant` origin. Timestamps store raw microsecond ticks;
//! conversion to coarser units is deferred until needed, so the hot path
//! (stamping a pointer signal) is a single subtraction.
//!
//! Traces and tests construct timestamps directly from milliseconds and
//! never touch the real clock, which keeps replay fully deterministic.

use std::sync::OnceLock;
use std::time::Instant;

/// Process-wide clock origin, set once at startup
static CLOCK_ORIGIN: OnceLock<Instant> = OnceLock::new();

/// Monotonic clock anchored at process startup
///
/// This struct provides:
/// - Microsecond precision timestamps
/// - Monotonic guarantees (time never goes backward)
/// - Identical behavior on every platform `Instant` supports
#[derive(Debug, Clone, Copy)]
pub struct MonoClock;

impl MonoClock {
    /// Initialize the clock. Call once at startup.
    /// Pins the origin `Instant` that all timestamps are measured against.
    pub fn init() {
        CLOCK_ORIGIN.get_or_init(Instant::now);
    }

    /// Get current time in microsecond ticks since the clock origin.
    #[inline]
    pub fn now_ticks() -> u64 {
        let origin = CLOCK_ORIGIN.get().expect("MonoClock::init() not called");
        origin.elapsed().as_micros() as u64
    }

    /// Get current time in milliseconds since the clock origin.
    #[inline]
    pub fn now_millis() -> u64 {
        Self::now_ticks() / 1_000
    }

    /// Calculate elapsed time between two tick values in microseconds.
    /// Returns 0 if end < start.
    #[inline]
    pub fn elapsed_micros(start_ticks: u64, end_ticks: u64) -> u64 {
        end_ticks.saturating_sub(start_ticks)
    }

    /// Calculate elapsed time in milliseconds.
    #[inline]
    pub fn elapsed_millis(start_ticks: u64, end_ticks: u64) -> u64 {
        Self::elapsed_micros(start_ticks, end_ticks) / 1_000
    }

    /// Check if two tick values maintain monotonicity.
    /// Returns true if t2 >= t1.
    #[inline]
    pub fn is_monotonic(t1: u64, t2: u64) -> bool {
        t2 >= t1
    }
}

/// A timestamp wrapper that stores raw microsecond ticks.
/// Conversion to human-readable units is deferred until needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Create a timestamp from raw microsecond ticks.
    #[inline]
    pub const fn from_ticks(ticks: u64) -> Self {
        Self(ticks)
    }

    /// Create a timestamp from milliseconds since the clock origin.
    #[inline]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis * 1_000)
    }

    /// Capture current timestamp. Requires `MonoClock::init()`.
    #[inline]
    pub fn now() -> Self {
        Self(MonoClock::now_ticks())
    }

    /// Get the raw tick value.
    #[inline]
    pub const fn ticks(&self) -> u64 {
        self.0
    }

    /// Convert to microseconds.
    #[inline]
    pub const fn as_micros(&self) -> u64 {
        self.0
    }

    /// Convert to milliseconds.
    #[inline]
    pub const fn as_millis(&self) -> u64 {
        self.0 / 1_000
    }

    /// Calculate duration since another timestamp, saturating at zero.
    #[inline]
    pub fn duration_since(&self, earlier: Timestamp) -> Duration {
        Duration::from_ticks(self.0.saturating_sub(earlier.0))
    }

    /// Shift this timestamp forward by a duration, saturating at u64::MAX.
    #[inline]
    pub fn advanced_by(&self, duration: Duration) -> Timestamp {
        Timestamp(self.0.saturating_add(duration.ticks()))
    }

    /// Check if this timestamp is after another.
    #[inline]
    pub fn is_after(&self, other: Timestamp) -> bool {
        self.0 > other.0
    }
}

impl serde::Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as raw ticks for maximum precision
        serializer.serialize_u64(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let ticks = u64::deserialize(deserializer)?;
        Ok(Timestamp(ticks))
    }
}

/// A duration wrapper using raw microsecond ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(u64);

impl Duration {
    /// Create a duration from raw microsecond ticks.
    #[inline]
    pub const fn from_ticks(ticks: u64) -> Self {
        Self(ticks)
    }

    /// Create a duration from microseconds.
    #[inline]
    pub const fn from_micros(micros: u64) -> Self {
        Self(micros)
    }

    /// Create a duration from milliseconds.
    #[inline]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis * 1_000)
    }

    /// Get raw tick count.
    #[inline]
    pub const fn ticks(&self) -> u64 {
        self.0
    }

    /// Convert to microseconds.
    #[inline]
    pub const fn as_micros(&self) -> u64 {
        self.0
    }

    /// Convert to milliseconds.
    #[inline]
    pub const fn as_millis(&self) -> u64 {
        self.0 / 1_000
    }

    /// Convert to seconds as f64.
    #[inline]
    pub fn as_secs_f64(&self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }

    /// Zero duration.
    pub const ZERO: Duration = Duration(0);
}

impl std::ops::Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Self) -> Self::Output {
        Duration(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Self::Output {
        Duration(self.0.saturating_sub(rhs.0))
    }
}
