#![forbid(unsafe_code)]

//! Deterministic scheduling for viewport recomputes.
//!
//! Scrolling produces event storms; recomputing the visible window on every
//! notification wastes work. This module provides the two scheduling
//! mechanisms a table can run under:
//!
//! - [`DebounceTimer`] — cold mode. A scroll notification arms a one-shot
//!   quiet-period timer; notifications arriving while armed are coalesced
//!   and exactly one recompute fires when the period elapses.
//! - [`FrameLoop`] — hot mode. A one-shot task that the owner re-arms after
//!   every recompute, producing one recompute per display tick for as long
//!   as its guard condition holds.
//!
//! # Design
//!
//! Neither primitive reads a wall clock. The host advances time explicitly
//! via `tick(dt)` from its own frame/event loop, which keeps scheduling
//! fully deterministic under test. Cancellation is synchronous: after
//! `cancel()` returns, the timer cannot fire until re-armed.
//!
//! # Invariants
//!
//! 1. An armed [`DebounceTimer`] fires exactly once, then disarms itself.
//! 2. `arm()` on an already-armed timer does not extend the deadline
//!    (coalescing, matching a `setTimeout`-style one-shot).
//! 3. [`FrameLoop::take_due`] consumes the pending tick; without a fresh
//!    `schedule()` it stays quiet.

use std::time::Duration;

/// Default quiet period between a scroll notification and the recompute.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(100);

/// One-shot coalescing timer for scroll-driven (cold mode) recomputes.
#[derive(Debug, Clone)]
pub struct DebounceTimer {
    window: Duration,
    remaining: Option<Duration>,
}

impl DebounceTimer {
    /// Create a timer with the given quiet period.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            remaining: None,
        }
    }

    /// The configured quiet period.
    #[must_use]
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Arm the timer if it is not already armed.
    ///
    /// Returns `true` if this call armed the timer, `false` if it was
    /// already counting down (the notification is coalesced).
    pub fn arm(&mut self) -> bool {
        if self.remaining.is_some() {
            return false;
        }
        self.remaining = Some(self.window);
        crate::logging::trace!(window = ?self.window, "debounce armed");
        true
    }

    /// Cancel a pending expiry. No-op when disarmed.
    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    /// Whether the timer is counting down.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advance time. Returns `true` exactly once per armed period, when
    /// the quiet period has fully elapsed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };
        match remaining.checked_sub(dt) {
            Some(left) if left > Duration::ZERO => {
                self.remaining = Some(left);
                false
            }
            _ => {
                self.remaining = None;
                crate::logging::trace!("debounce fired");
                true
            }
        }
    }
}

impl Default for DebounceTimer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

/// One-shot per-frame task for continuous (hot mode) recomputes.
///
/// Mirrors `requestAnimationFrame` semantics: each `schedule()` buys one
/// `take_due()`, and the owner re-schedules after every recompute while it
/// wants to stay hot. Cancelling between frames is therefore as simple as
/// not re-scheduling, but [`FrameLoop::cancel`] also drops an already
/// pending tick for deterministic detach.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameLoop {
    scheduled: bool,
}

impl FrameLoop {
    /// Create an idle loop.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request one tick. Idempotent while pending.
    pub fn schedule(&mut self) {
        self.scheduled = true;
    }

    /// Drop any pending tick.
    pub fn cancel(&mut self) {
        self.scheduled = false;
    }

    /// Whether a tick is pending.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Consume the pending tick, if any.
    pub fn take_due(&mut self) -> bool {
        std::mem::take(&mut self.scheduled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_50: Duration = Duration::from_millis(50);
    const MS_100: Duration = Duration::from_millis(100);

    #[test]
    fn debounce_fires_once_after_quiet_period() {
        let mut timer = DebounceTimer::new(MS_100);
        assert!(timer.arm());
        assert!(!timer.tick(MS_50));
        assert!(timer.tick(MS_50));
        // Disarmed: further ticks are quiet.
        assert!(!timer.tick(MS_100));
        assert!(!timer.is_armed());
    }

    #[test]
    fn debounce_coalesces_rearm_while_armed() {
        let mut timer = DebounceTimer::new(MS_100);
        assert!(timer.arm());
        assert!(!timer.tick(MS_50));
        // Second notification mid-period neither re-arms nor extends.
        assert!(!timer.arm());
        assert!(timer.tick(MS_50));
    }

    #[test]
    fn debounce_cancel_prevents_expiry() {
        let mut timer = DebounceTimer::new(MS_100);
        timer.arm();
        timer.cancel();
        assert!(!timer.is_armed());
        assert!(!timer.tick(MS_100));
    }

    #[test]
    fn debounce_large_tick_fires_immediately() {
        let mut timer = DebounceTimer::new(MS_100);
        timer.arm();
        assert!(timer.tick(Duration::from_secs(5)));
    }

    #[test]
    fn debounce_exact_boundary_fires() {
        let mut timer = DebounceTimer::new(MS_100);
        timer.arm();
        assert!(timer.tick(MS_100));
    }

    #[test]
    fn debounce_default_window() {
        let timer = DebounceTimer::default();
        assert_eq!(timer.window(), DEFAULT_DEBOUNCE);
    }

    #[test]
    fn debounce_rearm_after_fire() {
        let mut timer = DebounceTimer::new(MS_100);
        timer.arm();
        assert!(timer.tick(MS_100));
        assert!(timer.arm());
        assert!(timer.tick(MS_100));
    }

    #[test]
    fn frame_loop_one_tick_per_schedule() {
        let mut frames = FrameLoop::new();
        assert!(!frames.take_due());
        frames.schedule();
        assert!(frames.take_due());
        assert!(!frames.take_due());
    }

    #[test]
    fn frame_loop_schedule_is_idempotent() {
        let mut frames = FrameLoop::new();
        frames.schedule();
        frames.schedule();
        assert!(frames.take_due());
        assert!(!frames.take_due());
    }

    #[test]
    fn frame_loop_cancel_drops_pending_tick() {
        let mut frames = FrameLoop::new();
        frames.schedule();
        frames.cancel();
        assert!(!frames.is_scheduled());
        assert!(!frames.take_due());
    }
}
