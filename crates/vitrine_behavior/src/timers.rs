// SPDX-License-Identifier: MIT OR Apache-2.0
//! Timer scheduling on a host-driven clock.
//!
//! Time only moves when the host advances it. Each [`TimerSlot`] holds at
//! most one live timer: arming a slot replaces whatever was armed there, so
//! a restart can never leak a second interval.

use indexmap::IndexMap;
use std::time::Duration;

/// Smallest interval period accepted, zero would never let time advance
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Named timer slots
///
/// The declaration order is also the firing priority for timers due at
/// the same instant: the progress tick lands before the auto-advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimerSlot {
    /// Progress-fill tick
    Progress,
    /// Auto-advance to the next slide
    AutoAdvance,
    /// End of the outgoing transition of a slide
    TransitionOut(usize),
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    due: Duration,
    period: Option<Duration>,
    seq: u64,
}

/// Deterministic timer queue
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now: Duration,
    timers: IndexMap<TimerSlot, Timer>,
    next_seq: u64,
}

impl Scheduler {
    /// Create a scheduler at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock value
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Arm a repeating timer, replacing any timer in the slot
    pub fn set_interval(&mut self, slot: TimerSlot, period: Duration) {
        let period = period.max(MIN_PERIOD);
        self.arm(slot, period, Some(period));
    }

    /// Arm a one-shot timer, replacing any timer in the slot
    pub fn set_timeout(&mut self, slot: TimerSlot, delay: Duration) {
        self.arm(slot, delay, None);
    }

    fn arm(&mut self, slot: TimerSlot, delay: Duration, period: Option<Duration>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        let replaced = self
            .timers
            .insert(
                slot,
                Timer {
                    due: self.now.saturating_add(delay),
                    period,
                    seq,
                },
            )
            .is_some();
        tracing::trace!(?slot, ?delay, replaced, "Armed timer");
    }

    /// Clear a slot, returns true if a timer was live
    pub fn clear(&mut self, slot: TimerSlot) -> bool {
        self.timers.swap_remove(&slot).is_some()
    }

    /// Check whether a slot holds a live timer
    pub fn is_armed(&self, slot: TimerSlot) -> bool {
        self.timers.contains_key(&slot)
    }

    /// Time at which a slot fires next
    pub fn due_at(&self, slot: TimerSlot) -> Option<Duration> {
        self.timers.get(&slot).map(|t| t.due)
    }

    /// Number of live timers
    pub fn armed_count(&self) -> usize {
        self.timers.len()
    }

    /// Pop the earliest timer due at or before `until`.
    ///
    /// The clock moves to the timer's due time. Intervals are re-armed one
    /// period later, timeouts are dropped.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerSlot> {
        let (slot, timer) = self
            .timers
            .iter()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(slot, t)| (t.due, **slot, t.seq))
            .map(|(slot, timer)| (*slot, *timer))?;

        self.now = self.now.max(timer.due);
        match timer.period {
            Some(period) => {
                if let Some(live) = self.timers.get_mut(&slot) {
                    live.due = timer.due.saturating_add(period);
                }
            }
            None => {
                self.timers.swap_remove(&slot);
            }
        }
        Some(slot)
    }

    /// Move the clock forward without firing anything
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}
