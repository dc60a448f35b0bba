//! Streak and freeze bookkeeping.
//!
//! ## Day Transitions
//!
//! ```text
//! Unmarked --log--> Learned   (streak += 1)
//! Learned  --log--> Unmarked  (streak unchanged)
//! Unmarked --freeze--> Frozen (freezes += 1, while under the allowance)
//! any      --reset--> Unmarked
//! ```
//!
//! Neither counter ever goes down. Unlogging a day keeps the streak point it
//! earned, and resetting a frozen day does not refund the freeze.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::day_log::{DayLog, DayOfMonth, DayState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakCounters {
    pub streak_count: u32,
    pub freeze_count: u32,
}

impl Default for StreakCounters {
    /// Demo seeds shown on first launch.
    fn default() -> Self {
        Self {
            streak_count: 10,
            freeze_count: 2,
        }
    }
}

/// Owns the day log and the counters derived from its mutations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreakTracker {
    counters: StreakCounters,
    days: DayLog,
}

impl StreakTracker {
    pub fn new(seed: StreakCounters) -> Self {
        Self {
            counters: seed,
            days: DayLog::new(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn counters(&self) -> StreakCounters {
        self.counters
    }

    pub fn streak_count(&self) -> u32 {
        self.counters.streak_count
    }

    pub fn freeze_count(&self) -> u32 {
        self.counters.freeze_count
    }

    pub fn day_state(&self, day: DayOfMonth) -> DayState {
        self.days.get(day)
    }

    /// Whether the freeze action is available for `day`.
    pub fn can_freeze(&self, day: DayOfMonth, allowance: u32) -> bool {
        let state = self.days.get(day);
        !(state == DayState::Frozen
            || self.counters.freeze_count >= allowance
            || state == DayState::Learned)
    }

    pub fn freezes_remaining(&self, allowance: u32) -> u32 {
        allowance.saturating_sub(self.counters.freeze_count)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Toggle the learned mark on `day` and return the new state.
    ///
    /// Returns `None` for a frozen day; it has to be reset first.
    pub fn log_day(&mut self, day: DayOfMonth) -> Option<DayState> {
        let next = match self.days.get(day) {
            DayState::Frozen => {
                debug!(%day, "log ignored: day is frozen");
                return None;
            }
            DayState::Unmarked => {
                self.counters.streak_count = self.counters.streak_count.saturating_add(1);
                DayState::Learned
            }
            // The streak point earned when logging is kept.
            DayState::Learned => DayState::Unmarked,
        };
        self.days.set(day, next);
        info!(%day, state = ?next, streak = self.counters.streak_count, "day logged");
        Some(next)
    }

    /// Spend one freeze on `day`. Returns the new freeze count.
    pub fn freeze_day(&mut self, day: DayOfMonth, allowance: u32) -> Option<u32> {
        if !self.can_freeze(day, allowance) {
            debug!(
                %day,
                state = ?self.days.get(day),
                freezes = self.counters.freeze_count,
                allowance,
                "freeze rejected"
            );
            return None;
        }
        self.counters.freeze_count += 1;
        self.days.set(day, DayState::Frozen);
        info!(%day, freezes = self.counters.freeze_count, allowance, "day frozen");
        Some(self.counters.freeze_count)
    }

    /// Clear `day` back to unmarked. Returns the state it had before.
    pub fn reset_day(&mut self, day: DayOfMonth) -> DayState {
        let previous = self.days.set(day, DayState::Unmarked);
        info!(%day, previous = ?previous, "day reset");
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(n: u32) -> DayOfMonth {
        DayOfMonth::new(n).unwrap()
    }

    #[test]
    fn default_seed_matches_demo_values() {
        let tracker = StreakTracker::default();
        assert_eq!(tracker.streak_count(), 10);
        assert_eq!(tracker.freeze_count(), 2);
    }

    #[test]
    fn log_toggle_keeps_streak_point() {
        let mut tracker = StreakTracker::default();
        assert_eq!(tracker.log_day(day(4)), Some(DayState::Learned));
        assert_eq!(tracker.streak_count(), 11);
        assert_eq!(tracker.log_day(day(4)), Some(DayState::Unmarked));
        assert_eq!(tracker.streak_count(), 11);
        assert_eq!(tracker.day_state(day(4)), DayState::Unmarked);
    }

    #[test]
    fn log_on_frozen_day_is_noop() {
        let mut tracker = StreakTracker::default();
        tracker.freeze_day(day(4), 6).unwrap();
        assert_eq!(tracker.log_day(day(4)), None);
        assert_eq!(tracker.streak_count(), 10);
        assert_eq!(tracker.day_state(day(4)), DayState::Frozen);
    }

    #[test]
    fn freeze_guards() {
        let mut tracker = StreakTracker::default();

        assert_eq!(tracker.freeze_day(day(1), 6), Some(3));
        // already frozen
        assert_eq!(tracker.freeze_day(day(1), 6), None);

        // already learned
        tracker.log_day(day(2));
        assert!(!tracker.can_freeze(day(2), 6));
        assert_eq!(tracker.freeze_day(day(2), 6), None);

        // allowance spent
        assert_eq!(tracker.freeze_day(day(3), 3), None);
        assert_eq!(tracker.freeze_count(), 3);
    }

    #[test]
    fn reset_keeps_counters() {
        let mut tracker = StreakTracker::default();
        tracker.freeze_day(day(9), 6);
        tracker.log_day(day(10));
        let before = tracker.counters();

        assert_eq!(tracker.reset_day(day(9)), DayState::Frozen);
        assert_eq!(tracker.reset_day(day(10)), DayState::Learned);
        assert_eq!(tracker.reset_day(day(11)), DayState::Unmarked);

        assert_eq!(tracker.counters(), before);
        assert_eq!(tracker.day_state(day(9)), DayState::Unmarked);
    }

    #[test]
    fn freezes_remaining_saturates() {
        let tracker = StreakTracker::new(StreakCounters {
            streak_count: 0,
            freeze_count: 5,
        });
        assert_eq!(tracker.freezes_remaining(6), 1);
        assert_eq!(tracker.freezes_remaining(2), 0);
    }

    #[test]
    fn month_scenario_stops_at_allowance() {
        let mut tracker = StreakTracker::default();
        let allowance = 6;
        for n in 1..=4 {
            assert!(tracker.freeze_day(day(n), allowance).is_some());
        }
        assert_eq!(tracker.freeze_count(), 6);
        assert_eq!(tracker.freeze_day(day(5), allowance), None);
        assert_eq!(tracker.day_state(day(5)), DayState::Unmarked);
    }
}
