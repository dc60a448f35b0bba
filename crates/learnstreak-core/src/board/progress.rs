//! The progress board.
//!
//! One controller owns every piece of mutable state: the goal, the streak
//! tracker and the calendar cursors. Presentation sends [`Command`]s in and
//! renders from [`ProgressSnapshot`]s; it never holds state of its own.
//!
//! ## Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use learnstreak_core::{CalendarNavigator, Command, Config, Event, ProgressBoard};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
//! let mut board = ProgressBoard::from_config(&Config::default(), CalendarNavigator::starting_on(today));
//! if let Some(event) = board.apply(Command::LogDay) {
//!     assert!(matches!(event, Event::DayLogged { streak_count: 11, .. }));
//! }
//! let view = board.snapshot();
//! assert_eq!(view.full_date, "Monday, June 10, 2024");
//! ```

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::command::Command;
use crate::calendar::{format_full_date, format_month_year, freezes_used_line, CalendarNavigator};
use crate::events::Event;
use crate::goal::{GoalStore, LearningGoal, Timeframe};
use crate::storage::Config;
use crate::tracker::{DayOfMonth, DayState, StreakCounters, StreakTracker};

/// One cell of the week strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: DayOfMonth,
    pub state: DayState,
    /// The cell is the day currently being logged.
    pub is_current: bool,
}

/// Everything presentation needs to draw the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub subject: String,
    pub timeframe: Timeframe,
    pub freezes_allowed: u32,
    pub streak_count: u32,
    pub freeze_count: u32,
    pub freezes_remaining: u32,
    pub freezes_used: String,
    pub can_freeze: bool,
    pub current_date: NaiveDate,
    pub current_day_state: DayState,
    pub full_date: String,
    /// `current_date` is one of the cells in `week`.
    pub current_in_window: bool,
    pub learning_start_date: NaiveDate,
    pub month_year: String,
    pub week: Vec<DayCell>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressBoard {
    goal: GoalStore,
    tracker: StreakTracker,
    calendar: CalendarNavigator,
}

impl ProgressBoard {
    pub fn new(goal: LearningGoal, seed: StreakCounters, calendar: CalendarNavigator) -> Self {
        Self {
            goal: GoalStore::new(goal),
            tracker: StreakTracker::new(seed),
            calendar,
        }
    }

    /// Board seeded from the configured goal and counters.
    pub fn from_config(config: &Config, calendar: CalendarNavigator) -> Self {
        Self::new(config.learning_goal(), config.seed_counters(), calendar)
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn goal(&self) -> &GoalStore {
        &self.goal
    }

    pub fn tracker(&self) -> &StreakTracker {
        &self.tracker
    }

    pub fn calendar(&self) -> &CalendarNavigator {
        &self.calendar
    }

    /// Day of month the day-targeting commands act on.
    pub fn current_day(&self) -> DayOfMonth {
        DayOfMonth::of(self.calendar.current_date())
    }

    pub fn can_freeze(&self) -> bool {
        self.tracker
            .can_freeze(self.current_day(), self.goal.total_freezes_allowed())
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        let allowed = self.goal.total_freezes_allowed();
        let current_date = self.calendar.current_date();
        let start = self.calendar.learning_start_date();
        let week = self
            .calendar
            .week_window()
            .into_iter()
            .map(|date| {
                let day = DayOfMonth::of(date);
                DayCell {
                    date,
                    day,
                    state: self.tracker.day_state(day),
                    is_current: date == current_date,
                }
            })
            .collect();

        ProgressSnapshot {
            subject: self.goal.subject().to_string(),
            timeframe: self.goal.timeframe(),
            freezes_allowed: allowed,
            streak_count: self.tracker.streak_count(),
            freeze_count: self.tracker.freeze_count(),
            freezes_remaining: self.tracker.freezes_remaining(allowed),
            freezes_used: freezes_used_line(self.tracker.freeze_count(), allowed),
            can_freeze: self.can_freeze(),
            current_date,
            current_day_state: self.tracker.day_state(self.current_day()),
            full_date: format_full_date(current_date),
            current_in_window: self.calendar.current_in_window(),
            learning_start_date: start,
            month_year: format_month_year(start),
            week,
        }
    }

    pub fn snapshot_event(&self) -> Event {
        Event::StateSnapshot {
            snapshot: self.snapshot(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Route a command. Returns `None` when a guard turned it into a no-op.
    pub fn apply(&mut self, command: Command) -> Option<Event> {
        match command {
            Command::SetSubject(subject) => Some(self.set_subject(subject)),
            Command::SetTimeframe(timeframe) => Some(self.set_timeframe(timeframe)),
            Command::LogDay => self.log_day(),
            Command::FreezeDay => self.freeze_day(),
            Command::ResetDay => Some(self.reset_day()),
            Command::NavigateMonth(delta) => self.navigate_month(delta),
            Command::NavigateDay(delta) => self.navigate_day(delta),
            Command::AlignWeek => Some(self.align_week()),
        }
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) -> Event {
        self.goal.set_subject(subject);
        Event::SubjectChanged {
            subject: self.goal.subject().to_string(),
            at: Utc::now(),
        }
    }

    pub fn set_timeframe(&mut self, timeframe: Timeframe) -> Event {
        let freezes_allowed = self.goal.set_timeframe(timeframe);
        Event::TimeframeChanged {
            timeframe,
            freezes_allowed,
            at: Utc::now(),
        }
    }

    pub fn log_day(&mut self) -> Option<Event> {
        let day = self.current_day();
        let state = self.tracker.log_day(day)?;
        let streak_count = self.tracker.streak_count();
        let at = Utc::now();
        Some(match state {
            DayState::Learned => Event::DayLogged {
                day,
                streak_count,
                at,
            },
            _ => Event::DayUnlogged {
                day,
                streak_count,
                at,
            },
        })
    }

    pub fn freeze_day(&mut self) -> Option<Event> {
        let day = self.current_day();
        let freezes_allowed = self.goal.total_freezes_allowed();
        let freeze_count = self.tracker.freeze_day(day, freezes_allowed)?;
        Some(Event::DayFrozen {
            day,
            freeze_count,
            freezes_allowed,
            at: Utc::now(),
        })
    }

    pub fn reset_day(&mut self) -> Event {
        let day = self.current_day();
        let previous = self.tracker.reset_day(day);
        Event::DayReset {
            day,
            previous,
            at: Utc::now(),
        }
    }

    pub fn navigate_month(&mut self, delta: i32) -> Option<Event> {
        let learning_start_date = self.calendar.navigate_month(delta)?;
        Some(Event::MonthNavigated {
            learning_start_date,
            at: Utc::now(),
        })
    }

    pub fn navigate_day(&mut self, delta: i64) -> Option<Event> {
        let current_date = self.calendar.navigate_day(delta)?;
        Some(Event::DayNavigated {
            current_date,
            at: Utc::now(),
        })
    }

    pub fn align_week(&mut self) -> Event {
        Event::WeekAligned {
            learning_start_date: self.calendar.align_week_to_current(),
            at: Utc::now(),
        }
    }
}
