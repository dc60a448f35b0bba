//! # learnstreak Core Library
//!
//! This library holds the state behind the learnstreak habit tracker: a
//! learning goal with a timeframe, a per-day log of learned and frozen days,
//! streak and freeze counters, and a week-strip calendar. The CLI binary is a
//! thin presentation layer over the same core.
//!
//! ## Architecture
//!
//! - **Goal**: subject, timeframe and the freeze allowance derived from it
//! - **Tracker**: day log plus the streak and freeze bookkeeping
//! - **Calendar**: two independent date cursors and display formatting
//! - **Board**: the single controller owning all state, fed by [`Command`]s
//! - **Storage**: TOML-based configuration (seed counters, default goal)
//!
//! ## Key Components
//!
//! - [`ProgressBoard`]: command router and snapshot builder
//! - [`StreakTracker`]: guarded log/freeze/reset operations
//! - [`CalendarNavigator`]: month and day navigation
//! - [`Config`]: application configuration management

pub mod board;
pub mod calendar;
pub mod error;
pub mod events;
pub mod goal;
pub mod storage;
pub mod tracker;

pub use board::{Command, DayCell, ProgressBoard, ProgressSnapshot};
pub use calendar::{format_full_date, format_month_year, CalendarNavigator, WEEKDAY_HEADERS};
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use goal::{freeze_allowance_for_label, GoalStore, LearningGoal, Timeframe};
pub use storage::Config;
pub use tracker::{DayLog, DayOfMonth, DayState, StreakCounters, StreakTracker};
