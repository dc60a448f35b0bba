mod day_log;
mod streak;

pub use day_log::{DayLog, DayOfMonth, DayState};
pub use streak::{StreakCounters, StreakTracker};
