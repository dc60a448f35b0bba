use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::goal::Timeframe;
use crate::tracker::{DayOfMonth, DayState};

/// Every state change on the board produces an Event.
/// Presentation renders from them; a rejected command produces none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    SubjectChanged {
        subject: String,
        at: DateTime<Utc>,
    },
    TimeframeChanged {
        timeframe: Timeframe,
        freezes_allowed: u32,
        at: DateTime<Utc>,
    },
    DayLogged {
        day: DayOfMonth,
        streak_count: u32,
        at: DateTime<Utc>,
    },
    /// Learned mark removed. The streak keeps the point it gained.
    DayUnlogged {
        day: DayOfMonth,
        streak_count: u32,
        at: DateTime<Utc>,
    },
    DayFrozen {
        day: DayOfMonth,
        freeze_count: u32,
        freezes_allowed: u32,
        at: DateTime<Utc>,
    },
    DayReset {
        day: DayOfMonth,
        previous: DayState,
        at: DateTime<Utc>,
    },
    MonthNavigated {
        learning_start_date: NaiveDate,
        at: DateTime<Utc>,
    },
    DayNavigated {
        current_date: NaiveDate,
        at: DateTime<Utc>,
    },
    WeekAligned {
        learning_start_date: NaiveDate,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        snapshot: crate::board::ProgressSnapshot,
        at: DateTime<Utc>,
    },
}
