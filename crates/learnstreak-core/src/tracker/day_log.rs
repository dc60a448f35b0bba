use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const DAYS: usize = 31;

/// Day of the month, always within `1..=31`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DayOfMonth(u8);

impl DayOfMonth {
    pub fn new(day: u32) -> Result<Self, ValidationError> {
        if (1..=DAYS as u32).contains(&day) {
            Ok(Self(day as u8))
        } else {
            Err(ValidationError::DayOutOfRange(day))
        }
    }

    pub fn of(date: NaiveDate) -> Self {
        // chrono guarantees 1..=31 here
        Self(date.day() as u8)
    }

    pub fn get(self) -> u32 {
        self.0 as u32
    }

    fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl TryFrom<u32> for DayOfMonth {
    type Error = ValidationError;

    fn try_from(day: u32) -> Result<Self, Self::Error> {
        Self::new(day)
    }
}

impl From<DayOfMonth> for u32 {
    fn from(day: DayOfMonth) -> Self {
        day.get()
    }
}

impl fmt::Display for DayOfMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayState {
    #[default]
    Unmarked,
    Learned,
    Frozen,
}

impl DayState {
    /// Caption shown on the main action for a day in this state.
    pub fn caption(self) -> &'static str {
        match self {
            DayState::Unmarked => "Log today as Learned",
            DayState::Learned => "Learned Today",
            DayState::Frozen => "Day Freezed",
        }
    }
}

/// Per-day state keyed by day of month.
///
/// Days are not tied to a month: day 5 of January and day 5 of February share
/// a slot. The log lives only as long as the process.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DayLog {
    days: [DayState; DAYS],
}

impl DayLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, day: DayOfMonth) -> DayState {
        self.days[day.index()]
    }

    /// Store `state` for `day`, returning the previous state.
    pub fn set(&mut self, day: DayOfMonth, state: DayState) -> DayState {
        std::mem::replace(&mut self.days[day.index()], state)
    }
}
