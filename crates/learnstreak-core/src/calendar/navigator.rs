//! Calendar cursors.
//!
//! Two cursors move independently:
//!
//! - `learning_start_date` is the first day of the 7-day strip and moves by
//!   whole months.
//! - `current_date` is the day being logged or frozen and moves by days.
//!
//! Moving one never moves the other, so `current_date` can sit outside the
//! visible strip. [`CalendarNavigator::align_week_to_current`] brings the
//! strip back onto the logging day.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const WEEK_LEN: usize = 7;

/// Header row rendered above the strip.
pub const WEEKDAY_HEADERS: [&str; WEEK_LEN] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarNavigator {
    learning_start_date: NaiveDate,
    current_date: NaiveDate,
}

impl CalendarNavigator {
    pub fn new(learning_start_date: NaiveDate, current_date: NaiveDate) -> Self {
        Self {
            learning_start_date,
            current_date,
        }
    }

    /// Both cursors on the same day.
    pub fn starting_on(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    pub fn learning_start_date(&self) -> NaiveDate {
        self.learning_start_date
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    /// The seven dates shown in the strip, starting at `learning_start_date`.
    pub fn week_window(&self) -> [NaiveDate; WEEK_LEN] {
        let mut window = [self.learning_start_date; WEEK_LEN];
        for (offset, slot) in window.iter_mut().enumerate() {
            *slot = self
                .learning_start_date
                .checked_add_days(Days::new(offset as u64))
                .unwrap_or(self.learning_start_date);
        }
        window
    }

    /// Whether `current_date` falls inside the visible strip.
    pub fn current_in_window(&self) -> bool {
        self.week_window().contains(&self.current_date)
    }

    /// Move the strip by `delta` calendar months.
    ///
    /// The day is clamped to the end of shorter months. Returns the new start
    /// date, or `None` if the result is out of range (cursor unchanged).
    pub fn navigate_month(&mut self, delta: i32) -> Option<NaiveDate> {
        let months = Months::new(delta.unsigned_abs());
        let moved = if delta >= 0 {
            self.learning_start_date.checked_add_months(months)
        } else {
            self.learning_start_date.checked_sub_months(months)
        };
        match moved {
            Some(date) => {
                debug!(from = %self.learning_start_date, to = %date, delta, "month navigated");
                self.learning_start_date = date;
                Some(date)
            }
            None => {
                warn!(from = %self.learning_start_date, delta, "month navigation out of range");
                None
            }
        }
    }

    /// Move the logging day by `delta` days.
    ///
    /// Returns the new date, or `None` if out of range (cursor unchanged).
    pub fn navigate_day(&mut self, delta: i64) -> Option<NaiveDate> {
        let days = Days::new(delta.unsigned_abs());
        let moved = if delta >= 0 {
            self.current_date.checked_add_days(days)
        } else {
            self.current_date.checked_sub_days(days)
        };
        match moved {
            Some(date) => {
                debug!(from = %self.current_date, to = %date, delta, "day navigated");
                self.current_date = date;
                Some(date)
            }
            None => {
                warn!(from = %self.current_date, delta, "day navigation out of range");
                None
            }
        }
    }

    /// Start the strip on the logging day. Returns the new start date.
    pub fn align_week_to_current(&mut self) -> NaiveDate {
        self.learning_start_date = self.current_date;
        self.learning_start_date
    }
}
