//! Week-strip calendar: date cursors and display formatting.

mod format;
mod navigator;

pub use format::{format_full_date, format_month_year, freezes_used_line, parse_date};
pub use navigator::{CalendarNavigator, WEEKDAY_HEADERS, WEEK_LEN};
