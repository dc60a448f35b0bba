use chrono::NaiveDate;

use crate::error::ValidationError;

/// Long-form date, e.g. `Saturday, October 17, 2026`.
pub fn format_full_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Month header for the strip, e.g. `October 2026`.
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

pub fn freezes_used_line(used: u32, allowed: u32) -> String {
    format!("{used} out of {allowed} freezes used")
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = s.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
}
