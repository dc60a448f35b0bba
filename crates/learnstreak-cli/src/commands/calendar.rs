//! One-shot calendar and goal queries.

use chrono::{Local, NaiveDate};
use learnstreak_core::calendar::parse_date;
use learnstreak_core::{
    format_full_date, format_month_year, freeze_allowance_for_label, CalendarNavigator, DayCell,
    DayOfMonth, DayState,
};

use crate::render;

fn date_or_today(raw: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match raw {
        Some(s) => Ok(parse_date(s)?),
        None => Ok(Local::now().date_naive()),
    }
}

pub fn allowance(timeframe: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", freeze_allowance_for_label(timeframe));
    Ok(())
}

pub fn week(start: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let start = date_or_today(start)?;
    // no progress outside a session, so every cell is unmarked
    let cells: Vec<DayCell> = CalendarNavigator::starting_on(start)
        .week_window()
        .into_iter()
        .map(|date| DayCell {
            date,
            day: DayOfMonth::of(date),
            state: DayState::Unmarked,
            is_current: date == start,
        })
        .collect();
    println!("  {}", format_month_year(start));
    println!("{}", render::strip(&cells));
    Ok(())
}

pub fn format(date: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let date = date_or_today(date)?;
    println!("{}", format_full_date(date));
    println!("{}", format_month_year(date));
    Ok(())
}
