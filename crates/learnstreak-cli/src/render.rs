//! Plain-text rendering of the progress board.

use learnstreak_core::{DayCell, DayState, Event, ProgressSnapshot, WEEKDAY_HEADERS};

/// One strip cell, four columns wide to sit under the weekday headers.
///
/// `>` marks the logging day, `*` a learned day and `~` a frozen one.
pub fn cell(cell: &DayCell) -> String {
    let cursor = if cell.is_current { '>' } else { ' ' };
    let mark = match cell.state {
        DayState::Unmarked => ' ',
        DayState::Learned => '*',
        DayState::Frozen => '~',
    };
    format!("{cursor}{:>2}{mark}", cell.day.get())
}

pub fn strip(cells: &[DayCell]) -> String {
    let header = WEEKDAY_HEADERS
        .iter()
        .map(|h| format!(" {h}"))
        .collect::<String>();
    let days = cells.iter().map(cell).collect::<String>();
    format!("{header}\n{days}")
}

pub fn board(snap: &ProgressSnapshot) -> String {
    let freeze = if snap.can_freeze {
        "Freeze day"
    } else {
        "Freeze day (unavailable)"
    };
    let mut lines = vec![
        snap.full_date.clone(),
        format!("Learning {}", snap.subject),
        String::new(),
        format!("  {}", snap.month_year),
        strip(&snap.week),
    ];
    if !snap.current_in_window {
        lines.push(format!("  (logging {} is outside this week)", snap.current_date));
    }
    lines.extend([
        String::new(),
        format!(
            "{} day streak | {} days freezed",
            snap.streak_count, snap.freeze_count
        ),
        format!("[ {} ]  {}", snap.current_day_state.caption(), freeze),
        snap.freezes_used.clone(),
    ]);
    lines.join("\n")
}

/// Short human summary of an event.
pub fn event(event: &Event) -> String {
    match event {
        Event::SubjectChanged { subject, .. } => format!("subject set to '{subject}'"),
        Event::TimeframeChanged {
            timeframe,
            freezes_allowed,
            ..
        } => format!("timeframe set to {timeframe} ({freezes_allowed} freezes allowed)"),
        Event::DayLogged {
            day, streak_count, ..
        } => format!("day {day} learned, streak {streak_count}"),
        Event::DayUnlogged {
            day, streak_count, ..
        } => format!("day {day} unmarked, streak stays {streak_count}"),
        Event::DayFrozen {
            day,
            freeze_count,
            freezes_allowed,
            ..
        } => format!("day {day} frozen ({freeze_count}/{freezes_allowed})"),
        Event::DayReset { day, previous, .. } => {
            format!("day {day} reset (was {})", previous.caption())
        }
        Event::MonthNavigated {
            learning_start_date,
            ..
        } => format!("week starts {learning_start_date}"),
        Event::DayNavigated { current_date, .. } => format!("logging {current_date}"),
        Event::WeekAligned {
            learning_start_date,
            ..
        } => format!("week aligned to {learning_start_date}"),
        Event::StateSnapshot { snapshot, .. } => board(snapshot),
    }
}
