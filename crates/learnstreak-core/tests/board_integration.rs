//! Integration tests for the progress board.
//!
//! These tests drive the board through command sequences the way the CLI
//! session does and check the snapshots presentation would draw.

use chrono::NaiveDate;
use learnstreak_core::{
    CalendarNavigator, Command, Config, DayState, Event, ProgressBoard, Timeframe,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn board_on(day: NaiveDate) -> ProgressBoard {
    ProgressBoard::from_config(&Config::default(), CalendarNavigator::starting_on(day))
}

fn run(board: &mut ProgressBoard, script: &str) -> Vec<Option<Event>> {
    script
        .lines()
        .map(|line| board.apply(line.parse::<Command>().unwrap()))
        .collect()
}

#[test]
fn test_month_allowance_scenario() {
    let mut board = board_on(date(2024, 6, 10));
    assert_eq!(board.goal().total_freezes_allowed(), 6);
    assert_eq!(board.tracker().freeze_count(), 2);

    let outcomes = run(
        &mut board,
        "freeze\nday +1\nfreeze\nday +1\nfreeze\nday +1\nfreeze\nday +1\nfreeze",
    );

    let frozen = outcomes
        .iter()
        .filter(|o| matches!(o, Some(Event::DayFrozen { .. })))
        .count();
    assert_eq!(frozen, 4);
    assert_eq!(outcomes.last().unwrap(), &None);

    let snap = board.snapshot();
    assert_eq!(snap.freeze_count, 6);
    assert_eq!(snap.freezes_remaining, 0);
    assert_eq!(snap.freezes_used, "6 out of 6 freezes used");
    assert!(!snap.can_freeze);
    assert_eq!(snap.current_day_state, DayState::Unmarked);
}

#[test]
fn test_switching_to_year_reopens_freezing() {
    let mut board = board_on(date(2024, 6, 10));
    run(&mut board, "timeframe week");
    assert!(!board.can_freeze());

    run(&mut board, "timeframe year");
    assert!(board.can_freeze());
    assert!(board.apply(Command::FreezeDay).is_some());
    assert_eq!(board.snapshot().freezes_used, "3 out of 12 freezes used");
}

#[test]
fn test_cursors_move_independently() {
    let mut board = board_on(date(2024, 1, 31));
    run(&mut board, "month +1\nday +3");

    let snap = board.snapshot();
    assert_eq!(snap.learning_start_date, date(2024, 2, 29));
    assert_eq!(snap.month_year, "February 2024");
    assert_eq!(snap.current_date, date(2024, 2, 3));
    assert_eq!(snap.full_date, "Saturday, February 3, 2024");
    assert!(snap.week.iter().all(|c| !c.is_current));

    run(&mut board, "align");
    let snap = board.snapshot();
    assert_eq!(snap.learning_start_date, date(2024, 2, 3));
    assert!(snap.week[0].is_current);
}

#[test]
fn test_learn_freeze_reset_cycle() {
    let mut board = board_on(date(2024, 6, 10));
    let outcomes = run(&mut board, "log\nfreeze\nlog\nfreeze\nlog\nreset\nlog");

    assert!(matches!(outcomes[0], Some(Event::DayLogged { streak_count: 11, .. })));
    // learned days cannot be frozen
    assert_eq!(outcomes[1], None);
    assert!(matches!(outcomes[2], Some(Event::DayUnlogged { streak_count: 11, .. })));
    assert!(matches!(outcomes[3], Some(Event::DayFrozen { freeze_count: 3, .. })));
    // frozen days cannot be logged
    assert_eq!(outcomes[4], None);
    assert!(matches!(
        outcomes[5],
        Some(Event::DayReset {
            previous: DayState::Frozen,
            ..
        })
    ));
    assert!(matches!(outcomes[6], Some(Event::DayLogged { streak_count: 12, .. })));

    let snap = board.snapshot();
    assert_eq!(snap.freeze_count, 3);
    assert_eq!(snap.current_day_state, DayState::Learned);
}

#[test]
fn test_configured_goal_and_seed() {
    let mut config = Config::default();
    config.set_value("goal.subject", "Category theory").unwrap();
    config.set_value("goal.timeframe", "week").unwrap();
    config.set_value("seed.streak_count", "0").unwrap();
    config.set_value("seed.freeze_count", "0").unwrap();

    let board = ProgressBoard::from_config(&config, CalendarNavigator::starting_on(date(2024, 6, 10)));
    let snap = board.snapshot();
    assert_eq!(snap.subject, "Category theory");
    assert_eq!(snap.timeframe, Timeframe::Week);
    assert_eq!(snap.freezes_allowed, 2);
    assert_eq!(snap.streak_count, 0);
    assert_eq!(snap.freezes_used, "0 out of 2 freezes used");
}

#[test]
fn test_snapshot_event_serializes() {
    let board = board_on(date(2026, 10, 17));
    let json = serde_json::to_value(board.snapshot_event()).unwrap();
    assert_eq!(json["type"], "state_snapshot");
    assert_eq!(json["snapshot"]["timeframe"], "month");
    assert_eq!(json["snapshot"]["week"][0]["day"], 17);
    assert_eq!(json["snapshot"]["week"][0]["state"], "unmarked");
    assert_eq!(json["snapshot"]["current_date"], "2026-10-17");
}
