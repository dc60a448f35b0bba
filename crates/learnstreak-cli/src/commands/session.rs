//! Interactive progress session.
//!
//! Reads one board command per line from stdin and prints what changed.
//! Progress lives only as long as the process.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use clap::Args;
use learnstreak_core::calendar::parse_date;
use learnstreak_core::{CalendarNavigator, Command, Config, Event, ProgressBoard, Timeframe};
use tracing::{debug, info};

use crate::render;

#[derive(Args)]
pub struct SessionArgs {
    /// Subject to learn (overrides goal.subject)
    #[arg(long)]
    subject: Option<String>,
    /// Goal timeframe: week, month or year (overrides goal.timeframe)
    #[arg(long)]
    timeframe: Option<Timeframe>,
    /// First day of the week strip (YYYY-MM-DD), defaults to --today
    #[arg(long)]
    start: Option<String>,
    /// Day being logged (YYYY-MM-DD), defaults to the local date
    #[arg(long)]
    today: Option<String>,
    /// Emit one JSON event per line instead of text
    #[arg(long)]
    json: bool,
}

fn build_board(args: &SessionArgs) -> Result<ProgressBoard, Box<dyn std::error::Error>> {
    let mut config = Config::load_or_default();
    if let Some(subject) = &args.subject {
        config.goal.subject = subject.clone();
    }
    if let Some(timeframe) = args.timeframe {
        config.goal.timeframe = timeframe;
    }

    let today = match &args.today {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };
    let start: NaiveDate = match &args.start {
        Some(s) => parse_date(s)?,
        None => today,
    };

    Ok(ProgressBoard::from_config(&config, CalendarNavigator::new(start, today)))
}

fn emit_json(out: &mut impl Write, value: &impl serde::Serialize) -> std::io::Result<()> {
    let line = serde_json::to_string(value).map_err(std::io::Error::other)?;
    writeln!(out, "{line}")
}

fn emit_outcome(
    out: &mut impl Write,
    json: bool,
    line: &str,
    outcome: Option<&Event>,
) -> std::io::Result<()> {
    match (outcome, json) {
        (Some(event), true) => emit_json(out, event),
        (None, true) => emit_json(out, &serde_json::json!({ "type": "no_op", "command": line })),
        (Some(event), false) => writeln!(out, "{}", render::event(event)),
        (None, false) => writeln!(out, "no-op: {line}"),
    }
}

/// Drive `board` from `input` until EOF or `quit`.
pub fn drive(
    board: &mut ProgressBoard,
    input: impl BufRead,
    out: &mut impl Write,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !json {
        writeln!(out, "{}\n", render::board(&board.snapshot()))?;
    }

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.to_ascii_lowercase().as_str() {
            "quit" | "exit" => break,
            "show" => {
                if json {
                    emit_json(out, &board.snapshot_event())?;
                } else {
                    writeln!(out, "{}\n", render::board(&board.snapshot()))?;
                }
                continue;
            }
            _ => {}
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                debug!(line, error = %e, "unparseable session command");
                if json {
                    emit_json(
                        out,
                        &serde_json::json!({
                            "type": "error",
                            "command": line,
                            "message": e.to_string(),
                        }),
                    )?;
                } else {
                    eprintln!("error: {e}");
                }
                continue;
            }
        };

        let outcome = board.apply(command);
        emit_outcome(out, json, line, outcome.as_ref())?;
        if !json {
            writeln!(out, "\n{}\n", render::board(&board.snapshot()))?;
        }
    }

    if json {
        emit_json(out, &board.snapshot_event())?;
    }
    out.flush()?;
    Ok(())
}

pub fn run(args: SessionArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = build_board(&args)?;
    info!(
        subject = board.goal().subject(),
        timeframe = %board.goal().timeframe(),
        "session started"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    drive(&mut board, stdin.lock(), &mut stdout.lock(), args.json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use learnstreak_core::{LearningGoal, StreakCounters};

    fn board() -> ProgressBoard {
        ProgressBoard::new(
            LearningGoal::default(),
            StreakCounters::default(),
            CalendarNavigator::starting_on(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()),
        )
    }

    fn json_lines(script: &str) -> Vec<serde_json::Value> {
        let mut b = board();
        let mut out = Vec::new();
        drive(&mut b, script.as_bytes(), &mut out, true).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn json_session_reports_events_and_final_snapshot() {
        let lines = json_lines("log\nlog\nfreeze\n");
        let kinds: Vec<_> = lines.iter().map(|v| v["type"].as_str().unwrap()).collect();
        assert_eq!(kinds, ["day_logged", "day_unlogged", "day_frozen", "state_snapshot"]);
        let snap = &lines[3]["snapshot"];
        assert_eq!(snap["streak_count"], 11);
        assert_eq!(snap["freeze_count"], 3);
        assert_eq!(snap["current_day_state"], "frozen");
    }

    #[test]
    fn rejected_command_prints_no_op() {
        let lines = json_lines("timeframe week\nfreeze\n");
        assert_eq!(lines[1]["type"], "no_op");
        assert_eq!(lines[1]["command"], "freeze");
    }

    #[test]
    fn bad_lines_are_skipped_and_quit_stops() {
        let lines = json_lines("jump\n\nday +1\nquit\nlog\n");
        let kinds: Vec<_> = lines.iter().map(|v| v["type"].as_str().unwrap()).collect();
        assert_eq!(kinds, ["error", "day_navigated", "state_snapshot"]);
        assert_eq!(lines[0]["command"], "jump");
        assert_eq!(lines[0]["message"], "Unknown command 'jump'");
        assert_eq!(lines[2]["snapshot"]["streak_count"], 10);
    }

    #[test]
    fn control_words_ignore_case() {
        let lines = json_lines("Show
log
QUIT
log
");
        let kinds: Vec<_> = lines.iter().map(|v| v["type"].as_str().unwrap()).collect();
        assert_eq!(kinds, ["state_snapshot", "day_logged", "state_snapshot"]);
        assert_eq!(lines[2]["snapshot"]["streak_count"], 11);
    }

    #[test]
    fn text_session_renders_board() {
        let mut b = board();
        let mut out = Vec::new();
        drive(&mut b, "subject Rust\n".as_bytes(), &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("subject set to 'Rust'"));
        assert!(text.contains("Learning Rust"));
    }
}
