use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::goal::Timeframe;

/// A user action on the progress board.
///
/// Day-targeting commands act on the board's current date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "arg", rename_all = "snake_case")]
pub enum Command {
    SetSubject(String),
    SetTimeframe(Timeframe),
    LogDay,
    FreezeDay,
    ResetDay,
    NavigateMonth(i32),
    NavigateDay(i64),
    AlignWeek,
}

/// Parses one line of the session grammar:
///
/// ```text
/// log | freeze | reset | align
/// month <+/-n> | day <+/-n>
/// subject <text...> | timeframe <week|month|year>
/// ```
impl FromStr for Command {
    type Err = ValidationError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "log" => Ok(Command::LogDay),
            "freeze" => Ok(Command::FreezeDay),
            "reset" => Ok(Command::ResetDay),
            "align" => Ok(Command::AlignWeek),
            "subject" => Ok(Command::SetSubject(rest.to_string())),
            "timeframe" => Ok(Command::SetTimeframe(rest.parse()?)),
            "month" => Ok(Command::NavigateMonth(parse_delta("month", rest)?)),
            "day" => Ok(Command::NavigateDay(parse_delta("day", rest)?)),
            _ => Err(ValidationError::UnknownCommand(line.to_string())),
        }
    }
}

fn parse_delta<T: FromStr>(field: &str, raw: &str) -> Result<T, ValidationError> {
    raw.parse().map_err(|_| ValidationError::InvalidValue {
        field: field.to_string(),
        message: format!("expected a signed integer, got '{raw}'"),
    })
}
