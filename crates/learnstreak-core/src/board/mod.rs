mod command;
mod progress;

pub use command::Command;
pub use progress::{DayCell, ProgressBoard, ProgressSnapshot};
