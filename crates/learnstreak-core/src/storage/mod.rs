mod config;

pub use config::{Config, GoalConfig, SeedConfig};

use std::path::PathBuf;

use crate::error::Result;

/// Returns the learnstreak data directory, creating it if needed.
///
/// `LEARNSTREAK_HOME` overrides the location outright. Otherwise it is
/// `~/.config/learnstreak`, or `~/.config/learnstreak-dev` when
/// `LEARNSTREAK_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("LEARNSTREAK_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("LEARNSTREAK_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("learnstreak-dev")
            } else {
                base_dir.join("learnstreak")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
