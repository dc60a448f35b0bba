use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Allowance used for any timeframe label outside the known set.
pub const FALLBACK_FREEZE_ALLOWANCE: u32 = 6;

/// Duration class of a learning goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Week,
    #[default]
    Month,
    Year,
}

impl Timeframe {
    pub const ALL: [Timeframe; 3] = [Timeframe::Week, Timeframe::Month, Timeframe::Year];

    /// Number of freezes a goal of this timeframe may spend.
    pub fn freeze_allowance(self) -> u32 {
        match self {
            Timeframe::Week => 2,
            Timeframe::Month => 6,
            Timeframe::Year => 12,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Timeframe::Week => "Week",
            Timeframe::Month => "Month",
            Timeframe::Year => "Year",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Timeframe {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Timeframe::ALL
            .into_iter()
            .find(|tf| tf.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::UnknownTimeframe(trimmed.to_string()))
    }
}

/// Freeze allowance for a free-form timeframe label.
///
/// Unknown labels fall back to [`FALLBACK_FREEZE_ALLOWANCE`].
pub fn freeze_allowance_for_label(label: &str) -> u32 {
    label
        .parse::<Timeframe>()
        .map(Timeframe::freeze_allowance)
        .unwrap_or(FALLBACK_FREEZE_ALLOWANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowance_table() {
        assert_eq!(Timeframe::Week.freeze_allowance(), 2);
        assert_eq!(Timeframe::Month.freeze_allowance(), 6);
        assert_eq!(Timeframe::Year.freeze_allowance(), 12);
    }

    #[test]
    fn unknown_label_falls_back() {
        assert_eq!(freeze_allowance_for_label("Fortnight"), 6);
        assert_eq!(freeze_allowance_for_label(""), 6);
        assert_eq!(freeze_allowance_for_label("year"), 12);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("WEEK".parse::<Timeframe>(), Ok(Timeframe::Week));
        assert_eq!(" month ".parse::<Timeframe>(), Ok(Timeframe::Month));
        assert_eq!(
            "decade".parse::<Timeframe>(),
            Err(ValidationError::UnknownTimeframe("decade".into()))
        );
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Timeframe::Year).unwrap(), "\"year\"");
    }
}
