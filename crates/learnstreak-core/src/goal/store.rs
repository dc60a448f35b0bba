use serde::{Deserialize, Serialize};
use tracing::info;

use super::timeframe::Timeframe;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningGoal {
    /// What the user wants to learn. May be empty.
    pub subject: String,
    pub timeframe: Timeframe,
}

impl Default for LearningGoal {
    fn default() -> Self {
        Self {
            subject: "Swift".into(),
            timeframe: Timeframe::Month,
        }
    }
}

/// Holds the learning goal and the freeze allowance derived from its timeframe.
///
/// Serialized as the bare [`LearningGoal`]. The allowance is recomputed on
/// deserialization and never read from input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "LearningGoal", into = "LearningGoal")]
pub struct GoalStore {
    goal: LearningGoal,
    total_freezes_allowed: u32,
}

impl GoalStore {
    pub fn new(goal: LearningGoal) -> Self {
        let total_freezes_allowed = goal.timeframe.freeze_allowance();
        Self {
            goal,
            total_freezes_allowed,
        }
    }

    pub fn goal(&self) -> &LearningGoal {
        &self.goal
    }

    pub fn subject(&self) -> &str {
        &self.goal.subject
    }

    pub fn timeframe(&self) -> Timeframe {
        self.goal.timeframe
    }

    pub fn total_freezes_allowed(&self) -> u32 {
        self.total_freezes_allowed
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.goal.subject = subject.into();
        info!(subject = %self.goal.subject, "learning subject updated");
    }

    /// Switch timeframe and return the recomputed allowance.
    pub fn set_timeframe(&mut self, timeframe: Timeframe) -> u32 {
        self.goal.timeframe = timeframe;
        self.total_freezes_allowed = timeframe.freeze_allowance();
        info!(
            %timeframe,
            freezes_allowed = self.total_freezes_allowed,
            "timeframe updated"
        );
        self.total_freezes_allowed
    }
}

impl Default for GoalStore {
    fn default() -> Self {
        Self::new(LearningGoal::default())
    }
}

impl From<LearningGoal> for GoalStore {
    fn from(goal: LearningGoal) -> Self {
        Self::new(goal)
    }
}

impl From<GoalStore> for LearningGoal {
    fn from(store: GoalStore) -> Self {
        store.goal
    }
}
