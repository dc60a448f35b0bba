mod store;
mod timeframe;

pub use store::{GoalStore, LearningGoal};
pub use timeframe::{freeze_allowance_for_label, Timeframe, FALLBACK_FREEZE_ALLOWANCE};
