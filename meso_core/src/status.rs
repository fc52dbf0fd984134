//! Status groupings used to decide where a user lands.

use crate::DayStatus;
use serde::{Deserialize, Serialize};

/// Statuses meaning a workout has been opened but not wrapped up
pub const IN_PROGRESS_STATUSES: &[DayStatus] = &[DayStatus::Started, DayStatus::Partial];

/// Terminal statuses
pub const FINISHED_STATUSES: &[DayStatus] = &[DayStatus::Complete, DayStatus::Skipped];

/// The in-progress and finished subsets of [`DayStatus`]
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusSets {
    #[serde(default = "default_in_progress")]
    pub in_progress: Vec<DayStatus>,

    #[serde(default = "default_finished")]
    pub finished: Vec<DayStatus>,
}

impl Default for StatusSets {
    fn default() -> Self {
        Self {
            in_progress: default_in_progress(),
            finished: default_finished(),
        }
    }
}

fn default_in_progress() -> Vec<DayStatus> {
    IN_PROGRESS_STATUSES.to_vec()
}

fn default_finished() -> Vec<DayStatus> {
    FINISHED_STATUSES.to_vec()
}

impl StatusSets {
    pub fn is_in_progress(&self, status: DayStatus) -> bool {
        self.in_progress.contains(&status)
    }

    pub fn is_finished(&self, status: DayStatus) -> bool {
        self.finished.contains(&status)
    }

    /// Statuses listed in both subsets, which makes resolution ambiguous
    pub fn overlap(&self) -> Vec<DayStatus> {
        self.in_progress
            .iter()
            .filter(|s| self.finished.contains(*s))
            .copied()
            .collect()
    }
}
