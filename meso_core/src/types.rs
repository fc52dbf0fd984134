//! Core domain types for mesocycle planning.
//!
//! These mirror the payloads handed over by the data-fetching layer:
//! - Mesocycles made of weeks made of days
//! - Day lifecycle status
//! - Planned exercise slots tagged with a muscle group

use serde::{Deserialize, Serialize};

// ============================================================================
// Day Status
// ============================================================================

/// Lifecycle stage of a single workout day
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Pending,
    Ready,
    Started,
    Partial,
    Complete,
    Skipped,
    /// Any status string this build does not know about
    #[serde(other)]
    Unknown,
}

impl DayStatus {
    /// Stable lowercase name, as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Pending => "pending",
            DayStatus::Ready => "ready",
            DayStatus::Started => "started",
            DayStatus::Partial => "partial",
            DayStatus::Complete => "complete",
            DayStatus::Skipped => "skipped",
            DayStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Planned Slots, Days, Weeks
// ============================================================================

/// Muscle group identifier; `None` is a group of its own
pub type MuscleGroupId = Option<u64>;

/// One planned exercise slot within a day
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlannedSlot {
    #[serde(default)]
    pub muscle_group_id: MuscleGroupId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<u64>,
}

impl PlannedSlot {
    pub fn new(muscle_group_id: MuscleGroupId) -> Self {
        Self {
            muscle_group_id,
            exercise_id: None,
        }
    }
}

/// A single workout day
///
/// `week` and `position` are zero-based and match the day's index in the
/// containing mesocycle.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    pub status: DayStatus,
    pub week: usize,
    pub position: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, rename = "exercises", alias = "slots")]
    pub slots: Vec<PlannedSlot>,
}

/// An ordered run of days
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Week {
    #[serde(default)]
    pub days: Vec<Day>,
}

// ============================================================================
// Mesocycle
// ============================================================================

/// A multi-week training plan
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Mesocycle {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub weeks: Vec<Week>,
}

impl Mesocycle {
    /// All days in (week, position) order
    pub fn days(&self) -> impl Iterator<Item = &Day> {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }

    /// Look up a day by zero-based week and position
    pub fn day(&self, week: usize, position: usize) -> Option<&Day> {
        self.weeks.get(week)?.days.get(position)
    }
}
