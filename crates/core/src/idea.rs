//! Idea lifecycle and boot-time seeding rules.
//!
//! An idea moves `Pending -> Approved -> Shown` and never back. The database
//! stores this as two nullable timestamp columns; [`IdeaState`] is the typed
//! view of those columns.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;
use crate::types::UnixTimestamp;

/// Moderation and rotation state of a single idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum IdeaState {
    /// Submitted, awaiting admin review.
    Pending,
    /// Approved and waiting in the rotation pool.
    Approved { approved_at: UnixTimestamp },
    /// Has occupied the public slot; never rotated in again.
    Shown {
        approved_at: UnixTimestamp,
        shown_at: UnixTimestamp,
    },
}

impl IdeaState {
    /// Derive the state from the `approved` / `shown` columns.
    ///
    /// `shown` without `approved` is rejected by the table's CHECK constraint,
    /// so that combination is reported as `Pending`.
    pub fn from_columns(approved: Option<UnixTimestamp>, shown: Option<UnixTimestamp>) -> Self {
        match (approved, shown) {
            (Some(approved_at), Some(shown_at)) => IdeaState::Shown {
                approved_at,
                shown_at,
            },
            (Some(approved_at), None) => IdeaState::Approved { approved_at },
            (None, _) => IdeaState::Pending,
        }
    }

    /// Whether the idea may be picked by the next rotation.
    pub fn is_rotation_candidate(&self) -> bool {
        matches!(self, IdeaState::Approved { .. })
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, IdeaState::Pending)
    }
}

/// Which approved idea becomes current when the process starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedStrategy {
    /// Order approved ideas by `shown` ascending with never-shown ideas
    /// first, then by id. Matches the historical selection, which favours an
    /// approved idea that has never been displayed over the one that was
    /// displayed most recently.
    #[default]
    Legacy,
    /// The approved idea with the latest `shown` timestamp, or the oldest
    /// approved idea when nothing has been shown yet.
    MostRecentlyShown,
}

impl SeedStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeedStrategy::Legacy => "legacy",
            SeedStrategy::MostRecentlyShown => "most-recently-shown",
        }
    }
}

impl fmt::Display for SeedStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeedStrategy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(SeedStrategy::Legacy),
            "most-recently-shown" | "most_recently_shown" => Ok(SeedStrategy::MostRecentlyShown),
            other => Err(CoreError::InvalidConfig(format!(
                "Unknown seed strategy '{other}'. Must be one of: legacy, most-recently-shown"
            ))),
        }
    }
}
