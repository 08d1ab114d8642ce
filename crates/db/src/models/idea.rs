use hourlypitch_core::idea::IdeaState;
use hourlypitch_core::types::{DbId, UnixTimestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `ideas` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Idea {
    pub id: DbId,
    pub pitch: String,
    pub created: UnixTimestamp,
    pub approved: Option<UnixTimestamp>,
    pub shown: Option<UnixTimestamp>,
}

impl Idea {
    /// Typed view of the `approved` / `shown` columns.
    pub fn state(&self) -> IdeaState {
        IdeaState::from_columns(self.approved, self.shown)
    }
}
