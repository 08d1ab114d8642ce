//! Repository for the `ideas` table.

use hourlypitch_core::idea::SeedStrategy;
use hourlypitch_core::pitch::Pitch;
use hourlypitch_core::types::{now_unix, DbId, UnixTimestamp};
use sqlx::SqlitePool;

use crate::models::idea::Idea;

/// Column list for `ideas` queries.
const COLUMNS: &str = "id, pitch, created, approved, shown";

/// Provides query operations for submitted ideas.
pub struct IdeaRepo;

impl IdeaRepo {
    /// Insert a new pending idea and return its id.
    pub async fn create(pool: &SqlitePool, pitch: &Pitch) -> Result<DbId, sqlx::Error> {
        let result = sqlx::query("INSERT INTO ideas (pitch, created) VALUES (?, ?)")
            .bind(pitch.as_str())
            .bind(now_unix())
            .execute(pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Find an idea by id.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Idea>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ideas WHERE id = ?");
        sqlx::query_as::<_, Idea>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List ideas awaiting moderation, oldest first.
    pub async fn list_pending(pool: &SqlitePool) -> Result<Vec<Idea>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ideas WHERE approved IS NULL ORDER BY id ASC");
        sqlx::query_as::<_, Idea>(&query).fetch_all(pool).await
    }

    /// Number of approved ideas that have not been shown yet.
    pub async fn count_approved_unshown(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM ideas WHERE approved IS NOT NULL AND shown IS NULL",
        )
        .fetch_one(pool)
        .await
    }

    /// Pick one approved, never-shown idea uniformly at random.
    ///
    /// Returns `None` when the rotation pool is empty.
    pub async fn pick_random_approved_unshown(
        pool: &SqlitePool,
    ) -> Result<Option<Idea>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ideas \
             WHERE approved IS NOT NULL AND shown IS NULL \
             ORDER BY RANDOM() \
             LIMIT 1"
        );
        sqlx::query_as::<_, Idea>(&query).fetch_optional(pool).await
    }

    /// Select the idea that should be current when the process starts.
    ///
    /// Only approved ideas are considered. Ties are broken by id so the same
    /// store state always yields the same idea.
    pub async fn find_boot_seed(
        pool: &SqlitePool,
        strategy: SeedStrategy,
    ) -> Result<Option<Idea>, sqlx::Error> {
        // SQLite sorts NULL before any integer in ascending order.
        let order_by = match strategy {
            SeedStrategy::Legacy => "shown ASC, id ASC",
            SeedStrategy::MostRecentlyShown => "shown IS NULL ASC, shown DESC, id ASC",
        };
        let query = format!(
            "SELECT {COLUMNS} FROM ideas \
             WHERE approved IS NOT NULL \
             ORDER BY {order_by} \
             LIMIT 1"
        );
        sqlx::query_as::<_, Idea>(&query).fetch_optional(pool).await
    }

    /// Set the approval timestamp, overwriting any previous value.
    ///
    /// Returns the number of rows touched; an unknown id is a silent no-op.
    pub async fn mark_approved(
        pool: &SqlitePool,
        id: DbId,
        at: UnixTimestamp,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE ideas SET approved = ? WHERE id = ?")
            .bind(at)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Set the shown timestamp, overwriting any previous value.
    ///
    /// The table rejects this for an idea that has not been approved.
    pub async fn mark_shown(
        pool: &SqlitePool,
        id: DbId,
        at: UnixTimestamp,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE ideas SET shown = ? WHERE id = ?")
            .bind(at)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
