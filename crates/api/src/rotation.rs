//! The "current idea" slot and the rotation that refills it.
//!
//! The slot lives in [`crate::state::AppState`]. Reads from the landing page
//! take a shared lock; a rotation holds its own mutex for the whole
//! pick / mark-shown / swap sequence, so two concurrent rotations can never
//! both pick from the same pool snapshot.

use hourlypitch_core::idea::SeedStrategy;
use hourlypitch_core::types::now_unix;
use hourlypitch_db::models::idea::Idea;
use hourlypitch_db::repositories::IdeaRepo;
use hourlypitch_db::DbPool;
use tokio::sync::{Mutex, RwLock};

/// Result of a rotation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotationOutcome {
    /// A new idea was marked shown and is now current.
    Rotated(Idea),
    /// The pool was empty; the previous idea stays current.
    Unchanged,
}

/// The idea displayed on the landing page.
#[derive(Debug, Default)]
pub struct CurrentIdea {
    idea: RwLock<Option<Idea>>,
    rotation: Mutex<()>,
}

impl CurrentIdea {
    pub fn new(initial: Option<Idea>) -> Self {
        Self {
            idea: RwLock::new(initial),
            rotation: Mutex::new(()),
        }
    }

    /// Snapshot of the current idea.
    pub async fn get(&self) -> Option<Idea> {
        self.idea.read().await.clone()
    }

    /// Promote a random approved, unshown idea to current.
    ///
    /// The idea is marked shown in the store before the slot is swapped. On a
    /// store error nothing in memory changes.
    pub async fn rotate(&self, pool: &DbPool) -> Result<RotationOutcome, sqlx::Error> {
        let _guard = self.rotation.lock().await;

        let Some(mut next) = IdeaRepo::pick_random_approved_unshown(pool).await? else {
            tracing::info!("Rotation pool empty, keeping current idea");
            return Ok(RotationOutcome::Unchanged);
        };

        let shown_at = now_unix();
        IdeaRepo::mark_shown(pool, next.id, shown_at).await?;
        next.shown = Some(shown_at);

        *self.idea.write().await = Some(next.clone());
        tracing::info!(idea_id = next.id, "Rotated current idea");

        Ok(RotationOutcome::Rotated(next))
    }
}

/// Choose the idea that is current when the process starts.
///
/// A store error is logged and treated as "no current idea" so the server
/// still comes up.
pub async fn seed_current_idea(pool: &DbPool, strategy: SeedStrategy) -> Option<Idea> {
    match IdeaRepo::find_boot_seed(pool, strategy).await {
        Ok(Some(idea)) => {
            tracing::info!(idea_id = idea.id, %strategy, "Seeded current idea");
            Some(idea)
        }
        Ok(None) => {
            tracing::info!(%strategy, "No approved ideas, starting without a current idea");
            None
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load current idea, starting without one");
            None
        }
    }
}
