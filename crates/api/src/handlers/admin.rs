//! Handlers for the moderation panel.
//!
//! Every handler here takes [`RequireAdmin`] first, so an unauthenticated
//! request is answered with a 401 before any store access happens.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect};
use axum::Form;
use hourlypitch_core::types::{now_unix, DbId};
use hourlypitch_db::repositories::IdeaRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::basic_auth::RequireAdmin;
use crate::rotation::RotationOutcome;
use crate::state::AppState;

/// Form body for `POST /admin/approve`.
///
/// The id is taken as text so that a malformed value is handled like an
/// unknown id instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct ApproveForm {
    #[serde(default)]
    pub id: String,
}

/// GET /admin
///
/// List ideas awaiting moderation.
pub async fn list_pending(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Html<String>> {
    let pending = IdeaRepo::list_pending(&state.pool).await?;
    let awaiting_rotation = IdeaRepo::count_approved_unshown(&state.pool).await?;
    Ok(state.templates.admin(&pending, awaiting_rotation)?)
}

/// POST /admin/approve
///
/// Approve an idea by id and return to the moderation list. Unknown or
/// malformed ids, and store errors, leave everything unchanged.
pub async fn approve(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Form(form): Form<ApproveForm>,
) -> Redirect {
    match form.id.trim().parse::<DbId>() {
        Ok(id) => match IdeaRepo::mark_approved(&state.pool, id, now_unix()).await {
            Ok(0) => tracing::warn!(idea_id = id, "Approve requested for unknown idea"),
            Ok(_) => tracing::info!(idea_id = id, "Idea approved"),
            Err(e) => tracing::error!(idea_id = id, error = %e, "Failed to approve idea"),
        },
        Err(_) => tracing::warn!(raw_id = %form.id, "Approve requested with malformed id"),
    }

    Redirect::to("/admin")
}

/// GET|POST /admin/rotate
///
/// Rotate a new idea into the public slot. Responds with a short status
/// string: `Ok`, `Keeping old`, or `Not Ok` (500) when the store fails.
pub async fn rotate(_admin: RequireAdmin, State(state): State<AppState>) -> impl IntoResponse {
    match state.current.rotate(&state.pool).await {
        Ok(RotationOutcome::Rotated(_)) => (StatusCode::OK, "Ok"),
        Ok(RotationOutcome::Unchanged) => (StatusCode::OK, "Keeping old"),
        Err(e) => {
            tracing::error!(error = %e, "Rotation failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Not Ok")
        }
    }
}
