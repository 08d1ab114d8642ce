//! Handlers for the public pages: the current idea and the submission form.

use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use axum::Form;
use hourlypitch_core::pitch::Pitch;
use hourlypitch_db::repositories::IdeaRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;
use crate::views::SubmitStatus;

/// Query parameters for `GET /submit`.
#[derive(Debug, Deserialize)]
pub struct SubmitQuery {
    pub msg: Option<String>,
}

/// Form body for `POST /submit-save`.
#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub pitch: String,
}

/// GET /
///
/// Render the current idea.
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let current = state.current.get().await;
    Ok(state.templates.index(current.as_ref())?)
}

/// GET /submit
///
/// Render the submission form, with a status banner when `?msg=` is set.
pub async fn submit_form(
    State(state): State<AppState>,
    Query(query): Query<SubmitQuery>,
) -> AppResult<Html<String>> {
    let status = query.msg.as_deref().and_then(SubmitStatus::from_flag);
    Ok(state.templates.submit(status)?)
}

/// POST /submit-save
///
/// Validate and store a pitch, then send the browser back to the form with
/// the outcome in `?msg=`. Store errors are logged and reported as a failed
/// submission.
pub async fn submit_save(
    State(state): State<AppState>,
    Form(form): Form<SubmitForm>,
) -> Redirect {
    let status = match Pitch::new(form.pitch) {
        Err(e) => {
            tracing::debug!(error = %e, "Rejected pitch");
            SubmitStatus::Rejected
        }
        Ok(pitch) => match IdeaRepo::create(&state.pool, &pitch).await {
            Ok(id) => {
                tracing::info!(idea_id = id, "Idea submitted");
                SubmitStatus::Saved
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save idea");
                SubmitStatus::Rejected
            }
        },
    };

    Redirect::to(&status.redirect_target())
}
