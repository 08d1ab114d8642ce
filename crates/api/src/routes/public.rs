use axum::routing::{get, post};
use axum::Router;

use crate::handlers::public;
use crate::state::AppState;

/// Public pages.
///
/// ```text
/// GET    /              index
/// GET    /submit        submit_form
/// POST   /submit-save   submit_save
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(public::index))
        .route("/submit", get(public::submit_form))
        .route("/submit-save", post(public::submit_save))
}
