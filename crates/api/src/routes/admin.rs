use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Moderation routes. Each handler enforces Basic auth itself.
///
/// ```text
/// GET         /admin           list_pending
/// POST        /admin/approve   approve
/// GET, POST   /admin/rotate    rotate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin", get(admin::list_pending))
        .route("/admin/approve", post(admin::approve))
        .route("/admin/rotate", get(admin::rotate).post(admin::rotate))
}
