pub mod admin;
pub mod health;
pub mod public;

use axum::Router;

use crate::state::AppState;

/// Build the page and moderation route tree.
///
/// `/health` is mounted separately by the router builder.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(public::router())
        .merge(admin::router())
}
