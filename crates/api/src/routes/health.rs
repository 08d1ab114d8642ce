//! Liveness probe for the idea board.
//!
//! ```text
//! GET    /health        service_health
//! ```
//!
//! Always answers 200. A store that fails `SELECT 1` only downgrades the
//! reported status, so the pages can keep serving the in-memory idea.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Overall status reported by `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardStatus {
    Ok,
    Degraded,
}

impl BoardStatus {
    fn from_store(store_reachable: bool) -> Self {
        if store_reachable {
            BoardStatus::Ok
        } else {
            BoardStatus::Degraded
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ServiceHealth {
    pub status: BoardStatus,
    pub version: &'static str,
    /// Whether the ideas store answered.
    pub db_healthy: bool,
}

async fn service_health(State(state): State<AppState>) -> Json<ServiceHealth> {
    let store_reachable = match hourlypitch_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Ideas store unreachable");
            false
        }
    };

    Json(ServiceHealth {
        status: BoardStatus::from_store(store_reachable),
        version: env!("CARGO_PKG_VERSION"),
        db_healthy: store_reachable,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(service_health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_follows_store() {
        assert_eq!(BoardStatus::from_store(true), BoardStatus::Ok);
        assert_eq!(BoardStatus::from_store(false), BoardStatus::Degraded);
    }
}
