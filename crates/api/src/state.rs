use std::sync::Arc;

use crate::config::ServerConfig;
use crate::rotation::CurrentIdea;
use crate::views::Templates;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: hourlypitch_db::DbPool,
    /// Server configuration, including the admin secret.
    pub config: Arc<ServerConfig>,
    /// Page templates parsed at startup.
    pub templates: Arc<Templates>,
    /// The idea shown on the landing page.
    pub current: Arc<CurrentIdea>,
}
